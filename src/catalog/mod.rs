//! Field catalogs and per-collection filter compilers
//!
//! Each collection has a closed catalog mapping its field selectors to
//! typed accessors. `FilterCompiler` runs the shared compiler over one
//! catalog: `to_filter` for predicates, `to_sort_accessor` for ordering.
//!
//! Catalogs:
//! - `TaskCatalog` over `TaskData`
//! - `SessionCatalog` over `SessionData`
//! - `ResultCatalog` over `ResultData`
//! - `PartitionCatalog` over `PartitionData`
//! - `ApplicationCatalog` over `TaskData` (application columns of the options)

mod application;
mod options;
mod partition;
mod result;
mod session;
mod task;

pub use application::ApplicationCatalog;
pub use options::HasTaskOptions;
pub use partition::PartitionCatalog;
pub use result::ResultCatalog;
pub use session::SessionCatalog;
pub use task::TaskCatalog;

use std::marker::PhantomData;

use crate::api::{Filters, Sort, SortDirection};
use crate::compiler::{compile_filters, Accessor, CompileError, CompileResult, Predicate};
use crate::model::StatusValue;

/// Closed mapping from a collection's field selectors to accessors
pub trait FieldCatalog {
    /// Entity the accessors read from
    type Entity;
    /// Wire field selector
    type Field;
    /// Status enum accepted by status conditions
    type Status: StatusValue;

    /// Collection name, for logs and explain output
    const COLLECTION: &'static str;

    /// Resolves a selector to its accessor.
    ///
    /// Unknown or unspecified selectors fail with `InvalidField`.
    fn resolve(field: &Self::Field) -> CompileResult<Accessor<Self::Entity>>;
}

/// Filter and sort compiler for one collection
pub struct FilterCompiler<C> {
    _catalog: PhantomData<fn() -> C>,
}

pub type TaskFilterCompiler = FilterCompiler<TaskCatalog>;
pub type SessionFilterCompiler = FilterCompiler<SessionCatalog>;
pub type ResultFilterCompiler = FilterCompiler<ResultCatalog>;
pub type PartitionFilterCompiler = FilterCompiler<PartitionCatalog>;
pub type ApplicationFilterCompiler = FilterCompiler<ApplicationCatalog>;

impl<C: FieldCatalog> FilterCompiler<C> {
    pub fn new() -> Self {
        Self {
            _catalog: PhantomData,
        }
    }

    /// Compiles a wire filter into a predicate over the collection's entity.
    ///
    /// `None` and an empty filter both match everything.
    pub fn to_filter(
        &self,
        filters: Option<&Filters<C::Field, C::Status>>,
    ) -> CompileResult<Predicate<C::Entity>> {
        compile_filters(filters, &C::resolve)
    }

    /// Resolves a sort selector to its ordering key
    pub fn to_sort_accessor(&self, field: &C::Field) -> CompileResult<Accessor<C::Entity>> {
        C::resolve(field)
    }

    /// Resolves an optional sort message to an accessor and direction.
    ///
    /// A sort message without a field is rejected.
    pub fn to_sort(
        &self,
        sort: Option<&Sort<C::Field>>,
    ) -> CompileResult<Option<(Accessor<C::Entity>, SortDirection)>> {
        let sort = match sort {
            Some(sort) => sort,
            None => return Ok(None),
        };
        let field = sort
            .field
            .as_ref()
            .ok_or_else(|| CompileError::invalid_field("sort field is not set"))?;

        Ok(Some((self.to_sort_accessor(field)?, sort.direction)))
    }
}

impl<C: FieldCatalog> Default for FilterCompiler<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for FilterCompiler<C> {
    fn clone(&self) -> Self {
        Self {
            _catalog: PhantomData,
        }
    }
}

impl<C> Copy for FilterCompiler<C> {}

impl<C: FieldCatalog> std::fmt::Debug for FilterCompiler<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterCompiler")
            .field("collection", &C::COLLECTION)
            .finish()
    }
}
