//! In-memory table adapter
//!
//! Executes compiled predicates and sort accessors over a set of rows.
//!
//! # Execution flow
//!
//! 1. Filter rows with the predicate
//! 2. Apply sort (if specified)
//! 3. Count matches
//! 4. Slice the requested page

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::api::SortDirection;
use crate::compiler::{Accessor, Predicate};
use crate::model::{Application, TaskData};

use super::result::{paginate, Page};
use super::sorter::RowSorter;

/// A compiled ordering key
pub type SortKey<'a, E> = (&'a Accessor<E>, SortDirection);

/// Rows of one collection, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table<E> {
    rows: Vec<E>,
}

impl<E> Table<E> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn insert(&mut self, row: E) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows matching `predicate`, in insertion order
    pub fn select<'a>(&'a self, predicate: &'a Predicate<E>) -> impl Iterator<Item = &'a E> + 'a {
        self.rows.iter().filter(move |row| predicate.matches(row))
    }

    /// Number of rows matching `predicate`
    pub fn count(&self, predicate: &Predicate<E>) -> usize {
        self.select(predicate).count()
    }

    /// Filters, orders and pages the table.
    ///
    /// `total` counts every match before paging. Without a sort key rows
    /// keep insertion order.
    pub fn list<'a>(
        &'a self,
        predicate: &'a Predicate<E>,
        sort: Option<SortKey<'_, E>>,
        page: usize,
        page_size: usize,
    ) -> Page<&'a E> {
        let mut rows: Vec<&E> = self.select(predicate).collect();
        if let Some((accessor, direction)) = sort {
            RowSorter::sort(&mut rows, accessor, direction);
        }
        paginate(rows, page, page_size)
    }
}

impl<E> Default for Table<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> From<Vec<E>> for Table<E> {
    fn from(rows: Vec<E>) -> Self {
        Self { rows }
    }
}

impl<E> FromIterator<E> for Table<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// Distinct applications of the tasks matching `predicate`.
///
/// Default order is name, version, namespace, service ascending; a sort key
/// reorders stably on top of it.
pub fn list_applications(
    tasks: &Table<TaskData>,
    predicate: &Predicate<TaskData>,
    sort: Option<SortKey<'_, TaskData>>,
    page: usize,
    page_size: usize,
) -> Page<Application> {
    let mut seen = BTreeSet::new();
    let mut rows: Vec<(Application, &TaskData)> = Vec::new();
    for task in tasks.select(predicate) {
        let application = task.options.application();
        if seen.insert(application.clone()) {
            rows.push((application, task));
        }
    }
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    if let Some((accessor, direction)) = sort {
        RowSorter::sort_by(&mut rows, |row| row.1, accessor, direction);
    }

    paginate(rows, page, page_size).map(|(application, _)| application)
}
