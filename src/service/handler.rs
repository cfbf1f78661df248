//! List services
//!
//! One entry point per collection. Each request goes through the same
//! pipeline:
//!
//! 1. Resolve the page size against configuration
//! 2. Compile filter and sort for the collection's catalog
//! 3. Execute against the table
//! 4. Wrap the page in a response
//!
//! Rejected requests are logged at warn and returned to the caller.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::api::{
    ListApplicationsRequest, ListPartitionsRequest, ListRequest, ListResponse,
    ListResultsRequest, ListSessionsRequest, ListTasksRequest, SessionFilter, TaskFilter,
};
use crate::catalog::{
    ApplicationCatalog, FieldCatalog, FilterCompiler, PartitionCatalog, ResultCatalog,
    SessionCatalog, TaskCatalog,
};
use crate::compiler::Predicate;
use crate::executor::{list_applications, Page, Table};
use crate::model::{Application, PartitionData, ResultData, SessionData, TaskData};

use super::config::ServiceConfig;
use super::errors::{ServiceError, ServiceResult};

/// Rows served by the list services
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub tasks: Table<TaskData>,
    pub sessions: Table<SessionData>,
    pub results: Table<ResultData>,
    pub partitions: Table<PartitionData>,
}

/// Validated paging of one request
#[derive(Debug, Clone, Copy)]
struct Paging {
    page: usize,
    page_size: usize,
}

/// List services over an in-memory dataset
#[derive(Debug, Clone)]
pub struct QueryService {
    config: ServiceConfig,
    data: Dataset,
}

impl QueryService {
    pub fn new(config: ServiceConfig, data: Dataset) -> Self {
        Self { config, data }
    }

    pub fn list_tasks(&self, request: &ListTasksRequest) -> ServiceResult<ListResponse<TaskData>> {
        self.list::<TaskCatalog>(&self.data.tasks, request)
    }

    pub fn list_sessions(
        &self,
        request: &ListSessionsRequest,
    ) -> ServiceResult<ListResponse<SessionData>> {
        self.list::<SessionCatalog>(&self.data.sessions, request)
    }

    pub fn list_results(
        &self,
        request: &ListResultsRequest,
    ) -> ServiceResult<ListResponse<ResultData>> {
        self.list::<ResultCatalog>(&self.data.results, request)
    }

    pub fn list_partitions(
        &self,
        request: &ListPartitionsRequest,
    ) -> ServiceResult<ListResponse<PartitionData>> {
        self.list::<PartitionCatalog>(&self.data.partitions, request)
    }

    /// Lists the distinct applications of the tasks matching the filter
    pub fn list_applications(
        &self,
        request: &ListApplicationsRequest,
    ) -> ServiceResult<ListResponse<Application>> {
        let collection = ApplicationCatalog::COLLECTION;
        let result = self.paging(request.page, request.page_size).and_then(|paging| {
            let compiler = FilterCompiler::<ApplicationCatalog>::new();
            let predicate = compiler.to_filter(request.filters.as_ref())?;
            let sort = compiler.to_sort(request.sort.as_ref())?;
            debug!(
                collection,
                conditions = predicate.condition_count(),
                filter = %predicate,
                sort = sort.as_ref().map(|(_, direction)| direction.as_str()),
                "compiled list filter"
            );

            let page = list_applications(
                &self.data.tasks,
                &predicate,
                sort.as_ref().map(|(accessor, direction)| (accessor, *direction)),
                paging.page,
                paging.page_size,
            );
            Ok(Self::respond(collection, page, paging))
        });
        Self::log_rejection(collection, result)
    }

    /// Lists tasks with a legacy inclusion/exclusion filter
    pub fn list_tasks_legacy(
        &self,
        filter: &TaskFilter,
        page: usize,
        page_size: usize,
    ) -> ServiceResult<ListResponse<TaskData>> {
        let result = self.paging(page, page_size).and_then(|paging| {
            let predicate = TaskCatalog::legacy_filter(filter)?;
            Ok(self.execute(TaskCatalog::COLLECTION, &self.data.tasks, &predicate, paging))
        });
        Self::log_rejection(TaskCatalog::COLLECTION, result)
    }

    /// Lists sessions with a legacy inclusion/exclusion filter
    pub fn list_sessions_legacy(
        &self,
        filter: &SessionFilter,
        page: usize,
        page_size: usize,
    ) -> ServiceResult<ListResponse<SessionData>> {
        let result = self.paging(page, page_size).and_then(|paging| {
            let predicate = SessionCatalog::legacy_filter(filter)?;
            Ok(self.execute(SessionCatalog::COLLECTION, &self.data.sessions, &predicate, paging))
        });
        Self::log_rejection(SessionCatalog::COLLECTION, result)
    }

    fn list<C>(
        &self,
        table: &Table<C::Entity>,
        request: &ListRequest<C::Field, C::Status>,
    ) -> ServiceResult<ListResponse<C::Entity>>
    where
        C: FieldCatalog,
        C::Entity: Clone,
    {
        let result = self.paging(request.page, request.page_size).and_then(|paging| {
            let compiler = FilterCompiler::<C>::new();
            let predicate = compiler.to_filter(request.filters.as_ref())?;
            let sort = compiler.to_sort(request.sort.as_ref())?;
            debug!(
                collection = C::COLLECTION,
                conditions = predicate.condition_count(),
                filter = %predicate,
                sort = sort.as_ref().map(|(_, direction)| direction.as_str()),
                "compiled list filter"
            );

            let page = table.list(
                &predicate,
                sort.as_ref().map(|(accessor, direction)| (accessor, *direction)),
                paging.page,
                paging.page_size,
            );
            Ok(Self::respond(C::COLLECTION, page.map(Clone::clone), paging))
        });
        Self::log_rejection(C::COLLECTION, result)
    }

    fn execute<E: Clone>(
        &self,
        collection: &'static str,
        table: &Table<E>,
        predicate: &Predicate<E>,
        paging: Paging,
    ) -> ListResponse<E> {
        let page = table.list(predicate, None, paging.page, paging.page_size);
        Self::respond(collection, page.map(Clone::clone), paging)
    }

    fn paging(&self, page: usize, page_size: usize) -> ServiceResult<Paging> {
        let page_size = self.config.page_size(page_size)?;
        if page.checked_mul(page_size).is_none() {
            return Err(ServiceError::InvalidPage { page, page_size });
        }
        Ok(Paging { page, page_size })
    }

    fn respond<T>(collection: &'static str, page: Page<T>, paging: Paging) -> ListResponse<T> {
        info!(
            collection,
            page = paging.page,
            page_size = paging.page_size,
            returned = page.len(),
            total = page.total,
            "list completed"
        );
        ListResponse {
            items: page.items,
            page: paging.page,
            page_size: paging.page_size,
            total: page.total,
        }
    }

    fn log_rejection<T>(collection: &'static str, result: ServiceResult<T>) -> ServiceResult<T> {
        if let Err(err) = &result {
            warn!(
                collection,
                code = err.code(),
                status = err.status_code().as_str(),
                error = %err,
                "list request rejected"
            );
        }
        result
    }
}
