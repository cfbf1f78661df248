//! List Service Tests
//!
//! Tests for the list pipeline over each collection:
//! - Filter, sort and paging applied in order, totals before paging
//! - Compile errors surface as InvalidArgument
//! - Legacy filters and application listing

use serde_json::json;

use taskgrid::api::{
    ListApplicationsRequest, ListResultsRequest, ListSessionsRequest, ListTasksRequest,
    SessionFilter, StatusSelection, TaskFilter,
};
use taskgrid::model::{TaskData, TaskOptions};
use taskgrid::service::{Dataset, QueryService, ServiceConfig, ServiceError, StatusCode};

// =============================================================================
// Helper Functions
// =============================================================================

fn dataset() -> Dataset {
    serde_json::from_value(json!({
        "tasks": [
            {"sessionId": "s1", "taskId": "t1", "status": "Completed",
             "options": {"priority": 1, "applicationName": "render", "applicationVersion": "1.0"}},
            {"sessionId": "s1", "taskId": "t2", "status": "Error",
             "options": {"priority": 5, "applicationName": "render", "applicationVersion": "2.0"}},
            {"sessionId": "s2", "taskId": "t3", "status": "Completed",
             "options": {"priority": 3, "applicationName": "encode", "applicationVersion": "1.0",
                         "options": {"team": "media"}}},
            {"sessionId": "s2", "taskId": "t4", "status": "Processing",
             "options": {"priority": 3, "applicationName": "render", "applicationVersion": "1.0"}}
        ],
        "sessions": [
            {"sessionId": "s1", "status": "Running", "partitionIds": ["default"]},
            {"sessionId": "s2", "status": "Cancelled", "partitionIds": ["gpu"]}
        ],
        "results": [
            {"sessionId": "s1", "resultId": "r1", "name": "out", "status": "Completed", "size": 10},
            {"sessionId": "s1", "resultId": "r2", "name": "log", "status": "Created", "size": 0},
            {"sessionId": "s2", "resultId": "r3", "name": "out", "status": "Completed", "size": 99}
        ]
    }))
    .unwrap()
}

fn service() -> QueryService {
    QueryService::new(ServiceConfig::default(), dataset())
}

fn task_ids(items: &[TaskData]) -> Vec<&str> {
    items.iter().map(|t| t.task_id.as_str()).collect()
}

// =============================================================================
// Task Listing Tests
// =============================================================================

/// Without filter or sort, every task is returned in insertion order.
#[test]
fn test_list_all_tasks() {
    let response = service().list_tasks(&ListTasksRequest::default()).unwrap();
    assert_eq!(task_ids(&response.items), vec!["t1", "t2", "t3", "t4"]);
    assert_eq!(response.total, 4);
    assert_eq!(response.page_size, 100);
}

/// Filter by status, sort by priority descending.
#[test]
fn test_filter_and_sort_tasks() {
    let request: ListTasksRequest = serde_json::from_value(json!({
        "page": 0,
        "pageSize": 10,
        "filters": {"or": [{"and": [
            {"field": {"taskSummaryField": "Status"},
             "condition": {"filterStatus": {"operator": "NotEqual", "value": "Error"}}}
        ]}]},
        "sort": {"field": {"taskOptionField": "Priority"}, "direction": "Desc"}
    }))
    .unwrap();

    let response = service().list_tasks(&request).unwrap();
    assert_eq!(task_ids(&response.items), vec!["t3", "t4", "t1"]);
    assert_eq!(response.total, 3);
}

/// Pages slice the sorted matches; total stays the full count.
#[test]
fn test_task_paging() {
    let request: ListTasksRequest = serde_json::from_value(json!({
        "page": 1,
        "pageSize": 3,
        "sort": {"field": {"taskSummaryField": "TaskId"}}
    }))
    .unwrap();

    let response = service().list_tasks(&request).unwrap();
    assert_eq!(task_ids(&response.items), vec!["t4"]);
    assert_eq!(response.total, 4);
    assert_eq!(response.page, 1);
}

/// Sorting by a free-form option key puts tasks without the key first.
#[test]
fn test_sort_by_generic_option() {
    let mut data = dataset();
    let mut tagged = TaskData::new("s1", "t5");
    tagged.options = TaskOptions::default().with_option("team", "infra");
    data.tasks.insert(tagged);
    let service = QueryService::new(ServiceConfig::default(), data);

    let ascending: ListTasksRequest = serde_json::from_value(json!({
        "sort": {"field": {"taskOptionGenericField": "team"}, "direction": "Asc"}
    }))
    .unwrap();
    let response = service.list_tasks(&ascending).unwrap();
    assert_eq!(task_ids(&response.items), vec!["t1", "t2", "t4", "t5", "t3"]);

    let descending: ListTasksRequest = serde_json::from_value(json!({
        "sort": {"field": {"taskOptionGenericField": "team"}, "direction": "Desc"}
    }))
    .unwrap();
    let response = service.list_tasks(&descending).unwrap();
    assert_eq!(task_ids(&response.items), vec!["t3", "t5", "t1", "t2", "t4"]);
}

/// A bad filter is an InvalidArgument, never an empty page.
#[test]
fn test_invalid_filter_is_invalid_argument() {
    let request: ListTasksRequest = serde_json::from_value(json!({
        "filters": {"or": [{"and": [
            {"field": {"taskSummaryField": "Unspecified"},
             "condition": {"filterString": {"operator": "Equal", "value": "t1"}}}
        ]}]}
    }))
    .unwrap();

    let err = service().list_tasks(&request).unwrap_err();
    assert!(matches!(err, ServiceError::Compile(_)));
    assert_eq!(err.status_code(), StatusCode::InvalidArgument);
}

/// Requests above the configured page size are rejected.
#[test]
fn test_page_size_limit_from_config() {
    let config = ServiceConfig {
        default_page_size: 2,
        max_page_size: 3,
    };
    let service = QueryService::new(config, dataset());

    let response = service.list_tasks(&ListTasksRequest::default()).unwrap();
    assert_eq!(response.items.len(), 2);
    assert_eq!(response.total, 4);

    let err = service.list_tasks(&ListTasksRequest::new(0, 4)).unwrap_err();
    assert_eq!(err.code(), "TASKGRID_PAGE_SIZE_EXCEEDED");
}

// =============================================================================
// Other Collections
// =============================================================================

/// Session filters over the session's own columns.
#[test]
fn test_list_sessions() {
    let request: ListSessionsRequest = serde_json::from_value(json!({
        "filters": {"or": [{"and": [
            {"field": {"sessionRawField": "PartitionIds"},
             "condition": {"filterArray": {"operator": "Contains", "value": "gpu"}}}
        ]}]}
    }))
    .unwrap();

    let response = service().list_sessions(&request).unwrap();
    assert_eq!(response.total, 1);
    assert_eq!(response.items[0].session_id, "s2");
}

/// Result filters with an OR of two groups.
#[test]
fn test_list_results() {
    let request: ListResultsRequest = serde_json::from_value(json!({
        "filters": {"or": [
            {"and": [{"field": {"resultRawField": "Size"},
                      "condition": {"filterNumber": {"operator": "GreaterThan", "value": 50}}}]},
            {"and": [{"field": {"resultRawField": "Name"},
                      "condition": {"filterString": {"operator": "Equal", "value": "log"}}}]}
        ]},
        "sort": {"field": {"resultRawField": "ResultId"}, "direction": "Desc"}
    }))
    .unwrap();

    let response = service().list_results(&request).unwrap();
    let ids: Vec<_> = response.items.iter().map(|r| r.result_id.as_str()).collect();
    assert_eq!(ids, vec!["r3", "r2"]);
}

/// Applications are the distinct tuples of the matching tasks.
#[test]
fn test_list_applications() {
    let all = service()
        .list_applications(&ListApplicationsRequest::default())
        .unwrap();
    let names: Vec<_> = all
        .items
        .iter()
        .map(|a| format!("{}:{}", a.name, a.version))
        .collect();
    assert_eq!(names, vec!["encode:1.0", "render:1.0", "render:2.0"]);
    assert_eq!(all.total, 3);

    let request: ListApplicationsRequest = serde_json::from_value(json!({
        "filters": {"or": [{"and": [
            {"field": {"applicationField": "Name"},
             "condition": {"filterString": {"operator": "StartsWith", "value": "ren"}}}
        ]}]},
        "sort": {"field": {"applicationField": "Version"}, "direction": "Desc"}
    }))
    .unwrap();
    let render = service().list_applications(&request).unwrap();
    let versions: Vec<_> = render.items.iter().map(|a| a.version.as_str()).collect();
    assert_eq!(versions, vec!["2.0", "1.0"]);
}

// =============================================================================
// Legacy Filter Tests
// =============================================================================

/// Legacy task filter by session with an excluded status.
#[test]
fn test_legacy_task_listing() {
    let filter = TaskFilter::sessions(vec!["s2".into()])
        .with_statuses(StatusSelection::Excluded(vec![taskgrid::model::TaskStatus::Processing]));

    let response = service().list_tasks_legacy(&filter, 0, 0).unwrap();
    assert_eq!(task_ids(&response.items), vec!["t3"]);
}

/// Legacy task filter without ids is rejected.
#[test]
fn test_legacy_task_filter_requires_ids() {
    let filter: TaskFilter = serde_json::from_value(json!({"ids": null, "statuses": null})).unwrap();
    let err = service().list_tasks_legacy(&filter, 0, 0).unwrap_err();
    assert_eq!(err.code(), "TASKGRID_INVALID_FIELD");
}

/// Legacy session filter with an empty id list matches every session.
#[test]
fn test_legacy_session_listing() {
    let filter: SessionFilter = serde_json::from_value(json!({
        "statuses": {"included": ["Running", "Cancelled"]}
    }))
    .unwrap();

    let response = service().list_sessions_legacy(&filter, 0, 0).unwrap();
    assert_eq!(response.total, 2);
}
