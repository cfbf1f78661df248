//! Partition records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A partition: a pool of worker pods tasks can be routed to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartitionData {
    pub partition_id: String,
    pub parent_partition_ids: Vec<String>,
    pub pod_reserved: i32,
    pub pod_max: i32,
    pub preemption_percentage: i32,
    pub priority: i32,
    pub pod_configuration: BTreeMap<String, String>,
}

impl PartitionData {
    pub fn new(partition_id: impl Into<String>, pod_reserved: i32, pod_max: i32) -> Self {
        Self {
            partition_id: partition_id.into(),
            pod_reserved,
            pod_max,
            ..Default::default()
        }
    }
}
