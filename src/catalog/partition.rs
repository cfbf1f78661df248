//! Partition field catalog

use crate::api::{PartitionField, PartitionRawEnumField};
use crate::compiler::{Accessor, CompileError, CompileResult, FieldValue, ValueKind};
use crate::model::{NoStatus, PartitionData};

use super::FieldCatalog;

/// Catalog of the partition collection
#[derive(Debug, Clone, Copy, Default)]
pub struct PartitionCatalog;

fn member(
    name: &'static str,
    kind: ValueKind,
    get: fn(&PartitionData) -> FieldValue,
) -> Accessor<PartitionData> {
    Accessor::member(name, kind, get)
}

impl FieldCatalog for PartitionCatalog {
    type Entity = PartitionData;
    type Field = PartitionField;
    type Status = NoStatus;

    const COLLECTION: &'static str = "partitions";

    fn resolve(field: &PartitionField) -> CompileResult<Accessor<PartitionData>> {
        use PartitionRawEnumField as F;
        use ValueKind as K;

        let PartitionField::PartitionRawField(raw) = field;
        let accessor = match raw {
            F::Id => member("partition_id", K::String, |p| p.partition_id.as_str().into()),
            F::ParentPartitionIds => member("parent_partition_ids", K::Array, |p| {
                p.parent_partition_ids.clone().into()
            }),
            F::PodReserved => member("pod_reserved", K::Number, |p| p.pod_reserved.into()),
            F::PodMax => member("pod_max", K::Number, |p| p.pod_max.into()),
            F::PreemptionPercentage => member("preemption_percentage", K::Number, |p| {
                p.preemption_percentage.into()
            }),
            F::Priority => member("priority", K::Number, |p| p.priority.into()),
            F::Unspecified => {
                return Err(CompileError::invalid_field(format!(
                    "partition raw field {:?}",
                    raw
                )))
            }
        };
        Ok(accessor)
    }
}
