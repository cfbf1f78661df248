//! Sort messages

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Ordering key of a list request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort<F> {
    pub field: Option<F>,
    #[serde(default)]
    pub direction: SortDirection,
}

impl<F> Sort<F> {
    pub fn asc(field: impl Into<F>) -> Self {
        Self {
            field: Some(field.into()),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: impl Into<F>) -> Self {
        Self {
            field: Some(field.into()),
            direction: SortDirection::Desc,
        }
    }
}
