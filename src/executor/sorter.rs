//! Row sorting for list execution
//!
//! Sorts by a compiled accessor, stably and deterministically.

use std::cmp::Ordering;

use crate::api::SortDirection;
use crate::compiler::Accessor;

/// Sorts rows by an accessor
pub struct RowSorter;

impl RowSorter {
    /// Sorts rows according to the accessor and direction.
    ///
    /// Sort is stable. Ordering rules:
    /// - null first (last when descending)
    /// - same kind, natural ordering of the field type
    pub fn sort<E>(rows: &mut [&E], accessor: &Accessor<E>, direction: SortDirection) {
        Self::sort_by(rows, |row| *row, accessor, direction);
    }

    /// Sorts arbitrary rows by the entity each of them carries
    pub fn sort_by<T, E>(
        rows: &mut [T],
        entity: impl Fn(&T) -> &E,
        accessor: &Accessor<E>,
        direction: SortDirection,
    ) {
        rows.sort_by(|a, b| {
            let ordering = Self::compare(accessor, entity(a), entity(b));

            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    fn compare<E>(accessor: &Accessor<E>, a: &E, b: &E) -> Ordering {
        accessor.get(a).sort_cmp(&accessor.get(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::{FieldValue, ValueKind};

    struct Doc {
        id: &'static str,
        age: Option<i64>,
    }

    fn age() -> Accessor<Doc> {
        Accessor::member("age", ValueKind::Number, |d: &Doc| d.age.into())
    }

    fn name() -> Accessor<Doc> {
        Accessor::member("id", ValueKind::String, |d: &Doc| FieldValue::from(d.id))
    }

    fn doc(id: &'static str, age: i64) -> Doc {
        Doc { id, age: Some(age) }
    }

    fn sorted(docs: &[Doc], accessor: Accessor<Doc>, direction: SortDirection) -> Vec<&str> {
        let mut rows: Vec<&Doc> = docs.iter().collect();
        RowSorter::sort(&mut rows, &accessor, direction);
        rows.iter().map(|d| d.id).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let docs = vec![doc("c", 30), doc("a", 20), doc("b", 25)];
        assert_eq!(sorted(&docs, age(), SortDirection::Asc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_descending() {
        let docs = vec![doc("c", 30), doc("a", 20), doc("b", 25)];
        assert_eq!(sorted(&docs, age(), SortDirection::Desc), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_sort_stable() {
        let docs = vec![doc("a", 25), doc("b", 25), doc("c", 25)];
        assert_eq!(sorted(&docs, age(), SortDirection::Asc), vec!["a", "b", "c"]);
        assert_eq!(sorted(&docs, age(), SortDirection::Desc), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_nulls_first() {
        let docs = vec![doc("a", 1), Doc { id: "n", age: None }, doc("b", 0)];
        assert_eq!(sorted(&docs, age(), SortDirection::Asc), vec!["n", "b", "a"]);
        assert_eq!(sorted(&docs, age(), SortDirection::Desc), vec!["a", "b", "n"]);
    }

    #[test]
    fn test_sort_by_string() {
        let docs = vec![doc("charlie", 1), doc("alice", 2), doc("bob", 3)];
        assert_eq!(
            sorted(&docs, name(), SortDirection::Asc),
            vec!["alice", "bob", "charlie"]
        );
    }

    #[test]
    fn test_sort_by_carried_entity() {
        let docs = vec![doc("x", 2), doc("y", 1)];
        let mut rows: Vec<(usize, &Doc)> = docs.iter().enumerate().collect();
        RowSorter::sort_by(&mut rows, |row| row.1, &age(), SortDirection::Asc);
        assert_eq!(rows.iter().map(|row| row.0).collect::<Vec<_>>(), vec![1, 0]);
    }
}
