//! Result types for list execution

/// One page of a list
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Rows of this page, in result order
    pub items: Vec<T>,
    /// Number of matching rows before paging
    pub total: usize,
}

impl<T> Page<T> {
    /// Returns true if the page holds no rows
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of rows on the page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Converts the rows, keeping the total
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

/// Slices `rows` to the zero-based `page` of `page_size` rows
pub(crate) fn paginate<T>(rows: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let total = rows.len();
    let items = rows
        .into_iter()
        .skip(page.saturating_mul(page_size))
        .take(page_size)
        .collect();
    Page { items, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate() {
        let page = paginate((0..7).collect(), 1, 3);
        assert_eq!(page.items, vec![3, 4, 5]);
        assert_eq!(page.total, 7);

        let last = paginate((0..7).collect(), 2, 3);
        assert_eq!(last.items, vec![6]);

        let past_end = paginate((0..7).collect::<Vec<i32>>(), 5, 3);
        assert!(past_end.is_empty());
        assert_eq!(past_end.total, 7);
    }

    #[test]
    fn test_map_keeps_total() {
        let page = paginate(vec![1, 2, 3], 0, 2).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total, 3);
        assert_eq!(Page::<i32>::empty().len(), 0);
    }
}
