//! Exact-match binary search over sorted slices.
//!
//! The slice must be sorted in non-decreasing order. On unsorted input the
//! answer is unspecified, but the search still stays in bounds and finishes
//! within the same number of steps.

use std::cmp::Ordering::{Equal, Greater, Less};

/// Returned by [`ExactSearch::exact_search_index`] when the key is absent.
pub const NOT_FOUND: isize = -1;

pub trait ExactSearch {
    type Item;

    /// Returns `Some(i)` with `self[i] == *key`, or `None` if no element
    /// equals `key`.
    ///
    /// With duplicates, any one of the matching positions may be returned.
    /// At most `ceil(log2(n + 1))` comparisons are made.
    ///
    /// # Examples
    /// ```
    /// use exact_search::ExactSearch;
    ///
    /// let a = [1, 3, 5, 7, 9, 11, 13, 15];
    /// assert_eq!(a.exact_search(&7), Some(3));
    /// assert_eq!(a.exact_search(&2), None);
    /// ```
    fn exact_search(&self, key: &Self::Item) -> Option<usize>;

    /// Same as [`exact_search`](ExactSearch::exact_search), but reports
    /// absence as [`NOT_FOUND`].
    ///
    /// ```
    /// use exact_search::{ExactSearch, NOT_FOUND};
    ///
    /// let empty: [i32; 0] = [];
    /// assert_eq!(empty.exact_search_index(&5), NOT_FOUND);
    /// assert_eq!([5].exact_search_index(&5), 0);
    /// ```
    fn exact_search_index(&self, key: &Self::Item) -> isize {
        // slice lengths never exceed `isize::MAX`
        self.exact_search(key).map_or(NOT_FOUND, |i| i as isize)
    }
}

impl<T: Ord> ExactSearch for [T] {
    type Item = T;
    fn exact_search(&self, key: &T) -> Option<usize> {
        // candidates are `left..right`; the window shrinks every round
        let mut left = 0;
        let mut right = self.len();
        while left < right {
            let middle = left + (right - left) / 2;
            match self[middle].cmp(key) {
                Equal => return Some(middle),
                Less => left = middle + 1,
                Greater => right = middle,
            }
        }
        None
    }
}

#[test]
fn sanity_check() {
    let a = [1, 3, 5, 7, 9, 11, 13, 15];
    assert_eq!(a.exact_search_index(&7), 3);
    assert_eq!(a.exact_search_index(&2), NOT_FOUND);

    let empty: [i32; 0] = [];
    assert_eq!(empty.exact_search_index(&5), NOT_FOUND);

    let a = [1, 3, 5, 7, 9, 11, 13, 15, 17, 18, 20, 21];
    assert_eq!(a.exact_search_index(&21), 11);

    assert_eq!([5].exact_search_index(&5), 0);
}
