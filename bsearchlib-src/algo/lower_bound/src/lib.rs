//! Insertion-point searches over sorted slices.
//!
//! Unlike `exact_search`, these never report absence: they return the
//! position where `key` would be inserted.

use std::ops::Range;

pub trait LowerBound {
    type Item;

    /// Returns the first `i` such that `key <= self[i]`, or `self.len()` if
    /// there is none.
    ///
    /// ```
    /// use lower_bound::LowerBound;
    ///
    /// let a = [1, 3, 3, 3, 5];
    /// assert_eq!(a.lower_bound(&3), 1);
    /// assert_eq!(a.lower_bound(&4), 4);
    /// assert_eq!(a.lower_bound(&9), 5);
    /// ```
    fn lower_bound(&self, key: &Self::Item) -> usize;

    /// Returns the first `i` such that `key < self[i]`, or `self.len()` if
    /// there is none.
    fn upper_bound(&self, key: &Self::Item) -> usize;

    /// Positions of the elements equal to `key`. Empty if `key` is absent,
    /// in which case `start` is still the insertion point.
    fn equal_range(&self, key: &Self::Item) -> Range<usize>;
}

impl<T: Ord> LowerBound for [T] {
    type Item = T;
    fn lower_bound(&self, key: &T) -> usize { partition(self, |x| x < key) }
    fn upper_bound(&self, key: &T) -> usize { partition(self, |x| x <= key) }
    fn equal_range(&self, key: &T) -> Range<usize> {
        let start = self.lower_bound(key);
        start..start + self[start..].upper_bound(key)
    }
}

// `pred` must hold on a prefix of `buf` and fail on the rest.
fn partition<T>(buf: &[T], mut pred: impl FnMut(&T) -> bool) -> usize {
    if buf.is_empty() || !pred(&buf[0]) {
        return 0;
    }
    let mut ok = 0;
    let mut bad = buf.len();
    while bad - ok > 1 {
        let mid = ok + (bad - ok) / 2;
        *(if pred(&buf[mid]) { &mut ok } else { &mut bad }) = mid;
    }
    bad
}

#[test]
fn sanity_check() {
    let a = [1, 3, 5, 7, 9, 11, 13, 15];
    assert_eq!(a.lower_bound(&7), 3);
    assert_eq!(a.lower_bound(&2), 1);
    assert_eq!(a.lower_bound(&0), 0);
    assert_eq!(a.lower_bound(&16), 8);
    assert_eq!(a.upper_bound(&7), 4);
    assert_eq!(a.equal_range(&7), 3..4);
    assert_eq!(a.equal_range(&8), 4..4);

    let a = [0, 1, 4, 5, 5, 9];
    assert_eq!(a.lower_bound(&5), 3);
    assert_eq!(a.upper_bound(&5), 5);
    assert_eq!(a.equal_range(&5), 3..5);

    let empty: [i32; 0] = [];
    assert_eq!(empty.lower_bound(&5), 0);
    assert_eq!(empty.upper_bound(&5), 0);
    assert_eq!(empty.equal_range(&5), 0..0);

    assert_eq!([5].lower_bound(&5), 0);
    assert_eq!([5].upper_bound(&5), 1);
}
