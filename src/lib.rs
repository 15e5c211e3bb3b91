//! Binary searches over sorted slices.
//!
//! ```
//! use bsearchlib::{ExactSearch, LowerBound, NOT_FOUND};
//!
//! let a = [1, 3, 5, 7, 9, 11, 13, 15];
//! assert_eq!(a.exact_search_index(&7), 3);
//! assert_eq!(a.exact_search_index(&2), NOT_FOUND);
//! assert_eq!(a.lower_bound(&2), 1);
//! ```

#[doc(inline)]
pub use algo::{self, *};
