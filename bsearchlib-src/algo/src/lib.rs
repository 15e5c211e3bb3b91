#[doc(inline)]
pub use exact_search::{self, *};
#[doc(inline)]
pub use lower_bound::{self, *};
