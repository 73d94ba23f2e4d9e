#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

mod error;
pub mod query;
pub mod record;
pub mod wishlist;

pub use error::{Error, Result};
pub use query::{DEFAULT_RESULT_LIMIT, SearchParams, SearchQuery, parse_optional};
pub use record::{DisplayRecord, NOT_AVAILABLE, RamCell, ResultRecord};
pub use wishlist::{Wishlist, WishlistEntry};
