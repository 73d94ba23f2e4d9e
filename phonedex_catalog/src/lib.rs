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

//! Catalog loading, normalization and search.

mod catalog;
pub mod normalize;
pub mod raw;
mod search;

pub use catalog::Catalog;
pub use normalize::{DEFAULT_CURRENCY_SYMBOL, NormalizeOptions, Storage};
pub use raw::RawRecord;
