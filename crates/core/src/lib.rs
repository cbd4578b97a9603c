//! Domain types shared by the quotes store and HTTP layer.
//!
//! Nothing in this crate performs I/O; it holds the id type, the error
//! taxonomy and the pure validation rules for authors and quotes.

pub mod error;
pub mod quotes;
pub mod types;
