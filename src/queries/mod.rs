//! Read-only questions asked of the [`Catalog`](crate::catalog::Catalog).
//!
//! Every function here is a pure linear scan that borrows from the catalog;
//! "not found" is `None` or an empty `Vec`, never an error.

pub mod categories;
pub mod products;
