//! In-memory record store for the catalog.
//!
//! The [`Catalog`] owns all Book and Author records. Records come from the
//! built-in seed, or from a YAML document file:
//!
//! ```yaml
//! books:
//!   - id: "1"
//!     name: Wind Song
//!     genre: Fantasy
//!     authorId: "1"
//! authors:
//!   - id: "1"
//!     name: James Kotlin
//!     star: 4
//! ```
//!
//! Lookups are first-match-wins: the seed data intentionally repeats ids and
//! the store never deduplicates. The only write path is the book append.
//!
//! ## Components
//!
//! - [`Catalog`]: lookup, filter, and append operations
//! - [`Records`]: the serializable book/author document shape
//! - [`seed_records`]: the built-in dataset

mod catalog;
mod seed;

pub use catalog::{Catalog, Records};
pub use seed::seed_records;
