//! Data models for the catalog.
//!
//! This module defines the core record structures:
//!
//! - [`Book`]: a catalogued book, optionally pointing at an author
//! - [`Author`]: an author with a star rating
//!
//! The `Book.author_id` foreign key is advisory: it may be null, and it may
//! dangle. Lookups treat a dangling reference as "not found", never as an
//! error.

mod author;
mod book;

pub use author::Author;
pub use book::Book;
