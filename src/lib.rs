//! # Bookshelf - a small GraphQL book catalog
//!
//! Bookshelf exposes Books and Authors through a typed GraphQL layer backed
//! by an in-memory record store. Books point at authors through an optional
//! foreign key; authors list their books by scanning the book records. Both
//! relationship fields are resolved lazily, field by field, against the
//! store.
//!
//! ## Quick Start
//!
//! ```bash
//! # Initialize a catalog project (config + seed records)
//! bookshelf init
//!
//! # List books
//! bookshelf books
//!
//! # Run a GraphQL query
//! bookshelf query '{ books { name author { name star } } }'
//!
//! # Add a book
//! bookshelf mutate 'addBook(name: "Dune", genre: "Sci-Fi", authorId: "1") { id }'
//!
//! # Serve the API
//! bookshelf serve --port 4000
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`model`]: Data models (Book, Author)
//! - [`store`]: The in-memory record store

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.yml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `CatalogError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema for querying and mutating the catalog.
pub mod graphql;

pub mod logging;

/// Data models for the catalog.
pub mod model;

/// The record store.
///
/// Owns the Book and Author records and the single append path.
pub mod store;
