//! GraphQL schema and resolvers for the catalog.
//!
//! The type graph is two mutually recursive entities: `Book.author` points
//! at an [`Author`], `Author.books` scans back over the books. async-graphql
//! registers field sets lazily, so the cycle needs no special handling.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! bookshelf serve --port 4000
//!
//! # Execute a query from CLI
//! bookshelf query '{ books { id name genre author { name } } }'
//!
//! # Execute a mutation from CLI
//! bookshelf mutate 'addBook(name: "Dune", genre: "Sci-Fi", authorId: "1") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `author`, `books`, `authors`
//! - **Mutations**: `addBook`

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, ShelfSchema, build_schema};
pub use server::run_server;
pub use types::*;
