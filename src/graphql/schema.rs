use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::store::Catalog;

use super::types::{Author, Book, catalog};

pub type ShelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(catalog: Arc<Catalog>) -> ShelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(catalog)
        .finish()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Get a single book by id. A missing or unknown id yields null, not an
    /// error.
    async fn book(&self, ctx: &Context<'_>, id: Option<ID>) -> Option<Book> {
        id.and_then(|id| catalog(ctx).book(id.as_str()))
            .map(Into::into)
    }

    /// Get a single author by id, with the same null-on-miss semantics.
    async fn author(&self, ctx: &Context<'_>, id: Option<ID>) -> Option<Author> {
        id.and_then(|id| catalog(ctx).author(id.as_str()))
            .map(Into::into)
    }

    /// All books, in store order.
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        catalog(ctx).books().into_iter().map(Into::into).collect()
    }

    /// All authors, in store order.
    async fn authors(&self, ctx: &Context<'_>) -> Vec<Author> {
        catalog(ctx).authors().into_iter().map(Into::into).collect()
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new book and return it with its freshly assigned id. Empty
    /// strings are accepted; the author id is optional and not checked
    /// against the author records.
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        genre: String,
        author_id: Option<ID>,
    ) -> Book {
        catalog(ctx)
            .add_book(name, genre, author_id.map(|id| id.0))
            .into()
    }
}
