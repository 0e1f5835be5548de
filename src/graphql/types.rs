use std::sync::Arc;

use async_graphql::{ComplexObject, Context, ID, SimpleObject};

use crate::model;
use crate::store::Catalog;

pub(super) fn catalog<'a>(ctx: &Context<'a>) -> &'a Arc<Catalog> {
    ctx.data_unchecked::<Arc<Catalog>>()
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: ID,
    pub name: String,
    pub genre: String,

    // Raw foreign key, only exposed through the `author` field.
    #[graphql(skip)]
    pub author_id: Option<String>,
}

#[ComplexObject]
impl Book {
    /// The book's author. Null when the book has no author id, or when the
    /// id dangles.
    async fn author(&self, ctx: &Context<'_>) -> Option<Author> {
        self.author_id
            .as_deref()
            .and_then(|id| catalog(ctx).author(id))
            .map(Into::into)
    }
}

impl From<model::Book> for Book {
    fn from(b: model::Book) -> Self {
        Self {
            id: ID(b.id),
            name: b.name,
            genre: b.genre,
            author_id: b.author_id,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: ID,
    pub name: String,
    pub star: f64,
}

#[ComplexObject]
impl Author {
    /// All books by this author, in store order. Empty list when none.
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        catalog(ctx)
            .books_by_author(self.id.as_str())
            .into_iter()
            .map(Into::into)
            .collect()
    }
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            id: ID(a.id),
            name: a.name,
            star: a.star,
        }
    }
}
