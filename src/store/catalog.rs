use std::path::Path;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::model::{Author, Book};

/// Serializable shape of the whole record set, as stored in a YAML
/// document file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    pub books: Vec<Book>,

    #[serde(default)]
    pub authors: Vec<Author>,
}

impl Records {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// The record store. Owns all records; resolvers only read, the single
/// mutation appends under the write lock.
pub struct Catalog {
    books: RwLock<Vec<Book>>,
    authors: RwLock<Vec<Author>>,
    id_length: usize,
}

impl Catalog {
    /// Build a catalog from a record set. Duplicate ids in the input are
    /// kept as-is; lookups return the first match.
    pub fn new(records: Records, id_length: usize) -> Self {
        Self {
            books: RwLock::new(records.books),
            authors: RwLock::new(records.authors),
            id_length,
        }
    }

    /// Lookup by id, first match wins.
    pub fn book(&self, id: &str) -> Option<Book> {
        let books = self.books.read().unwrap_or_else(PoisonError::into_inner);
        books.iter().find(|b| b.id == id).cloned()
    }

    pub fn author(&self, id: &str) -> Option<Author> {
        let authors = self.authors.read().unwrap_or_else(PoisonError::into_inner);
        authors.iter().find(|a| a.id == id).cloned()
    }

    /// All books in insertion order.
    pub fn books(&self) -> Vec<Book> {
        let books = self.books.read().unwrap_or_else(PoisonError::into_inner);
        books.clone()
    }

    pub fn authors(&self) -> Vec<Author> {
        let authors = self.authors.read().unwrap_or_else(PoisonError::into_inner);
        authors.clone()
    }

    /// All books referencing the given author, in insertion order. Empty
    /// when none match.
    pub fn books_by_author(&self, author_id: &str) -> Vec<Book> {
        let books = self.books.read().unwrap_or_else(PoisonError::into_inner);
        books
            .iter()
            .filter(|b| b.author_id.as_deref() == Some(author_id))
            .cloned()
            .collect()
    }

    /// Append a book whose id the caller assigned. Rejected if the id is
    /// already taken.
    pub fn append_book(&self, book: Book) -> Result<()> {
        let mut books = self.books.write().unwrap_or_else(PoisonError::into_inner);
        if books.iter().any(|b| b.id == book.id) {
            return Err(CatalogError::DuplicateId(book.id));
        }
        books.push(book);
        Ok(())
    }

    /// Create a book with a freshly generated id and return it.
    ///
    /// Empty name/genre strings are accepted. The id is generated and the
    /// record appended under a single write lock, so concurrent calls
    /// cannot collide.
    pub fn add_book(&self, name: String, genre: String, author_id: Option<String>) -> Book {
        let mut books = self.books.write().unwrap_or_else(PoisonError::into_inner);

        let mut id = generate_id(self.id_length);
        while books.iter().any(|b| b.id == id) {
            id = generate_id(self.id_length);
        }

        let book = Book::new(id, name, genre).with_author(author_id);
        books.push(book.clone());
        book
    }

    /// Snapshot the full record set, e.g. for writing back to a document
    /// file.
    pub fn to_records(&self) -> Records {
        Records {
            books: self.books(),
            authors: self.authors(),
        }
    }
}

fn generate_id(length: usize) -> String {
    const ALPHABET: [char; 36] = [
        '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h',
        'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
    ];
    nanoid::format(nanoid::rngs::default, &ALPHABET, length)
}
