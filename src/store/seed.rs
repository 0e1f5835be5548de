use crate::model::{Author, Book};

use super::Records;

/// The built-in dataset. Note the repeated book id "3": the sample data
/// carries duplicates on purpose and the store keeps them, relying on
/// first-match-wins lookup.
pub fn seed_records() -> Records {
    let books = vec![
        book("1", "Wind Song", "Fantasy", "1"),
        book("2", "Strong Warrior", "Adventure", "2"),
        book("3", "The Great Black Hole", "Sci-Fi", "3"),
        book("3", "Minor Major", "Sci-Fi", "1"),
        book("3", "Time Slot", "Sci-Fi", "2"),
        book("3", "Divine Sword", "Adventure", "3"),
    ];

    let authors = vec![
        Author::new("1".to_string(), "James Kotlin".to_string(), 4.0),
        Author::new("2".to_string(), "Rose Pumpkin".to_string(), 4.5),
        Author::new("3".to_string(), "Sweet Hunk".to_string(), 5.0),
    ];

    Records { books, authors }
}

fn book(id: &str, name: &str, genre: &str, author_id: &str) -> Book {
    Book::new(id.to_string(), name.to_string(), genre.to_string())
        .with_author(Some(author_id.to_string()))
}
