use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub genre: String,

    /// Zero-or-one author per book. Not enforced referentially: a dangling
    /// id resolves to no author rather than an error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
}

impl Book {
    pub fn new(id: String, name: String, genre: String) -> Self {
        Self {
            id,
            name,
            genre,
            author_id: None,
        }
    }

    pub fn with_author(mut self, author_id: Option<String>) -> Self {
        self.author_id = author_id;
        self
    }
}
