use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub name: String,

    /// Star rating, fractional (e.g. 4.5).
    #[serde(default)]
    pub star: f64,
}

impl Author {
    pub fn new(id: String, name: String, star: f64) -> Self {
        Self { id, name, star }
    }
}
