use serde::{Deserialize, Serialize};

/// One video row collected from the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
    /// Value of the `v` query parameter, used as the dedup key
    pub id: String,

    /// Trimmed display title
    pub title: String,

    /// Watch link with everything after the first `&` removed
    pub url: String,

    /// Thumbnail source (may be empty)
    #[serde(default)]
    pub thumbnail_url: String,

    /// Channel name (may be empty)
    #[serde(default)]
    pub author_name: String,

    /// Never populated for Watch Later rows, kept for the export shape
    #[serde(default)]
    pub added_at: String,
}

impl ExtractedRecord {
    /// Create a record with the required fields and empty optional ones
    pub fn new(id: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            thumbnail_url: String::new(),
            author_name: String::new(),
            added_at: String::new(),
        }
    }

    pub fn with_thumbnail(mut self, thumbnail_url: impl Into<String>) -> Self {
        self.thumbnail_url = thumbnail_url.into();
        self
    }

    pub fn with_author(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = author_name.into();
        self
    }
}
