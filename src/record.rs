use serde::{Deserialize, Serialize};

pub const DEFAULT_IMAGE_URL: &str = "https://m.media-amazon.com/images/I/71ZB18P3inL._SY522_.jpg";

/// One book entry. Two records are the same book when all four fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: String,
    pub author: String,
    pub category: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl BookRecord {
    /// Builds a record from form input, or `None` when the title or author is blank.
    #[must_use]
    pub fn new(title: &str, author: &str, category: &str) -> Option<Self> {
        let title = title.trim();
        let author = author.trim();
        if title.is_empty() || author.is_empty() {
            return None;
        }

        Some(Self {
            title: title.to_owned(),
            author: author.to_owned(),
            category: category.to_owned(),
            image_url: DEFAULT_IMAGE_URL.to_owned(),
        })
    }
}
