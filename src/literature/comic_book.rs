//! Comic books.

use serde::{Deserialize, Serialize};

use super::{validate_title, Titled};
use crate::error::ValidationError;

/// A comic book, identified only by its title
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ComicBookFields")]
pub struct ComicBook {
    title: String,
}

#[derive(Deserialize)]
struct ComicBookFields {
    title: String,
}

impl TryFrom<ComicBookFields> for ComicBook {
    type Error = ValidationError;

    fn try_from(fields: ComicBookFields) -> Result<Self, Self::Error> {
        ComicBook::new(fields.title)
    }
}

impl ComicBook {
    /// Create a comic book; the title must not be blank
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self { title })
    }
}

impl Titled for ComicBook {
    fn title(&self) -> &str {
        &self.title
    }
}
