//! Magazines.

use serde::{Deserialize, Serialize};

use super::{validate_title, Titled};
use crate::error::ValidationError;

/// A magazine, identified only by its title
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MagazineFields")]
pub struct Magazine {
    title: String,
}

#[derive(Deserialize)]
struct MagazineFields {
    title: String,
}

impl TryFrom<MagazineFields> for Magazine {
    type Error = ValidationError;

    fn try_from(fields: MagazineFields) -> Result<Self, Self::Error> {
        Magazine::new(fields.title)
    }
}

impl Magazine {
    /// Create a magazine; the title must not be blank
    pub fn new(title: impl Into<String>) -> Result<Self, ValidationError> {
        let title = title.into();
        validate_title(&title)?;
        Ok(Self { title })
    }
}

impl Titled for Magazine {
    fn title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magazine_creation() {
        let magazine = Magazine::new("National Geographic").unwrap();
        assert_eq!(magazine.title(), "National Geographic");
    }

    #[test]
    fn test_blank_title_rejected() {
        assert_eq!(Magazine::new(""), Err(ValidationError::BlankTitle));
        assert_eq!(Magazine::new("\n\t "), Err(ValidationError::BlankTitle));
    }
}
