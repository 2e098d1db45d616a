//! Novels and their delimited string encoding.
//!
//! Encoded form: `<title>&&<author name>&&<year>`. The separator is reserved
//! and rejected in titles and author names, so every valid novel round-trips.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{is_blank, validate_title, Titled};
use crate::error::{Error, FormatError, ValidationError};

/// Separates the fields of an encoded novel
pub const SEPARATOR: &str = "&&";

/// Earliest accepted publishing year
pub const MIN_PUBLISHING_YEAR: i32 = 1;

/// Latest accepted publishing year
pub const MAX_PUBLISHING_YEAR: i32 = 2024;

const ENCODED_PARTS: usize = 3;

/// A novel with an author and publishing year
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NovelFields")]
pub struct Novel {
    title: String,
    author_name: String,
    year_published: i32,
}

/// Unvalidated novel fields, as read from config
#[derive(Deserialize)]
struct NovelFields {
    title: String,
    author_name: String,
    year_published: i32,
}

impl TryFrom<NovelFields> for Novel {
    type Error = ValidationError;

    fn try_from(fields: NovelFields) -> Result<Self, Self::Error> {
        Novel::new(fields.title, fields.author_name, fields.year_published)
    }
}

impl Novel {
    /// Create a validated novel
    pub fn new(
        title: impl Into<String>,
        author_name: impl Into<String>,
        year_published: i32,
    ) -> Result<Self, ValidationError> {
        let title = title.into();
        let author_name = author_name.into();

        validate_title(&title)?;
        reject_separator("title", &title)?;
        validate_author_name(&author_name)?;
        validate_year_published(year_published)?;

        Ok(Self {
            title,
            author_name,
            year_published,
        })
    }

    /// Name of the author
    pub fn author_name(&self) -> &str {
        &self.author_name
    }

    /// Year the novel was published
    pub fn year_published(&self) -> i32 {
        self.year_published
    }

    /// Encode as `<title>&&<author name>&&<year>`
    pub fn encode(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.title,
            self.author_name,
            self.year_published,
            sep = SEPARATOR
        )
    }

    /// Decode a novel produced by [`Novel::encode`].
    ///
    /// Trailing empty parts are dropped before counting, so
    /// `"Dune&&Frank Herbert&&1965&&"` still decodes. Fails with a format
    /// error if the string does not split into exactly three parts or the
    /// year is not an integer. The decoded fields then go
    /// through the same validation as [`Novel::new`].
    pub fn decode(encoded: &str) -> Result<Self, Error> {
        let mut parts: Vec<&str> = encoded.split(SEPARATOR).collect();

        // a string without any separator is kept whole, even when empty
        if parts.len() > 1 {
            while parts.last() == Some(&"") {
                parts.pop();
            }
        }

        let [title, author_name, year] = parts.as_slice() else {
            return Err(FormatError::PartCount {
                expected: ENCODED_PARTS,
                actual: parts.len(),
            }
            .into());
        };

        let year_published: i32 = year.parse().map_err(|_| FormatError::InvalidYear {
            token: (*year).to_string(),
        })?;

        let novel = Novel::new(*title, *author_name, year_published)?;
        debug!(title = novel.title(), "Decoded novel");
        Ok(novel)
    }
}

impl Titled for Novel {
    fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for Novel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" written in {} by {}.",
            self.title, self.year_published, self.author_name
        )
    }
}

impl FromStr for Novel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Novel::decode(s)
    }
}

fn validate_author_name(author_name: &str) -> Result<(), ValidationError> {
    if is_blank(author_name) {
        return Err(ValidationError::BlankAuthor);
    }
    reject_separator("author name", author_name)
}

fn validate_year_published(year: i32) -> Result<(), ValidationError> {
    if !(MIN_PUBLISHING_YEAR..=MAX_PUBLISHING_YEAR).contains(&year) {
        return Err(ValidationError::YearOutOfRange {
            year,
            min: MIN_PUBLISHING_YEAR,
            max: MAX_PUBLISHING_YEAR,
        });
    }
    Ok(())
}

fn reject_separator(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.contains(SEPARATOR) {
        return Err(ValidationError::ReservedSeparator {
            field,
            separator: SEPARATOR,
        });
    }
    Ok(())
}
