//! Error types for literature construction and novel decoding.

use thiserror::Error;

/// A required field failed validation at construction time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("A literature piece must have a title")]
    BlankTitle,

    #[error("A novel must have an author")]
    BlankAuthor,

    #[error("A catalog must have a name")]
    BlankCatalogName,

    #[error("The {field} of a novel cannot contain the data separator ('{separator}')")]
    ReservedSeparator {
        field: &'static str,
        separator: &'static str,
    },

    #[error("A novel must have been published between the years {min} and {max}, got {year}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },
}

/// An encoded novel string could not be split into its fields
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Encoded novel has {actual} parts, expected {expected}")]
    PartCount { expected: usize, actual: usize },

    #[error("Encoded novel has an invalid publishing year: {token:?}")]
    InvalidYear { token: String },
}

/// Any failure while decoding a novel
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl Error {
    /// True if the input was well-formed but a field was rejected
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// True if the input could not be split or parsed
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}
