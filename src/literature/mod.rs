//! Literature items that can be kept in a catalog.
//!
//! The set of item kinds is closed:
//! - `Novel`: title, author and publishing year, with a string encoding
//! - `ComicBook`: title only
//! - `Magazine`: title only
//!
//! Every item is validated when it is constructed (or deserialized), so a
//! `Literature` value always has a non-blank title.

pub mod comic_book;
pub mod magazine;
pub mod novel;

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub use comic_book::ComicBook;
pub use magazine::Magazine;
pub use novel::Novel;

/// Anything that exposes a title
pub trait Titled {
    /// The stored title
    fn title(&self) -> &str;

    /// Title length in characters
    fn title_len(&self) -> usize {
        self.title().chars().count()
    }
}

/// A piece of literature held by a catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Literature {
    Novel(Novel),
    ComicBook(ComicBook),
    Magazine(Magazine),
}

impl Literature {
    /// The kind of this item
    pub fn kind(&self) -> LiteratureKind {
        match self {
            Literature::Novel(_) => LiteratureKind::Novel,
            Literature::ComicBook(_) => LiteratureKind::ComicBook,
            Literature::Magazine(_) => LiteratureKind::Magazine,
        }
    }

    /// Borrow the novel if this item is one
    pub fn as_novel(&self) -> Option<&Novel> {
        match self {
            Literature::Novel(novel) => Some(novel),
            Literature::ComicBook(_) | Literature::Magazine(_) => None,
        }
    }

    /// Case-sensitive lexicographic comparison of titles
    pub fn cmp_title(&self, other: &Literature) -> Ordering {
        self.title().cmp(other.title())
    }
}

impl Titled for Literature {
    fn title(&self) -> &str {
        match self {
            Literature::Novel(novel) => novel.title(),
            Literature::ComicBook(comic) => comic.title(),
            Literature::Magazine(magazine) => magazine.title(),
        }
    }
}

impl fmt::Display for Literature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literature::Novel(novel) => write!(f, "{}", novel),
            Literature::ComicBook(_) | Literature::Magazine(_) => {
                write!(f, "\"{}\" ({})", self.title(), self.kind())
            }
        }
    }
}

impl From<Novel> for Literature {
    fn from(novel: Novel) -> Self {
        Literature::Novel(novel)
    }
}

impl From<ComicBook> for Literature {
    fn from(comic: ComicBook) -> Self {
        Literature::ComicBook(comic)
    }
}

impl From<Magazine> for Literature {
    fn from(magazine: Magazine) -> Self {
        Literature::Magazine(magazine)
    }
}

/// Kind of literature, without its data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiteratureKind {
    Novel,
    ComicBook,
    Magazine,
}

impl fmt::Display for LiteratureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteratureKind::Novel => write!(f, "novel"),
            LiteratureKind::ComicBook => write!(f, "comic book"),
            LiteratureKind::Magazine => write!(f, "magazine"),
        }
    }
}

impl std::str::FromStr for LiteratureKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.to_lowercase().as_str() {
            "novel" => Ok(LiteratureKind::Novel),
            "comic_book" | "comic-book" | "comic" => Ok(LiteratureKind::ComicBook),
            "magazine" | "mag" => Ok(LiteratureKind::Magazine),
            _ => anyhow::bail!("Unknown literature kind: {}", s),
        }
    }
}

/// True if the string is empty or only whitespace
pub(crate) fn is_blank(s: &str) -> bool {
    s.chars().all(is_blank_char)
}

/// Whitespace that does not count as content.
///
/// Non-breaking spaces and NEL are content; the ASCII information
/// separators U+001C..=U+001F are not.
fn is_blank_char(c: char) -> bool {
    match c {
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}

/// Reject empty or all-whitespace titles
pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    if is_blank(title) {
        return Err(ValidationError::BlankTitle);
    }
    Ok(())
}
