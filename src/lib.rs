//! bookstore - In-memory catalog of literature
//!
//! Keeps novels, comic books and magazines in an ordered catalog that can
//! be searched, filtered, sorted and summarized. Novels can be encoded to
//! and decoded from a `title&&author&&year` string.
//!
//! # Modules
//!
//! - `literature`: Item kinds (Novel, ComicBook, Magazine) and validation
//! - `library`: Catalog and title statistics
//! - `error`: Validation and format errors
//! - `config`: Config file discovery for the CLI
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Run every catalog operation against the configured (or demo) catalog
//! bookstore demo
//!
//! # Titles in alphabetical order
//! bookstore titles --sorted
//!
//! # Decode an encoded novel
//! bookstore decode "Dune&&Frank Herbert&&1965"
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod library;
pub mod literature;

// Re-export main types at crate root for convenience
pub use error::{Error, FormatError, ValidationError};
pub use library::{Catalog, CatalogInfo, TitleStats};
pub use literature::{ComicBook, Literature, LiteratureKind, Magazine, Novel, Titled};
