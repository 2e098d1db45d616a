//! Catalog of literature and the statistics derived from it.
//!
//! A catalog owns its items and only ever appends to them:
//!
//! ```text
//! Catalog "BookStore"
//! ├── Novel      "War and Peace"  (Leo Tolstoy, 1867)
//! ├── ComicBook  "Spider-Man"
//! └── Magazine   "National Geographic"
//! ```

pub mod catalog;
pub mod stats;

pub use catalog::Catalog;
pub use stats::{CatalogInfo, TitleStats};
