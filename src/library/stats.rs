//! Summary information about a catalog.

use std::fmt;

use serde::Serialize;

use crate::literature::Titled;

/// Store name and item count, displayed as `BookStore: <name>, Items: <n>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogInfo {
    pub name: String,
    pub item_count: usize,
}

impl CatalogInfo {
    pub fn new(name: impl Into<String>, item_count: usize) -> Self {
        Self {
            name: name.into(),
            item_count,
        }
    }
}

impl fmt::Display for CatalogInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookStore: {}, Items: {}", self.name, self.item_count)
    }
}

/// Title length statistics, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TitleStats {
    /// Number of titles measured (never zero)
    pub count: usize,

    /// Sum of all title lengths
    pub total: usize,

    /// Shortest title length
    pub shortest: usize,

    /// Longest title length
    pub longest: usize,
}

impl TitleStats {
    /// Measure the titles of `items`; `None` if there are none
    pub fn from_items<'a, T, I>(items: I) -> Option<Self>
    where
        T: Titled + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut lengths = items.into_iter().map(Titled::title_len);
        let first = lengths.next()?;

        let stats = lengths.fold(
            Self {
                count: 1,
                total: first,
                shortest: first,
                longest: first,
            },
            |stats, len| Self {
                count: stats.count + 1,
                total: stats.total + len,
                shortest: stats.shortest.min(len),
                longest: stats.longest.max(len),
            },
        );

        Some(stats)
    }

    /// Mean title length
    pub fn average(&self) -> f64 {
        self.total as f64 / self.count as f64
    }
}

impl fmt::Display for TitleStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} titles, average length {:.2} (shortest {}, longest {})",
            self.count,
            self.average(),
            self.shortest,
            self.longest
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literature::{ComicBook, Literature, Magazine};

    #[test]
    fn test_title_stats() {
        let items: Vec<Literature> = vec![
            Magazine::new("Wired").unwrap().into(),
            ComicBook::new("Spider-Man").unwrap().into(),
        ];

        let stats = TitleStats::from_items(&items).unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total, 15);
        assert_eq!(stats.shortest, 5);
        assert_eq!(stats.longest, 10);
        assert!((stats.average() - 7.5).abs() < f64::EPSILON);
        assert_eq!(
            stats.to_string(),
            "2 titles, average length 7.50 (shortest 5, longest 10)"
        );
    }

    #[test]
    fn test_title_stats_empty() {
        let items: Vec<Magazine> = Vec::new();
        assert!(TitleStats::from_items(&items).is_none());
    }

    #[test]
    fn test_catalog_info_display() {
        let info = CatalogInfo::new("Downtown", 0);
        assert_eq!(info.to_string(), "BookStore: Downtown, Items: 0");
    }
}
