//! Catalog of literature items.
//!
//! An ordered, named collection that can be searched, filtered and
//! summarized. Items keep their insertion order; sorting produces a view.

use std::io::{self, Write};

use serde::Serialize;
use tracing::debug;

use super::stats::{CatalogInfo, TitleStats};
use crate::error::ValidationError;
use crate::literature::{is_blank, Literature, LiteratureKind, Novel, Titled};

/// A named, ordered collection of literature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    /// Store name shown in info lines
    name: String,

    /// Items in insertion order
    items: Vec<Literature>,
}

impl Catalog {
    /// Create a catalog with a non-blank name and initial items
    pub fn new(
        name: impl Into<String>,
        items: impl IntoIterator<Item = Literature>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if is_blank(&name) {
            return Err(ValidationError::BlankCatalogName);
        }

        Ok(Self {
            name,
            items: items.into_iter().collect(),
        })
    }

    /// Create an empty catalog
    pub fn empty(name: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(name, Vec::new())
    }

    /// The catalog name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append an item; duplicates are allowed
    pub fn add(&mut self, item: impl Into<Literature>) {
        let item = item.into();
        debug!(title = item.title(), kind = %item.kind(), "Adding item to catalog");
        self.items.push(item);
    }

    /// Items in their current order
    pub fn iter(&self) -> std::slice::Iter<'_, Literature> {
        self.items.iter()
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Write every title, one per line
    pub fn write_titles<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for item in &self.items {
            writeln!(out, "{}", item.title())?;
        }
        Ok(())
    }

    /// Write every title upper-cased, one per line
    pub fn write_titles_upper<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for item in &self.items {
            writeln!(out, "{}", item.title().to_uppercase())?;
        }
        Ok(())
    }

    /// Write the titles that contain `part` (case-sensitive)
    pub fn write_titles_containing<W: Write>(&self, out: &mut W, part: &str) -> io::Result<()> {
        for item in self.titles_containing(part) {
            writeln!(out, "{}", item.title())?;
        }
        Ok(())
    }

    /// Write every title in title order
    pub fn write_titles_sorted<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for item in self.sorted_by_title() {
            writeln!(out, "{}", item.title())?;
        }
        Ok(())
    }

    /// Print every title to stdout
    pub fn print_titles(&self) -> io::Result<()> {
        self.write_titles(&mut io::stdout().lock())
    }

    /// Print every title upper-cased to stdout
    pub fn print_titles_upper(&self) -> io::Result<()> {
        self.write_titles_upper(&mut io::stdout().lock())
    }

    /// Print the titles containing `part` to stdout
    pub fn print_titles_containing(&self, part: &str) -> io::Result<()> {
        self.write_titles_containing(&mut io::stdout().lock(), part)
    }

    /// Print every title to stdout in title order
    pub fn print_titles_sorted(&self) -> io::Result<()> {
        self.write_titles_sorted(&mut io::stdout().lock())
    }

    /// Items whose title contains `part` (case-sensitive, empty matches all)
    pub fn titles_containing(&self, part: &str) -> Vec<&Literature> {
        self.items
            .iter()
            .filter(|item| item.title().contains(part))
            .collect()
    }

    /// Items sorted by title; equal titles keep their relative order
    pub fn sorted_by_title(&self) -> Vec<&Literature> {
        let mut items: Vec<_> = self.items.iter().collect();
        items.sort_by(|a, b| a.cmp_title(b));
        items
    }

    /// Filter items by kind
    pub fn filter_by_kind(&self, kind: LiteratureKind) -> Vec<&Literature> {
        self.items.iter().filter(|item| item.kind() == kind).collect()
    }

    /// Title with the most characters; the first one wins a tie
    pub fn longest_title(&self) -> Option<&str> {
        self.items
            .iter()
            .reduce(|longest, item| {
                if item.title_len() > longest.title_len() {
                    item
                } else {
                    longest
                }
            })
            .map(Titled::title)
    }

    /// Number of items whose title contains `word`, ignoring case
    pub fn count_containing(&self, word: &str) -> usize {
        let word_lower = word.to_lowercase();

        self.items
            .iter()
            .filter(|item| item.title().to_lowercase().contains(&word_lower))
            .count()
    }

    /// Items whose title is exactly `len` characters long
    pub fn items_with_title_length(&self, len: usize) -> Vec<&Literature> {
        self.items
            .iter()
            .filter(|item| item.title_len() == len)
            .collect()
    }

    /// Mean title length in characters, or `None` for an empty catalog
    pub fn average_title_length(&self) -> Option<f64> {
        self.title_stats().map(|stats| stats.average())
    }

    /// Title length summary, or `None` for an empty catalog
    pub fn title_stats(&self) -> Option<TitleStats> {
        TitleStats::from_items(&self.items)
    }

    /// Append every novel, in order, to caller-owned storage
    pub fn collect_novels<'a, E>(&'a self, into: &mut E)
    where
        E: Extend<&'a Novel>,
    {
        into.extend(self.items.iter().filter_map(Literature::as_novel));
    }

    /// Name and size of this catalog
    pub fn info(&self) -> CatalogInfo {
        CatalogInfo::new(&self.name, self.items.len())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Literature;
    type IntoIter = std::slice::Iter<'a, Literature>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literature::{ComicBook, Magazine};

    fn demo_catalog() -> Catalog {
        let mut catalog = Catalog::empty("Demo").unwrap();
        catalog.add(Novel::new("War and Peace", "Leo Tolstoy", 1867).unwrap());
        catalog.add(ComicBook::new("Spider-Man").unwrap());
        catalog.add(Magazine::new("National Geographic").unwrap());
        catalog
    }

    fn titles<'a>(items: impl IntoIterator<Item = &'a Literature>) -> Vec<&'a str> {
        items.into_iter().map(Titled::title).collect()
    }

    fn written<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_catalog_name_validation() {
        assert_eq!(
            Catalog::empty("").unwrap_err(),
            ValidationError::BlankCatalogName
        );
        assert_eq!(
            Catalog::empty("  ").unwrap_err(),
            ValidationError::BlankCatalogName
        );
        assert_eq!(Catalog::empty("Books").unwrap().name(), "Books");
    }

    #[test]
    fn test_catalog_add_keeps_order_and_duplicates() {
        let mut catalog = demo_catalog();
        catalog.add(ComicBook::new("Spider-Man").unwrap());

        assert_eq!(catalog.len(), 4);
        assert_eq!(
            titles(&catalog),
            ["War and Peace", "Spider-Man", "National Geographic", "Spider-Man"]
        );
    }

    #[test]
    fn test_write_titles() {
        let catalog = demo_catalog();
        let out = written(|w| catalog.write_titles(w));
        assert_eq!(out, "War and Peace\nSpider-Man\nNational Geographic\n");
    }

    #[test]
    fn test_write_titles_upper() {
        let catalog = demo_catalog();
        let out = written(|w| catalog.write_titles_upper(w));
        assert_eq!(out, "WAR AND PEACE\nSPIDER-MAN\nNATIONAL GEOGRAPHIC\n");
    }

    #[test]
    fn test_write_titles_containing() {
        let catalog = demo_catalog();

        let out = written(|w| catalog.write_titles_containing(w, "an"));
        assert_eq!(out, "War and Peace\nSpider-Man\n");

        let out = written(|w| catalog.write_titles_containing(w, "Geo"));
        assert_eq!(out, "National Geographic\n");

        // case-sensitive
        let out = written(|w| catalog.write_titles_containing(w, "spider"));
        assert_eq!(out, "");

        // empty filter matches everything
        let out = written(|w| catalog.write_titles_containing(w, ""));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_print_titles_to_stdout() {
        let catalog = demo_catalog();

        assert!(catalog.print_titles().is_ok());
        assert!(catalog.print_titles_upper().is_ok());
        assert!(catalog.print_titles_containing("an").is_ok());
        assert!(catalog.print_titles_sorted().is_ok());
        assert!(Catalog::empty("Empty").unwrap().print_titles().is_ok());
    }

    #[test]
    fn test_sorted_by_title_is_a_view() {
        let catalog = demo_catalog();

        assert_eq!(
            titles(catalog.sorted_by_title()),
            ["National Geographic", "Spider-Man", "War and Peace"]
        );
        assert_eq!(
            titles(&catalog),
            ["War and Peace", "Spider-Man", "National Geographic"]
        );

        let out = written(|w| catalog.write_titles_sorted(w));
        assert_eq!(out, "National Geographic\nSpider-Man\nWar and Peace\n");
    }

    #[test]
    fn test_sort_is_stable() {
        let mut catalog = Catalog::empty("Stable").unwrap();
        catalog.add(Magazine::new("Same").unwrap());
        catalog.add(ComicBook::new("Same").unwrap());
        catalog.add(Magazine::new("Aardvark").unwrap());

        let kinds: Vec<_> = catalog.sorted_by_title().iter().map(|i| i.kind()).collect();
        assert_eq!(
            kinds,
            [
                LiteratureKind::Magazine,
                LiteratureKind::Magazine,
                LiteratureKind::ComicBook
            ]
        );
    }

    #[test]
    fn test_longest_title() {
        assert_eq!(demo_catalog().longest_title(), Some("National Geographic"));
        assert_eq!(Catalog::empty("Empty").unwrap().longest_title(), None);
    }

    #[test]
    fn test_longest_title_tie_keeps_first() {
        let mut catalog = Catalog::empty("Ties").unwrap();
        catalog.add(Magazine::new("Vogue").unwrap());
        catalog.add(ComicBook::new("Bone").unwrap());
        catalog.add(Magazine::new("Wired").unwrap());

        assert_eq!(catalog.longest_title(), Some("Vogue"));
    }

    #[test]
    fn test_count_containing() {
        let catalog = demo_catalog();

        // "war and peace" and "spider-man"
        assert_eq!(catalog.count_containing("an"), 2);
        assert_eq!(catalog.count_containing("AN"), 2);
        assert_eq!(catalog.count_containing("spider"), 1);
        assert_eq!(catalog.count_containing("GEOGRAPHIC"), 1);
        assert_eq!(catalog.count_containing("batman"), 0);
        assert_eq!(catalog.count_containing(""), 3);
    }

    #[test]
    fn test_items_with_title_length() {
        let catalog = demo_catalog();

        assert_eq!(titles(catalog.items_with_title_length(10)), ["Spider-Man"]);
        assert_eq!(titles(catalog.items_with_title_length(13)), ["War and Peace"]);
        assert!(catalog.items_with_title_length(7).is_empty());
    }

    #[test]
    fn test_average_title_length() {
        let catalog = demo_catalog();
        let average = catalog.average_title_length().unwrap();
        assert!((average - 14.0).abs() < f64::EPSILON);

        assert_eq!(Catalog::empty("Empty").unwrap().average_title_length(), None);
    }

    #[test]
    fn test_filter_by_kind() {
        let catalog = demo_catalog();

        assert_eq!(titles(catalog.filter_by_kind(LiteratureKind::Novel)), ["War and Peace"]);
        assert_eq!(catalog.filter_by_kind(LiteratureKind::Magazine).len(), 1);
    }

    #[test]
    fn test_collect_novels_appends() {
        let mut catalog = demo_catalog();
        catalog.add(Novel::new("Dune", "Frank Herbert", 1965).unwrap());

        let earlier = Novel::new("Emma", "Jane Austen", 1815).unwrap();
        let mut novels: Vec<&Novel> = vec![&earlier];
        catalog.collect_novels(&mut novels);

        let titles: Vec<_> = novels.iter().map(|n| n.title()).collect();
        assert_eq!(titles, ["Emma", "War and Peace", "Dune"]);
    }

    #[test]
    fn test_info() {
        assert_eq!(demo_catalog().info().to_string(), "BookStore: Demo, Items: 3");
    }
}
