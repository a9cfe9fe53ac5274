//! Range merger and deduplicator
//!
//! The resolver hands over one tuple per attributed verse, in no particular
//! global order and with duplicates allowed. This stage groups tuples by
//! (book, chapter), deduplicates verse numbers through a set, and folds each
//! group into minimal contiguous ranges. Groups keep the order in which
//! their first tuple appeared in the source text, so the output follows the
//! sermon's narrative flow instead of canon order.
//!
//! A chapter-only tuple renders as the bare chapter form unless the same
//! group also gained verse numbers, in which case the verses supersede it.

use crate::scripture::books::CanonicalBook;
use crate::scripture::resolving::VerseTuple;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// A merged reference: one (book, chapter) with its verse ranges.
///
/// An empty range list means the whole chapter was cited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub book: CanonicalBook,
    pub chapter: u32,
    /// Closed, ascending, non-adjacent verse intervals.
    pub verses: Vec<(u32, u32)>,
}

impl Reference {
    /// Render into the display shapes, one string per range.
    fn render_into(&self, out: &mut Vec<String>) {
        if self.verses.is_empty() {
            out.push(format!("{} {}", self.book, self.chapter));
            return;
        }
        for (start, end) in &self.verses {
            if start == end {
                out.push(format!("{} {}:{}", self.book, self.chapter, start));
            } else {
                out.push(format!("{} {}:{}-{}", self.book, self.chapter, start, end));
            }
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        self.render_into(&mut parts);
        f.write_str(&parts.join(", "))
    }
}

/// Ordered, deduplicated outcome of an extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(transparent)]
pub struct ExtractionResult {
    references: Vec<Reference>,
}

impl ExtractionResult {
    pub fn references(&self) -> &[Reference] {
        &self.references
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// The final display strings: `"Book C"`, `"Book C:V"` or
    /// `"Book C:A-B"`, one per contiguous range.
    pub fn rendered(&self) -> Vec<String> {
        let mut out = Vec::new();
        for reference in &self.references {
            reference.render_into(&mut out);
        }
        out
    }
}

/// Group, deduplicate and range-merge resolved tuples.
pub fn merge(mut tuples: Vec<VerseTuple>) -> ExtractionResult {
    // Orphan tuples arrive appended after the match tuples; source order
    // decides group order, so restore it first.
    tuples.sort_by_key(|t| t.offset);

    let mut order: Vec<(CanonicalBook, u32)> = Vec::new();
    let mut verses: HashMap<(CanonicalBook, u32), BTreeSet<u32>> = HashMap::new();
    for tuple in tuples {
        let group = (tuple.book, tuple.chapter);
        let entry = verses.entry(group).or_insert_with(|| {
            order.push(group);
            BTreeSet::new()
        });
        if let Some(verse) = tuple.verse {
            entry.insert(verse);
        }
    }

    let references = order
        .into_iter()
        .map(|(book, chapter)| Reference {
            book,
            chapter,
            verses: fold_ranges(&verses[&(book, chapter)]),
        })
        .collect();

    ExtractionResult { references }
}

/// Fold an ascending verse set into minimal contiguous closed ranges.
fn fold_ranges(sorted: &BTreeSet<u32>) -> Vec<(u32, u32)> {
    let mut ranges: Vec<(u32, u32)> = Vec::new();
    for &verse in sorted {
        match ranges.last_mut() {
            Some((_, end)) if verse <= *end + 1 => *end = verse,
            _ => ranges.push((verse, verse)),
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripture::books::canonical_table;

    fn tuple(book: &str, chapter: u32, verse: Option<u32>, offset: usize) -> VerseTuple {
        VerseTuple {
            book: canonical_table().lookup(book).unwrap(),
            chapter,
            verse,
            offset,
        }
    }

    #[test]
    fn test_fold_ranges_minimal_intervals() {
        let set: BTreeSet<u32> = [1, 2, 3, 5, 6, 9].into_iter().collect();
        assert_eq!(fold_ranges(&set), vec![(1, 3), (5, 6), (9, 9)]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let result = merge(vec![
            tuple("Juan", 3, Some(16), 0),
            tuple("Juan", 3, Some(16), 50),
        ]);
        assert_eq!(result.rendered(), vec!["Juan 3:16"]);
    }

    #[test]
    fn test_noncontiguous_verses_render_separately() {
        let result = merge(vec![
            tuple("Juan", 3, Some(16), 0),
            tuple("Juan", 3, Some(17), 10),
            tuple("Juan", 3, Some(36), 20),
        ]);
        assert_eq!(result.rendered(), vec!["Juan 3:16-17", "Juan 3:36"]);
    }

    #[test]
    fn test_chapter_only_form() {
        let result = merge(vec![tuple("1 Corintios", 13, None, 0)]);
        assert_eq!(result.rendered(), vec!["1 Corintios 13"]);
    }

    #[test]
    fn test_verses_supersede_chapter_only() {
        let result = merge(vec![
            tuple("Juan", 3, None, 0),
            tuple("Juan", 3, Some(16), 40),
        ]);
        assert_eq!(result.rendered(), vec!["Juan 3:16"]);
    }

    #[test]
    fn test_groups_keep_appearance_order() {
        let result = merge(vec![
            tuple("Mateo", 25, Some(31), 19),
            tuple("Gálatas", 5, Some(22), 45),
        ]);
        assert_eq!(result.rendered(), vec!["Mateo 25:31", "Gálatas 5:22"]);
    }

    #[test]
    fn test_appearance_order_survives_late_orphans() {
        // An orphan for the first group arrives after the second group's
        // tuples; group order still follows first appearance.
        let result = merge(vec![
            tuple("Juan", 3, Some(16), 0),
            tuple("Romanos", 8, Some(1), 30),
            tuple("Juan", 3, Some(17), 60),
        ]);
        assert_eq!(result.rendered(), vec!["Juan 3:16-17", "Romanos 8:1"]);
    }

    #[test]
    fn test_same_book_chapters_stay_separate() {
        let result = merge(vec![
            tuple("Juan", 3, Some(16), 0),
            tuple("Juan", 4, Some(1), 10),
        ]);
        assert_eq!(result.rendered(), vec!["Juan 3:16", "Juan 4:1"]);
    }

    #[test]
    fn test_empty_input() {
        let result = merge(Vec::new());
        assert!(result.is_empty());
        assert_eq!(result.rendered(), Vec::<String>::new());
    }
}
