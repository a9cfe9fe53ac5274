//! Continuation resolver
//!
//! Sermon notes rarely repeat the book and chapter for every verse they
//! quote. A citation like "Juan 3:16" is typically followed by the verse
//! text, then a bare "17" on the next line, then "18", and so on. This stage
//! recovers those continuations, expands explicit ranges, and attributes
//! orphan bare numbers to the last seen book/chapter.
//!
//! Per match, in scan order:
//!     1. An explicit range emits every verse from start to end inclusive.
//!        An inverted range ("3:18-16") keeps only the start verse.
//!     2. A single verse starts a continuation cursor. Bare numbers in a
//!        bounded window after the match are accepted only when exactly one
//!        greater than the cursor; values at or below the cursor are skipped
//!        as already consumed; the first other value ends the lookahead, as
//!        does the start of the next scanned citation.
//!     3. A chapter-only match emits one chapter-only tuple.
//!
//! A second pass attributes orphan numbers: bare integers nobody consumed,
//! greater than 1, standing in list position (after a newline, comma or
//! semicolon), and within the attribution window of the last citation before
//! them. With no citation in reach they are dropped.
//!
//! Both windows are fixed so that pathological inputs cost bounded work per
//! match. 600 bytes holds a few lines of quoted verse text between
//! continuation numbers.

use crate::scripture::books::CanonicalBook;
use crate::scripture::lexing::{SpannedToken, Token};
use crate::scripture::scanning::{citation_number, RawMatch};
use std::collections::HashSet;
use std::ops::Range;

/// How far past a citation the continuation lookahead reaches, in bytes.
pub const CONTINUATION_WINDOW: usize = 600;

/// How far past the last citation an orphan number may stand, in bytes.
pub const ORPHAN_WINDOW: usize = 600;

/// One verse (or whole chapter) attributed to a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseTuple {
    pub book: CanonicalBook,
    pub chapter: u32,
    /// `None` marks a chapter-only citation.
    pub verse: Option<u32>,
    /// Byte offset of the token this tuple was derived from.
    pub offset: usize,
}

/// A bare number token outside any scanned citation.
struct NumberSite {
    span: Range<usize>,
    /// Parsed value, `None` when not a plausible verse number.
    value: Option<u32>,
}

/// Attribute verse numbers to books, one tuple per verse.
///
/// `tokens` must be the same stream `matches` was scanned from; `source` is
/// consulted only to decide whether an orphan number stands in list
/// position.
pub fn resolve(tokens: &[SpannedToken], matches: &[RawMatch], source: &str) -> Vec<VerseTuple> {
    let numbers = bare_numbers(tokens, matches);
    let mut consumed = vec![false; numbers.len()];
    let mut tuples = Vec::new();

    for (mi, m) in matches.iter().enumerate() {
        match (m.verse_start, m.verse_end) {
            (None, _) => tuples.push(VerseTuple {
                book: m.book,
                chapter: m.chapter,
                verse: None,
                offset: m.span.start,
            }),
            (Some(start), Some(end)) if end >= start => {
                for verse in start..=end {
                    tuples.push(VerseTuple {
                        book: m.book,
                        chapter: m.chapter,
                        verse: Some(verse),
                        offset: m.span.start,
                    });
                }
            }
            (Some(start), _) => {
                tuples.push(VerseTuple {
                    book: m.book,
                    chapter: m.chapter,
                    verse: Some(start),
                    offset: m.span.start,
                });
                follow_continuations(
                    m,
                    matches.get(mi + 1),
                    &numbers,
                    &mut consumed,
                    &mut tuples,
                    start,
                );
            }
        }
    }

    attribute_orphans(matches, &numbers, &consumed, source, &mut tuples);
    tuples
}

/// Step 2: extend a single-verse citation over bare follow-up numbers.
fn follow_continuations(
    m: &RawMatch,
    next: Option<&RawMatch>,
    numbers: &[NumberSite],
    consumed: &mut [bool],
    tuples: &mut Vec<VerseTuple>,
    start: u32,
) {
    let mut cursor = start;
    let limit = m.span.end.saturating_add(CONTINUATION_WINDOW);
    let barrier = next.map(|n| n.span.start).unwrap_or(usize::MAX);

    let first = numbers.partition_point(|n| n.span.start < m.span.end);
    for (ni, number) in numbers.iter().enumerate().skip(first) {
        if number.span.start >= limit || number.span.start >= barrier {
            break;
        }
        let value = match number.value {
            Some(value) => value,
            // Dates and page counters are invisible to the lookahead.
            None => continue,
        };
        if value == cursor + 1 {
            tuples.push(VerseTuple {
                book: m.book,
                chapter: m.chapter,
                verse: Some(value),
                offset: number.span.start,
            });
            consumed[ni] = true;
            cursor = value;
        } else if value <= cursor {
            continue;
        } else {
            break;
        }
    }
}

/// Second pass: attach leftover list-position numbers to the last citation.
fn attribute_orphans(
    matches: &[RawMatch],
    numbers: &[NumberSite],
    consumed: &[bool],
    source: &str,
    tuples: &mut Vec<VerseTuple>,
) {
    let mut seen: HashSet<(CanonicalBook, u32, u32)> = tuples
        .iter()
        .filter_map(|t| t.verse.map(|v| (t.book, t.chapter, v)))
        .collect();

    for (ni, number) in numbers.iter().enumerate() {
        if consumed[ni] {
            continue;
        }
        let value = match number.value {
            Some(value) if value > 1 => value,
            _ => continue,
        };
        if !in_list_position(source, number.span.start) {
            continue;
        }
        // Last citation ending at or before this number.
        let preceding = matches.partition_point(|m| m.span.end <= number.span.start);
        let last = match preceding.checked_sub(1).and_then(|i| matches.get(i)) {
            Some(last) => last,
            // Nothing to attribute to.
            None => continue,
        };
        if number.span.start - last.span.end > ORPHAN_WINDOW {
            continue;
        }
        if !seen.insert((last.book, last.chapter, value)) {
            continue;
        }
        tuples.push(VerseTuple {
            book: last.book,
            chapter: last.chapter,
            verse: Some(value),
            offset: number.span.start,
        });
    }
}

/// Collect number tokens that are not part of any scanned citation.
fn bare_numbers(tokens: &[SpannedToken], matches: &[RawMatch]) -> Vec<NumberSite> {
    tokens
        .iter()
        .filter_map(|(token, span)| match token {
            Token::Number(digits) => Some((digits, span)),
            _ => None,
        })
        .filter(|(_, span)| !inside_any_match(matches, span.start))
        .map(|(digits, span)| NumberSite {
            span: span.clone(),
            value: citation_number(digits),
        })
        .collect()
}

fn inside_any_match(matches: &[RawMatch], offset: usize) -> bool {
    let idx = matches.partition_point(|m| m.span.start <= offset);
    idx.checked_sub(1)
        .and_then(|i| matches.get(i))
        .is_some_and(|m| offset < m.span.end)
}

/// True when the first non-blank character before `offset` is a newline,
/// comma, semicolon, or the start of the text. Prose-embedded numbers
/// ("página 40") fail this test and are never treated as orphan verses.
fn in_list_position(source: &str, offset: usize) -> bool {
    let bytes = source.as_bytes();
    let mut i = offset;
    while i > 0 {
        i -= 1;
        match bytes[i] {
            b' ' | b'\t' | b'\r' => continue,
            b'\n' | b',' | b';' => return true,
            _ => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scripture::books::canonical_table;
    use crate::scripture::lexing::tokenize;
    use crate::scripture::scanning::scan;

    fn resolve_source(source: &str) -> Vec<VerseTuple> {
        let tokens = tokenize(source);
        let matches = scan(&tokens, canonical_table());
        resolve(&tokens, &matches, source)
    }

    fn verses_of(tuples: &[VerseTuple], book: &str, chapter: u32) -> Vec<u32> {
        tuples
            .iter()
            .filter(|t| t.book.name() == book && t.chapter == chapter)
            .filter_map(|t| t.verse)
            .collect()
    }

    #[test]
    fn test_explicit_range_expands() {
        let tuples = resolve_source("Lc. 15:1-3 habla de la oveja perdida.");
        assert_eq!(verses_of(&tuples, "Lucas", 15), vec![1, 2, 3]);
    }

    #[test]
    fn test_inverted_range_keeps_start() {
        let tuples = resolve_source("Juan 3:18-16");
        assert_eq!(verses_of(&tuples, "Juan", 3), vec![18]);
    }

    #[test]
    fn test_line_continuations() {
        let source = "Juan 3:16\n17 Porque no envió Dios a su Hijo\n18 El que en él cree";
        let tuples = resolve_source(source);
        assert_eq!(verses_of(&tuples, "Juan", 3), vec![16, 17, 18]);
    }

    #[test]
    fn test_continuation_stops_at_gap() {
        let source = "Juan 3:16\n17 Porque no envió Dios\n25 otra cosa dice";
        let tuples = resolve_source(source);
        // 25 breaks the ascending run; it is then attributed as an orphan of
        // the same chapter because it stands at the start of a line.
        assert_eq!(verses_of(&tuples, "Juan", 3), vec![16, 17, 25]);
    }

    #[test]
    fn test_continuation_skips_already_consumed_values() {
        let source = "Juan 3:16\n16 Porque de tal manera amó Dios\n17 Porque no envió";
        let tuples = resolve_source(source);
        assert_eq!(verses_of(&tuples, "Juan", 3), vec![16, 17]);
    }

    #[test]
    fn test_continuation_does_not_cross_next_citation() {
        // The 6 after "Romanos 5" must not continue Juan 3:5.
        let source = "Juan 3:5 y luego Romanos 5\n6 Porque Cristo, cuando aún éramos débiles";
        let tuples = resolve_source(source);
        assert_eq!(verses_of(&tuples, "Juan", 3), vec![5]);
        assert_eq!(verses_of(&tuples, "Romanos", 5), vec![6]);
    }

    #[test]
    fn test_chapter_only_tuple() {
        let tuples = resolve_source("1 Corintios 13 es el capítulo del amor.");
        assert_eq!(tuples.len(), 1);
        assert_eq!(tuples[0].book.name(), "1 Corintios");
        assert_eq!(tuples[0].chapter, 13);
        assert_eq!(tuples[0].verse, None);
    }

    #[test]
    fn test_orphan_list_attribution() {
        let tuples = resolve_source("Isaías 53 nos muestra al siervo.\n53, 54, 55");
        // 53 opens a line, 54 and 55 follow commas; all become verses of the
        // last seen chapter.
        assert_eq!(verses_of(&tuples, "Isaías", 53), vec![53, 54, 55]);
    }

    #[test]
    fn test_orphan_without_book_is_dropped() {
        assert_eq!(resolve_source("12, 13, 14 sin libro alguno"), vec![]);
    }

    #[test]
    fn test_orphan_one_is_structural() {
        // "1." at a line start is a list marker, not verse one.
        let tuples = resolve_source("Juan 3:16 dice así.\n1. Primer punto");
        assert_eq!(verses_of(&tuples, "Juan", 3), vec![16]);
    }

    #[test]
    fn test_prose_number_is_not_an_orphan() {
        let tuples = resolve_source("Juan 3:16 fue escrito hace 40 generaciones");
        assert_eq!(verses_of(&tuples, "Juan", 3), vec![16]);
    }

    #[test]
    fn test_windows_are_bounded() {
        let padding = "palabra ".repeat(100); // ~800 bytes
        let source = format!("Juan 3:16 dice.\n{}\n17, 18", padding);
        let tuples = resolve_source(&source);
        // Both numbers sit beyond the lookahead and attribution windows.
        assert_eq!(verses_of(&tuples, "Juan", 3), vec![16]);
    }

    #[test]
    fn test_four_digit_numbers_invisible_to_lookahead() {
        let source = "Juan 3:16 se predicó en 1985\n17 Porque no envió Dios";
        let tuples = resolve_source(source);
        assert_eq!(verses_of(&tuples, "Juan", 3), vec![16, 17]);
    }
}
