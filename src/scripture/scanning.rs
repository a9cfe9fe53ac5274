//! Reference scanner
//!
//! Walks the token stream left to right and assembles candidate citations of
//! the shape `[1-3]? Word .* Chapter [: Verse [- Verse]]`. A candidate only
//! becomes a [RawMatch] if its abbreviation resolves in the canonical book
//! table and every numeric token is a plausible chapter or verse number
//! (1-3 digits, nonzero). Everything else is dropped where it stands, so
//! prose like "Capitulo 5:30" or "página 12" never enters the pipeline.
//!
//! The scan never looks behind and always advances past the end of an
//! accepted match before searching again, so matches cannot overlap.
//!
//! Numbered books ("1 Corintios 13") are tried numeral-first: a leading 1-3
//! numeral token directly before a word is folded into the lookup key. When
//! that key does not resolve, the numeral is left alone and the bare word
//! gets its own chance on the next scan step.

use crate::scripture::books::{normalize_key, BookTable, CanonicalBook};
use crate::scripture::lexing::{SpannedToken, Token};
use std::ops::Range;

/// Chapter and verse numbers are at most three digits.
pub const MAX_NUMBER_DIGITS: usize = 3;

/// An ephemeral scanner record: one recognized citation, pre-resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub book: CanonicalBook,
    pub chapter: u32,
    pub verse_start: Option<u32>,
    pub verse_end: Option<u32>,
    /// Byte range of the full citation in the source text.
    pub span: Range<usize>,
}

/// Parse a digit run as a chapter/verse number.
///
/// Rejects runs longer than three digits and the value zero. Years and page
/// counters ("1985") fail here rather than being truncated to a prefix.
pub fn citation_number(digits: &str) -> Option<u32> {
    if digits.len() > MAX_NUMBER_DIGITS {
        return None;
    }
    let value: u32 = digits.parse().ok()?;
    if value == 0 {
        return None;
    }
    Some(value)
}

/// Scan a token stream for citations, in source order.
pub fn scan(tokens: &[SpannedToken], table: &BookTable) -> Vec<RawMatch> {
    let mut matches = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        match match_at(tokens, i, table) {
            Some((found, next)) => {
                matches.push(found);
                i = next;
            }
            None => i += 1,
        }
    }
    matches
}

/// Try to read one citation starting at token `start`.
///
/// Returns the match and the index of the first token after it.
fn match_at(tokens: &[SpannedToken], start: usize, table: &BookTable) -> Option<(RawMatch, usize)> {
    // Abbreviation: either `Numeral Word` (numbered books) or a bare word.
    let (key, word_idx) = match &tokens[start].0 {
        Token::Number(digits) if matches!(digits.as_str(), "1" | "2" | "3") => {
            let word = tokens.get(start + 1)?.0.word()?;
            (format!("{}{}", digits, normalize_key(word)), start + 1)
        }
        Token::Word(word) => (normalize_key(word), start),
        _ => return None,
    };
    let book = table.lookup_key(&key)?;

    // Abbreviation periods sit between the word and the chapter ("Lc. 15").
    let mut i = word_idx + 1;
    while matches!(tokens.get(i), Some((Token::Period, _))) {
        i += 1;
    }

    let chapter = citation_number(tokens.get(i)?.0.number()?)?;
    let mut last = i;

    let mut verse_start = None;
    let mut verse_end = None;
    if matches!(tokens.get(i + 1), Some((Token::Colon, _))) {
        let verse_token = tokens.get(i + 2)?;
        verse_start = Some(citation_number(verse_token.0.number()?)?);
        last = i + 2;

        if matches!(tokens.get(i + 3), Some((Token::Hyphen, _))) {
            if let Some((Token::Number(digits), _)) = tokens.get(i + 4) {
                verse_end = Some(citation_number(digits)?);
                last = i + 4;
            }
        }
    }

    let span = tokens[start].1.start..tokens[last].1.end;
    Some((
        RawMatch {
            book,
            chapter,
            verse_start,
            verse_end,
            span,
        },
        last + 1,
    ))
}
