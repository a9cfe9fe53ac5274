//! Lexer
//!
//! Base tokenization for the extraction pipeline, built on the logos lexer.
//!
//! The grammar is deliberately small: sermon text is mostly prose, and the
//! scanner only cares about words, numbers, and the handful of punctuation
//! marks that appear inside citations ("Jn 3:16-18", "(Lc. 15)"). Everything
//! else lexes to an error slice and is dropped, which keeps the token stream
//! compact without losing byte positions on what remains.
//!
//! Tokenizing is the only place the raw text is traversed character by
//! character. Later stages work on the token stream plus spans, so their
//! lookahead is bounded by construction rather than by a regex engine's
//! backtracking behavior.

pub mod tokens;

pub use tokens::Token;

use logos::Logos;

/// A token paired with its byte range in the source.
pub type SpannedToken = (Token, std::ops::Range<usize>);

/// Tokenize source text with location information.
///
/// Unrecognized characters are skipped; whitespace never reaches the output.
/// The result is the single token stream every later pipeline stage
/// operates on.
pub fn tokenize(source: &str) -> Vec<SpannedToken> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        if let Ok(token) = result {
            tokens.push((token, lexer.span()));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizes_citation() {
        let tokens = tokenize("Juan 3:16");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].0, Token::Word("Juan".to_string()));
        assert_eq!(tokens[1].0, Token::Number("3".to_string()));
        assert_eq!(tokens[2].0, Token::Colon);
        assert_eq!(tokens[3].0, Token::Number("16".to_string()));
    }

    #[test]
    fn test_spans_point_into_source() {
        let source = "y también Gálatas 5:22";
        let tokens = tokenize(source);
        for (token, span) in &tokens {
            let slice = &source[span.clone()];
            match token {
                Token::Word(w) => assert_eq!(w, slice),
                Token::Number(n) => assert_eq!(n, slice),
                _ => {}
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(tokenize(""), vec![]);
    }

    #[test]
    fn test_unrecognized_characters_are_dropped() {
        let tokens = tokenize("¡Juan! ✝ 3");
        assert_eq!(tokens[0].0, Token::Word("Juan".to_string()));
        assert_eq!(tokens[1].0, Token::Number("3".to_string()));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_range_punctuation() {
        let tokens = tokenize("(Lc. 15:1-32)");
        let kinds: Vec<&Token> = tokens.iter().map(|(t, _)| t).collect();
        assert_eq!(kinds[0], &Token::OpenParen);
        assert_eq!(kinds[1], &Token::Word("Lc".to_string()));
        assert_eq!(kinds[2], &Token::Period);
        assert_eq!(kinds[3], &Token::Number("15".to_string()));
        assert_eq!(kinds[4], &Token::Colon);
        assert_eq!(kinds[5], &Token::Number("1".to_string()));
        assert_eq!(kinds[6], &Token::Hyphen);
        assert_eq!(kinds[7], &Token::Number("32".to_string()));
        assert_eq!(kinds[8], &Token::CloseParen);
    }

    #[test]
    fn test_en_dash_lexes_as_hyphen() {
        let tokens = tokenize("16–18");
        assert_eq!(tokens[1].0, Token::Hyphen);
    }
}
