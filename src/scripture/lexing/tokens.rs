//! Token definitions for sermon text
//!
//! Tokens are defined with the logos derive macro. Only citation-relevant
//! lexemes get a variant; whitespace is skipped at the lexer level and any
//! other character falls out as a lexing error the caller drops.

use logos::Logos;

/// All tokens the extraction pipeline distinguishes.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// A run of digits. Length and value checks happen in the scanner, not
    /// here; "1985" is one token the scanner will refuse as a chapter.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),

    /// A run of letters, including Spanish diacritics.
    #[regex(r"[A-Za-zÁÉÍÓÚÜÑáéíóúüñ]+", |lex| lex.slice().to_string())]
    Word(String),

    #[token(":")]
    Colon,

    /// Verse-range separator. Sermon notes use both the ASCII hyphen and the
    /// typographic en dash.
    #[token("-")]
    #[token("–")]
    Hyphen,

    #[token(".")]
    Period,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,
}

impl Token {
    /// Numeric payload, if this is a number token.
    pub fn number(&self) -> Option<&str> {
        match self {
            Token::Number(digits) => Some(digits),
            _ => None,
        }
    }

    /// Word payload, if this is a word token.
    pub fn word(&self) -> Option<&str> {
        match self {
            Token::Word(text) => Some(text),
            _ => None,
        }
    }
}
