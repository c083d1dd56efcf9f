//! Splits text into maximal runs of letters, digits and everything else.
//!
//! Word boundaries fall exactly between runs, so matching a guess becomes a
//! comparison of token sequences instead of a regex search.

use super::mask::{is_digit, is_letter};
use crate::utils::strings::fold_typography;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Letters,
    Digits,
    Other,
}

impl TokenKind {
    fn of(c: char) -> Self {
        if is_letter(c) {
            TokenKind::Letters
        } else if is_digit(c) {
            TokenKind::Digits
        } else {
            TokenKind::Other
        }
    }

    pub fn is_word(self) -> bool {
        !matches!(self, TokenKind::Other)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// char indices into the tokenized text
    pub span: Range<usize>,
    /// case- and typography-folded text used for comparisons
    pub folded: String,
}

impl Token {
    fn new(kind: TokenKind, span: Range<usize>, raw: &str) -> Self {
        let folded = match kind {
            TokenKind::Letters => raw.to_lowercase(),
            TokenKind::Digits => raw.to_string(),
            TokenKind::Other => fold_typography(raw),
        };
        Self { kind, span, folded }
    }

    fn same_as(&self, other: &Token) -> bool {
        self.kind == other.kind && self.folded == other.folded
    }
}

pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current: Option<(TokenKind, usize)> = None;
    let mut raw = String::new();
    let mut idx = 0;

    for c in text.chars() {
        let kind = TokenKind::of(c);
        match current {
            Some((k, _)) if k == kind => {}
            Some((k, start)) => {
                tokens.push(Token::new(k, start..idx, &raw));
                raw.clear();
                current = Some((kind, idx));
            }
            None => current = Some((kind, idx)),
        }
        raw.push(c);
        idx += 1;
    }

    if let Some((k, start)) = current {
        tokens.push(Token::new(k, start..idx, &raw));
    }

    tokens
}

/// Char ranges of every place where `needle` appears in `haystack` as a
/// whole token sequence. A needle without any letter or digit run never
/// matches.
pub fn find_sequence(haystack: &[Token], needle: &[Token]) -> Vec<Range<usize>> {
    if needle.is_empty() || !needle.iter().any(|t| t.kind.is_word()) {
        return Vec::new();
    }

    haystack
        .windows(needle.len())
        .filter(|window| window.iter().zip(needle).all(|(a, b)| a.same_as(b)))
        .map(|window| window[0].span.start..window[window.len() - 1].span.end)
        .collect()
}
