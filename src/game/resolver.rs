use super::tokenizer::{find_sequence, tokenize, Token};
use crate::utils::strings::normalize_guess;
use std::fmt::Debug;
use std::ops::Range;

/// Alternative surface forms to try when the exact guess is not in the text.
///
/// Implementations are heuristics, not stemmers: they only propose candidates
/// and the resolver keeps the first one that actually occurs.
pub trait Inflection: Debug {
    fn fallbacks(&self, word: &str) -> Vec<String>;
}

/// Coarse French plural/singular toggling on a trailing `s` or `x`.
///
/// Short guesses (under three chars) also try the `s` and `x` plurals. Any
/// guess ending in `s` or `x` tries the form without it. Irregular plurals and
/// words that merely end in `s`/`x` are handled wrongly.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrenchPlural;

const SHORT_WORD_LIMIT: usize = 3;

impl Inflection for FrenchPlural {
    fn fallbacks(&self, word: &str) -> Vec<String> {
        let mut forms = Vec::new();

        if word.chars().count() < SHORT_WORD_LIMIT {
            forms.push(format!("{word}s"));
            forms.push(format!("{word}x"));
        }

        if let Some(stem) = word.strip_suffix('s').or_else(|| word.strip_suffix('x')) {
            if !stem.is_empty() {
                forms.push(stem.to_string());
            }
        }

        forms
    }
}

/// Exact matches only.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInflection;

impl Inflection for NoInflection {
    fn fallbacks(&self, _word: &str) -> Vec<String> {
        Vec::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// the form that was found: the guess itself or one of its fallbacks
    pub form: String,
    /// char ranges of every occurrence in the source text
    pub spans: Vec<Range<usize>>,
}

/// Look a raw guess up in tokenized source text.
pub fn resolve(guess: &str, source: &[Token], inflection: &dyn Inflection) -> Option<Match> {
    let word = normalize_guess(guess);
    if !word.chars().any(|c| c.is_alphanumeric()) {
        return None;
    }

    let fallbacks = inflection.fallbacks(&word);
    std::iter::once(word)
        .chain(fallbacks)
        .find_map(|form| {
            let spans = find_sequence(source, &tokenize(&form));
            if spans.is_empty() {
                None
            } else {
                Some(Match { form, spans })
            }
        })
}
