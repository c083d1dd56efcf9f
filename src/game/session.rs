//! Session state and the reducer that drives it.
//!
//! Every user or network event becomes an [`Action`]; [`Session::update`]
//! applies it and hands back a [`Command`] when the outside world has to do
//! something (only fetching a new article, so far).

use super::board::Board;
use super::mask::{mask, MaskGlyphs};
use super::resolver::{FrenchPlural, Inflection};
use crate::models::{Article, GuessRecord};
use crate::utils::strings::normalize_guess;
use tracing::{debug, info, warn};

pub const LOAD_ERROR_MESSAGE: &str =
    "Could not load a Wikipedia article. Press Tab to try again.";

#[derive(Debug)]
pub enum Phase {
    Loading,
    Ready(Board),
    Failed,
}

#[derive(Debug)]
pub enum Action {
    Loaded(Article),
    LoadFailed(String),
    Guess(String),
    Reset,
    RevealVowel(char),
    ToggleHint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    FetchArticle,
}

#[derive(Debug)]
pub struct Session {
    pub phase: Phase,
    pub guesses: Vec<GuessRecord>,
    pub attempts: u32,
    pub show_hint: bool,
    glyphs: MaskGlyphs,
    inflection: Box<dyn Inflection>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(MaskGlyphs::default(), Box::new(FrenchPlural))
    }
}

impl Session {
    /// A session waiting for its first article. The caller is expected to
    /// issue the initial [`Command::FetchArticle`].
    pub fn new(glyphs: MaskGlyphs, inflection: Box<dyn Inflection>) -> Self {
        Self {
            phase: Phase::Loading,
            guesses: Vec::new(),
            attempts: 0,
            show_hint: false,
            glyphs,
            inflection,
        }
    }

    pub fn board(&self) -> Option<&Board> {
        match &self.phase {
            Phase::Ready(board) => Some(board),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    pub fn update(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::Loaded(article) => {
                // keep the answer out of info-level logs
                info!(title = %mask(&article.title, self.glyphs), "article loaded");
                debug!(title = %article.title, "unmasked title");
                self.phase = Phase::Ready(Board::new(article, self.glyphs));
                None
            }
            Action::LoadFailed(reason) => {
                warn!(%reason, "article fetch failed");
                self.phase = Phase::Failed;
                None
            }
            Action::Guess(raw) => {
                self.guess(&raw);
                None
            }
            Action::Reset => {
                self.guesses.clear();
                self.attempts = 0;
                self.show_hint = false;
                self.phase = Phase::Loading;
                Some(Command::FetchArticle)
            }
            Action::RevealVowel(vowel) => {
                if let Phase::Ready(board) = &mut self.phase {
                    let revealed = board.reveal_letter(vowel);
                    debug!(%vowel, revealed, "vowel hint used");
                }
                None
            }
            Action::ToggleHint => {
                if self.board().is_some() {
                    self.show_hint = !self.show_hint;
                }
                None
            }
        }
    }

    fn guess(&mut self, raw: &str) {
        let Phase::Ready(board) = &mut self.phase else {
            return;
        };

        let word = normalize_guess(raw);
        let found = board.find(&word, self.inflection.as_ref());
        let is_correct = match &found {
            Some(m) => {
                let revealed = board.reveal(m);
                debug!(
                    %word,
                    form = %m.form,
                    occurrences = m.spans.len(),
                    revealed,
                    "correct guess"
                );
                true
            }
            None => {
                debug!(%word, "wrong guess");
                false
            }
        };

        self.guesses.push(GuessRecord { word, is_correct });
        self.attempts += 1;
    }
}
