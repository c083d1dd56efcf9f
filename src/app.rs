use crate::config::Theme;
use crate::fetch::ArticleSource;
use crate::game::{Action, Command, Session};
use rand::seq::IndexedRandom;

pub const VOWELS: [char; 6] = ['a', 'e', 'i', 'o', 'u', 'y'];

pub struct App {
    pub should_quit: bool,
    pub session: Session,
    pub theme: Theme,

    pub input: String,
    pub history_scroll: usize,

    source: Box<dyn ArticleSource>,
    pending: Option<Command>,
}

impl App {
    /// The first article is requested right away; it is fetched on the next
    /// [`App::run_pending`] so a loading frame can be drawn first.
    pub fn new(source: Box<dyn ArticleSource>, session: Session, theme: Theme) -> Self {
        Self {
            should_quit: false,
            session,
            theme,
            input: String::new(),
            history_scroll: 0,
            source,
            pending: Some(Command::FetchArticle),
        }
    }

    pub fn quit(&mut self) { self.should_quit = true; }

    pub fn has_pending(&self) -> bool { self.pending.is_some() }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some() || self.session.is_loading()
    }

    /// Execute the outstanding command, blocking until it settles.
    pub fn run_pending(&mut self) {
        let Some(command) = self.pending.take() else {
            return;
        };

        match command {
            Command::FetchArticle => {
                let action = match self.source.fetch_random() {
                    Ok(article) => Action::Loaded(article),
                    Err(err) => Action::LoadFailed(err.to_string()),
                };
                self.dispatch(action);
            }
        }
    }

    fn dispatch(&mut self, action: Action) {
        if let Some(command) = self.session.update(action) {
            self.pending = Some(command);
        }
    }

    pub fn on_key(&mut self, c: char) {
        if self.session.board().is_none() { return; }
        self.input.push(c);
    }

    pub fn on_backspace(&mut self) {
        self.input.pop();
    }

    pub fn submit_guess(&mut self) {
        if self.session.board().is_none() { return; }
        // an empty line is most likely a stray Enter, not a guess
        if self.input.trim().is_empty() {
            self.input.clear();
            return;
        }

        let guess = std::mem::take(&mut self.input);
        self.dispatch(Action::Guess(guess));
        self.history_scroll = 0;
    }

    pub fn restart(&mut self) {
        if self.pending.is_some() { return; }
        self.input.clear();
        self.history_scroll = 0;
        self.dispatch(Action::Reset);
    }

    pub fn toggle_hint(&mut self) {
        self.dispatch(Action::ToggleHint);
    }

    pub fn reveal_random_vowel(&mut self) {
        let mut rng = rand::rng();
        if let Some(&vowel) = VOWELS.choose(&mut rng) {
            self.dispatch(Action::RevealVowel(vowel));
        }
    }

    pub fn scroll_history_down(&mut self) {
        let max = self.session.guesses.len().saturating_sub(1);
        self.history_scroll = (self.history_scroll + 1).min(max);
    }

    pub fn scroll_history_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use crate::game::Phase;
    use crate::models::Article;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    struct ScriptedSource {
        replies: RefCell<VecDeque<Result<Article, FetchError>>>,
    }

    impl ScriptedSource {
        fn new(replies: Vec<Result<Article, FetchError>>) -> Box<Self> {
            Box::new(Self {
                replies: RefCell::new(replies.into()),
            })
        }
    }

    impl ArticleSource for ScriptedSource {
        fn fetch_random(&self) -> Result<Article, FetchError> {
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Err(FetchError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE)))
        }
    }

    fn paris() -> Article {
        Article::new("Paris", "Paris est la capitale de la France.", "")
    }

    fn app_with(replies: Vec<Result<Article, FetchError>>) -> App {
        App::new(ScriptedSource::new(replies), Session::default(), Theme::default())
    }

    fn type_and_submit(app: &mut App, text: &str) {
        for c in text.chars() {
            app.on_key(c);
        }
        app.submit_guess();
    }

    #[test]
    fn first_frame_is_loading_then_article_arrives() {
        let mut app = app_with(vec![Ok(paris())]);
        assert!(app.is_loading());
        assert!(app.has_pending());

        app.run_pending();
        assert!(!app.is_loading());
        assert!(app.session.board().is_some());
    }

    #[test]
    fn typing_and_submitting_records_a_guess() {
        let mut app = app_with(vec![Ok(paris())]);
        app.run_pending();

        type_and_submit(&mut app, "Paris");
        assert!(app.input.is_empty());
        assert_eq!(app.session.attempts, 1);
        assert!(app.session.guesses[0].is_correct);
    }

    #[test]
    fn keys_are_ignored_while_loading() {
        let mut app = app_with(vec![Ok(paris())]);
        type_and_submit(&mut app, "paris");
        assert!(app.input.is_empty());
        assert_eq!(app.session.attempts, 0);
    }

    #[test]
    fn empty_submit_is_not_an_attempt() {
        let mut app = app_with(vec![Ok(paris())]);
        app.run_pending();
        type_and_submit(&mut app, "   ");
        assert_eq!(app.session.attempts, 0);
        assert!(app.input.is_empty());
    }

    #[test]
    fn failure_then_manual_retry() {
        let mut app = app_with(vec![
            Err(FetchError::Status(reqwest::StatusCode::BAD_GATEWAY)),
            Ok(paris()),
        ]);
        app.run_pending();
        assert!(matches!(app.session.phase, Phase::Failed));
        assert!(!app.has_pending());

        app.restart();
        assert!(app.is_loading());
        app.run_pending();
        assert!(app.session.board().is_some());
    }

    #[test]
    fn restart_clears_input_and_history() {
        let mut app = app_with(vec![Ok(paris()), Ok(paris())]);
        app.run_pending();
        type_and_submit(&mut app, "france");
        app.on_key('x');

        app.restart();
        assert!(app.input.is_empty());
        assert!(app.session.guesses.is_empty());
        app.run_pending();
        assert_eq!(app.session.attempts, 0);
    }

    #[test]
    fn vowel_hint_reveals_something_or_nothing_but_never_counts() {
        let mut app = app_with(vec![Ok(paris())]);
        app.run_pending();
        app.reveal_random_vowel();
        assert_eq!(app.session.attempts, 0);
    }

    #[test]
    fn history_scroll_is_clamped() {
        let mut app = app_with(vec![Ok(paris())]);
        app.run_pending();
        type_and_submit(&mut app, "a");
        type_and_submit(&mut app, "b");

        for _ in 0..5 {
            app.scroll_history_down();
        }
        assert_eq!(app.history_scroll, 1);
        app.scroll_history_up();
        app.scroll_history_up();
        assert_eq!(app.history_scroll, 0);
    }
}
