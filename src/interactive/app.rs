//! TUI application state and logic

use crate::core::{GuessError, RoundStatus, WORD_LENGTH, WordOracle, WordSource};
use crate::game::Game;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;

/// Application state
pub struct App<S, O> {
    pub game: Game<S, O>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub debug: bool,
    pub stats_path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<S: WordSource, O: WordOracle> App<S, O> {
    #[must_use]
    pub fn new(game: Game<S, O>, debug: bool, stats_path: Option<PathBuf>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Guess the word! Type letters, Enter to submit.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            debug,
            stats_path,
        }
    }

    /// Whether the current round is over and waiting for a new game
    #[must_use]
    pub fn round_over(&self) -> bool {
        self.game.round().status().is_terminal()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if key.code == KeyCode::Tab {
            self.debug = !self.debug;
            return;
        }

        if self.round_over() {
            match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < WORD_LENGTH {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit_guess(),
            _ => {}
        }
    }

    pub fn submit_guess(&mut self) {
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        let guess = self.input_buffer.clone();
        match self.game.submit(&guess) {
            Ok(submission) => {
                self.input_buffer.clear();
                match submission.status {
                    RoundStatus::Won => {
                        self.add_message("Congratulations! You guessed it!", MessageStyle::Success);
                        self.finish_round();
                    }
                    RoundStatus::Lost => {
                        let text = format!(
                            "Out of guesses! The word was: {}",
                            self.game.secret().text().to_uppercase()
                        );
                        self.add_message(&text, MessageStyle::Error);
                        self.finish_round();
                    }
                    RoundStatus::AwaitingInput => {}
                }
            }
            Err(GuessError::UnknownWord(word)) => {
                self.add_message(
                    &format!("{} is not a valid word!", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_round(&mut self) {
        if let Some(path) = &self.stats_path
            && let Err(e) = self.game.stats().save(path)
        {
            tracing::warn!("{e:#}");
            self.add_message("Could not save stats", MessageStyle::Error);
        }
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource, O: WordOracle>(app: App<S, O>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, S, O>(terminal: &mut Terminal<B>, mut app: App<S, O>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource,
    O: WordOracle,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Stats;
    use crate::wordlists::{Dictionary, FixedSource};

    fn app(secret: &str) -> App<FixedSource, Dictionary> {
        let game = Game::new(
            FixedSource::new(secret),
            Dictionary::embedded(),
            Stats::default(),
        );
        App::new(game, false, None)
    }

    fn press(app: &mut App<FixedSource, Dictionary>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App<FixedSource, Dictionary>, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    fn last_message(app: &App<FixedSource, Dictionary>) -> &str {
        &app.messages.last().unwrap().text
    }

    #[test]
    fn typing_is_capped_and_lowercased() {
        let mut app = app("crane");
        for c in "TRACES".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.input_buffer, "trace");

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.input_buffer, "trac");
    }

    #[test]
    fn short_guess_is_not_submitted() {
        let mut app = app("crane");
        type_word(&mut app, "cra");
        assert_eq!(last_message(&app), "Not enough letters");
        assert_eq!(app.game.round().guesses_used(), 0);
        assert_eq!(app.input_buffer, "cra");
    }

    #[test]
    fn unknown_word_keeps_input() {
        let mut app = app("crane");
        type_word(&mut app, "xqzvk");
        assert_eq!(last_message(&app), "XQZVK is not a valid word!");
        assert_eq!(app.input_buffer, "xqzvk");
        assert_eq!(app.game.round().guesses_used(), 0);
    }

    #[test]
    fn win_then_new_game() {
        let mut app = app("crane");
        type_word(&mut app, "trace");
        type_word(&mut app, "crane");

        assert!(app.round_over());
        assert_eq!(app.game.stats().wins, 1);
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Congratulations! You guessed it!")
        );

        // Letters are ignored until a new game starts
        press(&mut app, KeyCode::Char('a'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert!(!app.round_over());
        assert_eq!(app.game.round().guesses_used(), 0);
    }

    #[test]
    fn loss_reveals_answer() {
        let mut app = app("crane");
        for _ in 0..crate::core::MAX_GUESSES {
            type_word(&mut app, "slate");
        }
        assert!(app.round_over());
        assert!(
            app.messages
                .iter()
                .any(|m| m.text == "Out of guesses! The word was: CRANE")
        );
        assert_eq!(app.game.stats().losses, 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = app("crane");
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit, "q is a letter while playing");

        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = super::tests::app("crane");
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn tab_toggles_answer_reveal() {
        let mut app = app("crane");
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Tab);
        assert!(app.debug);
        assert_eq!(app.input_buffer, "t");

        press(&mut app, KeyCode::Tab);
        assert!(!app.debug);
        press(&mut app, KeyCode::Backspace);

        for _ in 0..crate::core::MAX_GUESSES {
            type_word(&mut app, "slate");
        }
        press(&mut app, KeyCode::Tab);
        assert!(app.debug, "toggle works after the round ends");
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app("crane");
        for i in 0..10 {
            app.add_message(&format!("msg {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(last_message(&app), "msg 9");
    }
}
