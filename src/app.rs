//! Presentation state for the terminal app.
//!
//! Owns the current round, the text being typed, the last status message,
//! and whatever the decorative feeds delivered. Updated only through the
//! handlers below; the UI reads it to draw.

use crate::bulls_cows::{restart_round, start_round, submit_guess, Attempt, GuessError, Round};
use crate::constants::SECRET_LEN;
use crate::feeds::{FeedUpdate, Quote, Weather};
use rand::Rng;

/// Input actions for the app (UI-agnostic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppInput {
    Char(char),
    Backspace,
    Submit,
    NewRound,
    Reveal,
    Quit,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

/// Feedback line for a scored attempt, e.g. `#3: 1324  2 bulls, 2 cows`.
pub fn describe_attempt(attempt: &Attempt) -> String {
    format!(
        "#{}: {}  {} bulls, {} cows",
        attempt.ordinal, attempt.guess, attempt.bulls, attempt.cows
    )
}

#[derive(Debug, Clone)]
pub struct App {
    pub round: Round,
    pub input: String,
    pub status: Option<StatusMessage>,
    pub secret_revealed: bool,
    pub weather: Option<Weather>,
    pub quote: Option<Quote>,
    pub should_quit: bool,
}

impl App {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self::with_round(start_round(rng))
    }

    pub fn with_round(round: Round) -> Self {
        Self {
            round,
            input: String::new(),
            status: None,
            secret_revealed: false,
            weather: None,
            quote: None,
            should_quit: false,
        }
    }

    /// Type a character. Ignored once the round is over or the field is full.
    pub fn push_char(&mut self, c: char) {
        if self.round.outcome().is_finished() || c.is_control() {
            return;
        }
        if self.input.chars().count() < SECRET_LEN {
            self.input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the typed text. Accepted guesses clear the field; rejected
    /// ones keep it so the player can fix it.
    pub fn submit(&mut self) -> Result<Attempt, GuessError> {
        match submit_guess(&mut self.round, &self.input) {
            Ok(attempt) => {
                self.input.clear();
                self.status = Some(StatusMessage::info(describe_attempt(&attempt)));
                Ok(attempt)
            }
            Err(e) => {
                tracing::debug!(input = %self.input, error = %e, "guess rejected");
                self.status = Some(StatusMessage::error(e.to_string()));
                Err(e)
            }
        }
    }

    pub fn new_round<R: Rng>(&mut self, rng: &mut R) {
        restart_round(&mut self.round, rng);
        self.input.clear();
        self.status = None;
        self.secret_revealed = false;
    }

    /// Show the secret without ending the round.
    pub fn reveal(&mut self) {
        self.secret_revealed = true;
    }

    pub fn apply_feed(&mut self, update: FeedUpdate) {
        match update {
            FeedUpdate::Weather(weather) => self.weather = weather,
            FeedUpdate::Quote(quote) => self.quote = quote,
        }
    }

    /// Dispatch one input. Returns true if the app should keep running.
    pub fn handle_input<R: Rng>(&mut self, input: AppInput, rng: &mut R) -> bool {
        match input {
            AppInput::Char(c) => self.push_char(c),
            AppInput::Backspace => self.backspace(),
            AppInput::Submit => {
                // Outcome is carried in `status`
                let _ = self.submit();
            }
            AppInput::NewRound => self.new_round(rng),
            AppInput::Reveal => self.reveal(),
            AppInput::Quit => self.should_quit = true,
            AppInput::Other => {}
        }
        !self.should_quit
    }
}
