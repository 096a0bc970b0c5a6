//! Bulls and Cows data structures.
//!
//! A four-digit code-breaking game: the player has a fixed number of
//! attempts to find a secret of distinct digits, guided by bulls (right
//! digit, right place) and cows (right digit, wrong place).

use crate::constants::{MAX_ATTEMPTS, SECRET_LEN};
use std::fmt;
use thiserror::Error;

/// Why a submitted guess was turned away. None of these consume an attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Enter exactly 4 digits!")]
    InvalidFormat,
    #[error("Digits must be unique!")]
    DuplicateDigits,
    #[error("Round is over, start a new game")]
    RoundFinished,
}

/// Validate a 4-digit code of distinct ASCII digits.
pub(crate) fn parse_code(raw: &str) -> Result<[u8; SECRET_LEN], GuessError> {
    let raw = raw.trim();
    if raw.chars().count() != SECRET_LEN || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(GuessError::InvalidFormat);
    }

    let mut digits = [0u8; SECRET_LEN];
    digits.copy_from_slice(raw.as_bytes());

    let mut seen = [false; 10];
    for &d in &digits {
        let slot = &mut seen[(d - b'0') as usize];
        if *slot {
            return Err(GuessError::DuplicateDigits);
        }
        *slot = true;
    }
    Ok(digits)
}

fn write_digits(f: &mut fmt::Formatter<'_>, digits: &[u8; SECRET_LEN]) -> fmt::Result {
    for &d in digits {
        write!(f, "{}", d as char)?;
    }
    Ok(())
}

/// The hidden code for one round: 4 distinct digits, order significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secret([u8; SECRET_LEN]);

impl Secret {
    /// Build a secret from a known code, e.g. for a scripted round.
    pub fn parse(raw: &str) -> Result<Self, GuessError> {
        parse_code(raw).map(Self)
    }

    pub(crate) fn from_digits(digits: [u8; SECRET_LEN]) -> Self {
        debug_assert!(
            parse_code(std::str::from_utf8(&digits).unwrap_or("")).is_ok(),
            "secret must be 4 distinct digits"
        );
        Self(digits)
    }

    pub fn digits(&self) -> &[u8; SECRET_LEN] {
        &self.0
    }

    pub fn contains(&self, digit: u8) -> bool {
        self.0.contains(&digit)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

/// A validated guess: same shape as [`Secret`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess([u8; SECRET_LEN]);

impl Guess {
    /// Validate raw player input. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Result<Self, GuessError> {
        parse_code(raw).map(Self)
    }

    pub fn digits(&self) -> &[u8; SECRET_LEN] {
        &self.0
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_digits(f, &self.0)
    }
}

/// A scored guess. `ordinal` is 1-based and strictly increasing within a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attempt {
    pub ordinal: usize,
    pub guess: Guess,
    pub bulls: u8,
    pub cows: u8,
}

impl Attempt {
    pub fn is_winning(&self) -> bool {
        self.bulls as usize == SECRET_LEN
    }
}

/// Round outcome. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Full round state. Fields are only mutated by the functions in `logic`.
#[derive(Debug, Clone)]
pub struct Round {
    pub(crate) secret: Secret,
    pub(crate) history: Vec<Attempt>,
    pub(crate) outcome: Outcome,
}

impl Round {
    /// Start a round against a fixed secret.
    pub fn with_secret(secret: Secret) -> Self {
        Self {
            secret,
            history: Vec::with_capacity(MAX_ATTEMPTS),
            outcome: Outcome::InProgress,
        }
    }

    pub fn reveal_secret(&self) -> &Secret {
        &self.secret
    }

    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS.saturating_sub(self.history.len())
    }

    /// Scored attempts in submission order.
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    pub fn last_attempt(&self) -> Option<&Attempt> {
        self.history.last()
    }

    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}
