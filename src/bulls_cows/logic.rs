//! Bulls and Cows game logic.
//!
//! Handles secret generation, scoring, and guess submission.

use super::{Attempt, Guess, GuessError, Outcome, Round, Secret};
use crate::constants::{DIGITS, MAX_ATTEMPTS, SECRET_LEN};
use rand::Rng;

/// Draw 4 distinct digits, order as drawn.
pub fn generate_secret<R: Rng>(rng: &mut R) -> Secret {
    // Partial Fisher-Yates: sampling without replacement
    let mut pool = DIGITS;
    for i in 0..SECRET_LEN {
        let j = rng.gen_range(i..pool.len());
        pool.swap(i, j);
    }
    let mut digits = [0u8; SECRET_LEN];
    digits.copy_from_slice(&pool[..SECRET_LEN]);
    Secret::from_digits(digits)
}

/// Score a guess against the secret, returning `(bulls, cows)`.
///
/// A mismatched digit counts as a cow if it appears anywhere in the secret.
/// Matched secret positions are not reserved; with distinct digits on both
/// sides this is the same as the stricter Mastermind rule.
pub fn score(guess: &Guess, secret: &Secret) -> (u8, u8) {
    let mut bulls = 0;
    let mut cows = 0;
    for (g, s) in guess.digits().iter().zip(secret.digits()) {
        if g == s {
            bulls += 1;
        } else if secret.contains(*g) {
            cows += 1;
        }
    }
    (bulls, cows)
}

/// Start a fresh round with a newly drawn secret.
pub fn start_round<R: Rng>(rng: &mut R) -> Round {
    let round = Round::with_secret(generate_secret(rng));
    tracing::debug!("new round started");
    round
}

/// Reset a round in place: new secret, empty history, in progress.
/// Works from any state, including a finished round.
pub fn restart_round<R: Rng>(round: &mut Round, rng: &mut R) {
    *round = start_round(rng);
}

/// Validate and score raw input. Rejections leave the round untouched.
pub fn submit_guess(round: &mut Round, raw_input: &str) -> Result<Attempt, GuessError> {
    let guess = Guess::parse(raw_input)?;
    if round.outcome.is_finished() {
        return Err(GuessError::RoundFinished);
    }

    let (bulls, cows) = score(&guess, &round.secret);
    let attempt = Attempt {
        ordinal: round.history.len() + 1,
        guess,
        bulls,
        cows,
    };
    round.history.push(attempt);

    if attempt.is_winning() {
        round.outcome = Outcome::Won;
    } else if round.history.len() >= MAX_ATTEMPTS {
        round.outcome = Outcome::Lost;
    }

    tracing::debug!(
        ordinal = attempt.ordinal,
        bulls,
        cows,
        outcome = ?round.outcome,
        "guess scored"
    );
    Ok(attempt)
}
