//! Bulls and Cows: the portfolio's digit-guessing game.

pub mod logic;
pub mod types;

pub use logic::{generate_secret, restart_round, score, start_round, submit_guess};
pub use types::{Attempt, Guess, GuessError, Outcome, Round, Secret};
