//! Bulls and Cows engine: round lifecycle, validation, scoring.

use portfolio::bulls_cows::{
    generate_secret, restart_round, score, start_round, submit_guess, Guess, GuessError, Outcome,
    Round, Secret,
};
use portfolio::constants::{MAX_ATTEMPTS, SECRET_LEN};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn round_for(code: &str) -> Round {
    Round::with_secret(Secret::parse(code).unwrap())
}

fn is_valid_code(digits: &[u8; SECRET_LEN]) -> bool {
    let mut seen = [false; 10];
    digits.iter().all(|d| {
        d.is_ascii_digit() && !std::mem::replace(&mut seen[(d - b'0') as usize], true)
    })
}

// =========================================================================
// Secret generation
// =========================================================================

proptest! {
    #[test]
    fn prop_secret_is_four_distinct_digits(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let secret = generate_secret(&mut rng);
        prop_assert!(is_valid_code(secret.digits()));
        prop_assert_eq!(secret.to_string().len(), SECRET_LEN);
    }

    #[test]
    fn prop_start_round_is_fresh(seed in any::<u64>()) {
        let round = start_round(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(round.outcome(), Outcome::InProgress);
        prop_assert!(round.history().is_empty());
        prop_assert_eq!(round.remaining_attempts(), MAX_ATTEMPTS);
    }

    #[test]
    fn prop_bulls_plus_cows_bounded(seed in any::<u64>(), other in any::<u64>()) {
        let secret = generate_secret(&mut ChaCha8Rng::seed_from_u64(seed));
        let guess_code = generate_secret(&mut ChaCha8Rng::seed_from_u64(other));
        let guess = Guess::parse(&guess_code.to_string()).unwrap();
        let (bulls, cows) = score(&guess, &secret);
        prop_assert!(bulls as usize + cows as usize <= SECRET_LEN);
        prop_assert_eq!(bulls as usize == SECRET_LEN, guess_code == secret);
    }

    #[test]
    fn prop_rejected_input_never_consumes(raw in "\\PC{0,6}") {
        let mut round = round_for("1234");
        if submit_guess(&mut round, &raw).is_err() {
            prop_assert!(round.history().is_empty());
            prop_assert_eq!(round.remaining_attempts(), MAX_ATTEMPTS);
            prop_assert_eq!(round.outcome(), Outcome::InProgress);
        }
    }
}

#[test]
fn test_secrets_vary_across_rounds() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let first = generate_secret(&mut rng);
    let differs = (0..20).any(|_| generate_secret(&mut rng) != first);
    assert!(differs);
}

// =========================================================================
// Scoring examples
// =========================================================================

#[test]
fn test_exact_match_wins() {
    let mut round = round_for("1234");
    let attempt = submit_guess(&mut round, "1234").unwrap();
    assert_eq!((attempt.bulls, attempt.cows), (4, 0));
    assert_eq!(round.outcome(), Outcome::Won);
}

#[test]
fn test_reversed_is_all_cows() {
    let mut round = round_for("1234");
    let attempt = submit_guess(&mut round, "4321").unwrap();
    assert_eq!((attempt.bulls, attempt.cows), (0, 4));
    assert_eq!(round.outcome(), Outcome::InProgress);
}

#[test]
fn test_swapped_middle() {
    let mut round = round_for("1234");
    let attempt = submit_guess(&mut round, "1324").unwrap();
    assert_eq!((attempt.bulls, attempt.cows), (2, 2));
}

// =========================================================================
// Validation
// =========================================================================

#[test]
fn test_short_input_rejected() {
    let mut round = round_for("1234");
    assert_eq!(submit_guess(&mut round, "11"), Err(GuessError::InvalidFormat));
    assert_eq!(round.remaining_attempts(), MAX_ATTEMPTS);
}

#[test]
fn test_repeated_digit_rejected() {
    let mut round = round_for("1234");
    assert_eq!(
        submit_guess(&mut round, "1123"),
        Err(GuessError::DuplicateDigits)
    );
    assert_eq!(round.remaining_attempts(), MAX_ATTEMPTS);
}

// =========================================================================
// Termination and reset
// =========================================================================

#[test]
fn test_ten_misses_lose() {
    let mut round = round_for("1234");
    let misses = ["5678", "5679", "5689", "5789", "6789", "0567", "0568", "0569", "0578", "0579"];
    for (i, guess) in misses.iter().enumerate() {
        let attempt = submit_guess(&mut round, guess).unwrap();
        assert_eq!(attempt.ordinal, i + 1);
    }
    assert_eq!(round.outcome(), Outcome::Lost);
    assert_eq!(round.remaining_attempts(), 0);
    assert_eq!(
        submit_guess(&mut round, "1234"),
        Err(GuessError::RoundFinished)
    );
    assert_eq!(round.history().len(), MAX_ATTEMPTS);
}

#[test]
fn test_restart_after_loss_and_mid_round() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut round = round_for("1234");
    for _ in 0..MAX_ATTEMPTS {
        submit_guess(&mut round, "9876").unwrap();
    }
    assert_eq!(round.outcome(), Outcome::Lost);

    restart_round(&mut round, &mut rng);
    assert_eq!(round.outcome(), Outcome::InProgress);
    assert!(round.history().is_empty());

    let guess = if round.reveal_secret().to_string() == "0123" {
        "4567"
    } else {
        "0123"
    };
    submit_guess(&mut round, guess).unwrap();
    restart_round(&mut round, &mut rng);
    assert!(round.history().is_empty());
    assert_eq!(round.remaining_attempts(), MAX_ATTEMPTS);
}

#[test]
fn test_read_accessors_are_idempotent() {
    let mut round = round_for("3791");
    submit_guess(&mut round, "3719").unwrap();
    let before: Vec<_> = round.history().to_vec();
    for _ in 0..3 {
        assert_eq!(round.reveal_secret().to_string(), "3791");
        assert_eq!(round.remaining_attempts(), MAX_ATTEMPTS - 1);
    }
    assert_eq!(round.history(), before.as_slice());
    assert_eq!(round.outcome(), Outcome::InProgress);
}

#[test]
fn test_full_game_with_revealed_secret() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut round = start_round(&mut rng);
    let secret = round.reveal_secret().to_string();

    let attempt = submit_guess(&mut round, &secret).unwrap();
    assert_eq!(attempt.ordinal, 1);
    assert!(attempt.is_winning());
    assert_eq!(round.outcome(), Outcome::Won);
    assert_eq!(round.remaining_attempts(), MAX_ATTEMPTS - 1);
}
