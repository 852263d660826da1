use std::collections::BTreeSet;

/// Number of gallows stages past the empty one; reaching it loses the round.
pub const MAX_ERRORS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    Miss,
}

/// State for one round: the secret word and every letter guessed so far.
/// The error count is derived from those two, so it can never drift.
#[derive(Debug)]
pub struct Round {
    secret: String,
    guessed: BTreeSet<char>,
}

impl Round {
    pub fn new(secret: &str) -> Self {
        Self {
            secret: secret.to_lowercase(),
            guessed: BTreeSet::new(),
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn error_count(&self) -> usize {
        self.guessed
            .iter()
            .filter(|c| !self.secret.contains(**c))
            .count()
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// Records one validated letter guess. The caller guarantees novelty via
    /// the input validator; a repeat would be a no-op on the set either way.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        self.guessed.insert(letter);
        if self.secret.contains(letter) {
            GuessOutcome::Hit
        } else {
            GuessOutcome::Miss
        }
    }

    /// Won takes priority over Lost: a round whose last guess completes the
    /// word is a win regardless of the error count reached before it.
    pub fn state(&self) -> RoundState {
        if self.secret.chars().all(|c| self.guessed.contains(&c)) {
            RoundState::Won
        } else if self.error_count() >= MAX_ERRORS {
            RoundState::Lost
        } else {
            RoundState::InProgress
        }
    }

    /// Secret word with unguessed positions masked, space-separated.
    pub fn masked_word(&self) -> String {
        let revealed: Vec<String> = self
            .secret
            .chars()
            .map(|c| {
                if self.guessed.contains(&c) {
                    c.to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();
        revealed.join(" ")
    }

    /// Guessed letters present in the secret, in sorted order.
    pub fn correct_letters(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|c| self.secret.contains(*c))
            .collect()
    }

    /// Guessed letters absent from the secret, in sorted order.
    pub fn wrong_letters(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|c| !self.secret.contains(*c))
            .collect()
    }
}
