use crate::debug_log;
use crate::round::{MAX_ERRORS, Round};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io;

/// One drawing per error count, from empty gallows to full figure.
pub const GALLOWS: [&str; MAX_ERRORS + 1] = [
    r"
  +---+
  |   |
      |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"
  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

fn letters_line(letters: &[char]) -> String {
    letters
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pure rendering of the round: stage drawing, masked word, sorted hit and
/// miss lists, and the running error count.
pub fn render_round(round: &Round) -> String {
    format!(
        "{}\n\nWord: {}\nCorrect: {}\nWrong: {}\nErrors: {}/{}\n",
        GALLOWS[round.error_count().min(MAX_ERRORS)],
        round.masked_word(),
        letters_line(&round.correct_letters()),
        letters_line(&round.wrong_letters()),
        round.error_count(),
        MAX_ERRORS,
    )
}

/// Clears the terminal before a render. Cosmetic only; failures (e.g. when
/// stdout is not a terminal) are logged and ignored.
pub fn clear_screen() {
    if let Err(e) = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0)) {
        debug_log!("Screen clear failed: {e}");
    }
}
