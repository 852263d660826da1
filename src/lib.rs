// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod display;
pub mod input;
pub mod logging;
pub mod round;
pub mod session;
pub mod words;

// Re-export commonly used items for easier testing
pub use round::{GuessOutcome, MAX_ERRORS, Round, RoundState};
pub use session::{play_round, session_loop};
pub use words::{
    append_word, choose_word, load_word_list, load_words_from_file, load_words_from_str,
};
