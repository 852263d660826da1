use crate::debug_log;
use rand::seq::IndexedRandom;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

/// Fallback list used when no usable word file is found.
pub const DEFAULT_WORDS: [&str; 10] = [
    "gato", "perro", "casa", "sol", "luna", "arbol", "rio", "nube", "flor", "mar",
];

#[derive(Debug, Error)]
pub enum WordError {
    #[error("word is empty")]
    Empty,
    #[error("word must contain only letters a-z")]
    NotAlphabetic,
    #[error("word is already in the list")]
    Duplicate,
    #[error("could not write to word file: {0}")]
    Io(#[from] io::Error),
}

pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())
}

pub fn load_words_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_valid_word(word))
        .collect()
}

pub fn load_words_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let data = std::fs::read_to_string(path)?;
    Ok(load_words_from_str(&data))
}

/// Loads the word list from `path`, falling back to [`DEFAULT_WORDS`] when the
/// file is missing, unreadable, or contains no valid entries. Never fails.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Vec<String> {
    match load_words_from_file(&path) {
        Ok(words) if !words.is_empty() => {
            debug_log!(
                "Loaded {} words from {}",
                words.len(),
                path.as_ref().display()
            );
            words
        }
        Ok(_) => {
            debug_log!(
                "{} had no valid entries, using defaults",
                path.as_ref().display()
            );
            default_word_list()
        }
        Err(e) => {
            debug_log!("Could not read {}: {e}", path.as_ref().display());
            default_word_list()
        }
    }
}

pub fn default_word_list() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| (*w).to_string()).collect()
}

pub fn choose_word(words: &[String]) -> Option<&String> {
    words.choose(&mut rand::rng())
}

/// Up to `n` random entries, for the list-words menu action.
pub fn sample_words(words: &[String], n: usize) -> Vec<&String> {
    words.choose_multiple(&mut rand::rng(), n).collect()
}

/// Validates `word`, appends it to the backing file, and only then pushes it
/// into the in-memory list so the two stay consistent on write failure.
pub fn append_word<P: AsRef<Path>>(
    path: P,
    words: &mut Vec<String>,
    word: &str,
) -> Result<(), WordError> {
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    if !is_valid_word(&word) {
        return Err(WordError::NotAlphabetic);
    }
    if words.contains(&word) {
        return Err(WordError::Duplicate);
    }

    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path.as_ref())?;
    writeln!(file, "{word}")?;

    words.push(word);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_filters_and_normalizes() {
        let words = load_words_from_str("cat\n123\nDOG\n\n");
        assert_eq!(words, vec!["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_load_trims_whitespace() {
        let words = load_words_from_str("  gato  \n\tperro\n");
        assert_eq!(words, vec!["gato".to_string(), "perro".to_string()]);
    }

    #[test]
    fn test_load_drops_mixed_content() {
        let words = load_words_from_str("two words\nok\nhy-phen\n");
        assert_eq!(words, vec!["ok".to_string()]);
    }

    #[test]
    fn test_default_words_are_valid() {
        for word in DEFAULT_WORDS {
            assert!(is_valid_word(word), "default word {word:?} is invalid");
        }
    }

    #[test]
    fn test_load_word_list_missing_file_falls_back() {
        let words = load_word_list("/nonexistent/path/words.txt");
        assert_eq!(words.len(), DEFAULT_WORDS.len());
    }

    #[test]
    fn test_load_word_list_all_invalid_falls_back() {
        let path = std::env::temp_dir().join("hangman_test_invalid_words.txt");
        fs::write(&path, "123\n!!!\n\n").unwrap();
        let words = load_word_list(&path);
        assert_eq!(words.len(), DEFAULT_WORDS.len());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_choose_word_returns_member() {
        let words = default_word_list();
        for _ in 0..20 {
            assert!(words.contains(choose_word(&words).unwrap()));
        }
        assert!(choose_word(&[]).is_none());
    }

    #[test]
    fn test_sample_words_caps_at_list_size() {
        let words = vec!["gato".to_string(), "sol".to_string()];
        assert_eq!(sample_words(&words, 20).len(), 2);
    }

    #[test]
    fn test_append_word_rejects_invalid() {
        let path = std::env::temp_dir().join("hangman_test_append_invalid.txt");
        let _ = fs::remove_file(&path);
        let mut words = vec!["gato".to_string()];

        assert!(matches!(
            append_word(&path, &mut words, ""),
            Err(WordError::Empty)
        ));
        assert!(matches!(
            append_word(&path, &mut words, "h4ck"),
            Err(WordError::NotAlphabetic)
        ));
        assert!(matches!(
            append_word(&path, &mut words, "gato"),
            Err(WordError::Duplicate)
        ));

        // Nothing written, nothing added in memory
        assert_eq!(words, vec!["gato".to_string()]);
        assert!(!path.exists());
    }

    #[test]
    fn test_append_word_round_trip() {
        let path = std::env::temp_dir().join("hangman_test_append_round_trip.txt");
        fs::write(&path, "gato\nperro\n").unwrap();
        let mut words = load_words_from_file(&path).unwrap();

        append_word(&path, &mut words, "Nube").unwrap();
        assert!(words.contains(&"nube".to_string()));

        let reloaded = load_words_from_file(&path).unwrap();
        assert_eq!(reloaded, vec!["gato", "perro", "nube"]);
        assert_eq!(reloaded.iter().filter(|w| *w == "nube").count(), 1);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_append_word_creates_file() {
        let path = std::env::temp_dir().join("hangman_test_append_creates.txt");
        let _ = fs::remove_file(&path);
        let mut words = Vec::new();

        append_word(&path, &mut words, "flor").unwrap();
        assert_eq!(load_words_from_file(&path).unwrap(), vec!["flor"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_append_word_write_failure_leaves_memory_untouched() {
        let mut words = vec!["gato".to_string()];
        let result = append_word("/nonexistent/dir/words.txt", &mut words, "sol");
        assert!(matches!(result, Err(WordError::Io(_))));
        assert_eq!(words, vec!["gato".to_string()]);
    }
}
