use crate::round::Round;
use std::io::BufRead;

enum LetterInput {
    Valid(char),
    Invalid,
}

fn validate_letter(input: &str, round: &Round) -> LetterInput {
    let mut chars = input.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        println!("Please enter exactly one letter.");
        return LetterInput::Invalid;
    };
    if !letter.is_ascii_lowercase() {
        println!("Please enter a letter from a to z.");
        return LetterInput::Invalid;
    }
    if round.has_guessed(letter) {
        println!("You already guessed '{letter}'. Try a different letter.");
        return LetterInput::Invalid;
    }
    LetterInput::Valid(letter)
}

/// Prompts until a single novel lowercase letter arrives. Input is trimmed
/// and lowercased before validation, so "A" counts as a repeat of "a".
/// Returns `None` only when the input stream ends.
pub fn read_letter<R: BufRead>(reader: &mut R, round: &Round) -> Option<char> {
    loop {
        println!("Guess a letter:");
        let mut input = String::new();
        match reader.read_line(&mut input) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        let input = input.trim().to_lowercase();

        match validate_letter(&input, round) {
            LetterInput::Valid(letter) => return Some(letter),
            LetterInput::Invalid => {}
        }
    }
}
