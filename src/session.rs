use crate::debug_log;
use crate::display::{clear_screen, render_round};
use crate::input::read_letter;
use crate::round::{Round, RoundState};
use crate::words::{append_word, choose_word, sample_words};
use std::io::BufRead;
use std::path::Path;

const LIST_SAMPLE_SIZE: usize = 20;

enum MenuChoice {
    Play,
    ListWords,
    AddWord,
    Quit,
}

/// Top-level menu loop. Owns the in-memory word list for the whole session
/// and passes it into word-source operations; rounds never mutate it.
pub fn session_loop<R: BufRead>(
    reader: &mut R,
    words: &mut Vec<String>,
    words_path: &Path,
    clear_between_renders: bool,
) {
    loop {
        let Some(choice) = read_menu_choice(reader) else {
            break;
        };
        match choice {
            MenuChoice::Play => {
                let Some(secret) = choose_word(words).cloned() else {
                    println!("No words available.");
                    continue;
                };
                play_round(reader, &secret, clear_between_renders);
                if !ask_continue(reader) {
                    break;
                }
            }
            MenuChoice::ListWords => list_words(words),
            MenuChoice::AddWord => add_word(reader, words, words_path),
            MenuChoice::Quit => {
                println!("Bye!");
                break;
            }
        }
    }
}

fn read_menu_choice<R: BufRead>(reader: &mut R) -> Option<MenuChoice> {
    loop {
        println!("\n=== Hangman ===");
        println!("1) Play");
        println!("2) List words");
        println!("3) Add word");
        println!("4) Quit");
        println!("Choose an option:");

        let mut input = String::new();
        match reader.read_line(&mut input) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }
        match input.trim() {
            "1" => return Some(MenuChoice::Play),
            "2" => return Some(MenuChoice::ListWords),
            "3" => return Some(MenuChoice::AddWord),
            "4" => return Some(MenuChoice::Quit),
            other => println!("Invalid option '{other}'. Enter 1-4."),
        }
    }
}

/// Runs one round to a terminal state. Returns `InProgress` only when the
/// input stream ends mid-round.
pub fn play_round<R: BufRead>(
    reader: &mut R,
    secret: &str,
    clear_between_renders: bool,
) -> RoundState {
    let mut round = Round::new(secret);
    loop {
        if clear_between_renders {
            clear_screen();
        }
        print!("{}", render_round(&round));

        match round.state() {
            RoundState::Won => {
                println!("You won! The word was '{}'.", round.secret());
                return RoundState::Won;
            }
            RoundState::Lost => {
                println!("You lost. The word was '{}'.", round.secret());
                return RoundState::Lost;
            }
            RoundState::InProgress => {
                let Some(letter) = read_letter(reader, &round) else {
                    return RoundState::InProgress;
                };
                let outcome = round.guess(letter);
                debug_log!("Guess '{letter}': {outcome:?}");
            }
        }
    }
}

fn ask_continue<R: BufRead>(reader: &mut R) -> bool {
    println!("Keep playing? (y/n)");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return false,
        Ok(_) => {}
    }
    !input.trim().eq_ignore_ascii_case("n")
}

fn list_words(words: &[String]) {
    let sample = sample_words(words, LIST_SAMPLE_SIZE);
    println!("Words ({} of {}):", sample.len(), words.len());
    for word in sample {
        println!("  {word}");
    }
}

fn add_word<R: BufRead>(reader: &mut R, words: &mut Vec<String>, words_path: &Path) {
    println!("Enter a new word:");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => return,
        Ok(_) => {}
    }
    match append_word(words_path, words, &input) {
        Ok(()) => println!("Added '{}'. {} words total.", input.trim().to_lowercase(), words.len()),
        Err(e) => println!("Could not add word: {e}"),
    }
}
