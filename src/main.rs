use hangman::cli::parse_cli;
use hangman::session::session_loop;
use hangman::words::load_word_list;
use hangman::info_log;
use std::io;
use std::path::Path;

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let words_path = Path::new(&cli.words_path);
    let mut words = load_word_list(words_path);
    info_log!("Word list ready with {} entries", words.len());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    session_loop(&mut reader, &mut words, words_path, !cli.no_clear);
}
