use clap::Parser;

pub const DEFAULT_WORDS_FILE: &str = "words.txt";

/// Hangman CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited word list file
    #[arg(short = 'w', long = "words", default_value = DEFAULT_WORDS_FILE)]
    pub words_path: String,

    /// Do not clear the screen between renders
    #[arg(long = "no-clear")]
    pub no_clear: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
