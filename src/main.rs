//! trie-autocorrect - check words, complete prefixes and suggest corrections.
//!
//! With `WORDS` on the command line each word is answered once and the
//! program exits; otherwise an interactive prompt reads words from stdin
//! until `q` or end of input.
//!
//! Settings come from the user config file (see `--save-config`) and can
//! be overridden per run with flags.

use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use trie_autocorrect::shell::{Shell, ShellOptions};
use trie_autocorrect::{Alphabet, Config, Dictionary, Result, Suggester};

#[derive(Parser, Debug)]
#[command(name = "trie-autocorrect")]
#[command(about = "Word validation, autocomplete and spelling suggestions")]
#[command(version)]
struct Args {
    /// Words to check; reads from stdin when omitted
    words: Vec<String>,

    /// Dictionary file, one word per line (built-in list when omitted)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Characters used for substitutions and insertions
    #[arg(short, long)]
    alphabet: Option<String>,

    /// Drop corrections farther than this edit distance
    #[arg(long)]
    max_distance: Option<usize>,

    /// Maximum suggestions printed per word (0 = all)
    #[arg(short = 'n', long)]
    max_suggestions: Option<usize>,

    /// Do not print autocomplete suggestions
    #[arg(long)]
    no_autocomplete: bool,

    /// Keep the case of input and dictionary words
    #[arg(long)]
    keep_case: bool,

    /// Write the effective settings to the config file
    #[arg(long)]
    save_config: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(alphabet) = &self.alphabet {
            config.alphabet = Alphabet::from(alphabet.as_str());
        }
        if self.max_distance.is_some() {
            config.max_edit_distance = self.max_distance;
        }
        if let Some(max_suggestions) = self.max_suggestions {
            config.max_suggestions = max_suggestions;
        }
        if self.no_autocomplete {
            config.show_autocomplete = false;
        }
        if self.keep_case {
            config.lowercase_input = false;
        }
    }
}

fn main() {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::load()?;
    args.apply(&mut config);

    if args.save_config {
        config.save()?;
        info!("Saved config to {}", Config::path()?.display());
    }

    if config.alphabet.is_empty() {
        info!("Empty alphabet: only deletions and transpositions will be suggested");
    }

    let dictionary = Dictionary::load(args.dictionary.as_deref(), config.lowercase_input)?;
    let index = dictionary.build_index();
    info!("Vocabulary index built: {} words", index.len());

    let suggester = Suggester::with_alphabet(&index, config.alphabet.clone())
        .max_edit_distance(config.max_edit_distance);
    let shell = Shell::new(suggester, ShellOptions::from(&config));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if args.words.is_empty() {
        shell.run(io::stdin().lock(), &mut out)?;
    } else {
        for word in &args.words {
            shell.answer(word, &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overridden(argv: &[&str]) -> Config {
        let argv = std::iter::once("trie-autocorrect").chain(argv.iter().copied());
        let args = Args::try_parse_from(argv).unwrap();
        let mut config = Config::default();
        args.apply(&mut config);
        config
    }

    #[test]
    fn test_no_flags_keep_config() {
        assert_eq!(overridden(&[]), Config::default());
        assert_eq!(overridden(&["hello", "-vv"]), Config::default());
    }

    #[test]
    fn test_alphabet_flag() {
        let config = overridden(&["--alphabet", "cba"]);
        assert_eq!(config.alphabet, Alphabet::from("abc"));
    }

    #[test]
    fn test_max_distance_replaces_none() {
        let config = overridden(&["--max-distance", "1"]);
        assert_eq!(config.max_edit_distance, Some(1));
    }

    #[test]
    fn test_max_suggestions_flag() {
        assert_eq!(overridden(&["-n", "3"]).max_suggestions, 3);
        assert_eq!(overridden(&["--max-suggestions", "0"]).max_suggestions, 0);
    }

    #[test]
    fn test_boolean_flags() {
        let config = overridden(&["--no-autocomplete", "--keep-case"]);
        assert!(!config.show_autocomplete);
        assert!(!config.lowercase_input);
        assert_eq!(config.max_suggestions, Config::default().max_suggestions);
    }

    #[test]
    fn test_flags_override_loaded_values() {
        let args = Args::try_parse_from(["trie-autocorrect", "--max-distance", "2"]).unwrap();
        let mut config = Config {
            max_edit_distance: Some(0),
            show_autocomplete: false,
            ..Config::default()
        };
        args.apply(&mut config);

        assert_eq!(config.max_edit_distance, Some(2));
        assert!(!config.show_autocomplete);
    }
}
