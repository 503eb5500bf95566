//! Interactive word-checking loop.
//!
//! Reads one word per line, answers whether it is valid and, if not, what it
//! could have been. Generic over the input and output streams so it can be
//! driven from stdin/stdout or from memory.

use crate::error::Result;
use crate::suggest::{Lookup, Suggester, Suggestion};
use log::debug;
use std::io::{BufRead, Write};

const PROMPT: &str = "Enter a word (or 'q' to quit): ";
const QUIT: &str = "q";

/// Presentation settings for the shell.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Maximum corrections and completions printed per word, 0 = all.
    pub max_suggestions: usize,
    pub show_autocomplete: bool,
    pub lowercase_input: bool,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            max_suggestions: 0,
            show_autocomplete: true,
            lowercase_input: true,
        }
    }
}

impl From<&crate::config::Config> for ShellOptions {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            max_suggestions: config.max_suggestions,
            show_autocomplete: config.show_autocomplete,
            lowercase_input: config.lowercase_input,
        }
    }
}

pub struct Shell<'a> {
    suggester: Suggester<'a>,
    options: ShellOptions,
}

impl<'a> Shell<'a> {
    pub fn new(suggester: Suggester<'a>, options: ShellOptions) -> Self {
        Self { suggester, options }
    }

    /// Prompt and answer until `q` or end of input.
    pub fn run<R: BufRead, W: Write>(&self, input: R, output: &mut W) -> Result<()> {
        let mut lines = input.lines();

        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            let line = line?;
            let word = line.trim();

            if word == QUIT {
                break;
            }
            if word.is_empty() {
                continue;
            }

            self.answer(word, output)?;
        }

        debug!("shell finished");
        Ok(())
    }

    /// Write the answer for a single word.
    pub fn answer<W: Write>(&self, word: &str, output: &mut W) -> Result<()> {
        let word = if self.options.lowercase_input {
            word.to_lowercase()
        } else {
            word.to_string()
        };

        match self.suggester.check(&word) {
            Lookup::Valid => writeln!(output, "{word} is a valid word.")?,
            Lookup::Unknown {
                corrections,
                completions,
            } => {
                writeln!(output, "Did you mean: {}", self.format_corrections(&corrections))?;
                if self.options.show_autocomplete {
                    writeln!(
                        output,
                        "Autocomplete suggestions: {}",
                        self.format_completions(&completions)
                    )?;
                }
            }
        }
        Ok(())
    }

    fn format_corrections(&self, corrections: &[Suggestion]) -> String {
        join_limited(corrections.iter().map(Suggestion::to_string), self.options.max_suggestions)
    }

    fn format_completions(&self, completions: &[String]) -> String {
        join_limited(completions.iter().cloned(), self.options.max_suggestions)
    }
}

fn join_limited(items: impl Iterator<Item = String>, limit: usize) -> String {
    let limit = if limit == 0 { usize::MAX } else { limit };
    let items: Vec<String> = items.take(limit).collect();

    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
