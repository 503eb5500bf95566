//! Errors raised around the lookup core: loading word lists, reading
//! configuration and talking to the terminal. Lookups themselves never fail.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutocorrectError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Config error: {0}")]
    Config(#[from] confy::ConfyError),

    #[error("no words found in dictionary {}", .0.display())]
    EmptyDictionary(PathBuf),
}

pub type Result<T> = std::result::Result<T, AutocorrectError>;
