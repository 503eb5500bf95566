//! User settings, persisted with confy.

use crate::candidates::Alphabet;
use crate::error::Result;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "trie-autocorrect";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub alphabet: Alphabet,
    pub max_edit_distance: Option<usize>,
    pub max_suggestions: usize,
    pub show_autocomplete: bool,
    pub lowercase_input: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::lowercase_latin(),
            max_edit_distance: None,
            max_suggestions: 10,
            show_autocomplete: true,
            lowercase_input: true,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        match confy::load(APP_NAME, Some("config")) {
            Ok(config) => Ok(config),
            Err(err) => Ok(Self::fallback(err)),
        }
    }

    /// Load from an explicit file, falling back to defaults if it cannot be
    /// read or parsed.
    pub fn load_path(path: &Path) -> Self {
        confy::load_path(path).unwrap_or_else(Self::fallback)
    }

    fn fallback(err: confy::ConfyError) -> Self {
        warn!("Failed to load config, using defaults: {err}");
        Self::default()
    }

    pub fn save(&self) -> Result<()> {
        confy::store(APP_NAME, Some("config"), self)?;
        Ok(())
    }

    /// Where `load` and `save` read and write.
    pub fn path() -> Result<PathBuf> {
        Ok(confy::get_configuration_file_path(APP_NAME, Some("config"))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.alphabet, Alphabet::lowercase_latin());
        assert_eq!(config.max_edit_distance, None);
        assert_eq!(config.max_suggestions, 10);
        assert!(config.show_autocomplete);
        assert!(config.lowercase_input);
    }

    #[test]
    fn test_store_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            alphabet: Alphabet::from("abc"),
            max_edit_distance: Some(1),
            max_suggestions: 3,
            show_autocomplete: false,
            lowercase_input: false,
        };
        confy::store_path(&path, &config).unwrap();

        let loaded: Config = confy::load_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "alphabet = \"xyz\"\n").unwrap();

        let loaded: Config = confy::load_path(&path).unwrap();
        assert_eq!(loaded.alphabet, Alphabet::from("zyx"));
        assert_eq!(loaded.max_suggestions, 10);
        assert!(loaded.show_autocomplete);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_suggestions = \"lots\"\n[[[").unwrap();

        assert_eq!(Config::load_path(&path), Config::default());
    }

    #[test]
    fn test_load_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "max_suggestions = 4\nlowercase_input = false\n").unwrap();

        let loaded = Config::load_path(&path);
        assert_eq!(loaded.max_suggestions, 4);
        assert!(!loaded.lowercase_input);
        assert_eq!(loaded.alphabet, Alphabet::lowercase_latin());
    }
}
