//! Common CLI utility functions shared across commands.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tally_core::Config;
use tracing::{info, warn};

/// Open the entry source: a file when given, stdin otherwise.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            info!("Reading entries from {}", path.display());
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tally").join("config.toml"))
}

/// Load configuration, falling back to defaults.
///
/// An explicit path that cannot be loaded is reported; a missing default
/// config file is not.
pub fn load_config(explicit: Option<&Path>) -> Config {
    let (path, explicit) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => match default_config_path() {
            Some(path) => (path, false),
            None => return Config::default(),
        },
    };

    match Config::load(&path) {
        Ok(config) => {
            info!("Loaded config from {:?}", path);
            config
        }
        Err(e) if e.is_not_found() && !explicit => Config::default(),
        Err(e) => {
            warn!("Failed to load config {:?}: {}, using defaults", path, e);
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_config_explicit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session]\nsentinel = \"quit\"").unwrap();

        let config = load_config(Some(file.path()));
        assert_eq!(config.session.sentinel, "quit");
    }

    #[test]
    fn test_load_config_invalid_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[session]\nprecision = \"two\"").unwrap();

        assert_eq!(load_config(Some(file.path())), Config::default());
    }

    #[test]
    fn test_load_config_missing_explicit_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(dir.path().join("nope.toml").as_path()));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_open_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "10\ndone").unwrap();

        let mut reader = open_input(Some(file.path())).unwrap();
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        assert_eq!(line, "10\n");
    }

    #[test]
    fn test_open_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_input(Some(dir.path().join("missing.txt").as_path()))
            .err()
            .unwrap();
        assert!(err.to_string().contains("Failed to open input file"));
    }
}
