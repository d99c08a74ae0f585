// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the listfeed driver
//!
//! This module provides the CLI surface: where the repository and output
//! directories live, which file is tracked, and the feed header metadata.

use std::path::PathBuf;

use clap::Parser;

/// Generate syndication feeds from the git history of a curated list
#[derive(Parser, Debug, Clone)]
#[command(name = "listfeed")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Working directory with a git repository
    #[arg(short, long, env = "LISTFEED_WORKDIR", default_value = ".")]
    pub workdir: PathBuf,

    /// Destination directory for feed files
    ///
    /// Created if it does not exist. The three feed files are written
    /// atomically with mode 0644.
    #[arg(short, long, env = "LISTFEED_DESTDIR", default_value = ".")]
    pub destdir: PathBuf,

    /// Tracked file whose history is mined, relative to the working directory
    #[arg(short, long, default_value = "README.md")]
    pub file: PathBuf,

    /// Feed title
    #[arg(long, default_value = "Awesome Veganism Feed")]
    pub title: String,

    /// Link to the site the tracked file lives on
    #[arg(long, default_value = "https://awesome-veganism.com/")]
    pub link: String,

    /// Feed description
    #[arg(
        long,
        default_value = "A curated list of awesome resources, pointers, and tips to make veganism easy and accessible to everyone."
    )]
    pub description: String,

    /// XSLT stylesheet href to inject into the Atom feed
    #[arg(long)]
    pub stylesheet: Option<String>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs each processed commit pair and each extracted change event.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Absolute location of the tracked file
    #[must_use]
    pub fn tracked_file(&self) -> PathBuf {
        self.workdir.join(&self.file)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The working directory doesn't exist or isn't a directory
    /// - The tracked file doesn't exist under the working directory
    /// - The destination directory cannot be created
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.workdir.exists() {
            return Err(ConfigError::WorkdirNotFound(self.workdir.clone()));
        }
        if !self.workdir.is_dir() {
            return Err(ConfigError::WorkdirNotDirectory(self.workdir.clone()));
        }

        let tracked = self.tracked_file();
        if !tracked.exists() {
            return Err(ConfigError::TrackedFileNotFound(tracked));
        }

        if !self.destdir.exists() {
            std::fs::create_dir_all(&self.destdir)
                .map_err(|e| ConfigError::DestdirCreateFailed(self.destdir.clone(), e))?;
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Working directory not found
    #[error("Working directory not found: {0}")]
    WorkdirNotFound(PathBuf),

    /// Working directory is not a directory
    #[error("Working directory is not a directory: {0}")]
    WorkdirNotDirectory(PathBuf),

    /// Tracked file not found under the working directory
    #[error("Failed to locate tracked file: {0}")]
    TrackedFileNotFound(PathBuf),

    /// Failed to create destination directory
    #[error("Failed to create destination directory {0}: {1}")]
    DestdirCreateFailed(PathBuf, std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let argv = std::iter::once("listfeed").chain(args.iter().copied());
        Config::try_parse_from(argv).expect("parse should succeed")
    }

    #[test]
    fn test_default_config() {
        let config = parse(&[]);
        assert_eq!(config.workdir, PathBuf::from("."));
        assert_eq!(config.destdir, PathBuf::from("."));
        assert_eq!(config.file, PathBuf::from("README.md"));
        assert!(config.stylesheet.is_none());
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_feed_header_defaults() {
        let config = parse(&[]);
        assert_eq!(config.title, "Awesome Veganism Feed");
        assert_eq!(config.link, "https://awesome-veganism.com/");
        assert!(config.description.starts_with("A curated list"));
    }

    #[test]
    fn test_tracked_file_joins_workdir() {
        let config = parse(&["--workdir", "/repo", "--file", "docs/LIST.md"]);
        assert_eq!(config.tracked_file(), PathBuf::from("/repo/docs/LIST.md"));
    }

    #[test]
    fn test_log_level_default() {
        assert_eq!(parse(&[]).log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_level_verbose() {
        assert_eq!(parse(&["--verbose"]).log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_log_level_quiet() {
        assert_eq!(parse(&["--quiet"]).log_level(), tracing::Level::WARN);
    }

    #[test]
    fn test_validate_nonexistent_workdir() {
        let config = parse(&["--workdir", "/nonexistent/path/12345"]);
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::WorkdirNotFound(_))));
    }

    #[test]
    fn test_validate_missing_tracked_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let workdir = dir.path().display().to_string();
        let config = parse(&["--workdir", &workdir]);
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::TrackedFileNotFound(_))));
    }

    #[test]
    fn test_validate_creates_destdir() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("README.md"), "list\n").expect("seed file");
        let dest = dir.path().join("out").join("feeds");

        let workdir = dir.path().display().to_string();
        let destdir = dest.display().to_string();
        let config = parse(&["--workdir", &workdir, "--destdir", &destdir]);
        config.validate().expect("validate should succeed");
        assert!(dest.is_dir());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
