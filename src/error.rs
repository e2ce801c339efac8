use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::environment::EnvError;

/// Failures surfaced by the commands. Each one ends the command with exit code 1.
#[derive(Debug, Error)]
pub enum WizardError {
    /// A subcommand that needs files or a version received none.
    #[error("{0}")]
    NoArguments(String),

    #[error("Java version not found: {id}\n{}", describe_available(.available))]
    VersionNotFound { id: String, available: Vec<String> },

    #[error(transparent)]
    PlatformEnv(#[from] EnvError),

    #[error("Failed to list {}", .path.display())]
    Filesystem { path: PathBuf, source: io::Error },

    #[error("Invalid target format: {0}\nSupported formats: json, xml, csv, txt")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Config(String),
}

fn describe_available(available: &[String]) -> String {
    if available.is_empty() {
        return "Available versions: none".to_string();
    }

    let mut text = String::from("Available versions:");
    for id in available {
        text.push_str("\n  ");
        text.push_str(id);
    }
    text
}
