#[cfg_attr(windows, allow(dead_code))]
mod env_file;
#[cfg(test)]
pub mod memory;
#[cfg(windows)]
mod registry;

#[cfg(not(windows))]
pub use env_file::EnvFileEnvironment;
#[cfg(windows)]
pub use registry::RegistryEnvironment;

use std::path::Path;
use thiserror::Error;

pub const JAVA_HOME: &str = "JAVA_HOME";
pub const PATH: &str = "PATH";

/// How a persisted value is stored.
///
/// `Expandable` keeps embedded variable references (`%SystemRoot%`, `$HOME`)
/// unexpanded until a shell reads the value.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ValueKind {
    Plain,
    Expandable,
}

/// Failure of the platform's persistent environment store.
/// The message is the raw diagnostic reported by the platform.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Failed to read {name}: {message}")]
    Read { name: String, message: String },

    #[error("Failed to write {name}: {message}")]
    Write { name: String, message: String },
}

/// Persistent user-scope environment variables.
///
/// Writes are only seen by processes started afterwards; the running process
/// keeps its inherited view, which `read_process_variable` reports.
pub trait UserEnvironment {
    fn read_user_variable(&self, name: &str) -> Result<Option<String>, EnvError>;

    fn write_user_variable(&self, name: &str, value: &str, kind: ValueKind)
    -> Result<(), EnvError>;

    fn read_process_variable(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }

    /// Extra instruction shown after a switch, if the store needs one.
    fn activation_hint(&self) -> Option<String> {
        None
    }
}

/// The store used for the current platform.
#[cfg(windows)]
pub fn platform_environment(_home: &Path) -> Box<dyn UserEnvironment> {
    Box::new(RegistryEnvironment)
}

/// The store used for the current platform.
#[cfg(not(windows))]
pub fn platform_environment(home: &Path) -> Box<dyn UserEnvironment> {
    Box::new(EnvFileEnvironment::new(home.join("env")))
}

/// `JAVA_HOME` as later shells will see it, or as this process inherited it
/// when nothing is persisted.
pub fn effective_java_home(env: &dyn UserEnvironment) -> Result<Option<String>, EnvError> {
    Ok(env
        .read_user_variable(JAVA_HOME)?
        .filter(|value| !value.trim().is_empty())
        .or_else(|| env.read_process_variable(JAVA_HOME)))
}
