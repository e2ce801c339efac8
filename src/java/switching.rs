use std::path::PathBuf;

use log::{debug, info};

use crate::environment::{JAVA_HOME, PATH, UserEnvironment, ValueKind};
use crate::error::WizardError;
use crate::java::Paths;
use crate::java::registry::VersionRegistry;

/// What a successful switch persisted.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SwitchOutcome {
    pub id: String,
    pub java_home: PathBuf,
    pub path: String,
}

/// Points the persistent user environment at a managed JDK.
pub struct Switcher<'a> {
    paths: &'a Paths,
    env: &'a dyn UserEnvironment,
}

impl<'a> Switcher<'a> {
    pub fn new(paths: &'a Paths, env: &'a dyn UserEnvironment) -> Self {
        Self { paths, env }
    }

    /// Makes the managed version `id` the active JDK for future shells.
    ///
    /// `JAVA_HOME` is written before `PATH` and the two writes are independent:
    /// when the `PATH` write fails, `JAVA_HOME` already points at the new JDK
    /// and is left that way.
    pub fn switch_to(&self, id: &str) -> Result<SwitchOutcome, WizardError> {
        let registry = VersionRegistry::new(self.paths, self.env);
        let Some(install) = registry.resolve(id)? else {
            return Err(WizardError::VersionNotFound {
                id: id.to_string(),
                available: registry.available_ids()?,
            });
        };

        let java_home = install.root_path.display().to_string();
        info!("setting JAVA_HOME to {java_home}");
        self.env
            .write_user_variable(JAVA_HOME, &java_home, ValueKind::Plain)?;

        let current_path = self.env.read_user_variable(PATH)?.unwrap_or_default();
        let bin = install.bin_path.display().to_string();
        let path = rewrite_path(&current_path, &bin, self.paths.path_separator);
        debug!("PATH becomes {path}");
        self.env
            .write_user_variable(PATH, &path, ValueKind::Expandable)?;

        Ok(SwitchOutcome {
            id: install.id,
            java_home: install.root_path,
            path,
        })
    }
}

/// Puts `bin` first and drops every entry that mentions `java` in any case,
/// along with blank entries.
///
/// The match is on the whole entry text, so it also removes unrelated directories
/// such as `javascript-tools`.
pub fn rewrite_path(current: &str, bin: &str, separator: char) -> String {
    let kept = current
        .split(separator)
        .filter(|entry| !entry.trim().is_empty())
        .filter(|entry| !entry.to_lowercase().contains("java"));

    let mut entries = vec![bin];
    entries.extend(kept);
    entries.join(&separator.to_string())
}
