use std::path::{Component, Path};

use crate::environment::{UserEnvironment, effective_java_home};
use crate::error::WizardError;
use crate::java::scanning::scan_managed;
use crate::java::{Installation, Paths, normalize};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ManagedVersion {
    pub id: String,
    pub is_current: bool,
}

/// Logical view over the versions kept in the managed root.
pub struct VersionRegistry<'a> {
    paths: &'a Paths,
    env: &'a dyn UserEnvironment,
}

impl<'a> VersionRegistry<'a> {
    pub fn new(paths: &'a Paths, env: &'a dyn UserEnvironment) -> Self {
        Self { paths, env }
    }

    /// Managed versions in name order, flagging the one `JAVA_HOME` points at.
    pub fn list_managed(&self) -> Result<Vec<ManagedVersion>, WizardError> {
        let java_home = effective_java_home(self.env)?.map(|home| normalize(Path::new(&home)));

        Ok(scan_managed(self.paths)?
            .into_iter()
            .map(|install| ManagedVersion {
                is_current: java_home
                    .as_ref()
                    .is_some_and(|home| *home == normalize(&install.root_path)),
                id: install.id,
            })
            .collect())
    }

    pub fn available_ids(&self) -> Result<Vec<String>, WizardError> {
        Ok(scan_managed(self.paths)?
            .into_iter()
            .map(|install| install.id)
            .collect())
    }

    /// The managed installation named exactly `id`.
    pub fn resolve(&self, id: &str) -> Result<Option<Installation>, WizardError> {
        Ok(scan_managed(self.paths)?
            .into_iter()
            .find(|install| install.id == id))
    }

    /// Name of the managed version `JAVA_HOME` lies in, if any.
    pub fn current_managed_id(&self) -> Result<Option<String>, WizardError> {
        let Some(java_home) = effective_java_home(self.env)? else {
            return Ok(None);
        };

        let java_home = normalize(Path::new(&java_home));
        let managed_root = normalize(&self.paths.managed_root);
        let Ok(relative) = java_home.strip_prefix(&managed_root) else {
            return Ok(None);
        };

        Ok(match relative.components().next() {
            Some(Component::Normal(id)) => Some(id.to_string_lossy().into_owned()),
            _ => None,
        })
    }
}
