use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::environment::{EnvError, UserEnvironment, effective_java_home};
use crate::error::WizardError;
use crate::java::resolving::probe_version;
use crate::java::{Installation, Origin, Paths};

/// Installations found under one search root.
#[derive(Debug, Clone)]
pub struct InstallationGroup {
    pub root: PathBuf,
    pub origin: Origin,
    pub installations: Vec<Installation>,
}

/// Immediate subdirectories of the managed root, sorted by name.
///
/// A managed root that does not exist yet holds no versions.
pub fn scan_managed(paths: &Paths) -> Result<Vec<Installation>, WizardError> {
    let root = &paths.managed_root;
    if !root.is_dir() {
        debug!("managed root {} does not exist", root.display());
        return Ok(Vec::new());
    }

    let listing_error = |source| WizardError::Filesystem {
        path: root.clone(),
        source,
    };

    let mut ids = Vec::new();
    for entry in fs::read_dir(root).map_err(listing_error)? {
        let entry = entry.map_err(listing_error)?;
        if entry.path().is_dir() {
            ids.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    ids.sort();

    Ok(ids
        .into_iter()
        .map(|id| {
            let root_path = root.join(&id);
            Installation::new(id, root_path, Origin::Managed, paths)
        })
        .collect())
}

/// Every JDK under the well-known roots, plus the `JAVA_HOME` installation.
///
/// Roots that are missing are skipped. Each candidate is probed for its
/// version; a broken candidate shows up with an `(error: ...)` version instead
/// of stopping the scan. The same JDK reached from two roots is listed twice.
pub async fn scan_well_known(
    paths: &Paths,
    env: &dyn UserEnvironment,
) -> Result<Vec<InstallationGroup>, EnvError> {
    let mut groups = Vec::new();

    for root in &paths.well_known_roots {
        if !root.is_dir() {
            continue;
        }

        let entries = match fs::read_dir(root) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("Skipping {}: {err}", root.display());
                continue;
            }
        };

        let mut installations = Vec::new();
        for entry in entries {
            let Some(entry) = readable_entry(root, entry) else {
                continue;
            };
            let candidate = entry.path();
            if !candidate.is_dir() {
                continue;
            }

            let id = entry.file_name().to_string_lossy().into_owned();
            let mut install =
                Installation::new(id, jdk_home_of(&candidate), Origin::WellKnownRoot, paths);
            install.detected_version = Some(probe_version(&install.executable_path).await);
            installations.push(install);
        }

        groups.push(InstallationGroup {
            root: root.clone(),
            origin: Origin::WellKnownRoot,
            installations,
        });
    }

    if let Some(java_home) = effective_java_home(env)? {
        let root = PathBuf::from(&java_home);
        let mut install = Installation::new(java_home, root.clone(), Origin::JavaHome, paths);
        install.detected_version = Some(probe_version(&install.executable_path).await);
        groups.push(InstallationGroup {
            root,
            origin: Origin::JavaHome,
            installations: vec![install],
        });
    }

    Ok(groups)
}

/// An unreadable entry is reported and skipped so the rest of the root still scans.
fn readable_entry<T>(root: &Path, entry: io::Result<T>) -> Option<T> {
    match entry {
        Ok(entry) => Some(entry),
        Err(err) => {
            warn!("Skipping an entry of {}: {err}", root.display());
            None
        }
    }
}

/// macOS bundles keep the actual home in `Contents/Home`.
fn jdk_home_of(candidate: &Path) -> PathBuf {
    let bundled = candidate.join("Contents").join("Home");
    if bundled.is_dir() { bundled } else { candidate.to_path_buf() }
}
