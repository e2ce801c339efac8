pub mod advisor;
pub mod commands;
pub mod registry;
pub mod resolving;
pub mod scanning;
pub mod switching;

use std::path::{Component, Path, PathBuf};

/// Directory under the tool home that holds one JDK per subdirectory.
pub const MANAGED_DIR_NAME: &str = "java-versions";

#[cfg(windows)]
pub const JAVA_EXECUTABLE: &str = "java.exe";
#[cfg(not(windows))]
pub const JAVA_EXECUTABLE: &str = "java";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Origin {
    Managed,
    WellKnownRoot,
    JavaHome,
}

/// A JDK home found on disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Installation {
    /// Directory name under the managed root, or the home path for unmanaged ones.
    pub id: String,
    pub root_path: PathBuf,
    pub bin_path: PathBuf,
    pub executable_path: PathBuf,
    /// Probe result such as `(17.0.8)`; managed records are never probed.
    pub detected_version: Option<String>,
    pub origin: Origin,
}

impl Installation {
    pub fn new(id: impl Into<String>, root_path: PathBuf, origin: Origin, paths: &Paths) -> Self {
        let bin_path = root_path.join("bin");
        let executable_path = bin_path.join(&paths.java_executable);
        Self {
            id: id.into(),
            root_path,
            bin_path,
            executable_path,
            detected_version: None,
            origin,
        }
    }
}

/// Filesystem layout and platform constants the core works against.
#[derive(Debug, Clone)]
pub struct Paths {
    pub managed_root: PathBuf,
    pub well_known_roots: Vec<PathBuf>,
    pub path_separator: char,
    pub java_executable: String,
}

impl Paths {
    /// Layout for the running platform, rooted at the tool home.
    pub fn detect(tool_home: &Path, user_home: &Path) -> Self {
        Self {
            managed_root: tool_home.join(MANAGED_DIR_NAME),
            well_known_roots: well_known_roots(user_home),
            path_separator: if cfg!(windows) { ';' } else { ':' },
            java_executable: JAVA_EXECUTABLE.to_string(),
        }
    }
}

#[cfg(windows)]
fn well_known_roots(user_home: &Path) -> Vec<PathBuf> {
    vec![
        PathBuf::from(r"C:\Program Files\Java"),
        PathBuf::from(r"C:\Program Files (x86)\Java"),
        PathBuf::from(r"C:\Program Files\Eclipse Adoptium"),
        PathBuf::from(r"C:\Program Files\Microsoft"),
        user_home.join(".jdks"),
    ]
}

#[cfg(target_os = "macos")]
fn well_known_roots(user_home: &Path) -> Vec<PathBuf> {
    vec![
        PathBuf::from("/Library/Java/JavaVirtualMachines"),
        user_home.join("Library/Java/JavaVirtualMachines"),
        user_home.join(".jdks"),
    ]
}

#[cfg(not(any(windows, target_os = "macos")))]
fn well_known_roots(user_home: &Path) -> Vec<PathBuf> {
    vec![
        PathBuf::from("/usr/lib/jvm"),
        PathBuf::from("/usr/java"),
        PathBuf::from("/opt/java"),
        user_home.join(".sdkman/candidates/java"),
        user_home.join(".jdks"),
    ]
}

/// Absolute, symlink-free form of `path` when it exists, a lexically cleaned
/// form otherwise.
pub fn normalize(path: &Path) -> PathBuf {
    if let Ok(canonical) = dunce::canonicalize(path) {
        return canonical;
    }

    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !cleaned.pop() {
                    cleaned.push(component);
                }
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn installation_derives_bin_and_executable() {
        let paths = Paths {
            managed_root: PathBuf::from("/home/dev/.javawizard/java-versions"),
            well_known_roots: Vec::new(),
            path_separator: ':',
            java_executable: "java".to_string(),
        };

        let install = Installation::new(
            "jdk-17",
            paths.managed_root.join("jdk-17"),
            Origin::Managed,
            &paths,
        );

        assert_eq!(
            install.bin_path,
            PathBuf::from("/home/dev/.javawizard/java-versions/jdk-17/bin")
        );
        assert_eq!(
            install.executable_path,
            PathBuf::from("/home/dev/.javawizard/java-versions/jdk-17/bin/java")
        );
        assert_eq!(install.detected_version, None);
    }

    #[test]
    fn detect_places_managed_root_under_tool_home() {
        let paths = Paths::detect(Path::new("/tmp/wizard"), Path::new("/home/dev"));

        assert_eq!(paths.managed_root, PathBuf::from("/tmp/wizard/java-versions"));
        assert!(paths.well_known_roots.contains(&PathBuf::from("/home/dev").join(".jdks")));
        assert_eq!(paths.java_executable, JAVA_EXECUTABLE);
    }

    #[test]
    fn normalize_missing_path_lexically() {
        assert_eq!(
            normalize(Path::new("/no/such/./dir/../jdk-21/")),
            PathBuf::from("/no/such/jdk-21")
        );
    }

    #[test]
    fn normalize_existing_path_resolves_dots() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("jdk-21")).unwrap();

        let dotted = dir.path().join("jdk-21").join("..").join("jdk-21");
        assert_eq!(normalize(&dotted), normalize(&dir.path().join("jdk-21")));
    }
}
