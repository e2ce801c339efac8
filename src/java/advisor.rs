use std::path::Path;

const GRAALVM_MARKER: &str = "graalvm";
const GRAALVM_SUFFIX: &str = "-graalvm";

/// Installation guidance for `version`.
///
/// Identifiers containing `graalvm` get the GraalVM instructions, everything
/// else the OpenJDK ones. `managed_root` only appears in the text; nothing on
/// disk is inspected.
pub fn advise(version: &str, managed_root: &Path, force: bool) -> String {
    let mut lines = vec![format!("Installing Java {version}...")];
    if version.contains(GRAALVM_MARKER) {
        graalvm_guide(&mut lines, version, managed_root, force);
    } else {
        openjdk_guide(&mut lines, version, managed_root, force);
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn graalvm_guide(lines: &mut Vec<String>, version: &str, managed_root: &Path, force: bool) {
    let number = version.strip_suffix(GRAALVM_SUFFIX).unwrap_or(version);
    let id = format!("graalvm-{number}");
    let target = managed_root.join(&id);

    lines.push("GraalVM Installation Guide:".to_string());
    lines.push(format!("1. Download GraalVM {number} from: https://www.graalvm.org/downloads/"));
    lines.push("2. Choose the appropriate archive for your platform:".to_string());
    lines.push(format!("   - Windows: graalvm-community-jdk-{number}_windows-x64_bin.zip"));
    lines.push(format!("   - macOS: graalvm-community-jdk-{number}_macos-x64_bin.tar.gz"));
    lines.push(format!("   - Linux: graalvm-community-jdk-{number}_linux-x64_bin.tar.gz"));
    if force {
        lines.push(format!("   Remove {} first to replace an existing copy.", target.display()));
    }
    lines.push(format!("3. Extract to: {}", target.display()));
    lines.push(format!("4. Run: javawizard java use {id}"));
}

fn openjdk_guide(lines: &mut Vec<String>, version: &str, managed_root: &Path, force: bool) {
    let id = format!("jdk-{version}");
    let target = managed_root.join(&id);

    lines.push("OpenJDK Installation Guide:".to_string());
    lines.push("1. Download from Eclipse Adoptium: https://adoptium.net/".to_string());
    lines.push(format!("2. Choose version {version} for your platform"));
    if force {
        lines.push(format!("   Remove {} first to replace an existing copy.", target.display()));
    }
    lines.push(format!("3. Extract to: {}", target.display()));
    lines.push(format!("4. Run: javawizard java use {id}"));
    lines.push(String::new());
    lines.push("Alternative - Use package managers:".to_string());
    lines.push(format!("Windows (winget): winget install Microsoft.OpenJDK.{version}"));
    lines.push(format!("macOS (brew): brew install openjdk@{version}"));
    lines.push(format!("Linux (apt): sudo apt install openjdk-{version}-jdk"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root() -> &'static Path {
        Path::new("/home/dev/.javawizard/java-versions")
    }

    #[test]
    fn openjdk_guidance_names_package_managers() {
        let text = advise("21", root(), false);

        assert!(text.starts_with("Installing Java 21...\nOpenJDK Installation Guide:\n"));
        assert!(text.contains("winget install Microsoft.OpenJDK.21"));
        assert!(text.contains("brew install openjdk@21"));
        assert!(text.contains("apt install openjdk-21-jdk"));
        assert!(text.contains(&format!("3. Extract to: {}", root().join("jdk-21").display())));
        assert!(text.contains("4. Run: javawizard java use jdk-21"));
        assert!(!text.contains("Remove "));
    }

    #[test]
    fn graalvm_guidance_strips_suffix() {
        let text = advise("21-graalvm", root(), false);

        assert!(text.contains("GraalVM Installation Guide:"));
        assert!(text.contains("graalvm-community-jdk-21_linux-x64_bin.tar.gz"));
        assert!(text.contains("4. Run: javawizard java use graalvm-21"));
        assert!(!text.contains("21-graalvm_"));
        assert!(!text.contains("winget"));
    }

    #[test]
    fn graalvm_detection_is_case_sensitive() {
        let text = advise("21-GraalVM", root(), false);
        assert!(text.contains("OpenJDK Installation Guide:"));
    }

    #[test]
    fn force_adds_replacement_note_only() {
        let plain = advise("17", root(), false);
        let forced = advise("17", root(), true);

        let note = format!("   Remove {} first to replace an existing copy.", root().join("jdk-17").display());
        assert!(forced.contains(&note));
        assert_eq!(forced.replace(&format!("{note}\n"), ""), plain);
    }

    #[test]
    fn same_input_same_text() {
        assert_eq!(advise("11-graalvm", root(), true), advise("11-graalvm", root(), true));
    }
}
