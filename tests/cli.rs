use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn wizard(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_javawizard"));
    cmd.env("JAVAWIZARD_HOME", home)
        .env_remove("JAVA_HOME")
        .env_remove("RUST_LOG");
    cmd
}

fn run(cmd: &mut Command) -> (Output, String, String) {
    let output = cmd.output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
    (output, stdout, stderr)
}

fn managed(home: &TempDir, ids: &[&str]) -> std::path::PathBuf {
    let root = home.path().join("java-versions");
    for id in ids {
        fs::create_dir_all(root.join(id).join("bin")).unwrap();
    }
    root
}

#[test]
fn bare_invocation_prints_overview() {
    let home = TempDir::new().unwrap();
    let (output, stdout, _) = run(&mut wizard(home.path()));

    assert!(output.status.success());
    assert!(stdout.contains("JavaWizard - Complete Java Development Environment Manager"));
}

#[test]
fn list_without_managed_root() {
    let home = TempDir::new().unwrap();
    let (output, stdout, _) = run(wizard(home.path()).args(["java", "list"]));

    assert!(output.status.success());
    assert!(stdout.contains("No managed Java versions found."));
    assert!(!home.path().join("java-versions").exists());
}

#[test]
fn list_with_empty_managed_root() {
    let home = TempDir::new().unwrap();
    managed(&home, &[]);
    let (output, stdout, _) = run(wizard(home.path()).args(["java", "list"]));

    assert!(output.status.success());
    assert!(stdout.contains("No managed Java versions found."));
}

#[test]
fn list_sorted_without_current_marker() {
    let home = TempDir::new().unwrap();
    managed(&home, &["jdk-21", "jdk-17"]);
    let (output, stdout, _) = run(wizard(home.path()).args(["java", "list"]));

    assert!(output.status.success());
    assert!(stdout.contains("  jdk-17\n  jdk-21\n"));
    assert!(!stdout.contains("(current)"));
}

#[cfg(unix)]
#[test]
fn list_marks_java_home_as_current() {
    let home = TempDir::new().unwrap();
    let root = managed(&home, &["jdk-17", "jdk-21"]);
    let (output, stdout, _) = run(wizard(home.path())
        .args(["java", "list"])
        .env("JAVA_HOME", root.join("jdk-21")));

    assert!(output.status.success());
    assert!(stdout.contains("  jdk-17\n"));
    assert!(stdout.contains("  jdk-21 (current)\n"));
}

#[test]
fn use_of_unknown_version_changes_nothing() {
    let home = TempDir::new().unwrap();
    managed(&home, &["jdk-17"]);
    let (output, stdout, stderr) = run(wizard(home.path()).args(["java", "use", "jdk-99"]));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("Java version not found: jdk-99"));
    assert!(stderr.contains("jdk-17"));
    assert!(!stdout.contains("Switched to"));
    assert!(!home.path().join("env").exists());
}

#[test]
fn install_prints_openjdk_guidance() {
    let home = TempDir::new().unwrap();
    let (output, stdout, _) = run(wizard(home.path()).args(["java", "install", "21"]));

    assert!(output.status.success());
    assert!(stdout.contains("winget install Microsoft.OpenJDK.21"));
    assert!(stdout.contains("brew install openjdk@21"));
    assert!(stdout.contains("apt install openjdk-21-jdk"));
}

#[test]
fn install_prints_graalvm_guidance() {
    let home = TempDir::new().unwrap();
    let (output, stdout, _) = run(wizard(home.path()).args(["java", "install", "21-graalvm"]));

    assert!(output.status.success());
    assert!(stdout.contains("GraalVM Installation Guide:"));
    assert!(stdout.contains("Download GraalVM 21 from"));
    assert!(stdout.contains("javawizard java use graalvm-21"));
    assert!(!home.path().join("java-versions").exists());
}

#[test]
fn which_fails_without_java_on_path() {
    let home = TempDir::new().unwrap();
    let empty = home.path().join("empty");
    fs::create_dir_all(&empty).unwrap();
    let (output, stdout, _) = run(wizard(home.path()).args(["java", "which"]).env("PATH", &empty));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Java not found in PATH"));
}

#[test]
fn file_commands_require_files() {
    let home = TempDir::new().unwrap();
    let (output, _, stderr) = run(wizard(home.path()).arg("process"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("No files specified for processing"));
}

#[test]
fn process_echoes_any_format() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("notes.txt");
    fs::write(&input, "x").unwrap();
    let (output, stdout, _) =
        run(wizard(home.path()).args(["process", "--format", "shrink"]).arg(&input));

    assert!(output.status.success());
    assert!(stdout.contains("Processed notes.txt with shrink format"));
}

#[cfg(unix)]
#[test]
fn use_rewrites_the_env_file() {
    let home = TempDir::new().unwrap();
    let root = managed(&home, &["jdk-21"]);
    let env_file = home.path().join("env");
    fs::write(
        &env_file,
        "export PATH=\"/tools:/usr/lib/jvm/jdk-11/bin:/bin\"\n",
    )
    .unwrap();

    let (output, stdout, _) = run(wizard(home.path()).args(["java", "use", "jdk-21"]));
    assert!(output.status.success(), "{stdout}");
    assert!(stdout.contains("Switched to Java version: jdk-21"));

    let java_home = root.join("jdk-21");
    let content = fs::read_to_string(&env_file).unwrap();
    assert!(content.contains(&format!("export JAVA_HOME='{}'", java_home.display())));
    assert!(content.contains(&format!(
        "export PATH=\"{}:/tools:/bin\"",
        java_home.join("bin").display()
    )));

    // the persisted value marks the version without any inherited JAVA_HOME
    let (_, listed, _) = run(wizard(home.path()).args(["java", "list"]));
    assert!(listed.contains("  jdk-21 (current)"));

    let (again, _, _) = run(wizard(home.path()).args(["java", "use", "jdk-21"]));
    assert!(again.status.success());
    assert_eq!(fs::read_to_string(&env_file).unwrap(), content);
}
