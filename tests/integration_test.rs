use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_touying-export"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_missing_input_exits_with_one() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(temp_dir.path(), &["nowhere.typ"]);

    assert_eq!(output.status.code(), Some(1), "Unexpected status: {:?}", output);
    let stderr = stderr_of(&output);
    assert!(stderr.starts_with("Error: File not found: "), "stderr: {}", stderr);
    assert!(stderr.contains("nowhere.typ"));
    assert!(stderr.contains("Current directory: "));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_default_input_is_looked_up_in_cwd() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Tutorial.typ"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_sys_inputs_exits_with_one() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("deck.typ"), "= Title").expect("Failed to write typ file");

    let output = run_command(temp_dir.path(), &["deck.typ", "--sys-inputs", "{bad json"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Error: Invalid JSON in --sys-inputs: {bad json"));
    assert!(!temp_dir.path().join("deck.html").exists());
}

#[test]
fn test_non_object_sys_inputs_exits_with_one() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("deck.typ"), "= Title").expect("Failed to write typ file");

    let output = run_command(temp_dir.path(), &["deck.typ", "--sys-inputs", "[1]"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("Error: --sys-inputs must be a JSON object: [1]"));
}

#[test]
fn test_argument_errors_exit_with_one() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(temp_dir.path(), &["deck.typ", "--start-page", "first"]);
    assert_eq!(output.status.code(), Some(1));

    let output = run_command(temp_dir.path(), &["--no-such-flag"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_help_exits_with_zero() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let output = run_command(temp_dir.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Export Touying presentation to HTML"));
    assert!(stdout.contains("--sys-inputs"));
    assert!(stdout.contains("touying-export presentation.typ --start-page 2 --count 5"));
}

#[test]
#[ignore] // Requires the touying exporter to be installed
fn test_export_with_installed_exporter() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(
        temp_dir.path().join("deck.typ"),
        "#import \"@preview/touying:0.5.3\": *\n#show: themes.simple.simple-theme\n= Hello\n",
    )
    .expect("Failed to write typ file");

    let output = run_command(temp_dir.path(), &["deck.typ"]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Successfully exported to"));
    assert!(temp_dir.path().join("deck.html").exists());
}
