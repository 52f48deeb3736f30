use serde_json::json;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_puzzle")
}

fn dataset(second_difficulty: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("data")).unwrap();
    let index = json!({"length": 2, "type": "quiz", "name": "n", "description": "d", "email": "e@x.com"});
    fs::write(dir.path().join("index.json"), index.to_string()).unwrap();
    let r0 = json!({"question": "q0", "solution": "s0", "difficulty": "EASY"});
    let r1 = json!({"question": "q1", "solution": "s1", "difficulty": second_difficulty});
    fs::write(dir.path().join("data/0.json"), r0.to_string()).unwrap();
    fs::write(dir.path().join("data/1.json"), r1.to_string()).unwrap();
    dir
}

fn validate(dir: &TempDir) -> Output {
    Command::new(bin())
        .arg("validate")
        .arg("--root")
        .arg(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("PUZZLE_INDEX_FILE")
        .env_remove("PUZZLE_DATA_DIR")
        .output()
        .expect("validate should run")
}

#[test]
fn valid_dataset_exits_zero_with_summary() {
    let dir = dataset("HARD");
    let output = validate(&dir);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Validation successful"), "{stdout}");
    assert!(stdout.contains("2 records"), "{stdout}");
    assert!(output.stderr.is_empty());
}

#[test]
fn invalid_dataset_exits_one_with_single_diagnostic() {
    let dir = dataset("EXTREME");
    let output = validate(&dir);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(stderr.contains("1.json") && stderr.contains("EXTREME"), "{stderr}");
}

#[test]
fn data_dir_can_be_overridden() {
    let dir = dataset("MEDIUM");
    fs::rename(dir.path().join("data"), dir.path().join("records")).unwrap();

    assert_eq!(validate(&dir).status.code(), Some(1));

    let output = Command::new(bin())
        .args(["validate", "--data-dir", "records", "--root"])
        .arg(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("validate should run");
    assert_eq!(output.status.code(), Some(0));
}
