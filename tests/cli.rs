use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn stride(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("stride").unwrap();
    cmd.current_dir(dir).env_remove("GEMINI_API_KEY");
    cmd
}

#[test]
fn generate_offline_saves_plan() {
    let dir = tempfile::tempdir().unwrap();

    stride(dir.path())
        .args([
            "generate",
            "--goal",
            "Run a 10k",
            "--category",
            "Health",
            "--strengths",
            "discipline, time",
            "--threats",
            "injury",
            "--provider",
            "offline",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Break Run a 10k into weekly milestones for better tracking",
        ))
        .stdout(predicate::str::contains("Leverage: discipline"));

    let store: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("plans.json")).unwrap())
            .unwrap();
    let plan = &store["plans"][0];
    assert_eq!(plan["goal"], "Run a 10k");
    assert_eq!(plan["tasks"].as_array().unwrap().len(), 4);
    assert_eq!(plan["completedTaskIds"].as_array().unwrap().len(), 0);
}

#[test]
fn generate_without_api_key_falls_back() {
    let dir = tempfile::tempdir().unwrap();

    stride(dir.path())
        .args([
            "generate",
            "--goal",
            "Get promoted",
            "--category",
            "Career",
            "--provider",
            "gemini",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skill Development"))
        .stderr(predicate::str::contains("GEMINI_API_KEY not set"));

    assert!(!dir.path().join("plans.json").exists());
}

#[test]
fn generate_without_fallback_fails() {
    let dir = tempfile::tempdir().unwrap();

    stride(dir.path())
        .args([
            "generate",
            "--goal",
            "Get promoted",
            "--category",
            "Career",
            "--provider",
            "gemini",
            "--no-fallback",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to generate plan"));
}

#[test]
fn analyze_empty_store() {
    let dir = tempfile::tempdir().unwrap();

    stride(dir.path())
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans yet"));
}

#[test]
fn analyze_single_plan_rejects_write() {
    let dir = tempfile::tempdir().unwrap();

    stride(dir.path())
        .args(["analyze", "--plan", "abc", "--write"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));

    assert!(!dir.path().join("reports").exists());
}

#[test]
fn complete_then_analyze() {
    let dir = tempfile::tempdir().unwrap();

    stride(dir.path())
        .args([
            "generate", "--goal", "Save money", "--category", "Finance", "--provider", "offline",
        ])
        .assert()
        .success();

    let store: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("plans.json")).unwrap())
            .unwrap();
    let plan_id = store["plans"][0]["id"].as_str().unwrap().to_string();

    stride(dir.path())
        .args(["complete", "--plan", &plan_id, "--task", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1/4 tasks done (25%)"));

    stride(dir.path())
        .args(["analyze", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"overallCompletionRate\": 25"));

    stride(dir.path())
        .args(["complete", "--plan", &plan_id, "--task", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("has no task 9"));
}

#[test]
fn schema_prints_config_schema() {
    let dir = tempfile::tempdir().unwrap();

    stride(dir.path())
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"provider\""));
}
