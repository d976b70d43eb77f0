//! End-to-end tests for the `codesmith` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

const ENV_VARS: [&str; 6] = [
    "CODESMITH_API_KEY",
    "CODESMITH_MODEL",
    "CODESMITH_TEMPERATURE",
    "CODESMITH_MAX_TOKENS",
    "CODESMITH_BASE_URL",
    "CODESMITH_CATALOG",
];

/// A command with a clean environment, rooted in the given directory.
fn codesmith(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("codesmith").unwrap();
    cmd.current_dir(dir);
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd
}

const VALID_CATALOG: &str = r#"[
  {
    "id": "binary_search",
    "title": "Binary Search",
    "summary": "Find a target in a sorted array.",
    "function_signature": "def binary_search(arr, target):",
    "inputs": [
      {"name": "arr", "type": "list[int]", "desc": "sorted values"},
      {"name": "target", "type": "int", "desc": "value to find"}
    ],
    "outputs": {"type": "int", "desc": "index or -1"},
    "constraints": ["arr is sorted ascending"],
    "examples": [{"input": {"arr": [1, 2, 3], "target": 2}, "output": 1}]
  },
  {
    "id": "lru_cache",
    "title": "LRU Cache",
    "summary": "Least-recently-used cache.",
    "function_signature": "class LRUCache:",
    "outputs": {"type": "class", "desc": "cache object"}
  }
]"#;

fn write_catalog(dir: &Path, contents: &str) -> String {
    let path = dir.join("catalog.json");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_validate_reports_spec_count() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), VALID_CATALOG);

    codesmith(dir.path())
        .args(["validate", "--catalog", &catalog])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 spec(s)"));
}

#[test]
fn test_validate_embedded_catalog() {
    let dir = tempfile::tempdir().unwrap();

    codesmith(dir.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("spec(s)"));
}

#[test]
fn test_validate_missing_signature_names_the_field() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(
        dir.path(),
        r#"[{
            "id": "broken",
            "title": "Broken",
            "summary": "s",
            "outputs": {"type": "int", "desc": "n"}
        }]"#,
    );

    codesmith(dir.path())
        .args(["validate", "--catalog", &catalog])
        .assert()
        .failure()
        .code(5)
        .stdout(predicate::str::contains("function_signature"));
}

#[test]
fn test_validate_duplicate_ids_fails() {
    let dir = tempfile::tempdir().unwrap();
    let record = r#"{
        "id": "twice",
        "title": "Twice",
        "summary": "s",
        "function_signature": "def twice(x):",
        "outputs": {"type": "int", "desc": "n"}
    }"#;
    let catalog = write_catalog(dir.path(), &format!("[{record},{record}]"));

    codesmith(dir.path())
        .args(["validate", "--catalog", &catalog])
        .assert()
        .failure()
        .code(5)
        .stdout(predicate::str::contains("duplicate id `twice`"));
}

#[test]
fn test_validate_missing_catalog_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    codesmith(dir.path())
        .args(["validate", "--catalog", "no/such/catalog.json"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_topics_lists_ids_and_titles() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), VALID_CATALOG);

    codesmith(dir.path())
        .args(["topics", "--catalog", &catalog])
        .assert()
        .success()
        .stdout(predicate::str::contains("binary_search"))
        .stdout(predicate::str::contains("Binary Search"))
        .stdout(predicate::str::contains("lru_cache"));
}

#[test]
fn test_topics_json_output_parses() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), VALID_CATALOG);

    let output = codesmith(dir.path())
        .args(["topics", "--catalog", &catalog, "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["id"], "binary_search");
    assert_eq!(entries[1]["id"], "lru_cache");
}

#[test]
fn test_new_spec_prints_valid_template() {
    let dir = tempfile::tempdir().unwrap();

    let output = codesmith(dir.path())
        .args([
            "new-spec",
            "--id",
            "quick_select",
            "--title",
            "Quick Select",
            "--summary",
            "Kth smallest element.",
            "--signature",
            "def quick_select(nums, k):",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    let spec: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(spec["id"], "quick_select");
    assert_eq!(spec["function_signature"], "def quick_select(nums, k):");
    assert!(spec["inputs"].as_array().unwrap().is_empty());
    assert!(spec["outputs"].is_object());
}

#[test]
fn test_new_spec_rejects_bad_id() {
    let dir = tempfile::tempdir().unwrap();

    codesmith(dir.path())
        .args([
            "new-spec",
            "--id",
            "Quick-Select",
            "--title",
            "t",
            "--summary",
            "s",
            "--signature",
            "def f():",
        ])
        .assert()
        .failure()
        .code(5)
        .stdout(predicate::str::contains("invalid id"));
}

#[test]
fn test_new_spec_rejects_signature_without_marker() {
    let dir = tempfile::tempdir().unwrap();

    codesmith(dir.path())
        .args([
            "new-spec",
            "--id",
            "ok_id",
            "--title",
            "t",
            "--summary",
            "s",
            "--signature",
            "just a description",
        ])
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_generate_without_api_key_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), VALID_CATALOG);

    codesmith(dir.path())
        .args(["generate", "--topic", "binary_search", "--catalog", &catalog])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("CODESMITH_API_KEY"));
}

#[test]
fn test_generate_unknown_topic_exits_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), VALID_CATALOG);

    codesmith(dir.path())
        .args(["generate", "--topic", "no_such_topic", "--catalog", &catalog])
        .env("CODESMITH_API_KEY", "test-key")
        .assert()
        .failure()
        .code(6)
        .stdout(predicate::str::contains("no_such_topic"));
}

#[test]
fn test_doctor_without_api_key_reports_issue() {
    let dir = tempfile::tempdir().unwrap();

    codesmith(dir.path())
        .arg("doctor")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains("CODESMITH_API_KEY"));
}

#[test]
fn test_doctor_with_configuration_succeeds() {
    let dir = tempfile::tempdir().unwrap();

    codesmith(dir.path())
        .arg("doctor")
        .env("CODESMITH_API_KEY", "test-key")
        .assert()
        .success()
        .stdout(predicate::str::contains("API key found"));
}

#[test]
fn test_generate_end_to_end_calls_gateway_twice() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), VALID_CATALOG);

    let mut server = mockito::Server::new();
    let body = serde_json::json!({
        "choices": [{"message": {
            "role": "assistant",
            "content": "```python\ndef binary_search(arr, target):\n    return -1\n```"
        }}]
    });
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(2)
        .with_status(200)
        .with_body(body.to_string())
        .create();

    let out_dir = dir.path().join("generated");
    codesmith(dir.path())
        .args([
            "generate",
            "--topic",
            "binary_search",
            "--catalog",
            &catalog,
            "--out-dir",
        ])
        .arg(&out_dir)
        .env("CODESMITH_API_KEY", "test-key")
        .env("CODESMITH_BASE_URL", server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("binary_search.py"))
        .stdout(predicate::str::contains("test_binary_search.py"));

    // Exactly two round-trips: module body, then test body
    mock.assert();

    let module = fs::read_to_string(out_dir.join("binary_search.py")).unwrap();
    assert_eq!(module, "def binary_search(arr, target):\n    return -1");
    assert!(out_dir.join("test_binary_search.py").exists());
}

#[test]
fn test_generate_all_continues_past_remote_failures() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = write_catalog(dir.path(), VALID_CATALOG);

    // Every call fails; both topics must still be attempted and reported
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/chat/completions")
        .expect(2)
        .with_status(500)
        .with_body("upstream exploded")
        .create();

    codesmith(dir.path())
        .args(["generate-all", "--catalog", &catalog, "--out-dir"])
        .arg(dir.path().join("generated"))
        .env("CODESMITH_API_KEY", "test-key")
        .env("CODESMITH_BASE_URL", server.url())
        .assert()
        .success()
        .stdout(predicate::str::contains("binary_search"))
        .stdout(predicate::str::contains("lru_cache"))
        .stdout(predicate::str::contains("0 generated, 2 failed"));

    mock.assert();
}

#[test]
fn test_models_prints_static_table() {
    let dir = tempfile::tempdir().unwrap();

    codesmith(dir.path())
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::contains("gpt-4.1-nano"))
        .stdout(predicate::str::contains("gemini-2.5-flash"));
}
