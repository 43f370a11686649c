use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_pharos")
}

#[test]
fn missing_command_prints_usage_and_exits_2() {
    let output = Command::new(bin()).output().expect("binary should run");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: pharos"));
}

#[test]
fn unknown_command_prints_usage_and_exits_2() {
    let output = Command::new(bin())
        .arg("frobnicate")
        .output()
        .expect("binary should run");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn stats_command_emits_json() {
    let output = Command::new(bin())
        .arg("stats")
        .output()
        .expect("stats should run");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("stats should be json");
    assert_eq!(payload["total"], 3);
}

#[test]
fn search_command_requires_a_query() {
    let output = Command::new(bin())
        .arg("search")
        .output()
        .expect("search should run");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: pharos search"));
}

#[test]
fn search_command_emits_matches() {
    let output = Command::new(bin())
        .args(["search", "green"])
        .output()
        .expect("search should run");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("search should be json");
    let list = payload.as_array().expect("matches should be an array");
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], "green-island");
}

#[test]
fn validate_command_passes_on_shipped_dataset() {
    let output = Command::new(bin())
        .arg("validate")
        .output()
        .expect("validate should run");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lighthouses: 3/3 valid"));
    assert!(stdout.contains("resources: 7/7 valid"));
}

#[test]
fn export_command_emits_the_envelope() {
    let output = Command::new(bin())
        .arg("export")
        .output()
        .expect("export should run");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("export should be json");
    assert_eq!(payload["metadata"]["totalLighthouses"], 3);
    assert_eq!(payload["metadata"]["essayLoaded"], true);
}

#[test]
fn validate_data_bin_passes_on_shipped_dataset() {
    let output = Command::new(env!("CARGO_BIN_EXE_validate_data"))
        .output()
        .expect("validate_data should run");
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("all entities valid"));
    assert!(stdout.contains("sections"));
}
