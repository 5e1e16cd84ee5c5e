/// CLI integration tests for bmitrack.
///
/// Each test spawns the compiled binary via the `assert_cmd::cargo_bin_cmd!`
/// macro and sets `BMITRACK_HOME` to a fresh `TempDir` so tests never read or
/// write the developer's real config.
use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

// ── helpers ──────────────────────────────────────────────────────────────────

fn cmd_in(dir: &TempDir) -> assert_cmd::Command {
    let mut c = cargo_bin_cmd!("bmitrack");
    c.env("BMITRACK_HOME", dir.path());
    c.env_remove("BMITRACK_LOG");
    c
}

fn parse_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stdout.clone();
    serde_json::from_slice(&bytes).expect("stdout is not valid JSON")
}

fn parse_stderr_json(output: &assert_cmd::assert::Assert) -> Value {
    let bytes = output.get_output().stderr.clone();
    serde_json::from_slice(&bytes).expect("stderr is not valid JSON")
}

fn parse_json_lines(output: &assert_cmd::assert::Assert) -> Vec<Value> {
    String::from_utf8(output.get_output().stdout.clone())
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).expect("line is not valid JSON"))
        .collect()
}

// ── calc ─────────────────────────────────────────────────────────────────────

#[test]
fn test_calc_metric_json() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir).args(["calc", "70", "170"]).assert().success();

    let json = parse_json(&assert);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["command"], "calc");
    assert!((json["data"]["bmi"].as_f64().unwrap() - 24.2).abs() < 1e-9);
    assert_eq!(json["data"]["category"], "normal");
    assert!((json["data"]["healthy_range"]["min"].as_f64().unwrap() - 53.5).abs() < 1e-9);
    assert!((json["data"]["healthy_range"]["max"].as_f64().unwrap() - 72.0).abs() < 1e-9);
    assert_eq!(json["data"]["saved"], false);
}

#[test]
fn test_calc_imperial_flag() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args(["calc", "154", "67", "--units", "imperial"])
        .assert()
        .success();

    let json = parse_json(&assert);
    assert!((json["data"]["bmi"].as_f64().unwrap() - 24.1).abs() < 1e-9);
    assert_eq!(json["data"]["healthy_range"]["unit"], "lb");
}

#[test]
fn test_calc_uses_configured_units() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["config", "set", "units.system", "imperial"])
        .assert()
        .success();

    let assert = cmd_in(&dir).args(["calc", "154", "67"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["measurement"]["unit_system"], "imperial");
}

#[test]
fn test_calc_human_output() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["--human", "calc", "100", "170"])
        .assert()
        .success()
        .stdout(predicate::str::contains("34.6"))
        .stdout(predicate::str::contains("Obesity"));
}

#[test]
fn test_calc_clamps_negative_height() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir).args(["calc", "70", "-5"]).assert().success();

    let json = parse_json(&assert);
    assert_eq!(json["data"]["clamped"], true);
    assert_eq!(json["data"]["measurement"]["height"], 100.0);
}

#[test]
fn test_calc_nan_height_is_invalid_height() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir).args(["calc", "70", "NaN"]).assert().failure();

    let json = parse_stderr_json(&assert);
    assert_eq!(json["status"], "error");
    assert_eq!(json["command"], "calc");
    assert_eq!(json["error"]["code"], "invalid_height");
}

#[test]
fn test_calc_nan_weight_rejected() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir).args(["calc", "NaN", "170"]).assert().failure();
    let json = parse_stderr_json(&assert);
    assert_eq!(json["error"]["code"], "invalid_weight");
}

#[test]
fn test_calc_infinite_height_is_invalid_height() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir).args(["calc", "70", "inf"]).assert().failure();

    let json = parse_stderr_json(&assert);
    assert_eq!(json["error"]["code"], "invalid_height");
}

#[test]
fn test_calc_includes_profile() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["config", "set", "profile.age", "30"])
        .assert()
        .success();
    cmd_in(&dir)
        .args(["config", "set", "profile.gender", "female"])
        .assert()
        .success();

    let assert = cmd_in(&dir).args(["calc", "70", "170"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["profile"]["age"], 30);
    assert_eq!(json["data"]["profile"]["gender"], "female");
    // Profile never changes the result.
    assert!((json["data"]["bmi"].as_f64().unwrap() - 24.2).abs() < 1e-9);
}

// ── session ──────────────────────────────────────────────────────────────────

#[test]
fn test_session_tracks_history_and_trend() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args(["--date", "2024-01-01", "session", "--track"])
        .write_stdin("calc 70 170\ncalc 80 170\nhistory\ntrend\nclear\nhistory\nquit\n")
        .assert()
        .success();

    let lines = parse_json_lines(&assert);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0]["data"]["saved"], true);
    assert_eq!(lines[2]["command"], "history");
    assert_eq!(lines[2]["data"]["count"], 2);
    assert_eq!(lines[2]["data"]["entries"][0]["date"], "2024-01-01");
    assert_eq!(lines[3]["data"]["trend"]["direction"], "increasing");
    assert_eq!(lines[4]["data"]["removed"], 2);
    assert_eq!(lines[5]["data"]["count"], 0);
}

#[test]
fn test_session_untracked_by_default() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .arg("session")
        .write_stdin("calc 70 170\nhistory\ntrend\n")
        .assert()
        .success();

    let lines = parse_json_lines(&assert);
    assert_eq!(lines[0]["data"]["saved"], false);
    assert_eq!(lines[1]["data"]["count"], 0);
    assert!(lines[2]["data"]["trend"].is_null());
}

#[test]
fn test_session_switch_units_and_tracking() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .arg("session")
        .write_stdin("units imperial\ntrack on\ncalc 154 67\nhistory\n")
        .assert()
        .success();

    let lines = parse_json_lines(&assert);
    assert_eq!(lines[0]["data"]["units"], "imperial");
    assert_eq!(lines[1]["data"]["track"], true);
    assert!((lines[2]["data"]["bmi"].as_f64().unwrap() - 24.1).abs() < 1e-9);
    assert_eq!(lines[3]["data"]["entries"][0]["unit"], "imperial");
}

#[test]
fn test_session_history_does_not_outlive_process() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["session", "--track"])
        .write_stdin("calc 70 170\n")
        .assert()
        .success();

    let assert = cmd_in(&dir)
        .args(["session", "--track"])
        .write_stdin("history\n")
        .assert()
        .success();
    let lines = parse_json_lines(&assert);
    assert_eq!(lines[0]["data"]["count"], 0);
}

#[test]
fn test_session_bad_command_continues() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .arg("session")
        .write_stdin("fly away\nunits stone\ncalc 70 170\n")
        .assert()
        .success();

    let lines = parse_json_lines(&assert);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["status"], "error");
    assert_eq!(lines[1]["status"], "error");
    assert_eq!(lines[2]["status"], "ok");
}

#[test]
fn test_session_human_help() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["--human", "session"])
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("calc <weight> <height>"));
}

#[test]
fn test_session_track_flags_conflict() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["session", "--track", "--no-track"])
        .assert()
        .failure();
}

// ── categories ───────────────────────────────────────────────────────────────

#[test]
fn test_categories_json() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir).arg("categories").assert().success();
    let json = parse_json(&assert);
    let bands = json["data"]["bands"].as_array().unwrap();
    assert_eq!(bands.len(), 4);
    assert_eq!(bands[1]["range"], "18.5-24.9");
    assert_eq!(bands[1]["lower"], 18.5);
}

// ── config ───────────────────────────────────────────────────────────────────

#[test]
fn test_config_set_writes_file() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["config", "set", "history.track", "true"])
        .assert()
        .success();

    let contents = std::fs::read_to_string(dir.path().join("config.toml")).unwrap();
    assert!(contents.contains("track = true"));
}

#[test]
fn test_config_show_json() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir).args(["config", "show"]).assert().success();
    let json = parse_json(&assert);
    assert_eq!(json["data"]["config"]["units"]["system"], "metric");
}

#[test]
fn test_config_set_unknown_key_fails() {
    let dir = TempDir::new().unwrap();
    let assert = cmd_in(&dir)
        .args(["config", "set", "profile.height", "170"])
        .assert()
        .failure();
    let json = parse_stderr_json(&assert);
    assert_eq!(json["command"], "config");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("unknown config key")
    );
}

// ── completions ──────────────────────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    let dir = TempDir::new().unwrap();
    cmd_in(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bmitrack"));
}
