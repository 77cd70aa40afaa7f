#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use tempfile::TempDir;

const WAVE_BODY: &str =
    r#"{"data":{"wave":[{"surf":{"min":2.0,"max":4.0},"swells":[{"period":12},{"period":8}]}]}}"#;
const WIND_BODY: &str = r#"{"data":{"wind":[{"speed":5.0,"direction":270.0}]}}"#;
const TIDE_BODY: &str = r#"{"data":{"tides":[]}}"#;

const SPOTS_JSON: &str = r#"[
    {
        "name": "Linda Mar",
        "type": "beach_break",
        "description": "Sheltered beach break in Pacifica",
        "surfline_id": "5842041f4e65fad6a770883b",
        "characteristics": {
            "wave_quality": "forgiving",
            "skill_level": "beginner_friendly",
            "crowd_factor": "high",
            "best_boards": ["longboard", "fish/hybrid"]
        }
    }
]"#;

const BOARDS_JSON: &str = r#"[
    {
        "name": "Groveler",
        "length": "5'4\"",
        "volume": 34.0,
        "type": "fish/hybrid",
        "ideal_wave_range": [1, 2],
        "ideal_period_range": [6, 9],
        "construction": "epoxy",
        "description": "Small-wave fish"
    },
    {
        "name": "Daily Driver",
        "length": "6'0\"",
        "width": "19.5\"",
        "volume": 30.0,
        "type": "performance_shortboard",
        "ideal_wave_range": [3, 6],
        "ideal_period_range": [10, 16],
        "construction": "pu",
        "description": "Everyday shortboard"
    }
]"#;

const CONSTRUCTIONS_JSON: &str = r#"{
    "pu": {
        "full_name": "Polyurethane",
        "durability": "low",
        "flex": "medium-high",
        "description": "Classic hand-shaped feel"
    },
    "epoxy": {
        "full_name": "Epoxy",
        "durability": "high",
        "paddle_power": "high",
        "small_wave_performance": "excellent",
        "description": "Light and buoyant"
    }
}"#;

/// Answers each request with the next `(status, body)` pair and reports the
/// request line on the returned channel.
fn serve(responses: Vec<(u16, &'static str)>) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let addr = listener.local_addr().expect("listener should have an address");
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream.try_clone().expect("stream should clone"));
            let mut request_line = String::new();
            reader.read_line(&mut request_line).expect("request should read");
            loop {
                let mut header = String::new();
                if reader.read_line(&mut header).unwrap_or(0) == 0 || header == "\r\n" {
                    break;
                }
            }
            let _ = tx.send(request_line.trim().to_string());
            let response = format!(
                "HTTP/1.1 {status} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .expect("response should write");
        }
    });

    (format!("http://{addr}/kbyg/spots/forecasts"), rx)
}

fn write_workspace(dir: &Path, base_url: &str) {
    fs::write(dir.join("surf_spots.json"), SPOTS_JSON).expect("spots should write");
    fs::write(dir.join("my_boards.json"), BOARDS_JSON).expect("boards should write");
    fs::write(dir.join("board_constructions.json"), CONSTRUCTIONS_JSON)
        .expect("constructions should write");
    fs::write(
        dir.join("quiver.toml"),
        format!(
            "[provider]\nbase_url = \"{base_url}\"\ntimeout_secs = 5\n\n[defaults]\nspot = \"linda_mar\"\nexport_dir = \"{}\"\n",
            dir.join("dumps").display()
        ),
    )
    .expect("config should write");
}

fn quiver(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("quiver").expect("binary should compile");
    cmd.env_remove("HOME")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(dir);
    cmd
}

fn healthy_responses() -> Vec<(u16, &'static str)> {
    vec![(200, WAVE_BODY), (200, WIND_BODY), (200, TIDE_BODY)]
}

#[test]
fn forecast_text_report_ranks_the_quiver() {
    let (base_url, requests) = serve(healthy_responses());
    let dir = TempDir::new().expect("temp dir should be created");
    write_workspace(dir.path(), &base_url);

    quiver(dir.path())
        .arg("Linda Mar")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("SURF FORECAST: LINDA MAR"))
        .stdout(predicate::str::contains("Type: Beach Break"))
        .stdout(predicate::str::contains("Wave Height: 3.0ft"))
        .stdout(predicate::str::contains("Period: 12s"))
        .stdout(predicate::str::contains("Wind: 5mph @ 270°"))
        .stdout(predicate::str::contains("Tide: Available"))
        .stdout(predicate::str::contains("1. Daily Driver"))
        .stdout(predicate::str::contains("2. Groveler"))
        .stdout(predicate::str::contains("SPOT ANALYSIS (Top Pick)"))
        .stdout(predicate::str::contains(
            "→ Take the Daily Driver (pu construction)",
        ));

    let wave = requests.recv().expect("wave request should arrive");
    assert!(wave.starts_with("GET /kbyg/spots/forecasts/wave?"));
    assert!(wave.contains("spotId=5842041f4e65fad6a770883b"));
    assert!(wave.contains("days=1"));
    assert!(wave.contains("intervalHours=1"));
    let wind = requests.recv().expect("wind request should arrive");
    assert!(wind.starts_with("GET /kbyg/spots/forecasts/wind?"));
    let tides = requests.recv().expect("tides request should arrive");
    assert!(tides.starts_with("GET /kbyg/spots/forecasts/tides?"));
    assert!(!tides.contains("intervalHours"));
}

#[test]
fn forecast_json_report_is_machine_readable() {
    let (base_url, _requests) = serve(healthy_responses());
    let dir = TempDir::new().expect("temp dir should be created");
    write_workspace(dir.path(), &base_url);

    let output = quiver(dir.path())
        .arg("--format")
        .arg("json")
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["spot"]["name"], "Linda Mar");
    assert_eq!(report["conditions"]["wave_height"], 3.0);
    assert_eq!(report["conditions"]["period"], 12.0);
    assert_eq!(report["conditions"]["tide"], "Available");

    let recommendations = report["recommendations"]
        .as_array()
        .expect("recommendations should be an array");
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0]["board"]["name"], "Daily Driver");
    assert_eq!(recommendations[1]["construction_type"], "epoxy");
    let first = recommendations[0]["score"].as_f64().expect("score is a number");
    let second = recommendations[1]["score"].as_f64().expect("score is a number");
    assert!(first >= second);
}

#[test]
fn save_json_writes_export_with_raw_payloads() {
    let (base_url, _requests) = serve(healthy_responses());
    let dir = TempDir::new().expect("temp dir should be created");
    write_workspace(dir.path(), &base_url);

    quiver(dir.path())
        .arg("linda-mar")
        .arg("--save-json")
        .assert()
        .code(0)
        .stderr(predicate::str::contains("raw data saved to"));

    let exports = fs::read_dir(dir.path().join("dumps"))
        .expect("export dir should exist")
        .map(|entry| entry.expect("entry should read").path())
        .collect::<Vec<_>>();
    assert_eq!(exports.len(), 1);
    let file_name = exports[0]
        .file_name()
        .and_then(|name| name.to_str())
        .expect("file name should be utf-8");
    assert!(file_name.starts_with("surfline_linda_mar_"));
    assert!(file_name.ends_with(".json"));

    let content = fs::read_to_string(&exports[0]).expect("export should read");
    let dump: Value = serde_json::from_str(&content).expect("export should be JSON");
    assert_eq!(dump["spot_info"]["surfline_id"], "5842041f4e65fad6a770883b");
    assert_eq!(dump["raw_data"]["wave"]["data"]["wave"][0]["surf"]["max"], 4.0);
    assert_eq!(dump["raw_data"]["wind"]["data"]["wind"][0]["speed"], 5.0);
    assert!(dump["recommendations"].is_array());
}

#[test]
fn wave_endpoint_failure_reports_without_recommendation() {
    let (base_url, _requests) = serve(vec![(503, r#"{"message":"unavailable"}"#)]);
    let dir = TempDir::new().expect("temp dir should be created");
    write_workspace(dir.path(), &base_url);

    quiver(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("BOARD RECOMMENDATIONS").not())
        .stderr(predicate::str::contains("provider request failed"))
        .stderr(predicate::str::contains("503"));
}

#[test]
fn wind_and_tide_failures_degrade_to_defaults() {
    let (base_url, _requests) = serve(vec![
        (200, WAVE_BODY),
        (500, r#"{}"#),
        (500, r#"{}"#),
    ]);
    let dir = TempDir::new().expect("temp dir should be created");
    write_workspace(dir.path(), &base_url);

    quiver(dir.path())
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Wind: 0mph @ 0°"))
        .stdout(predicate::str::contains("Tide: N/A"))
        .stdout(predicate::str::contains("Clean conditions"))
        .stderr(predicate::str::contains("wind data unavailable"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn malformed_wave_payload_reports_parse_failure() {
    let (base_url, _requests) = serve(vec![
        (200, r#"{"data":{"wave":[]}}"#),
        (200, WIND_BODY),
        (200, TIDE_BODY),
    ]);
    let dir = TempDir::new().expect("temp dir should be created");
    write_workspace(dir.path(), &base_url);

    quiver(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse conditions"));
}

#[test]
fn unreachable_provider_reports_without_recommendation() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let addr = listener.local_addr().expect("listener should have an address");
    drop(listener);

    let dir = TempDir::new().expect("temp dir should be created");
    write_workspace(dir.path(), &format!("http://{addr}/kbyg/spots/forecasts"));

    quiver(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("wave request failed"));
}

#[cfg(unix)]
#[test]
fn interrupt_during_fetch_is_reported() {
    use std::process::{Command as ProcessCommand, Stdio};
    use std::time::Duration;

    let listener = TcpListener::bind("127.0.0.1:0").expect("listener should bind");
    let addr = listener.local_addr().expect("listener should have an address");
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let Ok((stream, _)) = listener.accept() else {
            return;
        };
        let _ = tx.send(());
        thread::sleep(Duration::from_secs(30));
        drop(stream);
    });

    let dir = TempDir::new().expect("temp dir should be created");
    write_workspace(dir.path(), &format!("http://{addr}/kbyg/spots/forecasts"));

    let child = ProcessCommand::new(assert_cmd::cargo::cargo_bin("quiver"))
        .env_remove("HOME")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(dir.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("binary should start");

    rx.recv_timeout(Duration::from_secs(10))
        .expect("wave request should reach the server");
    let status = ProcessCommand::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .expect("kill should run");
    assert!(status.success());

    let output = child.wait_with_output().expect("binary should exit");
    assert_eq!(output.status.code(), Some(130));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cancelled by user"), "stderr: {stderr}");
}
