use std::path::Path;
use std::process::Output;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use chrono::{Duration, Utc};

/// Get a Command for mapd with no ambient environment leaking in
pub fn mapd() -> Command {
    let mut cmd = cargo_bin_cmd!("mapd");
    cmd.env_remove("MAPD_DATA_DIR")
        .env_remove("MAPD_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// A mapd Command bound to `dir` as its data directory
pub fn mapd_in(dir: &Path) -> Command {
    let mut cmd = mapd();
    cmd.arg("--data-dir").arg(dir);
    cmd
}

/// First stdout line, which is the new record id under `--quiet`
pub fn extract_id(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .next()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

pub fn json_stdout(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

pub fn run_json(dir: &Path, args: &[&str]) -> serde_json::Value {
    let output = mapd_in(dir)
        .args(["--format", "json"])
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success(), "{:?} failed: {:?}", args, output);
    json_stdout(&output)
}

#[allow(dead_code)]
pub fn visit(dir: &Path, name: &str, country: &str, city: &str, lat: f64, lon: f64) -> String {
    let output = mapd_in(dir)
        .args(["--quiet", "place", "visit", "--name", name, "--country", country, "--city", city])
        .args(["--lat", &lat.to_string(), "--lon", &lon.to_string()])
        .output()
        .unwrap();
    assert!(output.status.success(), "visit failed: {:?}", output);
    extract_id(&output)
}

#[allow(dead_code)]
pub fn wish(dir: &Path, name: &str, country: &str, city: &str) -> String {
    let output = mapd_in(dir)
        .args(["--quiet", "place", "wish", "--name", name, "--country", country, "--city", city])
        .args(["--lat", "10", "--lon", "20"])
        .output()
        .unwrap();
    assert!(output.status.success(), "wish failed: {:?}", output);
    extract_id(&output)
}

/// Plan a trip starting `start_in_days` from today and lasting `days`
#[allow(dead_code)]
pub fn add_trip(dir: &Path, name: &str, country: &str, start_in_days: i64, days: i64) -> String {
    let start = Utc::now() + Duration::days(start_in_days);
    let end = start + Duration::days(days);
    let output = mapd_in(dir)
        .args(["--quiet", "trip", "add", "--name", name, "--country", country, "--city", "Capital"])
        .args(["--lat", "1.5", "--lon", "-2.5"])
        .args(["--start", &start.to_rfc3339(), "--end", &end.to_rfc3339()])
        .output()
        .unwrap();
    assert!(output.status.success(), "trip add failed: {:?}", output);
    extract_id(&output)
}
