use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const CATALOG: &str = r#"[
    {"id": "1", "name": "banana", "category": "snack", "frequency": 12},
    {"id": "2", "name": "banana pancakes", "category": "breakfast", "frequency": 8},
    {"id": "3", "name": "banana bread", "category": "breakfast", "frequency": 5},
    {"id": "4", "name": "pancakes", "frequency": 15}
]"#;

struct Fixture {
    dir: TempDir,
    catalog: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let catalog = dir.path().join("catalog.json");
        fs::write(&catalog, CATALOG).unwrap();
        Self { dir, catalog }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("meal-suggest").unwrap();
        cmd.current_dir(self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("xdg"))
            .env("HOME", self.dir.path())
            .env_remove("MEALLOG_CONFIG")
            .env_remove("RUST_LOG");
        cmd
    }

    fn ranked_names(&self, args: &[&str]) -> Vec<String> {
        let output = self
            .cmd()
            .arg("rank")
            .arg("--catalog")
            .arg(&self.catalog)
            .arg("--json")
            .args(args)
            .output()
            .unwrap();
        assert!(output.status.success());

        let entries: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
        entries
            .iter()
            .map(|e| e["name"].as_str().unwrap().to_string())
            .collect()
    }
}

#[test]
fn rank_prefers_prefix_matches() {
    let fixture = Fixture::new();
    assert_eq!(fixture.ranked_names(&["pan"]), ["pancakes", "banana pancakes"]);
}

#[test]
fn rank_orders_by_frequency() {
    let fixture = Fixture::new();
    assert_eq!(
        fixture.ranked_names(&["ban"]),
        ["banana", "banana pancakes", "banana bread"]
    );
}

#[test]
fn rank_respects_limit_flag() {
    let fixture = Fixture::new();
    assert_eq!(fixture.ranked_names(&["banana", "--limit", "2"]), ["banana", "banana pancakes"]);
}

#[test]
fn rank_negative_limit_returns_nothing() {
    let fixture = Fixture::new();
    assert!(fixture.ranked_names(&["ban", "--limit=-3"]).is_empty());
}

#[test]
fn rank_short_query_returns_nothing() {
    let fixture = Fixture::new();
    assert!(fixture.ranked_names(&["b"]).is_empty());
}

#[test]
fn rank_uses_configured_limit() {
    let fixture = Fixture::new();
    fs::write(fixture.dir.path().join(".meallog.toml"), "[suggest]\nlimit = 1\n").unwrap();
    assert_eq!(fixture.ranked_names(&["ban"]), ["banana"]);
}

#[test]
fn rank_plain_output_lists_names() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["rank", "--catalog"])
        .arg(&fixture.catalog)
        .arg("bread")
        .assert()
        .success()
        .stdout(predicate::str::contains("banana bread"))
        .stdout(predicate::str::contains("pancakes").not());
}

#[test]
fn rank_without_matches_warns() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["rank", "--catalog"])
        .arg(&fixture.catalog)
        .arg("xyz")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("No suggestions"));
}

#[test]
fn missing_catalog_fails() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["rank", "--catalog", "nope.json", "ban"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn malformed_catalog_exits_with_catalog_code() {
    let fixture = Fixture::new();
    fs::write(&fixture.catalog, "{").unwrap();
    fixture
        .cmd()
        .args(["check", "--catalog"])
        .arg(&fixture.catalog)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("E4001"));
}

#[test]
fn invalid_config_exits_with_config_code() {
    let fixture = Fixture::new();
    let config = fixture.dir.path().join("bad.toml");
    fs::write(&config, "[suggest]\nlimit = 0\n").unwrap();
    fixture
        .cmd()
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("suggest.limit"));
}

#[test]
fn check_reports_counts() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["check", "--catalog"])
        .arg(&fixture.catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("4 entries, 2 categories"))
        .stdout(predicate::str::contains("Configuration: defaults"));
}

#[test]
fn config_prints_defaults() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("limit = 5"))
        .stdout(predicate::str::contains("min_query_chars = 2"));
}

#[test]
fn malformed_catalog_prints_parse_error_once() {
    let fixture = Fixture::new();
    fs::write(&fixture.catalog, "[").unwrap();
    let output = fixture
        .cmd()
        .args(["rank", "--catalog"])
        .arg(&fixture.catalog)
        .arg("ban")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("EOF while parsing").count(), 1, "{stderr}");
    assert!(stderr.contains("Loading catalog"));
}

#[test]
fn rank_json_failure_prints_error_report() {
    let fixture = Fixture::new();
    fs::write(&fixture.catalog, "[").unwrap();
    let output = fixture
        .cmd()
        .args(["rank", "--json", "--catalog"])
        .arg(&fixture.catalog)
        .arg("ban")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(4));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["code_str"], "E4001");
    assert_eq!(report["category"], "Catalog");
    assert!(report["context"].as_str().unwrap().starts_with("Loading catalog"));
}

#[test]
fn metrics_flag_prints_rank_metrics() {
    let fixture = Fixture::new();
    let output = fixture
        .cmd()
        .args(["--metrics", "rank", "--json", "--catalog"])
        .arg(&fixture.catalog)
        .arg("ban")
        .output()
        .unwrap();
    assert!(output.status.success());

    let ranked: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(ranked.len(), 3);

    let stderr = String::from_utf8(output.stderr).unwrap();
    let metrics: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(metrics["counters"]["suggest.rank"], 1);
    assert_eq!(metrics["histograms"]["suggest.rank.ms"]["count"], 1);
}

#[test]
fn metrics_are_silent_by_default() {
    let fixture = Fixture::new();
    fixture
        .cmd()
        .args(["rank", "--catalog"])
        .arg(&fixture.catalog)
        .arg("ban")
        .assert()
        .success()
        .stderr(predicate::str::contains("counters").not());
}
