use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    dir: TempDir,
    config_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_path = dir.path().join("grid.json");
        fs::write(
            &config_path,
            r#"{
                "grid": {
                    "masses": [1000],
                    "gvs": [1],
                    "gf_sweeps": [{ "start": 0.1, "stop": 0.25, "step": 0.1 }],
                    "gh_sweeps": [{ "start": -1.0, "stop": 1.5, "step": 1.0 }],
                    "benchmarks": [
                        { "name": "modelC", "ch": 1.0, "cq": 0.0, "gv": 1.0, "gh": 1.0, "gf": 0.0 }
                    ]
                }
            }"#,
        )
        .unwrap();
        Self { dir, config_path }
    }

    fn cache_dir(&self) -> PathBuf {
        self.dir.path().join("BRs")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_hvt-brs"))
            .args(args)
            .arg("--cache-dir")
            .arg(self.cache_dir())
            .output()
            .expect("Failed to execute binary")
    }
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed\nSTDOUT:\n{}\nSTDERR:\n{}",
            stdout_of(output),
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

#[test]
fn test_cli_grid_json_dump() {
    let ctx = TestContext::new();
    let output = ctx.run(&["grid", "--json", "--config", ctx.config_path.to_str().unwrap()]);
    assert_success(&output);

    let dump: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(dump["masses"], serde_json::json!([1000.0]));
    assert_eq!(dump["gfs"], serde_json::json!([0.0, 0.1, 0.2]));
    assert_eq!(dump["ghs"], serde_json::json!([-1.0, 0.0, 1.0]));
}

#[test]
fn test_cli_show_computes_then_hits_cache() {
    let ctx = TestContext::new();
    let args = ["show", "-p", "zprime", "-m", "1000", "--gf", "0.05", "--gh", "-0.5"];

    let first = ctx.run(&args);
    assert_success(&first);
    assert!(stdout_of(&first).contains("(computed)"), "{}", stdout_of(&first));
    assert!(stdout_of(&first).contains("BRjets"));

    let file = ctx
        .cache_dir()
        .join("Zprime/mass_1000/gv_1/BRs_Zprime_M1000_gv1_gf0.050.csv");
    assert!(file.exists(), "missing {}", file.display());

    let second = ctx.run(&args);
    assert_success(&second);
    assert!(stdout_of(&second).contains("(cache)"), "{}", stdout_of(&second));
}

#[test]
fn test_cli_reports_each_computed_point_by_default() {
    let ctx = TestContext::new();
    let output = ctx.run(&["show", "-p", "zprime", "-m", "1000", "--gf", "0.05", "--gh", "-0.5565"]);
    assert_success(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Calculating BR for Zprime"), "{}", stderr);
    // -0.5565 is stored just above the tie, so it keys the -0.556 row
    assert!(stderr.contains("gh: -0.556"), "{}", stderr);
}

#[test]
fn test_cli_show_no_store() {
    let ctx = TestContext::new();
    let output = ctx.run(&[
        "show", "-p", "wprime", "-m", "2000", "--gf", "0.1", "--gh", "1", "--no-store",
    ]);
    assert_success(&output);
    assert!(!ctx.cache_dir().exists());
}

#[test]
fn test_cli_show_degenerate_point() {
    let ctx = TestContext::new();
    let output = ctx.run(&["show", "-p", "zprime", "-m", "1000", "--gf", "0", "--gh", "0"]);
    assert_success(&output);
    assert!(stdout_of(&output).contains("No branching ratios"));
}

#[test]
fn test_cli_scan_writes_cache_and_aggregate() {
    let ctx = TestContext::new();
    let out_dir = ctx.dir.path().join("out");
    let output = ctx.run(&[
        "scan",
        "--config",
        ctx.config_path.to_str().unwrap(),
        "--particle",
        "wprime",
        "--output-dir",
        out_dir.to_str().unwrap(),
    ]);
    assert_success(&output);

    let aggregate = out_dir.join("BRs_Wprime.csv");
    let text = fs::read_to_string(&aggregate).unwrap();
    // Header plus 8 non-degenerate rows
    assert_eq!(text.lines().count(), 9);
    assert!(ctx.cache_dir().join("Wprime/mass_1000/gv_1").is_dir());
    assert!(!ctx.cache_dir().join("Zprime").exists());
}

#[test]
fn test_cli_corrupt_cache_fails_unless_quarantined() {
    let ctx = TestContext::new();
    let dir = ctx.cache_dir().join("Zprime/mass_1000/gv_1");
    fs::create_dir_all(&dir).unwrap();
    let file = dir.join("BRs_Zprime_M1000_gv1_gf0.100.csv");
    fs::write(&file, "not a cache\n").unwrap();

    let args = ["show", "-p", "zprime", "-m", "1000", "--gf", "0.1", "--gh", "0.5"];
    let failed = ctx.run(&args);
    assert!(!failed.status.success());
    assert!(file.exists());

    let mut quarantine = args.to_vec();
    quarantine.extend(["--on-corrupt", "quarantine"]);
    let recovered = ctx.run(&quarantine);
    assert_success(&recovered);
    assert!(Path::new(&format!("{}.corrupt", file.display())).exists());
}

#[test]
fn test_cli_bad_config_exits_non_zero() {
    let ctx = TestContext::new();
    let bad = ctx.dir.path().join("bad.json");
    fs::write(&bad, r#"{ "grid": { "masses": [] } }"#).unwrap();
    let output = ctx.run(&["grid", "--config", bad.to_str().unwrap()]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_benchmarks_table() {
    let ctx = TestContext::new();
    let output = ctx.run(&["benchmarks", "--masses", "1000,2000", "--no-store"]);
    assert_success(&output);

    let stdout = stdout_of(&output);
    for name in ["modelA", "modelB", "modelC", "Zprime", "Wprime", "l#nu"] {
        assert!(stdout.contains(name), "missing {}\n{}", name, stdout);
    }
    assert!(!ctx.cache_dir().exists());
}
