use hvt_brs::config::{CacheParams, CorruptPolicy, RunConfig, ScanParams};
use hvt_brs::error::HvtError;
use hvt_brs::grid::GridSpec;
use hvt_brs::model::ElectroweakInputs;
use hvt_brs::point::Particle;
use std::fs;
use std::path::PathBuf;

fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("run.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_no_config_means_defaults() {
    let config = RunConfig::load_or_default(None).unwrap();
    assert_eq!(config, RunConfig::default());
    assert_eq!(config.grid, GridSpec::default());
}

#[test]
fn test_partial_config_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"{ "grid": { "masses": [1500, 2500] }, "inputs": { "m_top": 173.0 } }"#,
    );

    let config = RunConfig::load_from_file(&path).unwrap();
    assert_eq!(config.grid.masses, vec![1500.0, 2500.0]);
    assert_eq!(config.grid.gvs, vec![1.0]);
    assert_eq!(config.grid.benchmarks.len(), 3);
    assert_eq!(config.inputs.m_top, 173.0);
    assert_eq!(config.inputs.m_w, ElectroweakInputs::default().m_w);
}

#[test]
fn test_sweeps_and_benchmarks_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "grid": {
                "gf_sweeps": [{ "start": 0.1, "stop": 0.35, "step": 0.1 }],
                "gh_sweeps": [],
                "benchmarks": [
                    { "name": "custom", "ch": 0.5, "cq": 1.0, "gv": 2.0, "gh": 1.0, "gf": 0.4 }
                ]
            }
        }"#,
    );

    let config = RunConfig::load_from_file(&path).unwrap();
    assert_eq!(config.grid.gf_sweeps.len(), 1);
    assert!(config.grid.gh_sweeps.is_empty());
    assert_eq!(config.grid.benchmarks[0].name, "custom");
}

#[test]
fn test_invalid_grid_in_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        r#"{ "grid": { "gf_sweeps": [{ "start": 0.0, "stop": 1.0, "step": 0.0 }] } }"#,
    );
    let err = RunConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, HvtError::Config(_)), "{}", err);
}

#[test]
fn test_missing_file_names_the_path() {
    let err = RunConfig::load_from_file("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.json"), "{}", err);
}

#[test]
fn test_malformed_json_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "{ grid: ");
    let err = RunConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, HvtError::Json(_)));
}

#[test]
fn test_scan_params_override_grid_lists() {
    let params = ScanParams {
        masses: Some(vec![5000.0]),
        gvs: None,
        ..Default::default()
    };
    let mut spec = GridSpec::default();
    params.merge_into(&mut spec);
    assert_eq!(spec.masses, vec![5000.0]);
    assert_eq!(spec.gvs, vec![1.0]);
}

#[test]
fn test_scan_params_default_to_both_particles() {
    assert_eq!(
        ScanParams::default().particles(),
        vec![Particle::Zprime, Particle::Wprime]
    );
    let only_w = ScanParams {
        particles: vec![Particle::Wprime],
        ..Default::default()
    };
    assert_eq!(only_w.particles(), vec![Particle::Wprime]);
}

#[test]
fn test_cache_params_defaults() {
    let params = CacheParams::default();
    assert_eq!(params.cache_dir, PathBuf::from("BRs"));
    assert_eq!(params.on_corrupt, CorruptPolicy::Fail);
}
