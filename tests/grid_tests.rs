use hvt_brs::error::HvtError;
use hvt_brs::grid::{default_benchmarks, Benchmark, Grid, GridSpec, Sweep};
use hvt_brs::point::round_coupling;
use rstest::rstest;

fn default_grid() -> Grid {
    Grid::new(GridSpec::default()).expect("default grid is valid")
}

fn assert_strictly_ascending(axis: &[f64]) {
    for pair in axis.windows(2) {
        assert!(pair[0] < pair[1], "not ascending: {} then {}", pair[0], pair[1]);
    }
}

#[test]
fn test_default_axes() {
    let grid = default_grid();
    assert_eq!(grid.masses(), vec![1000.0, 2000.0, 3000.0, 4000.0]);
    assert_eq!(grid.gvs(), vec![1.0]);
    assert_eq!(grid.benchmarks().len(), 3);
}

#[test]
fn test_coupling_axes_are_sorted_and_unique() {
    let grid = default_grid();
    assert_strictly_ascending(&grid.gfs());
    assert_strictly_ascending(&grid.ghs());
}

#[test]
fn test_coupling_axes_are_rounded() {
    let grid = default_grid();
    for v in grid.gfs().into_iter().chain(grid.ghs()) {
        assert_eq!(round_coupling(v), v);
        assert!(!(v == 0.0 && v.is_sign_negative()), "negative zero on an axis");
    }
}

#[test]
fn test_benchmark_couplings_are_on_the_grid() {
    let grid = default_grid();
    let gfs = grid.gfs();
    let ghs = grid.ghs();
    for b in default_benchmarks() {
        assert!(gfs.contains(&b.gf), "{} gf {} missing", b.name, b.gf);
        assert!(ghs.contains(&b.gh), "{} gh {} missing", b.name, b.gh);
    }
    // modelA sits off every sweep
    assert!(gfs.contains(&-0.562));
    assert!(ghs.contains(&-2.928));
}

#[test]
fn test_axis_bounds() {
    let grid = default_grid();
    let gfs = grid.gfs();
    let ghs = grid.ghs();
    assert_eq!(gfs.first(), Some(&-0.562));
    assert!((gfs.last().unwrap() - 1.6).abs() < 1e-9);
    assert_eq!(ghs.first(), Some(&-8.0));
    assert_eq!(ghs.last(), Some(&8.0));
}

#[test]
fn test_grid_is_deterministic() {
    let a = default_grid();
    let b = default_grid();
    assert_eq!(a.gfs(), b.gfs());
    assert_eq!(a.ghs(), b.ghs());
    assert_eq!(a.size(), b.size());
}

#[test]
fn test_size_is_product_of_axes() {
    let grid = default_grid();
    assert_eq!(
        grid.size(),
        grid.masses().len() * grid.gvs().len() * grid.gfs().len() * grid.ghs().len()
    );
}

#[rstest]
#[case(Sweep::new(0.0, 1.0, 0.25), vec![0.0, 0.25, 0.5, 0.75])]
#[case(Sweep::new(-8.0, 8.5, 0.5), (0..33).map(|i| -8.0 + i as f64 * 0.5).collect())]
#[case(Sweep::new(1.0, 1.0, 0.1), vec![])]
#[case(Sweep::new(1.0, 0.0, 0.1), vec![])]
fn test_sweep_is_half_open(#[case] sweep: Sweep, #[case] expected: Vec<f64>) {
    assert_eq!(sweep.len(), expected.len());
    assert_eq!(sweep.is_empty(), expected.is_empty());
    assert_eq!(sweep.values().collect::<Vec<_>>(), expected);
}

#[test]
fn test_custom_spec_merges_benchmarks_and_sweeps() {
    let spec = GridSpec {
        masses: vec![1500.0],
        gvs: vec![1.0, 3.0],
        gf_sweeps: vec![Sweep::new(0.1, 0.25, 0.1)],
        gh_sweeps: vec![Sweep::new(-1.0, 1.5, 1.0)],
        benchmarks: vec![Benchmark::new("only", 1.0, 0.0, 1.0, 1.0, 0.0)],
    };
    let grid = Grid::new(spec).unwrap();
    assert_eq!(grid.gfs(), vec![0.0, 0.1, 0.2]);
    assert_eq!(grid.ghs(), vec![-1.0, 0.0, 1.0]);
    assert_eq!(grid.size(), 2 * 3 * 3);
}

#[test]
fn test_mass_and_gv_lists_are_sorted_and_unique() {
    let spec = GridSpec {
        masses: vec![3000.0, 1000.0, 3000.0, 1000.0],
        gvs: vec![3.0, 1.0, 3.0],
        ..GridSpec::default()
    };
    let grid = Grid::new(spec).unwrap();
    assert_eq!(grid.masses(), vec![1000.0, 3000.0]);
    assert_eq!(grid.gvs(), vec![1.0, 3.0]);
    assert_eq!(grid.size(), 2 * 2 * grid.gfs().len() * grid.ghs().len());
}

#[test]
fn test_overlapping_sweeps_deduplicate() {
    let spec = GridSpec {
        gf_sweeps: vec![Sweep::new(0.0, 0.5, 0.1), Sweep::new(0.2, 0.45, 0.1)],
        gh_sweeps: vec![],
        benchmarks: vec![],
        ..GridSpec::default()
    };
    let grid = Grid::new(spec).unwrap();
    assert_eq!(grid.gfs(), vec![0.0, 0.1, 0.2, 0.3, 0.4]);
    assert!(grid.ghs().is_empty());
    assert_eq!(grid.size(), 0);
}

#[rstest]
#[case::zero_step(GridSpec { gf_sweeps: vec![Sweep::new(0.0, 1.0, 0.0)], ..GridSpec::default() })]
#[case::negative_step(GridSpec { gh_sweeps: vec![Sweep::new(0.0, 1.0, -0.1)], ..GridSpec::default() })]
#[case::infinite_bound(GridSpec { gf_sweeps: vec![Sweep::new(0.0, f64::INFINITY, 0.1)], ..GridSpec::default() })]
#[case::no_masses(GridSpec { masses: vec![], ..GridSpec::default() })]
#[case::no_gvs(GridSpec { gvs: vec![], ..GridSpec::default() })]
#[case::zero_gv(GridSpec { gvs: vec![1.0, 0.0], ..GridSpec::default() })]
#[case::negative_mass(GridSpec { masses: vec![-1000.0], ..GridSpec::default() })]
fn test_invalid_spec_is_rejected(#[case] spec: GridSpec) {
    match Grid::new(spec) {
        Err(HvtError::Config(_)) => {}
        other => panic!("expected a config error, got {:?}", other.map(|g| g.size())),
    }
}
