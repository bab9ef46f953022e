//! Parameter grid for the BR scan.
//!
//! Masses and gv values are literal lists, sorted and deduplicated. The gf and
//! gh axes are built from piecewise sweeps merged with the benchmark couplings,
//! rounded with [`round_coupling`], deduplicated and sorted.

use crate::error::{HvtError, HvtResult};
use crate::point::round_coupling;
use serde::{Deserialize, Serialize};

/// A named HVT coupling configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub name: String,
    pub ch: f64,
    pub cq: f64,
    pub gv: f64,
    pub gh: f64,
    pub gf: f64,
}

impl Benchmark {
    pub fn new(name: &str, ch: f64, cq: f64, gv: f64, gh: f64, gf: f64) -> Self {
        Self {
            name: name.to_string(),
            ch,
            cq,
            gv,
            gh,
            gf,
        }
    }
}

pub fn default_benchmarks() -> Vec<Benchmark> {
    vec![
        Benchmark::new("modelA", -0.556, -1.316, 1.0, -0.556, -0.562),
        Benchmark::new("modelB", -0.976, 1.024, 3.0, -2.928, 0.146),
        Benchmark::new("modelC", 1.0, 0.0, 1.0, 1.0, 0.0),
    ]
}

/// Half-open range `[start, stop)` with a fixed step, numpy `arange` style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl Sweep {
    pub const fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    pub fn len(&self) -> usize {
        let n = ((self.stop - self.start) / self.step).ceil();
        if n.is_finite() && n > 0.0 {
            n as usize
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.start + i as f64 * self.step)
    }

    fn validate(&self, axis: &str) -> HvtResult<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(HvtError::Config(format!(
                "{} sweep step must be finite and > 0 (got {})",
                axis, self.step
            )));
        }
        if !self.start.is_finite() || !self.stop.is_finite() {
            return Err(HvtError::Config(format!("{} sweep bounds must be finite", axis)));
        }
        Ok(())
    }
}

/// Everything that defines the scan grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    pub masses: Vec<f64>,
    pub gvs: Vec<f64>,
    pub gf_sweeps: Vec<Sweep>,
    pub gh_sweeps: Vec<Sweep>,
    pub benchmarks: Vec<Benchmark>,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            masses: vec![1000.0, 2000.0, 3000.0, 4000.0],
            gvs: vec![1.0],
            gf_sweeps: vec![
                Sweep::new(0.01, 0.1 + 0.01, 0.001),
                Sweep::new(0.1, 0.5 + 0.01, 0.005),
                Sweep::new(0.5, 1.6 + 0.1, 0.1),
            ],
            gh_sweeps: vec![
                Sweep::new(-2.0, 2.0 + 0.01, 0.01),
                Sweep::new(-8.0, 8.0 + 0.5, 0.5),
            ],
            benchmarks: default_benchmarks(),
        }
    }
}

impl GridSpec {
    pub fn validate(&self) -> HvtResult<()> {
        if self.masses.is_empty() {
            return Err(HvtError::Config("grid needs at least one mass".to_string()));
        }
        if self.gvs.is_empty() {
            return Err(HvtError::Config("grid needs at least one gv".to_string()));
        }
        if let Some(m) = self.masses.iter().find(|m| !(m.is_finite() && **m > 0.0)) {
            return Err(HvtError::Config(format!("mass must be finite and > 0 (got {})", m)));
        }
        if let Some(gv) = self.gvs.iter().find(|g| !(g.is_finite() && **g != 0.0)) {
            return Err(HvtError::Config(format!("gv must be finite and non-zero (got {})", gv)));
        }
        for s in &self.gf_sweeps {
            s.validate("gf")?;
        }
        for s in &self.gh_sweeps {
            s.validate("gh")?;
        }
        Ok(())
    }
}

/// The resolved scan axes.
#[derive(Debug, Clone)]
pub struct Grid {
    spec: GridSpec,
}

impl Grid {
    pub fn new(spec: GridSpec) -> HvtResult<Self> {
        spec.validate()?;
        Ok(Self { spec })
    }

    pub fn benchmarks(&self) -> &[Benchmark] {
        &self.spec.benchmarks
    }

    pub fn masses(&self) -> Vec<f64> {
        sorted_unique(self.spec.masses.iter().copied())
    }

    pub fn gvs(&self) -> Vec<f64> {
        sorted_unique(self.spec.gvs.iter().copied())
    }

    pub fn gfs(&self) -> Vec<f64> {
        merge_axis(
            self.spec.benchmarks.iter().map(|b| b.gf),
            &self.spec.gf_sweeps,
        )
    }

    pub fn ghs(&self) -> Vec<f64> {
        merge_axis(
            self.spec.benchmarks.iter().map(|b| b.gh),
            &self.spec.gh_sweeps,
        )
    }

    /// Number of points per particle.
    pub fn size(&self) -> usize {
        self.masses().len() * self.gvs().len() * self.gfs().len() * self.ghs().len()
    }
}

fn merge_axis(fixed: impl Iterator<Item = f64>, sweeps: &[Sweep]) -> Vec<f64> {
    sorted_unique(
        fixed
            .chain(sweeps.iter().flat_map(|s| s.values()))
            .map(round_coupling),
    )
}

// Duplicate axis values would give two scan jobs the same cache file.
fn sorted_unique(values: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut values: Vec<f64> = values.collect();
    values.sort_by(f64::total_cmp);
    values.dedup();
    values
}
