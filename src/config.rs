use crate::error::{HvtError, HvtResult};
use crate::grid::GridSpec;
use crate::model::ElectroweakInputs;
use crate::point::Particle;
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// What to do with a cache file that exists but cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum CorruptPolicy {
    /// Abort with an error naming the file.
    #[default]
    Fail,
    /// Rename it to `<name>.corrupt` and recompute.
    Quarantine,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
pub struct CacheParams {
    #[arg(global = true, long, default_value = "BRs")]
    pub cache_dir: PathBuf,

    #[arg(global = true, long, value_enum, default_value_t = CorruptPolicy::Fail)]
    pub on_corrupt: CorruptPolicy,
}

impl Default for CacheParams {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("BRs"),
            on_corrupt: CorruptPolicy::Fail,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ScanParams {
    /// Particles to scan (both when omitted).
    #[arg(long = "particle", value_enum)]
    pub particles: Vec<Particle>,

    /// Overrides the configured mass list.
    #[arg(long, value_delimiter = ',')]
    pub masses: Option<Vec<f64>>,

    /// Overrides the configured gv list.
    #[arg(long, value_delimiter = ',')]
    pub gvs: Option<Vec<f64>>,

    /// One rayon task per cache file.
    #[arg(long, default_value_t = false)]
    pub parallel: bool,
}

impl ScanParams {
    pub fn particles(&self) -> Vec<Particle> {
        if self.particles.is_empty() {
            vec![Particle::Zprime, Particle::Wprime]
        } else {
            self.particles.clone()
        }
    }

    /// Applies command-line list overrides on top of the file grid.
    pub fn merge_into(&self, grid: &mut GridSpec) {
        if let Some(masses) = &self.masses {
            grid.masses = masses.clone();
        }
        if let Some(gvs) = &self.gvs {
            grid.gvs = gvs.clone();
        }
    }
}

/// File-level configuration: the grid and the model inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub grid: GridSpec,
    pub inputs: ElectroweakInputs,
}

impl RunConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> HvtResult<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            HvtError::Config(format!(
                "Failed to read config file '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let config: Self = serde_json::from_str(&content)?;
        config.grid.validate()?;
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> HvtResult<Self> {
        match path {
            Some(p) => Self::load_from_file(p),
            None => Ok(Self::default()),
        }
    }
}
