pub mod hvt;
pub mod kinematics;

pub use self::hvt::{ElectroweakInputs, HvtModel};

use crate::point::{Channel, Particle};
use num_complex::Complex64;

/// Partial widths for one particle, as the model reports them.
#[derive(Debug, Clone, PartialEq)]
pub struct DecayTable {
    pub partials: Vec<(Channel, Complex64)>,
    pub total: Complex64,
}

impl DecayTable {
    /// Builds a table whose total is the sum of the listed partials.
    pub fn from_partials(partials: Vec<(Channel, Complex64)>) -> Self {
        let total = partials.iter().map(|(_, w)| *w).sum();
        Self { partials, total }
    }

    pub fn partial(&self, channel: Channel) -> Option<Complex64> {
        self.partials
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, w)| *w)
    }
}

/// Everything the branching-ratio calculator reads from a configured model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutput {
    // Coupling readback
    pub g: f64,
    pub ch: f64,
    pub cq: f64,

    pub zprime: DecayTable,
    pub wprime: DecayTable,
}

impl ModelOutput {
    pub fn decays(&self, particle: Particle) -> &DecayTable {
        match particle {
            Particle::Zprime => &self.zprime,
            Particle::Wprime => &self.wprime,
        }
    }
}

/// A physics model that turns `(mass, gv, gf, gh)` into decay widths.
///
/// `evaluate` is the setup step: the returned output is fully configured and
/// nothing is observable before it runs.
pub trait WidthModel {
    fn evaluate(&self, mass: f64, gv: f64, gf: f64, gh: f64) -> ModelOutput;
}
