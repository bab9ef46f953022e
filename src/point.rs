use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The heavy vector being scanned. Renders as `Zprime` / `Wprime`, which is
/// also how it appears in cache paths.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum,
)]
pub enum Particle {
    Zprime,
    Wprime,
}

impl Particle {
    /// Raw decay channels in cache column order.
    pub fn channels(&self) -> &'static [Channel] {
        use Channel::*;
        match self {
            Self::Zprime => &[WW, HZ, Ee, MuMu, TauTau, NuNu, Uu, Dd, Cc, Ss, Bb, Tt],
            Self::Wprime => &[WH, WZ, ENu, MuNu, TauNu, Ud, Us, Cd, Cs, Tb],
        }
    }

    pub fn aggregates(&self) -> &'static [Aggregate] {
        use Aggregate::*;
        match self {
            Self::Zprime => &[Ll, Qq, Jets],
            Self::Wprime => &[LNu, QqBar, Jets],
        }
    }
}

/// Named partial-width channels. The strum name is the cache column header.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    // Zprime
    #[strum(serialize = "BRWW")]
    WW,
    #[strum(serialize = "BRhZ")]
    HZ,
    #[strum(serialize = "BRee")]
    Ee,
    #[strum(serialize = "BRmumu")]
    MuMu,
    #[strum(serialize = "BRtautau")]
    TauTau,
    #[strum(serialize = "BRnunu")]
    NuNu,
    #[strum(serialize = "BRuu")]
    Uu,
    #[strum(serialize = "BRdd")]
    Dd,
    #[strum(serialize = "BRcc")]
    Cc,
    #[strum(serialize = "BRss")]
    Ss,
    #[strum(serialize = "BRbb")]
    Bb,
    #[strum(serialize = "BRtt")]
    Tt,

    // Wprime
    #[strum(serialize = "BRWH")]
    WH,
    #[strum(serialize = "BRWZ")]
    WZ,
    #[strum(serialize = "BReve")]
    ENu,
    #[strum(serialize = "BRmvm")]
    MuNu,
    #[strum(serialize = "BRtauvt")]
    TauNu,
    #[strum(serialize = "BRud")]
    Ud,
    #[strum(serialize = "BRus")]
    Us,
    #[strum(serialize = "BRcd")]
    Cd,
    #[strum(serialize = "BRcs")]
    Cs,
    #[strum(serialize = "BRtb")]
    Tb,
}

/// Composite categories built as sums of raw channels.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Aggregate {
    #[strum(serialize = "BRll")]
    Ll,
    #[strum(serialize = "BRqq")]
    Qq,
    #[strum(serialize = "BRlnu")]
    LNu,
    #[strum(serialize = "BRqqbar")]
    QqBar,
    #[strum(serialize = "BRjets")]
    Jets,
}

/// One fully specified scan point. Equality is exact on every field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterPoint {
    pub particle: Particle,
    pub mass: f64,
    pub gv: f64,
    pub gf: f64,
    pub gh: f64,
}

impl ParameterPoint {
    pub fn new(particle: Particle, mass: f64, gv: f64, gf: f64, gh: f64) -> Self {
        Self {
            particle,
            mass,
            gv,
            gf,
            gh,
        }
    }

    /// Same point with gf/gh passed through [`round_coupling`], the form every
    /// cache key is built from.
    pub fn rounded(self) -> Self {
        Self {
            gf: round_coupling(self.gf),
            gh: round_coupling(self.gh),
            ..self
        }
    }
}

/// Rounds a coupling to 3 decimals and folds -0.0 into 0.0.
///
/// Both the grid and any ad-hoc lookup must go through this, otherwise keys
/// written to the cache and keys used to query it drift apart.
pub fn round_coupling(x: f64) -> f64 {
    // Rounds the exact binary value, so 1.0005 (stored just below) gives 1.0.
    format!("{:.3}", x).parse::<f64>().unwrap_or(x) + 0.0
}
