//! Branching-ratio derivation.
//!
//! A [`BrRecord`] is one cache row: the scan point, the coupling readback, the
//! total width, every raw channel BR and the composite categories.

use crate::model::WidthModel;
use crate::point::{Aggregate, Channel, ParameterPoint, Particle};
use std::collections::BTreeMap;
use tracing::info;

/// Leading columns shared by both particles, in cache order.
pub const META_COLUMNS: [&str; 8] = ["M0", "g", "gv", "gh", "gf", "ch", "cl", "GammaTot"];

#[derive(Debug, Clone, PartialEq)]
pub struct BrRecord {
    pub particle: Particle,
    pub mass: f64,
    pub g: f64,
    pub gv: f64,
    pub gh: f64,
    pub gf: f64,
    pub ch: f64,
    // Stored under the `cl` header.
    pub cq: f64,
    pub gamma_tot: f64,

    pub channels: BTreeMap<Channel, f64>,
    pub aggregates: BTreeMap<Aggregate, f64>,
}

impl BrRecord {
    pub fn point(&self) -> ParameterPoint {
        ParameterPoint::new(self.particle, self.mass, self.gv, self.gf, self.gh)
    }

    pub fn br(&self, channel: Channel) -> Option<f64> {
        self.channels.get(&channel).copied()
    }

    pub fn aggregate(&self, aggregate: Aggregate) -> Option<f64> {
        self.aggregates.get(&aggregate).copied()
    }

    /// Full cache header for `particle`.
    pub fn header(particle: Particle) -> Vec<String> {
        META_COLUMNS
            .iter()
            .map(|c| c.to_string())
            .chain(particle.channels().iter().map(|c| c.to_string()))
            .chain(particle.aggregates().iter().map(|a| a.to_string()))
            .collect()
    }

    /// Row values aligned with [`BrRecord::header`].
    pub fn values(&self) -> Vec<f64> {
        let meta = [
            self.mass,
            self.g,
            self.gv,
            self.gh,
            self.gf,
            self.ch,
            self.cq,
            self.gamma_tot,
        ];
        let channels = self
            .particle
            .channels()
            .iter()
            .map(|c| self.br(*c).unwrap_or(f64::NAN));
        let aggregates = self
            .particle
            .aggregates()
            .iter()
            .map(|a| self.aggregate(*a).unwrap_or(f64::NAN));
        meta.into_iter().chain(channels).chain(aggregates).collect()
    }

    /// Looks a column up by its header name.
    pub fn value(&self, column: &str) -> Option<f64> {
        let header = Self::header(self.particle);
        let idx = header.iter().position(|h| h == column)?;
        self.values().get(idx).copied()
    }
}

/// Derives the BR record for one point, or `None` when the point is degenerate
/// (no fermion and no Higgs coupling, or a vanishing total width).
pub fn compute<M: WidthModel + ?Sized>(point: &ParameterPoint, model: &M) -> Option<BrRecord> {
    if point.gf == 0.0 && point.gh == 0.0 {
        return None;
    }

    info!(
        "Calculating BR for {} mass: {} gv: {} gf: {} gh: {}",
        point.particle, point.mass, point.gv, point.gf, point.gh
    );

    let output = model.evaluate(point.mass, point.gv, point.gf, point.gh);
    let decays = output.decays(point.particle);

    let tot = decays.total.re;
    if tot == 0.0 {
        return None;
    }

    let channels: BTreeMap<Channel, f64> = point
        .particle
        .channels()
        .iter()
        .map(|c| {
            let width = decays.partial(*c).map(|w| w.re).unwrap_or(0.0);
            (*c, width / tot)
        })
        .collect();

    let aggregates = derive_aggregates(point.particle, &channels);

    Some(BrRecord {
        particle: point.particle,
        mass: point.mass,
        g: output.g,
        gv: point.gv,
        gh: point.gh,
        gf: point.gf,
        ch: output.ch,
        cq: output.cq,
        gamma_tot: tot,
        channels,
        aggregates,
    })
}

/// Composite categories. Evaluation order is fixed so that, e.g., `BRjets`
/// is bit-identical to `BRqq + BRbb + BRtt`.
pub fn derive_aggregates(particle: Particle, br: &BTreeMap<Channel, f64>) -> BTreeMap<Aggregate, f64> {
    let get = |c: Channel| br.get(&c).copied().unwrap_or(0.0);
    let mut out = BTreeMap::new();

    match particle {
        Particle::Zprime => {
            let ll = get(Channel::Ee) + get(Channel::MuMu);
            let qq = get(Channel::Uu) + get(Channel::Dd) + get(Channel::Cc) + get(Channel::Ss);
            let jets = qq + get(Channel::Bb) + get(Channel::Tt);
            out.insert(Aggregate::Ll, ll);
            out.insert(Aggregate::Qq, qq);
            out.insert(Aggregate::Jets, jets);
        }
        Particle::Wprime => {
            let lnu = get(Channel::ENu) + get(Channel::MuNu);
            let qqbar = get(Channel::Ud) + get(Channel::Us) + get(Channel::Cd) + get(Channel::Cs);
            let jets = qqbar + get(Channel::Tb);
            out.insert(Aggregate::LNu, lnu);
            out.insert(Aggregate::QqBar, qqbar);
            out.insert(Aggregate::Jets, jets);
        }
    }

    out
}

/// Headline decay modes and their plot labels.
pub fn summary_columns(particle: Particle) -> &'static [(&'static str, &'static str)] {
    match particle {
        Particle::Zprime => &[
            ("GammaTot", "#Gamma"),
            ("BRhZ", "ZH"),
            ("BRWW", "WW"),
            ("BRll", "ll"),
            ("BRnunu", "#nu#nu"),
            ("BRjets", "qq"),
            ("BRtt", "tt"),
        ],
        Particle::Wprime => &[
            ("GammaTot", "#Gamma"),
            ("BRWH", "WH"),
            ("BRWZ", "WZ"),
            ("BRlnu", "l#nu"),
            ("BRjets", "qq"),
        ],
    }
}
