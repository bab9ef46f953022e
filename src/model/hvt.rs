use super::kinematics::{boson_width, fermion_width, mass_ratio};
use super::{DecayTable, ModelOutput, WidthModel};
use crate::point::Channel;
use serde::{Deserialize, Serialize};

/// Standard Model inputs for the HVT width formulas. Masses in GeV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectroweakInputs {
    pub m_w: f64,
    pub m_z: f64,
    pub m_h: f64,
    pub m_top: f64,
    pub m_bottom: f64,
    pub m_charm: f64,
    pub m_tau: f64,
    pub g_fermi: f64,

    // |CKM| entries for the Wprime quark channels
    pub v_ud: f64,
    pub v_us: f64,
    pub v_cd: f64,
    pub v_cs: f64,
    pub v_tb: f64,
}

impl Default for ElectroweakInputs {
    fn default() -> Self {
        Self {
            m_w: 80.379,
            m_z: 91.1876,
            m_h: 125.1,
            m_top: 172.76,
            m_bottom: 4.18,
            m_charm: 1.27,
            m_tau: 1.777,
            g_fermi: 1.1663787e-5,
            v_ud: 0.97373,
            v_us: 0.2243,
            v_cd: 0.221,
            v_cs: 0.975,
            v_tb: 1.0,
        }
    }
}

impl ElectroweakInputs {
    /// SU(2)_L gauge coupling in the G_F scheme.
    pub fn g_su2(&self) -> f64 {
        2.0 * self.m_w * (std::f64::consts::SQRT_2 * self.g_fermi).sqrt()
    }
}

/// Simplified HVT model: a heavy SU(2)_L triplet coupled to the Higgs current
/// with strength `gh = gv * ch` and to left-handed fermions with
/// `gf = g^2 * cq / gv`.
#[derive(Debug, Clone, Default)]
pub struct HvtModel {
    pub inputs: ElectroweakInputs,
}

impl HvtModel {
    pub fn new(inputs: ElectroweakInputs) -> Self {
        Self { inputs }
    }

    fn zprime(&self, mass: f64, gf: f64, gh: f64) -> DecayTable {
        let p = &self.inputs;
        let r = |m: f64| mass_ratio(m, mass);
        let g_left = gf / 2.0;
        let lepton = |m: f64| fermion_width(mass, g_left, 1.0, r(m), r(m));
        let quark = |m: f64| fermion_width(mass, g_left, 3.0, r(m), r(m));

        DecayTable::from_partials(vec![
            (Channel::WW, boson_width(mass, gh, r(p.m_w), r(p.m_w))),
            (Channel::HZ, boson_width(mass, gh, r(p.m_h), r(p.m_z))),
            (Channel::Ee, lepton(0.0)),
            (Channel::MuMu, lepton(0.0)),
            (Channel::TauTau, lepton(p.m_tau)),
            (Channel::NuNu, lepton(0.0) * 3.0),
            (Channel::Uu, quark(0.0)),
            (Channel::Dd, quark(0.0)),
            (Channel::Cc, quark(p.m_charm)),
            (Channel::Ss, quark(0.0)),
            (Channel::Bb, quark(p.m_bottom)),
            (Channel::Tt, quark(p.m_top)),
        ])
    }

    fn wprime(&self, mass: f64, gf: f64, gh: f64) -> DecayTable {
        let p = &self.inputs;
        let r = |m: f64| mass_ratio(m, mass);
        let g_left = gf / std::f64::consts::SQRT_2;
        let lepton = |m: f64| fermion_width(mass, g_left, 1.0, r(m), 0.0);
        let quark = |v: f64, m1: f64, m2: f64| fermion_width(mass, g_left * v, 3.0, r(m1), r(m2));

        DecayTable::from_partials(vec![
            (Channel::WH, boson_width(mass, gh, r(p.m_w), r(p.m_h))),
            (Channel::WZ, boson_width(mass, gh, r(p.m_w), r(p.m_z))),
            (Channel::ENu, lepton(0.0)),
            (Channel::MuNu, lepton(0.0)),
            (Channel::TauNu, lepton(p.m_tau)),
            (Channel::Ud, quark(p.v_ud, 0.0, 0.0)),
            (Channel::Us, quark(p.v_us, 0.0, 0.0)),
            (Channel::Cd, quark(p.v_cd, p.m_charm, 0.0)),
            (Channel::Cs, quark(p.v_cs, p.m_charm, 0.0)),
            (Channel::Tb, quark(p.v_tb, p.m_top, p.m_bottom)),
        ])
    }
}

impl WidthModel for HvtModel {
    fn evaluate(&self, mass: f64, gv: f64, gf: f64, gh: f64) -> ModelOutput {
        let g = self.inputs.g_su2();
        ModelOutput {
            g,
            ch: gh / gv,
            cq: gf * gv / (g * g),
            zprime: self.zprime(mass, gf, gh),
            wprime: self.wprime(mass, gf, gh),
        }
    }
}
