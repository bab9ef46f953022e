use crate::point::{ParameterPoint, Particle};
use std::path::{Path, PathBuf};

/// Prefix of a [`ParameterPoint`] that selects one cache file.
///
/// Fields are consumed in the order mass, gv, gf, gh; the first `None` ends
/// the key and anything after it is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartialKey {
    pub particle: Particle,
    pub mass: Option<f64>,
    pub gv: Option<f64>,
    pub gf: Option<f64>,
    pub gh: Option<f64>,
}

impl PartialKey {
    pub fn new(particle: Particle) -> Self {
        Self {
            particle,
            mass: None,
            gv: None,
            gf: None,
            gh: None,
        }
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    pub fn gv(mut self, gv: f64) -> Self {
        self.gv = Some(gv);
        self
    }

    pub fn gf(mut self, gf: f64) -> Self {
        self.gf = Some(gf);
        self
    }

    pub fn gh(mut self, gh: f64) -> Self {
        self.gh = Some(gh);
        self
    }

    /// Key of the file holding every gh row for this point's (mass, gv, gf).
    pub fn file_of(point: &ParameterPoint) -> Self {
        Self::new(point.particle)
            .mass(point.mass)
            .gv(point.gv)
            .gf(point.gf)
    }

    /// Directory segment and file-name suffix for each specified level.
    ///
    /// The directory added at a level encodes the level *before* it, so the
    /// file for (mass, gv, gf) sits in `gv_<gv>/` next to its siblings.
    fn segments(&self) -> Vec<(String, String)> {
        let mut out = Vec::with_capacity(4);
        let Some(mass) = self.mass else { return out };
        out.push((self.particle.to_string(), format!("_M{}", mass)));
        let Some(gv) = self.gv else { return out };
        out.push((format!("mass_{}", mass), format!("_gv{}", gv)));
        let Some(gf) = self.gf else { return out };
        out.push((format!("gv_{}", gv), format!("_gf{:.3}", gf)));
        let Some(gh) = self.gh else { return out };
        out.push((format!("gf_{:.3}", gf), format!("_gh{:.3}", gh)));
        out
    }
}

impl From<&ParameterPoint> for PartialKey {
    fn from(point: &ParameterPoint) -> Self {
        Self::file_of(point).gh(point.gh)
    }
}

/// Maps a key to its cache file under `root`. Pure: no filesystem access.
pub fn resolve(root: &Path, key: &PartialKey) -> PathBuf {
    let mut path = root.to_path_buf();
    let mut file_name = format!("BRs_{}", key.particle);

    for (dir, suffix) in key.segments() {
        path.push(dir);
        file_name.push_str(&suffix);
    }

    file_name.push_str(".csv");
    path.push(file_name);
    path
}
