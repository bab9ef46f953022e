use crate::branching::BrRecord;
use crate::error::{HvtError, HvtResult};
use crate::point::{Aggregate, Channel, ParameterPoint, Particle};
use csv::StringRecord;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::path::Path;

/// Exact match on the four scan keys, evaluated at the cache's 32-bit storage
/// precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyFilter {
    pub mass: f32,
    pub gv: f32,
    pub gf: f32,
    pub gh: f32,
}

impl KeyFilter {
    pub fn new(point: &ParameterPoint) -> Self {
        Self {
            mass: point.mass as f32,
            gv: point.gv as f32,
            gf: point.gf as f32,
            gh: point.gh as f32,
        }
    }

    pub fn matches(&self, row: &BrRecord) -> bool {
        row.mass as f32 == self.mass
            && row.gv as f32 == self.gv
            && row.gf as f32 == self.gf
            && row.gh as f32 == self.gh
    }
}

/// Rows of `rows` that belong to `point`. `None` when nothing matches.
pub fn select(rows: &[BrRecord], point: &ParameterPoint) -> Option<Vec<BrRecord>> {
    let filter = KeyFilter::new(point);
    let hits: Vec<BrRecord> = rows
        .iter()
        .filter(|r| r.particle == point.particle && filter.matches(r))
        .cloned()
        .collect();

    if hits.is_empty() {
        None
    } else {
        Some(hits)
    }
}

/// Loads every row of a cache file. Any parse or schema problem is reported as
/// [`HvtError::CorruptCache`].
pub fn load_table(path: &Path, particle: Particle) -> HvtResult<Vec<BrRecord>> {
    let corrupt = |reason: String| HvtError::CorruptCache {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(file);

    let headers = rdr
        .headers()
        .map_err(|e| corrupt(format!("unreadable header: {}", e)))?
        .clone();
    let header_map = build_header_map(&headers);

    if let Some(missing) = BrRecord::header(particle)
        .into_iter()
        .find(|col| !header_map.contains_key(col))
    {
        return Err(corrupt(format!(
            "missing column `{}` for {}",
            missing, particle
        )));
    }

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        // header is line 1
        let line = idx + 2;
        let rec = result.map_err(|e| corrupt(format!("line {}: {}", line, e)))?;
        let row = parse_row(&rec, &header_map, particle)
            .map_err(|e| corrupt(format!("line {}: {}", line, e)))?;
        rows.push(row);
    }

    Ok(rows)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.trim_start_matches('\u{feff}').to_string(), idx))
        .collect()
}

fn parse_row(
    rec: &StringRecord,
    header_map: &HashMap<String, usize>,
    particle: Particle,
) -> Result<BrRecord, String> {
    let cell = |name: &str| -> Result<f64, String> {
        let idx = header_map
            .get(name)
            .ok_or_else(|| format!("missing column `{}`", name))?;
        let raw = rec
            .get(*idx)
            .ok_or_else(|| format!("missing value for `{}`", name))?;
        // Cells are written as f32; parse them as such so keys compare exactly.
        raw.parse::<f32>()
            .map(f64::from)
            .map_err(|_| format!("invalid number '{}' in `{}`", raw, name))
    };

    let channels = particle
        .channels()
        .iter()
        .map(|c| Ok((*c, cell(&c.to_string())?)))
        .collect::<Result<BTreeMap<Channel, f64>, String>>()?;

    let aggregates = particle
        .aggregates()
        .iter()
        .map(|a| Ok((*a, cell(&a.to_string())?)))
        .collect::<Result<BTreeMap<Aggregate, f64>, String>>()?;

    Ok(BrRecord {
        particle,
        mass: cell("M0")?,
        g: cell("g")?,
        gv: cell("gv")?,
        gh: cell("gh")?,
        gf: cell("gf")?,
        ch: cell("ch")?,
        cq: cell("cl")?,
        gamma_tot: cell("GammaTot")?,
        channels,
        aggregates,
    })
}
