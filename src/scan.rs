//! Grid scan: for every cache file in the grid, reuse cached rows, compute the
//! missing ones and rewrite the file when something was added.

use crate::branching::{compute, BrRecord};
use crate::cache::{select, BrCache, BrTable, PartialKey};
use crate::error::HvtResult;
use crate::grid::Grid;
use crate::model::WidthModel;
use crate::point::{ParameterPoint, Particle};
use rayon::prelude::*;
use std::ops::AddAssign;
use strum_macros::Display;
use tracing::{debug, info};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    pub cached: usize,
    pub computed: usize,
    pub skipped: usize,
    pub files_written: usize,
}

impl AddAssign for ScanStats {
    fn add_assign(&mut self, rhs: Self) {
        self.cached += rhs.cached;
        self.computed += rhs.computed;
        self.skipped += rhs.skipped;
        self.files_written += rhs.files_written;
    }
}

#[derive(Debug, Clone)]
pub struct ScanReport {
    pub table: BrTable,
    pub stats: ScanStats,
}

pub struct Scanner<'a, M: WidthModel + Sync> {
    cache: &'a BrCache,
    model: &'a M,
    parallel: bool,
}

impl<'a, M: WidthModel + Sync> Scanner<'a, M> {
    pub fn new(cache: &'a BrCache, model: &'a M) -> Self {
        Self {
            cache,
            model,
            parallel: false,
        }
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Scans the whole grid for one particle. Rows come back in grid order.
    pub fn run(&self, particle: Particle, grid: &Grid) -> HvtResult<ScanReport> {
        let ghs = grid.ghs();
        let files: Vec<PartialKey> = grid
            .masses()
            .into_iter()
            .flat_map(|m| grid.gvs().into_iter().map(move |gv| (m, gv)))
            .flat_map(|(m, gv)| {
                grid.gfs()
                    .into_iter()
                    .map(move |gf| PartialKey::new(particle).mass(m).gv(gv).gf(gf))
            })
            .collect();

        info!(
            "🔭 Scanning {}: {} cache files x {} gh values",
            particle,
            files.len(),
            ghs.len()
        );

        let results: Vec<HvtResult<(Vec<BrRecord>, ScanStats)>> = if self.parallel {
            files.par_iter().map(|key| self.scan_file(key, &ghs)).collect()
        } else {
            files.iter().map(|key| self.scan_file(key, &ghs)).collect()
        };

        let mut table = BrTable::new(particle);
        let mut stats = ScanStats::default();
        for result in results {
            let (rows, file_stats) = result?;
            table.rows.extend(rows);
            stats += file_stats;
        }

        info!(
            "✅ {} done: {} cached, {} computed, {} skipped, {} files written",
            particle, stats.cached, stats.computed, stats.skipped, stats.files_written
        );

        Ok(ScanReport { table, stats })
    }

    /// Handles one (mass, gv, gf) file. Only this call touches that file.
    pub fn scan_file(&self, key: &PartialKey, ghs: &[f64]) -> HvtResult<(Vec<BrRecord>, ScanStats)> {
        let path = self.cache.path_for(key);
        let mut existing = self.cache.load(&path, key.particle)?.unwrap_or_default();
        let mut stats = ScanStats::default();
        let mut rows = Vec::with_capacity(ghs.len());
        let mut added = false;

        let (mass, gv, gf) = (
            key.mass.unwrap_or_default(),
            key.gv.unwrap_or_default(),
            key.gf.unwrap_or_default(),
        );

        for &gh in ghs {
            let point = ParameterPoint::new(key.particle, mass, gv, gf, gh);
            if let Some(hits) = select(&existing, &point) {
                stats.cached += 1;
                rows.extend(hits);
                continue;
            }

            match compute(&point, self.model) {
                Some(record) => {
                    stats.computed += 1;
                    existing.push(record.clone());
                    rows.push(record);
                    added = true;
                }
                None => {
                    debug!("Skipping degenerate point {:?}", point);
                    stats.skipped += 1;
                }
            }
        }

        if added {
            self.cache
                .store(&BrTable::with_rows(key.particle, existing), &path)?;
            stats.files_written += 1;
        }

        Ok((rows, stats))
    }
}

/// Where a fetched record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Source {
    #[strum(serialize = "cache")]
    Cache,
    #[strum(serialize = "computed")]
    Computed,
}

/// Single-point read-through: cache hit, or compute (and optionally persist).
/// `Ok(None)` for degenerate points.
pub fn fetch<M: WidthModel + ?Sized>(
    cache: &BrCache,
    model: &M,
    point: &ParameterPoint,
    persist: bool,
) -> HvtResult<Option<(BrRecord, Source)>> {
    if let Some(mut rows) = cache.lookup(point)? {
        return Ok(Some((rows.swap_remove(0), Source::Cache)));
    }

    let Some(record) = compute(point, model) else {
        return Ok(None);
    };
    if persist {
        cache.insert(record.clone())?;
    }
    Ok(Some((record, Source::Computed)))
}
