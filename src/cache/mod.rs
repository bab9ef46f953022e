//! Flat-file BR cache.
//!
//! One CSV per (particle, mass, gv, gf) holds every gh row for that triple.
//! Files are rewritten wholesale; there is no locking, so callers must keep
//! at most one writer per file.

pub mod path;
pub mod reader;
pub mod writer;

pub use self::path::{resolve, PartialKey};
pub use self::reader::{load_table, select, KeyFilter};
pub use self::writer::store;

use crate::branching::BrRecord;
use crate::config::{CacheParams, CorruptPolicy};
use crate::error::{HvtError, HvtResult};
use crate::point::{ParameterPoint, Particle};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Rows for one particle, the unit that is written to and read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct BrTable {
    pub particle: Particle,
    pub rows: Vec<BrRecord>,
}

impl BrTable {
    pub fn new(particle: Particle) -> Self {
        Self {
            particle,
            rows: Vec::new(),
        }
    }

    pub fn with_rows(particle: Particle, rows: Vec<BrRecord>) -> Self {
        Self { particle, rows }
    }
}

/// Cache rooted at a directory, with a policy for unreadable files.
#[derive(Debug, Clone)]
pub struct BrCache {
    root: PathBuf,
    on_corrupt: CorruptPolicy,
}

impl BrCache {
    pub fn new<P: AsRef<Path>>(root: P, on_corrupt: CorruptPolicy) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            on_corrupt,
        }
    }

    pub fn from_params(params: &CacheParams) -> Self {
        Self::new(&params.cache_dir, params.on_corrupt)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &PartialKey) -> PathBuf {
        resolve(&self.root, key)
    }

    /// File that holds `point`'s row.
    pub fn file_for(&self, point: &ParameterPoint) -> PathBuf {
        self.path_for(&PartialKey::file_of(point))
    }

    /// Loads a cache file. `Ok(None)` when the file does not exist, or when it
    /// was corrupt and has been quarantined.
    pub fn load(&self, path: &Path, particle: Particle) -> HvtResult<Option<Vec<BrRecord>>> {
        if !path.exists() {
            return Ok(None);
        }

        match load_table(path, particle) {
            Ok(rows) => Ok(Some(rows)),
            Err(HvtError::CorruptCache { path, reason })
                if self.on_corrupt == CorruptPolicy::Quarantine =>
            {
                let mut moved = path.clone().into_os_string();
                moved.push(".corrupt");
                warn!(
                    "⚠️  Quarantining corrupt cache file {} ({}); it will be recomputed.",
                    path.display(),
                    reason
                );
                fs::rename(&path, &moved)?;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Cached rows for `point`, or `None` on a miss.
    pub fn lookup(&self, point: &ParameterPoint) -> HvtResult<Option<Vec<BrRecord>>> {
        let path = self.file_for(point);
        let rows = self.load(&path, point.particle)?;
        Ok(rows.and_then(|rows| select(&rows, point)))
    }

    pub fn store(&self, table: &BrTable, path: &Path) -> HvtResult<()> {
        store(table, path)
    }

    /// Adds `record` to the file that owns it, rewriting the whole file.
    pub fn insert(&self, record: BrRecord) -> HvtResult<PathBuf> {
        let point = record.point();
        let path = self.file_for(&point);
        let mut rows = self.load(&path, point.particle)?.unwrap_or_default();
        let filter = KeyFilter::new(&point);
        rows.retain(|r| !filter.matches(r));
        rows.push(record);
        store(&BrTable::with_rows(point.particle, rows), &path)?;
        Ok(path)
    }
}
