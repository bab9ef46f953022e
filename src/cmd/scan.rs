use crate::reports;
use clap::Args;
use hvt_brs::cache::{resolve, BrCache, PartialKey};
use hvt_brs::config::{RunConfig, ScanParams};
use hvt_brs::error::HvtResult;
use hvt_brs::grid::Grid;
use hvt_brs::model::WidthModel;
use hvt_brs::scan::Scanner;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    #[command(flatten)]
    pub params: ScanParams,

    /// Also write the aggregated table per particle to `<dir>/BRs_<particle>.csv`.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,
}

pub fn run<M: WidthModel + Sync>(
    args: ScanArgs,
    config: RunConfig,
    cache: &BrCache,
    model: &M,
) -> HvtResult<()> {
    let mut spec = config.grid;
    args.params.merge_into(&mut spec);
    let grid = Grid::new(spec)?;

    let start = Instant::now();
    let scanner = Scanner::new(cache, model).parallel(args.params.parallel);
    let mut summary = Vec::new();

    for particle in args.params.particles() {
        let report = scanner.run(particle, &grid)?;

        if let Some(dir) = &args.output_dir {
            let path = resolve(dir, &PartialKey::new(particle));
            cache.store(&report.table, &path)?;
        }

        summary.push((particle, report.stats, report.table.rows.len()));
    }

    info!("⏱️  Scan finished in {:.2?}", start.elapsed());
    reports::scan_summary(&summary);
    Ok(())
}
