use crate::reports;
use clap::Args;
use hvt_brs::cache::BrCache;
use hvt_brs::config::RunConfig;
use hvt_brs::error::HvtResult;
use hvt_brs::grid::Grid;
use hvt_brs::model::WidthModel;
use hvt_brs::point::{ParameterPoint, Particle};
use hvt_brs::scan::fetch;
use strum::IntoEnumIterator;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct BenchmarksArgs {
    /// Overrides the configured mass list.
    #[arg(long, value_delimiter = ',')]
    pub masses: Option<Vec<f64>>,

    #[arg(long, default_value_t = false)]
    pub no_store: bool,
}

pub fn run<M: WidthModel>(
    args: BenchmarksArgs,
    config: RunConfig,
    cache: &BrCache,
    model: &M,
) -> HvtResult<()> {
    let mut spec = config.grid;
    if let Some(masses) = args.masses {
        spec.masses = masses;
    }
    let grid = Grid::new(spec)?;

    for particle in Particle::iter() {
        let mut rows = Vec::new();
        for bench in grid.benchmarks() {
            for mass in grid.masses() {
                let point =
                    ParameterPoint::new(particle, mass, bench.gv, bench.gf, bench.gh).rounded();
                match fetch(cache, model, &point, !args.no_store)? {
                    Some((record, _)) => rows.push((bench.name.clone(), record)),
                    None => warn!("⚠️  {} at M0={} has no open channel", bench.name, mass),
                }
            }
        }
        reports::benchmark_table(particle, &rows);
    }
    Ok(())
}
