use crate::reports;
use clap::Args;
use hvt_brs::cache::BrCache;
use hvt_brs::error::HvtResult;
use hvt_brs::model::WidthModel;
use hvt_brs::point::{ParameterPoint, Particle};
use hvt_brs::scan::fetch;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    #[arg(short, long, value_enum)]
    pub particle: Particle,

    #[arg(short, long)]
    pub mass: f64,

    #[arg(long, default_value_t = 1.0)]
    pub gv: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub gf: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub gh: f64,

    /// Compute on a miss but leave the cache untouched.
    #[arg(long, default_value_t = false)]
    pub no_store: bool,
}

pub fn run<M: WidthModel>(args: ShowArgs, cache: &BrCache, model: &M) -> HvtResult<()> {
    // Same rounding as the grid, so ad-hoc lookups hit grid-written rows.
    let point = ParameterPoint::new(args.particle, args.mass, args.gv, args.gf, args.gh).rounded();

    match fetch(cache, model, &point, !args.no_store)? {
        Some((record, source)) => reports::point_detail(&record, source),
        None => {
            warn!("⚠️  Degenerate point (no open decay channel): {:?}", point);
            println!("No branching ratios for this point.");
        }
    }
    Ok(())
}
