use crate::reports;
use clap::Args;
use hvt_brs::config::RunConfig;
use hvt_brs::error::HvtResult;
use hvt_brs::grid::Grid;
use serde::Serialize;

#[derive(Args, Debug, Clone)]
pub struct GridArgs {
    /// Print every axis value as JSON instead of a summary.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Serialize)]
struct GridDump {
    masses: Vec<f64>,
    gvs: Vec<f64>,
    gfs: Vec<f64>,
    ghs: Vec<f64>,
}

pub fn run(args: GridArgs, config: RunConfig) -> HvtResult<()> {
    let grid = Grid::new(config.grid)?;

    if args.json {
        let dump = GridDump {
            masses: grid.masses(),
            gvs: grid.gvs(),
            gfs: grid.gfs(),
            ghs: grid.ghs(),
        };
        println!("{}", serde_json::to_string_pretty(&dump)?);
    } else {
        reports::grid_summary(&grid);
    }
    Ok(())
}
