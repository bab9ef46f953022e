use clap::{Parser, Subcommand};
use hvt_brs::cache::BrCache;
use hvt_brs::config::{CacheParams, RunConfig};
use hvt_brs::model::HvtModel;
use std::path::PathBuf;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with `grid` and `inputs` sections.
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    cache: CacheParams,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fill the cache over the configured grid.
    Scan(cmd::scan::ScanArgs),
    /// Look up (or compute) a single point.
    Show(cmd::show::ShowArgs),
    /// Print the scan axes.
    Grid(cmd::grid::GridArgs),
    /// Headline decay modes for every benchmark.
    Benchmarks(cmd::benchmarks::BenchmarksArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing HVT BR cache at {}", cli.cache.cache_dir.display());

    let config = RunConfig::load_or_default(cli.config.as_deref()).unwrap_or_else(|e| {
        error!("{}", e);
        process::exit(1);
    });
    if let Some(path) = &cli.config {
        info!("📂 Loaded config: {}", path.display());
    }

    let cache = BrCache::from_params(&cli.cache);
    let model = HvtModel::new(config.inputs.clone());

    let result = match cli.command {
        Commands::Scan(args) => cmd::scan::run(args, config, &cache, &model),
        Commands::Show(args) => cmd::show::run(args, &cache, &model),
        Commands::Grid(args) => cmd::grid::run(args, config),
        Commands::Benchmarks(args) => cmd::benchmarks::run(args, config, &cache, &model),
    };

    if let Err(e) = result {
        error!("❌ FATAL: {}", e);
        process::exit(1);
    }
}
