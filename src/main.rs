use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use log::{error, info};

use relief_datagen::domain::generator::config::{DEFAULT_EDGE_DENSITY, DEFAULT_GRID_SIZE, DEFAULT_SEED, GeneratorConfig};
use relief_datagen::domain::statistics::DatasetStatistics;
use relief_datagen::error::Result;
use relief_datagen::loader::parser::{load_batch_config, load_scenario};
use relief_datagen::{generate_dataset, logger};

/// Synthesizes disaster relief scenarios (depot, affected locations, road
/// network, rescue fleet) as JSON input for a routing solver.
///
/// Without a subcommand the small, medium and large preset datasets are written
/// to the current directory.
#[derive(Debug, Parser)]
#[command(name = "relief-datagen", version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a single dataset.
    Generate(GenerateArgs),
    /// Generate every dataset listed in a JSON batch file.
    Batch {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Validate an existing dataset and print its statistics.
    Stats { file: PathBuf },
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Number of disaster locations, excluding the depot.
    #[arg(short, long, default_value_t = 20)]
    nodes: usize,
    #[arg(short = 'k', long, default_value_t = 3)]
    vehicles: usize,
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    grid_size: f64,
    #[arg(long, default_value_t = DEFAULT_EDGE_DENSITY)]
    edge_density: f64,
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,
    #[arg(short, long, default_value = "realistic_input.json")]
    output: PathBuf,
}

impl From<GenerateArgs> for GeneratorConfig {
    fn from(args: GenerateArgs) -> Self {
        GeneratorConfig::new(args.nodes, args.vehicles, args.output)
            .with_grid_size(args.grid_size)
            .with_edge_density(args.edge_density)
            .with_seed(args.seed)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Option<Command>) -> Result<()> {
    match command {
        None => generate_all(GeneratorConfig::presets()),
        Some(Command::Generate(args)) => generate_all(vec![args.into()]),
        Some(Command::Batch { config }) => {
            info!("Loading batch configuration from '{}'...", config.display());
            generate_all(load_batch_config(&config)?)
        }
        Some(Command::Stats { file }) => {
            let scenario = load_scenario(&file)?;
            info!("Dataset '{}' is valid.", file.display());
            println!("{}", DatasetStatistics::from_scenario(&scenario));
            Ok(())
        }
    }
}

fn generate_all(configs: Vec<GeneratorConfig>) -> Result<()> {
    let total = configs.len();

    for (index, config) in configs.iter().enumerate() {
        info!("[{}/{}] Generating '{}' ({} locations, {} vehicles)...", index + 1, total, config.output_file.display(), config.num_nodes, config.num_vehicles);
        let statistics = generate_dataset(config)?;
        println!("{}", statistics);
    }

    info!("All {} datasets generated successfully.", total);
    for config in &configs {
        info!("  - {} ({} locations, {} vehicles)", config.output_file.display(), config.num_nodes, config.num_vehicles);
    }
    Ok(())
}
