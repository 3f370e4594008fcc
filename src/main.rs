//! Command line runner for the life-like automaton engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use life_engine::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{
        create_example_grids, io::grid_to_json, io::grid_to_string, save_grid_to_file,
        save_grid_to_json_file,
    },
    Rule,
};
use log::{info, warn, LevelFilter};
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "life_engine")]
#[command(about = "Life-like cellular automaton engine")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve a grid for a number of generations
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid file (overrides config)
        #[arg(long)]
        grid: Option<PathBuf>,

        /// Number of generations (overrides config)
        #[arg(short, long, allow_negative_numbers = true)]
        generations: Option<i64>,

        /// Rule in B/S notation, e.g. B3/S23 (overrides config)
        #[arg(short, long)]
        rule: Option<Rule>,

        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Run { verbose: true, .. });
    SimpleLogger::new()
        .with_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .init()
        .context("Failed to initialize logger")?;

    match cli.command {
        Commands::Run {
            config, grid, generations, rule, format, output, ..
        } => {
            let overrides = CliOverrides {
                generations,
                rule,
                grid_file: grid,
                format,
                output_file: output,
            };
            run_command(config, overrides)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

fn run_command(config: PathBuf, overrides: CliOverrides) -> Result<()> {
    let mut settings = if config.exists() {
        Settings::from_file(&config)?
    } else {
        warn!("Config file {} not found, using defaults", config.display());
        Settings::default()
    };
    settings.merge_with_cli(&overrides);
    settings.validate()?;

    info!(
        "Running {} for {} generations",
        settings.simulation.rule, settings.simulation.generations
    );

    let start = Instant::now();
    let grid = life_engine::run_from_settings(&settings)?;
    info!(
        "Finished in {:.3}s with {} living cells",
        start.elapsed().as_secs_f64(),
        grid.living_count()
    );

    match (settings.output.output_file, settings.output.format) {
        (Some(path), OutputFormat::Text) => {
            save_grid_to_file(&grid, &path)?;
            info!("Saved result to {}", path.display());
        }
        (Some(path), OutputFormat::Json) => {
            save_grid_to_json_file(&grid, &path)?;
            info!("Saved result to {}", path.display());
        }
        (None, OutputFormat::Text) => print!("{}", grid_to_string(&grid)),
        (None, OutputFormat::Json) => println!(
            "{}",
            serde_json::to_string_pretty(&grid_to_json(&grid)).context("Failed to serialize grid")?
        ),
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    let config_path = directory.join("config").join("default.yaml");
    if config_path.exists() && !force {
        anyhow::bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let patterns_dir = directory.join("patterns");
    create_example_grids(&patterns_dir)?;

    let mut settings = Settings::default();
    settings.input.grid_file = patterns_dir.join("glider.txt");
    settings.to_file(&config_path)?;

    info!("Created {} and example patterns in {}", config_path.display(), patterns_dir.display());
    Ok(())
}
