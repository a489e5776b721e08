use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

use commands::{InspectType, init_command, inspect_command, render_command, validate_command};

#[derive(Parser)]
#[command(
    name = "cantonmap",
    about = "Renders choropleth maps of Swiss cantons from tabular data",
    version,
    author,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the map configuration file (default: map.yml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a starter map.yml into the current directory
    Init,

    /// Validate the map configuration and, if given, a dataset
    Validate {
        /// Path to a dataset CSV to check against the configuration
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Render a choropleth map from a dataset
    Render {
        /// Path to the dataset CSV
        #[arg(short, long)]
        data: PathBuf,

        /// Output name; the map is written to <output>.html
        #[arg(short, long)]
        output: Option<String>,

        /// Name of the value column to plot
        #[arg(long)]
        column: Option<String>,

        /// Color palette for the fill bands
        #[arg(long)]
        palette: Option<String>,
    },

    /// Inspect the resolved configuration or the merged table
    Inspect {
        #[arg(value_enum)]
        object_type: InspectType,

        /// Path to the dataset CSV (required for the merged table)
        #[arg(short, long)]
        data: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbose flag
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Init => init_command(),
        Commands::Validate { data } => validate_command(config, data.as_deref()),
        Commands::Render {
            data,
            output,
            column,
            palette,
        } => render_command(config, &data, output, column, palette),
        Commands::Inspect { object_type, data } => {
            inspect_command(config, object_type, data.as_deref())
        }
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbose {
        0 => EnvFilter::new("cantonmap=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("cantonmap=info"), // -v: info messages
        _ => EnvFilter::new("cantonmap=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
