//! GifMake CLI — Inspect GIF timing and assemble fixed-rate animations.
//!
//! Usage:
//!   gifmake info <PATH>        Show per-frame delays and the assembled layout
//!   gifmake assemble <PATH>    Print the animation summary (text or JSON)
//!   gifmake asset <NAME>       Assemble a named GIF from the asset directory
//!   gifmake assets             List named GIFs in the asset directory
//!   gifmake config init        Write a default config file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gifmake_animation_core::AssemblyOptions;
use gifmake_common::config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "gifmake",
    about = "Turn GIF frame timing into fixed-rate animation sequences",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Minimum frame delay in seconds (overrides config)
    #[arg(long, global = true)]
    min_delay: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show frame delays, tick unit, and expansion for a GIF
    Info {
        /// Path to the GIF file
        path: PathBuf,
    },

    /// Assemble a GIF and print its animation summary
    Assemble {
        /// Path to the GIF file
        path: PathBuf,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Assemble a GIF from the asset directory by name
    Asset {
        /// Asset name, without the .gif extension
        name: String,

        /// Asset directory (defaults to the configured one)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List GIFs in the asset directory
    Assets {
        /// Asset directory (defaults to the configured one)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Print the config in effect
    Show,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load();

    // Initialize logging
    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    gifmake_common::logging::init_logging(&logging);

    let mut assembly = config.assembly.clone();
    if let Some(min_delay) = cli.min_delay {
        assembly.min_delay_secs = min_delay;
    }
    assembly.validate()?;
    let options = AssemblyOptions::from(&assembly);

    match cli.command {
        Commands::Info { path } => commands::info::run(path, &options),
        Commands::Assemble { path, json } => commands::assemble::run(path, json, &options),
        Commands::Asset { name, dir, json } => {
            let dir = dir.unwrap_or_else(|| config.assets_dir.clone());
            commands::asset::run(name, dir, json, &options)
        }
        Commands::Assets { dir } => {
            commands::asset::list(dir.unwrap_or_else(|| config.assets_dir.clone()))
        }
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::config::init(force),
            ConfigAction::Show => commands::config::show(&config),
        },
    }
}
