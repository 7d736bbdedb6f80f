//! festival: search, navigate and publish the festival project and shop catalog.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod output;

use commands::cart::CartAction;
use commands::swipe::SwipeArgs;
use commands::Context;

/// Festival catalog tools
#[derive(Parser)]
#[command(name = "festival")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to festival.toml in the working directory)
    #[arg(short, long, global = true, env = "FESTIVAL_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Print collected metrics to stderr before exiting
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank projects and shop items against a query
    Search {
        /// Search text (at least two characters)
        query: String,

        /// Maximum number of results (at least 1)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        limit: Option<u64>,
    },

    /// List the navigation stages
    Stages,

    /// Simulate a swipe on the stage track
    Swipe(SwipeArgs),

    /// Generate static pages, sitemap.xml and robots.txt
    BuildSite {
        /// Output directory (overrides `site.out_dir`)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Hide the progress bar
        #[arg(long)]
        no_progress: bool,
    },

    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },

    /// Show or toggle the light/dark theme preference
    Theme {
        /// Switch to the other theme
        #[arg(short, long)]
        toggle: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ctx = match Context::load(cli.config.as_deref(), cli.json) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            return exit_code(&e);
        }
    };

    let logging = &ctx.config.schema.telemetry;
    let telemetry = festival_telemetry::TelemetryConfig {
        log_level: if cli.verbose {
            "debug".to_string()
        } else {
            logging.log_level.clone()
        },
        json: logging.json,
        show_target: cli.verbose,
    };
    if let Err(e) = festival_telemetry::init_with_config(telemetry) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    let result = match cli.command {
        Commands::Search { query, limit } => commands::search::run(&ctx, &query, limit),
        Commands::Stages => commands::stages::run(&ctx),
        Commands::Swipe(args) => commands::swipe::run(&ctx, &args),
        Commands::BuildSite { out, no_progress } => commands::site::run(&ctx, out, !no_progress),
        Commands::Cart { action } => commands::cart::run(&ctx, action),
        Commands::Theme { toggle } => commands::cart::theme(&ctx, toggle),
        Commands::Config => commands::config::run(&ctx),
    };

    if cli.metrics {
        let metrics = festival_telemetry::metrics().export_json();
        eprintln!("{}", serde_json::to_string_pretty(&metrics).unwrap_or_default());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            exit_code(&e)
        }
    }
}

/// Configuration and catalog failures get their own exit codes
fn exit_code(err: &anyhow::Error) -> ExitCode {
    let code = err
        .downcast_ref::<festival_core::Error>()
        .map_or(1, |e| e.code.category().exit_code());
    ExitCode::from(code)
}
