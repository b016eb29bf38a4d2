//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use codesift::output::OutputMode;

/// codesift - Check code lists for malformed and duplicate entries
#[derive(Parser, Debug)]
#[command(
    name = "codesift",
    version,
    about = "Check code lists for malformed and duplicate entries",
    long_about = "Classify a list of 18-character codes, one per line.\n\n\
                  Invalid lines and duplicates are reported with their original line numbers,\n\
                  followed by the de-duplicated list of valid codes."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.codesift/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a code list from a file or stdin
    Check {
        /// File to read ("-" or omitted for stdin)
        file: Option<PathBuf>,

        /// Print a colored count summary to stderr
        #[arg(long)]
        stats: bool,
    },

    /// Serve the checker over HTTP
    #[cfg(feature = "http")]
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run the Telegram bot (long polling)
    #[cfg(feature = "telegram")]
    Bot,

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Check { file, stats }) => commands::check(file.as_deref(), stats, output_mode),
        #[cfg(feature = "http")]
        Some(Command::Serve { bind, port }) => commands::serve(config_path, bind, port),
        #[cfg(feature = "telegram")]
        Some(Command::Bot) => commands::bot(config_path),
        Some(Command::Config) => commands::show_config(config_path, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("codesift v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("codesift v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'codesift --help' for usage");
                println!("Run 'codesift check codes.txt' to check a list");
            }
            Ok(())
        },
    }
}
