mod commands;
mod reader;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::generate::GenerateArgs;
use reader::PathOverrides;

#[derive(Parser)]
#[command(
    name = "svg-data",
    version,
    about = "SVG custom data generator: build svg.json and attributeSets.json for editor tooling"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build, validate and enrich the catalog, then write the output files
    Generate {
        /// Config file (defaults to svg-data.config.yaml if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host-language custom data (browsers.html-data.json)
        #[arg(long)]
        html_data: Option<PathBuf>,

        /// Browser compat database (data.json)
        #[arg(long)]
        compat_data: Option<PathBuf>,

        /// web-features data (data.json)
        #[arg(long)]
        web_features: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Skip compat enrichment
        #[arg(long)]
        no_compat: bool,
    },

    /// Build the catalog and report diagnostics
    Validate {
        /// Host-language custom data (browsers.html-data.json)
        #[arg(long)]
        html_data: Option<PathBuf>,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Lint the catalog for coverage and quality issues
    Lint {
        /// Config file (defaults to svg-data.config.yaml if present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SVG_DATA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            html_data,
            compat_data,
            web_features,
            out_dir,
            no_compat,
        } => {
            let args = GenerateArgs {
                config,
                paths: PathOverrides {
                    html_data,
                    compat_data,
                    web_features,
                    out_dir,
                },
                no_compat,
            };
            match commands::generate::run_generate(args) {
                Ok(output) => {
                    println!("{output}");
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        Commands::Validate { html_data, format } => {
            match commands::validate::run_validate(html_data, &format) {
                Ok((output, error_count)) => {
                    println!("{output}");
                    if error_count > 0 {
                        process::exit(1);
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
        Commands::Lint { config, format } => {
            match commands::lint::run_lint(config.as_deref(), &format) {
                Ok(output) => {
                    println!("{output}");
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    process::exit(1);
                }
            }
        }
    }
}
