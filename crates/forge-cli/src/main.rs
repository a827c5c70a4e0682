use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use tracing_subscriber::EnvFilter;

use forge_cli::commands::{self, ConfigUpdate, PromptInput};
use forge_cli::config;
use forge_core::DocumentKind;
use forge_core::prompts::PitchOptions;
use forge_export::styles::PageGeometry;

#[derive(Parser)]
#[command(name = "forge")]
#[command(about = "Game Concept Forge: pitch deck rendering and document tooling")]
#[command(version)]
struct Cli {
    /// Config file to use instead of the per-user one
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a pitch deck JSON file to PDF
    Render {
        deck: PathBuf,
        /// Output file; defaults to pitch_deck_<title>.pdf
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// print (A4) or widescreen (16:9)
        #[arg(short, long)]
        geometry: Option<PageGeometry>,
    },
    /// Print the Markdown panel for a generated document
    Markdown { kind: DocumentKind, document: PathBuf },
    /// Print the JSON response schema for a document kind
    Schema { kind: DocumentKind },
    /// Print the generation request for a document kind
    Prompt {
        kind: DocumentKind,
        /// Free-text idea (concept requests)
        #[arg(long)]
        idea: Option<String>,
        /// Concept JSON the document is derived from
        #[arg(long)]
        concept: Option<PathBuf>,
        #[arg(long)]
        audience: Option<String>,
        #[arg(long)]
        duration: Option<String>,
        #[arg(long)]
        focus: Option<String>,
        #[arg(long)]
        detail: Option<String>,
        #[arg(long)]
        model: Option<String>,
    },
    /// Show or update the configuration
    Config {
        #[arg(long)]
        geometry: Option<PageGeometry>,
        #[arg(long)]
        output_dir: Option<PathBuf>,
        #[arg(long)]
        log_level: Option<String>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };
    let config = config::load_config_from(&config_path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    match cli.command {
        Commands::Render {
            deck,
            output,
            geometry,
        } => {
            let path = commands::render(&deck, output.as_deref(), geometry, &config)?;
            println!("{}", path.display());
        }
        Commands::Markdown { kind, document } => {
            println!("{}", commands::markdown(kind, &document)?);
        }
        Commands::Schema { kind } => {
            println!("{}", commands::schema(kind)?);
        }
        Commands::Prompt {
            kind,
            idea,
            concept,
            audience,
            duration,
            focus,
            detail,
            model,
        } => {
            let defaults = PitchOptions::default();
            let input = PromptInput {
                idea,
                concept,
                pitch: PitchOptions {
                    audience: audience.unwrap_or(defaults.audience),
                    duration: duration.unwrap_or(defaults.duration),
                    focus: focus.unwrap_or(defaults.focus),
                    detail_level: detail.unwrap_or(defaults.detail_level),
                },
                model,
            };
            println!("{}", commands::prompt(kind, &input)?);
        }
        Commands::Config {
            geometry,
            output_dir,
            log_level,
        } => {
            let update = ConfigUpdate {
                geometry,
                output_dir,
                log_level,
            };
            println!("{}", commands::configure(&config_path, update)?);
        }
    }

    Ok(())
}
