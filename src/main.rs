mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};

use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::cmd::render::{self, RenderCommandArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::resource_dir::ResourceDirectory;
use crate::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "lastseen",
    author,
    version,
    about = "Turn GitHub activity into \"last seen\" status lines"
)]
struct Cli {
    /// Log debug diagnostics to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a status line for each event in the saved activity feed.
    Render(RenderArgs),
    /// Print the canonical verb found in a commit message.
    Verb(VerbArgs),
    /// Inspect configuration.
    Config(ConfigArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Only print the newest status line.
    #[arg(short, long)]
    latest: bool,
    /// Events JSON file (defaults to the configured events file).
    #[arg(short, long)]
    events: Option<PathBuf>,
    /// Directory of saved API responses.
    #[arg(short, long)]
    resource_dir: Option<PathBuf>,
    /// Render fallback verbs as "updating" rather than "update".
    #[arg(long)]
    participles: bool,
}

#[derive(Args)]
struct VerbArgs {
    /// Commit message words.
    #[arg(required = true, num_args = 1..)]
    message: Vec<String>,
}

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.level("lastseen=debug");
    }
    logging.init()?;

    match cli.command {
        Commands::Render(args) => run_render(args).await,
        Commands::Verb(args) => {
            println!("{}", cmd::verb::run(&args.message));
            Ok(())
        }
        Commands::Config(args) => {
            let config = AppConfig::load(&std::env::current_dir()?)?;
            config_cmd::run(args.command, &config);
            Ok(())
        }
    }
}

async fn run_render(args: RenderArgs) -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let mut config = AppConfig::load(&cwd)?;

    if let Some(dir) = args.resource_dir {
        config.resource_dir = cwd.join(dir);
    }
    if let Some(events) = args.events {
        config.events_file = cwd.join(events);
    }
    if args.participles {
        config.participles = true;
    }

    let resources = Arc::new(ResourceDirectory::new(
        config.resource_dir.clone(),
        config.events_path(),
    ));
    let context = AppContext::new(config, resources.clone(), resources)?;

    let lines = render::run(&context, RenderCommandArgs { latest: args.latest }).await?;
    if lines.is_empty() {
        eprintln!("No activity to describe.");
    }
    for line in lines {
        println!("{line}");
    }

    Ok(())
}
