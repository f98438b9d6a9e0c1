mod app;
mod error;
mod logging;
mod server;

use clap::{Parser, Subcommand};
use exn::ResultExt;
use reel_extract::models::Section;
use serde::Serialize;
use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use crate::error::{ErrorKind, Result};

#[derive(Parser)]
#[command(name = "reel", version, about = "Catalog listings, search and player resolution with a local cache")]
struct Cli {
    /// Configuration file (TOML, YAML or JSON). Defaults to `reel.toml` if present.
    #[arg(short, long, global = true, env = "REEL_CONFIG")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API.
    Serve {
        /// Overrides `server.bind`.
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Print a home-page section as JSON.
    List {
        /// trending, latest-movies or latest-tv.
        #[arg(long, conflicts_with = "all")]
        section: Option<String>,
        /// Print every section.
        #[arg(long)]
        all: bool,
    },
    /// Print search results as JSON.
    Search { query: String },
    /// Resolve a reference path such as `/movie/avatar-19690` to a player, as JSON.
    Resolve { href: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:?}");
            ExitCode::FAILURE
        },
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = reel_config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    logging::init(&config.log.level);
    let catalog = app::catalog(&config).await?;
    match cli.command {
        Command::Serve { bind } => server::serve(Arc::new(catalog), bind.unwrap_or(config.server.bind)).await,
        Command::List { all: true, .. } => print_json(&catalog.list_all().await),
        Command::List { section, .. } => {
            let section = Section::from_query(section.as_deref());
            print_json(&catalog.list_category(section).await.or_raise(|| ErrorKind::Request)?)
        },
        Command::Search { query } => print_json(&catalog.search(&query).await.or_raise(|| ErrorKind::Request)?),
        Command::Resolve { href } => {
            print_json(&catalog.resolve_player(&href).await.or_raise(|| ErrorKind::Request)?)
        },
    }
}

fn print_json(value: &impl Serialize) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).or_raise(|| ErrorKind::Output)?;
    writeln!(stdout).or_raise(|| ErrorKind::Output)
}
