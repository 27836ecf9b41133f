#![forbid(unsafe_code)]

mod chooser;
mod constants;
mod error;
mod gui;
mod persistence;
mod session;
mod store;
mod theme;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level as TraceLevel, info};
use tracing_subscriber::FmtSubscriber;

use constants::logging::LEVEL_VAR;
use constants::storage::DEFAULT_FILENAME;
use persistence::DataFile;
use session::Session;

/// Keep named sets of options and draw one at random
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// JSON file holding the sets
    #[arg(long, short = 'f', value_name = "PATH", default_value = DEFAULT_FILENAME)]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open the window (default)
    Gui,
    /// Print set names in sorted order
    List,
    /// Print the options of a set
    Show { set: String },
    /// Print one option drawn at random from a set
    Choose { set: String },
}

fn init_logging() -> Result<()> {
    let log_level = match std::env::var(LEVEL_VAR)
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    };

    // Logs go to stderr so `list`/`show`/`choose` output stays pipeable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")
}

/// Open a session with `set` as the active set, or fail if it doesn't exist
fn session_for(file: DataFile, set: &str) -> Result<Session> {
    let mut session = Session::open(file)?;
    if !session.store().contains(set) {
        anyhow::bail!("no set named '{set}' in {:?}", session.file().path());
    }
    session.select(set);
    Ok(session)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let file = DataFile::new(cli.data_file);
    info!(path = ?file.path(), "Using data file");

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => gui::run_gui(Session::open(file)?),
        Command::List => {
            let session = Session::open(file)?;
            for name in session.store().set_names() {
                println!("{name}");
            }
            Ok(())
        }
        Command::Show { set } => {
            let session = session_for(file, &set)?;
            for option in session.selected_options() {
                println!("{option}");
            }
            Ok(())
        }
        Command::Choose { set } => {
            let session = session_for(file, &set)?;
            let picked = session.choose(&mut rand::rng())?;
            println!("{picked}");
            Ok(())
        }
    }
}
