use buddy::core::{
    config::BuddyConfig, error::Result, quotes::QuoteBook, session::Session, storage::Storage,
    ui::Ui,
};
use clap::Parser;
use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "buddy")]
#[command(about = "A chat-style task tracker for the terminal")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// File the task list is stored in
    #[arg(long, value_name = "PATH")]
    data_file: Option<PathBuf>,

    /// File `cheer` picks its quotes from
    #[arg(long, value_name = "PATH")]
    cheer_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = BuddyConfig::load()
        .unwrap_or_else(|e| {
            log::warn!("Ignoring config file: {e}");
            BuddyConfig::default()
        })
        .with_overrides(cli.data_file, cli.cheer_file);
    log::debug!("Using config: {config:?}");

    if !io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let stdin = io::stdin();
    let ui = Ui::new(stdin.lock(), io::stdout());
    let mut session = Session::start(
        ui,
        Storage::new(config.data_file),
        QuoteBook::new(config.cheer_file),
    )?;
    session.run()
}
