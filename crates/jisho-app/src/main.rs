use clap::Parser;
use jisho_config::Config;

mod cli;
mod commands;
mod controller;
mod events;
mod logger;
mod state;


use self::cli::{Cli, Command};
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let config = Config::load(&cli.config)?;
    let state = AppState::new(config);

    match cli.command {
        Command::Batch {
            deck,
            tags,
            file,
            dry_run,
        } => commands::handle_batch(&state, &deck, tags, file.as_deref(), dry_run).await,
        Command::Fill { note_id } => commands::handle_fill(&state, note_id).await,
        Command::Decks => commands::handle_decks(&state).await,
    }
}
