use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "jisho-fill", about = "Fill Anki notes from jisho.org")]
pub struct Cli {
    /// Config file
    #[arg(long, default_value = "config.json")]
    pub config: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create notes for a list of terms, one per line
    Batch {
        /// Destination deck name
        #[arg(long)]
        deck: String,

        /// Space separated tags for created notes
        #[arg(long)]
        tags: Option<String>,

        /// Read terms from a file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Run against an empty in-memory collection
        #[arg(long)]
        dry_run: bool,
    },
    /// Fill word, reading and meaning of an existing note
    Fill {
        #[arg(long)]
        note_id: i64,
    },
    /// List decks
    Decks,
}
