// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to the shared notes file (optional)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Directory holding inline-image assets (optional)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub image_dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, show, delete, or gc)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List notes with id, pin marker, and name or first body line
    List {
        /// Optional search term to filter notes by name or body content
        #[arg(value_name = "SEARCH")]
        search: Option<String>,
    },

    /// Show one note in the terminal
    Show {
        /// Note ID to show
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Output the raw record as JSON instead of rendering it
        #[arg(long)]
        json: bool,
    },

    /// Delete a note from the shared file
    Delete {
        /// Note ID to delete
        #[arg(value_name = "NOTE_ID")]
        note_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Delete image assets no note references anymore
    Gc,
}
