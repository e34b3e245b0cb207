use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lifebook")]
#[command(about = "A local-first personal journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to LIFEBOOK_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List story pages in the persisted sort order
    List {
        /// Only show pages whose name contains this term
        #[arg(long)]
        search: Option<String>,
    },

    /// Create a new story page
    Add {
        /// Page name (e.g. "my biggest dream")
        name: String,
    },

    /// Print a single page, including its content
    Show { id: String },

    /// Replace a page's content
    Edit {
        id: String,

        /// New content as an argument
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,

        /// Read new content from a file ("-" for stdin)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Rename a page (empty or unchanged names are ignored)
    Retitle { id: String, name: String },

    /// Expand or collapse a page
    Toggle { id: String },

    /// Adjust a page's content font size
    Font {
        #[command(subcommand)]
        command: FontCommand,
    },

    /// Delete a page (asks for confirmation on a terminal)
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Show or toggle the sort order preference
    Sort {
        #[command(subcommand)]
        command: SortCommand,
    },

    /// Show or edit the destiny record
    Destiny {
        #[command(subcommand)]
        command: DestinyCommand,
    },

    /// Delete all stories, preferences, and the destiny record
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum FontCommand {
    /// One step larger (up to the maximum)
    Grow { id: String },
    /// One step smaller (down to the minimum)
    Shrink { id: String },
}

#[derive(Subcommand)]
pub enum SortCommand {
    /// Flip between newest-first and oldest-first
    Toggle,
    /// Print the current order
    Show,
}

#[derive(Subcommand)]
pub enum DestinyCommand {
    /// Print the destiny record
    Show,
    /// Update the destiny record
    Set {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        subtitle: String,

        /// Image file to use as the background
        #[arg(long)]
        background: Option<PathBuf>,
    },
}
