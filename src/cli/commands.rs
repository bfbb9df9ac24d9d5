//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodlog")]
#[command(about = "Personal mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new mood journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Display locale for dates (e.g., tr_TR, en_US)
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Add a journal entry
    Add {
        /// Free-text content of the entry
        content: Option<String>,

        /// Comma-separated mood ids (see 'moodlog moods')
        #[arg(short, long, value_delimiter = ',')]
        moods: Vec<u32>,
    },

    /// Edit an existing entry (omitted fields keep their value)
    Edit {
        /// Entry id
        id: String,

        /// New content
        #[arg(short, long)]
        content: Option<String>,

        /// New comma-separated mood ids (replaces the old set)
        #[arg(short, long, value_delimiter = ',')]
        moods: Option<Vec<u32>>,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: String,
    },

    /// List entries, newest first
    List {
        /// Show at most this many entries
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show the current daily journaling streak
    Streak,

    /// Show mood statistics over a rolling window
    Stats {
        /// Window: week or month
        #[arg(short, long, default_value = "week")]
        period: String,
    },

    /// List the mood catalog
    Moods,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
