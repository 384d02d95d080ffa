//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

/// Selection engine for miller-column tree grids
///
/// Trees are JSON files mapping node names to `{children, text, mandatory}`
/// objects; paths and selections are exchanged as JSON.
#[derive(Parser, Debug)]
#[command(name = "treegrid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the projected grid for a tree
    Show {
        /// Tree JSON file
        #[arg(value_hint = ValueHint::FilePath)]
        tree: PathBuf,

        /// Preselected paths as a JSON array of string arrays
        #[arg(long)]
        paths: Option<String>,

        /// Row filter pattern (unanchored regular expression)
        #[arg(long)]
        filter: Option<String>,

        /// Collapsed path as a JSON string array (repeatable)
        #[arg(long)]
        collapse: Vec<String>,
    },

    /// Print the maximal path list for a selection
    Paths {
        /// Selection as nested JSON objects
        #[arg(long)]
        selection: String,
    },

    /// Apply a single item toggle and print the resulting paths
    Select {
        /// Tree JSON file
        #[arg(value_hint = ValueHint::FilePath)]
        tree: PathBuf,

        /// Current selection as a JSON array of string arrays
        #[arg(long)]
        paths: Option<String>,

        /// Parent path of the clicked item (JSON string array, default root)
        #[arg(long)]
        parent: Option<String>,

        /// Name of the clicked item
        #[arg(long)]
        name: String,
    },

    /// Apply the select-all gesture to one column and print the resulting paths
    SelectAll {
        /// Tree JSON file
        #[arg(value_hint = ValueHint::FilePath)]
        tree: PathBuf,

        /// Current selection as a JSON array of string arrays
        #[arg(long)]
        paths: Option<String>,

        /// Column index (0-based)
        #[arg(long)]
        column: usize,
    },

    /// Render the source tree
    Tree {
        /// Tree JSON file
        #[arg(value_hint = ValueHint::FilePath)]
        tree: PathBuf,
    },

    /// Print effective settings as TOML
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
