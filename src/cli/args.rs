//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::domain::Fruit;

/// Query a tree of fruit-bearing branches: fruit counts, first fruit color, busiest branch
#[derive(Parser, Debug)]
#[command(name = "fruittree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Local config file, layered over the global one
    #[arg(short = 'c', long = "config", global = true, value_hint = ValueHint::FilePath)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print fruit counts, first fruit color and busiest branch (default)
    Report,

    /// Count fruit of one kind across the whole tree
    Count {
        /// Fruit kind
        #[arg(value_enum)]
        kind: Fruit,
    },

    /// Color of the first fruit in breadth-first order
    FirstColor,

    /// Branch with the most fruit attached directly to it
    Busiest,

    /// Show the tree as a diagram
    Tree,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings as TOML
    Show,
    /// Show the global config file location
    Path,
    /// Print a commented config template
    Template,
}
