use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "utilkit")]
#[command(about = "Look up, remove and merge values in JSON documents by key-path")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// JSON document to read (defaults to stdin)
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value stored at a key-path
    Get {
        /// Path parts, dotted or separate (`a.b 0`)
        path: Vec<String>,
    },
    /// Print whether anything is stored at a key-path
    Has {
        /// Path parts, dotted or separate (`a.b 0`)
        path: Vec<String>,
    },
    /// Remove one key or index from the top level of the document
    Unset {
        /// Mapping key or sequence index
        key: String,
    },
    /// Merge operands into the document
    Extend {
        /// Inline JSON, `@file`, or a plain string
        operands: Vec<String>,
        /// Merge nested mappings recursively
        #[arg(long)]
        deep: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the current configuration
    Show,
    /// Set configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
}
