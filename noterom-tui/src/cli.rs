use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "noterom")]
#[command(about = "Terminal class schedule with per-class notes")]
pub struct Cli {
    /// Store classes in this file instead of the configured one
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Open the schedule (default)
    Run,
    /// Run with in-memory demo classes; nothing is written to disk
    Dev,
    /// Print stored classes and exit
    List,
    /// Print config path and create default file if missing
    ConfigPath,
}
