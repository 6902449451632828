use std::path::PathBuf;

use clap::Parser;

use crate::config::Dialect;

#[derive(Parser)]
pub struct Cli {
    /// Module to shake.
    pub file: PathBuf,
    /// Parser dialect; inferred from the file extension when omitted.
    #[arg(short, long, value_enum)]
    pub dialect: Option<Dialect>,
    /// Rewrite the file in place instead of printing to stdout.
    #[arg(short, long)]
    pub write: bool,
}
