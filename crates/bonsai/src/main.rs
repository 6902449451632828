use std::fs;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use bonsai::cli::Cli;
use bonsai::{Compiler, Config, Dialect};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bonsai=info")),
        )
        .without_time()
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let source = fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read {}", cli.file.display()))?;
    let dialect = cli
        .dialect
        .unwrap_or_else(|| Dialect::from_path(&cli.file));
    debug!(?dialect, file = %cli.file.display(), "transforming");

    let compiler = Compiler::new(Config { dialect });
    let output = compiler.transform(source, &cli.file.to_string_lossy())?;

    if cli.write {
        fs::write(&cli.file, &output.code)
            .with_context(|| format!("failed to write {}", cli.file.display()))?;
    } else {
        print!("{}", output.code);
    }
    Ok(())
}
