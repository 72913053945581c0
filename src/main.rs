// src/main.rs

use anyhow::Result;
use clap::Parser;
use selcat::cli::Cli;
use selcat::config::Config;
use selcat::discovery::FsDirectoryReader;
use selcat::errors::Error;
use selcat::filtering::ContentDetector;
use selcat::output::SystemClipboard;

fn main() -> Result<()> {
    // Initialize logging, controlled by RUST_LOG. Logs go to stderr so they
    // never mix with --stdout output.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    log::debug!("Starting selcat v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(e @ Error::Config(_)) => {
            eprintln!("selcat: {}", e);
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    let mut sink = SystemClipboard;
    if let Err(e) = selcat::run(&config, &FsDirectoryReader, &ContentDetector, &mut sink) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
