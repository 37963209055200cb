// src/bin/cli.rs
use color_eyre::eyre::eyre;
use sitecheck::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let code = cli::run().map_err(|e| eyre!("{e}"))?;
    std::process::exit(code);
}
