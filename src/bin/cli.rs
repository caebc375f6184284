// src/bin/cli.rs
use clap::Parser;
use greenmen_bot::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Cli::parse();
    log::init(args.verbose);
    cli::run(args)
}
