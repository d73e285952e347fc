use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = std::result::Result<T, graystego_core::StegoError>;

fn main() -> CliResult<()> {
    env_logger::init();

    let cli = CliArgs::parse();
    log::debug!("dispatching {:?}", cli.command);

    match cli.command {
        Commands::Embed(args) => args.run(),
    }
}
