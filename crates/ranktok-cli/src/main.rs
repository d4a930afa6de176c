mod commands;
mod disk_cache;
mod encoding_selector;
mod input_output;
mod logging;
mod special_args;

use clap::Parser;
use commands::Commands;

/// ranktok: encode and decode text with tiktoken-format encodings.
#[derive(clap::Parser, Debug)]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    log: logging::LogArgs,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.log.setup_logging(2)?;

    args.command.run()
}
