use anyhow::Result;
use clap::Parser;

use wordfreq::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
