mod cli;
mod delivery_schedule;

use anyhow::Error;
use clap::Parser;

fn main() -> Result<(), Error> {
    cli::Cli::parse().run()
}
