mod cli;
mod terminal;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    terminal::run_app(cli::Cli::parse())
}
