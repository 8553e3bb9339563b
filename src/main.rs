use clap::Parser;
use srclayout::runner::{self, logging, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    runner::run(&cli)
}
