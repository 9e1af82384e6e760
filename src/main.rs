use clap::Parser;
use log::LevelFilter;

use clight_ctl::cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.debug { LevelFilter::Debug } else { LevelFilter::Warn };

    clight_ctl::logging::setup(level).unwrap_or_else(|why| {
        eprintln!("failed to set up logging: {}", why);
        std::process::exit(1);
    });

    log::debug!("{:?}", args);

    args.command.run().await
}
