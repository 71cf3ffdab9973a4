use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod schematic;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("pangenome_schematic=debug,info")
    } else {
        EnvFilter::new("pangenome_schematic=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Split(args) => {
            cli::split::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Info(args) => {
            cli::info::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Locate(args) => {
            cli::locate::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
