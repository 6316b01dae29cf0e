mod config;
mod gateway;
mod run;

use {
    crate::{config::Config, run::RunCmd},
    clap::Parser,
    config_parser::parse_config,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Path to the config file [default: built-in defaults]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Replay a script of operations against a fresh in-memory pool
    Run(RunCmd),
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Parse the config file, if one is given.
    let cfg: Config = match cli.config {
        Some(path) => parse_config(path)?,
        None => Config::default(),
    };

    // Set up tracing. Logs go to stderr so that stdout is only the results.
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run(cmd) => cmd.run(cfg),
    }
}
