use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    let cli = bookcase::cli::Cli::parse();

    let directive = cli.command.default_log_directive();
    bookcase::logging::init(directive).context("init logging")?;
    tracing::debug!(?cli, directive, "parsed cli");

    let data_dir = cli.resolve_data_dir();
    bookcase::commands::run(cli)
        .with_context(|| format!("catalog at {}", data_dir.display()))
}
