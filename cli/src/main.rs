use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use todo_cli::{commands, output, Cli, RemoteTodos, UreqTransport};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let remote = RemoteTodos::new(&cli.base_url, UreqTransport::new());
    let mut stdout = anstream::stdout().lock();

    match commands::run(cli.command, &remote, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(err);
            ExitCode::FAILURE
        }
    }
}
