//! CVRA debug shell binary entrypoint.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cvra_debug_shell::cli::Cli;
use cvra_debug_shell::client::DebugClient;
use cvra_debug_shell::shell::Shell;
use cvra_debug_shell::ShellError;

fn main() -> ExitCode {
    // Operator output goes to stdout; diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&cli, &runtime) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, runtime: &tokio::runtime::Runtime) -> Result<(), ShellError> {
    let client = DebugClient::new(&cli.server)?;
    Shell::new(client, cli.history_path()).run(runtime)
}
