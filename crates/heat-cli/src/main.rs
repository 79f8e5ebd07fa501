//! heatwatch binary entrypoint.
//!
//! This is the main entry point for the `heatwatch` command-line tool.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use heat_analyzer::Thresholds;
use heat_cli::cli::{Cli, Commands};
use heat_cli::commands::{AnalyzeCommand, DoctorCommand, LogCommand, StatusCommand, WatchCommand};
use heat_cli::output::OutputFormat;
use heat_events::EventStore;
use heat_sensors::SystemSensors;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), heat_cli::CliError> {
    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Status => {
            let mut source = SystemSensors::new();
            let cmd = StatusCommand::new();
            cmd.execute(&mut stdout, &format, &mut source).await?;
        }
        Commands::Watch => {
            let mut source = SystemSensors::new();
            let store = EventStore::open(&cli.storage)?;
            let cmd = WatchCommand::new(Thresholds::default());
            cmd.run(&mut stdout, &mut source, &store).await?;
        }
        Commands::Analyze(args) => {
            let store = EventStore::open(&cli.storage)?;
            let cmd = AnalyzeCommand::new();
            cmd.execute(&mut stdout, &format, &store, &args)?;
        }
        Commands::Log(args) => {
            let store = EventStore::open(&cli.storage)?;
            let cmd = LogCommand::new();
            cmd.execute(&mut stdout, &format, &store, &args)?;
        }
        Commands::Doctor => {
            let store = EventStore::open(&cli.storage)?;
            let cmd = DoctorCommand::new();
            cmd.execute(&mut stdout, &format, &store)?;
        }
    }

    Ok(())
}
