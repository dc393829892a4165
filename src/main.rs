use std::process::ExitCode;

use clap::Parser;
use deepfind::cli::{run, Cli, Outcome};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.debug {
        if let Err(err) = init_debug_log() {
            eprintln!("deepfind: cannot open debug log: {err}");
        }
    }

    match run(&cli) {
        Ok(Outcome::Found) => ExitCode::SUCCESS,
        Ok(Outcome::Absent) => ExitCode::from(1),
        Err(err) => {
            tracing::error!(error = %err, "search failed");
            eprintln!("deepfind: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn init_debug_log() -> std::io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/deepfind-debug.log")?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .init();
    tracing::info!("deepfind debug log started, tail -f /tmp/deepfind-debug.log");
    Ok(())
}
