//! ubx-link - UBX receiver link tools
//!
//! Usage:
//!   ubx-link monitor                    Decode and print all UBX traffic
//!   ubx-link svin-status                Poll survey-in progress (NAV-SVIN)
//!   ubx-link svin-setup <dur> <acc>     Enable and persist survey-in mode

use clap::Parser;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use ubx_link::cli::{Cli, Command};
use ubx_link::config;
use ubx_link::error::{Result, UbxError};
use ubx_link::logging::init_tracing;
use ubx_link::transport::{SerialTransport, Transport};
use ubx_link::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error: {}", UbxError::Runtime { source: e });
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load();
    let port = commands::resolve_port(cli.port.as_deref(), &config)?;
    let baud = cli.baud.unwrap_or(config.link.baud_rate);
    eprintln!("Connecting to {} @ {} baud", port, baud);

    let shutdown = Arc::new(AtomicBool::new(false));
    spawn_signal_handler(shutdown.clone());

    let channels = SerialTransport::new(&port, baud).spawn(shutdown.clone())?;

    match cli.command {
        Command::Monitor => commands::monitor::run(channels, shutdown).await,
        Command::SvinStatus {
            interval,
            idle_timeout,
        } => {
            let interval = interval.unwrap_or(config.link.poll_interval_ms);
            let idle = idle_timeout.unwrap_or(config.link.idle_timeout_ticks);
            commands::svin_status::run(channels, shutdown, interval, idle).await
        }
        Command::SvinSetup { min_dur, acc_limit } => {
            commands::svin_setup::run(channels, shutdown, min_dur, acc_limit).await
        }
    }
}

fn spawn_signal_handler(shutdown: Arc<AtomicBool>) {
    #[cfg(unix)]
    {
        tokio::spawn(async move {
            let mut sigterm =
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()).unwrap();
            let mut sigint =
                tokio::signal::unix::signal(tokio::signal::unix::SignalKind::interrupt()).unwrap();

            tokio::select! {
                _ = sigterm.recv() => {},
                _ = sigint.recv() => {},
            }
            shutdown.store(true, Ordering::SeqCst);
        });
    }

    #[cfg(not(unix))]
    {
        tokio::spawn(async move {
            let _ = tokio::signal::ctrl_c().await;
            shutdown.store(true, Ordering::SeqCst);
        });
    }
}
