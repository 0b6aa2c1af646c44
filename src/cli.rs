//! Command-line interface definition using clap
//!
//! Provides structured argument parsing with automatic help generation.

use clap::{Parser, Subcommand};

// =============================================================================
// CLI Definition
// =============================================================================

/// UBX receiver link tools
#[derive(Parser, Debug)]
#[command(name = "ubx-link")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose debug output
    #[arg(short, long)]
    pub verbose: bool,

    /// Serial port to use (overrides config and auto-detection)
    #[arg(long, value_name = "PORT")]
    pub port: Option<String>,

    /// UART baud rate (overrides config)
    #[arg(long, value_name = "BAUD")]
    pub baud: Option<u32>,

    #[command(subcommand)]
    pub command: Command,
}

/// Receiver operations
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode and print every UBX message from the receiver
    Monitor,

    /// Poll survey-in status (NAV-SVIN) and print progress
    SvinStatus {
        /// Interval between polls in milliseconds
        #[arg(long, value_name = "MS")]
        interval: Option<u64>,

        /// Poll ticks without a decoded message before giving up
        #[arg(long, value_name = "TICKS")]
        idle_timeout: Option<u32>,
    },

    /// Enable survey-in timing mode (CFG-TMODE3) and persist it (CFG-CFG)
    SvinSetup {
        /// Minimum survey-in duration (seconds)
        min_dur: u32,

        /// Survey-in position accuracy limit (0.1 mm units)
        acc_limit: u32,
    },
}

// =============================================================================
// Tests
// =============================================================================
