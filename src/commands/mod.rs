//! Receiver operations behind the CLI subcommands
//!
//! Each operation owns a `tokio::select!` loop over the transport channels
//! with a periodic shutdown check, the same shape the transport side
//! expects: the codec core never blocks, so all pacing (poll timers, idle
//! timeouts) lives here.

pub mod monitor;
pub mod svin_setup;
pub mod svin_status;

use crate::config::Config;
use crate::error::Result;
use crate::transport::SerialTransport;

/// Resolve the serial port: CLI override, then config, then auto-detection
pub fn resolve_port(cli_port: Option<&str>, config: &Config) -> Result<String> {
    if let Some(port) = cli_port {
        return Ok(port.to_string());
    }
    if !config.link.serial_port.is_empty() {
        return Ok(config.link.serial_port.clone());
    }
    SerialTransport::detect(&config.device)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_port_cli_wins() {
        let mut config = Config::default();
        config.link.serial_port = "/dev/ttyS1".to_string();
        let port = resolve_port(Some("/dev/ttyO5"), &config).unwrap();
        assert_eq!(port, "/dev/ttyO5");
    }

    #[test]
    fn test_resolve_port_from_config() {
        let mut config = Config::default();
        config.link.serial_port = "/dev/ttyS1".to_string();
        let port = resolve_port(None, &config).unwrap();
        assert_eq!(port, "/dev/ttyS1");
    }
}
