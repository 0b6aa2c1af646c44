//! Serial transport for the receiver link
//!
//! Uses blocking threads for low-latency I/O:
//! - Reader thread: reads from serial port, sends to channel
//! - Writer thread: receives from channel, writes to serial port
//!
//! The transport stops when:
//! - `shutdown` flag is set
//! - Serial port disconnects (detected via consecutive read errors)
//! - Write error occurs

use super::{Transport, TransportChannels};
use crate::config::DeviceConfig;
use crate::constants::{CHANNEL_CAPACITY, SERIAL_BUFFER_SIZE, SERIAL_DISCONNECT_THRESHOLD};
use crate::error::{Result, UbxError};
use bytes::Bytes;
use serialport::{SerialPortInfo, SerialPortType};
use std::io::{Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Serial transport to a GNSS receiver
///
/// # Example
///
/// ```ignore
/// // Auto-detect a u-blox receiver
/// let port = SerialTransport::detect(&config.device)?;
/// let transport = SerialTransport::new(&port, config.link.baud_rate);
/// let channels = transport.spawn(shutdown)?;
///
/// // Or specify port directly
/// let transport = SerialTransport::new("/dev/ttyACM0", 9600);
/// let channels = transport.spawn(shutdown)?;
/// ```
pub struct SerialTransport {
    port_name: String,
    baud_rate: u32,
}

impl SerialTransport {
    /// Create a new serial transport for the specified port
    pub fn new(port_name: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            port_name: port_name.into(),
            baud_rate,
        }
    }

    /// Detect a USB receiver matching the given configuration
    ///
    /// Searches available serial ports for a device matching the VID/PID
    /// specified in the config. Falls back to name pattern matching if
    /// VID/PID info is not available.
    ///
    /// # Errors
    ///
    /// - `NoDeviceFound` - No matching device found
    /// - `MultipleDevicesFound` - More than one matching device found
    pub fn detect(config: &DeviceConfig) -> Result<String> {
        let ports = serialport::available_ports().unwrap_or_default();

        let matching: Vec<_> = ports.iter().filter(|p| matches_device(p, config)).collect();

        match matching.len() {
            0 => Err(UbxError::NoDeviceFound),
            1 => Ok(matching[0].port_name.clone()),
            n => Err(UbxError::MultipleDevicesFound { count: n }),
        }
    }

    /// Open the serial port in raw mode
    ///
    /// The baud rate matters for UART-wired modules; USB CDC ports ignore
    /// it and run at native USB speed.
    pub fn open(port_name: &str, baud_rate: u32) -> Result<Box<dyn serialport::SerialPort>> {
        serialport::new(port_name, baud_rate)
            .timeout(std::time::Duration::from_millis(10))
            .open()
            .map_err(|e| UbxError::SerialOpen {
                port: port_name.to_string(),
                source: std::io::Error::other(e.to_string()),
            })
    }
}

/// Check if a serial port matches the device configuration
fn matches_device(port: &SerialPortInfo, config: &DeviceConfig) -> bool {
    match &port.port_type {
        SerialPortType::UsbPort(usb) => usb.vid == config.vid && config.pid_list.contains(&usb.pid),
        _ => {
            // Fallback: name pattern matching if available
            config
                .name_hint
                .current()
                .map(|hint| port.port_name.contains(hint))
                .unwrap_or(false)
        }
    }
}

impl Transport for SerialTransport {
    fn spawn(self, shutdown: Arc<AtomicBool>) -> Result<TransportChannels> {
        let (in_tx, in_rx) = mpsc::channel::<Bytes>(CHANNEL_CAPACITY);
        let (out_tx, mut out_rx) = mpsc::channel::<Bytes>(CHANNEL_CAPACITY);

        // Open serial port
        let port_read = Self::open(&self.port_name, self.baud_rate)?;
        let port_write = port_read.try_clone().map_err(|e| UbxError::SerialOpen {
            port: self.port_name.clone(),
            source: std::io::Error::other(e.to_string()),
        })?;

        // Reader thread (blocking)
        let shutdown_reader = shutdown.clone();
        std::thread::spawn(move || {
            let mut port = port_read;
            let mut buf = [0u8; SERIAL_BUFFER_SIZE];
            let mut consecutive_errors = 0u32;

            while !shutdown_reader.load(Ordering::Relaxed) {
                match port.read(&mut buf) {
                    Ok(n) if n > 0 => {
                        consecutive_errors = 0;
                        if in_tx
                            .blocking_send(Bytes::copy_from_slice(&buf[..n]))
                            .is_err()
                        {
                            // Channel closed, receiver dropped
                            break;
                        }
                    }
                    Ok(_) => {
                        // Zero bytes read - could be normal or port gone
                        consecutive_errors += 1;
                        if consecutive_errors > SERIAL_DISCONNECT_THRESHOLD {
                            break;
                        }
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::TimedOut => {
                        // Normal timeout, reset error counter
                        consecutive_errors = 0;
                    }
                    Err(_) => {
                        // Serial error - port disconnected
                        break;
                    }
                }
            }
            // Channel will be closed when in_tx is dropped
        });

        // Writer thread (blocking)
        let shutdown_writer = shutdown.clone();
        std::thread::spawn(move || {
            let mut port = port_write;

            loop {
                if shutdown_writer.load(Ordering::Relaxed) {
                    break;
                }

                match out_rx.blocking_recv() {
                    Some(data) => {
                        if port.write_all(&data).is_err() {
                            // Write error - port disconnected
                            break;
                        }
                    }
                    None => {
                        // Channel closed - sender dropped
                        break;
                    }
                }
            }
            // Channel will be closed when out_rx is dropped
        });

        Ok(TransportChannels {
            rx: in_rx,
            tx: out_tx,
        })
    }
}
