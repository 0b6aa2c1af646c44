//! Transport abstraction for byte-level I/O
//!
//! Separates I/O concerns from protocol logic: the transport moves raw
//! bytes, the codec and stream synchronizer give them meaning. The serial
//! transport manages its own blocking threads internally and exposes plain
//! channels to the async side.

pub mod serial;

pub use serial::SerialTransport;

use bytes::Bytes;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::error::Result;

/// Channels for bidirectional communication with a transport
///
/// The transport owns the underlying I/O (serial port) and communicates via
/// these channels. When the transport stops (shutdown or error), it closes
/// the channels.
pub struct TransportChannels {
    /// Receive raw bytes from the transport
    ///
    /// Returns `None` when the transport has stopped.
    pub rx: mpsc::Receiver<Bytes>,

    /// Send raw bytes to the transport
    ///
    /// The transport will write these bytes to its underlying I/O.
    pub tx: mpsc::Sender<Bytes>,
}

/// Trait for spawnable transports
///
/// # Lifecycle
///
/// 1. Create transport with configuration
/// 2. Call `spawn()` to start I/O in background
/// 3. Use returned channels for communication
/// 4. Transport runs until `shutdown` is set or the device disconnects
/// 5. Transport closes channels when stopping
pub trait Transport: Send + 'static {
    /// Spawn the transport in background
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be initialized
    /// (e.g., port not found, open failed).
    fn spawn(self, shutdown: Arc<AtomicBool>) -> Result<TransportChannels>;
}
