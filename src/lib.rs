//! UBX frame synchronizer and message codec
//!
//! Decodes and encodes UBX, the binary framed protocol spoken by u-blox
//! GNSS receivers over a serial link:
//!
//! - [`checksum`] - two-accumulator running checksum over frame bytes
//! - [`registry`] - static catalog mapping message identities to layouts
//! - [`codec`] - structured records ⇄ wire bytes
//! - [`stream`] - frame extraction and resynchronization over a byte stream
//! - [`mask`] - named configuration bits → packed masks
//!
//! The transport and the apps built on top live in [`transport`] and the
//! `ubx-link` binary; the core itself is pure computation over buffers and
//! performs no I/O.
//!
//! # Example
//!
//! ```
//! use ubx_link::{encode_frame, FrameSynchronizer, Record, Registry};
//!
//! let registry = Registry::global();
//! let rate = Record::new()
//!     .with("Meas", 1000u16)
//!     .with("Nav", 1u16)
//!     .with("Time", 0u16);
//! let frame = encode_frame(registry, "CFG-RATE", 6, &[rate]).unwrap();
//!
//! let mut parser = FrameSynchronizer::new(registry);
//! let mut decoded = Vec::new();
//! parser.feed(&frame, |message| decoded.push(message));
//! assert_eq!(decoded.len(), 1);
//! assert_eq!(decoded[0].name, "CFG-RATE");
//! assert_eq!(decoded[0].records[0].int("Meas"), Some(1000));
//! ```

pub mod checksum;
pub mod cli;
pub mod codec;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod mask;
pub mod registry;
pub mod stream;
pub mod transport;

pub use codec::{decode_frame, encode_frame, DecodedMessage, Record, Value};
pub use error::{Result, UbxError};
pub use registry::Registry;
pub use stream::FrameSynchronizer;
