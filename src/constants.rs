//! Application-wide constants
//!
//! Centralized constants to avoid duplication and ensure consistency.

// =============================================================================
// Wire format
// =============================================================================

/// First UBX sync byte (frame start marker)
pub const SYNC1: u8 = 0xB5;

/// Second UBX sync byte
pub const SYNC2: u8 = 0x62;

/// Frame overhead: sync (2) + class (1) + id (1) + length (2) + checksum (2)
pub const FRAME_OVERHEAD: usize = 8;

/// Minimum total frame size (zero-length payload)
pub const MIN_FRAME_LEN: usize = FRAME_OVERHEAD;

// =============================================================================
// Buffers
// =============================================================================

/// Serial read buffer size
pub const SERIAL_BUFFER_SIZE: usize = 512;

/// Initial capacity of the stream synchronizer buffer
pub const STREAM_BUFFER_CAPACITY: usize = 2048;

/// Channel capacity for async message passing
pub const CHANNEL_CAPACITY: usize = 256;

// =============================================================================
// Serial
// =============================================================================

/// Default baud rate for u-blox UART/USB ports
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Consecutive zero-byte reads before assuming port disconnected
pub const SERIAL_DISCONNECT_THRESHOLD: u32 = 10;

// =============================================================================
// Polling
// =============================================================================

/// Default interval between poll requests (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Default idle ticks without a decoded message before giving up
pub const DEFAULT_IDLE_TIMEOUT_TICKS: u32 = 10;
