//! Stream synchronizer
//!
//! Extracts well-formed frames from an arbitrary, possibly fragmented byte
//! stream. The synchronizer owns an accumulating buffer and a scan cursor;
//! `feed` appends incoming bytes and runs the extraction loop to fixed
//! point, dispatching each checksum-valid frame through the codec.
//!
//! Discard policy is two-phase: a sync-looking pair whose checksum fails is
//! only probed past (cursor advanced beyond the marker start), while actual
//! removal of buffered bytes happens when a frame is confirmed valid or
//! when a scan from the buffer start finds no marker at all. This keeps a
//! genuine frame alive behind noise that contains a spurious sync pair,
//! while bounding the buffer to undelivered or unverified data.
//!
//! Protocol-level corruption never propagates to the caller: bad frames are
//! logged and dropped, and parsing continues with the next bytes.

use crate::checksum::checksum;
use crate::codec::{decode_frame, DecodedMessage};
use crate::constants::{MIN_FRAME_LEN, STREAM_BUFFER_CAPACITY, SYNC1, SYNC2};
use crate::error::UbxError;
use crate::registry::Registry;
use tracing::{debug, trace, warn};

/// Per-connection frame synchronizer
///
/// One logical connection owns one synchronizer; all `feed` calls must come
/// from a single task. The registry reference is read-only and shared.
pub struct FrameSynchronizer {
    registry: &'static Registry,
    buffer: Vec<u8>,
    /// Earliest buffer offset still needing a sync search. Bytes before it
    /// have been ruled out (false markers) but not yet discarded.
    cursor: usize,
    raw_tap: Option<Box<dyn FnMut(&[u8]) + Send>>,
}

impl FrameSynchronizer {
    /// Create a synchronizer over the shared registry
    pub fn new(registry: &'static Registry) -> Self {
        Self {
            registry,
            buffer: Vec::with_capacity(STREAM_BUFFER_CAPACITY),
            cursor: 0,
            raw_tap: None,
        }
    }

    /// Install a diagnostic tap receiving every chunk before parsing
    pub fn with_raw_tap(mut self, tap: impl FnMut(&[u8]) + Send + 'static) -> Self {
        self.raw_tap = Some(Box::new(tap));
        self
    }

    /// Bytes currently buffered (unconsumed tail)
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Feed a chunk of raw bytes, invoking `on_message` for every complete,
    /// checksum-valid, decodable frame found
    ///
    /// Runs synchronously to completion; one call may yield zero or more
    /// messages depending on how many frames the buffer now holds.
    pub fn feed(&mut self, data: &[u8], mut on_message: impl FnMut(DecodedMessage)) {
        if let Some(tap) = &mut self.raw_tap {
            tap(data);
        }
        self.buffer.extend_from_slice(data);

        while self.buffer.len() >= self.cursor + MIN_FRAME_LEN {
            let Some(start) = find_sync(&self.buffer, self.cursor) else {
                if self.cursor == 0 {
                    // Marker-free noise. Keep a trailing first sync byte
                    // alive: its partner may arrive in the next chunk.
                    let keep = usize::from(self.buffer.last() == Some(&SYNC1));
                    let discarded = self.buffer.len() - keep;
                    debug!(discarded, "discarded non-protocol bytes");
                    self.buffer.drain(..discarded);
                }
                // Cursor mid-buffer: the unverified tail may still become a
                // frame once more bytes arrive.
                return;
            };

            if self.cursor == 0 && start != 0 {
                // Everything before the marker is noise
                debug!(discarded = start, "discarded bytes before sync marker");
                self.buffer.drain(..start);
                continue;
            }

            if start + MIN_FRAME_LEN > self.buffer.len() {
                // Header not complete yet
                return;
            }

            let class = self.buffer[start + 2];
            let id = self.buffer[start + 3];
            let length =
                u16::from_le_bytes([self.buffer[start + 4], self.buffer[start + 5]]) as usize;
            let frame_end = start + length + MIN_FRAME_LEN;
            if self.buffer.len() < frame_end {
                // Partial frame, wait for the rest
                return;
            }

            let expected = (self.buffer[frame_end - 2], self.buffer[frame_end - 1]);
            if checksum(&self.buffer[start + 2..frame_end - 2]) != expected {
                // False sync marker; probe past it without discarding yet
                trace!(offset = start, "checksum mismatch, resuming sync search");
                self.cursor = start + 2;
                continue;
            }

            if start != 0 {
                // Confirmed frame behind skipped bytes: now drop the prefix
                warn!(ignored = start, "ignored bytes before valid frame");
                self.buffer.drain(..start);
                self.cursor = 0;
                continue;
            }

            match decode_frame(self.registry, class, id, &self.buffer[6..6 + length]) {
                Ok(message) => on_message(message),
                Err(error) => log_decode_error(&error),
            }

            self.buffer.drain(..frame_end);
            self.cursor = 0;
        }
    }
}

fn find_sync(buffer: &[u8], from: usize) -> Option<usize> {
    buffer[from..]
        .windows(2)
        .position(|pair| pair == [SYNC1, SYNC2])
        .map(|pos| from + pos)
}

/// Decode failures are local: log at the severity the condition warrants
/// and keep the stream flowing.
fn log_decode_error(error: &UbxError) {
    match error {
        UbxError::UnknownMessageCode { class, id } => {
            debug!(class, id, "unknown message, frame skipped");
        }
        UbxError::NoLayoutForLength { name, length } => {
            debug!(name, length, "no layout for frame length, frame skipped");
        }
        UbxError::InvalidVariableLength { name, length } => {
            warn!(name, length, "variable-length frame with bad length, frame dropped");
        }
        other => warn!(%other, "frame dropped"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{encode_frame, Record};

    fn sync() -> FrameSynchronizer {
        FrameSynchronizer::new(Registry::global())
    }

    fn cfg_rate_frame() -> Vec<u8> {
        let payload = Record::new()
            .with("Meas", 1000u16)
            .with("Nav", 1u16)
            .with("Time", 0u16);
        encode_frame(Registry::global(), "CFG-RATE", 6, &[payload]).unwrap()
    }

    fn collect(parser: &mut FrameSynchronizer, data: &[u8]) -> Vec<DecodedMessage> {
        let mut messages = Vec::new();
        parser.feed(data, |m| messages.push(m));
        messages
    }

    #[test]
    fn test_whole_frame() {
        let mut parser = sync();
        let messages = collect(&mut parser, &cfg_rate_frame());
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "CFG-RATE");
        assert_eq!(messages[0].records[0].int("Meas"), Some(1000));
        assert_eq!(parser.buffered(), 0);
    }

    #[test]
    fn test_byte_at_a_time() {
        let mut parser = sync();
        let frame = cfg_rate_frame();
        let mut messages = Vec::new();
        for &byte in &frame {
            parser.feed(&[byte], |m| messages.push(m));
        }
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "CFG-RATE");
    }

    #[test]
    fn test_back_to_back_frames_in_one_feed() {
        let mut parser = sync();
        let mut data = cfg_rate_frame();
        data.extend_from_slice(&cfg_rate_frame());
        let messages = collect(&mut parser, &data);
        assert_eq!(messages.len(), 2);
    }

    #[test]
    fn test_resync_after_noise() {
        let mut parser = sync();
        let mut data = vec![0x00, 0x47, 0x11, 0xFF, 0xFE, 0x21, 0x33, 0x44, 0x55];
        data.extend_from_slice(&cfg_rate_frame());
        let messages = collect(&mut parser, &data);
        assert_eq!(messages.len(), 1);
        assert_eq!(parser.buffered(), 0);
    }

    #[test]
    fn test_marker_free_noise_is_discarded() {
        let mut parser = sync();
        let messages = collect(&mut parser, &[0x01u8; 64]);
        assert!(messages.is_empty());
        assert_eq!(parser.buffered(), 0);
    }

    #[test]
    fn test_trailing_sync1_survives_discard() {
        let mut parser = sync();
        let mut noise = vec![0x22u8; 16];
        noise.push(SYNC1);
        assert!(collect(&mut parser, &noise).is_empty());
        assert_eq!(parser.buffered(), 1);

        // Rest of the frame arrives in the next chunk
        let frame = cfg_rate_frame();
        let messages = collect(&mut parser, &frame[1..]);
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_corrupted_first_frame_is_skipped() {
        let mut parser = sync();
        let mut bad = cfg_rate_frame();
        let last = bad.len() - 1;
        bad[last] ^= 0xFF;
        bad.extend_from_slice(&cfg_rate_frame());

        let messages = collect(&mut parser, &bad);
        assert_eq!(messages.len(), 1, "only the intact second frame decodes");
    }

    #[test]
    fn test_corrupted_payload_then_valid_frame() {
        let mut parser = sync();
        let mut bad = cfg_rate_frame();
        bad[7] ^= 0x5A; // flip a payload byte, checksum no longer matches
        bad.extend_from_slice(&cfg_rate_frame());

        let messages = collect(&mut parser, &bad);
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_partial_frame_waits() {
        let mut parser = sync();
        let frame = cfg_rate_frame();
        assert!(collect(&mut parser, &frame[..10]).is_empty());
        assert_eq!(parser.buffered(), 10);

        let messages = collect(&mut parser, &frame[10..]);
        assert_eq!(messages.len(), 1);
        assert_eq!(parser.buffered(), 0);
    }

    #[test]
    fn test_sync_pair_split_across_feeds() {
        let mut parser = sync();
        let frame = cfg_rate_frame();
        // 8+ bytes of noise, then the first sync byte, cut mid-marker
        let mut first = vec![0x13u8; 9];
        first.push(frame[0]);
        assert!(collect(&mut parser, &first).is_empty());

        let messages = collect(&mut parser, &frame[1..]);
        assert_eq!(messages.len(), 1);
    }

    #[test]
    fn test_spurious_sync_inside_noise_before_frame() {
        let mut parser = sync();
        // A sync-looking pair followed by garbage that fails the checksum,
        // then a genuine frame: the genuine frame must survive.
        let mut data = vec![SYNC1, SYNC2, 0x01, 0x02, 0x02, 0x00, 0xAA, 0xBB, 0xCC, 0xDD];
        data.extend_from_slice(&cfg_rate_frame());
        let messages = collect(&mut parser, &data);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "CFG-RATE");
        assert_eq!(parser.buffered(), 0);
    }

    #[test]
    fn test_unknown_message_does_not_desync() {
        let mut parser = sync();
        // Hand-build a checksum-valid frame with unmodeled codes
        let mut unknown = vec![SYNC1, SYNC2, 0x7E, 0x7F, 0x02, 0x00, 0x11, 0x22];
        let (ck_a, ck_b) = checksum(&unknown[2..]);
        unknown.push(ck_a);
        unknown.push(ck_b);
        unknown.extend_from_slice(&cfg_rate_frame());

        let messages = collect(&mut parser, &unknown);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "CFG-RATE");
    }

    #[test]
    fn test_bad_variable_length_dropped_without_desync() {
        let mut parser = sync();
        // NAV-SVINFO with 15 payload bytes: 8-byte header + 7 leftover,
        // not a multiple of the 12-byte block
        let mut bad = vec![SYNC1, SYNC2, 0x01, 0x30, 0x0F, 0x00];
        bad.extend_from_slice(&[0u8; 15]);
        let (ck_a, ck_b) = checksum(&bad[2..]);
        bad.push(ck_a);
        bad.push(ck_b);
        bad.extend_from_slice(&cfg_rate_frame());

        let messages = collect(&mut parser, &bad);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "CFG-RATE");
        assert_eq!(parser.buffered(), 0);
    }

    #[test]
    fn test_zero_length_frame() {
        let mut parser = sync();
        // ACK-less poll frames are valid wire traffic; unknown-length
        // frames decode to nothing but must still be consumed.
        let frame = encode_frame(Registry::global(), "NAV-SVIN", 0, &[]).unwrap();
        let messages = collect(&mut parser, &frame);
        assert!(messages.is_empty());
        assert_eq!(parser.buffered(), 0);
    }

    #[test]
    fn test_raw_tap_sees_all_chunks() {
        use std::sync::{Arc, Mutex};
        let captured = Arc::new(Mutex::new(Vec::new()));
        let captured_clone = captured.clone();
        let mut parser = sync().with_raw_tap(move |chunk: &[u8]| {
            captured_clone.lock().unwrap().extend_from_slice(chunk);
        });

        let frame = cfg_rate_frame();
        parser.feed(&frame[..5], |_| {});
        parser.feed(&frame[5..], |_| {});
        assert_eq!(*captured.lock().unwrap(), frame);
    }

    #[test]
    fn test_variable_frame_roundtrip_through_parser() {
        let mut parser = sync();
        let header = Record::new().with("msgClass", 0x01u8).with("msgId", 0x06u8);
        let rate = Record::new().with("rate", 4u8);
        let frame =
            encode_frame(Registry::global(), "CFG-MSG", 3, &[header, rate]).unwrap();

        let messages = collect(&mut parser, &frame);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].records.len(), 2);
        assert_eq!(messages[0].records[0].int("msgClass"), Some(0x01));
        assert_eq!(messages[0].records[1].int("rate"), Some(4));
    }
}
