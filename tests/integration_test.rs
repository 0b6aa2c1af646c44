//! Integration tests for the frame synchronizer and codec
//!
//! Exercises the complete path wire bytes -> synchronizer -> codec ->
//! delivered records, including resynchronization under corruption and
//! arbitrary fragmentation of the input stream.

use proptest::prelude::*;
use ubx_link::checksum::checksum;
use ubx_link::constants::{SYNC1, SYNC2};
use ubx_link::{encode_frame, DecodedMessage, FrameSynchronizer, Record, Registry};

fn feed_all(parser: &mut FrameSynchronizer, chunks: &[Vec<u8>]) -> Vec<DecodedMessage> {
    let mut messages = Vec::new();
    for chunk in chunks {
        parser.feed(chunk, |m| messages.push(m));
    }
    messages
}

fn cfg_rate_frame(meas: u16, nav: u16, time: u16) -> Vec<u8> {
    let payload = Record::new()
        .with("Meas", meas)
        .with("Nav", nav)
        .with("Time", time);
    encode_frame(Registry::global(), "CFG-RATE", 6, &[payload]).unwrap()
}

// =============================================================================
// Wire format scenarios
// =============================================================================

#[test]
fn test_cfg_rate_wire_bytes() {
    // B5 62 06 08 06 00 E8 03 01 00 00 00 <ckA> <ckB>
    let frame = cfg_rate_frame(1000, 1, 0);
    assert_eq!(
        &frame[..12],
        &[0xB5, 0x62, 0x06, 0x08, 0x06, 0x00, 0xE8, 0x03, 0x01, 0x00, 0x00, 0x00]
    );
    let (ck_a, ck_b) = checksum(&frame[2..12]);
    assert_eq!(&frame[12..], &[ck_a, ck_b]);
}

#[test]
fn test_cfg_rate_decodes_to_original_record() {
    let mut parser = FrameSynchronizer::new(Registry::global());
    let messages = feed_all(&mut parser, &[cfg_rate_frame(1000, 1, 0)]);

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name, "CFG-RATE");
    let record = &messages[0].records[0];
    assert_eq!(record.int("Meas"), Some(1000));
    assert_eq!(record.int("Nav"), Some(1));
    assert_eq!(record.int("Time"), Some(0));
}

#[test]
fn test_svinfo_variable_frame_three_records() {
    // 8-byte header + two 12-byte satellite blocks = 32-byte payload
    let mut frame = vec![SYNC1, SYNC2, 0x01, 0x30, 32, 0];
    frame.extend_from_slice(&86400u32.to_le_bytes()); // ITOW
    frame.push(2); // NCH
    frame.extend_from_slice(&[0; 3]);
    for (chn, svid, cno) in [(0u8, 3u8, 41u8), (1, 17, 38)] {
        frame.push(chn);
        frame.push(svid);
        frame.push(0x0D);
        frame.push(7);
        frame.push(cno);
        frame.push(55);
        frame.extend_from_slice(&211i16.to_le_bytes());
        frame.extend_from_slice(&(-8i32).to_le_bytes());
    }
    let (ck_a, ck_b) = checksum(&frame[2..]);
    frame.push(ck_a);
    frame.push(ck_b);

    let mut parser = FrameSynchronizer::new(Registry::global());
    let messages = feed_all(&mut parser, &[frame]);

    assert_eq!(messages.len(), 1);
    let message = &messages[0];
    assert_eq!(message.name, "NAV-SVINFO");
    assert_eq!(message.records.len(), 3);
    assert_eq!(message.records[0].int("NCH"), Some(2));
    assert_eq!(message.records[1].int("SVID"), Some(3));
    assert_eq!(message.records[1].int("CNO"), Some(41));
    assert_eq!(message.records[2].int("SVID"), Some(17));
}

// =============================================================================
// Resynchronization
// =============================================================================

#[test]
fn test_noise_then_frame_yields_one_message() {
    let mut data = b"$GPGGA,123519,4807.038,N*47\r\n".to_vec();
    data.extend_from_slice(&cfg_rate_frame(250, 1, 0));

    let mut parser = FrameSynchronizer::new(Registry::global());
    let messages = feed_all(&mut parser, &[data]);
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].records[0].int("Meas"), Some(250));
}

#[test]
fn test_corrupted_checksum_skips_to_next_frame() {
    let mut first = cfg_rate_frame(100, 1, 0);
    let last = first.len() - 1;
    first[last] ^= 0x01;
    let second = cfg_rate_frame(200, 1, 0);

    let mut parser = FrameSynchronizer::new(Registry::global());
    let mut data = first;
    data.extend_from_slice(&second);
    let messages = feed_all(&mut parser, &[data]);

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].records[0].int("Meas"), Some(200));
}

#[test]
fn test_bad_variable_length_does_not_desync() {
    // NAV-SVINFO frame whose 13-byte payload leaves a 5-byte remainder
    let mut bad = vec![SYNC1, SYNC2, 0x01, 0x30, 13, 0];
    bad.extend_from_slice(&[0u8; 13]);
    let (ck_a, ck_b) = checksum(&bad[2..]);
    bad.push(ck_a);
    bad.push(ck_b);
    bad.extend_from_slice(&cfg_rate_frame(1000, 1, 0));

    let mut parser = FrameSynchronizer::new(Registry::global());
    let messages = feed_all(&mut parser, &[bad]);

    // The malformed frame produces nothing; the stream recovers
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].name, "CFG-RATE");
}

#[test]
fn test_poll_and_answer_conversation() {
    // What svin-status puts on the wire, and what the receiver answers
    let poll = encode_frame(Registry::global(), "NAV-SVIN", 0, &[]).unwrap();
    assert_eq!(poll.len(), 8);
    assert_eq!(&poll[..6], &[0xB5, 0x62, 0x01, 0x3b, 0x00, 0x00]);

    let answer_payload = Record::new()
        .with("version", 0u8)
        .with("reserved1", 0u8)
        .with("reserved1_1", 0u8)
        .with("reserved1_2", 0u8)
        .with("iTOW", 86400u32)
        .with("dur", 120u32)
        .with("meanX", 232_459_000i32)
        .with("meanY", -478_265_100i32)
        .with("meanZ", 407_345_200i32)
        .with("meanXHP", 5i8)
        .with("meanYHP", -3i8)
        .with("meanZHP", 0i8)
        .with("reserved2", 0u8)
        .with("meanAcc", 540u32)
        .with("obs", 120u32)
        .with("valid", 0u8)
        .with("active", 1u8)
        .with("reserved3", 0u8)
        .with("reserved3_2", 0u8);
    let answer = encode_frame(Registry::global(), "NAV-SVIN", 40, &[answer_payload]).unwrap();

    let mut parser = FrameSynchronizer::new(Registry::global());
    let messages = feed_all(&mut parser, &[answer]);
    assert_eq!(messages.len(), 1);
    let record = &messages[0].records[0];
    assert_eq!(record.int("meanX"), Some(232_459_000));
    assert_eq!(record.int("meanY"), Some(-478_265_100));
    assert_eq!(record.int("active"), Some(1));
    assert_eq!(record.int("valid"), Some(0));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_fragmentation_invariance(
        meas in any::<u16>(),
        nav in any::<u16>(),
        time in any::<u16>(),
        cuts in prop::collection::vec(1usize..14, 0..8),
    ) {
        let frame = cfg_rate_frame(meas, nav, time);

        // Reference: the whole frame in one feed
        let mut whole = FrameSynchronizer::new(Registry::global());
        let mut expected = Vec::new();
        whole.feed(&frame, |m| expected.push(m));
        prop_assert_eq!(expected.len(), 1);

        // Split at arbitrary positions and feed the pieces sequentially
        let mut cuts = cuts;
        cuts.sort_unstable();
        cuts.dedup();
        let mut fragmented = FrameSynchronizer::new(Registry::global());
        let mut actual = Vec::new();
        let mut start = 0;
        for cut in cuts {
            fragmented.feed(&frame[start..cut], |m| actual.push(m));
            start = cut;
        }
        fragmented.feed(&frame[start..], |m| actual.push(m));

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_resync_discards_markerless_noise(
        noise in prop::collection::vec(any::<u8>(), 8..64),
        meas in any::<u16>(),
    ) {
        // Keep the noise free of sync pairs so exactly one frame exists
        let mut noise = noise;
        for i in 0..noise.len() {
            if noise[i] == SYNC1 && noise.get(i + 1) == Some(&SYNC2) {
                noise[i] = 0x00;
            }
        }
        if noise.last() == Some(&SYNC1) {
            *noise.last_mut().unwrap() = 0x00;
        }

        let mut data = noise;
        data.extend_from_slice(&cfg_rate_frame(meas, 1, 0));

        let mut parser = FrameSynchronizer::new(Registry::global());
        let mut messages = Vec::new();
        parser.feed(&data, |m| messages.push(m));

        prop_assert_eq!(messages.len(), 1);
        prop_assert_eq!(messages[0].records[0].int("Meas"), Some(meas as i64));
        prop_assert_eq!(parser.buffered(), 0);
    }

    #[test]
    fn prop_fixed_layout_roundtrip(
        itow in any::<u32>(),
        x in any::<i32>(),
        y in any::<i32>(),
        z in any::<i32>(),
        pacc in any::<u32>(),
    ) {
        let payload = Record::new()
            .with("ITOW", itow)
            .with("ECEF_X", x)
            .with("ECEF_Y", y)
            .with("ECEF_Z", z)
            .with("Pacc", pacc);
        let frame =
            encode_frame(Registry::global(), "NAV-POSECEF", 20, &[payload.clone()]).unwrap();

        let mut parser = FrameSynchronizer::new(Registry::global());
        let mut messages = Vec::new();
        parser.feed(&frame, |m| messages.push(m));

        prop_assert_eq!(messages.len(), 1);
        prop_assert_eq!(messages[0].name, "NAV-POSECEF");
        prop_assert_eq!(&messages[0].records[0], &payload);
    }
}
