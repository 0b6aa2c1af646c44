//! Survey-in setup: enable timing mode and persist the configuration
//!
//! Sends CFG-TMODE3 with flags = 1 (survey-in) and the requested minimum
//! duration / accuracy limit, then CFG-CFG with saveMask = all sections so
//! the receiver keeps the mode across power cycles. Waits for the
//! acknowledgement of the CFG-CFG write before returning.

use crate::codec::{encode_frame, Record};
use crate::error::{Result, UbxError};
use crate::mask::{build_mask, CFG_SECTION_BITS};
use crate::registry::Registry;
use crate::stream::FrameSynchronizer;
use crate::transport::TransportChannels;
use bytes::Bytes;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// CFG-TMODE3 flags value selecting survey-in mode (0 = disabled, 2 = fixed)
const TMODE_SURVEY_IN: u16 = 1;

/// Configure survey-in mode and wait for the save acknowledgement
pub async fn run(
    mut channels: TransportChannels,
    shutdown: Arc<AtomicBool>,
    min_dur: u32,
    acc_limit: u32,
) -> Result<()> {
    let registry = Registry::global();

    let tmode3 = Record::new()
        .with("version", 0u8)
        .with("reserved1", 1u8)
        .with("flags", TMODE_SURVEY_IN)
        .with("ecefXOrLat", 0i32)
        .with("ecefYOrLon", 0i32)
        .with("ecefZOrAlt", 0i32)
        .with("ecefXOrLatHP", 1i8)
        .with("ecefYOrLonHP", 1i8)
        .with("ecefZOrAlHP", 1i8)
        .with("reserved2", 1u8)
        .with("fixedPosAcc", 0u32)
        .with("svinMinDur", min_dur)
        .with("svinAccLimit", acc_limit)
        .with("reserved3_1", 1u16)
        .with("reserved3_2", 1u16)
        .with("reserved3_3", 1u16)
        .with("reserved3_4", 1u16);
    let tmode3_frame = encode_frame(registry, "CFG-TMODE3", 40, &[tmode3])?;

    let save_mask = build_mask(&["all"], CFG_SECTION_BITS)?;
    let cfg = Record::new()
        .with("clearMask", 0u32)
        .with("saveMask", save_mask)
        .with("loadMask", 0u32);
    let cfg_frame = encode_frame(registry, "CFG-CFG", 12, &[cfg])?;

    info!(min_dur, acc_limit, "enabling survey-in mode");
    send(&channels, tmode3_frame).await?;
    send(&channels, cfg_frame).await?;

    // The receiver acknowledges each CFG write with ACK-ACK carrying the
    // acknowledged class and id; we are done once the CFG-CFG save lands.
    let cfg_cfg = registry.lookup_by_name("CFG-CFG")?;
    let mut parser = FrameSynchronizer::new(registry);

    loop {
        tokio::select! {
            biased;

            // Periodic shutdown check
            _ = tokio::time::sleep(Duration::from_millis(100)) => {
                if shutdown.load(Ordering::Relaxed) {
                    break;
                }
            }

            data = channels.rx.recv() => {
                let Some(chunk) = data else {
                    return Err(UbxError::Disconnected);
                };
                let mut saved = false;
                let mut rejected = false;
                parser.feed(&chunk, |message| {
                    let acked_id = message.records[0].int("MsgID");
                    match message.name {
                        "ACK-ACK" if acked_id == Some(cfg_cfg.id as i64) => saved = true,
                        "ACK-NACK" if acked_id == Some(cfg_cfg.id as i64) => rejected = true,
                        _ => {}
                    }
                });
                if rejected {
                    warn!("receiver rejected the configuration save");
                    break;
                }
                if saved {
                    println!("survey-in configuration saved");
                    break;
                }
            }
        }
    }

    Ok(())
}

async fn send(channels: &TransportChannels, frame: Vec<u8>) -> Result<()> {
    channels
        .tx
        .send(Bytes::from(frame))
        .await
        .map_err(|_| UbxError::Disconnected)
}
