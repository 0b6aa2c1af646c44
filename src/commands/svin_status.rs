//! Survey-in status: poll NAV-SVIN and print progress
//!
//! Sends a zero-length NAV-SVIN poll on every timer tick and prints the
//! mean position and accuracy from each response. An idle counter
//! decrements per tick and is refreshed by every NAV-SVIN answer; when it
//! runs out the receiver is considered unresponsive and the loop ends.

use crate::codec::{encode_frame, Record};
use crate::error::Result;
use crate::registry::Registry;
use crate::stream::FrameSynchronizer;
use crate::transport::TransportChannels;
use bytes::Bytes;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

/// Poll NAV-SVIN every `interval_ms` until shutdown, disconnect or
/// `idle_ticks` polls pass without a survey-in answer
pub async fn run(
    mut channels: TransportChannels,
    shutdown: Arc<AtomicBool>,
    interval_ms: u64,
    idle_ticks: u32,
) -> Result<()> {
    let registry = Registry::global();
    let poll = Bytes::from(encode_frame(registry, "NAV-SVIN", 0, &[])?);
    let mut parser = FrameSynchronizer::new(registry);
    let mut remaining = idle_ticks;
    let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));

    loop {
        tokio::select! {
            biased;

            // Periodic shutdown check
            _ = tokio::time::sleep(Duration::from_millis(100)) => {
                if shutdown.load(Ordering::Relaxed) {
                    break;
                }
            }

            _ = ticker.tick() => {
                if remaining == 0 {
                    warn!("no NAV-SVIN response, giving up");
                    break;
                }
                remaining -= 1;
                if channels.tx.send(poll.clone()).await.is_err() {
                    // Transport stopped
                    break;
                }
            }

            data = channels.rx.recv() => {
                match data {
                    Some(chunk) => {
                        let mut answered = false;
                        parser.feed(&chunk, |message| {
                            if message.name == "NAV-SVIN" {
                                answered = true;
                                print_svin(&message.records[0]);
                            }
                        });
                        if answered {
                            remaining = idle_ticks;
                        }
                    }
                    None => break,
                }
            }
        }
    }

    Ok(())
}

fn print_svin(record: &Record) {
    println!(
        "meanX:{} meanY:{} meanZ:{} meanAcc:{} active:{} valid:{}",
        record.int("meanX").unwrap_or_default(),
        record.int("meanY").unwrap_or_default(),
        record.int("meanZ").unwrap_or_default(),
        record.int("meanAcc").unwrap_or_default(),
        record.int("active").unwrap_or_default(),
        record.int("valid").unwrap_or_default(),
    );
}
