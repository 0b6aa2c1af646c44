//! Monitor: decode and print every UBX message from the receiver

use crate::codec::DecodedMessage;
use crate::error::Result;
use crate::registry::Registry;
use crate::stream::FrameSynchronizer;
use crate::transport::TransportChannels;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Run until shutdown or transport disconnect, printing each decoded frame
pub async fn run(mut channels: TransportChannels, shutdown: Arc<AtomicBool>) -> Result<()> {
    let mut parser = FrameSynchronizer::new(Registry::global());
    info!("listening for UBX traffic");

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
                match data {
                    Some(chunk) => parser.feed(&chunk, print_message),
                    // Channel closed = transport disconnected
                    None => break,
                }
            }
        }
    }

    Ok(())
}

fn print_message(message: DecodedMessage) {
    println!("{} {}", message.name, message.records[0]);
    for block in &message.records[1..] {
        println!("  {}", block);
    }
}
