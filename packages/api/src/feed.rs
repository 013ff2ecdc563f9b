//! # Server side of the live response subscription
//!
//! A process-wide insert sequence over the response collection. Every
//! successful insert bumps the sequence; [`wait_past`] parks a long-poll
//! request until the sequence moves past the value the client last saw
//! (or a bound elapses), at which point the caller re-reads the full
//! collection. Clients always receive the full current set, never a
//! delta, so delivery order across requests cannot corrupt the dashboard.

use std::sync::OnceLock;
use std::time::Duration;

use tokio::sync::watch;

static FEED: OnceLock<watch::Sender<u64>> = OnceLock::new();

fn sender() -> &'static watch::Sender<u64> {
    FEED.get_or_init(|| watch::channel(0).0)
}

/// Record one insert into the response collection.
pub fn notify_inserted() {
    sender().send_modify(|seq| *seq += 1);
}

/// The current insert sequence.
pub fn current_seq() -> u64 {
    *sender().subscribe().borrow()
}

/// Wait until the sequence exceeds `since`, bounded by `timeout`.
///
/// Returns the sequence observed when waking, which may still equal
/// `since` after a timeout — callers pass it straight back on their next
/// poll.
pub async fn wait_past(since: u64, timeout: Duration) -> u64 {
    let mut rx = sender().subscribe();
    let _ = tokio::time::timeout(timeout, async {
        loop {
            if *rx.borrow_and_update() > since {
                break;
            }
            if rx.changed().await.is_err() {
                break;
            }
        }
    })
    .await;
    let seq = *rx.borrow();
    seq
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_wait_returns_immediately_once_sequence_passed() {
        let before = current_seq();
        notify_inserted();
        let seq = wait_past(before, Duration::from_secs(5)).await;
        assert!(seq > before);
    }

    #[tokio::test]
    async fn test_wait_times_out_without_inserts() {
        let seq = current_seq();
        let woke = wait_past(seq + 1000, Duration::from_millis(20)).await;
        assert!(woke <= seq + 1000);
    }
}
