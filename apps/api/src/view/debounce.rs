#![allow(dead_code)]

//! Search debounce with supersede-on-new-request semantics.
//!
//! Every trigger bumps a shared generation counter, then waits out the
//! debounce delay. Only the newest trigger survives the wait and gets a
//! `FetchTicket`; a ticket in turn goes stale the moment a newer trigger
//! starts, so a late-arriving response can be discarded before display.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Pause required after the last keystroke before a fetch is issued.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Debouncer::new(SEARCH_DEBOUNCE)
    }
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Registers a trigger and waits out the delay. Returns `None` if a
    /// newer trigger arrived in the meantime, in which case the caller must not fetch.
    pub async fn acquire(&self) -> Option<FetchTicket> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.delay).await;

        if self.generation.load(Ordering::SeqCst) == generation {
            Some(FetchTicket {
                generation,
                latest: Arc::clone(&self.generation),
            })
        } else {
            None
        }
    }
}

/// Proof that a fetch was the most recent one when issued. Check
/// `is_current` again when the response arrives; a stale ticket means a
/// newer request started while this one was in flight.
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    latest: Arc<AtomicU64>,
}

impl FetchTicket {
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.generation
    }
}
