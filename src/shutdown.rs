use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::sleep,
    time::{Duration, Instant},
};

use anyhow::Context;

use crate::signal::{register_flag, Signal};

// Upper bound on how long a shutdown request can go unnoticed while waiting
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Cancellation token checked by the heartbeat loop.
///
/// Clones share the same state, so any clone can stop the loop.
#[derive(Clone, Debug, Default)]
pub struct Shutdown {
    requested: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token that is also triggered when one of `signals` is delivered to the process
    pub fn from_signals(signals: &[Signal]) -> Result<Self, anyhow::Error> {
        let shutdown = Self::new();
        register_flag(signals, &shutdown.requested)
            .with_context(|| format!("Couldn't register {:?}", signals))?;

        Ok(shutdown)
    }

    pub fn trigger(&self) {
        self.requested.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Sleep for `timeout`, waking early on shutdown. Returns `true` if woken by shutdown.
    ///
    /// A timeout too large to represent as an `Instant` waits until shutdown.
    pub fn wait(&self, timeout: Duration) -> bool {
        let deadline = Instant::now().checked_add(timeout);
        loop {
            if self.is_triggered() {
                return true;
            }

            let remaining = match deadline {
                Some(deadline) => deadline.saturating_duration_since(Instant::now()),
                None => POLL_INTERVAL,
            };
            if remaining.is_zero() {
                return false;
            }
            sleep(remaining.min(POLL_INTERVAL));
        }
    }
}
