use std::{io::Write, time::Duration};

use anyhow::Context;
use chrono::{DateTime, Local, TimeDelta};

use crate::{config::HeartbeatConfig, identity::ProcessIdentity, shutdown::Shutdown};

const GREETING: &str = "Hello, World! from";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.9f %z";

/// Time printed with a beat. Always one hour ahead of the wall clock.
pub fn display_time(now: DateTime<Local>) -> DateTime<Local> {
    now + TimeDelta::hours(1)
}

pub fn greeting(name: &str, at: &DateTime<Local>) -> String {
    format!("{} {} {}", GREETING, name, at.format(TIMESTAMP_FORMAT))
}

/// Periodic greeting for one process identity
#[derive(Clone, Debug)]
pub struct Heartbeat {
    identity: ProcessIdentity,
    interval: Duration,
    max_beats: Option<u64>,
}

impl Heartbeat {
    pub fn new(identity: ProcessIdentity, config: &HeartbeatConfig) -> Self {
        // Negative ids sleep for nothing, same as a zero id
        let seconds = u64::try_from(identity.id)
            .unwrap_or(0)
            .saturating_mul(config.seconds_per_id);

        Self {
            identity,
            interval: Duration::from_secs(seconds),
            max_beats: config.max_beats,
        }
    }

    pub fn identity(&self) -> &ProcessIdentity {
        &self.identity
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Print a greeting, then sleep for the interval, until `shutdown` is triggered or the beat
    /// limit is reached. Returns the number of greetings written.
    pub fn run<W: Write>(&self, out: &mut W, shutdown: &Shutdown) -> Result<u64, anyhow::Error> {
        self.run_with_clock(out, shutdown, Local::now)
    }

    fn run_with_clock<W, C>(
        &self,
        out: &mut W,
        shutdown: &Shutdown,
        now: C,
    ) -> Result<u64, anyhow::Error>
    where
        W: Write,
        C: Fn() -> DateTime<Local>,
    {
        let mut beats = 0;
        while !shutdown.is_triggered() {
            writeln!(out, "{}", greeting(&self.identity.name, &display_time(now())))
                .and_then(|_| out.flush())
                .context("Couldn't write heartbeat")?;
            beats += 1;
            tracing::debug!(beats, "Heartbeat sent");

            if self.max_beats.is_some_and(|max| beats >= max) {
                tracing::info!("Reached {} beats, stopping", beats);
                break;
            }

            if shutdown.wait(self.interval) {
                break;
            }
        }

        Ok(beats)
    }
}
