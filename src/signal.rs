use std::sync::{atomic::AtomicBool, Arc};

use anyhow::bail;
use serde::Deserialize;
use signal_hook::consts::FORBIDDEN;

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum Signal {
    SIGHUP = libc::SIGHUP,
    SIGINT = libc::SIGINT,
    SIGQUIT = libc::SIGQUIT,
    SIGKILL = libc::SIGKILL,
    SIGUSR1 = libc::SIGUSR1,
    SIGUSR2 = libc::SIGUSR2,
    SIGALRM = libc::SIGALRM,
    SIGTERM = libc::SIGTERM,
    SIGSTOP = libc::SIGSTOP,
}

/// Set `flag` whenever one of `signals` is delivered to the process.
///
/// SIGKILL and SIGSTOP cannot be caught and are rejected before anything is registered.
pub fn register_flag(signals: &[Signal], flag: &Arc<AtomicBool>) -> Result<(), anyhow::Error> {
    if let Some(signal) = signals.iter().find(|s| FORBIDDEN.contains(&(**s as i32))) {
        bail!("{:?} cannot be caught", signal);
    }

    for signal in signals {
        signal_hook::flag::register(*signal as i32, Arc::clone(flag))?;
    }

    Ok(())
}
