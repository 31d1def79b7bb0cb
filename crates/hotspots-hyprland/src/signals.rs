//! Termination signal handling without async signal handlers.
//!
//! `SIGINT`, `SIGTERM` and `SIGHUP` are blocked on the main thread
//! before any other thread starts, so every thread inherits the mask.
//! A dedicated thread then waits for them synchronously.

use nix::sys::signal::{SigSet, Signal};

use hotspots_core::HotspotsResult;

fn termination_set() -> SigSet {
    let mut set = SigSet::empty();
    set.add(Signal::SIGINT);
    set.add(Signal::SIGTERM);
    set.add(Signal::SIGHUP);
    set
}

/// Blocks the termination signals for the calling thread and the
/// threads it spawns afterwards.
pub fn block_termination() -> HotspotsResult<()> {
    termination_set().thread_block()?;
    Ok(())
}

/// Blocks until a termination signal arrives and returns it.
pub fn wait_for_termination() -> HotspotsResult<Signal> {
    Ok(termination_set().wait()?)
}
