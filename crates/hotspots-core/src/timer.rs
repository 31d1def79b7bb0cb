//! Generation-stamped delayed actions.
//!
//! All delayed work runs on one scheduler thread owned by the
//! [`TimerEngine`]. Every scheduled entry captures the generation counter
//! at schedule time and is honoured only if the counter is unchanged when
//! its deadline passes. Bumping the counter is therefore an O(1)
//! cancel-all: nothing is ever aborted mid-wait, stale entries are simply
//! discarded when the scheduler next looks at them.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// How long a workspace switch keeps the bars up before hiding starts.
pub const WORKSPACE_GRACE: Duration = Duration::from_millis(1000);

/// The kinds of delayed action the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Hide every visible bar.
    Hide,
    /// Wait out a burst of workspace switches, then start a hide timer
    /// with the given delay.
    WorkspaceGrace { hide_delay: Duration },
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    kind: TimerKind,
    deadline: Instant,
    generation: u64,
}

enum TimerMsg {
    Schedule(Pending),
    Shutdown,
}

/// Owns the scheduler thread and the generation counter.
///
/// Dropping the engine shuts the scheduler down and joins it.
pub struct TimerEngine {
    generation: Arc<AtomicU64>,
    alive: Arc<AtomicBool>,
    tx: Sender<TimerMsg>,
    thread: Option<thread::JoinHandle<()>>,
}

impl TimerEngine {
    /// Starts the scheduler. `on_hide` runs on the scheduler thread each
    /// time a hide timer fires without having been superseded.
    pub fn start<F>(on_hide: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let generation = Arc::new(AtomicU64::new(0));
        let alive = Arc::new(AtomicBool::new(true));
        let (tx, rx) = mpsc::channel::<TimerMsg>();

        let scheduler = Scheduler {
            generation: generation.clone(),
            alive: alive.clone(),
            pending: Vec::new(),
        };
        let thread = thread::Builder::new()
            .name("hotspots-timer".into())
            .spawn(move || scheduler.run(&rx, &on_hide))
            .ok();

        if thread.is_none() {
            crate::log_error!("Failed to spawn timer thread; delayed hides are disabled");
        }

        Self {
            generation,
            alive,
            tx,
            thread,
        }
    }

    /// The current generation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Returns whether a timer stamped with `generation` is still live.
    pub fn is_current(&self, generation: u64) -> bool {
        self.alive.load(Ordering::SeqCst) && self.generation() == generation
    }

    /// Invalidates every pending timer.
    pub fn cancel(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Starts a hide timer, superseding anything already pending.
    pub fn schedule_hide(&self, delay: Duration) -> u64 {
        self.schedule(TimerKind::Hide, delay)
    }

    /// Starts the workspace grace timer, superseding anything pending.
    pub fn schedule_workspace_grace(&self, grace: Duration, hide_delay: Duration) -> u64 {
        self.schedule(TimerKind::WorkspaceGrace { hide_delay }, grace)
    }

    fn schedule(&self, kind: TimerKind, delay: Duration) -> u64 {
        let generation = self.cancel();
        let pending = Pending {
            kind,
            deadline: Instant::now() + delay,
            generation,
        };
        if self.tx.send(TimerMsg::Schedule(pending)).is_err() {
            crate::log_warn!("Timer scheduler is gone; dropping {kind:?}");
        }
        generation
    }

    /// Invalidates all timers and waits for the scheduler to exit.
    ///
    /// Safe to call more than once.
    pub fn shutdown(&mut self) {
        self.alive.store(false, Ordering::SeqCst);
        self.cancel();
        let _ = self.tx.send(TimerMsg::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for TimerEngine {
    fn drop(&mut self) {
        self.shutdown();
    }
}

struct Scheduler {
    generation: Arc<AtomicU64>,
    alive: Arc<AtomicBool>,
    pending: Vec<Pending>,
}

impl Scheduler {
    fn run(mut self, rx: &mpsc::Receiver<TimerMsg>, on_hide: &dyn Fn()) {
        loop {
            let next_deadline = self.pending.iter().map(|p| p.deadline).min();
            let msg = match next_deadline {
                Some(deadline) => {
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match rx.recv_timeout(wait) {
                        Ok(msg) => Some(msg),
                        Err(RecvTimeoutError::Timeout) => None,
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                None => match rx.recv() {
                    Ok(msg) => Some(msg),
                    Err(_) => break,
                },
            };

            match msg {
                Some(TimerMsg::Schedule(pending)) => self.pending.push(pending),
                Some(TimerMsg::Shutdown) => break,
                None => {}
            }

            if !self.alive.load(Ordering::SeqCst) {
                break;
            }
            self.fire_due(on_hide);
        }
        crate::log_debug!("Timer scheduler exited");
    }

    fn fire_due(&mut self, on_hide: &dyn Fn()) {
        let current = self.generation.load(Ordering::SeqCst);
        self.pending.retain(|p| p.generation == current);

        let now = Instant::now();
        let (due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.deadline <= now);
        self.pending = waiting;

        for timer in due {
            // Re-check right before acting: the event thread may have
            // cancelled while we were busy with an earlier entry.
            if !self.alive.load(Ordering::SeqCst)
                || self.generation.load(Ordering::SeqCst) != timer.generation
            {
                continue;
            }
            match timer.kind {
                TimerKind::Hide => {
                    crate::log_debug!("Hide timer fired (generation {})", timer.generation);
                    on_hide();
                }
                TimerKind::WorkspaceGrace { hide_delay } => {
                    let Some(generation) = advance_if_current(&self.generation, timer.generation)
                    else {
                        crate::log_debug!("Workspace grace cancelled before chaining");
                        continue;
                    };
                    crate::log_debug!("Workspace grace elapsed, arming hide timer");
                    self.pending.push(Pending {
                        kind: TimerKind::Hide,
                        deadline: Instant::now() + hide_delay,
                        generation,
                    });
                }
            }
        }
    }
}

/// Moves the counter from `stamped` to the next generation, or returns
/// `None` if something else bumped it first.
fn advance_if_current(generation: &AtomicU64, stamped: u64) -> Option<u64> {
    let next = stamped.wrapping_add(1);
    generation
        .compare_exchange(stamped, next, Ordering::SeqCst, Ordering::SeqCst)
        .ok()
        .map(|_| next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    fn counting_engine() -> (TimerEngine, Arc<AtomicUsize>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let engine = TimerEngine::start(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (engine, fired)
    }

    #[test]
    fn hide_timer_fires_after_delay() {
        // Arrange
        let (engine, fired) = counting_engine();

        // Act
        engine.schedule_hide(Duration::from_millis(30));
        thread::sleep(Duration::from_millis(10));
        let early = fired.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(120));

        // Assert
        assert_eq!(early, 0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn newer_hide_timer_supersedes_older_one() {
        // Arrange
        let fired_at = Arc::new(Mutex::new(Vec::new()));
        let log = fired_at.clone();
        let engine = TimerEngine::start(move || {
            log.lock().unwrap().push(Instant::now());
        });

        // Act
        engine.schedule_hide(Duration::from_millis(40));
        let b_scheduled = Instant::now();
        engine.schedule_hide(Duration::from_millis(90));
        thread::sleep(Duration::from_millis(250));

        // Assert
        let fired = fired_at.lock().unwrap();
        assert_eq!(fired.len(), 1);
        assert!(fired[0].duration_since(b_scheduled) >= Duration::from_millis(90));
    }

    #[test]
    fn cancel_before_wake_prevents_action() {
        // Arrange
        let (engine, fired) = counting_engine();
        let stamped = engine.schedule_hide(Duration::from_millis(50));

        // Act
        thread::sleep(Duration::from_millis(45));
        engine.cancel();
        thread::sleep(Duration::from_millis(100));

        // Assert
        assert!(!engine.is_current(stamped));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn every_schedule_bumps_generation() {
        // Arrange
        let (engine, _) = counting_engine();
        let start = engine.generation();

        // Act
        let a = engine.schedule_hide(Duration::from_secs(10));
        let b = engine.schedule_workspace_grace(Duration::from_secs(10), Duration::ZERO);
        let c = engine.cancel();

        // Assert
        assert!(start < a && a < b && b < c);
        assert!(engine.is_current(c));
    }

    #[test]
    fn workspace_grace_chains_into_hide() {
        // Arrange
        let (engine, fired) = counting_engine();

        // Act
        engine.schedule_workspace_grace(Duration::from_millis(30), Duration::from_millis(30));
        thread::sleep(Duration::from_millis(45));
        let after_grace = fired.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(100));

        // Assert
        assert_eq!(after_grace, 0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cancel_during_grace_stops_the_chain() {
        // Arrange
        let (engine, fired) = counting_engine();
        engine.schedule_workspace_grace(Duration::from_millis(30), Duration::from_millis(30));

        // Act
        thread::sleep(Duration::from_millis(10));
        engine.cancel();
        thread::sleep(Duration::from_millis(120));

        // Assert
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn chaining_does_not_overwrite_a_concurrent_cancel() {
        // Arrange
        let generation = AtomicU64::new(5);
        let stamped = 5;

        // Act: a cancel lands between the liveness check and the chain
        generation.fetch_add(1, Ordering::SeqCst);
        let chained = advance_if_current(&generation, stamped);

        // Assert
        assert_eq!(chained, None);
        assert_eq!(generation.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn chaining_claims_the_next_generation_when_uncontested() {
        // Arrange
        let generation = AtomicU64::new(5);

        // Act
        let chained = advance_if_current(&generation, 5);

        // Assert
        assert_eq!(chained, Some(6));
        assert_eq!(generation.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn shutdown_invalidates_pending_timers_and_joins() {
        // Arrange
        let (mut engine, fired) = counting_engine();
        let stamped = engine.schedule_hide(Duration::from_millis(30));

        // Act
        engine.shutdown();
        engine.shutdown();
        thread::sleep(Duration::from_millis(60));

        // Assert
        assert!(!engine.is_current(stamped));
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
