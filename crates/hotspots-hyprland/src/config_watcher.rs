//! Polls the config file and sends validated reloads.
//!
//! The file's mtime is compared once per second. When it changes the
//! file is parsed, and only configs that parse are forwarded; a broken
//! edit is logged and skipped until the next save.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, SystemTime};

use hotspots_core::config::{self, Config};

/// Interval between mtime checks.
const POLL_INTERVAL: Duration = Duration::from_secs(1);
/// Granularity of stop-flag checks while waiting.
const STOP_CHECK: Duration = Duration::from_millis(100);

/// Runs the watcher loop. Blocks until the stop flag is set or the
/// receiver is dropped.
pub fn watch(tx: Sender<Config>, stop: Arc<AtomicBool>) {
    let Some(path) = config::config_path() else {
        hotspots_core::log_info!("config path not found, watcher exiting");
        return;
    };
    let mut last = mtime(&path);

    while wait(&stop) {
        let current = mtime(&path);
        if current == last {
            continue;
        }
        last = current;
        if current.is_none() {
            hotspots_core::log_info!("config.toml removed, keeping current settings");
            continue;
        }

        match config::try_load() {
            Ok(cfg) => {
                hotspots_core::log_info!("config.toml changed, reloading");
                if tx.send(cfg).is_err() {
                    break;
                }
            }
            Err(e) => hotspots_core::log_warn!("config.toml invalid, skipping: {e}"),
        }
    }
}

/// Sleeps one poll interval. Returns `false` once stop is requested.
fn wait(stop: &AtomicBool) -> bool {
    let mut waited = Duration::ZERO;
    while waited < POLL_INTERVAL {
        if stop.load(Ordering::Relaxed) {
            return false;
        }
        thread::sleep(STOP_CHECK);
        waited += STOP_CHECK;
    }
    !stop.load(Ordering::Relaxed)
}

/// Returns the modification time for a path, or `None` if unavailable.
fn mtime(path: &Path) -> Option<SystemTime> {
    path.metadata().ok().and_then(|m| m.modified().ok())
}
