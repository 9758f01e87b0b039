use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Observes Ctrl+C so an in-flight prompt can treat it as "no action taken"
/// instead of dying mid-write. A second Ctrl+C force-exits.
pub struct InterruptWatcher {
    interrupted: Arc<AtomicBool>,
}

impl InterruptWatcher {
    /// Install the process signal handler. If a handler is already
    /// registered (another watcher, or an embedding application), the
    /// watcher degrades to one that never reports an interrupt.
    pub fn install() -> Self {
        let interrupted = Arc::new(AtomicBool::new(false));
        let flag = interrupted.clone();

        let result = ctrlc::set_handler(move || {
            if flag.swap(true, Ordering::SeqCst) {
                eprintln!("\nForce stopping...");
                std::process::exit(130);
            }
            eprintln!("\nInput cancelled by user.");
        });

        match result {
            Ok(()) => Self { interrupted },
            Err(_) => Self::disarmed(),
        }
    }

    /// A watcher that never fires. Used by tests and scripted runs.
    pub fn disarmed() -> Self {
        Self {
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    pub fn trigger(&self) {
        self.interrupted.store(true, Ordering::SeqCst);
    }

    pub fn reset(&self) {
        self.interrupted.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_watcher_never_fires() {
        let watcher = InterruptWatcher::disarmed();
        assert!(!watcher.is_interrupted());
    }

    #[test]
    fn test_trigger_and_reset() {
        let watcher = InterruptWatcher::disarmed();

        watcher.trigger();
        assert!(watcher.is_interrupted());

        watcher.reset();
        assert!(!watcher.is_interrupted());
    }
}
