//! Busy Indicator
//!
//! Reference-counted "network operation in flight" gate consumed by the
//! global overlay. Visible while at least one `show()` is unmatched.

use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;

#[derive(Debug)]
struct BusyState {
    pending: Mutex<usize>,
    visible: watch::Sender<bool>,
}

/// Cheap to clone, all clones share the same counter
#[derive(Debug, Clone)]
pub struct BusyIndicator {
    state: Arc<BusyState>,
}

impl BusyIndicator {
    pub fn new() -> Self {
        let (visible, _) = watch::channel(false);
        Self {
            state: Arc::new(BusyState {
                pending: Mutex::new(0),
                visible,
            }),
        }
    }

    pub fn show(&self) {
        self.update(|n| n.saturating_add(1));
    }

    /// Never goes below zero
    pub fn hide(&self) {
        self.update(|n| n.saturating_sub(1));
    }

    /// Show now, hide when the guard drops
    pub fn begin(&self) -> BusyGuard {
        self.show();
        BusyGuard {
            indicator: self.clone(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.pending() > 0
    }

    pub fn pending(&self) -> usize {
        *self.state.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Derived boolean stream, changes only on idle/busy edges
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.state.visible.subscribe()
    }

    fn update(&self, step: impl FnOnce(usize) -> usize) {
        let mut pending = self.state.pending.lock().unwrap_or_else(PoisonError::into_inner);
        *pending = step(*pending);
        let busy = *pending > 0;
        self.state.visible.send_if_modified(|visible| {
            if *visible == busy {
                return false;
            }
            *visible = busy;
            true
        });
        tracing::trace!(pending = *pending, "busy indicator updated");
    }
}

impl Default for BusyIndicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the indicator busy until dropped
#[derive(Debug)]
#[must_use = "the indicator hides as soon as the guard is dropped"]
pub struct BusyGuard {
    indicator: BusyIndicator,
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.indicator.hide();
    }
}
