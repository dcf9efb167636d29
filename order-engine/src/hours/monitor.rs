//! Open/closed status evaluation
//!
//! Pure given `(time of day, window)`: the monitor holds nothing beyond
//! the configured window and the last computed status.

use super::clock::{Clock, SystemClock};
use parking_lot::RwLock;
use shared::menu::MerchantConfig;
use std::sync::Arc;

/// Status message while the merchant is inside its window
pub const OPEN_MESSAGE: &str = "Open now";

/// Daily opening window, raw "HH:MM" bounds
///
/// Absence of either bound means the merchant is always open. A bound that
/// does not parse as "HH:MM" degrades the window to always open as well,
/// consistent with the document leniency policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpeningWindow {
    pub opens_at: Option<String>,
    pub closes_at: Option<String>,
}

impl OpeningWindow {
    pub fn from_config(config: &MerchantConfig) -> Self {
        Self {
            opens_at: config.opens_at.clone(),
            closes_at: config.closes_at.clone(),
        }
    }

    /// Both bounds as minutes since midnight, or `None` when the window is
    /// absent or malformed
    fn bounds(&self) -> Option<(u32, u32)> {
        let open = parse_minutes(self.opens_at.as_deref()?)?;
        let close = parse_minutes(self.closes_at.as_deref()?)?;
        Some((open, close))
    }
}

/// "HH:MM" to minutes since midnight
fn parse_minutes(raw: &str) -> Option<u32> {
    let (h, m) = raw.split_once(':')?;
    let h: u32 = h.trim().parse().ok()?;
    let m: u32 = m.trim().parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// Live open/closed status with a human-readable message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    pub is_open: bool,
    pub message: String,
}

impl Default for StoreStatus {
    fn default() -> Self {
        Self {
            is_open: true,
            message: OPEN_MESSAGE.to_string(),
        }
    }
}

/// Pure status evaluation for a time of day in minutes since midnight
///
/// Both bounds are inclusive. A close earlier than its open means the
/// window crosses midnight: open iff `t >= open || t <= close`.
pub fn evaluate(window: &OpeningWindow, minutes: u32) -> StoreStatus {
    let Some((open, close)) = window.bounds() else {
        return StoreStatus::default();
    };

    let is_open = if close < open {
        minutes >= open || minutes <= close
    } else {
        minutes >= open && minutes <= close
    };

    if is_open {
        StoreStatus::default()
    } else {
        // opens_at is present whenever bounds parsed; shown as given
        let opens = window.opens_at.as_deref().unwrap_or_default();
        StoreStatus {
            is_open: false,
            message: format!("Opens at {opens}"),
        }
    }
}

/// Opening-hours monitor
///
/// Holds the configured window and publishes the last computed status for
/// display. Gating callers use [`evaluate_now`](Self::evaluate_now) so a
/// published value up to a polling interval old can never admit an action
/// past the closing boundary.
pub struct HoursMonitor {
    clock: Arc<dyn Clock>,
    window: RwLock<OpeningWindow>,
    status: RwLock<StoreStatus>,
}

impl HoursMonitor {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            window: RwLock::new(OpeningWindow::default()),
            status: RwLock::new(StoreStatus::default()),
        }
    }

    /// Install a new window and evaluate it immediately
    pub fn set_window(&self, window: OpeningWindow) -> StoreStatus {
        *self.window.write() = window;
        self.evaluate_now()
    }

    /// Re-sample the clock, recompute, publish and return the status
    pub fn evaluate_now(&self) -> StoreStatus {
        let minutes = self.clock.minutes_now();
        let status = evaluate(&self.window.read(), minutes);

        let mut published = self.status.write();
        if published.is_open != status.is_open {
            tracing::info!(is_open = status.is_open, message = %status.message, "store status changed");
        }
        *published = status.clone();
        status
    }

    /// Last published status, without re-evaluation (display use)
    pub fn current(&self) -> StoreStatus {
        self.status.read().clone()
    }
}

impl Default for HoursMonitor {
    fn default() -> Self {
        Self::new()
    }
}
