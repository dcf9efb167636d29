//! Opening Hours Module
//!
//! Computes the merchant's live open/closed status from its configured
//! daily window, including windows that cross midnight. A cancellable
//! watcher task re-evaluates the status periodically; callers that gate
//! user actions re-evaluate synchronously instead of trusting the
//! published value.

mod clock;
mod monitor;
mod watcher;

pub use clock::{Clock, SystemClock};
pub use monitor::{HoursMonitor, OPEN_MESSAGE, OpeningWindow, StoreStatus, evaluate};
pub use watcher::StatusWatcher;
