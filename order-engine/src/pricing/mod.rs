//! Customization Pricing Module
//!
//! Determines which customization groups apply to a selected item and
//! computes the item's per-unit price from its base price plus selected
//! extras.

mod calculator;

pub use calculator::*;
