//! Cart line models

use crate::menu::MenuItem;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Chosen option names per customization group key
///
/// Sets make duplicate choices impossible by construction; choice order is
/// irrelevant to pricing and to the order record.
pub type Selection = BTreeMap<String, BTreeSet<String>>;

/// One priced, customized cart entry
///
/// Created once per add-to-cart action and owned exclusively by the cart
/// manager. `quantity` is structural and always 1 at creation: repeated
/// adds of an identical item produce separate lines rather than merging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Opaque unique token
    pub id: String,
    pub item: MenuItem,
    pub selections: Selection,
    /// Per-unit price computed at add time (base + selected extras)
    pub total_price: f64,
    pub quantity: u32,
}

impl CartLine {
    /// All selected option names flattened across groups
    ///
    /// Group provenance is intentionally dropped here; the order record
    /// carries a flat extras list.
    pub fn extra_names(&self) -> Vec<String> {
        self.selections
            .values()
            .flat_map(|names| names.iter().cloned())
            .collect()
    }
}
