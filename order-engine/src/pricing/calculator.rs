//! Item price calculator
//!
//! Uses rust_decimal for precision calculations; models keep `f64` for the
//! JSON wire and convert at the arithmetic boundary.

use rust_decimal::prelude::*;
use shared::menu::{ADDON_GROUP_KEY, CustomizationGroup, FLAVOR_GROUP_KEYS, MenuCatalog, MenuItem};
use shared::order::Selection;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// True when the item declares either customization flag
///
/// Items without a flag skip customization entirely and are added to the
/// cart at base price with an empty selection.
pub fn needs_customization(item: &MenuItem) -> bool {
    item.has_flavor_options || item.has_addon_options
}

/// Whether a customization group applies to the given item
///
/// Flavor/filling groups require the item's flavor flag; the addon group
/// requires the addon flag. Any other group key is never applicable to an
/// item, regardless of how it is named.
pub fn is_applicable(group_key: &str, item: &MenuItem) -> bool {
    if FLAVOR_GROUP_KEYS.contains(&group_key) {
        item.has_flavor_options
    } else if group_key == ADDON_GROUP_KEY {
        item.has_addon_options
    } else {
        false
    }
}

/// The subset of catalog groups applicable to the item
pub fn applicable_groups<'a>(
    catalog: &'a MenuCatalog,
    item: &MenuItem,
) -> Vec<&'a CustomizationGroup> {
    catalog
        .groups
        .iter()
        .filter(|g| is_applicable(&g.key, item))
        .collect()
}

/// Per-unit price: base price plus every resolvable selected extra
///
/// Unresolved names are stale selections, not errors, and contribute
/// nothing; so do options without a price. The result never decreases as
/// names are added to the selection.
pub fn item_total(item: &MenuItem, selection: &Selection, catalog: &MenuCatalog) -> f64 {
    let mut total = to_decimal(item.base_price());
    for group in applicable_groups(catalog, item) {
        let Some(chosen) = selection.get(&group.key) else {
            continue;
        };
        for name in chosen {
            if let Some(price) = group.find(name).and_then(|option| option.price) {
                total += to_decimal(price);
            }
        }
    }
    to_f64(total)
}
