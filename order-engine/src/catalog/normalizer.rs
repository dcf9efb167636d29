//! Menu document normalization
//!
//! The source document is operator-authored and may contain partial data,
//! so malformed entries are skipped silently instead of failing the whole
//! document.

use serde_json::Value;
use shared::menu::{
    ALL_ITEMS_KEY, CATEGORY_NAME_KEY, CategorySection, CustomizationGroup, MenuCatalog,
    MenuDocument, MenuItem,
};

/// Normalize a raw menu document into sections and customization groups
pub fn normalize(doc: &MenuDocument) -> MenuCatalog {
    MenuCatalog {
        sections: build_sections(doc),
        groups: build_groups(doc),
    }
}

/// Category sections from the `categorias` map
///
/// Each category sub-object holds a metadata name entry plus arbitrarily
/// keyed item entries. Sections with zero well-formed items are dropped.
fn build_sections(doc: &MenuDocument) -> Vec<CategorySection> {
    let Some(categories) = &doc.categories else {
        return Vec::new();
    };

    let mut sections = Vec::new();
    for (key, value) in categories {
        let Some(entries) = value.as_object() else {
            tracing::debug!(category = %key, "skipping non-object category entry");
            continue;
        };

        let display_name = entries
            .get(CATEGORY_NAME_KEY)
            .and_then(Value::as_str)
            .unwrap_or(key.as_str())
            .to_string();

        let items: Vec<MenuItem> = entries
            .iter()
            .filter(|(k, _)| k.as_str() != CATEGORY_NAME_KEY)
            .filter_map(|(_, v)| parse_item(v))
            .collect();

        if items.is_empty() {
            tracing::debug!(category = %key, "dropping category with no well-formed items");
            continue;
        }

        sections.push(CategorySection {
            key: key.clone(),
            display_name,
            items,
        });
    }
    sections
}

/// Customization groups from root-level list-valued fields
///
/// The categories collection and the reserved all-items field never become
/// groups; neither do fields whose entries are all malformed.
fn build_groups(doc: &MenuDocument) -> Vec<CustomizationGroup> {
    let mut groups = Vec::new();
    for (key, value) in &doc.rest {
        if key == ALL_ITEMS_KEY {
            continue;
        }
        let Some(entries) = value.as_array() else {
            continue;
        };
        if entries.is_empty() {
            continue;
        }

        let items: Vec<MenuItem> = entries.iter().filter_map(parse_item).collect();
        if items.is_empty() {
            tracing::debug!(group = %key, "dropping customization group with no well-formed items");
            continue;
        }

        groups.push(CustomizationGroup {
            key: key.clone(),
            items,
        });
    }
    groups
}

/// Lenient item parse: anything that is not a well-formed item is `None`
///
/// Well-formed means an object carrying a name and, when priced, a
/// non-negative price.
fn parse_item(value: &Value) -> Option<MenuItem> {
    if !value.is_object() {
        return None;
    }
    let item: MenuItem = serde_json::from_value(value.clone()).ok()?;
    if item.price.is_some_and(|p| p < 0.0) {
        return None;
    }
    Some(item)
}
