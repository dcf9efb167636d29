//! Menu document and normalized catalog
//!
//! The raw document is loosely shaped: a `categorias` map of category
//! sub-objects plus arbitrary root-level fields, some of which hold
//! customization option lists. Normalization (in the engine's `catalog`
//! module) resolves it once into the closed structures below.

use super::item::MenuItem;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key of the category metadata entry inside each category sub-object
pub const CATEGORY_NAME_KEY: &str = "nome_categoria";

/// Reserved root-level field holding the flat "all items" list; never a
/// customization group
pub const ALL_ITEMS_KEY: &str = "itens";

/// Keys of the flavor/filling customization family (they share one item
/// flag)
pub const FLAVOR_GROUP_KEYS: [&str; 2] = ["sabores", "recheios"];

/// Key of the addon customization family
pub const ADDON_GROUP_KEY: &str = "adicionais";

/// Raw merchant menu document
///
/// Root-level fields other than `categorias` are kept as raw JSON and
/// probed at normalization time; list-valued ones become customization
/// groups. Field order follows the document (the operator's display
/// order).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuDocument {
    #[serde(rename = "categorias", default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// A normalized menu category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySection {
    pub key: String,
    pub display_name: String,
    pub items: Vec<MenuItem>,
}

/// A normalized customization group (flavors, fillings, addons, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomizationGroup {
    pub key: String,
    pub items: Vec<MenuItem>,
}

impl CustomizationGroup {
    /// Look up an option by name (item identity within a group)
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.name == name)
    }
}

/// Normalized catalog: addressable sections and customization groups
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MenuCatalog {
    pub sections: Vec<CategorySection>,
    pub groups: Vec<CustomizationGroup>,
}

impl MenuCatalog {
    pub fn group(&self, key: &str) -> Option<&CustomizationGroup> {
        self.groups.iter().find(|g| g.key == key)
    }

    /// True when no section survived normalization
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
