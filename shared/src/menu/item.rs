//! Menu item model

use serde::{Deserialize, Serialize};

/// A sellable item or customization option
///
/// Items appear both inside category sections and inside customization
/// groups (flavors, fillings, addons). The document is operator-authored,
/// so everything except the name is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    #[serde(rename = "nome")]
    pub name: String,
    /// Unavailable items stay visible but cannot be selected
    #[serde(rename = "disponivel", default)]
    pub available: bool,
    /// Price in currency units; absent for "price on request" items
    #[serde(rename = "preco", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "descricao", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Legacy image field, kept for document compatibility
    #[serde(rename = "imagem", default, skip_serializing_if = "Option::is_none")]
    pub legacy_image: Option<String>,
    #[serde(rename = "img_url", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Item accepts flavor/filling customization groups
    #[serde(rename = "sabores_recheios", default)]
    pub has_flavor_options: bool,
    /// Item accepts addon customization groups
    #[serde(rename = "adicionais", default)]
    pub has_addon_options: bool,
}

impl MenuItem {
    /// Base price with the absent case collapsed to zero
    pub fn base_price(&self) -> f64 {
        self.price.unwrap_or(0.0)
    }

    /// Resolved image reference; `img_url` wins over the legacy field.
    ///
    /// A usable reference must be longer than a handful of characters;
    /// operators sometimes leave placeholder values like "-" behind.
    pub fn image_ref(&self) -> Option<&str> {
        let usable = |s: &&String| s.len() > 5;
        self.image_url
            .as_ref()
            .filter(usable)
            .or(self.legacy_image.as_ref().filter(usable))
            .map(String::as_str)
    }
}
