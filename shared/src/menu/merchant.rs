//! Merchant record models

use super::catalog::MenuDocument;
use serde::{Deserialize, Serialize};

/// Merchant-level configuration (singleton per merchant)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MerchantConfig {
    #[serde(rename = "email_dono", default)]
    pub owner_email: String,
    /// Trading name shown to customers
    #[serde(rename = "nome_fantasia", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// UI theme color; carried for the presentation layer
    #[serde(rename = "cor_tema", default, skip_serializing_if = "Option::is_none")]
    pub theme_color: Option<String>,
    #[serde(rename = "logo_url", default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(rename = "whatsapp_number", default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_number: Option<String>,
    /// Daily opening time, "HH:MM". Absent means always open.
    #[serde(rename = "hora_abre", default, skip_serializing_if = "Option::is_none")]
    pub opens_at: Option<String>,
    /// Daily closing time, "HH:MM". May be earlier than `opens_at` for
    /// windows that cross midnight.
    #[serde(rename = "hora_fecha", default, skip_serializing_if = "Option::is_none")]
    pub closes_at: Option<String>,
}

/// The full remote merchant record: config plus optional menu document
///
/// A merchant may exist before its menu is authored, so the menu side is
/// optional end to end.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MerchantRecord {
    pub config: MerchantConfig,
    #[serde(rename = "cardapio", default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<MenuDocument>,
}
