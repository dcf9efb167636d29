//! Cart Management Module
//!
//! An ordered collection of priced, customized line items. Operations are
//! applied strictly in caller order; adds are gated by the live opening
//! status.

mod manager;

pub use manager::{CartError, CartManager, CartResult};
