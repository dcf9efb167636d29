//! Menu Catalog Normalization
//!
//! Resolves the loosely-shaped merchant document into addressable category
//! sections and customization groups, once per fetched record. The result
//! is immutable for the lifetime of that record.

mod normalizer;

pub use normalizer::normalize;
