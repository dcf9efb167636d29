//! Order-side models: cart lines, checkout form, normalized order record

pub mod cart;
pub mod checkout;
pub mod record;

// Re-exports
pub use cart::*;
pub use checkout::*;
pub use record::*;
