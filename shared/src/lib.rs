//! Shared types for the FlexOrder engine
//!
//! Data models and error types used by the order engine and by the
//! collaborators that implement its external seams (remote fetch, order
//! transport, UI layer).

pub mod error;
pub mod menu;
pub mod order;

// Re-exports
pub use error::{FetchError, SubmitError};
pub use serde::{Deserialize, Serialize};
