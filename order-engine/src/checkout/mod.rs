//! Checkout Validation Module
//!
//! Field-level rules plus the cash change-due cross rule. Validation is
//! pure: the form stays editable and the caller keeps the submit action
//! disabled while the report is invalid.

mod validator;

pub use validator::*;
