//! Engine core: configuration and session state

mod config;
mod state;

pub use config::Config;
pub use state::AppState;
