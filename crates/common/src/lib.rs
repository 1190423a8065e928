//! Shared value types for the backend API.

pub mod time;
pub mod types;

pub use time::timestamp;
pub use types::{NOT_CONFIGURED, Setting};
