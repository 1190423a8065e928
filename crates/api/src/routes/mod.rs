//! Route handlers.

pub mod bedrock;
pub mod documentdb;
pub mod fallback;
pub mod health;
pub mod info;
