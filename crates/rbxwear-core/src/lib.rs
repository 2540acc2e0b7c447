//! Core domain models, error types, configuration, and protocol constants
//! shared by the rbxwear client and CLI crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{ClientConfig, Endpoints};
pub use error::{Error, Result};
