//! Data models for the client
//!
//! Plain value types constructed from successful responses (assets, creators)
//! or supplied by the caller (upload inputs). None of them carry behavior
//! beyond constructor-time validation, and none are mutated after
//! construction.

mod asset;
mod batch;
mod creator;

// Re-export all models for convenient imports
pub use asset::*;
pub use batch::*;
pub use creator::*;
