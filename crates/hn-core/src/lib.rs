//! hn-core: stable foundation for hydronet.
//!
//! Contains:
//! - ids (dense, compact indices for nodes and flow elements)
//! - error (shared error types)

pub mod error;
pub mod ids;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HnError, HnResult};
pub use ids::*;
