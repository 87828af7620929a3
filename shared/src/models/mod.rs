//! Data models
//!
//! Shared between menu-server and menu-client (via API).
//! Wire format is camelCase JSON; IDs are the key part of the store record id.

pub mod category;
pub mod product;
pub mod review;

// Re-exports
pub use category::*;
pub use product::*;
pub use review::*;
