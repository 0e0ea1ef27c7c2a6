// Public modules
pub mod chat;
pub mod client;
pub mod error;
pub mod observability;
pub mod session;
pub mod types;

// Re-exports
pub use client::Coastline;
pub use error::{Error, Result};
pub use session::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use types::*;
