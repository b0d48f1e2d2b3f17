pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use config::EvtagConfig;
pub use error::{EvtagError, Result};
pub use store::EventStore;
pub use types::*;
