//! prepdrill-store — External data for the practice engine.
//!
//! The core treats these as opaque collaborators: a static question bank
//! queried by role and difficulty, an append-only session history store,
//! and the TOML configuration layer that points at both.

pub mod bank;
pub mod config;
pub mod error;
pub mod sessions;

pub use bank::QuestionBank;
pub use config::{load_config, load_config_from, PrepdrillConfig};
pub use error::StoreError;
pub use sessions::SessionStore;
