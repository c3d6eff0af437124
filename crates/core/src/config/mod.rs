//! Configuration loading and schema definitions
//!
//! One TOML file configures both the suggestion engine and logging.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
