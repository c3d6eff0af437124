//! Core utilities for meallog
//!
//! This crate provides shared functionality used by the suggestion engine,
//! telemetry, and command-line front end:
//!
//! - **Error handling**: Errors with codes, context, and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults and validation
//! - **Validation**: Fluent validator collecting every problem in one pass
//!
//! # Example
//!
//! ```rust,no_run
//! use meallog_core::config::Config;
//!
//! let config = Config::load(None).expect("config should load");
//! config.validate().expect("config should be valid");
//! println!("suggestion limit: {}", config.schema.suggest.limit);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod validation;

pub use error::{Error, ErrorCode, Result, ResultExt};
