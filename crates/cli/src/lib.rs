//! Terminal output helpers for meallog command-line tools
//!
//! - Status messages with consistent symbols and colors
//! - Duration and count formatting

#![warn(missing_docs)]

pub mod output;
