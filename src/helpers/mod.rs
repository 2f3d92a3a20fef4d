//! Helper Utilities
//!
//! Platform directories and secret sealing used by storage and settings.

mod fs;
mod secret;

pub use fs::*;
pub use secret::*;
