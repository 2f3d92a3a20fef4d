//! Pawtales Client Library
//!
//! Language store, locale-aware formatting and story view models for the
//! Pawtales pet story site, plus the HTTP clients they talk to.

pub mod constants;
pub mod domain;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod states;
pub mod utils;
