//! # CodeRelay Shared
//!
//! Cross-cutting configuration and validation utilities shared by the
//! CodeRelay core and infrastructure crates. This crate holds no domain
//! logic and performs no I/O of its own.

pub mod config;
pub mod utils;

pub use config::AppConfig;
