//! Configuration module
//!
//! User settings loaded from `config.toml`.

pub mod config;
