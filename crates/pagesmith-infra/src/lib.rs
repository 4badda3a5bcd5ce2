//! Infrastructure implementations for Pagesmith.
//!
//! - [`backend`]: concrete generation backends and the factory that picks one
//! - [`sqlite`]: SQLite-backed `SiteStore`
//! - [`config`]: `config.toml` + environment configuration loader
//! - [`credentials`]: backend credential lookup

pub mod backend;
pub mod config;
pub mod credentials;
pub mod sqlite;
