//! Shared domain types for Pagesmith.
//!
//! This crate contains the core domain types used across Pagesmith:
//! generation requests and errors, published sites, backend configuration,
//! and the storage error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod config;
pub mod error;
pub mod generation;
pub mod site;
