//! HTTP API layer for Pagesmith.
//!
//! Generation and publish report failures in-band (`{"status":"error"}` with
//! HTTP 200). Site retrieval is the only route with a distinct error status.

pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
