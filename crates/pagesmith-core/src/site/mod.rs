//! Publishing and retrieval of finished pages.

pub mod service;
pub mod slug;
pub mod store;
