//! Logging and trace export setup shared by the Pagesmith binaries.

pub mod tracing_setup;
