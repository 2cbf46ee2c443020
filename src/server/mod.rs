//! Server configuration and runtime modules.

pub mod config;
pub mod runtime;
