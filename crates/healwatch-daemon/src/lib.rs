//! HealWatch Daemon library
//!
//! This module provides the core components for the healing backend:
//! - REST API handlers
//! - Configuration loading
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod server;

pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError};
pub use server::Server;
