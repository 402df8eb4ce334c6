//! CLI commands

pub mod heal;
pub mod results;
pub mod watch;
