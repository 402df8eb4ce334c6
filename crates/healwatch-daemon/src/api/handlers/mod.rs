//! API request handlers

mod healing;
mod health;

pub use healing::*;
pub use health::*;
