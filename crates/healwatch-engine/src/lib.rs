//! HealWatch Engine - Heuristic selector healing
//!
//! Given a snapshot of a UI element whose original selector may have gone
//! stale, the engine picks the most reliable replacement selector it can
//! find from the element's attributes, and files an issue link when none
//! exists.
//!
//! Selector preference, most to least reliable:
//!
//! 1. original `#id` selector, when it still matches the element's id
//! 2. `[data-testid="..."]`
//! 3. `#id`
//! 4. `.first-class`

#![deny(unsafe_code)]

pub mod error;
pub mod healer;
pub mod heuristic;
pub mod suite;
pub mod tracker;

pub use error::{EngineError, EngineResult};
pub use healer::heal_element;
pub use heuristic::{find_best_selector, SelectorVerdict};
pub use suite::{builtin_cases, load_suite, run_suite};
pub use tracker::IssueTracker;
