//! HealWatch Types - Shared types for selector-healing results
//!
//! HealWatch watches the output of a UI test suite whose element selectors
//! are repaired ("healed") automatically when they go stale.
//!
//! ## Key Concepts
//!
//! - **TestOutcome**: A raw record as reported by the healing backend, using
//!   the four-valued raw taxonomy (`PASSED`, `HEALED`, `FAILED`, `NO_CHANGE`)
//! - **DisplayOutcome**: A normalized record restricted to the three-valued
//!   display taxonomy (`PASSED`, `HEALED`, `FAILED`)
//! - **Summary**: Counts by display status plus the success rate
//! - **ElementData / HealingResponse**: Request and response of a single
//!   element healing attempt

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod healing;
pub mod outcome;
pub mod service;
pub mod status;
pub mod summary;

pub use healing::{ElementData, HealingResponse, TestCase};
pub use outcome::{DisplayOutcome, TestOutcome};
pub use service::ServiceHealth;
pub use status::{OutcomeStatus, RawStatus, UnknownStatus};
pub use summary::Summary;
