//! HealWatch Monitor - Result aggregation and polling
//!
//! This crate turns raw healing outcomes into what the dashboard shows and
//! keeps that view fresh:
//!
//! - [`aggregate`]: `normalize` collapses the raw status taxonomy into the
//!   display taxonomy; `summarize` counts outcomes by status
//! - [`source`]: where outcomes come from (healing daemon over HTTP, or a
//!   fixed in-process list)
//! - [`state`]: last known good results, kept apart from the latest failure
//! - [`poller`]: a background task fetching on a fixed interval with at most
//!   one fetch in flight
//!
//! ```no_run
//! use healwatch_monitor::{PollConfig, Poller, SourceConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = SourceConfig::default().build()?;
//! let handle = Poller::start(source, PollConfig::default());
//!
//! let mut updates = handle.subscribe();
//! updates.changed().await?;
//! println!("{:?}", updates.borrow().view());
//!
//! handle.stop().await;
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod poller;
pub mod source;
pub mod state;

pub use aggregate::{normalize, normalize_outcome, summarize, Normalized};
pub use config::{PollConfig, SourceConfig, SourceKind};
pub use error::{FetchError, FetchResult, InvalidStatusError, MonitorError, MonitorResult};
pub use poller::{run_cycle, PollHandle, Poller};
pub use source::{FetchMode, HttpSource, MockSource, OutcomeSource};
pub use state::{CycleFailure, CycleStats, DashboardState, DashboardView, Snapshot};
