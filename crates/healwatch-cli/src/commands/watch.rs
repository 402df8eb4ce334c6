//! Live dashboard

use crate::dashboard;
use crate::error::CliResult;
use crate::output::{print_info, OutputFormat};
use healwatch_monitor::{DashboardState, OutcomeSource, PollConfig, Poller};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Poll and re-render on every state change until Ctrl+C
pub async fn execute(
    source: Arc<dyn OutcomeSource>,
    poll: PollConfig,
    format: OutputFormat,
) -> CliResult<()> {
    poll.validate()?;

    let description = source.describe();
    if format == OutputFormat::Table {
        print_info(&format!(
            "Watching {} every {}s (Ctrl+C to stop)",
            description, poll.interval_secs
        ));
    }

    let handle = Poller::start(source, poll);
    let mut updates = handle.subscribe();

    let followed = follow(&mut updates, tokio::signal::ctrl_c(), |state| {
        emit(state, &description, format)
    })
    .await;

    handle.stop().await;
    followed
}

/// Hand every published state to `on_update` until `shutdown` resolves or
/// the poller goes away.
///
/// `shutdown` is created once, so a signal arriving between updates is
/// never lost.
async fn follow<S>(
    updates: &mut watch::Receiver<DashboardState>,
    shutdown: S,
    mut on_update: impl FnMut(&DashboardState) -> CliResult<()>,
) -> CliResult<()>
where
    S: Future,
{
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                tracing::debug!("Ctrl+C received, stopping poller");
                return Ok(());
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
                let state = updates.borrow_and_update().clone();
                on_update(&state)?;
            }
        }
    }
}

fn emit(state: &DashboardState, description: &str, format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            print!("{}{}", CLEAR_SCREEN, dashboard::render(state, description));
        }
        // One document per update
        OutputFormat::Json => println!("{}", serde_json::to_string(state)?),
        OutputFormat::Yaml => print!("---\n{}", serde_yaml::to_string(state)?),
    }
    Ok(())
}
