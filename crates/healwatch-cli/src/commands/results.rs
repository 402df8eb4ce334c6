//! One-shot result commands

use crate::dashboard;
use crate::error::{CliError, CliResult};
use crate::output::{print_single, OutputFormat};
use healwatch_monitor::{run_cycle, DashboardState, OutcomeSource};

/// Run a single fetch cycle and render it once.
///
/// The state is rendered even when the cycle failed; the failure is then
/// returned so the process exits non-zero.
pub async fn execute(source: &dyn OutcomeSource, format: OutputFormat) -> CliResult<()> {
    let mut state = DashboardState::new();
    let outcome = run_cycle(source, &mut state).await;

    match format {
        OutputFormat::Table => print!("{}", dashboard::render(&state, &source.describe())),
        OutputFormat::Json | OutputFormat::Yaml => print_single(&state, format)?,
    }

    outcome.map_err(CliError::from)
}
