//! Terminal rendering of the dashboard state

use colored::*;
use healwatch_monitor::{CycleFailure, DashboardState, DashboardView, Snapshot};
use healwatch_types::{DisplayOutcome, OutcomeStatus, Summary};
use std::fmt::Write;
use tabled::settings::Style;
use tabled::{Table, Tabled};

const BAR_WIDTH: usize = 40;
const NOT_AVAILABLE: &str = "N/A";
const NO_ERROR: &str = "None";

#[derive(Debug, Tabled)]
struct OutcomeRow {
    #[tabled(rename = "Test Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Original Selector")]
    original_selector: String,
    #[tabled(rename = "Healed Selector")]
    healed_selector: String,
    #[tabled(rename = "Explanation")]
    explanation: String,
    #[tabled(rename = "Error")]
    error: String,
    #[tabled(rename = "JIRA")]
    jira: String,
}

impl From<&DisplayOutcome> for OutcomeRow {
    fn from(outcome: &DisplayOutcome) -> Self {
        let or_na = |value: &Option<String>| {
            value
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };

        Self {
            name: outcome.name.clone(),
            status: colored_status(outcome.status).to_string(),
            original_selector: outcome.original_selector.clone(),
            healed_selector: or_na(&outcome.healed_selector),
            explanation: or_na(&outcome.explanation),
            error: outcome.error.clone().unwrap_or_else(|| NO_ERROR.to_string()),
            jira: or_na(&outcome.jira_url),
        }
    }
}

fn colored_status(status: OutcomeStatus) -> ColoredString {
    match status {
        OutcomeStatus::Passed => status.as_str().green(),
        OutcomeStatus::Healed => status.as_str().blue(),
        OutcomeStatus::Failed => status.as_str().red(),
    }
}

/// Render the full dashboard for table output
pub fn render(state: &DashboardState, source: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "HealWatch: Selector Healing Results".bold());
    let _ = writeln!(out, "{}", format!("Source: {}", source).dimmed());
    let _ = writeln!(out);

    match state.view() {
        DashboardView::Loading => {
            let _ = writeln!(out, "Loading test results...");
        }
        DashboardView::Unavailable(failure) => {
            render_banner(&mut out, failure, None);
            let _ = writeln!(out, "No test results available yet.");
        }
        DashboardView::Ready { snapshot, stale } => {
            if let Some(failure) = stale {
                render_banner(&mut out, failure, Some(snapshot));
            }
            render_snapshot(&mut out, snapshot);
        }
    }

    if state.stats.skipped > 0 {
        let _ = writeln!(
            out,
            "{}",
            format!(
                "{} polls skipped while a fetch was in flight",
                state.stats.skipped
            )
            .dimmed()
        );
    }

    out
}

fn render_banner(out: &mut String, failure: &CycleFailure, shown: Option<&Snapshot>) {
    let _ = writeln!(
        out,
        "{} {}",
        "✗ Error:".red().bold(),
        format!("Failed to fetch test results: {}", failure.error).red()
    );
    if let Some(snapshot) = shown {
        let _ = writeln!(
            out,
            "  Showing results from {} (cycle {})",
            snapshot.fetched_at.format("%H:%M:%S"),
            snapshot.cycle
        );
    }
    let _ = writeln!(out);
}

fn render_snapshot(out: &mut String, snapshot: &Snapshot) {
    let summary = &snapshot.summary;

    render_cards(out, summary);
    render_chart(out, summary);

    if snapshot.outcomes.is_empty() {
        let _ = writeln!(out, "{}", "No test results".dimmed());
    } else {
        let rows: Vec<OutcomeRow> = snapshot.outcomes.iter().map(OutcomeRow::from).collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        let _ = writeln!(out, "{}", table);
    }

    for rejected in &snapshot.rejected {
        let _ = writeln!(
            out,
            "{} Skipped '{}': unknown status {:?}",
            "⚠".yellow(),
            rejected.name,
            rejected.status
        );
    }

    let _ = writeln!(
        out,
        "{}",
        format!(
            "Updated {} (cycle {})",
            snapshot.fetched_at.format("%H:%M:%S"),
            snapshot.cycle
        )
        .dimmed()
    );
}

fn render_cards(out: &mut String, summary: &Summary) {
    let _ = writeln!(out, "  {:<16} {}", "Total Tests", summary.total.to_string().bold());
    let _ = writeln!(
        out,
        "  {:<16} {}  (Passed: {}, Healed: {}, Failed: {})",
        "Success Rate",
        format!("{}%", summary.success_rate_percent()).bold(),
        summary.passed,
        summary.healed,
        summary.failed
    );
    let _ = writeln!(out, "  {:<16} {}", "Healed Elements", summary.healed.to_string().bold());
    let _ = writeln!(out);
}

fn render_chart(out: &mut String, summary: &Summary) {
    let max = summary.passed.max(summary.healed).max(summary.failed);
    let _ = writeln!(out, "{}", "Results Distribution".bold());

    for status in OutcomeStatus::ALL {
        let count = match status {
            OutcomeStatus::Passed => summary.passed,
            OutcomeStatus::Healed => summary.healed,
            OutcomeStatus::Failed => summary.failed,
        };
        let bar = "█".repeat(bar_len(count, max));
        let bar = match status {
            OutcomeStatus::Passed => bar.green(),
            OutcomeStatus::Healed => bar.blue(),
            OutcomeStatus::Failed => bar.red(),
        };
        let _ = writeln!(out, "  {:<7} {} {}", status.label(), bar, count);
    }
    let _ = writeln!(out);
}

/// Bar length scaled to the largest count; non-zero counts get at least one cell
fn bar_len(count: usize, max: usize) -> usize {
    if count == 0 || max == 0 {
        return 0;
    }
    (count * BAR_WIDTH / max).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use healwatch_monitor::FetchError;
    use healwatch_types::{RawStatus, TestOutcome};
    use std::sync::{Mutex, MutexGuard};

    // The color override is process-wide; hold this while rendering
    static COLOR_OVERRIDE: Mutex<()> = Mutex::new(());

    fn colors(enabled: bool) -> MutexGuard<'static, ()> {
        let guard = COLOR_OVERRIDE.lock().unwrap_or_else(|e| e.into_inner());
        colored::control::set_override(enabled);
        guard
    }

    fn plain() -> MutexGuard<'static, ()> {
        colors(false)
    }

    fn strip_ansi(line: &str) -> String {
        let mut out = String::new();
        let mut chars = line.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn state_with(raw: &[TestOutcome]) -> DashboardState {
        let mut state = DashboardState::new();
        state.begin_cycle();
        state.apply_success(raw, Utc::now());
        state
    }

    #[test]
    fn test_loading() {
        let _colors = plain();
        let out = render(&DashboardState::new(), "mock");
        assert!(out.contains("Loading test results..."));
        assert!(!out.contains("Total Tests"));
    }

    #[test]
    fn test_unavailable_shows_banner_without_totals() {
        let _colors = plain();
        let mut state = DashboardState::new();
        state.begin_cycle();
        state.apply_failure(FetchError::Network("connection refused".into()), Utc::now());

        let out = render(&state, "GET http://localhost:8000/api/test-results");
        assert!(out.contains("✗ Error: Failed to fetch test results: network error: connection refused"));
        assert!(out.contains("No test results available yet."));
        assert!(!out.contains("Total Tests"));
    }

    #[test]
    fn test_ready_renders_cards_chart_and_table() {
        let _colors = plain();
        let state = state_with(&[
            TestOutcome::new("t3", RawStatus::Healed, "#c").healed_selector("#c2"),
            TestOutcome::new("t4", RawStatus::Failed, "#d").error("not found"),
        ]);

        let out = render(&state, "mock");
        assert!(out.contains("Total Tests      2"));
        assert!(out.contains("Success Rate     50%  (Passed: 0, Healed: 1, Failed: 1)"));
        assert!(out.contains("Healed Elements  1"));
        assert!(out.contains("Results Distribution"));
        assert!(out.contains("Test Name"));
        assert!(out.contains("#c2"));
        assert!(out.contains("not found"));
        assert!(out.contains("N/A"));
        assert!(out.contains("None"));
        assert!(!out.contains("Error:"));
    }

    #[test]
    fn test_stale_results_keep_table() {
        let _colors = plain();
        let mut state = state_with(&[TestOutcome::new("t1", RawStatus::Passed, "#a")]);
        state.begin_cycle();
        state.apply_failure(
            FetchError::Status {
                status: 500,
                message: "boom".into(),
            },
            Utc::now(),
        );

        let out = render(&state, "mock");
        assert!(out.contains("Failed to fetch test results: HTTP 500: boom"));
        assert!(out.contains("(cycle 1)"));
        assert!(out.contains("Total Tests      1"));
    }

    #[test]
    fn test_empty_results() {
        let _colors = plain();
        let out = render(&state_with(&[]), "mock");
        assert!(out.contains("Total Tests      0"));
        assert!(out.contains("Success Rate     0%"));
        assert!(out.contains("No test results"));
    }

    #[test]
    fn test_rejected_records_warned() {
        let _colors = plain();
        let state = state_with(&[
            TestOutcome::new("t1", RawStatus::Passed, "#a"),
            TestOutcome::with_raw_status("t9", "BROKEN", "#z"),
        ]);

        let out = render(&state, "mock");
        assert!(out.contains("⚠ Skipped 't9': unknown status \"BROKEN\""));
    }

    #[test]
    fn test_colored_table_stays_aligned() {
        let _colors = colors(true);
        let state = state_with(&[
            TestOutcome::new("t1", RawStatus::Passed, "#a"),
            TestOutcome::new("t3", RawStatus::Healed, "#c").healed_selector("#c2"),
            TestOutcome::new("t4", RawStatus::Failed, "#d").error("not found"),
        ]);

        let out = render(&state, "mock");
        assert!(out.contains('\x1b'));

        let widths: Vec<usize> = out
            .lines()
            .map(strip_ansi)
            .filter(|line| line.starts_with(['╭', '│', '├', '╰']))
            .map(|line| line.chars().count())
            .collect();
        // Borders, header, separator and one line per row
        assert!(widths.len() >= 7, "{:?}", widths);
        assert!(widths.iter().all(|w| *w == widths[0]), "{:?}", widths);
    }

    #[test]
    fn test_bar_len() {
        assert_eq!(bar_len(0, 10), 0);
        assert_eq!(bar_len(10, 10), BAR_WIDTH);
        assert_eq!(bar_len(1, 1000), 1);
        assert_eq!(bar_len(0, 0), 0);
    }
}
