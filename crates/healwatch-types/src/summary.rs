//! Summary statistics over a set of display outcomes

use serde::{Deserialize, Serialize};

/// Counts by display status plus the derived success rate
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    /// Number of records
    pub total: usize,

    /// Records with display status PASSED (includes raw NO_CHANGE)
    pub passed: usize,

    /// Records with display status HEALED
    pub healed: usize,

    /// Records with display status FAILED
    pub failed: usize,

    /// `(passed + healed) / total * 100`, or 0 for an empty set
    pub success_rate: f64,
}

impl Summary {
    /// Build a summary from per-status counts
    pub fn from_counts(passed: usize, healed: usize, failed: usize) -> Self {
        let total = passed + healed + failed;
        let success_rate = if total == 0 {
            0.0
        } else {
            (passed + healed) as f64 / total as f64 * 100.0
        };

        Self {
            total,
            passed,
            healed,
            failed,
            success_rate,
        }
    }

    /// Success rate rounded to a whole percent, as shown on the dashboard
    pub fn success_rate_percent(&self) -> u32 {
        self.success_rate.round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary_has_zero_rate() {
        let summary = Summary::from_counts(0, 0, 0);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.success_rate, 0.0);
        assert!(!summary.success_rate.is_nan());
    }

    #[test]
    fn test_rate_rounding() {
        let summary = Summary::from_counts(1, 1, 1);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.success_rate_percent(), 67);

        let summary = Summary::from_counts(0, 1, 1);
        assert_eq!(summary.success_rate, 50.0);
        assert_eq!(summary.success_rate_percent(), 50);
    }
}
