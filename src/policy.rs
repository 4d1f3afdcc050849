//! Severity threshold gating the process exit status.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::aggregator::SeverityTally;

/// Lowest severity that fails the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailThreshold {
    #[default]
    Error,
    Warning,
    Note,
    Never,
}

impl FailThreshold {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailThreshold::Error => "error",
            FailThreshold::Warning => "warning",
            FailThreshold::Note => "note",
            FailThreshold::Never => "never",
        }
    }
}

impl std::fmt::Display for FailThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether the run fails (exit status 1) under the given threshold.
///
/// Severities rank `error` > `warning` > `note`; a threshold fails on its
/// own level and everything above it. Unrecognized severity names count
/// toward totals but never toward this decision.
pub fn decide(threshold: FailThreshold, tally: &SeverityTally) -> bool {
    let errors = tally.count("error");
    let warnings = tally.count("warning");
    let notes = tally.count("note");

    match threshold {
        FailThreshold::Never => false,
        FailThreshold::Error => errors > 0,
        FailThreshold::Warning => errors > 0 || warnings > 0,
        FailThreshold::Note => errors > 0 || warnings > 0 || notes > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Severity;

    fn tally(errors: usize, warnings: usize, notes: usize) -> SeverityTally {
        let mut tally = SeverityTally::new();
        for _ in 0..errors {
            tally.increment(&Severity::error());
        }
        for _ in 0..warnings {
            tally.increment(&Severity::warning());
        }
        for _ in 0..notes {
            tally.increment(&Severity::note());
        }
        tally
    }

    #[test]
    fn test_full_decision_table() {
        // Every threshold against every zero/non-zero combination.
        for errors in [0usize, 1, 2] {
            for warnings in [0usize, 1, 2] {
                for notes in [0usize, 1, 2] {
                    let tally = tally(errors, warnings, notes);

                    assert!(!decide(FailThreshold::Never, &tally));
                    assert_eq!(decide(FailThreshold::Error, &tally), errors > 0);
                    assert_eq!(
                        decide(FailThreshold::Warning, &tally),
                        errors > 0 || warnings > 0
                    );
                    assert_eq!(
                        decide(FailThreshold::Note, &tally),
                        errors > 0 || warnings > 0 || notes > 0
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_tally_passes_every_threshold() {
        let empty = SeverityTally::new();
        for threshold in [
            FailThreshold::Error,
            FailThreshold::Warning,
            FailThreshold::Note,
            FailThreshold::Never,
        ] {
            assert!(!decide(threshold, &empty), "{threshold}");
        }
    }

    #[test]
    fn test_two_errors_one_warning_fails_warning_threshold() {
        let tally = tally(2, 1, 0);
        assert!(decide(FailThreshold::Warning, &tally));
    }

    #[test]
    fn test_never_passes_regardless_of_tally() {
        assert!(!decide(FailThreshold::Never, &tally(5, 5, 5)));
    }

    #[test]
    fn test_warnings_alone_pass_error_threshold() {
        let tally = tally(0, 3, 0);
        assert!(!decide(FailThreshold::Error, &tally));
        assert!(decide(FailThreshold::Warning, &tally));
    }

    #[test]
    fn test_notes_alone_only_fail_note_threshold() {
        let tally = tally(0, 0, 2);
        assert!(!decide(FailThreshold::Error, &tally));
        assert!(!decide(FailThreshold::Warning, &tally));
        assert!(decide(FailThreshold::Note, &tally));
    }

    #[test]
    fn test_unrecognized_severity_never_fails() {
        let mut tally = SeverityTally::new();
        tally.increment(&Severity::new("advice"));

        for threshold in [
            FailThreshold::Error,
            FailThreshold::Warning,
            FailThreshold::Note,
            FailThreshold::Never,
        ] {
            assert!(!decide(threshold, &tally), "{threshold}");
        }
        assert_eq!(tally.total(), 1);
    }

    #[test]
    fn test_default_threshold_is_error() {
        assert_eq!(FailThreshold::default(), FailThreshold::Error);
    }

    #[test]
    fn test_threshold_display() {
        assert_eq!(FailThreshold::Warning.to_string(), "warning");
        assert_eq!(FailThreshold::Never.to_string(), "never");
    }
}
