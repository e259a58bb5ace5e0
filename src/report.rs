//! One-line status reports for correction steps.

use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(feature = "colorized_output")]
use console::style;

use crate::correct::{CorrectionOutcome, RecordKind};

/// What happened to one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// Already canonical, nothing written
    AlreadyCorrect,
    /// Corrected output written to the step's path
    Corrected,
    /// Step skipped for the given reason
    Skipped(String),
}

/// Status of a single correction step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Record kind that was corrected
    pub kind: RecordKind,
    /// Input path, or the output path for a corrected file
    pub path: PathBuf,
    /// Canonical column count for the kind
    pub columns: usize,
    /// Result status of the step
    pub status: StepStatus,
}

impl StepReport {
    /// Report for a correction that ran
    pub fn from_outcome(kind: RecordKind, columns: usize, outcome: &CorrectionOutcome) -> Self {
        let status = match outcome {
            CorrectionOutcome::AlreadyCorrect(_) => StepStatus::AlreadyCorrect,
            CorrectionOutcome::Corrected(_) => StepStatus::Corrected,
        };
        Self {
            kind,
            path: outcome.path().to_path_buf(),
            columns,
            status,
        }
    }

    /// Report for a step that was skipped
    pub fn skipped(kind: RecordKind, path: &Path, reason: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.to_path_buf(),
            columns: 0,
            status: StepStatus::Skipped(reason.into()),
        }
    }

    fn message(&self) -> String {
        match &self.status {
            StepStatus::AlreadyCorrect => format!(
                "{} already has {} columns: {}",
                self.kind,
                self.columns,
                self.path.display()
            ),
            StepStatus::Corrected => format!(
                "{} corrected, wrote {} columns to {}",
                self.kind,
                self.columns,
                self.path.display()
            ),
            StepStatus::Skipped(reason) => format!(
                "{} file {} skipped: {}",
                self.kind,
                self.path.display(),
                reason
            ),
        }
    }

    /// Format the line with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::Emoji;

            static OK: Emoji<'_, '_> = Emoji("✓", "[OK]");
            static FIXED: Emoji<'_, '_> = Emoji("✎", "[FIXED]");
            static SKIP: Emoji<'_, '_> = Emoji("⚠", "[SKIP]");

            let message = self.message();
            match &self.status {
                StepStatus::AlreadyCorrect => format!("[{}] {}", OK, style(message).green()),
                StepStatus::Corrected => format!("[{}] {}", FIXED, style(message).cyan()),
                StepStatus::Skipped(_) => format!("[{}] {}", SKIP, style(message).yellow()),
            }
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

impl fmt::Display for StepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match &self.status {
            StepStatus::AlreadyCorrect => "✓",
            StepStatus::Corrected => "✎",
            StepStatus::Skipped(_) => "⚠",
        };
        write!(f, "[{}] {}", symbol, self.message())
    }
}
