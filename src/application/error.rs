// Conversion errors and non-fatal diagnostics
use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("panel {index}: unsupported panel type '{discriminant}'")]
    UnsupportedPanelType { index: usize, discriminant: String },

    #[error("cannot read dashboard file {}", .path.display())]
    MissingOrUnreadableInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed dashboard file {}", .path.display())]
    MalformedInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Something the converter skipped without failing the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    NullPanel { index: usize },
    UnsupportedPanel { index: usize, discriminant: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::NullPanel { index } => write!(f, "panel {}: null panel skipped", index),
            Diagnostic::UnsupportedPanel {
                index,
                discriminant,
            } => write!(
                f,
                "panel {}: unsupported panel type '{}' skipped",
                index, discriminant
            ),
        }
    }
}
