//! Error taxonomy for a scaffolding run

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// Everything that can stop a scaffolding run
///
/// Validation errors fire before any side effect. Everything after the
/// service directory is created leaves earlier writes committed.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid service name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("Directory already exists: {}", .0.display())]
    DirectoryExists(PathBuf),

    #[error("Cancelled")]
    Cancelled,

    #[error("Terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("Invalid selection '{0}'")]
    InvalidSelection(String),

    #[error("No value given for '{0}'")]
    EmptyProperty(String),

    #[error("Failed to parse {}: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected shape in {}: '{key}' must be an object", path.display())]
    ManifestShape { path: PathBuf, key: String },

    #[error("Failed to parse catalog {}: {source}", path.display())]
    Catalog {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("{context} {}: {source}", path.display())]
    Io {
        context: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Command `{cmd}` failed in {} (exit code {code})", cwd.display())]
    ExternalCommand { cmd: String, cwd: PathBuf, code: i32 },
}

impl ScaffoldError {
    pub(crate) fn io(
        context: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io {
            context,
            path,
            source,
        }
    }

    /// True for failures of shell hooks or dependency installs
    pub fn is_external(&self) -> bool {
        matches!(self, Self::ExternalCommand { .. })
    }

    /// True when the user backed out of a prompt
    pub fn is_abort(&self) -> bool {
        matches!(
            self,
            Self::Cancelled | Self::InvalidSelection(_) | Self::EmptyProperty(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_is_distinct() {
        let err = ScaffoldError::ExternalCommand {
            cmd: "npm install".to_string(),
            cwd: PathBuf::from("services/api"),
            code: 1,
        };
        assert!(err.is_external());
        assert!(!err.is_abort());
        assert!(err.to_string().contains("npm install"));
    }

    #[test]
    fn test_prompt_failures_are_aborts() {
        assert!(ScaffoldError::Cancelled.is_abort());
        assert!(ScaffoldError::InvalidSelection("x".into()).is_abort());
        assert!(!ScaffoldError::DirectoryExists(PathBuf::from("a")).is_abort());
    }
}
