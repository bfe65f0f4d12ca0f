use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Canonical example appended to every structural failure so the author can
/// see the whole expected shape at once.
pub const EXPECTED_FORMAT: &str = "\
# Task NNN: Title
## Objective
Clear description
## Requirements
1. [ ] First requirement
## Task Section
- [ ] Validate `file.py`
   - [ ] Step 1
   - [ ] Step 2
";

#[derive(Debug, Error)]
pub enum TasksmithError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input file '{}' does not exist", .0.display())]
    MissingInput(PathBuf),

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("output validation failed: {0}")]
    Schema(String),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TasksmithError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TasksmithError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Every structural violation found in one document.
///
/// Rendering lists all of them followed by [`EXPECTED_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureError {
    errors: Vec<String>,
}

impl StructureError {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Markdown format validation failed:")?;
        for error in &self.errors {
            writeln!(f, "  - {error}")?;
        }
        write!(f, "\nRequired markdown format:\n{EXPECTED_FORMAT}")
    }
}

impl std::error::Error for StructureError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_error_lists_every_message() {
        let err = StructureError::new(vec![
            "Missing '## Requirements' section".into(),
            "No validation tasks found".into(),
        ]);
        let text = err.to_string();
        assert!(text.starts_with("Markdown format validation failed:"));
        assert!(text.contains("  - Missing '## Requirements' section\n"));
        assert!(text.contains("  - No validation tasks found\n"));
        assert!(text.contains("Required markdown format:"));
        assert!(text.ends_with(EXPECTED_FORMAT));
    }

    #[test]
    fn structure_error_converts_transparently() {
        let err: TasksmithError = StructureError::new(vec!["bad title".into()]).into();
        assert!(err.to_string().contains("  - bad title"));
        assert!(matches!(err, TasksmithError::Structure(_)));
    }

    #[test]
    fn missing_input_names_path() {
        let err = TasksmithError::MissingInput(PathBuf::from("docs/tasks/011.md"));
        assert_eq!(
            err.to_string(),
            "input file 'docs/tasks/011.md' does not exist"
        );
    }
}
