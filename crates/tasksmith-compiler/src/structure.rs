use tasksmith_core::{StructureError, TaskDocument, ValidationTask};

use crate::markdown;
use crate::section_parser::{DocumentOutline, UNTITLED};
use crate::step_parser;

/// Outcome of a structural check: every violation found, or none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructureReport {
    errors: Vec<String>,
}

impl StructureReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_result(self) -> Result<(), StructureError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(StructureError::new(self.errors))
        }
    }
}

/// Run every structural rule against an outline. Never short-circuits.
pub fn check(outline: &DocumentOutline) -> StructureReport {
    let mut errors = Vec::new();

    if outline.title == UNTITLED {
        errors.push("Missing task title. Format: '# Task NNN: Title'".to_string());
    } else if !markdown::is_task_title(&outline.title) {
        errors.push(format!(
            "Invalid task title '{}'. Format: '# Task NNN: Title'",
            outline.title
        ));
    }

    match outline.objective.as_deref() {
        None => errors.push(
            "Missing '## Objective' section. Format: '## Objective\\nDescription'".to_string(),
        ),
        Some("") => errors.push(
            "Empty '## Objective' section. Format: '## Objective\\nDescription'".to_string(),
        ),
        Some(_) => {}
    }

    match &outline.requirements {
        None => errors.push(
            "Missing '## Requirements' section. Format: '## Requirements\\n1. [ ] Requirement'"
                .to_string(),
        ),
        Some(reqs) if !reqs.uses_checkboxes => errors.push(
            "Requirements should use checkboxes. Format: '1. [ ] Requirement'".to_string(),
        ),
        Some(reqs) if reqs.items.is_empty() => errors.push(
            "Requirements section has no numbered items. Format: '1. [ ] Requirement'".to_string(),
        ),
        Some(_) => {}
    }

    if outline.validation_blocks.is_empty() {
        errors.push(
            "No validation tasks found. Format: '- [ ] Validate `file.py`' with indented steps"
                .to_string(),
        );
    }

    let empty: Vec<&str> = outline
        .validation_blocks
        .iter()
        .filter(|b| step_parser::extract_steps(&b.raw_steps).is_empty())
        .map(|b| b.module.as_str())
        .collect();
    if !empty.is_empty() {
        errors.push(format!(
            "Tasks without steps: {}. Each task needs indented steps",
            empty.join(", ")
        ));
    }

    StructureReport { errors }
}

/// Validate an outline and, if it passes, turn it into a [`TaskDocument`].
pub fn build_document(outline: DocumentOutline) -> Result<TaskDocument, StructureError> {
    check(&outline).into_result()?;

    let validation_tasks = outline
        .validation_blocks
        .into_iter()
        .map(|b| ValidationTask {
            steps: step_parser::extract_steps(&b.raw_steps),
            module: b.module,
        })
        .collect();

    Ok(TaskDocument {
        title: outline.title,
        objective: outline.objective.unwrap_or_default(),
        requirements: outline
            .requirements
            .map(|r| r.items)
            .unwrap_or_default(),
        validation_tasks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section_parser::extract_outline;

    const VALID: &str = "# Task 011: DB Ops
## Objective
Validate the DB layer.
## Requirements
1. [ ] Must use real DB
## Tasks
- [ ] Validate `db.py`
   - [ ] Connect
   - [ ] Query
";

    #[test]
    fn valid_document_has_no_errors() {
        let report = check(&extract_outline(VALID));
        assert!(report.is_valid(), "{:?}", report.errors());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn build_document_extracts_steps() {
        let doc = build_document(extract_outline(VALID)).unwrap();
        assert_eq!(doc.title, "Task 011: DB Ops");
        assert_eq!(doc.objective, "Validate the DB layer.");
        assert_eq!(doc.requirements, vec!["Must use real DB"]);
        assert_eq!(
            doc.validation_tasks,
            vec![ValidationTask {
                module: "db.py".into(),
                steps: vec!["Connect".into(), "Query".into()],
            }]
        );
    }

    #[test]
    fn missing_requirements_named() {
        let md = VALID.replace("## Requirements\n", "");
        let report = check(&extract_outline(&md));
        assert!(!report.is_valid());
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0].contains("Requirements"));
    }

    #[test]
    fn missing_title() {
        let md = VALID.replace("# Task 011: DB Ops\n", "");
        let report = check(&extract_outline(&md));
        assert_eq!(report.errors(), ["Missing task title. Format: '# Task NNN: Title'"]);
    }

    #[test]
    fn malformed_title() {
        let md = VALID.replace("# Task 011: DB Ops", "# DB Ops");
        let report = check(&extract_outline(&md));
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0].contains("'DB Ops'"));
    }

    #[test]
    fn missing_and_empty_objective_differ() {
        let missing = VALID.replace("## Objective\nValidate the DB layer.\n", "");
        let empty = VALID.replace("Validate the DB layer.\n", "");
        assert!(check(&extract_outline(&missing)).errors()[0].starts_with("Missing '## Objective'"));
        assert!(check(&extract_outline(&empty)).errors()[0].starts_with("Empty '## Objective'"));
    }

    #[test]
    fn requirements_without_checkboxes() {
        let md = VALID.replace("1. [ ] Must use real DB", "1. Must use real DB");
        let report = check(&extract_outline(&md));
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0].starts_with("Requirements should use checkboxes"));
    }

    #[test]
    fn requirements_with_only_bullets() {
        let md = VALID.replace("1. [ ] Must use real DB", "- [ ] Must use real DB");
        let report = check(&extract_outline(&md));
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0].contains("no numbered items"));
    }

    #[test]
    fn no_validation_tasks() {
        let md = "# Task 1: T\n## Objective\nO\n## Requirements\n1. [ ] R\n";
        let report = check(&extract_outline(md));
        assert_eq!(report.errors().len(), 1);
        assert!(report.errors()[0].starts_with("No validation tasks found"));
    }

    #[test]
    fn every_stepless_module_named_in_one_error() {
        let md = format!(
            "{VALID}- [ ] Validate `empty_a.py`\n\n- [ ] Validate `empty_b.py`\nprose\n"
        );
        let report = check(&extract_outline(&md));
        assert_eq!(
            report.errors(),
            ["Tasks without steps: empty_a.py, empty_b.py. Each task needs indented steps"]
        );
    }

    #[test]
    fn all_errors_collected() {
        let report = check(&extract_outline("just prose\n"));
        assert_eq!(report.errors().len(), 4);
        let err = report.into_result().unwrap_err();
        let text = err.to_string();
        assert!(text.contains("Missing task title"));
        assert!(text.contains("Missing '## Objective'"));
        assert!(text.contains("Missing '## Requirements'"));
        assert!(text.contains("No validation tasks found"));
        assert!(text.contains("Required markdown format:"));
    }

    #[test]
    fn build_document_rejects_invalid() {
        let md = VALID.replace("   - [ ] Connect\n   - [ ] Query\n", "");
        let err = build_document(extract_outline(&md)).unwrap_err();
        assert!(err.errors()[0].contains("db.py"));
    }
}
