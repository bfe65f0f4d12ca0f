use std::path::Path;

use tasksmith_core::{Environment, Stage, TaskRecord, TasksmithError};
use tasksmith_prompts::PromptContext;
use tasksmith_verify::SchemaVerifier;
use tracing::debug;

use crate::assembler;
use crate::progress::ProgressSink;
use crate::section_parser;
use crate::structure::{self, StructureReport};

/// Compile a task file into verified task records.
///
/// Either the whole document compiles to a valid record list or an error is
/// returned; there is no partial output.
pub fn compile_file(
    path: &Path,
    environment: &Environment,
    progress: &dyn ProgressSink,
) -> Result<Vec<TaskRecord>, TasksmithError> {
    progress.notify(Stage::Load, "Loading task file...");
    let md = load(path)?;
    compile_markdown(&md, environment, progress)
}

/// Same as [`compile_file`] starting from text already in memory.
pub fn compile_markdown(
    md: &str,
    environment: &Environment,
    progress: &dyn ProgressSink,
) -> Result<Vec<TaskRecord>, TasksmithError> {
    progress.notify(Stage::Extract, "Extracting sections...");
    let outline = section_parser::extract_outline(md);
    debug!(
        title = %outline.title,
        blocks = outline.validation_blocks.len(),
        "extracted outline"
    );

    progress.notify(Stage::Validate, "Validating markdown structure...");
    let document = structure::build_document(outline)?;

    let total = document.validation_tasks.len();
    progress.notify(
        Stage::Compile,
        &format!("Converting {total} validation tasks..."),
    );
    let ctx = PromptContext::new(&document, environment);
    let mut prompts = Vec::with_capacity(total);
    for (i, task) in document.validation_tasks.iter().enumerate() {
        progress.notify(
            Stage::Compile,
            &format!("Task {}/{}: Converting {}", i + 1, total, task.module),
        );
        prompts.push(tasksmith_prompts::compile_prompt(&ctx, task));
    }
    let records = assembler::assemble(prompts);

    progress.notify(Stage::VerifyOutput, "Validating task record format...");
    let result = SchemaVerifier::new(environment.clone()).verify_records(&records)?;
    if !result.is_valid() {
        let messages: Vec<String> = result.errors().map(ToString::to_string).collect();
        return Err(TasksmithError::Schema(messages.join("; ")));
    }

    progress.notify(Stage::VerifyOutput, "Conversion complete!");
    Ok(records)
}

/// Load and extract only, reporting structural problems without compiling.
pub fn check_file(
    path: &Path,
    progress: &dyn ProgressSink,
) -> Result<StructureReport, TasksmithError> {
    progress.notify(Stage::Load, "Loading task file...");
    let md = load(path)?;
    progress.notify(Stage::Extract, "Extracting sections...");
    let outline = section_parser::extract_outline(&md);
    progress.notify(Stage::Validate, "Validating markdown structure...");
    Ok(structure::check(&outline))
}

/// Pretty-printed JSON array, as written to files and stdout.
pub fn render_json(records: &[TaskRecord]) -> Result<String, TasksmithError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `path`, creating missing parent directories.
pub fn write_records(path: &Path, records: &[TaskRecord]) -> Result<(), TasksmithError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| TasksmithError::io(dir, e))?;
    }
    let json = render_json(records)?;
    std::fs::write(path, json).map_err(|e| TasksmithError::io(path, e))
}

fn load(path: &Path) -> Result<String, TasksmithError> {
    if !path.is_file() {
        return Err(TasksmithError::MissingInput(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|e| TasksmithError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::SilentProgress;
    use std::cell::RefCell;

    const SCENARIO: &str = "# Task 011: DB Ops
## Objective
Validate the DB layer.
## Requirements
1. [ ] Must use real DB
## Tasks
- [ ] Validate `db.py`
   - [ ] Connect
   - [ ] Query
";

    fn env() -> Environment {
        Environment::new("/srv/app", "docs/tasks/011_db_ops.md")
    }

    #[test]
    fn scenario_compiles_to_one_record() {
        let records = compile_markdown(SCENARIO, &env(), &SilentProgress).unwrap();
        assert_eq!(records.len(), 1);
        let command = &records[0].arguments.command;
        assert!(command.contains("TASK ID: db-validation-011"));
        assert!(command.contains("CURRENT SUBTASK: Validate db.py"));
        assert!(command.contains("REQUIREMENTS:\n1. Must use real DB\n"));
        assert!(command.contains("VALIDATION STEPS for db.py:\n1. Connect\n2. Query\n"));
        assert!(records[0].arguments.dangerously_skip_permissions);
        let json = render_json(&records).unwrap();
        assert!(json.contains("\"dangerously_skip_permissions\": true"));
    }

    #[test]
    fn spaced_task_number_still_yields_task_id() {
        let md = SCENARIO.replace("# Task 011:", "# Task  011:");
        let records = compile_markdown(&md, &env(), &SilentProgress).unwrap();
        assert!(records[0].arguments.command.contains("TASK ID: db-validation-011"));
    }

    #[test]
    fn unspaced_validate_box_not_compiled() {
        let md = SCENARIO.replace("- [ ] Validate `db.py`", "- [] Validate `db.py`");
        let err = compile_markdown(&md, &env(), &SilentProgress).unwrap_err();
        assert!(matches!(err, TasksmithError::Structure(_)));
    }

    #[test]
    fn scenario_without_requirements_heading_fails() {
        let md = SCENARIO.replace("## Requirements\n", "");
        let err = compile_markdown(&md, &env(), &SilentProgress).unwrap_err();
        assert!(matches!(err, TasksmithError::Structure(_)));
        assert!(err.to_string().contains("Requirements"));
    }

    #[test]
    fn stages_reported_in_order() {
        let seen = RefCell::new(Vec::new());
        let sink = |stage: Stage, detail: &str| seen.borrow_mut().push((stage, detail.to_string()));
        compile_markdown(SCENARIO, &env(), &sink).unwrap();
        let stages: Vec<Stage> = seen.borrow().iter().map(|(s, _)| *s).collect();
        assert_eq!(
            stages,
            vec![
                Stage::Extract,
                Stage::Validate,
                Stage::Compile,
                Stage::Compile,
                Stage::VerifyOutput,
                Stage::VerifyOutput,
            ]
        );
        assert_eq!(seen.borrow()[3].1, "Task 1/1: Converting db.py");
    }

    #[test]
    fn invalid_input_stops_before_compile() {
        let seen = RefCell::new(Vec::new());
        let sink = |stage: Stage, _: &str| seen.borrow_mut().push(stage);
        let _ = compile_markdown("nothing here", &env(), &sink);
        assert_eq!(seen.into_inner(), vec![Stage::Extract, Stage::Validate]);
    }

    #[test]
    fn placeholder_module_path_rejected_at_output() {
        let broken = Environment::new("/path/to/project", "t.md");
        let err = compile_markdown(SCENARIO, &broken, &SilentProgress).unwrap_err();
        match err {
            TasksmithError::Schema(msg) => assert!(msg.contains("Task 1: "), "{msg}"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_reported() {
        let err = compile_file(Path::new("/nonexistent/task.md"), &env(), &SilentProgress)
            .unwrap_err();
        assert!(matches!(err, TasksmithError::MissingInput(_)));
    }
}
