use serde_json::{Map, Value};
use tasksmith_core::record::TOOL_NAME;
use tasksmith_core::{Environment, TaskRecord};
use tasksmith_prompts::HEADER_TOKENS;
use tracing::{error, warn};

/// Left behind when a template path was never substituted.
pub const PLACEHOLDER_PATH: &str = "/path/to/";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Logged, does not fail the run.
    Warning,
    /// Rejects the whole record set.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// 1-based record position; `None` for problems with the set as a whole.
    pub task: Option<usize>,
    pub severity: Severity,
    pub message: String,
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.task {
            Some(n) => write!(f, "Task {n}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyStatus {
    Passed,
    Failed,
}

#[derive(Debug, Clone)]
pub struct VerifyResult {
    pub status: VerifyStatus,
    pub issues: Vec<Issue>,
}

impl VerifyResult {
    pub fn is_valid(&self) -> bool {
        self.status == VerifyStatus::Passed
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warning)
    }
}

/// Checks assembled records against the execution agent's schema.
///
/// Records are inspected as JSON so that values which never came from
/// [`TaskRecord`] (hand-edited files, other producers) get the same checks.
#[derive(Debug, Clone)]
pub struct SchemaVerifier {
    environment: Environment,
}

impl SchemaVerifier {
    /// `environment` is what the commands are expected to set up.
    pub fn new(environment: Environment) -> Self {
        Self { environment }
    }

    pub fn verify_records(&self, records: &[TaskRecord]) -> Result<VerifyResult, serde_json::Error> {
        let value = serde_json::to_value(records)?;
        Ok(self.verify(&value))
    }

    /// Verify a whole task list. Anything other than a JSON array fails.
    pub fn verify(&self, tasks: &Value) -> VerifyResult {
        let mut issues = Vec::new();

        match tasks.as_array() {
            None => issues.push(Issue {
                task: None,
                severity: Severity::Error,
                message: "invalid format - not a list".into(),
            }),
            Some(records) if records.is_empty() => issues.push(Issue {
                task: None,
                severity: Severity::Warning,
                message: "empty tasks list".into(),
            }),
            Some(records) => {
                for (i, record) in records.iter().enumerate() {
                    self.verify_record(i + 1, record, &mut issues);
                }
            }
        }

        for issue in &issues {
            match issue.severity {
                Severity::Warning => warn!("{issue}"),
                Severity::Error => error!("{issue}"),
            }
        }

        let status = if issues.iter().any(|i| i.severity == Severity::Error) {
            VerifyStatus::Failed
        } else {
            VerifyStatus::Passed
        };

        VerifyResult { status, issues }
    }

    // Stops at the first error for a record: later checks assume the shape
    // the earlier ones established.
    fn verify_record(&self, n: usize, record: &Value, issues: &mut Vec<Issue>) {
        let mut fail = |message: String| {
            issues.push(Issue {
                task: Some(n),
                severity: Severity::Error,
                message,
            })
        };

        let Some(record) = record.as_object() else {
            fail("record is not an object".into());
            return;
        };

        match record.get("tool") {
            None => {
                fail("missing required field 'tool'".into());
                return;
            }
            Some(Value::String(tool)) if tool == TOOL_NAME => {}
            Some(other) => {
                fail(format!(
                    "incorrect tool value. Expected '{TOOL_NAME}', got {other}"
                ));
                return;
            }
        }

        let arguments = match record.get("arguments") {
            None => {
                fail("missing required field 'arguments'".into());
                return;
            }
            Some(Value::Object(arguments)) => arguments,
            Some(other) => {
                fail(format!(
                    "invalid 'arguments' type. Expected object, got {}",
                    json_type(other)
                ));
                return;
            }
        };

        let command = match arguments.get("command") {
            None => {
                fail("missing required field 'arguments.command'".into());
                return;
            }
            Some(Value::String(command)) => command,
            Some(other) => {
                fail(format!(
                    "invalid 'arguments.command' type. Expected string, got {}",
                    json_type(other)
                ));
                return;
            }
        };

        if command.contains(PLACEHOLDER_PATH) {
            fail(format!("command contains ambiguous path '{PLACEHOLDER_PATH}'"));
            return;
        }

        if let Err(message) = check_skip_permissions(arguments) {
            fail(message);
            return;
        }

        self.command_warnings(n, command, arguments, issues);
    }

    fn command_warnings(
        &self,
        n: usize,
        command: &str,
        arguments: &Map<String, Value>,
        issues: &mut Vec<Issue>,
    ) {
        let mut note = |message: String| {
            issues.push(Issue {
                task: Some(n),
                severity: Severity::Warning,
                message,
            })
        };

        if !command.contains(&self.environment.cd_command()) {
            note("missing explicit working directory command".into());
        }
        if !command.contains(&self.environment.activate) {
            note("missing environment activation".into());
        }
        for token in HEADER_TOKENS {
            if !command.contains(token) {
                note(format!("missing '{token}' section"));
            }
        }
        if !arguments.contains_key("timeout_ms") {
            note("missing 'timeout_ms' field".into());
        }
    }
}

fn check_skip_permissions(arguments: &Map<String, Value>) -> Result<(), String> {
    match arguments.get("dangerously_skip_permissions") {
        None => Err("missing required field 'arguments.dangerously_skip_permissions'".into()),
        Some(Value::Bool(true)) => Ok(()),
        Some(other) => Err(format!(
            "incorrect value for 'arguments.dangerously_skip_permissions'. Expected true, got {other}"
        )),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
