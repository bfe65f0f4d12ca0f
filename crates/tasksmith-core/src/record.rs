use serde::{Deserialize, Serialize};

/// Tool name the execution agent dispatches on.
pub const TOOL_NAME: &str = "claude_code";

/// Per-task execution budget handed to the agent (5 minutes).
pub const DEFAULT_TIMEOUT_MS: u64 = 300_000;

/// One unit of work for the execution agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub tool: String,
    pub arguments: ToolArguments,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolArguments {
    pub command: String,
    pub dangerously_skip_permissions: bool,
    pub timeout_ms: u64,
}

impl TaskRecord {
    /// Wrap a rendered prompt with the fixed protocol values.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            arguments: ToolArguments {
                command: prompt.into(),
                dangerously_skip_permissions: true,
                timeout_ms: DEFAULT_TIMEOUT_MS,
            },
        }
    }
}
