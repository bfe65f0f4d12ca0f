use tasksmith_core::{Environment, TaskDocument};

/// Fixed policy lines appended to every CONTEXT block after the objective.
pub const CONTEXT_POLICIES: [&str; 2] = [
    "Validation must use real database connections, not mocks",
    "Results must be verified with both JSON and rich table outputs",
];

/// Document-level fields shared by every prompt compiled from one document.
#[derive(Debug, Clone)]
pub struct PromptContext {
    pub title: String,
    pub objective: String,
    pub requirements: Vec<String>,
    pub environment: Environment,
}

impl PromptContext {
    pub fn new(document: &TaskDocument, environment: &Environment) -> Self {
        Self {
            title: document.title.clone(),
            objective: document.objective.clone(),
            requirements: document.requirements.clone(),
            environment: environment.clone(),
        }
    }

    /// `cd <project> && <activate>` followed by a blank line.
    pub fn append_setup(&self, prompt: &mut String) {
        prompt.push_str(&format!(
            "{} && {}\n\n",
            self.environment.cd_command(),
            self.environment.activate
        ));
    }

    /// Objective, fixed policies, and where the module lives.
    pub fn append_context(&self, prompt: &mut String, module: &str) {
        prompt.push_str("CONTEXT:\n");
        prompt.push_str(&format!("- {}\n", self.objective));
        for policy in CONTEXT_POLICIES {
            prompt.push_str(&format!("- {policy}\n"));
        }
        prompt.push_str(&format!(
            "- File is located at {}\n\n",
            self.environment.module_path(module)
        ));
    }

    pub fn append_requirements(&self, prompt: &mut String) {
        prompt.push_str("REQUIREMENTS:\n");
        append_numbered(prompt, &self.requirements);
    }
}

/// Append a 1-indexed list, one entry per line.
pub fn append_numbered(prompt: &mut String, items: &[String]) {
    for (i, item) in items.iter().enumerate() {
        prompt.push_str(&format!("{}. {}\n", i + 1, item));
    }
}
