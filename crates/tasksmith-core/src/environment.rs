pub const DEFAULT_ACTIVATE: &str = "source .venv/bin/activate";

/// Where the execution agent runs, and which file it reports back into.
///
/// Supplied by configuration; nothing here is read from the task document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Directory the agent changes into before doing anything else.
    pub project_dir: String,
    /// Shell command that activates the project environment.
    pub activate: String,
    /// Path of the source markdown the agent ticks off when done.
    pub task_file: String,
}

impl Environment {
    pub fn new(project_dir: impl Into<String>, task_file: impl Into<String>) -> Self {
        Self {
            project_dir: project_dir.into(),
            activate: DEFAULT_ACTIVATE.to_string(),
            task_file: task_file.into(),
        }
    }

    pub fn with_activate(mut self, activate: impl Into<String>) -> Self {
        self.activate = activate.into();
        self
    }

    /// `cd <dir>` fragment, always with a trailing slash so paths join cleanly.
    pub fn cd_command(&self) -> String {
        format!("cd {}", self.project_root())
    }

    /// Project directory with exactly one trailing slash.
    pub fn project_root(&self) -> String {
        format!("{}/", self.project_dir.trim_end_matches('/'))
    }

    /// Absolute-looking location of a module inside the project.
    pub fn module_path(&self, module: &str) -> String {
        format!("{}{}", self.project_root(), module.trim_start_matches('/'))
    }
}
