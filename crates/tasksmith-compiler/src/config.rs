use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tasksmith_core::environment::DEFAULT_ACTIVATE;
use tasksmith_core::Environment;

#[derive(Debug, Parser)]
#[command(
    name = "tasksmith",
    version,
    about = "Compile markdown validation task lists into agent task records"
)]
pub struct CompilerConfig {
    /// Markdown task file to compile
    pub input: PathBuf,

    /// JSON file to write (file mode)
    pub output: Option<PathBuf>,

    /// Print the task list to stdout instead of writing a file
    #[arg(long, conflicts_with = "check")]
    pub json_output: bool,

    /// Only check the markdown structure and report problems
    #[arg(long)]
    pub check: bool,

    /// Directory the agent works in (defaults to the current directory)
    #[arg(long, env = "TASKSMITH_PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Command that activates the project environment
    #[arg(long, env = "TASKSMITH_ACTIVATE", default_value = DEFAULT_ACTIVATE)]
    pub activate: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Write pretty JSON to a file.
    File(PathBuf),
    /// Write pretty JSON to stdout; progress goes to stderr.
    Json,
    /// Structural check only.
    Check,
}

impl CompilerConfig {
    pub fn mode(&self) -> Result<Mode> {
        match (&self.output, self.json_output, self.check) {
            (Some(_), true, _) => bail!("--json-output takes no output path"),
            (Some(_), _, true) => bail!("--check takes no output path"),
            (None, true, _) => Ok(Mode::Json),
            (None, _, true) => Ok(Mode::Check),
            (Some(path), false, false) => Ok(Mode::File(path.clone())),
            (None, false, false) => {
                bail!("an output path is required unless --json-output or --check is given")
            }
        }
    }

    /// Environment embedded in the prompts and checked by the verifier.
    pub fn environment(&self) -> Result<Environment> {
        let project_dir = match &self.project_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("resolve current directory")?,
        };
        // The agent changes into the project dir first, so a relative input
        // path would resolve against the wrong directory.
        let task_file = std::path::absolute(&self.input)
            .with_context(|| format!("resolve task file path {}", self.input.display()))?;
        Ok(
            Environment::new(project_dir.display().to_string(), task_file.display().to_string())
                .with_activate(&self.activate),
        )
    }
}

/// Process exit status for an argument parsing failure.
///
/// `--help` and `--version` are reported by clap as errors but succeed; every
/// real usage error exits 1.
pub fn usage_exit_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}
