use tasksmith_core::TaskRecord;

/// Wrap each prompt in a task record, keeping order. No checks happen here.
pub fn assemble<I, S>(prompts: I) -> Vec<TaskRecord>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    prompts.into_iter().map(TaskRecord::from_prompt).collect()
}
