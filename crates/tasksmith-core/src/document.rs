/// A task document that passed structural validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDocument {
    pub title: String,
    pub objective: String,
    pub requirements: Vec<String>,
    pub validation_tasks: Vec<ValidationTask>,
}

/// One module to validate plus its ordered checklist.
///
/// The same module may appear more than once in a document; each entry
/// compiles to its own prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationTask {
    pub module: String,
    pub steps: Vec<String>,
}

/// Split `Task <digits>:<rest>` into the digits and the rest.
///
/// `Task` is case-sensitive and must be followed by at least one whitespace
/// character. Title validation and task-id derivation both go through here.
pub fn split_task_title(title: &str) -> Option<(&str, &str)> {
    let rest = title.strip_prefix("Task")?;
    let number = rest.trim_start();
    if number.len() == rest.len() {
        return None;
    }
    let digits = number.len() - number.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let name = number[digits..].strip_prefix(':')?;
    Some((&number[..digits], name))
}
