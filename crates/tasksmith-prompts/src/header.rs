//! Header block the execution agent parses to identify a task.
//!
//! These tokens are a wire contract: the agent scans the command text for
//! them verbatim, and the output verifier warns when one is missing.

use tasksmith_core::document::split_task_title;

pub const TASK_TYPE_HEADER: &str = "TASK TYPE:";
pub const TASK_ID_HEADER: &str = "TASK ID:";
pub const CURRENT_SUBTASK_HEADER: &str = "CURRENT SUBTASK:";

/// All header tokens, in the order they are emitted.
pub const HEADER_TOKENS: [&str; 3] = [TASK_TYPE_HEADER, TASK_ID_HEADER, CURRENT_SUBTASK_HEADER];

pub const TASK_TYPE: &str = "Validation";
pub const TASK_ID_PREFIX: &str = "db-validation-";

/// Used when the title carries no `Task <number>:` marker.
pub const UNKNOWN_TASK_ID: &str = "unknown";

/// Append the three-line header block followed by a blank line.
pub fn append_header(prompt: &mut String, task_id: &str, module: &str) {
    prompt.push_str(&format!("{TASK_TYPE_HEADER} {TASK_TYPE}\n"));
    prompt.push_str(&format!("{TASK_ID_HEADER} {TASK_ID_PREFIX}{task_id}\n"));
    prompt.push_str(&format!("{CURRENT_SUBTASK_HEADER} Validate {module}\n\n"));
}

/// Pull the number out of `Task <number>:` anywhere in the title.
pub fn task_number(title: &str) -> Option<&str> {
    title
        .match_indices("Task")
        .find_map(|(start, _)| split_task_title(&title[start..]).map(|(number, _)| number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_block_layout() {
        let mut out = String::new();
        append_header(&mut out, "011", "db.py");
        assert_eq!(
            out,
            "TASK TYPE: Validation\nTASK ID: db-validation-011\nCURRENT SUBTASK: Validate db.py\n\n"
        );
    }

    #[test]
    fn header_contains_every_token() {
        let mut out = String::new();
        append_header(&mut out, UNKNOWN_TASK_ID, "x.py");
        for token in HEADER_TOKENS {
            assert!(out.contains(token), "missing {token}");
        }
    }

    #[test]
    fn task_number_keeps_leading_zeros() {
        assert_eq!(task_number("Task 011: DB Ops"), Some("011"));
    }

    #[test]
    fn task_number_later_in_title() {
        assert_eq!(task_number("Phase 2 / Task 7: cleanup"), Some("7"));
    }

    #[test]
    fn task_number_requires_colon() {
        assert_eq!(task_number("Task 011 DB Ops"), None);
        assert_eq!(task_number("Task : nothing"), None);
        assert_eq!(task_number("Task 12a: mixed"), None);
    }

    #[test]
    fn task_number_skips_non_matching_occurrence() {
        assert_eq!(task_number("Task list for Task 3: things"), Some("3"));
    }

    #[test]
    fn task_number_accepts_any_whitespace_after_task() {
        assert_eq!(task_number("Task  7: x"), Some("7"));
    }

    #[test]
    fn task_number_is_case_sensitive() {
        assert_eq!(task_number("task 5: lower"), None);
    }
}
