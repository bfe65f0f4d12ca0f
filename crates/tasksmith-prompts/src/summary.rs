/// Labeled blanks the agent fills in when it finishes.
pub const COMPLETION_SUMMARY: &str = "\
COMPLETION SUMMARY:
- What was validated:
- Results:
- Files modified:
- Issues encountered:
- Fixes applied:
- Requirements met: [Yes/No with details]
- Used real database: [Confirmed/Not confirmed]
";

pub fn append_summary(prompt: &mut String, module: &str) {
    prompt.push_str("After completion, provide summary in this format:\n\n");
    prompt.push_str(COMPLETION_SUMMARY);
    prompt.push_str(&format!("\nBegin validation of {module} now.\n"));
}
