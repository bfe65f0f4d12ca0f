/// Append the execution contract for one module.
///
/// The agent is told to tick the module's entry in `task_file` itself; the
/// compiler never edits the source document.
pub fn append_instructions(prompt: &mut String, module: &str, task_file: &str) {
    prompt.push_str("INSTRUCTIONS:\n");
    prompt.push_str(
        "1. Execute each validation step in sequence\n\
         2. For each step:\n   \
         - Show the actual code executed with full paths\n   \
         - Show the actual output\n   \
         - Verify the output matches expectations\n   \
         - Include both JSON and rich table outputs where appropriate\n\
         3. After completing all steps:\n",
    );
    prompt.push_str(&format!(
        "   - Update the task list by editing {task_file}\n"
    ));
    prompt.push_str(&format!(
        "   - Change \"- [ ] Validate `{module}`\" to \"- [x] Validate `{module}`\"\n"
    ));
    prompt.push_str(
        "   - Document any issues found and fixes applied\n   \
         - Confirm all requirements were met\n   \
         - Confirm actual database connection was used (no mocks)\n\n",
    );
}
