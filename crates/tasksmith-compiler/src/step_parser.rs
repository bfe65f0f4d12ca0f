use crate::markdown;

/// Extract the step list from a validation block.
///
/// One step per indented unchecked `- [ ]` line, in order. Anything else in
/// the block is skipped; an empty result is reported later, not here.
pub fn extract_steps(block: &str) -> Vec<String> {
    block
        .lines()
        .filter_map(|line| markdown::parse_step_line(line, 1))
        .map(str::to_string)
        .collect()
}
