use crate::markdown::{self, ListMarker, STEP_INDENT};

/// Returned by [`extract_title`] when the document has no `# ` heading.
pub const UNTITLED: &str = "Untitled Task";

/// Everything pulled out of a task document before it is validated.
///
/// Extraction never fails: a missing piece shows up as a sentinel here and
/// is reported by `structure::check`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutline {
    pub title: String,
    /// `None` when there is no `## Objective` heading at all.
    pub objective: Option<String>,
    /// `None` when there is no `## Requirements` heading at all.
    pub requirements: Option<RequirementsSection>,
    pub validation_blocks: Vec<ValidationBlock>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequirementsSection {
    /// Text of each numbered checkbox line, in document order.
    pub items: Vec<String>,
    /// Whether any line in the section is a checkbox of any shape.
    pub uses_checkboxes: bool,
}

/// A `Validate` entry and the raw indented lines under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationBlock {
    pub module: String,
    pub raw_steps: String,
}

pub fn extract_outline(md: &str) -> DocumentOutline {
    DocumentOutline {
        title: extract_title(md),
        objective: extract_objective(md),
        requirements: extract_requirements(md),
        validation_blocks: extract_validation_blocks(md),
    }
}

/// Text of the first level-1 heading.
pub fn extract_title(md: &str) -> String {
    md.lines()
        .filter_map(markdown::parse_heading)
        .find(|h| h.level == 1)
        .map(|h| h.text.to_string())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Trimmed body of `## Objective`; empty string if the heading has no body.
pub fn extract_objective(md: &str) -> Option<String> {
    section_lines(md, "Objective").map(|lines| lines.join("\n").trim().to_string())
}

pub fn extract_requirements(md: &str) -> Option<RequirementsSection> {
    let lines = section_lines(md, "Requirements")?;
    let mut section = RequirementsSection::default();

    for line in lines {
        let Some(cb) = markdown::parse_checkbox(line) else {
            continue;
        };
        section.uses_checkboxes = true;
        if cb.marker == ListMarker::Numbered {
            section.items.push(cb.text.to_string());
        }
    }

    Some(section)
}

/// Every unchecked `- [ ] Validate `<module>`` entry with its step block.
///
/// A block is the run of following lines that are unchecked `-` checkboxes
/// indented at least [`STEP_INDENT`] and deeper than the entry itself.
/// Blank lines inside the run are kept; blank lines after it are not.
pub fn extract_validation_blocks(md: &str) -> Vec<ValidationBlock> {
    let lines: Vec<&str> = md.lines().collect();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(module) = markdown::parse_validate_entry(lines[i]) else {
            i += 1;
            continue;
        };

        let min_indent = STEP_INDENT.max(markdown::indent_width(lines[i]) + 1);
        let mut block: Vec<&str> = Vec::new();
        let mut j = i + 1;

        while j < lines.len() {
            if markdown::parse_step_line(lines[j], min_indent).is_some() {
                block.push(lines[j]);
                j += 1;
                continue;
            }
            if lines[j].trim().is_empty() {
                if let Some(k) = lines[j..].iter().position(|l| !l.trim().is_empty()) {
                    if markdown::parse_step_line(lines[j + k], min_indent).is_some() {
                        block.extend_from_slice(&lines[j..j + k]);
                        j += k;
                        continue;
                    }
                }
            }
            break;
        }

        blocks.push(ValidationBlock {
            module: module.to_string(),
            raw_steps: block.join("\n"),
        });
        i = j;
    }

    blocks
}

/// Lines between the `## <name>` heading and the next `##` line.
fn section_lines<'a>(md: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let mut lines = md.lines();
    lines.find(|line| markdown::is_section_heading(line, name))?;
    Some(
        lines
            .take_while(|line| !markdown::is_section_break(line))
            .collect(),
    )
}
