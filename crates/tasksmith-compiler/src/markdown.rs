//! Line-level shape rules for task documents.
//!
//! Each rule looks at a single line so it can be tested on its own; the
//! section and step parsers compose them.

use tasksmith_core::document::split_task_title;

/// Minimum leading whitespace for a step under a `Validate` entry.
pub const STEP_INDENT: usize = 3;

/// Exact box form for validation entries and steps. Requirements also take
/// `[]` and `[x]`.
const OPEN_DASH_BOX: &str = "- [ ] ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: usize,
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-` or `*`
    Bullet,
    /// `<digits>.`
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox<'a> {
    pub indent: usize,
    pub marker: ListMarker,
    pub checked: bool,
    pub text: &'a str,
}

/// `#`-run at column 0, then whitespace, then non-empty text.
pub fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let level = line.len() - line.trim_start_matches('#').len();
    if level == 0 {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some(Heading { level, text })
}

/// Any line starting with `##` closes the current `##` section.
pub fn is_section_break(line: &str) -> bool {
    line.starts_with("##")
}

/// Level-2 heading whose text equals `name`, ignoring ASCII case.
pub fn is_section_heading(line: &str, name: &str) -> bool {
    matches!(parse_heading(line), Some(h) if h.level == 2 && h.text.eq_ignore_ascii_case(name))
}

/// `Task <number>: <text>`; `Task` is case-sensitive.
pub fn is_task_title(title: &str) -> bool {
    matches!(split_task_title(title), Some((_, name)) if !name.trim().is_empty())
}

pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// `[-*] [ ] text` or `<n>. [ ] text`, with `[x]`, `[X]` and `[]` accepted
/// as box forms.
pub fn parse_checkbox(line: &str) -> Option<Checkbox<'_>> {
    let indent = indent_width(line);
    let body = line.trim_start();

    let (marker, rest) = if let Some(rest) = body
        .strip_prefix("- ")
        .or_else(|| body.strip_prefix("* "))
    {
        (ListMarker::Bullet, rest)
    } else {
        let digits = body.len() - body.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        let rest = body[digits..].strip_prefix('.')?;
        if digits == 0 || !rest.starts_with(char::is_whitespace) {
            return None;
        }
        (ListMarker::Numbered, rest)
    };

    let rest = rest.trim_start();
    let (checked, rest) = if let Some(r) = rest.strip_prefix("[ ]").or_else(|| rest.strip_prefix("[]")) {
        (false, r)
    } else if let Some(r) = rest.strip_prefix("[x]").or_else(|| rest.strip_prefix("[X]")) {
        (true, r)
    } else {
        return None;
    };

    let text = rest.trim();
    if text.is_empty() {
        return None;
    }

    Some(Checkbox {
        indent,
        marker,
        checked,
        text,
    })
}

/// Whether the line opens with the literal `- [ ] ` the agent later ticks.
fn is_open_dash_box(line: &str) -> bool {
    line.trim_start().starts_with(OPEN_DASH_BOX)
}

/// Module name from an unchecked `- [ ] Validate `<module>`` entry.
pub fn parse_validate_entry(line: &str) -> Option<&str> {
    if !is_open_dash_box(line) {
        return None;
    }
    let cb = parse_checkbox(line)?;
    let rest = cb.text.strip_prefix("Validate `")?;
    let end = rest.find('`')?;
    let module = &rest[..end];
    if module.is_empty() {
        return None;
    }
    Some(module)
}

/// Unchecked `- [ ]` checkbox indented by at least `min_indent`.
pub fn parse_step_line(line: &str, min_indent: usize) -> Option<&str> {
    if !is_open_dash_box(line) {
        return None;
    }
    let cb = parse_checkbox(line)?;
    if cb.indent < min_indent {
        return None;
    }
    Some(cb.text)
}
