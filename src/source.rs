/// A cleaned, non-empty source line and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize, // 1-based
    pub text: String,
}

/// Everything before the first `//`, trimmed.
pub fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(p) => line[..p].trim(),
        None => line.trim(),
    }
}

pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

pub fn clean_line(line: &str) -> String {
    strip_whitespace(strip_comment(line))
}

/// Label declarations look like `(LOOP)`.
pub fn is_label(line: &str) -> bool {
    line.starts_with('(')
}

/// Cleans every line of `text`, dropping those left empty.
pub fn clean_lines(text: &str) -> Vec<SourceLine> {
    text.lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let text = clean_line(raw);
            (!text.is_empty()).then(|| SourceLine { number: i + 1, text })
        })
        .collect()
}
