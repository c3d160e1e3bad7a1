//! Category resolution: the nearest header line above a block
//!
//! ```text
//! ### Window management       ← header (category descriptor prefix)
//! # Close window              ← block resolves to "Window management"
//! ```

/// Category for blocks with no header above them
pub const MISC_CATEGORY: &str = "misc";

/// Resolve the category for a block whose description sits at `block_line`
///
/// Scans backward from the block for the closest header line.
pub fn resolve_category(text: &str, block_line: usize, prefix: &str) -> String {
    let lines: Vec<&str> = text.lines().take(block_line).collect();
    let label = lines
        .iter()
        .rev()
        .find(|line| line.starts_with(prefix))
        .map(|header| normalize_label(header))
        .unwrap_or_default();

    if label.is_empty() {
        MISC_CATEGORY.to_string()
    } else {
        label
    }
}

/// Keep alphanumerics, whitespace, `&` and `|`, then trim
pub fn normalize_label(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '&' | '|'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Every header in a document, indexed by line, for repeated lookups
///
/// Gives the same answer as [`resolve_category`] without rescanning the text per block.
#[derive(Debug, Clone, Default)]
pub struct CategoryIndex {
    /// (line index, normalized label), ascending by line
    headers: Vec<(usize, String)>,
}

impl CategoryIndex {
    pub fn build(text: &str, prefix: &str) -> Self {
        let headers = text
            .lines()
            .enumerate()
            .filter(|(_, line)| line.starts_with(prefix))
            .map(|(index, line)| (index, normalize_label(line)))
            .collect();
        Self { headers }
    }

    /// Category of the nearest header strictly above `block_line`
    pub fn resolve(&self, block_line: usize) -> &str {
        let above = self.headers.partition_point(|(line, _)| *line < block_line);
        match above.checked_sub(1).map(|i| self.headers[i].1.as_str()) {
            Some(label) if !label.is_empty() => label,
            _ => MISC_CATEGORY,
        }
    }

    /// Number of headers found
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}
