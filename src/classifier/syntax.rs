use serde::{Deserialize, Serialize};

/// Comment markers recognised by the classifier.
///
/// Empty markers are treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentSyntax {
    /// Line comment markers; the earliest one found on a line wins.
    #[serde(default = "default_line_markers")]
    pub line: Vec<String>,

    #[serde(default = "default_block_start")]
    pub block_start: String,

    #[serde(default = "default_block_end")]
    pub block_end: String,
}

impl CommentSyntax {
    #[must_use]
    pub fn new(line: Vec<&str>, block: (&str, &str)) -> Self {
        Self {
            line: line.into_iter().map(String::from).collect(),
            block_start: block.0.to_string(),
            block_end: block.1.to_string(),
        }
    }

    /// `//` line comments and `/* */` block comments.
    #[must_use]
    pub fn c_style() -> Self {
        Self::new(vec!["//"], ("/*", "*/"))
    }

    pub(super) fn line_markers(&self) -> impl Iterator<Item = &str> {
        self.line
            .iter()
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }

    pub(super) fn block_markers(&self) -> Option<(&str, &str)> {
        if self.block_start.is_empty() || self.block_end.is_empty() {
            None
        } else {
            Some((self.block_start.as_str(), self.block_end.as_str()))
        }
    }
}

impl Default for CommentSyntax {
    fn default() -> Self {
        Self::c_style()
    }
}

fn default_line_markers() -> Vec<String> {
    vec!["//".to_string()]
}

fn default_block_start() -> String {
    "/*".to_string()
}

fn default_block_end() -> String {
    "*/".to_string()
}
