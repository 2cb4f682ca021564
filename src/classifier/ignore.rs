/// Substrings that exempt a whole line from substring matching.
///
/// The check runs against the comment-stripped content, so an entry that only
/// appears inside a comment does not exempt anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    entries: Vec<String>,
}

impl IgnoreSet {
    #[must_use]
    pub const fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `code` contains any entry.
    #[must_use]
    pub fn exempts(&self, code: &str) -> bool {
        self.entries.iter().any(|entry| code.contains(entry.as_str()))
    }
}

impl From<Vec<String>> for IgnoreSet {
    fn from(entries: Vec<String>) -> Self {
        Self::new(entries)
    }
}

impl<'a> FromIterator<&'a str> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(String::from).collect())
    }
}
