//! Comment-aware line classification.
//!
//! Splits every raw line into the part that is live code (the *matchable*
//! content) and the part that is comment or exempted text, carrying block
//! comment state from one line to the next. This is a lexical pass only:
//! string literals are not tracked, a line holds at most one block comment
//! span, and block comments do not nest.

mod ignore;
mod syntax;

pub use ignore::IgnoreSet;
pub use syntax::CommentSyntax;

use std::borrow::Cow;

/// Block comment state carried between consecutive lines of one scan.
///
/// Never shared between scans: every call to [`LineClassifier::classify`]
/// starts from [`ScanState::new`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    inside_block_comment: bool,
}

impl ScanState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inside_block_comment: false,
        }
    }

    #[must_use]
    pub const fn is_inside_block_comment(&self) -> bool {
        self.inside_block_comment
    }
}

/// One classified line: the raw text for display, the matchable text for predicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedLine<'a> {
    /// 1-based position in the input sequence.
    pub number: usize,
    pub raw: &'a str,
    pub matchable: Cow<'a, str>,
}

pub struct LineClassifier<'a> {
    syntax: &'a CommentSyntax,
    ignore: &'a IgnoreSet,
}

impl<'a> LineClassifier<'a> {
    #[must_use]
    pub const fn new(syntax: &'a CommentSyntax, ignore: &'a IgnoreSet) -> Self {
        Self { syntax, ignore }
    }

    /// Classify an ordered line sequence with a fresh [`ScanState`].
    #[must_use]
    pub fn classify<'l, S: AsRef<str>>(&self, lines: &'l [S]) -> Vec<ClassifiedLine<'l>> {
        let mut state = ScanState::new();
        lines
            .iter()
            .enumerate()
            .map(|(idx, line)| {
                let raw = line.as_ref();
                ClassifiedLine {
                    number: idx + 1,
                    raw,
                    matchable: self.classify_line(&mut state, raw),
                }
            })
            .collect()
    }

    /// Classify a single line, updating `state` for the next one.
    ///
    /// Block comments are handled first, then the line comment tail is cut
    /// from whatever remains, then the ignore set is applied.
    #[must_use]
    pub fn classify_line<'l>(&self, state: &mut ScanState, raw: &'l str) -> Cow<'l, str> {
        let code = self.strip_block_comment(state, raw);
        let code = self.strip_line_comment(code);

        if self.ignore.exempts(&code) {
            Cow::Borrowed("")
        } else {
            code
        }
    }

    fn strip_block_comment<'l>(&self, state: &mut ScanState, raw: &'l str) -> Cow<'l, str> {
        let Some((start, end)) = self.syntax.block_markers() else {
            return Cow::Borrowed(raw);
        };

        if state.inside_block_comment {
            return raw.find(end).map_or(Cow::Borrowed(""), |pos| {
                state.inside_block_comment = false;
                Cow::Borrowed(&raw[pos + end.len()..])
            });
        }

        let Some(start_pos) = raw.find(start) else {
            return Cow::Borrowed(raw);
        };
        let body = start_pos + start.len();

        // Only the first start..end span is removed; anything after it is
        // left as-is even if it opens another comment.
        if let Some(rel) = raw[body..].find(end) {
            let resume = body + rel + end.len();
            Cow::Owned(format!("{}{}", &raw[..start_pos], &raw[resume..]))
        } else {
            state.inside_block_comment = true;
            Cow::Borrowed(&raw[..start_pos])
        }
    }

    fn strip_line_comment<'l>(&self, code: Cow<'l, str>) -> Cow<'l, str> {
        let Some(pos) = self
            .syntax
            .line_markers()
            .filter_map(|marker| code.find(marker))
            .min()
        else {
            return code;
        };

        match code {
            Cow::Borrowed(s) => Cow::Borrowed(&s[..pos]),
            Cow::Owned(mut s) => {
                s.truncate(pos);
                Cow::Owned(s)
            }
        }
    }
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
