//! Splitting of delimited path strings into segments.
//!
//! The separator marks a segment boundary. The escape character makes the
//! next character literal, so `a\.b` with the default settings is the single
//! segment `a.b`. A trailing escape is kept as-is.

/// Default segment separator.
pub const DEFAULT_SEPARATOR: &str = ".";
/// Default escape prefix.
pub const DEFAULT_ESCAPE: char = '\\';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    separator: String,
    escape: char,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            escape: DEFAULT_ESCAPE,
        }
    }
}

impl Tokenizer {
    /// Build a tokenizer. Callers are expected to pass a validated pair (see
    /// [`crate::config::EngineConfig::validate`]).
    pub fn new(separator: impl Into<String>, escape: char) -> Self {
        Self {
            separator: separator.into(),
            escape,
        }
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    pub fn escape(&self) -> char {
        self.escape
    }

    /// Split `path` into segments. The empty string has no segments.
    pub fn tokenize(&self, path: &str) -> Vec<String> {
        if path.is_empty() {
            return Vec::new();
        }

        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = path;

        while !rest.is_empty() {
            if let Some(after) = rest.strip_prefix(self.escape) {
                let mut chars = after.chars();
                match chars.next() {
                    Some(literal) => {
                        current.push(literal);
                        rest = chars.as_str();
                    }
                    None => {
                        current.push(self.escape);
                        rest = after;
                    }
                }
            } else if let Some(after) = self.strip_separator(rest) {
                segments.push(std::mem::take(&mut current));
                rest = after;
            } else {
                let mut chars = rest.chars();
                if let Some(ch) = chars.next() {
                    current.push(ch);
                }
                rest = chars.as_str();
            }
        }

        segments.push(current);
        segments
    }

    /// Escape `segment` so that it tokenizes back to itself.
    pub fn escape_segment(&self, segment: &str) -> String {
        let mut out = String::with_capacity(segment.len());
        for ch in segment.chars() {
            if ch == self.escape || self.separator.contains(ch) {
                out.push(self.escape);
            }
            out.push(ch);
        }
        out
    }

    /// Join segments into a path string that tokenizes to the same segments.
    ///
    /// A lone empty segment has no string form: it joins to `""`, which
    /// tokenizes to no segments at all.
    pub fn join<S: AsRef<str>>(&self, segments: &[S]) -> String {
        segments
            .iter()
            .map(|segment| self.escape_segment(segment.as_ref()))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }

    fn strip_separator<'a>(&self, input: &'a str) -> Option<&'a str> {
        if self.separator.is_empty() {
            return None;
        }
        input.strip_prefix(self.separator.as_str())
    }
}
