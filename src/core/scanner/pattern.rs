// src/core/scanner/pattern.rs
use regex::Regex;

/// A compiled filename pattern with match-from-start semantics: the
/// expression must match at position 0 of the base name, but need not
/// consume the whole string.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `source` into a pattern.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] when `source` is not a
    /// valid regular expression.
    pub fn compile(source: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(source)?,
        })
    }

    /// Tests `name` against the pattern, anchored at the first byte.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        // The leftmost match has the smallest start offset, so a leftmost
        // match starting past 0 means no match exists at 0.
        self.regex.find(name).is_some_and(|m| m.start() == 0)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
