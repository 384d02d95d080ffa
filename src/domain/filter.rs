//! Row filtering by regular expression.

use regex::Regex;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::path::NodePath;

/// Compiled row filter.
///
/// The pattern is matched unanchored and case-sensitively against a row's
/// space-joined name string; the empty pattern matches everything. Matching
/// is per-row: a matching descendant does not force-show a non-matching
/// ancestor row.
#[derive(Debug, Clone, Default)]
pub struct RowFilter {
    pattern: String,
    regex: Option<Regex>,
}

impl RowFilter {
    /// Match-all filter.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile `pattern`; the empty string yields the match-all filter.
    ///
    /// Invalid patterns are a construction-time failure rather than
    /// silently matching nothing.
    pub fn new(pattern: &str) -> DomainResult<Self> {
        if pattern.is_empty() {
            return Ok(Self::empty());
        }
        let regex = Regex::new(pattern).map_err(|source| DomainError::InvalidFilterPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex: Some(regex),
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_match_all(&self) -> bool {
        self.regex.is_none()
    }

    pub fn matches(&self, row: &NodePath) -> bool {
        match &self.regex {
            None => true,
            Some(regex) => regex.is_match(&row.joined()),
        }
    }
}
