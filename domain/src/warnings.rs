//! Ordered accumulator for non-fatal advisory messages.
//!
//! Backend calls return advisories alongside their result. They carry no
//! severity and are never deduplicated; their order reflects the call
//! sequence that produced them, which callers rely on when reporting
//! partial progress after a failure.

use serde::{Deserialize, Serialize};

/// An append-only sequence of advisory messages.
///
/// Errors travel on the error channel; anything in here is non-fatal by
/// construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Warnings(Vec<String>);

impl Warnings {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a single advisory.
    pub fn push(&mut self, warning: impl Into<String>) {
        self.0.push(warning.into());
    }

    /// Appends every advisory from `other`, preserving its order.
    pub fn append(&mut self, other: Warnings) {
        self.0.extend(other.0);
    }

    /// Returns `true` if no advisories have been collected.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of collected advisories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the advisories in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The advisories as a slice, in collection order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Consumes the accumulator, returning the underlying sequence.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for Warnings {
    fn from(warnings: Vec<String>) -> Self {
        Self(warnings)
    }
}

impl<S: Into<String>> FromIterator<S> for Warnings {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl IntoIterator for Warnings {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Extend<String> for Warnings {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
