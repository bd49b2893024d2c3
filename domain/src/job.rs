//! Handle to an asynchronous backend operation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque handle (URL or token) to an in-flight backend job.
///
/// The backend returns one of these for fire-and-forget operations such as
/// an asynchronous delete. It exposes no state of its own; the only thing a
/// caller can do with it is poll it to a terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Job(String);

impl Job {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// The backend-supplied polling location.
    pub fn url(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Job {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Job {
    fn from(url: String) -> Self {
        Self(url)
    }
}

impl From<&str> for Job {
    fn from(url: &str) -> Self {
        Self(url.to_string())
    }
}
