use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Name of a series as it appears in the remote feed.
///
/// Ranking identity is the name alone: feed entries sharing a name land in
/// the same tally bucket.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq, PartialOrd, Ord, Hash, Default)]
pub struct SeriesName(String);

impl SeriesName {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<String> for SeriesName {
    fn from(value: String) -> Self {
        SeriesName(value)
    }
}

impl From<&str> for SeriesName {
    fn from(value: &str) -> Self {
        SeriesName(String::from(value))
    }
}

impl From<SeriesName> for String {
    fn from(value: SeriesName) -> Self {
        value.0
    }
}

impl Display for SeriesName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One entry of the remote series feed. Weight is non-negative; a
/// zero-weight entry never wins a draw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    // The legacy feed was read with a case-insensitive decoder, so accept
    // the capitalized keys too.
    #[serde(alias = "Name")]
    pub name: SeriesName,
    #[serde(alias = "Weight")]
    pub weight: f64,
}

/// One row of a finished ranking run. Derived per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct RankedSeries {
    pub name: SeriesName,
    pub hits: u32,
}
