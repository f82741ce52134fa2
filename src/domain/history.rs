//! Session-scoped record of generated coaching plans.

use std::borrow::Cow;

use chrono::{DateTime, Utc};

use crate::domain::{FeatureCode, Sport};

/// Characters of generated text shown per history entry.
pub const PREVIEW_CHARS: usize = 200;
const ELLIPSIS: &str = "...";
const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachingResult {
    pub timestamp: DateTime<Utc>,
    pub feature: FeatureCode,
    pub sport: Sport,
    pub position: String,
    pub generated_text: String,
}

/// Read-only view of a history entry with the response preview applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry<'a> {
    pub timestamp: String,
    pub feature: &'a str,
    pub sport: &'a str,
    pub position: &'a str,
    pub response: Cow<'a, str>,
}

/// Append-only list of results, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<CoachingResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, result: CoachingResult) {
        self.entries.push(result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Most recent entry, if any.
    pub fn latest(&self) -> Option<&CoachingResult> {
        self.entries.last()
    }

    /// Entries newest first, each response truncated to [`PREVIEW_CHARS`].
    ///
    /// The iterator is lazy and cloneable; call again to start over.
    pub fn view(&self) -> impl Iterator<Item = HistoryEntry<'_>> + Clone + '_ {
        self.entries.iter().rev().map(|result| HistoryEntry {
            timestamp: result.timestamp.format(DISPLAY_TIMESTAMP_FORMAT).to_string(),
            feature: result.feature.label(),
            sport: result.sport.display_name(),
            position: &result.position,
            response: preview(&result.generated_text),
        })
    }
}

/// Truncate `text` to [`PREVIEW_CHARS`] characters, marking the cut with "...".
pub fn preview(text: &str) -> Cow<'_, str> {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS)),
        None => Cow::Borrowed(text),
    }
}
