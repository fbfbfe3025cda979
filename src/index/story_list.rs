//! Ordered list of distinct story ids.

use std::collections::HashSet;

/// Story ids in the order they were first seen, without duplicates.
#[derive(Debug, Clone, Default)]
pub struct StoryList {
    ids: Vec<String>,
    seen: HashSet<String>,
}

impl StoryList {
    /// Create a new, empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` unless it was seen before. Returns true if it was new.
    pub fn push_new(&mut self, id: &str) -> bool {
        if self.seen.contains(id) {
            return false;
        }
        self.seen.insert(id.to_string());
        self.ids.push(id.to_string());
        true
    }

    /// True if `id` is a known story.
    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    /// All story ids in first-seen order.
    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    /// Number of distinct stories.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True if no story has been seen.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
