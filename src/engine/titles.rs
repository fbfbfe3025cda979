//! Story title lookup, injected into the analytics engine.

use std::collections::HashMap;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::types::{RatError, RatResult};

/// Turns a story id into display text.
pub trait TitleResolver {
    /// Display text for `id`. Implementations fall back to the id itself.
    fn resolve_title(&self, id: &str) -> String;
}

/// Leaves story ids as they are.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTitles;

impl TitleResolver for IdentityTitles {
    fn resolve_title(&self, id: &str) -> String {
        id.to_string()
    }
}

/// Story titles loaded ahead of time from a table.
#[derive(Debug, Clone, Default)]
pub struct TitleTable {
    titles: HashMap<String, String>,
}

impl TitleTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a title.
    pub fn insert(&mut self, id: impl Into<String>, title: impl Into<String>) {
        self.titles.insert(id.into(), title.into());
    }

    /// Number of known titles.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// True if no title is known.
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Load `id<TAB>title` lines from a file.
    pub fn read_from_file(path: &Path) -> RatResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    /// Load `id<TAB>title` lines from any reader. Blank lines are ignored.
    pub fn read_from(reader: impl BufRead) -> RatResult<Self> {
        let mut table = Self::new();
        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let (id, title) = line.split_once('\t').ok_or_else(|| RatError::Parse {
                line: n + 1,
                reason: "expected `<id>\\t<title>`".to_string(),
            })?;
            table.insert(id.trim(), title.trim());
        }
        Ok(table)
    }
}

impl TitleResolver for TitleTable {
    fn resolve_title(&self, id: &str) -> String {
        self.titles
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

impl<R: TitleResolver + ?Sized> TitleResolver for &R {
    fn resolve_title(&self, id: &str) -> String {
        (**self).resolve_title(id)
    }
}
