//! Builds a [`RatGraph`] from account records.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;

use crate::types::{RatError, RatResult, TwitterUser};

use super::RatGraph;

/// One dataset line, split into fields but not yet validated.
///
/// Missing trailing fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountRecord {
    pub name: String,
    pub external_id: String,
    pub tweet_count: String,
    pub story_count: String,
    /// Story ids, already split on commas.
    pub story_ids: Vec<String>,
}

impl AccountRecord {
    /// Split a whitespace-separated line: `name id tweets stories ids,ids,...`.
    ///
    /// Returns `None` for a blank line.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split_whitespace();
        let name = fields.next()?.to_string();
        let mut next = || fields.next().unwrap_or_default().to_string();
        let external_id = next();
        let tweet_count = next();
        let story_count = next();
        let story_ids = next()
            .split(',')
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect();
        Some(Self {
            name,
            external_id,
            tweet_count,
            story_count,
            story_ids,
        })
    }
}

/// Outcome of an ingestion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Records read, well-formed or not.
    pub records: usize,
    /// Records whose account was registered.
    pub registered: usize,
    /// Names of accounts whose numeric fields did not parse.
    pub skipped: Vec<String>,
}

/// Incremental builder for a [`RatGraph`].
pub struct GraphBuilder {
    rat: RatGraph,
    report: IngestReport,
}

impl GraphBuilder {
    /// Create a new builder with an empty graph.
    pub fn new() -> Self {
        Self {
            rat: RatGraph::new(),
            report: IngestReport::default(),
        }
    }

    /// Add one account record.
    ///
    /// The account's vertex is added before its numbers are checked, so a
    /// malformed record still leaves a bare vertex with no arcs. Such a record
    /// is not registered and its stories are ignored.
    pub fn add_record(&mut self, record: AccountRecord) -> &mut Self {
        self.report.records += 1;
        self.rat.graph.add_vertex(record.name.clone());

        let counts = record
            .tweet_count
            .parse::<i64>()
            .and_then(|tweets| record.story_count.parse::<i64>().map(|s| (tweets, s)));
        let (tweet_count, story_count) = match counts {
            Ok(counts) => counts,
            Err(_) => {
                log::warn!(
                    "Format error in {}'s data; this account is ignored",
                    record.name
                );
                self.report.skipped.push(record.name);
                return self;
            }
        };

        self.rat.users.insert(TwitterUser::new(
            record.name.clone(),
            record.external_id,
            tweet_count,
            story_count,
        ));
        self.report.registered += 1;

        for story in &record.story_ids {
            self.rat.graph.add_vertex(story.clone());
            self.rat.graph.add_edge(&record.name, story);
            self.rat.stories.push_new(story);
        }
        self
    }

    /// Add every record from a reader. The first line is a header and is
    /// skipped; blank lines are ignored.
    pub fn read_from(&mut self, reader: impl BufRead) -> RatResult<&mut Self> {
        for line in reader.lines().skip(1) {
            let line = line?;
            if let Some(record) = AccountRecord::parse_line(&line) {
                self.add_record(record);
            }
        }
        log::debug!(
            "Ingested {} records ({} skipped)",
            self.report.records,
            self.report.skipped.len()
        );
        Ok(self)
    }

    /// Add every record from a dataset file.
    ///
    /// A file that cannot be opened is [`RatError::SourceUnavailable`]; the
    /// caller is expected to stop.
    pub fn read_from_file(&mut self, path: &Path) -> RatResult<&mut Self> {
        let file = File::open(path).map_err(|source| RatError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        self.read_from(BufReader::new(file))
    }

    /// Ingestion statistics so far.
    pub fn report(&self) -> &IngestReport {
        &self.report
    }

    /// Finish building.
    pub fn build(self) -> RatGraph {
        self.rat
    }

    /// Finish building and hand back the report too.
    pub fn finish(self) -> (RatGraph, IngestReport) {
        (self.rat, self.report)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RatGraph {
    /// Build a graph from a dataset file.
    pub fn from_file(path: &Path) -> RatResult<(Self, IngestReport)> {
        let mut builder = GraphBuilder::new();
        builder.read_from_file(path)?;
        let (rat, report) = builder.finish();
        log::info!(
            "Loaded {}: {} vertices, {} arcs, {} users, {} stories",
            path.display(),
            rat.graph.vertex_count(),
            rat.graph.arc_count(),
            rat.users.len(),
            rat.stories.len()
        );
        Ok((rat, report))
    }
}
