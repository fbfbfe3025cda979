//! The user/story influence graph and its side tables.

use std::fmt;
use std::path::Path;

use crate::format::TgfWriter;
use crate::index::{StoryList, UserRegistry};
use crate::types::{RatResult, TwitterUser};

use super::traversal::{bfs, dfs};
use super::AdjListsGraph;

/// A bipartite graph of accounts and the stories they took part in.
///
/// User and story vertices share one [`AdjListsGraph<String>`]; which set a
/// vertex belongs to is tracked by the user registry and the story list, not
/// by the graph itself.
#[derive(Debug, Clone, Default)]
pub struct RatGraph {
    pub(crate) graph: AdjListsGraph<String>,
    pub(crate) users: UserRegistry,
    pub(crate) stories: StoryList,
}

impl RatGraph {
    /// Create a new empty graph with empty side tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying vertex/arc store.
    pub fn graph(&self) -> &AdjListsGraph<String> {
        &self.graph
    }

    /// Registered (well-formed) accounts, in registration order.
    pub fn users(&self) -> &UserRegistry {
        &self.users
    }

    /// Look up one registered account.
    pub fn user(&self, name: &str) -> Option<&TwitterUser> {
        self.users.get(name)
    }

    /// Distinct story ids, in first-seen order.
    pub fn stories(&self) -> &[String] {
        self.stories.as_slice()
    }

    /// True if `vertex` is a registered account.
    pub fn is_user(&self, vertex: &str) -> bool {
        self.users.contains(vertex)
    }

    /// True if `vertex` is a known story id.
    pub fn is_story(&self, vertex: &str) -> bool {
        self.stories.contains(vertex)
    }

    /// Successors of `vertex`, or `None` if it is not in the graph.
    pub fn successors(&self, vertex: &str) -> Option<&[String]> {
        self.graph.successors(&vertex.to_string())
    }

    /// Predecessors of `vertex`; empty if it is not in the graph.
    pub fn predecessors(&self, vertex: &str) -> Vec<String> {
        self.graph.predecessors(&vertex.to_string())
    }

    /// Breadth-first order from `vertex`.
    pub fn bfs(&self, vertex: &str) -> Vec<String> {
        bfs(&self.graph, &vertex.to_string())
    }

    /// Depth-first walk from `vertex`.
    pub fn dfs(&self, vertex: &str) -> RatResult<Vec<String>> {
        dfs(&self.graph, &vertex.to_string())
    }

    /// Write the graph as TGF. Failures are logged, not returned.
    pub fn save_tgf(&self, path: &Path) -> bool {
        TgfWriter::new().save_to_file(&self.graph, path)
    }
}

impl fmt::Display for RatGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.graph)
    }
}
