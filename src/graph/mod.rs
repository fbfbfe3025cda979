//! In-memory graph: the generic adjacency-list store, traversals, and the
//! user/story graph built on top of them.

pub mod adj_lists;
pub mod builder;
pub mod rat_graph;
pub mod traversal;

pub use adj_lists::AdjListsGraph;
pub use builder::{AccountRecord, GraphBuilder, IngestReport};
pub use rat_graph::RatGraph;
pub use traversal::{bfs, dfs};
