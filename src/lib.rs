//! rat-graph: adjacency-list graph engine with user/story influence analytics.
//!
//! Accounts and the stories they took part in are loaded into one directed
//! graph (a reciprocal pair of arcs per participation), which can be
//! traversed, exported as TGF, and analysed for its most active users, most
//! popular stories, and most central vertices.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod index;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{IdentityTitles, InvestigationReport, Investigator, TitleResolver, TitleTable};
pub use format::{TgfReader, TgfWriter};
pub use graph::{bfs, dfs, AccountRecord, AdjListsGraph, GraphBuilder, IngestReport, RatGraph};
pub use index::{StoryList, UserRegistry};
pub use types::{RatError, RatResult, TwitterUser, TGF_SEPARATOR};
