//! Shared data types for the rat-graph library.

pub mod error;
pub mod user;

pub use error::{RatError, RatResult};
pub use user::TwitterUser;

/// Separator line between the vertex and arc sections of a TGF file.
pub const TGF_SEPARATOR: &str = "#";
