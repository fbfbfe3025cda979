//! High-level operations: analytics over a built graph and title lookup.

pub mod analytics;
pub mod titles;

pub use analytics::{InvestigationReport, Investigator};
pub use titles::{IdentityTitles, TitleResolver, TitleTable};
