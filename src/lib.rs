//! MLB injury report extraction
//!
//! Turns a team's injury news page into an ordered list of injury records, with
//! summary counts and name lookup. Fetching pages and serving results belong to the
//! host application; this crate only reads markup that has already been fetched.

pub mod config;
pub mod constants;
pub mod error;
pub mod extraction;
pub mod logging;
pub mod metrics;
pub mod teams;
pub mod types;

pub use config::{Config, SelectorConfig};
pub use error::{Result, ScraperError};
pub use extraction::{extract, extract_mets, BlockSelector, Extraction, InjuryExtractor, StoryPartSelector};
pub use teams::{TeamConfig, TeamRegistry};
pub use types::{InjuryRecord, RecordSet, Rejection, RejectionReason, ShapeStatus, SummaryStats};
