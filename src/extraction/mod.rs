//! Injury report extraction
//!
//! One extraction is a pure pass over one document:
//! locate candidate blocks, cut them into per-player sub-blocks, pull fields out of
//! each, validate, and assemble the ordered record set. Nothing is shared between
//! runs except the read-only team table the caller passes in.

pub mod aggregate;
pub mod fields;
pub mod locator;
pub mod search;
pub mod tokenizer;
pub mod validate;

pub use aggregate::{aggregate, summarize};
pub use locator::{BlockSelector, LocatedBlocks, StoryPartSelector};
pub use search::find;
pub use tokenizer::tokenize;
pub use validate::validate;

use chrono::Utc;
use scraper::Html;
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

use crate::config::SelectorConfig;
use crate::constants::LEGACY_TEAM_KEY;
use crate::error::Result;
use crate::metrics::ExtractionMetrics;
use crate::teams::{TeamConfig, TeamRegistry};
use crate::types::{RecordSet, Rejection, ShapeStatus, SummaryStats};

/// Result of one extraction run.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub team: TeamConfig,
    pub records: RecordSet,
    /// Sub-blocks dropped by validation, in document order.
    pub rejections: Vec<Rejection>,
    pub shape: ShapeStatus,
}

impl Extraction {
    pub fn summary(&self) -> SummaryStats {
        self.records.summarize()
    }
}

pub struct InjuryExtractor<S: BlockSelector = StoryPartSelector> {
    selector: S,
}

impl InjuryExtractor<StoryPartSelector> {
    pub fn new() -> Self {
        Self::with_selector(StoryPartSelector::default())
    }

    pub fn from_config(config: &SelectorConfig) -> Result<Self> {
        Ok(Self::with_selector(StoryPartSelector::new(config)?))
    }
}

impl Default for InjuryExtractor<StoryPartSelector> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: BlockSelector> InjuryExtractor<S> {
    pub fn with_selector(selector: S) -> Self {
        Self { selector }
    }

    /// Extract the injury report for `team_key` from raw page markup.
    ///
    /// Fails only when the team is unknown, before the document is touched.
    /// Messy or restructured pages produce an empty record set and a shape status,
    /// never an error.
    #[instrument(skip(self, registry, html))]
    pub fn extract(&self, registry: &TeamRegistry, team_key: &str, html: &str) -> Result<Extraction> {
        let team = registry.require(team_key)?;
        let document = Html::parse_document(html);
        Ok(self.extract_document(team, &document))
    }

    /// Single-team shortcut kept for the original Mets report.
    pub fn extract_mets(&self, registry: &TeamRegistry, html: &str) -> Result<Extraction> {
        self.extract(registry, LEGACY_TEAM_KEY, html)
    }

    /// Run the pipeline over an already-parsed document.
    pub fn extract_document(&self, team: &TeamConfig, document: &Html) -> Extraction {
        let started = Instant::now();

        let located = self.selector.locate(document);
        let shape = located.shape();
        if shape.is_shape_changed() {
            warn!(
                team = %team.key,
                selector = self.selector.name(),
                "Page structure not recognized: {:?}",
                shape
            );
        }
        ExtractionMetrics::record_shape(&team.key, shape);

        let mut validated = Vec::new();
        let mut rejections = Vec::new();
        for sub in tokenize(&located.blocks) {
            match validate(fields::extract(&sub)) {
                Ok(record) => {
                    debug!("Found player: {}", record.name);
                    validated.push(record);
                }
                Err(rejection) => {
                    debug!(
                        "Dropping entry in block {}: {} ({})",
                        rejection.block_ordinal,
                        rejection.reason.as_str(),
                        tokenizer::preview(&sub.text)
                    );
                    ExtractionMetrics::record_rejection(&team.key, rejection.reason);
                    rejections.push(rejection);
                }
            }
        }

        let records = aggregate(&team.key, Utc::now(), validated);
        ExtractionMetrics::record_run(&team.key, records.len(), started.elapsed().as_secs_f64());
        info!(
            "Total players found: {} ({} rejected)",
            records.len(),
            rejections.len()
        );

        Extraction {
            team: team.clone(),
            records,
            rejections,
            shape,
        }
    }
}

/// Extract with the default MLB.com block selector.
pub fn extract(registry: &TeamRegistry, team_key: &str, html: &str) -> Result<Extraction> {
    InjuryExtractor::new().extract(registry, team_key, html)
}

/// [`extract`] for the Mets.
pub fn extract_mets(registry: &TeamRegistry, html: &str) -> Result<Extraction> {
    extract(registry, LEGACY_TEAM_KEY, html)
}
