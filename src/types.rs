use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;

/// A candidate content block pulled out of the document, before content validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// Position of the block among the candidate blocks of the document.
    pub ordinal: usize,
    pub text: String,
}

/// Text span believed to hold exactly one subject's entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubBlock {
    /// Ordinal of the [`RawBlock`] this span was cut from.
    pub block_ordinal: usize,
    pub text: String,
}

/// Fields pulled out of a sub-block before validation. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialRecord {
    pub block_ordinal: usize,
    pub category: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub placement_date: Option<String>,
    pub expected_return: Option<String>,
    pub status: Option<String>,
    pub last_updated: Option<String>,
}

/// One injured player, as published on the team's injury report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjuryRecord {
    pub name: String,
    #[serde(rename = "position")]
    pub category: String,
    #[serde(rename = "injury")]
    pub description: Option<String>,
    #[serde(rename = "il_date")]
    pub placement_date: Option<String>,
    pub expected_return: Option<String>,
    pub status: Option<String>,
    pub last_updated: Option<String>,
    /// Position in the validated stream; the only ordering key.
    #[serde(skip_serializing)]
    pub source_ordinal: usize,
}

/// A validated record waiting for its ordinal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    pub block_ordinal: usize,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub placement_date: Option<String>,
    pub expected_return: Option<String>,
    pub status: Option<String>,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    CategoryUnrecognized,
    NameEmpty,
}

impl RejectionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::CategoryUnrecognized => "category_unrecognized",
            RejectionReason::NameEmpty => "name_empty",
        }
    }
}

/// A sub-block dropped by validation, kept for the caller's diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub block_ordinal: usize,
    pub reason: RejectionReason,
    /// The offending category token, when one was seen.
    pub category: Option<String>,
}

/// Whether the document still looked like the page we know how to read.
///
/// `Ok` with an empty record set means the team has no injuries listed.
/// The other variants mean extraction could not see the entries at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeStatus {
    Ok,
    ContainerMissing,
    NoCandidateBlocks,
}

impl ShapeStatus {
    pub fn is_shape_changed(&self) -> bool {
        !matches!(self, ShapeStatus::Ok)
    }
}

/// Ordered records for one team at one point in time. Rebuilt on every
/// extraction, never edited afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct RecordSet {
    team: String,
    extracted_at: DateTime<Utc>,
    players: Vec<InjuryRecord>,
}

impl RecordSet {
    pub(crate) fn new(team: String, extracted_at: DateTime<Utc>, players: Vec<InjuryRecord>) -> Self {
        Self {
            team,
            extracted_at,
            players,
        }
    }

    pub fn team(&self) -> &str {
        &self.team
    }

    pub fn extracted_at(&self) -> DateTime<Utc> {
        self.extracted_at
    }

    pub fn records(&self) -> &[InjuryRecord] {
        &self.players
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InjuryRecord> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a InjuryRecord;
    type IntoIter = std::slice::Iter<'a, InjuryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryStats {
    pub total: usize,
    /// Count per category, in first-seen order.
    pub by_category: IndexMap<String, usize>,
    /// Count per injury description, in first-seen order.
    pub by_injury: IndexMap<String, usize>,
}
