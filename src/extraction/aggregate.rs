use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::types::{InjuryRecord, RecordSet, SummaryStats, ValidatedRecord};

/// Assemble validated records into a [`RecordSet`], in the order they arrive.
///
/// `source_ordinal` is the record's position in the validated stream. Nothing is
/// sorted: the page lists the most recent entries first and date phrases are not
/// comparable enough to do better.
pub fn aggregate(
    team: &str,
    extracted_at: DateTime<Utc>,
    validated: Vec<ValidatedRecord>,
) -> RecordSet {
    let players = validated
        .into_iter()
        .enumerate()
        .map(|(source_ordinal, v)| InjuryRecord {
            name: v.name,
            category: v.category,
            description: v.description,
            placement_date: v.placement_date,
            expected_return: v.expected_return,
            status: v.status,
            last_updated: v.last_updated,
            source_ordinal,
        })
        .collect();
    RecordSet::new(team.to_string(), extracted_at, players)
}

/// Count records overall, per category and per injury description. Breakdown keys
/// keep first-seen order so identical input gives identical output.
pub fn summarize(records: &RecordSet) -> SummaryStats {
    let mut by_category: IndexMap<String, usize> = IndexMap::new();
    let mut by_injury: IndexMap<String, usize> = IndexMap::new();

    for record in records {
        *by_category.entry(record.category.clone()).or_insert(0) += 1;
        if let Some(description) = &record.description {
            *by_injury.entry(description.clone()).or_insert(0) += 1;
        }
    }

    SummaryStats {
        total: records.len(),
        by_category,
        by_injury,
    }
}

impl RecordSet {
    pub fn summarize(&self) -> SummaryStats {
        summarize(self)
    }
}
