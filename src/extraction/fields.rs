use once_cell::sync::Lazy;
use regex::Regex;

use super::tokenizer::NAME_WORD;
use crate::constants::{EXPECTED_RETURN_LABEL, FIELD_LABELS, IL_DATE_LABEL, INJURY_LABEL, STATUS_LABEL};
use crate::types::{PartialRecord, SubBlock};

static LABEL: Lazy<Regex> = Lazy::new(|| {
    let alternation = FIELD_LABELS
        .iter()
        .map(|label| regex::escape(label))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&alternation).expect("valid label regex")
});

// Every capitalized word before the first label, so in unlabeled prose a capitalized
// non-name word is absorbed: "3B Mark Vientos Is expected back" names "Mark Vientos Is".
static NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^\s*(?P<name>{word}(?:[ \t\u{{a0}}]+{word})*)",
        word = NAME_WORD
    ))
    .expect("valid name regex")
});

// "(updated May 5)", "(Updated Sept. 12)"
static UPDATED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\((?i:updated)\s+(?P<date>\p{L}+\.?\s+\d{1,2})\)").expect("valid updated regex")
});

static MORE_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"More\s*>>").expect("valid more regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Label {
    Injury,
    IlDate,
    ExpectedReturn,
    Status,
}

impl Label {
    fn from_text(text: &str) -> Option<Self> {
        match text {
            INJURY_LABEL => Some(Label::Injury),
            IL_DATE_LABEL => Some(Label::IlDate),
            EXPECTED_RETURN_LABEL => Some(Label::ExpectedReturn),
            STATUS_LABEL => Some(Label::Status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct LabelHit {
    label: Label,
    start: usize,
    end: usize,
}

/// Pull typed fields out of one sub-block.
///
/// Order of rules: the leading token is the category and the capitalized run after
/// it is the name; each labeled span runs from its label to the next label (any
/// kind) or the end of the text, and the first occurrence of a label wins; the
/// trailing `(updated <Month> <Day>)` marker becomes `last_updated`. Missing labels
/// leave fields unset. Values are returned raw; whitespace is normalized by
/// validation.
pub fn extract(sub: &SubBlock) -> PartialRecord {
    let text = sub.text.trim();
    let mut record = PartialRecord {
        block_ordinal: sub.block_ordinal,
        ..PartialRecord::default()
    };

    let (category, rest_start) = match text.find(char::is_whitespace) {
        Some(idx) => (&text[..idx], idx),
        None => (text, text.len()),
    };
    if !category.is_empty() {
        record.category = Some(category.to_string());
    }

    let hits = label_hits(text);

    let header_end = hits.first().map_or(text.len(), |hit| hit.start);
    if rest_start < header_end {
        record.name = NAME
            .captures(&text[rest_start..header_end])
            .and_then(|caps| caps.name("name"))
            .map(|m| m.as_str().to_string());
    }

    for (i, hit) in hits.iter().enumerate() {
        let value_end = hits.get(i + 1).map_or(text.len(), |next| next.start);
        let value = clean_value(&text[hit.end..value_end]);
        let slot = match hit.label {
            Label::Injury => &mut record.description,
            Label::IlDate => &mut record.placement_date,
            Label::ExpectedReturn => &mut record.expected_return,
            Label::Status => &mut record.status,
        };
        // First label match wins
        if slot.is_none() {
            *slot = Some(value);
        }
    }

    record.last_updated = UPDATED
        .captures_iter(text)
        .last()
        .and_then(|caps| caps.name("date"))
        .map(|m| m.as_str().to_string());

    record
}

fn label_hits(text: &str) -> Vec<LabelHit> {
    LABEL
        .find_iter(text)
        .filter_map(|m| {
            Label::from_text(m.as_str()).map(|label| LabelHit {
                label,
                start: m.start(),
                end: m.end(),
            })
        })
        .collect()
}

/// Drop page furniture that trails a field: the update marker and "More >>" links.
fn clean_value(raw: &str) -> String {
    let without_updated = UPDATED.replace_all(raw, " ");
    MORE_LINK.replace_all(&without_updated, " ").trim().to_string()
}
