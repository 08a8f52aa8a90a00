use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::{InjuryRecord, RecordSet};

/// First record (lowest `source_ordinal`) whose name contains `query`.
///
/// Matching ignores case and Latin diacritics, so `nez` finds "Núñez". Several
/// partial matches are not disambiguated; the earliest entry on the page wins. A
/// blank query matches nothing.
pub fn find<'a>(records: &'a RecordSet, query: &str) -> Option<&'a InjuryRecord> {
    let needle = fold(query.trim());
    if needle.is_empty() {
        return None;
    }
    records.iter().find(|record| fold(&record.name).contains(&needle))
}

impl RecordSet {
    pub fn find(&self, query: &str) -> Option<&InjuryRecord> {
        find(self, query)
    }
}

/// Lower-case and strip accents for comparison only. Names are decomposed first,
/// so precomposed and combining-mark spellings of the same name fold alike.
fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(fold_letter)
        .collect()
}

// Letters with no canonical decomposition
fn fold_letter(c: char) -> char {
    match c {
        'ø' => 'o',
        'ł' => 'l',
        'đ' => 'd',
        'ı' => 'i',
        '\u{2019}' => '\'',
        other => other,
    }
}
