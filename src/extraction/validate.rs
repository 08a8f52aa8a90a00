use crate::constants::is_category_code;
use crate::types::{PartialRecord, Rejection, RejectionReason, ValidatedRecord};

// Invisible characters that page markup leaves inside text runs
const INVISIBLE: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

/// Check structural invariants and normalize text fields.
///
/// A category outside the allow-list or a blank name rejects the record. Optional
/// fields are trimmed with internal whitespace collapsed, and a field that ends up
/// blank becomes unset.
pub fn validate(partial: PartialRecord) -> Result<ValidatedRecord, Rejection> {
    let category = partial.category.as_deref().map(normalize_text).unwrap_or_default();
    if category.is_empty() || !is_category_code(&category) {
        return Err(Rejection {
            block_ordinal: partial.block_ordinal,
            reason: RejectionReason::CategoryUnrecognized,
            category: (!category.is_empty()).then_some(category),
        });
    }

    let name = partial.name.as_deref().map(normalize_text).unwrap_or_default();
    if name.is_empty() {
        return Err(Rejection {
            block_ordinal: partial.block_ordinal,
            reason: RejectionReason::NameEmpty,
            category: Some(category),
        });
    }

    Ok(ValidatedRecord {
        block_ordinal: partial.block_ordinal,
        name,
        category,
        description: normalize_optional(partial.description),
        placement_date: normalize_optional(partial.placement_date),
        expected_return: normalize_optional(partial.expected_return),
        status: normalize_optional(partial.status),
        last_updated: normalize_optional(partial.last_updated),
    })
}

/// Trim, collapse whitespace runs (non-breaking spaces included) to one space and
/// drop zero-width characters. Letters are never rewritten.
pub fn normalize_text(raw: &str) -> String {
    raw.split(|c: char| c.is_whitespace())
        .map(|word| word.replace(INVISIBLE, ""))
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| normalize_text(&v))
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(category: Option<&str>, name: Option<&str>) -> PartialRecord {
        PartialRecord {
            block_ordinal: 2,
            category: category.map(str::to_string),
            name: name.map(str::to_string),
            ..PartialRecord::default()
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let rejection = validate(partial(Some("QB"), Some("Joe Namath"))).unwrap_err();
        assert_eq!(rejection.reason, RejectionReason::CategoryUnrecognized);
        assert_eq!(rejection.category.as_deref(), Some("QB"));
        assert_eq!(rejection.block_ordinal, 2);
    }

    #[test]
    fn rejects_missing_category() {
        let rejection = validate(partial(None, Some("Pete Alonso"))).unwrap_err();
        assert_eq!(rejection.reason, RejectionReason::CategoryUnrecognized);
        assert_eq!(rejection.category, None);
    }

    #[test]
    fn rejects_blank_name() {
        let rejection = validate(partial(Some("1B"), Some("  \n "))).unwrap_err();
        assert_eq!(rejection.reason, RejectionReason::NameEmpty);
        assert_eq!(rejection.category.as_deref(), Some("1B"));

        let rejection = validate(partial(Some("1B"), None)).unwrap_err();
        assert_eq!(rejection.reason, RejectionReason::NameEmpty);
    }

    #[test]
    fn normalizes_optional_fields() {
        let mut input = partial(Some("RHP"), Some(" Dedniel\u{a0}Núñez "));
        input.description = Some("  Right   elbow\n strain ".to_string());
        input.status = Some("   ".to_string());
        input.placement_date = Some("\u{200B}April 14".to_string());

        let record = validate(input).unwrap();
        assert_eq!(record.name, "Dedniel Núñez");
        assert_eq!(record.description.as_deref(), Some("Right elbow strain"));
        assert_eq!(record.status, None);
        assert_eq!(record.placement_date.as_deref(), Some("April 14"));
        assert_eq!(record.expected_return, None);
    }

    #[test]
    fn validation_is_repeatable() {
        let input = partial(Some("C"), Some("Francisco Álvarez"));
        assert_eq!(validate(input.clone()), validate(input));
    }
}
