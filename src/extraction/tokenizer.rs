use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::constants::{CATEGORY_CODES, INJURY_LABEL};
use crate::types::{RawBlock, SubBlock};

/// Category codes as a regex alternation, longest first.
pub(crate) fn category_alternation() -> String {
    let mut codes: Vec<&str> = CATEGORY_CODES.to_vec();
    codes.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    codes
        .iter()
        .map(|code| regex::escape(code))
        .collect::<Vec<_>>()
        .join("|")
}

/// Character class body for one word of a player's name.
pub(crate) const NAME_WORD: &str = r"\p{Lu}[\p{L}\p{M}'’.\-]*";

static LEADING_CATEGORY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^(?:{})\s", category_alternation())).expect("valid category regex")
});

// "<code> <Capitalized Name>Injury:" opening an entry, possibly glued to the end
// of the previous entry's text. A preceding digit is filtered in `entry_boundaries`.
static ENTRY_HEADER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?:^|[^\p{{L}}])(?P<code>{codes})\s+{word}(?:[ \t\u{{a0}}]+{word})*\s*{label}",
        codes = category_alternation(),
        word = NAME_WORD,
        label = regex::escape(INJURY_LABEL),
    ))
    .expect("valid entry header regex")
});

/// True when `text` opens with a category code followed by whitespace.
pub fn starts_with_category(text: &str) -> bool {
    LEADING_CATEGORY.is_match(text.trim_start())
}

/// Cut candidate blocks into one sub-block per player entry.
///
/// Blocks that do not open with a category code (section headers, intro prose)
/// are dropped. Within a block, a new entry starts wherever a category code and
/// capitalized name run straight into an `Injury:` label. Anything less certain
/// stays in the current entry: a merged entry only loses fields downstream, a
/// false split invents a player.
pub fn tokenize(blocks: &[RawBlock]) -> Vec<SubBlock> {
    let mut out = Vec::new();
    for block in blocks {
        let text = block.text.trim();
        if !starts_with_category(text) {
            debug!(
                "Skipping block {} - doesn't start with position: {}",
                block.ordinal,
                preview(text)
            );
            continue;
        }

        let boundaries = entry_boundaries(text);
        if boundaries.len() > 1 {
            debug!(
                "Block {} holds {} concatenated entries",
                block.ordinal,
                boundaries.len()
            );
        }

        for (i, &start) in boundaries.iter().enumerate() {
            let end = boundaries.get(i + 1).copied().unwrap_or(text.len());
            let entry = text[start..end].trim();
            if entry.is_empty() {
                continue;
            }
            out.push(SubBlock {
                block_ordinal: block.ordinal,
                text: entry.to_string(),
            });
        }
    }
    out
}

/// Byte offsets where entries begin. The first entry always begins at 0.
fn entry_boundaries(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for caps in ENTRY_HEADER.captures_iter(text) {
        if let Some(code) = caps.name("code") {
            let start = code.start();
            // "...March 271B Pete" is ambiguous; "...2026LHP Sean" is not
            let after_digit = text[..start]
                .chars()
                .next_back()
                .map_or(false, |c| c.is_numeric());
            if after_digit && code.as_str().starts_with(|c: char| c.is_ascii_digit()) {
                continue;
            }
            if start > 0 && starts.last().map_or(true, |&last| start > last) {
                starts.push(start);
            }
        }
    }
    starts
}

pub(crate) fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}
