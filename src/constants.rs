/// Position and role codes that may open an injury entry. The same token is the
/// record's category and the key used by summary breakdowns.
pub const CATEGORY_CODES: &[&str] = &[
    "C", "1B", "2B", "3B", "SS", "LF", "CF", "RF", "OF", "IF", "INF", "DH", "P", "RHP", "LHP",
];

/// Returns true when `token` is exactly one of [`CATEGORY_CODES`].
pub fn is_category_code(token: &str) -> bool {
    CATEGORY_CODES.contains(&token)
}

// Field labels, in the order they appear inside an entry
pub const INJURY_LABEL: &str = "Injury:";
pub const IL_DATE_LABEL: &str = "IL date:";
pub const EXPECTED_RETURN_LABEL: &str = "Expected return:";
pub const STATUS_LABEL: &str = "Status:";

pub const FIELD_LABELS: &[&str] = &[
    INJURY_LABEL,
    IL_DATE_LABEL,
    EXPECTED_RETURN_LABEL,
    STATUS_LABEL,
];

/// Team key used by the single-team convenience entry point.
pub const LEGACY_TEAM_KEY: &str = "mets";

/// Default MLB.com news layout: ordered fallbacks for the article container.
pub const DEFAULT_CONTAINER_SELECTORS: &[&str] = &[
    "div.article-content",
    "article",
    "div.article-wrap",
    "div.article-body",
    "div.content",
    "main",
    "div[class*=\"article\"]",
    "div[class*=\"content\"]",
];

pub const DEFAULT_SECTION_SELECTOR: &str = "section";

/// Marker classes a node must carry (both of them) to be a candidate block.
pub const STORY_PART_CLASS: &str = "story-part";
pub const MARKDOWN_CLASS: &str = "markdown";

pub const MLB_NEWS_BASE_URL: &str = "https://www.mlb.com/news";

/// Builds the injury-report URL for a team slug on MLB.com.
pub fn injury_report_url(slug: &str) -> String {
    format!("{}/{}-injuries-and-roster-moves", MLB_NEWS_BASE_URL, slug)
}

/// Environment variable naming the TOML configuration file.
pub const CONFIG_PATH_ENV: &str = "INJURY_SCRAPER_CONFIG";
