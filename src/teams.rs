use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::injury_report_url;
use crate::error::{Result, ScraperError};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct TeamConfig {
    pub key: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "url")]
    pub source_url: String,
    pub abbreviation: String,
}

impl TeamConfig {
    pub fn new(key: &str, display_name: &str, source_url: &str, abbreviation: &str) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
            source_url: source_url.to_string(),
            abbreviation: abbreviation.to_string(),
        }
    }
}

// (key, display name, url slug, abbreviation)
const MLB_TEAMS: &[(&str, &str, &str, &str)] = &[
    ("angels", "Los Angeles Angels", "angels", "LAA"),
    ("astros", "Houston Astros", "astros", "HOU"),
    ("athletics", "Athletics", "athletics", "ATH"),
    ("blue-jays", "Toronto Blue Jays", "blue-jays", "TOR"),
    ("braves", "Atlanta Braves", "braves", "ATL"),
    ("brewers", "Milwaukee Brewers", "brewers", "MIL"),
    ("cardinals", "St. Louis Cardinals", "cardinals", "STL"),
    ("cubs", "Chicago Cubs", "cubs", "CHC"),
    ("diamondbacks", "Arizona Diamondbacks", "d-backs", "AZ"),
    ("dodgers", "Los Angeles Dodgers", "dodgers", "LAD"),
    ("giants", "San Francisco Giants", "giants", "SF"),
    ("guardians", "Cleveland Guardians", "guardians", "CLE"),
    ("mariners", "Seattle Mariners", "mariners", "SEA"),
    ("marlins", "Miami Marlins", "marlins", "MIA"),
    ("mets", "New York Mets", "mets", "NYM"),
    ("nationals", "Washington Nationals", "nationals", "WSH"),
    ("orioles", "Baltimore Orioles", "orioles", "BAL"),
    ("padres", "San Diego Padres", "padres", "SD"),
    ("phillies", "Philadelphia Phillies", "phillies", "PHI"),
    ("pirates", "Pittsburgh Pirates", "pirates", "PIT"),
    ("rangers", "Texas Rangers", "rangers", "TEX"),
    ("rays", "Tampa Bay Rays", "rays", "TB"),
    ("red-sox", "Boston Red Sox", "red-sox", "BOS"),
    ("reds", "Cincinnati Reds", "reds", "CIN"),
    ("rockies", "Colorado Rockies", "rockies", "COL"),
    ("royals", "Kansas City Royals", "royals", "KC"),
    ("tigers", "Detroit Tigers", "tigers", "DET"),
    ("twins", "Minnesota Twins", "twins", "MIN"),
    ("white-sox", "Chicago White Sox", "white-sox", "CWS"),
    ("yankees", "New York Yankees", "yankees", "NYY"),
];

/// Read-only team table, keyed by lower-cased team key.
///
/// Built once by the caller and passed into every extraction; there is no
/// process-wide instance.
#[derive(Debug, Clone)]
pub struct TeamRegistry {
    teams: BTreeMap<String, TeamConfig>,
}

impl TeamRegistry {
    /// Build a registry from explicit entries. Keys are matched case-insensitively,
    /// so two entries differing only in case are duplicates.
    pub fn new(teams: Vec<TeamConfig>) -> Result<Self> {
        let mut map = BTreeMap::new();
        for mut team in teams {
            let key = team.key.trim().to_lowercase();
            if key.is_empty() {
                return Err(ScraperError::Config("team entry with empty key".to_string()));
            }
            if map.contains_key(&key) {
                return Err(ScraperError::Config(format!("duplicate team key: {}", key)));
            }
            team.key = key.clone();
            map.insert(key, team);
        }
        Ok(Self { teams: map })
    }

    /// The 30 MLB clubs and their MLB.com injury-report pages.
    pub fn builtin() -> Self {
        let teams = MLB_TEAMS
            .iter()
            .map(|(key, name, slug, abbr)| {
                let team = TeamConfig::new(key, name, &injury_report_url(slug), abbr);
                (key.to_string(), team)
            })
            .collect();
        Self { teams }
    }

    pub fn get(&self, key: &str) -> Option<&TeamConfig> {
        self.teams.get(&key.trim().to_lowercase())
    }

    /// Like [`TeamRegistry::get`], but an unknown key is an error naming the
    /// available teams.
    pub fn require(&self, key: &str) -> Result<&TeamConfig> {
        self.get(key).ok_or_else(|| ScraperError::UnknownTeam {
            key: key.to_string(),
            available: self.keys(),
        })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Available team keys, sorted.
    pub fn keys(&self) -> Vec<String> {
        self.teams.keys().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamConfig> {
        self.teams.values()
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl Default for TeamRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
