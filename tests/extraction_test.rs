use mlb_injury_scraper::extraction::{find, summarize, tokenize, validate, InjuryExtractor};
use mlb_injury_scraper::extraction::fields;
use mlb_injury_scraper::types::RawBlock;
use mlb_injury_scraper::{
    extract, extract_mets, Config, ScraperError, ShapeStatus, TeamConfig, TeamRegistry,
};

struct Entry {
    position: &'static str,
    name: &'static str,
    injury: &'static str,
    il_date: &'static str,
    expected_return: &'static str,
    status: &'static str,
    updated: &'static str,
}

const ENTRIES: &[Entry] = &[
    Entry {
        position: "RHP",
        name: "Dedniel Núñez",
        injury: "Right elbow sprain",
        il_date: "June 25 (60-day IL)",
        expected_return: "2026",
        status: "Núñez had surgery and will miss the rest of the season.",
        updated: "Aug. 3",
    },
    Entry {
        position: "C",
        name: "Francisco Álvarez",
        injury: "Right hand sprain",
        il_date: "July 28",
        expected_return: "Mid-August",
        status: "Álvarez began a rehab assignment with Triple-A Syracuse.",
        updated: "Aug. 1",
    },
    Entry {
        position: "1B",
        name: "Pete Alonso",
        injury: "Left wrist contusion",
        il_date: "July 20",
        expected_return: "Late July",
        status: "Alonso took batting practice on the field.",
        updated: "July 22",
    },
];

fn entry_div(entry: &Entry) -> String {
    format!(
        r#"<div class="story-part markdown"><p><strong>{} {}</strong></p><p><strong>Injury:</strong> {}</p><p><strong>IL date:</strong> {}</p><p><strong>Expected return:</strong> {}</p><p><strong>Status:</strong> {} (updated {})</p></div>"#,
        entry.position,
        entry.name,
        entry.injury,
        entry.il_date,
        entry.expected_return,
        entry.status,
        entry.updated
    )
}

fn page(body: &str) -> String {
    format!(
        r#"<html><head><title>Mets injuries and roster moves</title></head><body>
        <div class="header">Menu</div>
        <article class="article-item"><section>
        <div class="story-part markdown"><p>This page will be updated throughout the season.</p></div>
        <div class="story-part image">photo</div>
        {}
        <div class="story-part markdown"><p>Sign up to receive the newsletter.</p></div>
        </section></article></body></html>"#,
        body
    )
}

fn full_page() -> String {
    page(&ENTRIES.iter().map(entry_div).collect::<Vec<_>>().join("\n"))
}

#[test]
fn round_trips_every_field_in_document_order() {
    let extraction = extract_mets(&TeamRegistry::builtin(), &full_page()).unwrap();

    assert_eq!(extraction.shape, ShapeStatus::Ok);
    assert!(extraction.rejections.is_empty());
    assert_eq!(extraction.records.len(), ENTRIES.len());

    for (i, (record, entry)) in extraction.records.iter().zip(ENTRIES).enumerate() {
        assert_eq!(record.source_ordinal, i);
        assert_eq!(record.name, entry.name);
        assert_eq!(record.category, entry.position);
        assert_eq!(record.description.as_deref(), Some(entry.injury));
        assert_eq!(record.placement_date.as_deref(), Some(entry.il_date));
        assert_eq!(record.expected_return.as_deref(), Some(entry.expected_return));
        assert_eq!(record.status.as_deref(), Some(entry.status));
        assert_eq!(record.last_updated.as_deref(), Some(entry.updated));
    }
}

#[test]
fn source_ordinals_strictly_increase() {
    let extraction = extract(&TeamRegistry::builtin(), "mets", &full_page()).unwrap();
    let ordinals: Vec<_> = extraction.records.iter().map(|r| r.source_ordinal).collect();
    assert!(ordinals.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn concatenated_entries_in_one_block_become_two_records() {
    let html = page(
        r#"<div class="story-part markdown">RHP Dedniel NúñezInjury: Right elbow sprainStatus: Out for the season. (updated May 5)LHP Sean ManaeaInjury: Right oblique strainIL date: March 27Status: Throwing from 90 feet.</div>"#,
    );
    let extraction = extract(&TeamRegistry::builtin(), "mets", &html).unwrap();

    assert_eq!(extraction.records.len(), 2);
    let first = &extraction.records.records()[0];
    let second = &extraction.records.records()[1];
    assert_eq!((first.source_ordinal, second.source_ordinal), (0, 1));
    assert_eq!(first.name, "Dedniel Núñez");
    assert_eq!(first.status.as_deref(), Some("Out for the season."));
    assert_eq!(first.last_updated.as_deref(), Some("May 5"));
    assert_eq!(second.name, "Sean Manaea");
    assert_eq!(second.placement_date.as_deref(), Some("March 27"));
    assert_eq!(second.last_updated, None);
}

#[test]
fn entry_after_a_trailing_year_is_not_swallowed() {
    let html = page(
        r#"<div class="story-part markdown">RHP Paul BlackburnInjury: KneeExpected return: 2026LHP Sean ManaeaInjury: Oblique</div>"#,
    );
    let extraction = extract(&TeamRegistry::builtin(), "mets", &html).unwrap();

    assert_eq!(extraction.records.len(), 2);
    let first = &extraction.records.records()[0];
    let second = &extraction.records.records()[1];
    assert_eq!(first.expected_return.as_deref(), Some("2026"));
    assert_eq!(second.name, "Sean Manaea");
    assert_eq!(second.description.as_deref(), Some("Oblique"));
}

#[test]
fn nested_story_parts_yield_one_record() {
    let html = page(
        r#"<div class="story-part markdown"><div class="story-part markdown">RHP Kodai SengaInjury: Shoulder</div></div>"#,
    );
    let extraction = extract(&TeamRegistry::builtin(), "mets", &html).unwrap();

    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.records.records()[0].name, "Kodai Senga");
    assert_eq!(extraction.records.records()[0].source_ordinal, 0);
}

#[test]
fn healthy_team_is_distinguished_from_changed_layout() {
    let registry = TeamRegistry::builtin();

    let healthy = extract(&registry, "mets", &page("")).unwrap();
    assert!(healthy.records.is_empty());
    assert_eq!(healthy.shape, ShapeStatus::Ok);

    let no_blocks = extract(
        &registry,
        "mets",
        "<html><body><article><section><p>Redesigned</p></section></article></body></html>",
    )
    .unwrap();
    assert!(no_blocks.records.is_empty());
    assert_eq!(no_blocks.shape, ShapeStatus::NoCandidateBlocks);

    let no_container = extract(&registry, "mets", "<html><body><p>Hi</p></body></html>").unwrap();
    assert!(no_container.records.is_empty());
    assert_eq!(no_container.shape, ShapeStatus::ContainerMissing);
}

#[test]
fn never_fails_on_messy_markup_for_any_team() {
    let registry = TeamRegistry::builtin();
    let documents = [
        "",
        "<html>",
        "not html at all",
        "<article><section><div class=\"story-part markdown\">RHP</div></section></article>",
        "<article><div class=\"story-part markdown\">C <b>Injury:</b></div></article>",
        "<article><div class=\"story-part markdown\">SS Someone Injury: IL date: Expected return: Status:</div></article>",
    ];
    for key in registry.keys() {
        for doc in &documents {
            let extraction = extract(&registry, &key, doc).unwrap();
            assert_eq!(extraction.team.key, key);
        }
    }
}

#[test]
fn unknown_team_is_a_configuration_error() {
    let err = extract(&TeamRegistry::builtin(), "expos", &full_page()).unwrap_err();
    assert!(matches!(err, ScraperError::UnknownTeam { .. }));
}

#[test]
fn malformed_entries_are_rejected_without_losing_the_rest() {
    let html = page(
        r#"<div class="story-part markdown"><p>RHP</p><p>Injury: Unknown</p></div>
        <div class="story-part markdown"><p>LHP David Peterson</p><p>Injury: Hip</p></div>"#,
    );
    let extraction = extract(&TeamRegistry::builtin(), "mets", &html).unwrap();
    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.records.records()[0].name, "David Peterson");
    assert_eq!(extraction.records.records()[0].source_ordinal, 0);
    assert_eq!(extraction.rejections.len(), 1);
}

#[test]
fn filtering_is_idempotent() {
    let blocks = vec![
        RawBlock {
            ordinal: 0,
            text: "QB Joe NamathInjury: Knee".to_string(),
        },
        RawBlock {
            ordinal: 1,
            text: "SS Francisco LindorInjury: Back".to_string(),
        },
    ];
    let run = || -> Vec<String> {
        tokenize(&blocks)
            .iter()
            .filter_map(|sub| validate(fields::extract(sub)).ok())
            .map(|record| record.name)
            .collect()
    };
    assert_eq!(run(), vec!["Francisco Lindor".to_string()]);
    assert_eq!(run(), run());
}

#[test]
fn summary_and_search_over_extracted_records() {
    let extraction = extract(&TeamRegistry::builtin(), "mets", &full_page()).unwrap();

    let stats = summarize(&extraction.records);
    assert_eq!(stats.total, 3);
    let keys: Vec<_> = stats.by_category.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["RHP", "C", "1B"]);

    let hit = find(&extraction.records, "nez").unwrap();
    assert_eq!(hit.name, "Dedniel Núñez");
    assert!(find(&extraction.records, "Lindor").is_none());
}

#[test]
fn serialized_records_use_boundary_field_names() {
    let extraction = extract(&TeamRegistry::builtin(), "mets", &full_page()).unwrap();
    let value = serde_json::to_value(&extraction.records.records()[0]).unwrap();
    let object = value.as_object().unwrap();
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "expected_return",
            "il_date",
            "injury",
            "last_updated",
            "name",
            "position",
            "status"
        ]
    );
    assert_eq!(object["position"], "RHP");
}

#[test]
fn retargeted_selector_and_synthetic_team_table() {
    let config = Config::from_toml_str(
        r#"
[selector]
containers = ["div.report"]
markers = ["entry"]

[[teams]]
key = "bisons"
name = "Buffalo Bisons"
url = "https://example.test/bisons"
abbreviation = "BUF"
"#,
    )
    .unwrap();
    let registry = config.team_registry().unwrap();
    let extractor = InjuryExtractor::from_config(&config.selector).unwrap();

    let html = r#"<div class="report"><ul>
        <li class="entry">CF Jane Doe Injury: Hamstring Status: Day to day</li>
        <li class="other">RHP Not Counted Injury: Arm</li>
    </ul></div>"#;
    let extraction = extractor.extract(&registry, "bisons", html).unwrap();
    assert_eq!(extraction.records.len(), 1);
    assert_eq!(extraction.records.records()[0].name, "Jane Doe");
    assert_eq!(
        extraction.records.records()[0].status.as_deref(),
        Some("Day to day")
    );

    let other = TeamRegistry::new(vec![TeamConfig::new("a", "A", "https://a.test", "A")]).unwrap();
    assert!(matches!(
        extractor.extract(&other, "mets", html),
        Err(ScraperError::UnknownTeam { .. })
    ));
}
