use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, warn};

use crate::config::SelectorConfig;
use crate::error::{Result, ScraperError};
use crate::types::{RawBlock, ShapeStatus};

/// Elements whose boundaries become line breaks when a block is flattened to text.
const BREAKING_TAGS: &[&str] = &[
    "p", "div", "li", "ul", "ol", "br", "h1", "h2", "h3", "h4", "h5", "h6", "section",
    "blockquote", "tr",
];

/// Candidate blocks found in one document, plus whether the container was there at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedBlocks {
    pub blocks: Vec<RawBlock>,
    pub container_found: bool,
}

impl LocatedBlocks {
    pub fn shape(&self) -> ShapeStatus {
        if !self.container_found {
            ShapeStatus::ContainerMissing
        } else if self.blocks.is_empty() {
            ShapeStatus::NoCandidateBlocks
        } else {
            ShapeStatus::Ok
        }
    }
}

/// Finds candidate blocks for one family of page layouts.
pub trait BlockSelector {
    fn name(&self) -> &str;

    /// Ordered candidate blocks of `document`. A missing container is reported
    /// through [`LocatedBlocks::container_found`], never as an error.
    fn locate(&self, document: &Html) -> LocatedBlocks;
}

/// MLB.com news article layout: story segments rendered as markdown bodies inside
/// the article's section.
pub struct StoryPartSelector {
    containers: Vec<(String, Selector)>,
    section: Option<Selector>,
    candidates: Selector,
}

impl StoryPartSelector {
    pub fn new(config: &SelectorConfig) -> Result<Self> {
        let containers = config
            .containers
            .iter()
            .map(|raw| parse_selector(raw).map(|sel| (raw.clone(), sel)))
            .collect::<Result<Vec<_>>>()?;
        if containers.is_empty() {
            return Err(ScraperError::Config(
                "block selector needs at least one container selector".to_string(),
            ));
        }

        let section = config.section.as_deref().map(parse_selector).transpose()?;

        if config.markers.is_empty() {
            return Err(ScraperError::Config(
                "block selector needs at least one marker class".to_string(),
            ));
        }
        let candidates = parse_selector(&format!(".{}", config.markers.join(".")))?;

        Ok(Self {
            containers,
            section,
            candidates,
        })
    }

    fn find_container<'a>(&self, document: &'a Html) -> Option<ElementRef<'a>> {
        for (raw, selector) in &self.containers {
            if let Some(container) = document.select(selector).next() {
                info!("Found content using selector: {}", raw);
                return Some(container);
            }
        }
        None
    }
}

impl Default for StoryPartSelector {
    fn default() -> Self {
        // The built-in selector strings are valid CSS
        Self::new(&SelectorConfig::default()).expect("default selector config parses")
    }
}

impl BlockSelector for StoryPartSelector {
    fn name(&self) -> &str {
        "story_part_markdown"
    }

    fn locate(&self, document: &Html) -> LocatedBlocks {
        let Some(container) = self.find_container(document) else {
            warn!("Could not find article content");
            log_available_classes(document);
            return LocatedBlocks {
                blocks: Vec::new(),
                container_found: false,
            };
        };

        let scope = match &self.section {
            Some(section) => container.select(section).next().unwrap_or_else(|| {
                debug!("No section element inside container; searching the container itself");
                container
            }),
            None => container,
        };

        let mut blocks = Vec::new();
        for element in scope.select(&self.candidates) {
            // An outer candidate already carries this one's text
            let nested = element
                .ancestors()
                .filter_map(ElementRef::wrap)
                .take_while(|ancestor| ancestor.id() != scope.id())
                .any(|ancestor| self.candidates.matches(&ancestor));
            if nested {
                continue;
            }
            let text = block_text(element);
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            blocks.push(RawBlock {
                ordinal: blocks.len(),
                text: text.to_string(),
            });
        }

        info!("Found {} candidate blocks", blocks.len());
        LocatedBlocks {
            blocks,
            container_found: true,
        }
    }
}

fn parse_selector(raw: &str) -> Result<Selector> {
    Selector::parse(raw).map_err(|e| ScraperError::Selector {
        selector: raw.to_string(),
        message: format!("{:?}", e),
    })
}

/// Concatenates the text under `element`, turning block-level element boundaries
/// into newlines.
pub fn block_text(element: ElementRef<'_>) -> String {
    let mut out = String::new();
    push_text(element, &mut out);
    out
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(inner) => {
                let breaking = BREAKING_TAGS.contains(&inner.name());
                if breaking {
                    out.push('\n');
                }
                if let Some(child_element) = ElementRef::wrap(child) {
                    push_text(child_element, out);
                }
                if breaking {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

fn log_available_classes(document: &Html) {
    let Ok(classed) = Selector::parse("div[class]") else {
        return;
    };
    for div in document.select(&classed).take(10) {
        debug!("  available div class={:?}", div.value().attr("class"));
    }
}
