use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

use mlb_injury_scraper::constants::CONFIG_PATH_ENV;
use mlb_injury_scraper::extraction::{Extraction, InjuryExtractor};
use mlb_injury_scraper::logging;
use mlb_injury_scraper::metrics::ExtractionMetrics;
use mlb_injury_scraper::{Config, TeamRegistry};

#[derive(Parser)]
#[command(name = "mlb_injury_scraper")]
#[command(about = "Extract MLB injury reports from saved team news pages")]
#[command(version)]
struct Cli {
    /// TOML configuration file (falls back to $INJURY_SCRAPER_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the rolling JSON log file
    #[arg(long, global = true, default_value = "logs")]
    log_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the configured teams
    Teams,
    /// Print every injury record found in a page
    Extract {
        /// Team key, e.g. mets
        #[arg(long)]
        team: String,
        /// Saved HTML page, or '-' for stdin
        #[arg(long, default_value = "-")]
        input: String,
    },
    /// Print counts by position and by injury
    Summary {
        #[arg(long)]
        team: String,
        #[arg(long, default_value = "-")]
        input: String,
    },
    /// Look up one player by (partial) name
    Search {
        #[arg(long)]
        team: String,
        #[arg(long, default_value = "-")]
        input: String,
        /// Name or part of a name
        player: String,
    },
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let path = path.or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from));
    match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::load(&path).with_context(|| format!("loading {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading page from stdin")?;
        Ok(buf)
    } else {
        let bytes = std::fs::read(input).with_context(|| format!("reading {}", input))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn run_extraction(
    extractor: &InjuryExtractor,
    registry: &TeamRegistry,
    team: &str,
    input: &str,
) -> anyhow::Result<Extraction> {
    // Unknown teams fail before any input is read
    registry.require(team)?;
    let html = read_input(input)?;
    let extraction = extractor.extract(registry, team, &html)?;
    if extraction.shape.is_shape_changed() {
        warn!(
            "No injury entries could be located for {}; the page layout may have changed",
            extraction.team.key
        );
    }
    Ok(extraction)
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let _guard = logging::init_logging(&cli.log_dir);
    ExtractionMetrics::describe();

    let config = load_config(cli.config)?;
    let registry = config.team_registry()?;
    let extractor = InjuryExtractor::from_config(&config.selector)?;

    let output = match cli.command {
        Commands::Teams => {
            let teams: serde_json::Map<String, serde_json::Value> = registry
                .iter()
                .map(|team| {
                    (
                        team.key.clone(),
                        json!({
                            "name": team.display_name,
                            "abbreviation": team.abbreviation,
                            "url": team.source_url,
                        }),
                    )
                })
                .collect();
            json!({ "total_teams": registry.len(), "teams": teams })
        }
        Commands::Extract { team, input } => {
            let extraction = run_extraction(&extractor, &registry, &team, &input)?;
            json!({
                "team": extraction.team.key,
                "team_name": extraction.team.display_name,
                "total_injured": extraction.records.len(),
                "shape": extraction.shape,
                "players": extraction.records.records(),
                "rejected": extraction.rejections,
            })
        }
        Commands::Summary { team, input } => {
            let extraction = run_extraction(&extractor, &registry, &team, &input)?;
            let summary = extraction.summary();
            json!({
                "team": extraction.team.key,
                "shape": extraction.shape,
                "total_injured_players": summary.total,
                "position_breakdown": summary.by_category,
                "injury_type_breakdown": summary.by_injury,
            })
        }
        Commands::Search {
            team,
            input,
            player,
        } => {
            let extraction = run_extraction(&extractor, &registry, &team, &input)?;
            match extraction.records.find(&player) {
                Some(record) => json!({ "found": true, "player": record }),
                None => json!({
                    "found": false,
                    "message": format!(
                        "No injury information found for player: {} on team: {}",
                        player, extraction.team.key
                    ),
                }),
            }
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
