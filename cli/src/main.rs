//! Command line entry point for typerank
//!
//! Prints the elemental rankings, analyzes a team of elements, or searches
//! the marketplace for the cheapest listings per power rating.

mod config;
mod report;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use typerank_chart::{ElementReport, Statistic, TypeChart};
use typerank_market::{MarketClient, RequestHeaders, cheapest};
use typerank_protocol::ItemsQuery;
use typerank_team::{Roster, analyze_team};

use config::AppConfig;
use report::OutputFormat;

#[derive(Parser)]
#[command(
    name = "typerank",
    version,
    about = "Rank elemental types, score teams and find cheap marketplace listings"
)]
struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// All six rankings and the combined score table
    Elements,

    /// One ranking, e.g. most-attack-strength
    Ranking { statistic: Statistic },

    /// Aggregate strengths and weaknesses of a team
    Team {
        /// Members as names, a comma separated list, or a JSON array
        #[arg(required = true)]
        members: Vec<String>,
    },

    /// Cheapest listings by price per power rating
    Market {
        #[arg(long)]
        hero: Option<String>,

        /// A or S
        #[arg(long)]
        rarity: Option<String>,

        /// Number of listings to print
        #[arg(long)]
        top: Option<usize>,

        /// Stop after this many listing pages
        #[arg(long)]
        max_pages: Option<u32>,
    },
}

fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    config.apply_env();

    if let Some(level) = &args.log_level {
        config.logging.level = level.clone();
    }
    if let Command::Market {
        hero,
        rarity,
        top,
        max_pages,
    } = &args.command
    {
        if let Some(hero) = hero {
            config.market.hero = hero.clone();
        }
        if let Some(rarity) = rarity {
            config.market.rarity = rarity.clone();
        }
        if let Some(top) = top {
            config.market.top = *top;
        }
        if max_pages.is_some() {
            config.market.max_pages = *max_pages;
        }
    }

    config.validate()?;
    Ok(config)
}

async fn run_market(config: &AppConfig, format: OutputFormat) -> Result<String> {
    let settings = &config.market;
    let hero = settings.hero()?;
    let rarity = settings.rarity()?;

    let mut query = ItemsQuery::new(settings.page_size);
    query.base_card_id = Some(hero.base_card_id());
    query.rarities = vec![rarity];

    let headers = RequestHeaders {
        cookie: settings.cookie.clone(),
        referer: settings.referer.clone(),
        user_agent: settings.user_agent.clone(),
    };
    if headers.cookie.is_none() {
        tracing::warn!("No market cookie configured, requests may be rejected");
    }

    let client = MarketClient::new(
        &settings.base_url,
        &headers,
        query,
        config.request.pacing(),
        config.request.retry(),
    )?
    .with_max_pages(settings.max_pages);

    info!(
        hero = hero.as_str(),
        rarity = ?rarity,
        top = settings.top,
        "Searching market"
    );
    let listings = cheapest(&client, settings.top).await?;
    report::listings(&listings, format)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;
    init_logging(&config.logging.level)?;

    let chart = TypeChart::standard();
    let output = match &args.command {
        Command::Elements => {
            let report = ElementReport::build(&chart, &config.scoring)
                .context("Failed to combine rankings")?;
            report::element_report(&report, args.format)?
        }
        Command::Ranking { statistic } => {
            report::ranking(*statistic, &chart.ranking(*statistic), args.format)?
        }
        Command::Team { members } => {
            let roster = Roster::parse(&members.join(" "))?;
            if roster.is_empty() {
                bail!("Team has no members");
            }
            info!(members = roster.len(), "Analyzing team");
            let analysis = analyze_team(&chart, roster.members());
            report::team(&roster, &analysis, args.format)?
        }
        Command::Market { .. } => run_market(&config, args.format).await?,
    };

    print!("{}", output);
    Ok(())
}
