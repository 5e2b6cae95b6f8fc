use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use football_analyzer::scrapers::page_fetcher::check_trusted_url;
use football_analyzer::{
    analyze_document, analyze_match, format_league_profile, format_league_table, AnalyzerError,
    FetchConfig, League, MatchAnalysis, PageFetcher,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scraper::Html;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cli", about = "Football match analyzer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch a match page and predict the outcome
    Analyze {
        /// Match URL, e.g. https://www.forebet.com/en/football/matches/arsenal-chelsea-123456
        url: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Analyze a saved match page without fetching it
    AnalyzeFile {
        /// Path to the saved HTML
        path: PathBuf,
        /// URL the page was saved from (used for league detection)
        #[arg(long)]
        url: String,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the known leagues and their profiles
    Leagues {
        /// Show a single league, e.g. "Serie A"; unknown names show the default profile
        name: Option<String>,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Actual result to grade against, e.g. "H 2-1", "A 0-3", "D"
    #[arg(long)]
    result: Option<String>,
    /// Seed the simulation for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,
}

impl OutputArgs {
    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Analyze { url, output } => {
            let fetcher = PageFetcher::new()?;
            let analysis =
                match analyze_match(&fetcher, &url, output.result.as_deref(), &mut output.rng())
                    .await
                {
                    Ok(analysis) => analysis,
                    Err(e) => {
                        report_error(&e);
                        return Err(e).context("Failed to analyze match");
                    }
                };
            print_analysis(&analysis, output.json)?;
        }
        Command::AnalyzeFile { path, url, output } => {
            let config = FetchConfig::default();
            if let Err(e) = check_trusted_url(&url, &config.trusted_prefix) {
                report_error(&e);
                return Err(e.into());
            }
            let html = std::fs::read_to_string(&path)
                .map_err(|source| AnalyzerError::ReadPage {
                    path: path.clone(),
                    source,
                })
                .context("Failed to load saved page")?;
            let document = Html::parse_document(&html);
            let analysis = analyze_document(
                &document,
                &url,
                output.result.as_deref(),
                &mut output.rng(),
            );
            print_analysis(&analysis, output.json)?;
        }
        Command::Leagues { name: Some(name) } => {
            println!("{}", format_league_profile(League::from_name(&name)));
        }
        Command::Leagues { name: None } => {
            println!("League Performance Statistics\n");
            println!("{}", format_league_table());
        }
    }

    Ok(())
}

fn report_error(error: &AnalyzerError) {
    eprintln!("Error analyzing match: {}", error);
    if let Some(hint) = error.hint() {
        eprintln!("Tip: {}", hint);
    }
}

fn print_analysis(analysis: &MatchAnalysis, json: bool) -> Result<()> {
    if json {
        let json =
            serde_json::to_string_pretty(analysis).context("Failed to serialize analysis")?;
        println!("{}", json);
    } else {
        println!("Analysis Complete!\n");
        println!("{}", analysis.format());
    }
    Ok(())
}
