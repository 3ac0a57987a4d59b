mod config;

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use catalog::{find_region, CatalogError, GenreId, GenreTable, Movie, MovieDetails, SUPPORTED_REGIONS};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use session::{DiscoveryOrchestrator, Phase, SessionView, SwipeSession};
use sources::{MovieFilters, NavigationParams};
use swipe::DeckState;
use tmdb_client::{MovieApi, TmdbClient};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::AppConfig;

/// swipe-match - swipe through movies until one clicks
#[derive(Parser)]
#[command(name = "swipe-match")]
#[command(about = "Swipe-to-match movie discovery on top of TMDB", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Swipe through candidates interactively
    Swipe {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Print the candidate list for a filter selection
    Candidates {
        #[command(flatten)]
        filters: FilterArgs,

        /// Number of candidates to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// List movie genres
    Genres,

    /// List streaming providers in a region
    Providers {
        #[arg(long)]
        region: Option<String>,
    },

    /// Show details for one movie
    Details {
        /// TMDB movie id
        id: u64,
    },

    /// Search movies by title
    Search {
        query: String,

        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// List supported regions
    Regions,
}

/// Filter selection, as confirmed on the filter screen.
///
/// With no genres and no platforms the session shows latest releases only.
#[derive(Args, Debug)]
struct FilterArgs {
    /// Region code, e.g. US or GB
    #[arg(long)]
    region: Option<String>,

    /// Comma-separated TMDB genre ids
    #[arg(long, value_delimiter = ',')]
    genres: Vec<GenreId>,

    /// Comma-separated provider ids
    #[arg(long, value_delimiter = ',')]
    platforms: Vec<String>,

    #[arg(long)]
    year_start: Option<u16>,

    #[arg(long)]
    year_end: Option<u16>,

    /// Minimum rating on a 0-5 scale
    #[arg(long)]
    rating: Option<f32>,
}

impl FilterArgs {
    fn to_filters(&self, default_region: &str) -> Result<MovieFilters> {
        let region = resolve_region(self.region.as_deref(), default_region)?;
        let mut params = NavigationParams::from_selection(&self.platforms, &self.genres, Some(region));
        params.year_start = self.year_start.map(|y| y.to_string());
        params.year_end = self.year_end.map(|y| y.to_string());
        params.rating = self.rating.map(|r| r.to_string());
        params.to_filters().context("Invalid filter selection")
    }
}

/// Requested genre ids the loaded genre table does not know
fn unknown_genres(table: &GenreTable, requested: &[GenreId]) -> Vec<CatalogError> {
    requested
        .iter()
        .filter_map(|id| table.require(*id).err())
        .collect()
}

fn warn_unknown_genres(orchestrator: &DiscoveryOrchestrator, requested: &[GenreId]) {
    if let Some(table) = orchestrator.session().genres() {
        for e in unknown_genres(table, requested) {
            println!("{} {} (it will match nothing)", "!".yellow(), e);
        }
    }
}

fn resolve_region<'a>(requested: Option<&'a str>, default_region: &'a str) -> Result<&'static str> {
    let code = requested.unwrap_or(default_region);
    let region = find_region(code).with_context(|| format!("Region {} is not supported", code))?;
    Ok(region.code)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Regions are built in; everything else needs the API
    if let Commands::Regions = cli.command {
        handle_regions();
        return Ok(());
    }

    let config = AppConfig::from_env()?;
    let client = Arc::new(TmdbClient::new(config.client_settings()).context("Failed to create TMDB client")?);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Swipe { filters } => handle_swipe(&config, client, &filters).await?,
        Commands::Candidates { filters, limit } => {
            handle_candidates(&config, client, &filters, limit).await?
        }
        Commands::Genres => handle_genres(&*client).await?,
        Commands::Providers { region } => handle_providers(&config, client, region).await?,
        Commands::Details { id } => handle_details(&config, client, id).await?,
        Commands::Search { query, page } => handle_search(&config, client, &query, page).await?,
        Commands::Regions => handle_regions(),
    }

    Ok(())
}

fn build_orchestrator(config: &AppConfig, client: Arc<TmdbClient>, filters: MovieFilters) -> DiscoveryOrchestrator {
    let session = SwipeSession::new(filters, config.session_settings());
    DiscoveryOrchestrator::new(client, session)
}

/// Handle the 'swipe' command
async fn handle_swipe(config: &AppConfig, client: Arc<TmdbClient>, args: &FilterArgs) -> Result<()> {
    let filters = args.to_filters(&config.default_region)?;
    let mut orchestrator = build_orchestrator(config, client, filters);

    println!("Loading movies for {}...", orchestrator.session().filters().region());
    let start = Instant::now();
    orchestrator.load().await;
    println!("{} Loaded in {:?}", "✓".green(), start.elapsed());
    warn_unknown_genres(&orchestrator, &args.genres);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut matches: Vec<Movie> = Vec::new();

    loop {
        let view = orchestrator.session().view();
        print_view(&view);

        let prompt = match view.phase {
            Phase::Presenting => "[y]es  [n]o  [i]nfo  [r]efresh  <dx> drag  [q]uit",
            Phase::Matched => "[c]ontinue  [q]uit",
            Phase::Loading | Phase::Error | Phase::Empty => "[r]efresh  [q]uit",
        };
        println!("{}", prompt.dimmed());

        let Some(line) = lines.next_line().await.context("Failed to read input")? else {
            break;
        };
        let input = line.trim();

        match input {
            "q" | "quit" => break,
            "r" | "refresh" => {
                orchestrator.refresh().await;
            }
            "c" | "continue" => {
                orchestrator.session_mut().continue_swiping();
            }
            "i" | "info" => {
                if let Some(movie) = orchestrator.session().current().cloned() {
                    match orchestrator.details(movie.id).await {
                        Ok(details) => print_details(&details),
                        Err(e) => println!("{} {:#}", "✗".red(), e),
                    }
                }
            }
            "y" | "yes" => record_match(orchestrator.session_mut().accept(), &orchestrator, &mut matches),
            "n" | "no" => {
                orchestrator.session_mut().reject();
            }
            other => match other.parse::<f32>() {
                Ok(dx) => {
                    let state = orchestrator.session_mut().drag_end(dx, 0.0);
                    if state.is_none() {
                        println!("{}", "Snapped back".dimmed());
                    }
                    record_match(state, &orchestrator, &mut matches);
                }
                Err(_) => println!("Unknown command: {}", other),
            },
        }
    }

    orchestrator.session_mut().close();

    if !matches.is_empty() {
        println!("{}", "Your matches:".bold().blue());
        for movie in &matches {
            println!("  {} {} ({})", "♥".magenta(), movie.title, movie.year);
        }
    }
    Ok(())
}

fn record_match(state: Option<DeckState>, orchestrator: &DiscoveryOrchestrator, matches: &mut Vec<Movie>) {
    if let (Some(DeckState::Matched(_)), Some(movie)) = (state, orchestrator.session().current()) {
        matches.push(movie.clone());
    }
}

/// Handle the 'candidates' command
async fn handle_candidates(
    config: &AppConfig,
    client: Arc<TmdbClient>,
    args: &FilterArgs,
    limit: usize,
) -> Result<()> {
    let filters = args.to_filters(&config.default_region)?;
    let mut orchestrator = build_orchestrator(config, client, filters);
    orchestrator.load().await;
    warn_unknown_genres(&orchestrator, &args.genres);

    let view = orchestrator.session().view();
    if let Some(error) = &view.error {
        println!("{} {}", "✗".red(), error);
    }
    if view.phase != Phase::Presenting {
        println!("{}", view.summary());
        return Ok(());
    }

    let session = orchestrator.session();
    let mode = if session.filters().latest { "latest releases" } else { "filtered" };
    println!(
        "{}",
        format!("{} candidates ({}, region {}):", view.total, mode, session.filters().region())
            .bold()
            .blue()
    );
    for (rank, movie) in session.candidates().iter().take(limit).enumerate() {
        print_movie_line(rank + 1, movie, session.genres());
    }
    Ok(())
}

/// Handle the 'genres' command
async fn handle_genres(api: &dyn MovieApi) -> Result<()> {
    let table = match api.fetch_genres().await {
        Ok(genres) => GenreTable::from_genres(genres),
        Err(e) => {
            println!("{} {} (showing built-in genres)", "!".yellow(), e);
            GenreTable::fallback()
        }
    };
    println!("{}", "Genres:".bold().blue());
    for genre in table.iter() {
        println!("{:>6}  {}", genre.id.to_string().green(), genre.name);
    }
    Ok(())
}

/// Handle the 'providers' command
async fn handle_providers(config: &AppConfig, client: Arc<TmdbClient>, region: Option<String>) -> Result<()> {
    let region = resolve_region(region.as_deref(), &config.default_region)?;
    let filters = MovieFilters {
        region: Some(region.to_string()),
        ..MovieFilters::default()
    };
    let orchestrator = build_orchestrator(config, client, filters);

    let mut providers = orchestrator.providers().await?;
    providers.sort_by_key(|p| p.display_priority.unwrap_or(u32::MAX));

    println!("{}", format!("Streaming providers in {}:", region).bold().blue());
    for provider in providers {
        println!("{:>6}  {}", provider.provider_id.to_string().green(), provider.provider_name);
    }
    Ok(())
}

/// Handle the 'details' command
async fn handle_details(config: &AppConfig, client: Arc<TmdbClient>, id: u64) -> Result<()> {
    let filters = MovieFilters {
        region: Some(config.default_region.clone()),
        ..MovieFilters::default()
    };
    let orchestrator = build_orchestrator(config, client, filters);

    let mut details = orchestrator.details(id).await?;
    match orchestrator.with_platforms(details.movie.clone()).await {
        Ok(movie) => details.movie = movie,
        Err(e) => tracing::warn!("{:#}", e),
    }
    print_details(&details);
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(config: &AppConfig, client: Arc<TmdbClient>, query: &str, page: u32) -> Result<()> {
    let orchestrator = build_orchestrator(config, client, MovieFilters::default());
    let movies = orchestrator.search(query, page).await?;

    println!("{}", format!("Search results for '{}':", query).bold().blue());
    for (rank, movie) in movies.iter().enumerate() {
        print_movie_line(rank + 1, movie, None);
    }
    Ok(())
}

/// Handle the 'regions' command
fn handle_regions() {
    println!("{}", "Supported regions:".bold().blue());
    for region in SUPPORTED_REGIONS {
        println!("  {}  {}", region.code.green(), region.name);
    }
}

fn year_label(year: u16) -> String {
    if year == 0 {
        "n/a".to_string()
    } else {
        year.to_string()
    }
}

fn print_movie_line(rank: usize, movie: &Movie, genres: Option<&GenreTable>) {
    let genre_names = genres
        .map(|table| table.names_for(movie).join(", "))
        .unwrap_or_default();
    println!(
        "{}. {} ({}) [{}] - {:.1}★  #{}",
        rank.to_string().green(),
        movie.title,
        year_label(movie.year),
        genre_names,
        movie.rating,
        movie.id
    );
}

fn print_view(view: &SessionView) {
    if let Some(error) = &view.error {
        println!("{} {}", "✗".red(), error);
    }
    match (view.phase, &view.current) {
        (Phase::Presenting, Some(movie)) => {
            println!();
            println!("{}", view.summary().bold());
            println!(
                "  {} · {:.1}★ · {}",
                year_label(movie.year),
                movie.rating,
                view.genres.join(", ")
            );
            if !movie.description.is_empty() {
                println!("  {}", movie.description.dimmed());
            }
        }
        (Phase::Matched, Some(movie)) => {
            println!();
            println!("{}", "★ It's a match! ★".bold().magenta());
            println!("  You picked {}", movie.title.bold());
        }
        _ => println!("{}", view.summary()),
    }
}

fn print_details(details: &MovieDetails) {
    let movie = &details.movie;
    println!("{}", format!("{} ({})", movie.title, year_label(movie.year)).bold().blue());
    let genres: Vec<&str> = details.genres.iter().map(|g| g.name.as_str()).collect();
    println!("{}Genres: {}", "• ".green(), genres.join(", "));
    println!("{}Rating: {:.1}★", "• ".green(), movie.rating);
    if let Some(duration) = &details.duration {
        println!("{}Runtime: {}", "• ".green(), duration);
    }
    if let Some(director) = &details.director {
        println!("{}Director: {}", "• ".green(), director);
    }
    if !details.cast.is_empty() {
        let cast: Vec<&str> = details.cast.iter().map(|c| c.name.as_str()).collect();
        println!("{}Cast: {}", "• ".green(), cast.join(", "));
    }
    if let Some(platforms) = &movie.platforms {
        let label = if platforms.is_empty() { "none".to_string() } else { platforms.join(", ") };
        println!("{}Streaming: {}", "• ".cyan(), label);
    }
    if let Some(trailer) = &details.trailer {
        println!("{}Trailer: {}", "• ".cyan(), trailer);
    }
    if !movie.description.is_empty() {
        println!();
        println!("{}", movie.description);
    }
}
