//! Pokedex CLI
//!
//! Terminal front end for the catalog browser:
//! - Interactive browsing with filters, pages and the detail panel
//! - One-shot listing and detail output
//! - Favorites management

use anyhow::Context;
use clap::{Parser, Subcommand};
use futures_util::future::{join_all, LocalBoxFuture};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pokedex::app::{
    AppResult, CardView, Command, Controller, DetailRequest, DetailTab, Renderer, Summary,
    WalkOutcome, HELP,
};
use pokedex::catalog::{is_known_type, paginate, CatalogError, FilterCriteria, PokemonId, Region};
use pokedex::config::{generate_default_config, Config, LoggingConfig};
use pokedex::favorites::{FavoritesStore, JsonFileStore, KeyValueStore};
use pokedex::source::{load_dataset, CatalogSource, PokeApiClient, SourceResult};
use pokedex::terminal::TerminalRenderer;

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse the PokeAPI catalog from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: <config dir>/pokedex/config.toml, then ./pokedex.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// PokeAPI base URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive browser (default)
    Browse,

    /// Print one page of the filtered catalog
    List {
        /// Case-insensitive name substring
        #[arg(short, long)]
        search: Option<String>,
        /// Type tag (fire, water, ...)
        #[arg(short = 't', long = "type")]
        type_tag: Option<String>,
        /// Region (kanto, johto, ...)
        #[arg(short, long)]
        region: Option<Region>,
        /// Only favorites
        #[arg(short, long)]
        favorites: bool,
        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Show the detail panel of one Pokemon
    Show {
        /// Id or name
        key: String,
    },

    /// Toggle a favorite
    Favorite {
        id: PokemonId,
    },

    /// List favorites
    Favorites,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

type TerminalController<K> = Controller<PokeApiClient, K, TerminalRenderer<std::io::Stdout>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = &cli.command {
        return write_default_config(output.as_ref());
    }

    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    init_logging(&config.logging)?;

    tracing::info!("Pokedex v{}", env!("CARGO_PKG_VERSION"));

    let source = Arc::new(
        PokeApiClient::new(&config.api.to_client_config())
            .context("failed to build the HTTP client")?,
    );
    let store = JsonFileStore::new(config.favorites.resolved_path());
    tracing::debug!("Favorites file: {:?}", store.path());

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => browse(source, store, &config).await,
        Commands::List {
            search,
            type_tag,
            region,
            favorites,
            page,
        } => {
            let mut criteria = FilterCriteria::new();
            if let Some(text) = search {
                criteria = criteria.search(text);
            }
            if let Some(tag) = type_tag.map(|t| t.to_lowercase()) {
                if !is_known_type(&tag) {
                    return Err(CatalogError::UnknownType(tag).into());
                }
                criteria = criteria.type_tag(tag);
            }
            if let Some(region) = region {
                criteria = criteria.region(region);
            }
            list(&*source, store, &config, criteria.favorites_only(favorites), page).await
        }
        Commands::Show { key } => show(source, store, &config, &key).await,
        Commands::Favorite { id } => toggle_favorite(&*source, store, id).await,
        Commands::Favorites => print_favorites(&*source, store).await,
        Commands::Config { .. } => Ok(()),
    }
}

/// Logs go to stderr or the configured file; `RUST_LOG` wins over the level
fn init_logging(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pokedex={}", config.level)));

    let writer = match &config.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };
    let ansi = config.file.is_none();

    let registry = tracing_subscriber::registry().with(filter);
    if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(ansi)
                    .with_writer(writer),
            )
            .init();
    }
    Ok(())
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, content)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}

// ============================================
// Interactive browser
// ============================================

enum Step {
    Continue,
    Resolve(DetailRequest),
    Quit,
}

type PendingWalk = (DetailRequest, LocalBoxFuture<'static, SourceResult<WalkOutcome>>);

async fn browse<K: KeyValueStore>(
    source: Arc<PokeApiClient>,
    store: K,
    config: &Config,
) -> anyhow::Result<()> {
    let mut controller = Controller::new(
        source,
        FavoritesStore::load(store),
        TerminalRenderer::new(std::io::stdout()),
        config.to_settings(),
    );

    println!("Loading up to {} Pokemon...", config.api.list_limit);
    let count = controller
        .load()
        .await
        .context("failed to load the catalog")?;
    tracing::info!("Loaded {} records", count);
    println!("Type `help` for commands.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<PendingWalk> = None;

    loop {
        prompt();
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(e) => {
                        println!("! {}", e);
                        continue;
                    }
                };
                match apply(&mut controller, command) {
                    Ok(Step::Continue) => {}
                    Ok(Step::Resolve(request)) => {
                        let source = Arc::clone(controller.source());
                        let walk = request.clone();
                        let future: LocalBoxFuture<'static, _> =
                            Box::pin(async move { walk.resolve(&*source).await });
                        pending = Some((request, future));
                    }
                    Ok(Step::Quit) => break,
                    Err(e) => println!("! {}", e),
                }
            }
            outcome = async {
                match pending.as_mut() {
                    Some((_, future)) => future.await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some((request, _)) = pending.take() {
                    if let Err(e) = controller.finish_detail(&request, outcome) {
                        println!("! {}", e);
                    }
                }
            }
        }
    }

    controller.close_detail();
    Ok(())
}

fn prompt() {
    print!("pokedex> ");
    let _ = std::io::stdout().flush();
}

fn apply<K: KeyValueStore>(
    controller: &mut TerminalController<K>,
    command: Command,
) -> AppResult<Step> {
    match command {
        Command::Search(text) => controller.set_search(text),
        Command::Type(tag) => controller.set_type(tag.as_deref())?,
        Command::Region(region) => controller.set_region(region),
        Command::FavoritesOnly(on) => controller.set_favorites_only(on),
        Command::Page(n) => {
            controller.select_page(n);
        }
        Command::Next => {
            controller.next_page();
        }
        Command::Prev => {
            controller.prev_page();
        }
        Command::Favorite(id) => {
            let now = controller.toggle_favorite(id)?;
            println!("{} #{}", if now { "♥ added" } else { "♡ removed" }, id);
        }
        Command::Show(key) => return Ok(Step::Resolve(controller.open_named(&key)?)),
        Command::Stage(n) => return Ok(Step::Resolve(controller.open_stage(n)?)),
        Command::Tab(tab) => controller.show_tab(tab)?,
        Command::Close => controller.close_detail(),
        Command::Help => println!("{}", HELP),
        Command::Quit => return Ok(Step::Quit),
    }
    Ok(Step::Continue)
}

// ============================================
// One-shot commands
// ============================================

async fn list<S: CatalogSource, K: KeyValueStore>(
    source: &S,
    store: K,
    config: &Config,
    criteria: FilterCriteria,
    page: usize,
) -> anyhow::Result<()> {
    let favorites = FavoritesStore::load(store);
    let dataset = load_dataset(source, config.api.list_limit)
        .await
        .context("failed to load the catalog")?;

    let matching = criteria.apply(&dataset, favorites.set());
    let page = paginate(&matching, page, config.to_settings().page_size);
    let cards: Vec<CardView> = page
        .items
        .iter()
        .map(|p| CardView::new(p, favorites.contains(p.id)))
        .collect();

    let mut renderer = TerminalRenderer::new(std::io::stdout());
    renderer.render_summary(&Summary {
        total: dataset.len(),
        matching: matching.len(),
        favorites: favorites.set().len(),
    });
    renderer.render_cards(&cards);
    renderer.render_pagination(&page.controls());
    Ok(())
}

async fn show<K: KeyValueStore>(
    source: Arc<PokeApiClient>,
    store: K,
    config: &Config,
    key: &str,
) -> anyhow::Result<()> {
    let pokemon = source
        .pokemon_named(&key.trim().trim_start_matches('#').to_lowercase())
        .await
        .with_context(|| format!("failed to fetch {}", key))?;

    let mut controller = Controller::new(
        Arc::clone(&source),
        FavoritesStore::load(store),
        TerminalRenderer::new(std::io::stdout()),
        config.to_settings(),
    );
    let request = controller.open_record(pokemon);
    controller.show_tab(DetailTab::Moves)?;

    let outcome = request.resolve(&*source).await;
    controller.finish_detail(&request, outcome)?;
    controller.close_detail();
    Ok(())
}

async fn toggle_favorite<S: CatalogSource, K: KeyValueStore>(
    source: &S,
    store: K,
    id: PokemonId,
) -> anyhow::Result<()> {
    let pokemon = source
        .pokemon_named(&id.to_string())
        .await
        .with_context(|| format!("no Pokemon with id {}", id))?;

    let mut favorites = FavoritesStore::load(store);
    let now = favorites.toggle(id)?;
    println!(
        "{} #{} {}",
        if now { "♥ added" } else { "♡ removed" },
        id,
        pokemon.name
    );
    Ok(())
}

async fn print_favorites<S: CatalogSource, K: KeyValueStore>(
    source: &S,
    store: K,
) -> anyhow::Result<()> {
    let favorites = FavoritesStore::load(store);
    if favorites.set().is_empty() {
        println!("No favorites yet.");
        println!();
        println!("Add one with:");
        println!("  pokedex favorite 25");
        return Ok(());
    }

    let ids: Vec<PokemonId> = favorites.set().iter().collect();
    let records = join_all(
        ids.iter()
            .map(|id| async move { source.pokemon_named(&id.to_string()).await }),
    )
    .await;

    println!("{:<8} {:<16} {}", "ID", "Name", "Types");
    println!("{}", "-".repeat(40));
    for (id, record) in ids.iter().zip(records) {
        match record {
            Ok(p) => println!("{:<8} {:<16} {}", id, p.name, p.types.join("/")),
            Err(e) => {
                tracing::warn!(id, "Failed to fetch favorite: {}", e);
                println!("{:<8} {:<16} -", id, "?");
            }
        }
    }
    Ok(())
}
