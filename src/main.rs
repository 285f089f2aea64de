//! People Search - Entry Point

use clap::Parser;
use psearch::model::AppError;
use psearch::source::{HttpPeopleSearch, PeopleSearch, StaticDataset};
use psearch::state::{AppState, QueryInput, SearchController, SearchState};
use psearch::view::{ColorConfig, Styles, TuiError, TuiOptions};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;

/// Exit code for print mode when the query is empty.
const EXIT_VALIDATION_ERROR: u8 = 2;

/// People Search - find people by name, with a local fallback dataset
#[derive(Parser, Debug)]
#[command(name = "psearch")]
#[command(version)]
#[command(about = "TUI people search client with local dataset fallback")]
pub struct Args {
    /// Pre-fill the query and submit it on startup
    #[arg(short, long)]
    pub query: Option<String>,

    /// Run one search for --query, print the result and exit
    #[arg(short, long)]
    pub print: bool,

    /// Override the search endpoint
    #[arg(long)]
    pub endpoint: Option<String>,

    /// JSON file replacing the built-in fallback dataset
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    Ok(run(args)?)
}

fn run(args: Args) -> Result<ExitCode, AppError> {
    // Set NO_COLOR env var if --no-color flag is passed
    // so every later color decision sees the same answer
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = psearch::config::load_config_with_precedence(args.config.clone())?;
        let merged = psearch::config::merge_config(config_file);
        let with_env = psearch::config::apply_env_overrides(merged);
        psearch::config::apply_cli_overrides(with_env, args.endpoint.clone(), args.dataset.clone())
    };

    let _log_guard = psearch::logging::init(&config.log_file_path)?;

    info!(
        endpoint = %config.endpoint,
        dataset = ?config.fallback_dataset,
        cookie = config.cookie.is_some(),
        "Configuration loaded and resolved"
    );

    let dataset = match &config.fallback_dataset {
        Some(path) => StaticDataset::load(path)?,
        None => StaticDataset::builtin(),
    };
    let dataset = Arc::new(dataset);
    info!(people = dataset.len(), "Fallback dataset ready");

    let backend: Arc<dyn PeopleSearch> = Arc::new(
        HttpPeopleSearch::new(config.endpoint.clone(), config.cookie.clone())
            .map_err(AppError::HttpClient)?,
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(AppError::Runtime)?;

    if args.print {
        let query = args.query.unwrap_or_default();
        let mut controller = SearchController::new(dataset);
        runtime.block_on(controller.submit_search(&query, backend.as_ref()));

        print!("{}", psearch::view::render_plain(controller.presentation()));

        return Ok(match controller.state() {
            SearchState::EmptyInputError => ExitCode::from(EXIT_VALIDATION_ERROR),
            _ => ExitCode::SUCCESS,
        });
    }

    let mut app_state = AppState::new(dataset);
    let submit_on_start = match args.query {
        Some(query) => {
            app_state.input = QueryInput::with_text(query);
            true
        }
        None => false,
    };

    let options = TuiOptions {
        styles: Styles::with_color_config(ColorConfig::from_env_and_args(args.no_color)),
        submit_on_start,
    };

    psearch::view::run_tui(app_state, backend, runtime.handle().clone(), options).map_err(
        |err| match err {
            TuiError::Io(io) => AppError::Terminal(io),
        },
    )?;

    Ok(ExitCode::SUCCESS)
}
