use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{QuizService, SearchEngine};
use storage::open_source;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

/// Desktop multiple-choice quiz.
#[derive(Parser, Debug)]
#[command(name = "quiz", version)]
struct Args {
    /// Quiz document: a file path, `file://` URL or `http(s)://` URL.
    #[arg(long, env = "QUIZ_DATA", default_value = "quiz_data.json")]
    data: String,

    /// Engine used by "Search Online" (`google` or `chatgpt`).
    #[arg(long, env = "QUIZ_SEARCH_ENGINE", default_value_t = SearchEngine::Google)]
    search_engine: SearchEngine,
}

struct DesktopApp {
    quiz_service: Arc<QuizService>,
    search_engine: SearchEngine,
}

impl UiApp for DesktopApp {
    fn quiz_service(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz_service)
    }

    fn search_engine(&self) -> SearchEngine {
        self.search_engine
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging();

    let source = open_source(&args.data)?;
    info!(source = %source.describe(), engine = %args.search_engine, "starting quiz");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_service: Arc::new(QuizService::new(source)),
        search_engine: args.search_engine,
    });
    let context = build_app_context(&app);

    // Some tao setups default to an always-on-top window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // Binary glue: print once and exit.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
