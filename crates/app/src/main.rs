use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::{parse_quiz_length, parse_request_timeout};
use services::{AppServices, GenerationConfig, LessonLoopService};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

/// German reading practice with generated articles, word lookups and quizzes.
///
/// The API key is read from `LERNPARTNER_API_KEY` (or `API_KEY`).
#[derive(Parser, Debug)]
#[command(name = "lernpartner", version, about)]
struct Args {
    /// Base URL of the generation API
    #[arg(long, env = "LERNPARTNER_BASE_URL")]
    base_url: Option<String>,

    /// Model used for articles, quizzes and translations
    #[arg(long, env = "LERNPARTNER_TEXT_MODEL")]
    text_model: Option<String>,

    /// Model used for article illustrations
    #[arg(long, env = "LERNPARTNER_IMAGE_MODEL")]
    image_model: Option<String>,

    /// Number of quiz questions to request (1-20)
    #[arg(long, env = "LERNPARTNER_QUIZ_LENGTH", value_parser = parse_quiz_length)]
    quiz_length: Option<usize>,

    /// Seconds before a generation request is abandoned (1-600)
    #[arg(long, env = "LERNPARTNER_REQUEST_TIMEOUT_SECS", value_parser = parse_request_timeout)]
    request_timeout: Option<Duration>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn apply(self, config: &mut GenerationConfig) {
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(text_model) = self.text_model {
            config.text_model = text_model;
        }
        if let Some(image_model) = self.image_model {
            config.image_model = image_model;
        }
        if let Some(quiz_length) = self.quiz_length {
            config.quiz_length = quiz_length;
        }
        if let Some(request_timeout) = self.request_timeout {
            config.request_timeout = request_timeout;
        }
    }
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn lesson_loop(&self) -> Arc<LessonLoopService> {
        self.services.lesson_loop()
    }

    fn quiz_length(&self) -> usize {
        self.services.quiz_length()
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG wins over --verbose.
    let filter = if args.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = match GenerationConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "configuration invalid");
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };
    args.apply(&mut config);
    tracing::info!(?config, "starting Lernpartner");

    let services = match AppServices::from_config(config) {
        Ok(services) => services,
        Err(err) => {
            tracing::error!(error = %err, "could not set up the HTTP client");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Lernpartner")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    ExitCode::SUCCESS
}
