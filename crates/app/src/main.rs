use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{DEFAULT_SECONDS_PER_QUESTION, HighScore, QuestionBank, QuizSettings};
use services::HighScoreService;
use services::bank::load_bank_file;
use storage::repository::Storage;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

#[derive(Parser, Debug)]
#[command(name = "quiz", about = "Timed multiple-choice quiz", version)]
struct Cli {
    /// SQLite database holding the high score.
    #[arg(
        long,
        global = true,
        env = "QUIZ_DB_URL",
        default_value = "sqlite://quiz.sqlite3"
    )]
    db: String,

    /// JSON question bank; the built-in bank is used when omitted.
    #[arg(long, global = true, env = "QUIZ_BANK")]
    bank: Option<PathBuf>,

    /// Seconds allowed per question.
    #[arg(
        long,
        global = true,
        env = "QUIZ_SECONDS",
        default_value_t = DEFAULT_SECONDS_PER_QUESTION
    )]
    seconds: u32,

    /// Shuffle the questions before the first attempt.
    #[arg(long, global = true, env = "QUIZ_SHUFFLE")]
    shuffle: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Open the quiz window (default).
    Ui,
    /// Print the stored high score.
    HighScore {
        /// Forget the stored high score instead.
        #[arg(long)]
        reset: bool,
    },
}

struct DesktopApp {
    bank: QuestionBank,
    settings: QuizSettings,
    high_scores: Arc<HighScoreService>,
    stored_high_score: HighScore,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> QuestionBank {
        self.bank.clone()
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }

    fn high_scores(&self) -> Arc<HighScoreService> {
        Arc::clone(&self.high_scores)
    }

    fn stored_high_score(&self) -> HighScore {
        self.stored_high_score
    }
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" {
        return trimmed.to_string();
    }

    let rest = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);
    let (path_str, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (rest, None),
    };

    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };

    match query {
        Some(query) => format!("sqlite://{}?{query}", absolute.display()),
        None => format!("sqlite://{}", absolute.display()),
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn load_bank(path: Option<&Path>) -> Result<QuestionBank, Box<dyn std::error::Error>> {
    let bank = match path {
        Some(path) => load_bank_file(path)?,
        None => QuestionBank::builtin(),
    };
    if bank.is_empty() {
        warn!("question bank is empty; the quiz will show a load error");
    }
    Ok(bank)
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.db.trim().is_empty() {
        return Err(ArgsError::InvalidDbUrl { raw: cli.db }.into());
    }
    let db_url = normalize_sqlite_url(&cli.db);

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&db_url)?;
    let storage = Storage::sqlite(&db_url).await?;
    let high_scores = Arc::new(HighScoreService::new(Arc::clone(&storage.kv)));

    match cli.command.unwrap_or(Command::Ui) {
        Command::HighScore { reset: true } => {
            high_scores.reset().await?;
            info!(db = %db_url, "high score reset");
            println!("high score reset");
            Ok(())
        }
        Command::HighScore { reset: false } => {
            let score = high_scores.load().await?;
            println!("{score}");
            Ok(())
        }
        Command::Ui => {
            let settings = QuizSettings::new(cli.seconds, cli.shuffle)?;
            let bank = load_bank(cli.bank.as_deref())?;
            let stored_high_score = high_scores.load().await?;
            info!(
                db = %db_url,
                questions = bank.len(),
                seconds = settings.seconds_per_question(),
                high_score = stored_high_score.value(),
                "starting quiz"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                bank,
                settings,
                high_scores,
                stored_high_score,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
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
    }
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
