use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lineq_cli::catalogue::{builtin_catalogue, parse_difficulty, parse_mode, problem_line};
use lineq_cli::config::{TutorConfig, CONFIG_FILE};
use lineq_cli::repl::Repl;
use lineq_cli::report::progress_report;
use lineq_progress::{JsonFileProgressStore, ProgressTracker};
use lineq_session::ProblemRepository;

#[derive(Parser)]
#[command(name = "lineq")]
#[command(about = "Practice solving linear equations one operation at a time")]
struct Cli {
    /// Config file (TOML)
    #[arg(long, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Learner whose progress is loaded and saved
    #[arg(long)]
    learner: Option<String>,

    /// Directory for progress files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive session (default)
    Repl,
    /// List the built-in problems
    List {
        /// guided, practice or challenge
        #[arg(long)]
        mode: Option<String>,
        /// easy, medium or hard
        #[arg(long)]
        difficulty: Option<String>,
    },
    /// Show saved progress
    Stats,
    /// Reset the config file to defaults
    ResetConfig,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = TutorConfig::load(&cli.config);
    if let Some(learner) = cli.learner {
        config.learner = learner;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    let catalogue = builtin_catalogue().context("built-in catalogue is invalid")?;
    let store = JsonFileProgressStore::new(config.resolved_data_dir());

    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => {
            let mut repl = Repl::new(catalogue, &config, store);
            repl.run()?;
        }
        Command::List { mode, difficulty } => {
            let mode = match mode.as_deref() {
                Some(word) => match parse_mode(word) {
                    Some(mode) => Some(mode),
                    None => bail!("unknown mode '{}'", word),
                },
                None => None,
            };
            let difficulty = match difficulty.as_deref() {
                Some(word) => match parse_difficulty(word) {
                    Some(difficulty) => Some(difficulty),
                    None => bail!("unknown difficulty '{}'", word),
                },
                None => None,
            };
            for problem in catalogue.matching(mode, difficulty) {
                println!("{}", problem_line(problem));
            }
        }
        Command::Stats => {
            let tracker = ProgressTracker::open(store, config.learner.clone());
            println!("{}", progress_report(tracker.key(), tracker.record()));
        }
        Command::ResetConfig => {
            TutorConfig::restore(&cli.config);
            println!("Wrote defaults to {}", cli.config.display());
        }
    }
    Ok(())
}
