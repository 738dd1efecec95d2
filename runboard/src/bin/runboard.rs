use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use runboard::{render::render_dashboard, Dashboard};
use runboard_core::{
    mock::{MockConfig, MockSimulator},
    RunFilter, Settings, StatusFilter,
};
use runboard_wandb::WandbClient;
use std::{path::PathBuf, thread};

/// Shows training runs tracked on Weights & Biases
#[derive(Clone, Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Settings file. Defaults to `~/.runboard/settings.yaml`.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Mock simulation constants (YAML).
    #[arg(long)]
    mock_config: Option<PathBuf>,

    /// Shows synthesized runs regardless of the settings.
    #[arg(long, default_value_t = false)]
    demo: bool,

    /// Refreshes once and exits.
    #[arg(long, default_value_t = false)]
    once: bool,

    /// Number of refreshes before exiting. Runs until interrupted if not given.
    #[arg(long)]
    iterations: Option<usize>,

    /// Shows only runs in this state, e.g. `running`. `all` shows every run.
    #[arg(long, default_value = "all")]
    status: String,

    /// Shows only runs whose name, display name or sweep contains this text.
    #[arg(long, default_value = "")]
    query: String,

    /// Seed of the mock simulation.
    #[arg(long)]
    seed: Option<u64>,
}

fn load_settings(args: &Args) -> Result<Settings> {
    let path = match &args.settings {
        Some(path) => path.clone(),
        None => Settings::default_path().context("Couldn't find home directory")?,
    };
    info!("Load settings from {:?}", path);
    let settings = Settings::load_or_default(&path)?;
    Ok(if args.demo {
        settings.demo_mode(true)
    } else {
        settings
    })
}

fn load_mock_config(args: &Args) -> Result<MockConfig> {
    let config = match &args.mock_config {
        Some(path) => MockConfig::load(path)
            .with_context(|| format!("Failed to load mock config {:?}", path))?,
        None => MockConfig::default(),
    };
    Ok(match args.seed {
        Some(seed) => config.seed(Some(seed)),
        None => config,
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = load_settings(&args)?;
    let simulator = MockSimulator::new(load_mock_config(&args)?);
    let filter = RunFilter::default()
        .status(args.status.parse::<StatusFilter>()?)
        .query(args.query.clone());
    let interval = settings.poll_interval();
    let iterations = if args.once { Some(1) } else { args.iterations };

    let mut dashboard = Dashboard::new(settings, WandbClient::new(), simulator);
    let mut n = 0;
    loop {
        dashboard.refresh();
        println!("{}", render_dashboard(&dashboard, &filter));
        n += 1;

        if iterations.map_or(false, |max| n >= max) {
            break;
        }
        thread::sleep(interval);
    }

    Ok(())
}
