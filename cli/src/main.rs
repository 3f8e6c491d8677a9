//! Costar CLI: degrees of separation from the command line
//!
//! Loads the co-star graph once, then answers a single subcommand or runs the
//! interactive game.

mod render;
mod shell;

use anyhow::Context;
use clap::{Parser, Subcommand};
use costar::{DataSources, GameConfig, RankBy, Universe};
use render::OutputFormat;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "costar", version, about = "Degrees of separation over co-star graphs")]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true, env = "COSTAR_CONFIG")]
    config: Option<PathBuf>,

    /// Directory holding actors.txt, movies.txt and movie-actors.txt
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Center of the universe
    #[arg(long, global = true)]
    center: Option<String>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum Metric {
    Separation,
    Degree,
}

impl From<Metric> for RankBy {
    fn from(metric: Metric) -> Self {
        match metric {
            Metric::Separation => RankBy::Separation,
            Metric::Degree => RankBy::Degree,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show how the center connects to everyone else
    Stats,
    /// Shortest path from a person to the center
    Path {
        /// Person to start from
        name: String,
    },
    /// People with no path to the center
    Missing,
    /// Suggest better centers among those still connected to the current one
    Rank {
        #[arg(long, value_enum, default_value = "separation")]
        by: Metric,

        /// Number of suggestions (defaults to the configured top_k)
        #[arg(short)]
        k: Option<usize>,
    },
    /// Start the interactive game
    Shell,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(cli: &Cli) -> anyhow::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_yaml_file(path)?,
        None => GameConfig::default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.sources = DataSources::in_dir(dir);
    }
    if let Some(center) = &cli.center {
        config.center = center.clone();
    }
    config.validate()?;
    Ok(config)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    let universe = Universe::load(&config.sources).context("loading the co-star graph")?;
    let center = config.center.as_str();

    match cli.command {
        Commands::Stats => {
            render::summary(&universe.summary(center)?, cli.format)?;
        }
        Commands::Path { name } => {
            if !universe.store().has_vertex(&name) {
                anyhow::bail!("{:?} is not in the graph", name);
            }
            let tree = universe.build_tree(center)?;
            render::path(&tree, &name, cli.format)?;
        }
        Commands::Missing => {
            let tree = universe.build_tree(center)?;
            render::missing(&tree, cli.format)?;
        }
        Commands::Rank { by, k } => {
            let by = RankBy::from(by);
            let ranked = universe.rank(by, k.unwrap_or(config.top_k), center)?;
            render::ranking(by, center, &ranked, cli.format)?;
        }
        Commands::Shell => {
            let stdin = std::io::stdin();
            shell::Game::new(&universe, config.center.clone(), config.top_k, cli.format)
                .run(stdin.lock())?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
