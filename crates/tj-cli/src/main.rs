//! CLI frontend for the Tianji card oracle.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::Globals;

#[derive(Parser)]
#[command(
    name = "tianji",
    about = "Tianji: draw and read the 72-card heavenly oracle",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible draws
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON file the draw history is kept in (default: in memory only)
    #[arg(long, global = true)]
    history: Option<PathBuf>,

    /// Card catalog JSON to use instead of the built-in deck
    #[arg(long, global = true)]
    deck: Option<PathBuf>,

    /// Profile catalog JSON to use instead of the built-in profiles
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw and read a single card
    Draw {
        /// Restrict the draw to one category (sky, earth, human, variable)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Draw one card per category and read the fortune
    Fortune,

    /// Draw cards for a life situation and read them
    Situation {
        /// Profile id (e.g. work, love, health)
        profile: String,

        /// Number of cards to draw
        #[arg(short, long)]
        count: Option<usize>,

        /// Relevance scoring: keyword, attribute-fit or blended
        #[arg(long)]
        scoring: Option<String>,
    },

    /// List the cards in the deck
    Deck {
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List the situation profiles
    Profiles,

    /// Show recent draws and the most drawn cards
    History {
        /// Number of recent draws to show
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Also show the N most drawn cards
        #[arg(short, long)]
        top: Option<usize>,

        /// Erase the history
        #[arg(long)]
        clear: bool,
    },

    /// Run batch draws and report how cards and fortune levels distribute
    Stats {
        /// Draws per mode
        #[arg(short, long, default_value = "1000")]
        draws: usize,

        /// Score every possible fortune hand instead of sampling
        #[arg(long)]
        exhaustive: bool,

        /// Also report situational draws for this profile
        #[arg(short, long)]
        profile: Option<String>,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let globals = Globals {
        seed: cli.seed,
        history: cli.history,
        deck: cli.deck,
        profiles: cli.profiles,
        json: cli.json,
    };

    let result = match cli.command {
        Commands::Draw { category } => commands::draw::run(&globals, category.as_deref()),
        Commands::Fortune => commands::fortune::run(&globals),
        Commands::Situation {
            profile,
            count,
            scoring,
        } => commands::situation::run(&globals, &profile, count, scoring.as_deref()),
        Commands::Deck { category } => commands::deck::run(&globals, category.as_deref()),
        Commands::Profiles => commands::profiles::run(&globals),
        Commands::History { limit, top, clear } => {
            commands::history::run(&globals, limit, top, clear)
        }
        Commands::Stats {
            draws,
            exhaustive,
            profile,
        } => commands::stats::run(&globals, draws, exhaustive, profile.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
