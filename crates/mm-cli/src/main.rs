//! Terminal player for Mood Mystery stories.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "mm",
    about = "Mood Mystery — a dialogue-driven personality mystery",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story in the terminal
    Play {
        /// Story file (JSON array of scenes)
        story: PathBuf,

        /// Name of the player character
        #[arg(short, long, default_value = "MC")]
        name: String,

        /// Scene to start in (default: lowest scene id)
        #[arg(short, long)]
        entry: Option<u32>,

        /// Starting scores as IE,SN,FT,PJ
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        baseline: Option<Vec<i32>>,
    },

    /// Load a story and report dangling scene references
    Check {
        /// Story file (JSON array of scenes)
        story: PathBuf,
    },

    /// List every scene in a story
    List {
        /// Story file (JSON array of scenes)
        story: PathBuf,
    },

    /// Show one scene in full
    Show {
        /// Story file (JSON array of scenes)
        story: PathBuf,

        /// Scene id
        scene: u32,
    },

    /// Show the personality dashboard for a set of scores
    Mbti {
        /// Introversion (-) / Extraversion (+)
        #[arg(allow_negative_numbers = true)]
        ie: i32,

        /// Sensing (-) / Intuition (+)
        #[arg(allow_negative_numbers = true)]
        sn: i32,

        /// Feeling (-) / Thinking (+)
        #[arg(allow_negative_numbers = true)]
        ft: i32,

        /// Perceiving (-) / Judging (+)
        #[arg(allow_negative_numbers = true)]
        pj: i32,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            story,
            name,
            entry,
            baseline,
        } => commands::play::run(&story, &name, entry, baseline.as_deref()),
        Commands::Check { story } => commands::check::run(&story),
        Commands::List { story } => commands::list::run(&story),
        Commands::Show { story, scene } => commands::show::run(&story, scene),
        Commands::Mbti { ie, sn, ft, pj } => commands::mbti::run([ie, sn, ft, pj]),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
