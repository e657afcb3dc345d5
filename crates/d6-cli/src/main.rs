//! Table-side CLI for the Fallcrest D6 system.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "d6",
    about = "Fallcrest D6: dice rolls and character points",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a dice notation such as 3D+1
    Roll {
        /// Dice notation (malformed input rolls 1D)
        notation: String,

        /// Target value the total must meet
        #[arg(short, long)]
        target: Option<u32>,

        /// RNG seed for a reproducible roll
        #[arg(short, long)]
        seed: Option<u64>,

        /// Faces rolled at the table, e.g. "6,3,2"
        #[arg(short, long, conflicts_with = "seed")]
        faces: Option<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the totals a notation can produce
    Range {
        /// Dice notation
        notation: String,
    },

    /// Print the canonical form of a notation or a step count
    Format {
        /// Notation text (e.g. 1D+4) or a whole number of steps
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// Blip cost of raising a value by some steps
    Cost {
        /// Number of steps
        #[arg(allow_negative_numbers = true)]
        steps: i64,
    },

    /// Compose the notation a skill rolls with
    Skill {
        /// Notation of the governing attribute
        attribute: String,

        /// Bonus dice bought on the skill
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        bonus_dice: i32,

        /// Bonus steps and specialization Blibs
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        blips: i32,

        /// The skill is weakened
        #[arg(long)]
        weakened: bool,

        /// Something has been invested in the skill
        #[arg(long)]
        learned: bool,
    },

    /// Evaluate the point budget of stored characters
    Budget {
        /// JSON file with one character or a list of characters
        file: PathBuf,

        /// JSON file with creation settings (defaults if omitted)
        #[arg(short, long)]
        policy: Option<PathBuf>,

        /// Only show the character with this id
        #[arg(short, long)]
        character: Option<String>,

        /// Print the budgets as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            notation,
            target,
            seed,
            faces,
            json,
        } => commands::roll::run(&notation, target, seed, faces.as_deref(), json),
        Commands::Range { notation } => commands::range::run(&notation),
        Commands::Format { value } => commands::format::run(&value),
        Commands::Cost { steps } => commands::cost::run(steps),
        Commands::Skill {
            attribute,
            bonus_dice,
            blips,
            weakened,
            learned,
        } => commands::skill::run(&attribute, bonus_dice, blips, weakened, learned),
        Commands::Budget {
            file,
            policy,
            character,
            json,
        } => commands::budget::run(&file, policy.as_deref(), character.as_deref(), json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
