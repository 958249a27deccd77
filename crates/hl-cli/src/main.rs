//! CLI frontend for Hidden London threat rolls and Push Yourself.

mod chat;
mod commands;
mod error;
mod locale;
mod render;
mod settings;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand};
use hl_mechanics::{EffectLevel, Position, PushAttribute};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use settings::DEFAULT_SETTINGS_FILE;

#[derive(Parser)]
#[command(
    name = "hl",
    about = "Hidden London: threat rolls and Push Yourself",
    version,
    propagate_version = true
)]
struct Cli {
    /// Settings file (default: hidden-london.json in the current directory)
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Where dice come from. Scripted faces win over a seed.
#[derive(Args)]
struct DiceArgs {
    /// RNG seed for a reproducible roll (overrides the settings seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Use these faces instead of rolling, in order (e.g. 6,4,1)
    #[arg(long, value_delimiter = ',')]
    faces: Vec<u32>,

    /// Print the result as JSON instead of a card
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a threat roll and post it to the chat log
    Threat {
        /// Dice pool, up to 10 (0 rolls two dice and keeps the worse)
        #[arg(
            short,
            long,
            default_value = "1",
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32).range(..=commands::MAX_POOL)
        )]
        dice: i32,

        /// Position: standard or desperate
        #[arg(short, long, default_value = "standard")]
        position: Position,

        /// Additional threats beyond the primary risk, up to 5
        #[arg(
            short,
            long,
            default_value = "0",
            allow_negative_numbers = true,
            value_parser = clap::value_parser!(i32).range(..=commands::MAX_THREATS)
        )]
        threats: i32,

        /// Effect level: limited, standard, great or extreme
        #[arg(short, long, default_value = "standard")]
        effect: EffectLevel,

        /// Situational modifier key (repeatable, see `hl modifiers`)
        #[arg(short, long = "modifier")]
        modifiers: Vec<String>,

        /// Free-text note shown on the card
        #[arg(short, long, default_value = "")]
        note: String,

        /// Name shown as the roller
        #[arg(long)]
        speaker: Option<String>,

        #[command(flatten)]
        dice_args: DiceArgs,
    },

    /// Push Yourself to resist a consequence
    Push {
        /// Attribute: insight, prowess or resolve
        #[arg(short, long)]
        attribute: PushAttribute,

        /// Dice pool to roll, up to 10
        #[arg(
            short,
            long,
            allow_negative_numbers = true,
            conflicts_with = "character",
            value_parser = clap::value_parser!(i32).range(..=commands::MAX_POOL)
        )]
        dice: Option<i32>,

        /// Character sheet JSON to read the pool from
        #[arg(short, long)]
        character: Option<PathBuf>,

        /// Threat roll message whose risk is being resisted
        #[arg(short, long, requires = "risk")]
        message: Option<String>,

        /// Risk index on that message (0 = primary)
        #[arg(short, long, requires = "message")]
        risk: Option<usize>,

        /// Name shown as the roller (default: the sheet's name)
        #[arg(long)]
        speaker: Option<String>,

        #[command(flatten)]
        dice_args: DiceArgs,
    },

    /// List the situational modifiers
    Modifiers,

    /// Show which attribute resists which consequence, and stress costs
    Hints {
        /// Only show the recommendation for this consequence
        consequence: Option<String>,
    },

    /// Show recent chat messages
    Log {
        /// How many messages to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show or change settings
    Config {
        /// Enable or disable threat rolls
        #[arg(long)]
        enable_threat_rolls: Option<bool>,

        /// Default RNG seed
        #[arg(long, conflicts_with = "clear_seed")]
        seed: Option<u64>,

        /// Forget the default seed
        #[arg(long)]
        clear_seed: bool,

        /// Chat log location
        #[arg(long)]
        chat_log: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_env("HL_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.config.as_path();
    let result = match cli.command {
        Commands::Threat {
            dice,
            position,
            threats,
            effect,
            modifiers,
            note,
            speaker,
            dice_args,
        } => {
            let request = commands::threat::ThreatRequest {
                dice,
                position,
                threats,
                effect,
                modifiers,
                note,
                speaker,
            };
            commands::threat::run(config, request, &commands::RollOptions::from(dice_args))
        }
        Commands::Push {
            attribute,
            dice,
            character,
            message,
            risk,
            speaker,
            dice_args,
        } => {
            let request = commands::push::PushRequest {
                attribute,
                dice,
                character,
                target: message.zip(risk),
                speaker,
            };
            commands::push::run(config, request, &commands::RollOptions::from(dice_args))
        }
        Commands::Modifiers => commands::modifiers::run(),
        Commands::Hints { consequence } => commands::hints::run(consequence.as_deref()),
        Commands::Log { limit } => commands::log::run(config, limit),
        Commands::Config {
            enable_threat_rolls,
            seed,
            clear_seed,
            chat_log,
        } => {
            let seed = if clear_seed { Some(None) } else { seed.map(Some) };
            commands::config::run(config, enable_threat_rolls, seed, chat_log)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

impl From<DiceArgs> for commands::RollOptions {
    fn from(args: DiceArgs) -> Self {
        Self {
            seed: args.seed,
            faces: args.faces,
            json: args.json,
        }
    }
}
