//! CLI Adapter.

mod collector;

pub use collector::DialoguerCollector;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::api::{self, PromptPreviewOptions, SessionOptions};
use crate::domain::AppError;
use crate::domain::profile::DEFAULT_AGE;

#[derive(Parser)]
#[command(name = "coachbot")]
#[command(version)]
#[command(
    about = "Personal AI sports coach for youth athletes",
    long_about = None
)]
struct Cli {
    /// Settings file (defaults to ./coachbot.toml when present)
    #[arg(long, global = true, env = "COACHBOT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive coaching session (default)
    #[clap(visible_alias = "s")]
    Session(SessionArgs),
    /// Print the compiled prompt for a feature without calling the API
    #[clap(visible_alias = "p")]
    Prompt(PromptArgs),
    /// List the coaching features and the fields each accepts
    #[clap(visible_alias = "f")]
    Features,
}

#[derive(Args, Default)]
struct SessionArgs {
    /// Creativity level from 0.1 (conservative) to 1.0 (creative)
    #[arg(short, long)]
    temperature: Option<f32>,
    /// Directory where downloaded plans are written
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[derive(Args)]
struct PromptArgs {
    /// Feature code (see `coachbot features`)
    #[arg(long)]
    feature: String,
    /// Sport, e.g. "Football/Soccer" or "Cricket"
    #[arg(long)]
    sport: String,
    /// Athlete age (10-25)
    #[arg(long, default_value_t = DEFAULT_AGE)]
    age: u8,
    /// Male, Female or "Prefer not to say"
    #[arg(long, default_value = "Prefer not to say")]
    gender: String,
    /// Position from the sport's position list
    #[arg(long)]
    position: String,
    /// Beginner, Intermediate, Advanced or Elite
    #[arg(long, default_value = "Beginner")]
    experience: String,
    /// Feature field as key=value (repeatable)
    #[arg(long = "field", value_name = "KEY=VALUE")]
    fields: Vec<String>,
    /// Primary goal text
    #[arg(long, default_value = "")]
    goal: String,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        None => run_session(cli.config, SessionArgs::default()),
        Some(Commands::Session(args)) => run_session(cli.config, args),
        Some(Commands::Prompt(args)) => run_prompt(args),
        Some(Commands::Features) => {
            run_features();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_session(config: Option<PathBuf>, args: SessionArgs) -> Result<(), AppError> {
    api::session(SessionOptions {
        config,
        temperature: args.temperature,
        output_dir: args.output_dir,
    })
}

fn run_prompt(args: PromptArgs) -> Result<(), AppError> {
    let prompt = api::prompt_preview(&PromptPreviewOptions {
        feature: args.feature,
        sport: args.sport,
        age: args.age,
        gender: args.gender,
        position: args.position,
        experience: args.experience,
        fields: args.fields,
        goal: args.goal,
    })?;
    println!("{}", prompt);
    Ok(())
}

fn run_features() {
    for summary in api::features() {
        println!("{:<18} {}", summary.code, summary.label);
        if !summary.field_keys.is_empty() {
            println!("{:<18} fields: {}", "", summary.field_keys.join(", "));
        }
    }
}
