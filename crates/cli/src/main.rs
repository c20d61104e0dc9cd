use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use seethio_core::{
    compose_itinerary_text, ExhaustionPolicy, InterestCategory, ItineraryRequest, PlannerConfig,
    DEFAULT_MAX_TRIP_DAYS,
};
use seethio_observability::{init_tracing, AppMetrics};
use seethio_service::ItineraryService;

#[derive(Debug, Parser)]
#[command(name = "seethio")]
#[command(about = "Seethio trip itinerary planner")]
struct Cli {
    /// JSON catalog to plan from instead of the builtin one.
    #[arg(long, env = "SEETHIO_CATALOG_PATH")]
    catalog: Option<PathBuf>,

    #[arg(long, env = "SEETHIO_EXHAUSTION_POLICY", default_value = "recycle")]
    exhaustion: String,

    #[arg(
        long,
        env = "SEETHIO_MAX_TRIP_DAYS",
        default_value_t = DEFAULT_MAX_TRIP_DAYS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    max_trip_days: u32,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Plan {
        #[arg(long)]
        location: String,
        #[arg(long, default_value_t = 3, allow_negative_numbers = true)]
        days: i64,
        #[arg(long)]
        interest: String,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    Destinations,
    Interests,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    init_tracing("seethio_cli");
    let cli = Cli::parse();

    let exhaustion = ExhaustionPolicy::parse(&cli.exhaustion)
        .with_context(|| format!("invalid --exhaustion value '{}'", cli.exhaustion))?;
    let config = PlannerConfig {
        exhaustion,
        max_trip_days: cli.max_trip_days,
    };
    let service = ItineraryService::load(cli.catalog.as_deref(), config, AppMetrics::shared())?;

    match cli.command {
        Command::Plan {
            location,
            days,
            interest,
            seed,
            format,
        } => {
            let itinerary = service
                .generate(&ItineraryRequest::new(location, days, interest), seed)
                .context("could not plan this trip")?;

            match format {
                OutputFormat::Text => print!("{}", compose_itinerary_text(&itinerary)),
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&itinerary)?)
                }
            }
        }
        Command::Destinations => {
            println!(
                "{}",
                serde_json::to_string_pretty(&service.catalog_summary().destinations)?
            );
        }
        Command::Interests => {
            for interest in InterestCategory::ALL {
                println!("{interest}");
            }
        }
    }

    Ok(())
}
