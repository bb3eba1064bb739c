//! `slot-engine` CLI — list bookable slots and check booking conflicts.
//!
//! ## Usage
//!
//! ```sh
//! # Every slot on a date, marked free or busy against existing records
//! slot-engine slots --date 2026-03-16 --config hours.json --records records.json
//!
//! # Only the free slots, 15 minutes long
//! slot-engine slots --date 2026-03-16 --config hours.json --duration 15 --free-only
//!
//! # Conflict report for a proposed range (records read from stdin)
//! cat records.json | slot-engine check --start 10:30 --end 11:00
//!
//! # Validate a two-service booking; exits non-zero if the slot is taken
//! slot-engine book --start 10:00 --services 30,15 --records records.json
//! ```
//!
//! Configuration can also come from `SLOTS__*` environment variables or a `.env`
//! file. Logs go to stderr and are controlled by `RUST_LOG`.

mod settings;

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use slot_engine::{ExistingSlotRecord, Slot, TimeOfDay};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(
    name = "slot-engine",
    version,
    about = "Appointment slot listing and booking conflict checks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the day's slots with their availability
    Slots {
        /// Calendar date (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,
        /// Config file with default slot length and working hours
        #[arg(short, long)]
        config: Option<String>,
        /// Slot length in minutes (overrides the configured default)
        #[arg(long)]
        duration: Option<u32>,
        /// JSON file of existing slot records for the date
        #[arg(short, long)]
        records: Option<String>,
        /// Print only free slots
        #[arg(long)]
        free_only: bool,
    },
    /// Report which occupied records a proposed range overlaps
    Check {
        /// Start time (HH:MM)
        #[arg(long)]
        start: TimeOfDay,
        /// End time (HH:MM)
        #[arg(long)]
        end: TimeOfDay,
        /// JSON file of existing slot records (reads from stdin if omitted)
        #[arg(short, long)]
        records: Option<String>,
    },
    /// Validate a booking before it is committed
    Book {
        /// Start time (HH:MM)
        #[arg(long)]
        start: TimeOfDay,
        /// End time (HH:MM)
        #[arg(long, conflicts_with = "services", required_unless_present = "services")]
        end: Option<TimeOfDay>,
        /// Comma-separated service durations in minutes; the booking spans their sum
        #[arg(long, value_delimiter = ',')]
        services: Option<Vec<u32>>,
        /// JSON file of existing slot records (reads from stdin if omitted)
        #[arg(short, long)]
        records: Option<String>,
    },
}

#[derive(Serialize)]
struct CheckReport<'a> {
    start: TimeOfDay,
    end: TimeOfDay,
    conflict: bool,
    conflicting: Vec<&'a ExistingSlotRecord>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Slots {
            date,
            config,
            duration,
            records,
            free_only,
        } => {
            let config = settings::load(config.as_deref())?;
            let slot_minutes = duration.unwrap_or(config.default_slot_minutes);
            if slot_minutes == 0 {
                anyhow::bail!("--duration must be a positive number of minutes");
            }
            let records = match records {
                Some(path) => parse_records(&read_input(Some(&path))?)?,
                None => Vec::new(),
            };
            let window = config.window_for(date);

            let json = if free_only {
                let free = slot_engine::free_slots(date, window, slot_minutes, &records);
                serde_json::to_string_pretty(&free)?
            } else {
                let statuses =
                    slot_engine::list_availability(date, window, slot_minutes, &records);
                serde_json::to_string_pretty(&statuses)?
            };
            println!("{}", json);
        }
        Commands::Check {
            start,
            end,
            records,
        } => {
            let proposed = Slot::new(start, end)?;
            let records = parse_records(&read_input(records.as_deref())?)?;
            let conflicting =
                slot_engine::find_conflicting(proposed.start, proposed.end, &records);
            let report = CheckReport {
                start,
                end,
                conflict: !conflicting.is_empty(),
                conflicting,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Book {
            start,
            end,
            services,
            records,
        } => {
            let slot = match (end, services) {
                (Some(end), _) => Slot::new(start, end)?,
                (None, Some(services)) => Slot::for_services(start, &services)
                    .context("Services do not fit in the day")?,
                (None, None) => anyhow::bail!("Either --end or --services is required"),
            };
            let records = parse_records(&read_input(records.as_deref())?)?;
            slot_engine::ensure_bookable(slot.start, slot.end, &records)?;
            println!("{}", serde_json::to_string_pretty(&slot)?);
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays parseable; `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .try_init();
}

fn parse_records(json: &str) -> Result<Vec<ExistingSlotRecord>> {
    ExistingSlotRecord::parse_list(json).context("Failed to parse slot records")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
