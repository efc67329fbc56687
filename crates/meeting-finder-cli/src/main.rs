//! `meetfind` — find free meeting slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # All slots that work (stdin → stdout)
//! cat day.json | meetfind find
//!
//! # Human-readable output, reporting whether optional attendees were dropped
//! meetfind find -i day.json --format text --explain
//!
//! # Only the earliest slot
//! meetfind first -i day.json
//!
//! # Why does 09:00-10:00 not work?
//! meetfind conflicts -i day.json --start 540 --end 600
//! ```
//!
//! The input document looks like:
//!
//! ```json
//! {
//!   "events": [{"title": "Standup", "start": 540, "end": 570, "attendees": ["alice"]}],
//!   "request": {"mandatory": ["alice"], "optional": ["bob"], "duration": 30}
//! }
//! ```
//!
//! Times are minutes from midnight. Logging goes to stderr and is controlled by
//! `RUST_LOG` (or `-v`).

mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use input::{CalendarInput, SlotOutput};
use meeting_finder::{find_conflicts, first_available, query_detailed, Phase, TimeRange};
use std::fs;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "meetfind", version, about = "Find free meeting slots in a day")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log search decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every slot that fits the request
    Find {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Print which attendee set the slots were computed for to stderr
        #[arg(long)]
        explain: bool,
    },
    /// Show the earliest slot that fits the request
    First {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// List the events that collide with a proposed slot
    Conflicts {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Proposed start, in minutes from midnight
        #[arg(long)]
        start: u32,
        /// Proposed end, in minutes from midnight
        #[arg(long)]
        end: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Find {
            input,
            output,
            format,
            explain,
        } => {
            let (events, request) = CalendarInput::load(input.as_deref())?;
            let outcome = query_detailed(&events, &request);
            if explain {
                eprintln!("{}", describe_phase(outcome.phase));
            }
            write_slots(output.as_deref(), &outcome.slots, format)?;
        }
        Commands::First { input, format } => {
            let (events, request) = CalendarInput::load(input.as_deref())?;
            let slot = first_available(&events, &request);
            let rendered = match (slot, format) {
                (Some(slot), Format::Text) => format!("{}\n", slot),
                (None, Format::Text) => "none\n".to_string(),
                (slot, Format::Json) => {
                    let dto = slot.as_ref().map(SlotOutput::from);
                    format!("{}\n", serde_json::to_string_pretty(&dto)?)
                }
            };
            print!("{}", rendered);
        }
        Commands::Conflicts { input, start, end } => {
            let candidate = TimeRange::try_from_start_end(start, end, false)
                .context("Invalid proposed slot")?;
            let (events, request) = CalendarInput::load(input.as_deref())?;
            let conflicts = find_conflicts(&events, &request, candidate);
            println!("{}", serde_json::to_string_pretty(&conflicts)?);
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "meeting_finder=debug,meetfind=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn describe_phase(phase: Phase) -> &'static str {
    match phase {
        Phase::AllAttendees => "phase: all attendees",
        Phase::MandatoryOnly => "phase: mandatory attendees only (optional attendees dropped)",
    }
}

fn render_slots(slots: &[TimeRange], format: Format) -> Result<String> {
    match format {
        Format::Json => {
            let dtos: Vec<SlotOutput> = slots.iter().map(SlotOutput::from).collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&dtos)?))
        }
        Format::Text => Ok(slots.iter().map(|s| format!("{}\n", s)).collect()),
    }
}

/// Write rendered slots to `path`, or to stdout when no path is given.
fn write_slots(path: Option<&str>, slots: &[TimeRange], format: Format) -> Result<()> {
    let rendered = render_slots(slots, format)?;
    match path {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write slots to {}", path))?;
            tracing::debug!(slots = slots.len(), path, "wrote slots");
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
