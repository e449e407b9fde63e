//! `slots` CLI — generate and inspect availability slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Generate a week of slots (rules and bookings from files)
//! slots generate -r rules.json -b bookings.json --from 2024-07-01 --to 2024-07-07
//!
//! # Rules via stdin, no existing bookings
//! cat rules.json | slots generate --from 2024-07-01 --to 2024-07-07
//!
//! # Response envelope with resource metadata echoed
//! slots quote -r rules.json --resource-id studio-7 --from 2024-07-01 --to 2024-07-07
//!
//! # Per-host and per-day slot counts
//! slots stats -r rules.json -b bookings.json --from 2024-07-01 --to 2024-07-31
//! ```

use std::collections::BTreeMap;
use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use slot_engine::{generate, quote, AvailabilityRules, ExistingBooking, TimeSlot};

#[derive(Parser)]
#[command(name = "slots", version, about = "Availability-slot generation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate bookable slots as a JSON array
    Generate {
        /// Rules JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        rules: Option<String>,
        /// Existing bookings JSON file (assumed empty if omitted)
        #[arg(short, long)]
        bookings: Option<String>,
        /// First date of the range, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Last date of the range (inclusive), YYYY-MM-DD
        #[arg(long)]
        to: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Generate slots wrapped in the response envelope with resource metadata
    Quote {
        /// Opaque resource identifier echoed into the envelope
        #[arg(long)]
        resource_id: String,
        /// Rules JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        rules: Option<String>,
        /// Existing bookings JSON file (assumed empty if omitted)
        #[arg(short, long)]
        bookings: Option<String>,
        /// First date of the range, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Last date of the range (inclusive), YYYY-MM-DD
        #[arg(long)]
        to: String,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show slot counts per host and per day
    Stats {
        /// Rules JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        rules: Option<String>,
        /// Existing bookings JSON file (assumed empty if omitted)
        #[arg(short, long)]
        bookings: Option<String>,
        /// First date of the range, YYYY-MM-DD
        #[arg(long)]
        from: String,
        /// Last date of the range (inclusive), YYYY-MM-DD
        #[arg(long)]
        to: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            rules,
            bookings,
            from,
            to,
            output,
        } => {
            let rules = load_rules(rules.as_deref())?;
            let bookings = load_bookings(bookings.as_deref())?;
            let slots = generate(&rules, &bookings, parse_date(&from)?, parse_date(&to)?)?;
            let json = serde_json::to_string_pretty(&slots)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Quote {
            resource_id,
            rules,
            bookings,
            from,
            to,
            output,
        } => {
            let rules = load_rules(rules.as_deref())?;
            let bookings = load_bookings(bookings.as_deref())?;
            let quote = quote(
                &resource_id,
                &rules,
                &bookings,
                parse_date(&from)?,
                parse_date(&to)?,
            )?;
            let json = serde_json::to_string_pretty(&quote)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Stats {
            rules,
            bookings,
            from,
            to,
        } => {
            let rules = load_rules(rules.as_deref())?;
            let bookings = load_bookings(bookings.as_deref())?;
            let slots = generate(&rules, &bookings, parse_date(&from)?, parse_date(&to)?)?;
            print_stats(&from, &to, &slots);
        }
    }

    Ok(())
}

/// Per-host and per-day counts over the generated slots.
fn print_stats(from: &str, to: &str, slots: &[TimeSlot]) {
    println!("Range:  {}..{}", from, to);
    println!("Slots:  {}", slots.len());

    let mut by_host: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_day: BTreeMap<String, usize> = BTreeMap::new();
    for slot in slots {
        *by_host.entry(slot.host.as_str()).or_insert(0) += 1;
        *by_day
            .entry(slot.start.date_naive().format("%Y-%m-%d").to_string())
            .or_insert(0) += 1;
    }

    println!("Hosts:");
    for (host, count) in by_host {
        println!("  {}  {}", host, count);
    }
    println!("Days:");
    for (day, count) in by_day {
        println!("  {}  {}", day, count);
    }
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD", s))
}

fn load_rules(path: Option<&str>) -> Result<AvailabilityRules> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Invalid rules JSON")
}

fn load_bookings(path: Option<&str>) -> Result<Vec<ExistingBooking>> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path))?;
            serde_json::from_str(&json).context("Invalid bookings JSON")
        }
        None => Ok(Vec::new()),
    }
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

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
