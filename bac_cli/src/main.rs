use bac_core::*;
use chrono::{DateTime, Local, Utc};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Widest timeline bar, reached at a BAC of 0.20
const MAX_BAR_WIDTH: f64 = 80.0;

#[derive(Parser)]
#[command(name = "bacsim")]
#[command(about = "Blood alcohol content simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show current BAC, peak and recovery times for a scenario
    Status {
        /// Scenario file (JSON drink/food/profile events)
        #[arg(long)]
        scenario: PathBuf,

        /// Evaluate as if now were this RFC 3339 instant
        #[arg(long)]
        at: Option<DateTime<Utc>>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the sampled BAC curve
    Timeline {
        /// Scenario file (JSON drink/food/profile events)
        #[arg(long)]
        scenario: PathBuf,

        /// Evaluate as if now were this RFC 3339 instant
        #[arg(long)]
        at: Option<DateTime<Utc>>,

        /// Hours to project (defaults to config timeline.hours)
        #[arg(long)]
        hours: Option<u32>,

        /// Start at session start instead of now
        #[arg(long)]
        from_start: bool,

        /// Write CSV to stdout
        #[arg(long)]
        csv: bool,
    },

    /// Print the impairment level table
    Levels,
}

fn main() -> Result<()> {
    // Initialize logging
    bac_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Status { scenario, at, json } => {
            let session = load_session(&config, &scenario, at)?;
            cmd_status(&session, json)
        }
        Commands::Timeline {
            scenario,
            at,
            hours,
            from_start,
            csv,
        } => {
            let session = load_session(&config, &scenario, at)?;
            let hours = hours.unwrap_or(config.timeline.hours);
            cmd_timeline(&session, hours, from_start, csv)
        }
        Commands::Levels => {
            cmd_levels();
            Ok(())
        }
    }
}

fn load_session(config: &Config, scenario: &Path, at: Option<DateTime<Utc>>) -> Result<Session> {
    let events = ScenarioEvents::load(scenario)?;

    let clock: Arc<dyn Clock> = match at {
        Some(instant) => Arc::new(FixedClock(instant)),
        None => Arc::new(SystemClock),
    };

    let mut session = Session::with_clock(config.default_profile(), clock);
    let applied = session.apply_events(&events);
    session.profile().validate()?;
    tracing::debug!(
        "Scenario applied: {} drinks, {} foods, session start {}",
        applied.drink_ids.len(),
        applied.food_ids.len(),
        session.start_time()
    );
    Ok(session)
}

fn cmd_status(session: &Session, json: bool) -> Result<()> {
    let result = session.bac_result();
    let peak = session.peak_bac();
    let time_to_sober = session.time_to_sober();
    let time_to_limit = session.time_to_legal_limit();
    let legal_at = session.time_when_legal();

    if json {
        let report = serde_json::json!({
            "bac": result.bac,
            "timestamp": result.timestamp,
            "impairmentLevel": result.impairment_level,
            "peak": peak,
            "minutesToSober": time_to_sober,
            "minutesToLegalLimit": time_to_limit,
            "legalAt": legal_at,
            "drinks": session.drinks().len(),
            "foods": session.foods().len(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let level = result.impairment_level;

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  BAC {}", format_bac(result.bac));
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {} ({})", level.label, level.description);
    println!("  Fit to drive: {}", level.fit_to_drive);
    println!("  Legal status: {}", level.legal_status);
    println!();
    println!("  Drinks logged: {}", session.drinks().len());
    for drink in session.drinks() {
        println!(
            "    {}  {} ({} oz @ {}%, {} std)",
            clock_time(drink.time),
            tables::drink_display_name(drink.kind),
            drink.size_oz,
            drink.alcohol_percent,
            standard_drinks(drink.size_oz, drink.alcohol_percent)
        );
    }
    for food in session.foods() {
        println!(
            "    {}  {}",
            clock_time(food.time),
            tables::food_display_name(food.kind)
        );
    }
    println!();

    if session.has_drinks() {
        println!(
            "  Peak:             {} at {}",
            format_bac_decimal(peak.bac),
            clock_time(peak.time)
        );
    }
    println!("  Sober in:         {}", format_duration(time_to_sober));
    println!("  Legal limit in:   {}", format_duration(time_to_limit));
    match legal_at {
        Some(at) => println!("  Legal to drive:   {}", clock_time(at)),
        None if result.bac < tables::LEGAL_LIMIT => println!("  Legal to drive:   now"),
        None => println!("  Legal to drive:   not within 24h"),
    }
    println!();

    Ok(())
}

fn cmd_timeline(session: &Session, hours: u32, from_start: bool, csv: bool) -> Result<()> {
    let points = session.timeline(hours, !from_start);

    if csv {
        write_timeline_csv(&points, io::stdout().lock())?;
        return Ok(());
    }

    for point in &points {
        let width = if point.bac.is_finite() {
            (point.bac * 400.0).round().clamp(0.0, MAX_BAR_WIDTH) as usize
        } else {
            0
        };
        let bar = "█".repeat(width);
        println!(
            "  {}  {}  {}",
            clock_time(point.time),
            format_bac_decimal(point.bac),
            bar
        );
    }

    Ok(())
}

fn cmd_levels() {
    for level in impairment_levels().iter().rev() {
        println!(
            "  ≥ {:.2}  {:<24} {:<8} {}",
            level.threshold, level.label, level.fit_to_drive, level.legal_status
        );
    }
}

fn clock_time(time: DateTime<Utc>) -> String {
    time.with_timezone(&Local).format("%H:%M").to_string()
}
