use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bus_board::board::{Board, BoardConfig, BoardError, BoardRequest, TimeFormat};
use bus_board::domain::{DayTime, StopId};
use bus_board::gtfs;

/// Show upcoming bus arrivals at a stop.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the GTFS timetable files.
    #[arg(long, default_value = "gtfs")]
    gtfs_dir: PathBuf,

    /// Reference time of day the query is answered against (HH:MM).
    #[arg(long = "at", default_value = "12:00", value_parser = DayTime::parse_hhmm)]
    reference_time: DayTime,

    /// How far ahead to look for arrivals, in minutes.
    #[arg(long, default_value_t = 120)]
    window_mins: i64,

    /// The stop to show arrivals for.
    stop_id: String,

    /// Maximum number of arrivals to show per route.
    count: usize,

    /// How to describe each arrival: "relative" (minutes until
    /// arrival) or "absolute" (clock time).
    #[arg(value_parser = TimeFormat::parse)]
    format: TimeFormat,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let stop = StopId::new(args.stop_id).context("invalid stop ID")?;

    let timetable = gtfs::load_dir(&args.gtfs_dir).with_context(|| {
        format!(
            "failed to load GTFS timetable from {}",
            args.gtfs_dir.display()
        )
    })?;

    let config = BoardConfig::new(args.reference_time, args.window_mins);
    let request = BoardRequest::new(stop, args.count, args.format);

    match Board::build(&timetable, &request, &config) {
        Ok(board) => {
            println!("{} stop (ID {})", board.stop.name, board.stop.id);

            if !board.has_upcoming() {
                println!("No upcoming buses found.");
            } else {
                for line in &board.lines {
                    println!("{line}");
                }
            }
        }
        Err(BoardError::UnknownStop(_)) => {
            println!("No stop found for the specified stop ID.");
        }
    }

    Ok(())
}
