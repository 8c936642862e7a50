use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::ticket::TicketSet;

mod analysis;
mod report;
mod ticket;
mod time;

/// Analyze a batch of flight tickets: minimum flight time per carrier and
/// price statistics over one origin/destination route.
#[derive(Parser)]
struct Args {
    /// Path to the JSON ticket file
    #[arg(value_name = "FILE")]
    tickets: PathBuf,

    /// Origin key to match, in the key set the file schema uses
    /// (IATA code or display name)
    #[arg(short, long, value_name = "KEY", default_value = "VVO")]
    origin: String,

    /// Destination key to match
    #[arg(short, long, value_name = "KEY", default_value = "TLV")]
    destination: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let set = match TicketSet::load_from_file(&args.tickets) {
        Ok(set) => set,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    if set.tickets.is_empty() {
        println!("No tickets found.");
        return ExitCode::SUCCESS;
    }

    let matching = analysis::filter_route(&set.tickets, &args.origin, &args.destination);
    if matching.is_empty() {
        println!(
            "No flights found from {} to {}.",
            args.origin, args.destination
        );
        return ExitCode::SUCCESS;
    }

    let minimums = analysis::carrier_minimums(&matching);
    if minimums.is_empty() {
        println!("No complete schedules to compute minimum flight times from.");
    } else {
        println!("Minimum flight times by carrier:");
        println!("{}", report::render_carrier_minimums(&minimums));
    }

    let stats = analysis::price_stats(&matching);
    println!();
    println!("{}", report::render_price_stats(&stats));

    ExitCode::SUCCESS
}
