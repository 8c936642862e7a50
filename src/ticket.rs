use crate::time::{self, Duration, ScheduleParseError};
use colored::Colorize;
use serde::Deserialize;
use std::io;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

pub type PlaceId = Arc<str>;
pub type CarrierId = Arc<str>;

/// One flight offer, normalized from either wire schema.
///
/// `duration` is `Some` when the record carried a complete, parseable
/// schedule (or a precomputed minute count); `None` marks an incomplete
/// record that still takes part in price aggregation.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub origin: PlaceId,
    pub origin_name: Option<String>,
    pub destination: PlaceId,
    pub destination_name: Option<String>,
    pub carrier: CarrierId,
    pub stops: u32,
    pub price: u64,
    pub duration: Option<Duration>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read ticket file: {0}")]
    Io(#[from] io::Error),
    #[error("malformed ticket document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw record of the scheduled-timestamp schema, `{"tickets": [...]}`.
/// The four schedule fields are individually optional; an absent one makes
/// the ticket incomplete, it does not fail the load.
#[derive(Deserialize)]
struct RawScheduled {
    origin: PlaceId,
    origin_name: Option<String>,
    destination: PlaceId,
    destination_name: Option<String>,
    departure_date: Option<String>,
    departure_time: Option<String>,
    arrival_date: Option<String>,
    arrival_time: Option<String>,
    carrier: CarrierId,
    #[serde(default)]
    stops: u32,
    price: u64,
}

/// Raw record of the precomputed-minutes schema, a bare array with
/// `flightTime` already in minutes.
#[derive(Deserialize)]
struct RawTimed {
    from: PlaceId,
    to: PlaceId,
    carrier: CarrierId,
    #[serde(rename = "flightTime")]
    flight_time: i64,
    price: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDocument {
    Keyed { tickets: Vec<RawScheduled> },
    Flat(Vec<RawTimed>),
}

pub struct TicketSet {
    pub tickets: Vec<Ticket>,
}

impl TicketSet {
    pub fn load_from_file(path: &Path) -> Result<Self, LoadError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, LoadError> {
        let raw: RawDocument = serde_json::from_str(data)?;
        let tickets = match raw {
            RawDocument::Keyed { tickets } => {
                tickets.into_iter().map(Ticket::from_scheduled).collect()
            }
            RawDocument::Flat(records) => records.into_iter().map(Ticket::from_timed).collect(),
        };
        Ok(TicketSet { tickets })
    }
}

impl Ticket {
    fn from_scheduled(raw: RawScheduled) -> Ticket {
        let duration = match scheduled_duration(&raw) {
            Ok(duration) => Some(duration),
            Err(err) => {
                warn(&format!(
                    "skipping flight time for {} -> {} ({}): {}",
                    raw.origin, raw.destination, raw.carrier, err
                ));
                None
            }
        };
        Ticket {
            origin: raw.origin,
            origin_name: raw.origin_name,
            destination: raw.destination,
            destination_name: raw.destination_name,
            carrier: raw.carrier,
            stops: raw.stops,
            price: raw.price,
            duration,
        }
    }

    fn from_timed(raw: RawTimed) -> Ticket {
        Ticket {
            origin: raw.from,
            origin_name: None,
            destination: raw.to,
            destination_name: None,
            carrier: raw.carrier,
            stops: 0,
            price: raw.price,
            duration: Some(Duration(raw.flight_time)),
        }
    }
}

fn scheduled_duration(raw: &RawScheduled) -> Result<Duration, ScheduleParseError> {
    let departure = time::parse_timestamp(
        require(&raw.departure_date, "departure_date")?,
        require(&raw.departure_time, "departure_time")?,
    )?;
    let arrival = time::parse_timestamp(
        require(&raw.arrival_date, "arrival_date")?,
        require(&raw.arrival_time, "arrival_time")?,
    )?;
    Ok(time::elapsed(departure, arrival))
}

fn require<'a>(
    value: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, ScheduleParseError> {
    value
        .as_deref()
        .ok_or(ScheduleParseError::MissingField(name))
}

fn warn(message: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), message);
}
