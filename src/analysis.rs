use crate::ticket::{CarrierId, Ticket};
use crate::time::Duration;
use std::collections::HashMap;

/// Tickets matching the origin/destination pair, original order preserved.
/// Matching is exact string equality on whatever key set the loaded schema
/// uses (IATA codes or display names).
pub fn filter_route<'a>(tickets: &'a [Ticket], origin: &str, destination: &str) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|t| t.origin.as_ref() == origin && t.destination.as_ref() == destination)
        .collect()
}

/// Minimum flight duration per carrier, over tickets with a defined duration.
/// Carriers whose every ticket is incomplete never get an entry.
pub fn carrier_minimums(tickets: &[&Ticket]) -> HashMap<CarrierId, Duration> {
    let mut minimums: HashMap<CarrierId, Duration> = HashMap::new();
    for ticket in tickets {
        if let Some(duration) = ticket.duration {
            minimums
                .entry(ticket.carrier.clone())
                .and_modify(|current| *current = (*current).min(duration))
                .or_insert(duration);
        }
    }
    minimums
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    pub mean: f64,
    pub median: f64,
}

impl PriceStats {
    pub fn difference(&self) -> f64 {
        self.mean - self.median
    }
}

/// Mean and median over the prices of every given ticket, incomplete
/// schedules included. Sorting happens on a local working copy; the input
/// sequence is left untouched.
pub fn price_stats(tickets: &[&Ticket]) -> PriceStats {
    let prices: Vec<u64> = tickets.iter().map(|t| t.price).collect();
    PriceStats {
        mean: mean(&prices),
        median: median(prices),
    }
}

fn mean(prices: &[u64]) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }
    prices.iter().map(|p| *p as f64).sum::<f64>() / prices.len() as f64
}

fn median(mut prices: Vec<u64>) -> f64 {
    if prices.is_empty() {
        return 0.0;
    }
    prices.sort_unstable();
    let mid = prices.len() / 2;
    if prices.len() % 2 == 0 {
        (prices[mid - 1] + prices[mid]) as f64 / 2.0
    } else {
        prices[mid] as f64
    }
}

#[cfg(test)]
pub(crate) fn ticket(
    origin: &str,
    destination: &str,
    carrier: &str,
    price: u64,
    duration: Option<i64>,
) -> Ticket {
    Ticket {
        origin: origin.into(),
        origin_name: None,
        destination: destination.into(),
        destination_name: None,
        carrier: carrier.into(),
        stops: 0,
        price,
        duration: duration.map(Duration),
    }
}
