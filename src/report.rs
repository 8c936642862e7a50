use crate::analysis::PriceStats;
use crate::ticket::CarrierId;
use crate::time::Duration;
use std::collections::HashMap;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct CarrierRow {
    #[tabled(rename = "Carrier")]
    carrier: CarrierId,
    #[tabled(rename = "Minimum flight time")]
    minimum: Duration,
}

/// Per-carrier minimum flight times as a table, carriers sorted by code.
pub fn render_carrier_minimums(minimums: &HashMap<CarrierId, Duration>) -> String {
    let mut rows: Vec<CarrierRow> = minimums
        .iter()
        .map(|(carrier, minimum)| CarrierRow {
            carrier: carrier.clone(),
            minimum: *minimum,
        })
        .collect();
    rows.sort_by(|a, b| a.carrier.cmp(&b.carrier));

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

pub fn render_price_stats(stats: &PriceStats) -> String {
    format!(
        "Average price: {:.2}\nMedian price: {:.2}\nDifference between average and median price: {:.2}",
        stats.mean,
        stats.median,
        stats.difference().abs()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carrier_table_lists_sorted_carriers() {
        let mut minimums = HashMap::new();
        minimums.insert(CarrierId::from("SU"), Duration(720));
        minimums.insert(CarrierId::from("BA"), Duration(90));

        let table = render_carrier_minimums(&minimums);
        assert!(table.contains("12 hours 0 minutes"));
        assert!(table.contains("1 hours 30 minutes"));

        let ba = table.find("BA").unwrap();
        let su = table.find("SU").unwrap();
        assert!(ba < su);
    }

    #[test]
    fn test_price_stats_use_two_decimals() {
        let stats = PriceStats {
            mean: 250.0,
            median: 200.0,
        };
        assert_eq!(
            "Average price: 250.00\nMedian price: 200.00\nDifference between average and median price: 50.00",
            render_price_stats(&stats)
        );
    }

    #[test]
    fn test_difference_is_reported_absolute() {
        let stats = PriceStats {
            mean: 150.0,
            median: 200.0,
        };
        assert!(render_price_stats(&stats).ends_with("50.00"));
    }
}
