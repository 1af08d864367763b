//! Client-side aggregation of fetched lists into display shapes.
//!
//! Everything here is pure; rounding happens only when values are formatted.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Timelike};
use contracts::domain::a001_order::Order;
use contracts::projections::p900_food_cost::FoodCost;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Quantity sold within one hour of the day. `hour == None` collects orders
/// whose timestamp is missing or unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlySales {
    pub hour: Option<u32>,
    pub qty: i64,
}

impl HourlySales {
    pub fn label(&self) -> String {
        match self.hour {
            Some(hour) => format!("{:02}:00", hour),
            None => "n/d".to_string(),
        }
    }
}

/// Hour of day of `raw` in `tz`. Timestamps without an offset are taken as
/// already being wall-clock time.
pub fn hour_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<u32> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).hour());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.hour())
}

/// Sales by hour in the browser's time zone.
pub fn hourly_sales(orders: &[Order]) -> Vec<HourlySales> {
    hourly_sales_in(orders, &Local)
}

/// Buckets sorted by hour (0..=23), unknown-hour bucket last. Quantities are
/// conserved: the bucket sum equals the input sum.
pub fn hourly_sales_in<Tz: TimeZone>(orders: &[Order], tz: &Tz) -> Vec<HourlySales> {
    let mut by_hour = [0i64; 24];
    let mut seen = [false; 24];
    let mut unknown: Option<i64> = None;

    for order in orders {
        match order.timestamp.as_deref().and_then(|ts| hour_in(ts, tz)) {
            Some(hour) => {
                let slot = hour as usize;
                by_hour[slot] += order.quantity;
                seen[slot] = true;
            }
            None => *unknown.get_or_insert(0) += order.quantity,
        }
    }

    let mut buckets: Vec<HourlySales> = (0..24)
        .filter(|&h| seen[h])
        .map(|h| HourlySales {
            hour: Some(h as u32),
            qty: by_hour[h],
        })
        .collect();
    if let Some(qty) = unknown {
        buckets.push(HourlySales { hour: None, qty });
    }
    buckets
}

/// Mean food cost, `None` for an empty list.
pub fn average_food_cost(costs: &[FoodCost]) -> Option<f64> {
    if costs.is_empty() {
        return None;
    }
    let sum: f64 = costs.iter().map(|c| c.food_cost).sum();
    Some(sum / costs.len() as f64)
}

pub fn total_orders(orders: &[Order]) -> usize {
    orders.len()
}

/// Bar height relative to the busiest bucket, in percent.
pub fn bar_percent(qty: i64, max: i64) -> f64 {
    if max <= 0 || qty <= 0 {
        0.0
    } else {
        (qty as f64 / max as f64 * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn order(id: i64, timestamp: Option<&str>, quantity: i64) -> Order {
        Order {
            id,
            timestamp: timestamp.map(str::to_string),
            product_id: None,
            quantity,
            rider_id: None,
            price: None,
            total: None,
            date: None,
        }
    }

    fn cost(product_id: i64, food_cost: f64) -> FoodCost {
        FoodCost {
            product_id,
            food_cost,
        }
    }

    #[test]
    fn test_hours_sorted_numerically() {
        let orders = vec![
            order(1, Some("2024-05-01T10:15:00"), 2),
            order(2, Some("2024-05-01T09:05:00"), 1),
            order(3, Some("2024-05-01T10:45:00"), 3),
            order(4, Some("2024-05-01T21:00:00"), 4),
        ];
        let buckets = hourly_sales_in(&orders, &Utc);
        assert_eq!(
            buckets,
            vec![
                HourlySales { hour: Some(9), qty: 1 },
                HourlySales { hour: Some(10), qty: 5 },
                HourlySales { hour: Some(21), qty: 4 },
            ]
        );
        assert_eq!(buckets[0].label(), "09:00");
    }

    #[test]
    fn test_offset_timestamps_follow_target_zone() {
        let rome = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(hour_in("2024-05-01T22:30:00Z", &rome), Some(0));
        assert_eq!(hour_in("2024-05-01T22:30:00Z", &Utc), Some(22));
        assert_eq!(hour_in("2024-05-01 08:00:00", &rome), Some(8));
        assert_eq!(hour_in("not a date", &Utc), None);
        assert_eq!(hour_in("2024-05-01", &Utc), None);
    }

    #[test]
    fn test_quantities_conserved_with_unknown_bucket() {
        let orders = vec![
            order(1, Some("2024-05-01T12:00:00"), 5),
            order(2, None, 2),
            order(3, Some("garbage"), 7),
            order(4, Some("2024-05-01T12:30:00.250"), 1),
        ];
        let buckets = hourly_sales_in(&orders, &Utc);
        let input: i64 = orders.iter().map(|o| o.quantity).sum();
        let output: i64 = buckets.iter().map(|b| b.qty).sum();
        assert_eq!(input, output);
        assert_eq!(buckets.last(), Some(&HourlySales { hour: None, qty: 9 }));
        assert_eq!(buckets.last().map(|b| b.label()), Some("n/d".to_string()));
    }

    #[test]
    fn test_conservation_over_many_orders() {
        let orders: Vec<Order> = (0..200)
            .map(|i| {
                let ts = if i % 13 == 0 {
                    None
                } else {
                    Some(format!("2024-05-01T{:02}:{:02}:00", i % 24, i % 60))
                };
                order(i, ts.as_deref(), i % 5 + 1)
            })
            .collect();
        let buckets = hourly_sales_in(&orders, &Utc);
        let input: i64 = orders.iter().map(|o| o.quantity).sum();
        assert_eq!(buckets.iter().map(|b| b.qty).sum::<i64>(), input);
        let hours: Vec<u32> = buckets.iter().filter_map(|b| b.hour).collect();
        assert!(hours.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_empty_orders_have_no_buckets() {
        assert!(hourly_sales_in(&[], &Utc).is_empty());
        assert_eq!(total_orders(&[]), 0);
    }

    #[test]
    fn test_average_food_cost() {
        assert_eq!(average_food_cost(&[]), None);
        assert_eq!(average_food_cost(&[cost(1, 2.0), cost(2, 4.0)]), Some(3.0));
    }

    #[test]
    fn test_total_orders_is_length() {
        let orders = vec![order(1, None, 1), order(2, None, 1), order(3, None, 1)];
        assert_eq!(total_orders(&orders), 3);
    }

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(5, 10), 50.0);
        assert_eq!(bar_percent(10, 10), 100.0);
        assert_eq!(bar_percent(3, 0), 0.0);
        assert_eq!(bar_percent(-1, 10), 0.0);
    }
}
