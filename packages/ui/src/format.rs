//! Display helpers shared by the views.
//!
//! Backend numbers are often missing, so everything here accepts `Option<f64>`
//! and renders absent or non-finite values as zero.

use api::models::parse_timestamp;
use api::{Order, Summary, TrendPoint};
use chrono::Datelike;

/// Number of orders the dashboard lists.
pub const RECENT_ORDER_COUNT: usize = 5;

/// `value` with `decimals` fraction digits; missing or NaN renders as zero.
pub fn safe_fixed(value: Option<f64>, decimals: usize) -> String {
    let value = value.filter(|v| v.is_finite()).unwrap_or(0.0);
    format!("{value:.decimals$}")
}

/// `Mar 5, 2024`. Unparseable input is shown as `Invalid Date`.
pub fn format_date(raw: Option<&str>) -> String {
    match raw.and_then(parse_timestamp) {
        Some(ts) => ts.format("%b %-d, %Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}

/// CSS width for a percentage bar, clamped to `0%..=100%`.
pub fn bar_width(percentage: Option<f64>) -> String {
    let pct = percentage
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
        .clamp(0.0, 100.0);
    format!("{pct:.1}%")
}

/// Newest orders first, at most [`RECENT_ORDER_COUNT`]. Undated orders sort last.
pub fn recent_orders(mut orders: Vec<Order>) -> Vec<Order> {
    orders.sort_by(|a, b| b.ordered_at().cmp(&a.ordered_at()));
    orders.truncate(RECENT_ORDER_COUNT);
    orders
}

/// Orders counted for the average: the backend's count, else what is on screen.
pub fn order_count(summary: &Summary, recent: usize) -> u64 {
    match summary.order_count {
        Some(count) if count > 0 => count,
        _ => recent as u64,
    }
}

pub fn average_per_order(summary: &Summary, recent: usize) -> f64 {
    let count = order_count(summary, recent);
    if count == 0 {
        return 0.0;
    }
    summary.total_emission.unwrap_or(0.0) / count as f64
}

/// Which of transport, food and packaging contributes most.
pub fn highest_source(summary: &Summary) -> &'static str {
    let transport = summary.transport_percentage.unwrap_or(0.0);
    let food = summary.food_percentage.unwrap_or(0.0);
    let packaging = summary.packaging_percentage.unwrap_or(0.0);
    if transport > food && transport > packaging {
        "Transport"
    } else if food > packaging {
        "Food"
    } else {
        "Packaging"
    }
}

/// Average total emission per calendar month, labelled `M/YYYY`, oldest first.
/// Points with unparseable dates are skipped.
pub fn monthly_averages(trends: &[TrendPoint]) -> Vec<(String, f64)> {
    let mut buckets: Vec<((i32, u32), f64, u32)> = Vec::new();
    for point in trends {
        let Some(ts) = point.timestamp() else {
            continue;
        };
        let month = (ts.year(), ts.month());
        let value = point.total_emission.unwrap_or(0.0);
        match buckets.iter_mut().find(|(key, _, _)| *key == month) {
            Some((_, total, count)) => {
                *total += value;
                *count += 1;
            }
            None => buckets.push((month, value, 1)),
        }
    }
    buckets.sort_by_key(|(key, _, _)| *key);
    buckets
        .into_iter()
        .map(|((year, month), total, count)| (format!("{month}/{year}"), total / count as f64))
        .collect()
}

/// Today's date as `YYYY-MM-DD`, the default for the order form.
pub fn today() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            date.get_full_year(),
            date.get_month() + 1,
            date.get_date()
        )
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Local::now().format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str, date: Option<&str>) -> Order {
        Order {
            id: id.to_string(),
            order_date: date.map(str::to_string),
            ..Default::default()
        }
    }

    fn trend(date: &str, total: f64) -> TrendPoint {
        TrendPoint {
            date: date.to_string(),
            total_emission: Some(total),
            ..Default::default()
        }
    }

    #[test]
    fn test_safe_fixed() {
        assert_eq!(safe_fixed(None, 2), "0.00");
        assert_eq!(safe_fixed(Some(f64::NAN), 2), "0.00");
        assert_eq!(safe_fixed(Some(3.14159), 2), "3.14");
        assert_eq!(safe_fixed(Some(42.0), 1), "42.0");
        assert_eq!(safe_fixed(None, 1), "0.0");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some("2024-03-05T18:20:00.000Z")), "Mar 5, 2024");
        assert_eq!(format_date(Some("2023-12-31")), "Dec 31, 2023");
        assert_eq!(format_date(Some("soon")), "Invalid Date");
        assert_eq!(format_date(None), "Invalid Date");
    }

    #[test]
    fn test_recent_orders_sorted_and_capped() {
        let orders = vec![
            order("a", Some("2024-01-01")),
            order("b", Some("2024-03-01")),
            order("c", None),
            order("d", Some("2024-02-01")),
            order("e", Some("2024-05-01")),
            order("f", Some("2024-04-01")),
            order("g", Some("2023-12-01")),
        ];
        let ids: Vec<String> = recent_orders(orders).into_iter().map(|o| o.id).collect();
        assert_eq!(ids, ["e", "f", "b", "d", "a"]);
    }

    #[test]
    fn test_average_falls_back_to_recent_count() {
        let summary = Summary {
            total_emission: Some(10.0),
            ..Default::default()
        };
        assert_eq!(average_per_order(&summary, 4), 2.5);
        assert_eq!(average_per_order(&summary, 0), 0.0);

        let counted = Summary {
            total_emission: Some(10.0),
            order_count: Some(8),
            ..Default::default()
        };
        assert_eq!(average_per_order(&counted, 4), 1.25);
    }

    #[test]
    fn test_highest_source() {
        let summary = Summary {
            transport_percentage: Some(30.0),
            food_percentage: Some(55.0),
            packaging_percentage: Some(15.0),
            ..Default::default()
        };
        assert_eq!(highest_source(&summary), "Food");
        assert_eq!(highest_source(&Summary::default()), "Packaging");
    }

    #[test]
    fn test_monthly_averages() {
        let trends = vec![
            trend("2024-02-10", 4.0),
            trend("2024-01-03", 1.0),
            trend("2024-01-20", 3.0),
            trend("garbage", 100.0),
        ];
        assert_eq!(
            monthly_averages(&trends),
            vec![("1/2024".to_string(), 2.0), ("2/2024".to_string(), 4.0)]
        );
    }

    #[test]
    fn test_bar_width_clamps() {
        assert_eq!(bar_width(Some(150.0)), "100.0%");
        assert_eq!(bar_width(Some(-3.0)), "0.0%");
        assert_eq!(bar_width(None), "0.0%");
    }
}
