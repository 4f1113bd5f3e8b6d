//! Sales reports built from stored orders

use csv::{QuoteStyle, Terminator, WriterBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::models::{Menu, Order};
use crate::order::money::{format_money, to_decimal, to_f64};
use crate::order::{format_order, sum};

const HOUR_MS: i64 = 60 * 60 * 1000;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;

/// Offset of `timestamp` into the window `[start, start + span)`
fn offset_in(timestamp: i64, start: i64, span: i64) -> Option<i64> {
    timestamp
        .checked_sub(start)
        .filter(|offset| (0..span).contains(offset))
}

/// Pre-tax price of an order, zero when nothing resolves
fn order_revenue(order: &Order, menu: &Menu) -> Decimal {
    format_order(Some(order), Some(menu))
        .map(|f| to_decimal(f.price))
        .unwrap_or_default()
}

fn share(part: f64, total: f64) -> f64 {
    if total == 0.0 { 0.0 } else { part / total }
}

/// Look-back window for the item report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    #[default]
    All,
    Year,
    Month,
    Week,
    Day,
}

impl Timeframe {
    /// Window length in millis, `None` for all time
    pub fn window_ms(&self) -> Option<i64> {
        match self {
            Timeframe::All => None,
            Timeframe::Year => Some(365 * DAY_MS),
            Timeframe::Month => Some(30 * DAY_MS),
            Timeframe::Week => Some(7 * DAY_MS),
            Timeframe::Day => Some(DAY_MS),
        }
    }

    pub fn includes(&self, timestamp: i64, now: i64) -> bool {
        self.window_ms()
            .is_none_or(|window| now.saturating_sub(timestamp) < window)
    }
}

/// Units sold and revenue for one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSales {
    #[serde(rename = "itemID")]
    pub item_id: String,
    pub item_name: String,
    pub sold_count: u64,
    pub revenue: f64,
}

/// Order count and revenue for one hour of a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyVolume {
    /// 0..=23, offset from the start of the day
    pub hour: u8,
    pub count: u32,
    pub revenue: f64,
}

/// Units sold and revenue for one day of a week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyVolume {
    /// 0..=6, offset from the start of the week
    pub day: u8,
    /// Unix millis
    pub day_start: i64,
    /// Sum of part quantities
    pub count: u64,
    pub revenue: f64,
    /// Fraction of the week's count, 0 for an empty week
    pub count_share: f64,
    pub revenue_share: f64,
}

/// Seven days of volume plus the week's totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyVolume {
    pub days: Vec<DailyVolume>,
    pub total_count: u64,
    pub total_revenue: f64,
}

/// Per-item sales over the orders inside `timeframe`
///
/// Items appear in the order they were first sold. Items deleted from the
/// menu are left out.
pub fn item_sales(
    orders: &[Order],
    menu: &Menu,
    timeframe: Timeframe,
    now: i64,
) -> Vec<ItemSales> {
    let mut sales: Vec<(ItemSales, Decimal)> = Vec::new();

    let formatted = orders
        .iter()
        .filter(|o| timeframe.includes(o.timestamp, now))
        .filter_map(|o| format_order(Some(o), Some(menu)));

    for order in formatted {
        for part in &order.parts {
            let revenue = to_decimal(part.price());
            match sales.iter_mut().find(|(s, _)| s.item_id == part.item.id) {
                Some((entry, total)) => {
                    entry.sold_count = entry.sold_count.saturating_add(u64::from(part.quantity));
                    *total = total.saturating_add(revenue);
                }
                None => sales.push((
                    ItemSales {
                        item_id: part.item.id.clone(),
                        item_name: part.item.name.clone(),
                        sold_count: u64::from(part.quantity),
                        revenue: 0.0,
                    },
                    revenue,
                )),
            }
        }
    }

    sales
        .into_iter()
        .map(|(entry, total)| ItemSales {
            revenue: to_f64(total),
            ..entry
        })
        .collect()
}

/// Write rows as CSV, every cell quoted, rows joined by `\n`
pub fn make_csv<R, C>(rows: R) -> AppResult<String>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: AsRef<[u8]>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| AppError::internal(format!("Failed to write CSV row: {}", e)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("Failed to flush CSV: {}", e)))?;
    let mut csv = String::from_utf8(bytes)
        .map_err(|e| AppError::internal(format!("CSV is not UTF-8: {}", e)))?;
    // Rows are joined, not terminated
    if csv.ends_with('\n') {
        csv.pop();
    }
    Ok(csv)
}

/// Item report as CSV: `"Item name","Quantity sold","Total revenue"`
pub fn item_sales_csv(sales: &[ItemSales]) -> AppResult<String> {
    let header = vec![
        "Item name".to_string(),
        "Quantity sold".to_string(),
        "Total revenue".to_string(),
    ];
    let rows = sales.iter().map(|s| {
        vec![
            s.item_name.clone(),
            s.sold_count.to_string(),
            format_money(s.revenue),
        ]
    });
    make_csv(std::iter::once(header).chain(rows))
}

/// 24 hourly buckets for the day starting at `day_start` (Unix millis)
pub fn hourly_volume(orders: &[Order], menu: &Menu, day_start: i64) -> Vec<HourlyVolume> {
    let mut buckets: Vec<(u32, Decimal)> = vec![(0, Decimal::ZERO); 24];

    for order in orders {
        let Some(offset) = offset_in(order.timestamp, day_start, DAY_MS) else {
            continue;
        };
        let bucket = &mut buckets[(offset / HOUR_MS) as usize];
        bucket.0 = bucket.0.saturating_add(1);
        bucket.1 = bucket.1.saturating_add(order_revenue(order, menu));
    }

    buckets
        .into_iter()
        .enumerate()
        .map(|(hour, (count, revenue))| HourlyVolume {
            hour: hour as u8,
            count,
            revenue: to_f64(revenue),
        })
        .collect()
}

/// Seven daily buckets for the week starting at `week_start` (Unix millis)
///
/// The count is units sold, every part quantity of every order that day,
/// including parts whose item has since been deleted.
pub fn weekly_volume(orders: &[Order], menu: &Menu, week_start: i64) -> WeeklyVolume {
    let mut buckets: Vec<(u64, Decimal)> = vec![(0, Decimal::ZERO); 7];

    for order in orders {
        let Some(offset) = offset_in(order.timestamp, week_start, WEEK_MS) else {
            continue;
        };
        let units = order
            .parts
            .iter()
            .fold(0u64, |acc, p| acc.saturating_add(u64::from(p.quantity)));
        let bucket = &mut buckets[(offset / DAY_MS) as usize];
        bucket.0 = bucket.0.saturating_add(units);
        bucket.1 = bucket.1.saturating_add(order_revenue(order, menu));
    }

    let total_count = buckets
        .iter()
        .fold(0u64, |acc, (count, _)| acc.saturating_add(*count));
    let total_revenue = to_f64(sum(buckets.iter().map(|(_, revenue)| *revenue)));

    let days = buckets
        .into_iter()
        .enumerate()
        .map(|(day, (count, revenue))| {
            let revenue = to_f64(revenue);
            DailyVolume {
                day: day as u8,
                day_start: week_start.saturating_add(day as i64 * DAY_MS),
                count,
                revenue,
                count_share: share(count as f64, total_count as f64),
                revenue_share: share(revenue, total_revenue),
            }
        })
        .collect();

    WeeklyVolume {
        days,
        total_count,
        total_revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Addon, Item, OrderPart, Settings};

    const NOW: i64 = 1_700_000_000_000;

    fn menu() -> Menu {
        Menu {
            categories: vec![],
            items: vec![
                Item {
                    id: "fries".into(),
                    name: "Fries".into(),
                    description: String::new(),
                    price: 2.5,
                    image_id: None,
                    category_ids: vec![],
                    addon_ids: vec![],
                },
                Item {
                    id: "shake".into(),
                    name: "Shake \"XL\"".into(),
                    description: String::new(),
                    price: 4.0,
                    image_id: None,
                    category_ids: vec![],
                    addon_ids: vec![],
                },
            ],
            addons: vec![Addon {
                id: "salt".into(),
                name: "Extra salt".into(),
                price: 0.25,
            }],
            settings: Settings::default(),
        }
    }

    fn order(timestamp: i64, parts: Vec<(&str, u32, Vec<&str>)>) -> Order {
        Order {
            timestamp,
            parts: parts
                .into_iter()
                .enumerate()
                .map(|(i, (item, quantity, addons))| OrderPart {
                    part_id: i as u32 + 1,
                    item_id: item.into(),
                    quantity,
                    addon_ids: addons.into_iter().map(String::from).collect(),
                    notes: String::new(),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_timeframe_window() {
        assert!(Timeframe::All.includes(0, NOW));
        assert!(Timeframe::Day.includes(NOW - DAY_MS + 1, NOW));
        assert!(!Timeframe::Day.includes(NOW - DAY_MS, NOW));
        assert!(Timeframe::Week.includes(NOW - 6 * DAY_MS, NOW));
        assert!(!Timeframe::Month.includes(NOW - 31 * DAY_MS, NOW));
    }

    #[test]
    fn test_item_sales_aggregates_across_orders() {
        let orders = vec![
            order(NOW - 1000, vec![("fries", 2, vec!["salt", "salt"]), ("shake", 1, vec![])]),
            order(NOW - 2000, vec![("fries", 1, vec![])]),
            order(NOW - 3 * DAY_MS, vec![("shake", 3, vec![])]),
        ];
        let sales = item_sales(&orders, &menu(), Timeframe::Day, NOW);
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].item_name, "Fries");
        assert_eq!(sales[0].sold_count, 3);
        // 2 * (2.5 + 0.5) + 2.5
        assert_eq!(sales[0].revenue, 8.5);
        assert_eq!(sales[1].sold_count, 1);

        let all = item_sales(&orders, &menu(), Timeframe::All, NOW);
        assert_eq!(all[1].sold_count, 4);
        assert_eq!(all[1].revenue, 16.0);
    }

    #[test]
    fn test_item_sales_skips_deleted_items() {
        let orders = vec![order(NOW, vec![("gone", 5, vec![])])];
        assert!(item_sales(&orders, &menu(), Timeframe::All, NOW).is_empty());
    }

    #[test]
    fn test_make_csv_quotes_every_cell() {
        let csv = make_csv(vec![vec!["a", "b\"c"], vec!["1", "2,3"]]).unwrap();
        assert_eq!(csv, "\"a\",\"b\"\"c\"\n\"1\",\"2,3\"");
    }

    #[test]
    fn test_item_sales_csv() {
        let sales = vec![ItemSales {
            item_id: "shake".into(),
            item_name: "Shake \"XL\"".into(),
            sold_count: 4,
            revenue: 16.0,
        }];
        let csv = item_sales_csv(&sales).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "\"Item name\",\"Quantity sold\",\"Total revenue\"");
        assert_eq!(lines[1], "\"Shake \"\"XL\"\"\",\"4\",\"$16.00\"");
    }

    #[test]
    fn test_hourly_volume_buckets() {
        let day_start = NOW - NOW % DAY_MS;
        let orders = vec![
            order(day_start + 30 * 60 * 1000, vec![("fries", 1, vec![])]),
            order(day_start + 45 * 60 * 1000, vec![("shake", 1, vec![])]),
            order(day_start + 13 * HOUR_MS, vec![("fries", 2, vec![])]),
            order(day_start + DAY_MS, vec![("fries", 1, vec![])]),
            order(day_start - 1, vec![("fries", 1, vec![])]),
        ];
        let volume = hourly_volume(&orders, &menu(), day_start);
        assert_eq!(volume.len(), 24);
        assert_eq!(volume[0].count, 2);
        assert_eq!(volume[0].revenue, 6.5);
        assert_eq!(volume[13].count, 1);
        assert_eq!(volume[13].revenue, 5.0);
        let total: u32 = volume.iter().map(|v| v.count).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_hourly_volume_extreme_day_start() {
        let orders = vec![order(NOW, vec![("fries", 1, vec![])])];
        for day_start in [i64::MIN, i64::MAX] {
            let volume = hourly_volume(&orders, &menu(), day_start);
            assert_eq!(volume.len(), 24);
            assert!(volume.iter().all(|v| v.count == 0));
        }
    }

    #[test]
    fn test_item_sales_large_quantities_saturate() {
        let orders = vec![
            order(NOW, vec![("fries", u32::MAX, vec![])]),
            order(NOW, vec![("fries", u32::MAX, vec![])]),
        ];
        let sales = item_sales(&orders, &menu(), Timeframe::All, NOW);
        assert_eq!(sales[0].sold_count, 2 * u64::from(u32::MAX));
        assert!(sales[0].revenue > 0.0);
        assert!(!Timeframe::Day.includes(i64::MIN, NOW));
    }

    #[test]
    fn test_item_sales_csv_has_no_trailing_newline() {
        let sales = vec![ItemSales {
            item_id: "fries".into(),
            item_name: "Fries".into(),
            sold_count: 2,
            revenue: 5.0,
        }];
        let csv = item_sales_csv(&sales).unwrap();
        assert_eq!(
            csv,
            "\"Item name\",\"Quantity sold\",\"Total revenue\"\n\"Fries\",\"2\",\"$5.00\""
        );
    }

    #[test]
    fn test_weekly_volume_buckets() {
        let week_start = NOW - NOW % DAY_MS;
        let orders = vec![
            order(week_start + HOUR_MS, vec![("fries", 2, vec![]), ("shake", 1, vec![])]),
            order(week_start + 3 * DAY_MS, vec![("fries", 1, vec!["salt"])]),
            // Deleted item still counts as units sold, with no revenue
            order(week_start + 3 * DAY_MS + 1, vec![("gone", 4, vec![])]),
            order(week_start + 7 * DAY_MS, vec![("fries", 9, vec![])]),
            order(week_start - 1, vec![("fries", 9, vec![])]),
        ];
        let week = weekly_volume(&orders, &menu(), week_start);

        assert_eq!(week.days.len(), 7);
        assert_eq!(week.days[0].count, 3);
        assert_eq!(week.days[0].revenue, 9.0);
        assert_eq!(week.days[3].count, 5);
        assert_eq!(week.days[3].revenue, 2.75);
        assert_eq!(week.days[3].day_start, week_start + 3 * DAY_MS);
        assert_eq!(week.total_count, 8);
        assert_eq!(week.total_revenue, 11.75);
        assert_eq!(week.days[0].count_share, 3.0 / 8.0);
        assert_eq!(week.days[3].revenue_share, 2.75 / 11.75);
        assert_eq!(week.days[6].count_share, 0.0);
    }

    #[test]
    fn test_weekly_volume_empty_week() {
        let week = weekly_volume(&[], &menu(), i64::MAX);
        assert_eq!(week.total_count, 0);
        assert!(week.days.iter().all(|d| d.count_share == 0.0 && d.revenue_share == 0.0));
        assert_eq!(week.days[6].day_start, i64::MAX);
    }
}
