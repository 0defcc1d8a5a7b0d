//! Dashboard metrics over a date-filtered order collection.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, Offset, Utc};
use serde::{Deserialize, Serialize};

use gradeflow_core::OrderId;
use gradeflow_sales::{Order, PrintStatus};

use crate::grid::GradeAccumulator;

/// Length of the best-seller ranking.
pub const RANKING_SIZE: usize = 5;

/// Inclusive calendar-day filter. Either bound may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Earliest day assumed when only `end` is given.
    pub fn default_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Resolve to `[start 00:00:00, end 23:59:59.999]` in the clock's local time.
    ///
    /// `None` when unbounded: no filtering applies at all.
    pub fn bounds(&self, clock: &ReportClock) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        if self.is_unbounded() {
            return None;
        }

        let start_day = self.start.unwrap_or_else(Self::default_start);
        let end_day = self.end.unwrap_or_else(|| clock.today());

        let start = clock.local_instant(start_day, NaiveTime::default());
        let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or_default();
        let end = clock.local_instant(end_day, end_of_day);

        Some((start, end))
    }

    /// Whether an order created at `created_at` falls in the range.
    ///
    /// Orders without a creation timestamp only pass an unbounded range.
    pub fn contains(&self, created_at: Option<DateTime<Utc>>, clock: &ReportClock) -> bool {
        match self.bounds(clock) {
            None => true,
            Some((start, end)) => created_at.is_some_and(|t| start <= t && t <= end),
        }
    }
}

/// Local time used to interpret calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportClock {
    offset: FixedOffset,
    now: DateTime<Utc>,
}

impl ReportClock {
    pub fn new(offset: FixedOffset, now: DateTime<Utc>) -> Self {
        Self { offset, now }
    }

    /// Host time zone and current time.
    pub fn system() -> Self {
        let now = Local::now();
        Self {
            offset: now.offset().fix(),
            now: now.with_timezone(&Utc),
        }
    }

    /// Current time with an explicit UTC offset (in minutes east of UTC).
    ///
    /// Out-of-range offsets fall back to UTC.
    pub fn with_offset_minutes(minutes: i32) -> Self {
        let offset = FixedOffset::east_opt(minutes.saturating_mul(60)).unwrap_or_else(|| Utc.fix());
        Self::new(offset, Utc::now())
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.with_timezone(&self.offset).date_naive()
    }

    fn local_instant(&self, day: NaiveDate, time: NaiveTime) -> DateTime<Utc> {
        // A fixed offset has exactly one mapping for every local time.
        (day.and_time(time) - self.offset).and_utc()
    }
}

/// One entry of the best-seller ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    /// `"{reference} - {color}"`.
    pub key: String,
    pub total: u64,
}

impl RankingEntry {
    /// Percentage of `leader` this entry represents (bar width on the dashboard).
    pub fn share_of(&self, leader: u64) -> f64 {
        if leader == 0 {
            0.0
        } else {
            self.total as f64 * 100.0 / leader as f64
        }
    }
}

/// Dashboard headline numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub total_orders: usize,
    pub total_pieces: u64,
    /// At most [`RANKING_SIZE`] entries, descending by total; ties keep
    /// first-seen order.
    pub ranking: Vec<RankingEntry>,
}

impl Metrics {
    /// Each ranking entry's share of the leader, in ranking order.
    pub fn ranking_shares(&self) -> Vec<f64> {
        let leader = self.ranking.first().map(|e| e.total).unwrap_or(0);
        self.ranking.iter().map(|e| e.share_of(leader)).collect()
    }
}

/// Orders inside `range`, in input order.
pub fn filter_orders<'a>(orders: &'a [Order], range: &DateRange, clock: &ReportClock) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| range.contains(o.created_at, clock))
        .collect()
}

/// Metrics for `orders` created within `range`, using the host clock.
pub fn summarize_metrics(orders: &[Order], range: &DateRange) -> Metrics {
    summarize_metrics_at(orders, range, &ReportClock::system())
}

/// Metrics for `orders` created within `range`, days interpreted by `clock`.
pub fn summarize_metrics_at(orders: &[Order], range: &DateRange, clock: &ReportClock) -> Metrics {
    let included = filter_orders(orders, range, clock);

    let mut acc = GradeAccumulator::new();
    for order in &included {
        for item in &order.items {
            acc.push(item);
        }
    }

    let mut ranking: Vec<RankingEntry> = acc
        .groups()
        .iter()
        .map(|g| RankingEntry {
            key: format!("{} - {}", g.reference, g.color),
            total: g.total_qty,
        })
        .collect();
    // Stable: equal totals stay in first-seen order.
    ranking.sort_by(|a, b| b.total.cmp(&a.total));
    ranking.truncate(RANKING_SIZE);

    let total_pieces: u64 = included.iter().map(|o| o.total_pieces()).sum();

    tracing::debug!(
        orders = orders.len(),
        included = included.len(),
        total_pieces,
        "summarized order metrics"
    );

    Metrics {
        total_orders: included.len(),
        total_pieces,
        ranking,
    }
}

/// Row of the "recent orders" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub number: String,
    pub client_name: String,
    pub rep_name: String,
    pub created_on: String,
    pub pieces: u64,
    pub status: PrintStatus,
}

impl OrderSummary {
    pub fn of(order: &Order) -> Self {
        Self {
            id: order.id,
            number: order.display_number(),
            client_name: order.client_name.clone(),
            rep_name: order.rep_name.clone(),
            created_on: order.created_on(),
            pieces: order.total_pieces(),
            status: order.print_status(),
        }
    }
}

/// Newest `limit` orders (orders without a timestamp last).
pub fn recent_orders(orders: &[&Order], limit: usize) -> Vec<OrderSummary> {
    let mut sorted: Vec<&Order> = orders.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.into_iter().take(limit).map(OrderSummary::of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use gradeflow_sales::LineItem;

    fn clock() -> ReportClock {
        // UTC-3, "now" is 2024-06-15 12:00 local.
        let offset = FixedOffset::west_opt(3 * 3600).unwrap();
        ReportClock::new(offset, Utc.with_ymd_and_hms(2024, 6, 15, 15, 0, 0).unwrap())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn order_at(created_at: Option<DateTime<Utc>>, items: Vec<LineItem>) -> Order {
        let json = serde_json::json!({ "id": OrderId::new() });
        let mut order: Order = serde_json::from_value(json).unwrap();
        order.created_at = created_at;
        order.items = items;
        order
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> Option<DateTime<Utc>> {
        Some(Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap())
    }

    #[test]
    fn empty_collection_yields_zeroes() {
        let metrics = summarize_metrics(&[], &DateRange::unbounded());
        assert_eq!(metrics, Metrics::default());
        assert!(metrics.ranking_shares().is_empty());
    }

    #[test]
    fn ranking_is_descending_by_total() {
        let orders = vec![
            order_at(utc(2024, 6, 1, 12, 0), vec![LineItem::new("X", "BLUE", "M", 10)]),
            order_at(utc(2024, 6, 2, 12, 0), vec![LineItem::new("Y", "RED", "P", 20)]),
        ];
        let metrics = summarize_metrics_at(&orders, &DateRange::unbounded(), &clock());

        let ranking: Vec<(&str, u64)> = metrics.ranking.iter().map(|e| (e.key.as_str(), e.total)).collect();
        assert_eq!(ranking, vec![("Y - RED", 20), ("X - BLUE", 10)]);
        assert_eq!(metrics.total_orders, 2);
        assert_eq!(metrics.total_pieces, 30);
        assert_eq!(metrics.ranking_shares(), vec![100.0, 50.0]);
    }

    #[test]
    fn ranking_keeps_top_five_with_first_seen_tie_break() {
        let items = vec![
            LineItem::new("A", "RED", "M", 5),
            LineItem::new("B", "RED", "M", 5),
            LineItem::new("C", "RED", "M", 7),
            LineItem::new("D", "RED", "M", 5),
            LineItem::new("E", "RED", "M", 1),
            LineItem::new("F", "RED", "M", 5),
            LineItem::new("G", "RED", "M", 5),
        ];
        let orders = vec![order_at(utc(2024, 6, 1, 12, 0), items)];
        let metrics = summarize_metrics_at(&orders, &DateRange::unbounded(), &clock());

        let keys: Vec<&str> = metrics.ranking.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["C - RED", "A - RED", "B - RED", "D - RED", "F - RED"]);
    }

    #[test]
    fn ranking_accumulates_across_orders_and_sizes() {
        let orders = vec![
            order_at(utc(2024, 6, 1, 12, 0), vec![LineItem::new("A", "RED", "M", 2)]),
            order_at(
                utc(2024, 6, 2, 12, 0),
                vec![LineItem::new("A", "RED", "G", 3), LineItem::new("A", "RED", "", 1)],
            ),
        ];
        let metrics = summarize_metrics_at(&orders, &DateRange::unbounded(), &clock());
        assert_eq!(metrics.ranking, vec![RankingEntry { key: "A - RED".to_string(), total: 6 }]);
        assert_eq!(metrics.total_pieces, 6);
    }

    #[test]
    fn start_only_range_excludes_earlier_orders() {
        let orders = vec![
            order_at(utc(2024, 5, 31, 12, 0), vec![LineItem::new("A", "RED", "M", 1)]),
            // 2024-06-01 00:30 local (UTC-3)
            order_at(utc(2024, 6, 1, 3, 30), vec![LineItem::new("B", "RED", "M", 2)]),
            order_at(utc(2024, 6, 14, 12, 0), vec![LineItem::new("C", "RED", "M", 4)]),
        ];
        let range = DateRange::new(Some(day(2024, 6, 1)), None);
        let metrics = summarize_metrics_at(&orders, &range, &clock());

        assert_eq!(metrics.total_orders, 2);
        assert_eq!(metrics.total_pieces, 6);
    }

    #[test]
    fn end_day_is_inclusive_through_local_midnight() {
        let orders = vec![
            // 2024-06-10 23:59:00 local
            order_at(utc(2024, 6, 11, 2, 59), vec![]),
            // 2024-06-11 00:01 local
            order_at(utc(2024, 6, 11, 3, 1), vec![]),
        ];
        let range = DateRange::new(None, Some(day(2024, 6, 10)));
        assert_eq!(filter_orders(&orders, &range, &clock()).len(), 1);
    }

    #[test]
    fn missing_timestamps_only_pass_unbounded_ranges() {
        let orders = vec![order_at(None, vec![LineItem::new("A", "RED", "M", 3)])];

        let all = summarize_metrics_at(&orders, &DateRange::unbounded(), &clock());
        assert_eq!(all.total_orders, 1);

        let bounded = DateRange::new(Some(day(2000, 1, 1)), None);
        let filtered = summarize_metrics_at(&orders, &bounded, &clock());
        assert_eq!(filtered, Metrics::default());
    }

    #[test]
    fn open_end_stops_at_end_of_today() {
        let clock = clock();
        let range = DateRange::new(Some(day(2024, 1, 1)), None);
        let (_, end) = range.bounds(&clock).unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 6, 16, 2, 59, 59).unwrap() + chrono::Duration::milliseconds(999));
    }

    #[test]
    fn recent_orders_are_newest_first() {
        let orders = vec![
            order_at(utc(2024, 6, 1, 12, 0), vec![LineItem::new("A", "RED", "M", 1)]),
            order_at(None, vec![]),
            order_at(utc(2024, 6, 3, 12, 0), vec![LineItem::new("A", "RED", "M", 2)]),
        ];
        let refs: Vec<&Order> = orders.iter().collect();
        let recent = recent_orders(&refs, 2);

        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, orders[2].id);
        assert_eq!(recent[0].pieces, 2);
        assert_eq!(recent[1].id, orders[0].id);
    }
}
