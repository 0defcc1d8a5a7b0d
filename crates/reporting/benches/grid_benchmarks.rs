use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use gradeflow_core::{OrderId, Quantity};
use gradeflow_reporting::{DateRange, ReportClock, aggregate_grid, summarize_metrics_at};
use gradeflow_sales::{LineItem, Order};

const SIZES: [&str; 9] = ["PP", "P", "M", "G", "GG", "G1", "G2", "G3", "U"];
const COLORS: [&str; 4] = ["AZUL", "PRETO", "BRANCO", "VERMELHO"];

fn line_items(count: usize) -> Vec<LineItem> {
    (0..count)
        .map(|i| LineItem {
            reference: format!("R{:03}", i % 120),
            color: COLORS[i % COLORS.len()].to_string(),
            size: SIZES[i % SIZES.len()].to_string(),
            quantity: Quantity::new((i % 17) as u32),
        })
        .collect()
}

fn orders(count: usize, lines_per_order: usize) -> Vec<Order> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let mut order: Order =
                serde_json::from_value(serde_json::json!({ "id": OrderId::new() })).unwrap();
            order.items = line_items(lines_per_order);
            order.created_at = Some(base + Duration::hours(i as i64));
            order
        })
        .collect()
}

fn bench_aggregate_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_grid");

    for count in [10usize, 1_000, 50_000] {
        let items = line_items(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter(|| aggregate_grid(black_box(items)))
        });
    }

    group.finish();
}

fn bench_summarize_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize_metrics");
    let clock = ReportClock::new(
        FixedOffset::west_opt(3 * 3600).unwrap(),
        Utc.with_ymd_and_hms(2024, 12, 31, 12, 0, 0).unwrap(),
    );
    let range = DateRange::new(NaiveDate::from_ymd_opt(2024, 2, 1), None);

    for count in [100usize, 2_000] {
        let orders = orders(count, 40);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &orders, |b, orders| {
            b.iter(|| summarize_metrics_at(black_box(orders), &range, &clock))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate_grid, bench_summarize_metrics);
criterion_main!(benches);
