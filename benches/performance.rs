use chrono::{NaiveDate, Weekday};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use weekline::fixtures::sample_events;
use weekline::timeline::{
    generate_weeks, Direction, TimelineIntent, WeekWindowStore, WEEKS_TO_GENERATE,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
}

/// Benchmark pure week generation at the batch sizes the store uses
fn bench_generate_weeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("week_generation");

    for count in [1, WEEKS_TO_GENERATE, 2 * WEEKS_TO_GENERATE + 1] {
        group.bench_function(format!("{}_weeks", count), |b| {
            b.iter(|| {
                generate_weeks(
                    black_box(today()),
                    black_box(count),
                    black_box(today()),
                    black_box(Weekday::Mon),
                )
            })
        });
    }

    group.finish();
}

/// Benchmark store construction (the initial 101-week window)
fn bench_initialize(c: &mut Criterion) {
    c.bench_function("store_initialize", |b| {
        b.iter(|| {
            WeekWindowStore::new(
                black_box(today()),
                black_box(Weekday::Mon),
                black_box(sample_events(today())),
            )
        })
    });
}

/// Benchmark window extension in both directions
fn bench_window_extension(c: &mut Criterion) {
    let base = WeekWindowStore::new(today(), Weekday::Mon, sample_events(today()));

    let mut group = c.benchmark_group("window_extension");

    group.bench_function("append", |b| {
        b.iter_batched(
            || base.clone(),
            |mut store| {
                store.handle_intent(TimelineIntent::LoadNewWeeks(Direction::Future), today())
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.bench_function("prepend", |b| {
        b.iter_batched(
            || base.clone(),
            |mut store| {
                store.handle_intent(TimelineIntent::LoadNewWeeks(Direction::Past), today())
            },
            criterion::BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_generate_weeks,
    bench_initialize,
    bench_window_extension
);
criterion_main!(benches);
