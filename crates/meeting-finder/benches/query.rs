use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use meeting_finder::{query, Event, MeetingRequest, TimeRange, DAY_LENGTH};
use std::hint::black_box;

const PEOPLE: [&str; 8] = ["ann", "ben", "cat", "dan", "eve", "fay", "gus", "hal"];

/// Deterministic calendar of `n` short events spread over the day and shared
/// between a rotating pair of attendees.
fn calendar(n: usize) -> Vec<Event> {
    (0..n)
        .map(|i| {
            let start = (i as u32 * 37) % (DAY_LENGTH - 60);
            let duration = 15 + (i as u32 * 11) % 45;
            Event::new(
                format!("event {i}"),
                TimeRange::from_start_duration(start, duration),
                [PEOPLE[i % PEOPLE.len()], PEOPLE[(i * 3 + 1) % PEOPLE.len()]],
            )
        })
        .collect()
}

fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let request = MeetingRequest::new(["ann", "ben"], 30).with_optional(["cat", "dan"]);

    for n in [10usize, 100, 1_000, 10_000] {
        let events = calendar(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &events, |b, events| {
            b.iter(|| query(black_box(events), black_box(&request)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
