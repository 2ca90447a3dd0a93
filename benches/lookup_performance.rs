// benches/lookup_performance.rs
//! Benchmarks for ntstatus_erref lookups.
//!
//! Measures lookup latency across the catalog and tracks allocations per
//! iteration with stats_alloc. The accessors are expected to allocate nothing;
//! `zero_allocation_benches` fails loudly if they do.

use criterion::{BenchmarkId, Bencher, Criterion, black_box, criterion_group, criterion_main};
use ntstatus_erref::{ENTRIES, NtStatus, StatusLog, aliases, definitions, error, name};
use std::fmt::Write as _;

// ============================================================================
// Allocation Tracking with stats_alloc
// ============================================================================

use stats_alloc::{INSTRUMENTED_SYSTEM, Region, StatsAlloc};
use std::alloc::System;

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

/// Allocation counters for a single iteration
#[derive(Debug, Clone, Copy, Default)]
struct MemStats {
    allocated: usize,
    alloc_count: usize,
}

impl MemStats {
    fn from_region(start: &stats_alloc::Stats, end: &stats_alloc::Stats) -> Self {
        Self {
            allocated: end.bytes_allocated.saturating_sub(start.bytes_allocated),
            alloc_count: end.allocations.saturating_sub(start.allocations),
        }
    }

    fn worst(stats: &[MemStats]) -> Self {
        stats.iter().fold(Self::default(), |acc, s| Self {
            allocated: acc.allocated.max(s.allocated),
            alloc_count: acc.alloc_count.max(s.alloc_count),
        })
    }

    fn print(&self, label: &str) {
        println!(
            "\n┌─ Memory: {} ─────────────────────────────────\n\
             │ Worst iteration: {:>6} bytes  ({} allocs)\n\
             └────────────────────────────────────────────────────────",
            label, self.allocated, self.alloc_count
        );
    }
}

thread_local! {
    static MEM_STATS: std::cell::RefCell<Vec<MemStats>> = const { std::cell::RefCell::new(Vec::new()) };
}

/// Run `f` under criterion while recording allocations per iteration.
///
/// Returns the worst iteration seen.
fn bench_with_mem<F>(b: &mut Bencher<'_>, label: &str, mut f: F) -> MemStats
where
    F: FnMut(),
{
    MEM_STATS.with(|stats| stats.borrow_mut().clear());

    b.iter(|| {
        let region = Region::new(&GLOBAL);
        let start = region.change();

        f();

        let end = region.change();
        let mem_stat = MemStats::from_region(&start, &end);
        MEM_STATS.with(|stats| stats.borrow_mut().push(mem_stat));
    });

    let worst = MEM_STATS.with(|stats| MemStats::worst(&stats.borrow()));
    worst.print(label);
    worst
}

/// A fixed spread of inputs: first, middle and last rows plus a miss.
fn sample_codes() -> [(&'static str, NtStatus); 4] {
    [
        ("first", ENTRIES[0].status()),
        ("middle", ENTRIES[ENTRIES.len() / 2].status()),
        ("last", ENTRIES[ENTRIES.len() - 1].status()),
        ("unknown", NtStatus::new(0xDEAD_BEEF)),
    ]
}

// ============================================================================
// LOOKUP BENCHMARKS
// ============================================================================

fn bench_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("name");
    for (label, status) in sample_codes() {
        group.bench_with_input(BenchmarkId::from_parameter(label), &status, |b, &status| {
            b.iter(|| black_box(name(black_box(status))))
        });
    }
    group.finish();
}

fn bench_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("error");
    for (label, status) in sample_codes() {
        group.bench_with_input(BenchmarkId::from_parameter(label), &status, |b, &status| {
            b.iter(|| black_box(error(black_box(status))))
        });
    }
    group.finish();
}

fn bench_full_catalog_sweep(c: &mut Criterion) {
    c.bench_function("sweep_all_entries", |b| {
        b.iter(|| {
            for entry in ENTRIES {
                black_box(error(black_box(entry.status())));
            }
        })
    });
}

fn bench_aliases(c: &mut Criterion) {
    c.bench_function("aliases_with_alternate", |b| {
        b.iter(|| black_box(aliases(black_box(definitions::FWP_TOO_MANY_BOOTTIME_FILTERS))))
    });
}

// ============================================================================
// FORMATTING BENCHMARKS
// ============================================================================

fn bench_display(c: &mut Criterion) {
    let err = error(definitions::ACCESS_DENIED)
        .failure()
        .expect("ACCESS_DENIED is catalogued");
    let mut buffer = String::with_capacity(256);

    c.bench_function("error_display_into_buffer", |b| {
        b.iter(|| {
            buffer.clear();
            write!(buffer, "{}", black_box(&err)).expect("String write");
            black_box(buffer.len());
        })
    });
}

fn bench_log_line(c: &mut Criterion) {
    let mut buffer = String::with_capacity(512);

    c.bench_function("status_log_write_to", |b| {
        b.iter(|| {
            buffer.clear();
            StatusLog::from_status(black_box(definitions::OBJECT_NAME_NOT_FOUND))
                .write_to(&mut buffer)
                .expect("String write");
            black_box(buffer.len());
        })
    });
}

// ============================================================================
// ALLOCATION BENCHMARKS
// ============================================================================

fn bench_zero_allocation_path(c: &mut Criterion) {
    let mut worst = MemStats::default();
    c.bench_function("zero_allocation_lookups", |b| {
        worst = bench_with_mem(b, "name + error + aliases", || {
            for (_, status) in sample_codes() {
                black_box(name(status));
                black_box(error(status));
                black_box(aliases(status));
            }
        })
    });
    assert_eq!(worst.alloc_count, 0, "lookups allocated: {worst:?}");

    let mut buffer = String::with_capacity(512);
    c.bench_function("zero_allocation_log_line", |b| {
        worst = bench_with_mem(b, "StatusLog::write_to (pre-sized buffer)", || {
            buffer.clear();
            StatusLog::from_status(definitions::ACCESS_DENIED)
                .write_to(&mut buffer)
                .expect("String write");
        })
    });
    assert_eq!(worst.alloc_count, 0, "log line allocated: {worst:?}");
}

// ============================================================================
// BENCHMARK GROUPS
// ============================================================================

criterion_group!(
    lookup_benches,
    bench_name,
    bench_error,
    bench_full_catalog_sweep,
    bench_aliases,
);

criterion_group!(formatting_benches, bench_display, bench_log_line);

criterion_group!(zero_allocation_benches, bench_zero_allocation_path);

criterion_main!(lookup_benches, formatting_benches, zero_allocation_benches);
