//! Benchmarks for series generation and panel rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use econboard::dashboard::{format_grouped, DashboardState, MetricSelection, Tab, UploadLog};
use econboard::render::PanelView;
use econboard::series::{generate_series, ChartLayout};

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("series");

    for years in [20u32, 200, 2000] {
        group.throughput(Throughput::Elements(years as u64));

        group.bench_function(format!("generate_{}", years), |b| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| generate_series(black_box(years), 2024, &mut rng))
        });

        let points = generate_series(years, 2024, &mut StdRng::seed_from_u64(1));
        group.bench_function(format!("layout_{}", years), |b| {
            b.iter(|| {
                let layout = ChartLayout::new(black_box(&points), 800.0, 350.0);
                (0..points.len()).map(|i| layout.x(i) + layout.y(points[i].value)).sum::<f64>()
            })
        });
    }

    group.finish();
}

fn bench_formatting(c: &mut Criterion) {
    c.bench_function("format_grouped", |b| {
        b.iter(|| format_grouped(black_box(71595.3)))
    });

    let series = vec![generate_series(20, 2024, &mut StdRng::seed_from_u64(2)); 4];
    let selection = MetricSelection::new();
    let uploads = UploadLog::new();

    for tab in Tab::ALL {
        let state = DashboardState::new(tab, Default::default());
        c.bench_function(&format!("render_{}", tab), |b| {
            b.iter(|| {
                PanelView {
                    state: &state,
                    selection: &selection,
                    uploads: &uploads,
                    series: &series,
                }
                .to_string()
            })
        });
    }
}

criterion_group!(benches, bench_generation, bench_formatting);
criterion_main!(benches);
