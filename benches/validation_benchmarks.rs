//! Performance benchmarks for the Payroll Validator.
//!
//! Covers:
//! - CSV loading
//! - Full validation (rules and metrics) at increasing dataset sizes
//! - Error report export
//! - The `/validate` endpoint end to end
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use payroll_validator::api::{AppState, create_router};
use payroll_validator::loader::DatasetLoader;
use payroll_validator::report::error_report_bytes;
use payroll_validator::validation::ValidationEngine;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Builds a payroll CSV with roughly 5% negative hours, 2% negative net pay,
/// and 1% repeated IDs.
fn create_payroll_csv(records: usize) -> String {
    let mut csv =
        String::from("Employee ID,Employee Name,Hours Worked,Hourly Rate,Gross Pay,Tax,Net Pay\n");
    for i in 0..records {
        let id = if i % 100 == 99 { i - 1 } else { i };
        let hours = if i % 20 == 0 { -4 } else { 30 + (i % 15) as i64 };
        let gross = hours * 30;
        let tax = gross / 5;
        let net = if i % 50 == 0 { -120 } else { gross - tax };
        csv.push_str(&format!(
            "E{id:06},Employee {i},{hours},30.00,{gross}.00,{tax}.00,{net}.00\n"
        ));
    }
    csv
}

/// Benchmark: Loading CSV text into a dataset.
fn bench_load(c: &mut Criterion) {
    let csv = create_payroll_csv(10_000);

    let mut group = c.benchmark_group("load");
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("load_10k", |b| {
        b.iter(|| black_box(DatasetLoader::load_str(black_box(&csv)).unwrap()))
    });
    group.finish();
}

/// Benchmark: Validation scaling with dataset size.
fn bench_validate(c: &mut Criterion) {
    let engine = ValidationEngine::default();

    let mut group = c.benchmark_group("validate");
    for records in [1_000usize, 10_000, 100_000] {
        let dataset = DatasetLoader::load_str(&create_payroll_csv(records)).unwrap();

        group.throughput(Throughput::Elements(records as u64));
        if records >= 100_000 {
            group.sample_size(10);
        }
        group.bench_with_input(BenchmarkId::new("records", records), &dataset, |b, dataset| {
            b.iter(|| black_box(engine.validate(black_box(dataset))))
        });
    }
    group.finish();
}

/// Benchmark: Writing the error report for a 10k-record dataset.
fn bench_export(c: &mut Criterion) {
    let dataset = DatasetLoader::load_str(&create_payroll_csv(10_000)).unwrap();
    let outcome = ValidationEngine::default().validate(&dataset);

    c.bench_function("export_10k", |b| {
        b.iter(|| black_box(error_report_bytes(black_box(&outcome.details)).unwrap()))
    });
}

/// Benchmark: `POST /validate` with 1k records.
fn bench_api_validate(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(AppState::default());
    let body = create_payroll_csv(1_000);

    c.bench_function("api_validate_1k", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/validate")
                        .header("Content-Type", "text/csv")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_load,
    bench_validate,
    bench_export,
    bench_api_validate,
);
criterion_main!(benches);
