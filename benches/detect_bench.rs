use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sheetio_service::{
    detect_date, detect_float, detect_int, infer_cell, to_date, to_time, DetectOptions,
};

fn bench_detectors(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");

    group.bench_function("int_plain", |b| b.iter(|| detect_int(black_box("14325"))));

    group.bench_function("int_grouped", |b| {
        b.iter(|| detect_int(black_box("1,234,567")))
    });

    group.bench_function("float", |b| b.iter(|| detect_float(black_box("3.14159"))));

    group.bench_function("date", |b| b.iter(|| detect_date(black_box("2017-03-21"))));

    group.bench_function("datetime_fraction", |b| {
        b.iter(|| detect_date(black_box("2017-03-21 08:15:00.250000")))
    });

    group.finish();
}

fn bench_converters(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    group.bench_function("date", |b| {
        b.iter(|| to_date(black_box("2014-12-25T11:11:11")))
    });

    group.bench_function("time", |b| b.iter(|| to_time(black_box("PT05H30M00S"))));

    group.bench_function("duration", |b| {
        b.iter(|| to_time(black_box("PT30H00M00S")))
    });

    group.finish();
}

fn bench_infer_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer_rows");
    let options = DetectOptions::default();
    let row = [
        "42",
        "1,024",
        "3.5",
        "2021-11-05",
        "2021-11-05 23:59:01",
        "014325",
        "hello",
    ];

    for size in &[10, 100, 1000] {
        let cells: Vec<&str> = row.iter().copied().cycle().take(*size).collect();
        group.bench_with_input(BenchmarkId::new("cells", size), size, |b, _| {
            b.iter(|| {
                for cell in &cells {
                    black_box(infer_cell(black_box(cell), &options));
                }
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_detectors, bench_converters, bench_infer_rows);
criterion_main!(benches);
