//! Resize benchmarks.
//!
//! Run with `cargo bench --bench resize`; add `--features parallel` to compare
//! the rayon passes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use resampler::{fit, resize, thumbnail, Image, ResampleFilter, WeightTable};

fn gradient_image(width: u32, height: u32) -> Image {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = ((x * 255) / width) as u8;
            let g = ((y * 255) / height) as u8;
            let b = (((x + y) * 127) / (width + height)) as u8;
            pixels.extend_from_slice(&[r, g, b, 255]);
        }
    }
    Image::from_raw(width, height, pixels).unwrap()
}

fn bench_filters(c: &mut Criterion) {
    let src = gradient_image(1024, 768);
    let filters = [
        ("nearest", ResampleFilter::NEAREST_NEIGHBOR),
        ("box", ResampleFilter::BOX),
        ("linear", ResampleFilter::LINEAR),
        ("catmull_rom", ResampleFilter::CATMULL_ROM),
        ("lanczos", ResampleFilter::LANCZOS),
    ];

    let mut group = c.benchmark_group("resize_downscale");
    group.throughput(Throughput::Elements(1024 * 768));
    for (name, filter) in filters {
        group.bench_with_input(BenchmarkId::new(name, "1024x768->256x192"), &src, |b, src| {
            b.iter(|| black_box(resize(black_box(src), 256, 192, filter).unwrap()));
        });
    }
    group.finish();

    let small = gradient_image(128, 96);
    let mut group = c.benchmark_group("resize_upscale");
    group.throughput(Throughput::Elements(512 * 384));
    for (name, filter) in filters {
        group.bench_with_input(BenchmarkId::new(name, "128x96->512x384"), &small, |b, src| {
            b.iter(|| black_box(resize(black_box(src), 512, 384, filter).unwrap()));
        });
    }
    group.finish();
}

fn bench_policies(c: &mut Criterion) {
    let src = gradient_image(1920, 1080);

    let mut group = c.benchmark_group("policies");
    group.bench_function("fit_800x600", |b| {
        b.iter(|| black_box(fit(black_box(&src), 800, 600, ResampleFilter::LINEAR).unwrap()));
    });
    group.bench_function("thumbnail_128x128", |b| {
        b.iter(|| {
            black_box(thumbnail(black_box(&src), 128, 128, ResampleFilter::LANCZOS).unwrap())
        });
    });
    group.finish();
}

fn bench_weight_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_table");
    for (src_len, dst_len) in [(4000, 500), (500, 4000)] {
        group.bench_function(format!("lanczos_{src_len}->{dst_len}"), |b| {
            b.iter(|| {
                black_box(WeightTable::build(
                    black_box(src_len),
                    dst_len,
                    &ResampleFilter::LANCZOS,
                ))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_filters, bench_policies, bench_weight_tables);
criterion_main!(benches);
