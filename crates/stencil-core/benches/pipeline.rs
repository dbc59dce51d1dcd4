//! Benchmarks for the Stencil compositing pipeline.
//!
//! Run with: cargo bench -p stencil-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};
use stencil_core::pipeline::{transform, BaseTransform, Compositor, ImageClassifier, OutputEncoding};

fn stock() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(1920, 1080, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    }))
}

fn template() -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(1080, 1080, |x, _| {
        if x < 40 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    }))
}

fn benchmark_classify(c: &mut Criterion) {
    let dir = match tempfile::tempdir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Skipping classify benchmark: {e}");
            return;
        }
    };
    let path = dir.path().join("stock.png");
    if stock().save(&path).is_err() {
        eprintln!("Skipping classify benchmark: could not write fixture");
        return;
    }

    c.bench_function("classify_header_probe", |b| {
        b.iter(|| ImageClassifier::is_image(black_box(&path)))
    });
}

fn benchmark_center_crop(c: &mut Criterion) {
    let img = stock();
    c.bench_function("center_crop_1080", |b| {
        b.iter(|| transform::center_crop(black_box(&img), 1080, 1080))
    });
}

fn benchmark_stretch(c: &mut Criterion) {
    let img = stock();
    c.bench_function("stretch_triangle_1080", |b| {
        b.iter(|| transform::stretch(black_box(&img), 1080, 1080, FilterType::Triangle))
    });
}

fn benchmark_composite_png(c: &mut Criterion) {
    let base = stock();
    let overlay = template();
    let compositor = Compositor::new(BaseTransform::CenterCrop, OutputEncoding::Png);

    c.bench_function("composite_encode_png", |b| {
        b.iter(|| compositor.composite(black_box(&base), black_box(&overlay), "bench.png"))
    });
}

fn benchmark_composite_jpeg(c: &mut Criterion) {
    let base = stock();
    let overlay = template();
    let compositor = Compositor::new(
        BaseTransform::CenterCrop,
        OutputEncoding::Jpeg { quality: 75 },
    );

    c.bench_function("composite_encode_jpeg", |b| {
        b.iter(|| compositor.composite(black_box(&base), black_box(&overlay), "bench.jpg"))
    });
}

criterion_group!(
    benches,
    benchmark_classify,
    benchmark_center_crop,
    benchmark_stretch,
    benchmark_composite_png,
    benchmark_composite_jpeg,
);
criterion_main!(benches);
