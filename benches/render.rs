use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_gen::tools::{to_png_bytes, to_svg_string};
use rust_qr_gen::{Color, RenderOptions, encode, render};

fn bench_render_300(c: &mut Criterion) {
    let code = encode("https://example.com/render").expect("encodes");
    let options = RenderOptions::default();
    c.bench_function("render_300px", |b| {
        b.iter(|| render(black_box(&code.modules), black_box(&options)))
    });
}

fn bench_render_1024(c: &mut Criterion) {
    let code = encode("https://example.com/render").expect("encodes");
    let options = RenderOptions {
        size: 1024,
        ..RenderOptions::default()
    };
    c.bench_function("render_1024px", |b| {
        b.iter(|| render(black_box(&code.modules), black_box(&options)))
    });
}

fn bench_png_bytes(c: &mut Criterion) {
    let code = encode("https://example.com/render").expect("encodes");
    let image = render(&code.modules, &RenderOptions::default()).expect("renders");
    c.bench_function("png_bytes_300px", |b| {
        b.iter(|| to_png_bytes(black_box(&image)))
    });
}

fn bench_svg(c: &mut Criterion) {
    let code = encode("https://example.com/render").expect("encodes");
    c.bench_function("svg_string", |b| {
        b.iter(|| {
            to_svg_string(black_box(&code.modules), 4, Color::BLACK, Color::WHITE)
        })
    });
}

criterion_group!(
    benches,
    bench_render_300,
    bench_render_1024,
    bench_png_bytes,
    bench_svg
);
criterion_main!(benches);
