use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_qr_gen::{ECLevel, EncodeOptions, encode_batch, encode_with};

fn bench_encode_short_url(c: &mut Criterion) {
    let url = "https://example.com/a/b?c=d";
    let options = EncodeOptions::with_level(ECLevel::M);
    c.bench_function("encode_url_m", |b| {
        b.iter(|| encode_with(black_box(url), black_box(&options)))
    });
}

fn bench_encode_numeric(c: &mut Criterion) {
    let digits = "31415926535897932384626433832795028841971693993751".repeat(4);
    let options = EncodeOptions::with_level(ECLevel::Q);
    c.bench_function("encode_numeric_200_q", |b| {
        b.iter(|| encode_with(black_box(&digits), black_box(&options)))
    });
}

fn bench_encode_large(c: &mut Criterion) {
    let text = "x".repeat(2000);
    let options = EncodeOptions::with_level(ECLevel::L);
    c.bench_function("encode_bytes_2000_l", |b| {
        b.iter(|| encode_with(black_box(&text), black_box(&options)))
    });
}

fn bench_encode_batch(c: &mut Criterion) {
    let texts: Vec<String> = (0..64).map(|i| format!("ticket-{i:05}")).collect();
    let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let options = EncodeOptions::default();
    c.bench_function("encode_batch_64", |b| {
        b.iter(|| encode_batch(black_box(&refs), black_box(&options)))
    });
}

criterion_group!(
    benches,
    bench_encode_short_url,
    bench_encode_numeric,
    bench_encode_large,
    bench_encode_batch
);
criterion_main!(benches);
