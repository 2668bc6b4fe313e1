use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use setup_banner::banner::Banner;
use setup_banner::style::palette::Palette;
use setup_banner::style::style;

/// Benchmark styling across text lengths
fn bench_style(c: &mut Criterion) {
    let mut group = c.benchmark_group("style");

    for len in [0usize, 32, 1024, 64 * 1024] {
        let text = "x".repeat(len);
        group.bench_with_input(BenchmarkId::new("plain_text", len), &text, |b, text| {
            b.iter(|| black_box(style(black_box(text), "\x1b[1;34m")));
        });
    }

    group.finish();
}

/// Benchmark rendering the default banner from the built-in palette
fn bench_banner(c: &mut Criterion) {
    let palette = Palette::builtin();
    let banner = Banner::default();

    c.bench_function("banner_render", |b| {
        b.iter(|| black_box(banner.render(black_box(&palette))));
    });
}

criterion_group!(benches, bench_style, bench_banner);
criterion_main!(benches);
