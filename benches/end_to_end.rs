use clap::Parser;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stream_wc::args::Args;
use stream_wc_engine::processor::process;

fn sample_text() -> String {
    "lorem ipsum dolor sit amet, 日本語のテキスト 😀\n\tconsectetur  adipiscing\n".repeat(4096)
}

fn benchmark_process(c: &mut Criterion) {
    let text = sample_text();
    for size in [64usize, 4 * 1024, 64 * 1024] {
        c.bench_function(&format!("process_chunk_{size}"), |b| {
            b.iter(|| process(black_box(text.as_bytes()), size).unwrap());
        });
    }
}

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["stream_wc", "-lw", "a.txt"])).unwrap();
            black_box(args);
        })
    });
}

criterion_group!(benches, benchmark_process, benchmark_cli_parsing);
criterion_main!(benches);
