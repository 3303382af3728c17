//! Benchmarks for the click-to-request path and log stamping
//!
//! Run with: cargo bench

use chrono::Local;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use photobook::diagnostics::{format_timestamp, zero_pad};
use photobook::dispatch::{ClickTarget, CommandCode, Payload};
use photobook::protocol::MenuResponse;
use photobook::render::{MenuLayout, ResponseRenderer, VirtualDom};

fn bench_command(c: &mut Criterion) {
    let mut group = c.benchmark_group("command");

    let targets: Vec<ClickTarget> = ["person", "edit", "refresh", "delete", "photo_album"]
        .into_iter()
        .map(|text| ClickTarget::new("I").with_text(text))
        .chain(std::iter::once(ClickTarget::new("TD").with_text("alice")))
        .collect();

    group.throughput(Throughput::Elements(targets.len() as u64));

    group.bench_function("derive", |b| {
        b.iter(|| {
            for target in &targets {
                black_box(CommandCode::derive(black_box(target)));
            }
        })
    });

    group.bench_function("encode_payload", |b| {
        b.iter(|| {
            for target in &targets {
                black_box(Payload::icon_action(CommandCode::derive(target)).encode());
            }
        })
    });

    group.finish();
}

fn bench_stamp(c: &mut Criterion) {
    let mut group = c.benchmark_group("stamp");

    group.bench_function("zero_pad", |b| {
        b.iter(|| zero_pad(black_box(7), black_box(3)))
    });

    let now = Local::now();
    group.bench_function("format_timestamp", |b| {
        b.iter(|| format_timestamp(black_box(&now)))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [4, 32, 256] {
        let labels: Vec<String> = (0..size).map(|i| format!("Album {}", i)).collect();
        let menus = MenuResponse::from_labels(labels.clone(), labels);

        group.throughput(Throughput::Elements(size as u64 * 2));

        group.bench_function(format!("menus_{}", size), |b| {
            b.iter(|| {
                let layout = MenuLayout::default();
                let dom = VirtualDom::with_mounts([&layout.left_mount_id, &layout.right_mount_id]);
                let renderer = ResponseRenderer::new(dom, layout);
                renderer.render_menus(black_box(&menus)).unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_command, bench_stamp, bench_render);
criterion_main!(benches);
