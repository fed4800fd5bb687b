// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_crop::{CropEditor, CropRect, ImageBounds, Zone, classify, resolve, to_source};
use understory_event_state::drag::DragState;

const MIN: Size = Size::new(60.0, 60.0);

fn bounds() -> ImageBounds {
    ImageBounds::fit(Size::new(1280.0, 800.0), Size::new(6000.0, 4000.0))
}

/// A zig-zag pointer path that overshoots the image on every other step.
fn deltas(len: usize) -> Vec<Vec2> {
    (0..len)
        .map(|i| {
            let t = i as f64;
            let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
            Vec2::new(sign * t * 3.5, (t * 0.37).sin() * 900.0)
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop/resolve");
    let b = bounds();
    let start = CropRect::new(100.0, 200.0, 400.0, 300.0);

    for len in [64usize, 1_024] {
        let path = deltas(len);
        group.throughput(Throughput::Elements(len as u64));
        for zone in [Zone::TopLeft, Zone::CenterRight, Zone::Center] {
            group.bench_with_input(
                BenchmarkId::new(format!("{zone:?}"), len),
                &path,
                |bench, path| {
                    bench.iter(|| {
                        for &delta in path {
                            black_box(resolve(zone, start, delta, b, MIN));
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_classify_and_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("crop/classify_map");
    let b = bounds();
    let rect = CropRect::new(100.0, 200.0, 400.0, 300.0);
    let pointers: Vec<Point> = (0..256)
        .map(|i| Point::new(150.0 + f64::from(i % 16) * 28.0, 80.0 + f64::from(i / 16) * 22.0))
        .collect();

    group.throughput(Throughput::Elements(pointers.len() as u64));
    group.bench_function("classify", |bench| {
        bench.iter(|| {
            for &p in &pointers {
                black_box(classify(p, rect, Vec2::ZERO));
            }
        });
    });
    group.bench_function("to_source", |bench| {
        bench.iter(|| black_box(to_source(black_box(rect), b)));
    });

    group.finish();
}

fn bench_editor_stream(c: &mut Criterion) {
    let path = deltas(256);
    c.bench_function("crop/editor_drag_256", |bench| {
        bench.iter(|| {
            let mut editor = CropEditor::default();
            editor.set_image(bounds());
            let mut drag = DragState::default();
            let origin = Point::new(1.0, 1.0);
            editor.handle(drag.begin(origin));
            for &delta in &path {
                if let Some(event) = drag.update(origin + delta) {
                    black_box(editor.handle(event));
                }
            }
            if let Some(event) = drag.end(origin) {
                editor.handle(event);
            }
            black_box(editor.rectangle())
        });
    });
}

criterion_group!(
    benches,
    bench_resolve,
    bench_classify_and_map,
    bench_editor_stream
);
criterion_main!(benches);
