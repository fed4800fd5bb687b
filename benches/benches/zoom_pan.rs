// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_zoom_pan::{ViewerInput, ZoomPanController};

fn bench_pinch_pan(c: &mut Criterion) {
    let content = Size::new(1080.0, 1920.0);
    let mut group = c.benchmark_group("zoom_pan");

    group.bench_function("pinch_update_focal_1024", |b| {
        b.iter(|| {
            let mut viewer = ZoomPanController::new(content);
            viewer.pinch_begin();
            for i in 0..1_024 {
                let factor = 0.5 + f64::from(i) / 256.0;
                let focal = Point::new(f64::from(i % 1_080), f64::from(i % 1_920));
                black_box(viewer.pinch_update(factor, Some(focal)));
            }
            viewer.pinch_end()
        });
    });

    group.bench_function("handle_stream_1024", |b| {
        b.iter(|| {
            let mut viewer = ZoomPanController::new(content);
            viewer.handle(ViewerInput::Down {
                position: Point::new(540.0, 960.0),
                time_ms: 0,
            });
            viewer.handle(ViewerInput::Pinch {
                factor: 3.0,
                focal: None,
            });
            viewer.handle(ViewerInput::Up {
                position: Point::new(540.0, 960.0),
                time_ms: 300,
            });
            viewer.handle(ViewerInput::Down {
                position: Point::new(540.0, 960.0),
                time_ms: 1_000,
            });
            for i in 0..1_024 {
                let t = f64::from(i);
                black_box(viewer.handle(ViewerInput::Pan {
                    translation: Vec2::new(t * 2.0, -t * 1.5),
                }));
            }
            viewer.handle(ViewerInput::Cancel)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pinch_pan);
criterion_main!(benches);
