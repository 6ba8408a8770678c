// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the gallery viewer and image pipeline.
//!
//! Measures the performance of:
//! - Keyboard navigation through an open gallery
//! - Wheel zoom and drag pan on the current image
//! - Decoding a built-in screenshot

use criterion::{criterion_group, criterion_main, Criterion};
use folio_lens::content::ContentRoot;
use folio_lens::domain::gallery::ImageRef;
use folio_lens::media;
use folio_lens::ui::gallery_viewer::{Message, State};
use folio_lens::ui::state::PageEffects;
use iced::keyboard::{key::Named, Key};
use iced::{mouse, Point};
use std::hint::black_box;

fn images(count: usize) -> Vec<ImageRef> {
    (0..count)
        .map(|i| ImageRef::new(format!("shots/{i}.png")))
        .collect()
}

/// Walks a 100 image gallery end to end and back.
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("arrow_keys_round_trip", |b| {
        let mut state = State::new(PageEffects::new());
        state.open_images("Bench", images(100), 0);
        b.iter(|| {
            for _ in 0..99 {
                black_box(state.handle(Message::KeyPressed(Key::Named(Named::ArrowRight))));
            }
            for _ in 0..99 {
                black_box(state.handle(Message::KeyPressed(Key::Named(Named::ArrowLeft))));
            }
        });
    });

    group.bench_function("open_close", |b| {
        let mut state = State::new(PageEffects::new());
        let gallery = images(10);
        b.iter(|| {
            black_box(state.open_images("Bench", gallery.iter().cloned(), 3));
            black_box(state.handle(Message::Close));
        });
    });

    group.finish();
}

/// Zooms in, drags around, and resets.
fn bench_zoom_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    group.bench_function("wheel_zoom_and_drag", |b| {
        let mut state = State::new(PageEffects::new());
        state.open_images("Bench", images(3), 0);
        b.iter(|| {
            for _ in 0..10 {
                state.handle(Message::Wheel(mouse::ScrollDelta::Lines { x: 0.0, y: 1.0 }));
            }
            state.handle(Message::PointerPressed(Point::new(0.0, 0.0)));
            for step in 0..50 {
                let offset = step as f32;
                state.handle(Message::PointerMoved(Point::new(offset, offset / 2.0)));
            }
            state.handle(Message::PointerReleased);
            black_box(state.session().map(|session| session.pan()));
            state.handle(Message::ResetZoom);
        });
    });

    group.finish();
}

/// Decodes a built-in screenshot, as the app does before showing it.
fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let bytes = ContentRoot::Builtin
        .read("shots/kpi-1.png")
        .expect("built-in screenshot exists");

    group.bench_function("decode_screenshot", |b| {
        b.iter(|| black_box(media::decode(black_box(&bytes)).expect("screenshot decodes")));
    });

    group.finish();
}

criterion_group!(benches, bench_navigate, bench_zoom_pan, bench_decode);
criterion_main!(benches);
