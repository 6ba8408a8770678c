// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the gallery viewer driven through its messages.

use folio_lens::domain::gallery::ImageRef;
use folio_lens::ui::gallery_viewer::{Effect, Message, State};
use folio_lens::ui::state::PageEffects;
use iced::keyboard::{key::Named, Key};
use iced::{mouse, Point, Vector};

fn images(count: usize) -> Vec<ImageRef> {
    (0..count)
        .map(|i| ImageRef::new(format!("shots/{i}.png")))
        .collect()
}

fn viewer() -> (State, PageEffects) {
    let effects = PageEffects::new();
    (State::new(effects.clone()), effects)
}

fn key(named: Named) -> Message {
    Message::KeyPressed(Key::Named(named))
}

fn wheel(ticks: f32) -> Message {
    Message::Wheel(mouse::ScrollDelta::Lines { x: 0.0, y: ticks })
}

fn scale(state: &State) -> f32 {
    state.session().map(|s| s.scale().value()).unwrap_or_default()
}

#[test]
fn keyboard_walks_ten_images_and_stops_at_the_end() {
    let (mut state, effects) = viewer();
    assert_eq!(state.open_images("Demo", images(10), 0), Effect::Opened);

    for expected in 1..10 {
        assert_eq!(
            state.handle(key(Named::ArrowRight)),
            Effect::IndexChanged(expected)
        );
    }
    assert_eq!(state.current_index(), Some(9));

    assert_eq!(state.handle(key(Named::ArrowRight)), Effect::None);
    assert_eq!(state.current_index(), Some(9));

    assert_eq!(
        state.handle(key(Named::Escape)),
        Effect::Closed { last_index: 9 }
    );
    assert!(!state.is_open());
    assert_eq!(effects.scroll_lock_count(), 0);
    assert_eq!(effects.listener_count(), 0);
}

#[test]
fn next_then_previous_returns_to_the_same_image() {
    let (mut state, _effects) = viewer();
    state.open_images("Demo", images(4), 2);

    state.handle(Message::Next);
    state.handle(Message::Previous);
    assert_eq!(state.current_index(), Some(2));

    assert_eq!(state.handle(key(Named::ArrowLeft)), Effect::IndexChanged(1));
    assert_eq!(state.handle(key(Named::ArrowLeft)), Effect::IndexChanged(0));
    assert_eq!(state.handle(Message::Previous), Effect::None);
}

#[test]
fn wheel_zoom_clamps_at_max_and_reset_restores_identity() {
    let (mut state, _effects) = viewer();
    state.open_images("Demo", images(3), 0);

    for _ in 0..5 {
        state.handle(wheel(1.0));
    }
    assert!((scale(&state) - 1.5).abs() < 1e-4);

    for _ in 0..20 {
        state.handle(wheel(1.0));
    }
    assert!((scale(&state) - 3.0).abs() < f32::EPSILON);

    state.handle(Message::PointerPressed(Point::new(10.0, 10.0)));
    state.handle(Message::PointerMoved(Point::new(40.0, 30.0)));
    state.handle(Message::PointerReleased);
    let panned = state.session().map(|s| s.pan()).unwrap_or(Vector::ZERO);
    assert_ne!(panned, Vector::ZERO);

    state.handle(Message::ResetZoom);
    let session = state.session().expect("viewer is open");
    assert!((session.scale().value() - 1.0).abs() < f32::EPSILON);
    assert_eq!(session.pan(), Vector::ZERO);
}

#[test]
fn wheel_zoom_out_stops_at_min() {
    let (mut state, _effects) = viewer();
    state.open_images("Demo", images(1), 0);

    for _ in 0..20 {
        state.handle(wheel(-1.0));
    }
    assert!((scale(&state) - 0.5).abs() < f32::EPSILON);
}

#[test]
fn changing_image_resets_the_view() {
    let (mut state, _effects) = viewer();
    state.open_images("Demo", images(3), 0);
    state.handle(Message::ZoomIn);
    assert!(scale(&state) > 1.0);

    state.handle(Message::Next);
    let session = state.session().expect("viewer is open");
    assert!((session.scale().value() - 1.0).abs() < f32::EPSILON);
    assert_eq!(session.pan(), Vector::ZERO);
}

#[test]
fn every_close_path_releases_page_effects() {
    let closers = [
        Message::Close,
        Message::BackdropPressed,
        key(Named::Escape),
    ];

    for closer in closers {
        let (mut state, effects) = viewer();
        state.open_images("Demo", images(3), 1);
        assert_eq!(effects.scroll_lock_count(), 1);
        assert_eq!(effects.listener_count(), 1);

        assert_eq!(state.handle(closer), Effect::Closed { last_index: 1 });
        assert_eq!(effects.scroll_lock_count(), 0);
        assert_eq!(effects.listener_count(), 0);
    }
}

#[test]
fn dropping_an_open_viewer_releases_page_effects() {
    let (mut state, effects) = viewer();
    state.open_images("Demo", images(3), 0);
    assert!(effects.is_scroll_locked());

    drop(state);
    assert_eq!(effects.scroll_lock_count(), 0);
    assert_eq!(effects.listener_count(), 0);
}

#[test]
fn reopening_never_stacks_page_effects() {
    let (mut state, effects) = viewer();
    state.open_images("First", images(2), 0);
    state.open_images("Second", images(5), 4);

    assert_eq!(effects.scroll_lock_count(), 1);
    assert_eq!(effects.listener_count(), 1);
    assert_eq!(state.current_index(), Some(4));
}

#[test]
fn empty_or_out_of_range_open_is_rejected() {
    let (mut state, effects) = viewer();

    assert_eq!(state.open_images("Empty", Vec::new(), 0), Effect::None);
    assert_eq!(state.open_images("Short", images(2), 2), Effect::None);
    assert!(!state.is_open());
    assert_eq!(effects.scroll_lock_count(), 0);
}

#[test]
fn backdrop_close_can_be_disabled() {
    let effects = PageEffects::new();
    let mut state = State::new(effects.clone()).with_close_on_backdrop(false);
    state.open_images("Demo", images(2), 0);

    assert_eq!(state.handle(Message::BackdropPressed), Effect::None);
    assert!(state.is_open());
    assert_eq!(state.handle(Message::Close), Effect::Closed { last_index: 0 });
}
