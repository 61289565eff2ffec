use std::time::{Duration, Instant};

use inkstack::animation::RIPPLE_DURATION;
use inkstack::prelude::*;

const FRAME: Duration = Duration::from_millis(16);

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn nothing(_: &mut Recorder, _: Constraints) -> Size {
    Size::zero()
}

fn context(now: Instant) -> FrameContext {
    FrameContext::new(Constraints::tight(Size::new(120.0, 40.0)), now)
}

/// Run frames until the surface stops asking for one. Returns the time of the
/// first idle frame.
fn run_until_idle(surface: &mut Surface, start: Instant, limit: u32) -> Option<Instant> {
    for i in 0..limit {
        let now = start + FRAME * i;
        let frame = surface.compose(&context(now), nothing);
        surface.end_frame(now);
        if !frame.needs_redraw() {
            return Some(now);
        }
    }
    None
}

#[test]
fn test_redraws_until_ripple_settles() {
    init();
    let t0 = Instant::now();
    let mut surface = Surface::new(SurfaceStyle::button(Color::WHITE));
    surface.press(Point::new(60.0, 20.0), t0);
    assert!(surface.needs_frame());
    surface.release(t0 + Duration::from_millis(50));

    let idle = run_until_idle(&mut surface, t0, 100).expect("ripple never settled");
    let elapsed = idle - t0;
    assert!(elapsed > RIPPLE_DURATION);
    assert!(elapsed <= RIPPLE_DURATION + FRAME);
    assert!(!surface.needs_frame());
    assert!(surface.history().is_empty());
}

#[test]
fn test_held_press_keeps_full_bloom() {
    init();
    let t0 = Instant::now();
    let mut surface = Surface::new(SurfaceStyle::clickable());
    surface.press(Point::new(0.0, 0.0), t0);

    assert_eq!(run_until_idle(&mut surface, t0, 200), None);

    let late = t0 + Duration::from_secs(100);
    let frame = surface.compose(&context(late), nothing);
    assert_eq!(frame.ripples, 1);
    let flat = frame.flatten().unwrap();
    assert!((flat.quads[0].color.a - 0.7).abs() < 1e-5);

    // Releasing long after the bloom ends the ripple on the next frame.
    surface.release(late);
    let frame = surface.compose(&context(late + FRAME), nothing);
    assert!(!frame.needs_redraw());
    assert_eq!(surface.end_frame(late + FRAME), 1);
}

#[test]
fn test_overlapping_presses_decay_independently() {
    init();
    let t0 = Instant::now();
    let mut surface = Surface::new(SurfaceStyle::clickable());
    surface.press(Point::new(10.0, 10.0), t0);
    surface.release(t0 + Duration::from_millis(30));
    let t1 = t0 + Duration::from_millis(250);
    surface.press(Point::new(100.0, 30.0), t1);
    surface.release(t1 + Duration::from_millis(30));

    let both = surface.compose(&context(t1 + FRAME), nothing);
    assert_eq!(both.ripples, 2);
    assert_eq!(surface.end_frame(t1 + FRAME), 0);

    let after_first = t0 + Duration::from_millis(420);
    let one = surface.compose(&context(after_first), nothing);
    assert_eq!(one.ripples, 1);
    assert_eq!(surface.end_frame(after_first), 1);
    assert_eq!(surface.history().entries()[0].start, t1);

    let idle = run_until_idle(&mut surface, after_first, 100).expect("second ripple never settled");
    assert!(idle - t1 > RIPPLE_DURATION);
}

#[test]
fn test_frames_are_replayable() {
    init();
    let t0 = Instant::now();
    let mut history = PressHistory::new();
    history.record_press(Point::new(12.0, 8.0), t0);
    history.record_release(t0 + Duration::from_millis(90));
    let style = SurfaceStyle::button(Color::from_hex(0x6750A4));

    let now = t0 + Duration::from_millis(130);
    let a = compose(&context(now), &style, &history, nothing);
    let b = compose(&context(now), &style, &history, nothing);
    assert_eq!(a, b);
}

#[test]
fn test_cancelled_press_decays_like_a_release() {
    init();
    let t0 = Instant::now();
    let mut surface = Surface::new(SurfaceStyle::clickable());
    surface.press(Point::new(5.0, 5.0), t0);
    assert!(surface.cancel(t0 + Duration::from_millis(20)));
    assert!(!surface.release(t0 + Duration::from_millis(40)));

    let idle = run_until_idle(&mut surface, t0, 100).expect("cancelled ripple never settled");
    assert!(idle - t0 <= RIPPLE_DURATION + FRAME);
}
