//! Per-surface record of press events.
//!
//! Input routing writes into a [`PressHistory`] through [`PressHistory::record_press`]
//! and [`PressHistory::record_release`]; the compositor only reads it. Entries
//! are removed solely by [`PressHistory::prune`], after the frame that showed
//! their last decayed state.

use std::time::{Duration, Instant};

use crate::animation::RippleConfig;
use crate::error::{InvariantResult, InvariantViolation};
use crate::geometry::Point;

/// A single press on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Press {
    /// Press position in surface coordinates
    pub position: Point,
    /// When the pointer went down
    pub start: Instant,
    /// When the pointer went up (or the press was cancelled)
    pub end: Option<Instant>,
}

impl Press {
    /// Create an in-progress press.
    pub fn new(position: Point, start: Instant) -> Self {
        Self {
            position,
            start,
            end: None,
        }
    }

    /// Whether the pointer is still down.
    pub fn is_held(&self) -> bool {
        self.end.is_none()
    }

    pub fn is_released(&self) -> bool {
        self.end.is_some()
    }

    /// How long the press was held, if it has ended.
    pub fn held_for(&self) -> Option<Duration> {
        self.end.map(|end| end.saturating_duration_since(self.start))
    }
}

/// Chronological press history of one interactive surface.
///
/// Only the most recent entry may still be in progress.
#[derive(Debug, Clone, Default)]
pub struct PressHistory {
    presses: Vec<Press>,
    ripple: RippleConfig,
}

impl PressHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History whose decay follows a custom ripple configuration.
    pub fn with_config(ripple: RippleConfig) -> Self {
        Self {
            presses: Vec::new(),
            ripple,
        }
    }

    /// The ripple configuration deciding when entries decay.
    pub fn config(&self) -> &RippleConfig {
        &self.ripple
    }

    pub fn duration(&self) -> Duration {
        self.ripple.duration
    }

    /// Record a press-down.
    ///
    /// # Panics
    ///
    /// Panics if another press is still in progress: a surface tracks a single
    /// pointer at a time.
    pub fn record_press(&mut self, position: Point, now: Instant) {
        if let Err(violation) = self.try_record_press(position, now) {
            panic!("{violation}");
        }
    }

    /// Fallible form of [`PressHistory::record_press`].
    pub fn try_record_press(&mut self, position: Point, now: Instant) -> InvariantResult<()> {
        if let Some(held) = self.presses.iter().find(|p| p.is_held()) {
            return Err(InvariantViolation::PressInProgress {
                started: held.start,
            });
        }
        log::debug!("press at ({}, {})", position.x, position.y);
        self.presses.push(Press::new(position, now));
        Ok(())
    }

    /// Record a press-up. Returns `false` when there was no press to end.
    pub fn record_release(&mut self, now: Instant) -> bool {
        match self.end_current(now) {
            Some(held_for) => {
                log::debug!("release after {:?}", held_for);
                true
            }
            None => {
                log::debug!("release without an in-progress press ignored");
                false
            }
        }
    }

    /// End the in-progress press because input routing gave the pointer to
    /// someone else. Returns `false` when there was nothing to cancel.
    pub fn cancel(&mut self, now: Instant) -> bool {
        let cancelled = self.end_current(now).is_some();
        if cancelled {
            log::debug!("in-progress press cancelled");
        }
        cancelled
    }

    fn end_current(&mut self, now: Instant) -> Option<Duration> {
        let press = self.presses.last_mut().filter(|p| p.is_held())?;
        press.end = Some(now);
        press.held_for()
    }

    /// Presses whose ripple is still visible at `now`, oldest first.
    pub fn visible_entries(&self, now: Instant) -> impl Iterator<Item = &Press> + '_ {
        self.presses
            .iter()
            .filter(move |press| !self.ripple.is_expired(press, now))
    }

    /// Drop presses whose ripple has fully decayed at `now`.
    ///
    /// Call after rendering the frame for `now`. Uses the same predicate as
    /// [`PressHistory::visible_entries`], so nothing visible at `now` is removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.presses.len();
        let ripple = &self.ripple;
        self.presses.retain(|press| !ripple.is_expired(press, now));
        let removed = before - self.presses.len();
        if removed > 0 {
            log::debug!("pruned {} decayed presses, {} left", removed, self.presses.len());
        }
        removed
    }

    /// All recorded presses, oldest first.
    pub fn entries(&self) -> &[Press] {
        &self.presses
    }

    pub fn len(&self) -> usize {
        self.presses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presses.is_empty()
    }

    /// Whether a press is currently in progress.
    pub fn is_pressed(&self) -> bool {
        self.presses.last().is_some_and(Press::is_held)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::RIPPLE_DURATION;

    fn origin() -> Point {
        Point::new(5.0, 5.0)
    }

    #[test]
    fn test_record_press_and_release() {
        let t0 = Instant::now();
        let mut history = PressHistory::new();
        history.record_press(origin(), t0);
        assert!(history.is_pressed());

        assert!(history.record_release(t0 + Duration::from_millis(80)));
        assert!(!history.is_pressed());
        assert_eq!(history.len(), 1);
        assert_eq!(
            history.entries()[0].held_for(),
            Some(Duration::from_millis(80))
        );
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let t0 = Instant::now();
        let mut history = PressHistory::new();
        assert!(!history.record_release(t0));
        assert!(history.is_empty());

        history.record_press(origin(), t0);
        history.record_release(t0);
        let before = history.entries().to_vec();
        assert!(!history.record_release(t0 + Duration::from_millis(10)));
        assert_eq!(history.entries(), before.as_slice());
    }

    #[test]
    fn test_second_press_while_held_is_rejected() {
        let t0 = Instant::now();
        let mut history = PressHistory::new();
        history.record_press(origin(), t0);
        let err = history
            .try_record_press(origin(), t0 + Duration::from_millis(5))
            .unwrap_err();
        assert_eq!(err, InvariantViolation::PressInProgress { started: t0 });
        assert_eq!(history.len(), 1);
    }

    #[test]
    #[should_panic(expected = "still in progress")]
    fn test_second_press_while_held_panics() {
        let t0 = Instant::now();
        let mut history = PressHistory::new();
        history.record_press(origin(), t0);
        history.record_press(origin(), t0);
    }

    #[test]
    fn test_cancel_then_release() {
        let t0 = Instant::now();
        let mut history = PressHistory::new();
        history.record_press(origin(), t0);
        assert!(history.cancel(t0 + Duration::from_millis(30)));
        assert!(!history.record_release(t0 + Duration::from_millis(60)));
        assert_eq!(history.entries()[0].end, Some(t0 + Duration::from_millis(30)));
        assert!(!history.cancel(t0 + Duration::from_millis(90)));
    }

    #[test]
    fn test_visible_entries_round_trip() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(100);
        let mut history = PressHistory::new();
        history.record_press(origin(), t0);
        history.record_release(t1);

        let now = t1 + RIPPLE_DURATION / 2;
        let visible: Vec<_> = history.visible_entries(now).collect();
        assert_eq!(visible.len(), 1);
        // Restartable and non-mutating
        assert_eq!(history.visible_entries(now).count(), 1);
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_held_press_stays_visible() {
        let t0 = Instant::now();
        let mut history = PressHistory::new();
        history.record_press(origin(), t0);
        let later = t0 + Duration::from_secs(100);
        assert_eq!(history.visible_entries(later).count(), 1);
        assert_eq!(history.prune(later), 0);
    }

    #[test]
    fn test_overlapping_presses_expire_independently() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_millis(300);
        let mut history = PressHistory::new();
        history.record_press(Point::new(1.0, 1.0), t0);
        history.record_release(t0 + Duration::from_millis(50));
        history.record_press(Point::new(9.0, 9.0), t1);
        history.record_release(t1 + Duration::from_millis(50));

        assert_eq!(history.visible_entries(t1).count(), 2);

        // First press is past its duration, second is not.
        let now = t0 + Duration::from_millis(500);
        let visible: Vec<_> = history.visible_entries(now).copied().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].start, t1);

        assert_eq!(history.prune(now), 1);
        assert_eq!(history.entries(), visible.as_slice());
    }

    #[test]
    fn test_prune_never_removes_visible_entries() {
        let t0 = Instant::now();
        let mut history = PressHistory::new();
        for i in 0..5u64 {
            let start = t0 + Duration::from_millis(i * 150);
            history.record_press(Point::new(i as f32, 0.0), start);
            history.record_release(start + Duration::from_millis(40));
        }

        for step in 0..20u64 {
            let now = t0 + Duration::from_millis(step * 70);
            let visible: Vec<Press> = history.visible_entries(now).copied().collect();
            history.prune(now);
            for press in &visible {
                assert!(history.entries().contains(press), "visible press pruned at step {step}");
            }
        }
        assert!(history.is_empty());
    }

    #[test]
    fn test_custom_duration_drives_decay() {
        let t0 = Instant::now();
        let mut history =
            PressHistory::with_config(RippleConfig::new().duration(Duration::from_millis(100)));
        history.record_press(origin(), t0);
        history.record_release(t0);
        assert_eq!(history.duration(), Duration::from_millis(100));
        assert_eq!(history.visible_entries(t0 + Duration::from_millis(150)).count(), 0);
    }
}
