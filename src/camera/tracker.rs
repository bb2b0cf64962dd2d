//! Gesture state and the rolling sample window used to estimate release
//! speed.

use std::collections::VecDeque;

use glam::DVec2;

use super::velocity::{drag_velocity, release_velocity, Velocity};

/// Number of recent pointer samples kept for release-speed estimation.
pub const SAMPLE_WINDOW: usize = 5;

/// One pointer position at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Screen position in pixels.
    pub position: DVec2,
    /// Capture time in milliseconds.
    pub time_ms: u64,
}

/// Outcome of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Short release, or no drag in progress. No momentum.
    Tap,
    /// Swipe long enough to coast, with the momentum seed.
    Swipe(Velocity),
}

/// Tracks one drag gesture and the rolling window of its latest samples.
///
/// Idle until [`pointer_down`](Self::pointer_down), dragging until
/// [`pointer_up`](Self::pointer_up). Only one gesture is tracked at a time;
/// a second press simply restarts it.
#[derive(Debug, Clone, Default)]
pub struct InteractionTracker {
    active: bool,
    samples: VecDeque<Sample>,
    start_sample: Option<Sample>,
}

impl InteractionTracker {
    /// Create an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: false,
            samples: VecDeque::with_capacity(SAMPLE_WINDOW + 1),
            start_sample: None,
        }
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.active
    }

    /// The rolling window, oldest first.
    #[must_use]
    pub fn samples(&self) -> &VecDeque<Sample> {
        &self.samples
    }

    /// Where and when the current (or last) gesture started.
    #[must_use]
    pub fn start_sample(&self) -> Option<Sample> {
        self.start_sample
    }

    /// Press time of the current (or last) gesture.
    #[must_use]
    pub fn start_time_ms(&self) -> Option<u64> {
        self.start_sample.map(|s| s.time_ms)
    }

    /// Begin a gesture, discarding any previous window.
    pub fn pointer_down(&mut self, position: DVec2, time_ms: u64) {
        let sample = Sample { position, time_ms };
        self.active = true;
        self.samples.clear();
        self.samples.push_back(sample);
        self.start_sample = Some(sample);
    }

    /// Record a move and return the rotation it produces.
    ///
    /// Returns `None` when no drag is in progress.
    pub fn pointer_move(
        &mut self,
        position: DVec2,
        time_ms: u64,
        sensitivity: i32,
    ) -> Option<Velocity> {
        if !self.active {
            return None;
        }
        let last = self.samples.back()?.position;
        let velocity = drag_velocity(position - last, sensitivity);

        self.samples.push_back(Sample { position, time_ms });
        if self.samples.len() > SAMPLE_WINDOW {
            let _ = self.samples.pop_front();
        }
        Some(velocity)
    }

    /// End the gesture and decide whether it should coast.
    ///
    /// Always leaves the tracker idle. A release no further than `debounce`
    /// pixels from the press point is a [`Release::Tap`].
    pub fn pointer_up(
        &mut self,
        position: DVec2,
        sensitivity: i32,
        debounce: f64,
    ) -> Release {
        let was_active = std::mem::replace(&mut self.active, false);
        let Some(start) = self.start_sample.filter(|_| was_active) else {
            return Release::Tap;
        };

        let distance = start.position.distance(position);
        if distance <= debounce || debounce.is_nan() {
            log::debug!("release after {distance:.1}px treated as tap");
            return Release::Tap;
        }

        Release::Swipe(release_velocity(self.average_speed(), sensitivity))
    }

    /// Recency-weighted release speed in px/ms.
    ///
    /// Each consecutive pair contributes `Δposition / Δtime`, folded in as
    /// `avg = (avg + speed) / 2` starting from zero, so newer pairs count
    /// for more than a plain mean would give them. Pairs with no elapsed
    /// time are skipped.
    #[must_use]
    pub fn average_speed(&self) -> DVec2 {
        let mut average = DVec2::ZERO;
        for (prev, next) in self.samples.iter().zip(self.samples.iter().skip(1))
        {
            let elapsed = next.time_ms.saturating_sub(prev.time_ms);
            if elapsed == 0 {
                continue;
            }
            let speed = (next.position - prev.position) / elapsed as f64;
            average = (average + speed) / 2.0;
        }
        average
    }
}
