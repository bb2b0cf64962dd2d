//! Drag controller wiring the tracker, momentum engine and sink together.

use glam::DVec2;

use super::momentum::MomentumEngine;
use super::sink::RotationSink;
use super::tracker::{InteractionTracker, Release};
use crate::input::PointerEvent;
use crate::options::{InteractionConfig, Options};
use crate::util::clock::{Clock, SystemClock};

/// Drag-to-rotate controller for one panorama view.
///
/// Pointer moves are converted and emitted straight to the sink. A swipe
/// release seeds the momentum engine, which the host advances by calling
/// [`update`](Self::update) every frame. Sensitivity, debounce and
/// momentum options are read from `config` on every call.
///
/// Each controller owns its own gesture and momentum state, so several
/// panoramas can be driven side by side.
pub struct PanoController<S, C = Options, K = SystemClock> {
    tracker: InteractionTracker,
    momentum: MomentumEngine,
    sink: S,
    config: C,
    clock: K,
}

impl<S: RotationSink> PanoController<S> {
    /// Controller with default options and the system clock.
    #[must_use]
    pub fn with_sink(sink: S) -> Self {
        Self::new(sink, Options::default(), SystemClock::new())
    }
}

impl<S, C, K> PanoController<S, C, K>
where
    S: RotationSink,
    C: InteractionConfig,
    K: Clock,
{
    /// Create an idle controller.
    #[must_use]
    pub fn new(sink: S, config: C, clock: K) -> Self {
        Self {
            tracker: InteractionTracker::new(),
            momentum: MomentumEngine::new(),
            sink,
            config,
            clock,
        }
    }

    /// Press: stop any coasting and start a new gesture.
    pub fn pointer_down(&mut self, position: DVec2) {
        self.momentum.cancel();
        self.tracker.pointer_down(position, self.clock.now_ms());
    }

    /// Move: emit the drag rotation if a gesture is in progress.
    pub fn pointer_move(&mut self, position: DVec2) {
        let now = self.clock.now_ms();
        if let Some(velocity) =
            self.tracker
                .pointer_move(position, now, self.config.sensitivity())
        {
            self.sink.emit(velocity);
        }
    }

    /// Release: end the gesture and start coasting if it was a swipe.
    pub fn pointer_up(&mut self, position: DVec2) -> Release {
        let release = self.tracker.pointer_up(
            position,
            self.config.sensitivity(),
            self.config.interaction_debounce(),
        );
        if let Release::Swipe(seed) = release {
            let options = self.config.momentum();
            if options.enabled {
                self.momentum.start(seed, self.clock.now_ms(), &options);
            }
        }
        release
    }

    /// Dispatch a pointer event to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down(position) => self.pointer_down(position),
            PointerEvent::Move(position) => self.pointer_move(position),
            PointerEvent::Up(position) => {
                let _ = self.pointer_up(position);
            }
        }
    }

    /// Fire any momentum ticks that have come due. Returns how many fired.
    pub fn update(&mut self) -> usize {
        let now = self.clock.now_ms();
        self.momentum.update(now, &mut self.sink)
    }

    /// Whether a drag gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Whether the camera is coasting after a swipe.
    #[must_use]
    pub fn is_coasting(&self) -> bool {
        self.momentum.is_running()
    }

    /// When the next momentum tick is due, for hosts that sleep between
    /// frames.
    #[must_use]
    pub fn next_tick_ms(&self) -> Option<u64> {
        self.momentum.next_tick_ms()
    }

    /// Stop coasting without starting a gesture.
    pub fn stop(&mut self) {
        self.momentum.cancel();
    }

    /// The gesture tracker.
    #[must_use]
    pub fn tracker(&self) -> &InteractionTracker {
        &self.tracker
    }

    /// The momentum engine.
    #[must_use]
    pub fn momentum(&self) -> &MomentumEngine {
        &self.momentum
    }

    /// The rotation sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the rotation sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The configuration source.
    #[must_use]
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Mutable access to the configuration source.
    pub fn config_mut(&mut self) -> &mut C {
        &mut self.config
    }
}
