//! Linearly braked post-release rotation.
//!
//! After a swipe the camera keeps turning, losing a fixed angular step per
//! axis on every tick until both axes reach zero.

use super::sink::RotationSink;
use super::velocity::{Velocity, DEG_TO_RAD};
use crate::options::MomentumOptions;
use crate::util::timer::RepeatingTimer;

/// Angular speed removed from each axis per tick (0.5°).
pub const MAX_STEP: f64 = 0.5 * DEG_TO_RAD;

/// Milliseconds between momentum ticks.
pub const TICK_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Decaying(RepeatingTimer),
}

/// Coasting rotation after a swipe is released.
///
/// Seeded with a velocity, the engine brakes each axis by a fixed step per
/// tick (linear decay) and emits the braked velocity to the sink on every
/// tick, including the final all-zero one. The timer lives inside the
/// decaying phase, so starting again always replaces the previous loop.
#[derive(Debug, Clone)]
pub struct MomentumEngine {
    velocity: Velocity,
    braking_step: f64,
    phase: Phase,
}

impl Default for MomentumEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Move one axis toward zero by `step`, snapping once within reach.
fn brake(value: f64, step: f64) -> f64 {
    if value > step {
        value - step
    } else if value < -step {
        value + step
    } else {
        0.0
    }
}

impl MomentumEngine {
    /// Create an idle engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            velocity: Velocity::ZERO,
            braking_step: MAX_STEP,
            phase: Phase::Idle,
        }
    }

    /// Whether the decay loop is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Decaying(_))
    }

    /// Current velocity. Left as-is by [`cancel`](Self::cancel).
    #[must_use]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    /// When the next tick will fire, if running.
    #[must_use]
    pub fn next_tick_ms(&self) -> Option<u64> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Decaying(timer) => Some(timer.next_due_ms()),
        }
    }

    /// Cancel any running loop and coast from `seed`, first tick one
    /// interval after `now_ms`.
    ///
    /// A non-finite seed coasts from zero. A zero seed still runs one tick,
    /// which emits the zero vector and stops.
    pub fn start(
        &mut self,
        seed: Velocity,
        now_ms: u64,
        options: &MomentumOptions,
    ) {
        self.cancel();
        self.velocity = if seed.is_finite() { seed } else { Velocity::ZERO };

        let step = options.braking_step();
        self.braking_step = if step.is_finite() && step > 0.0 {
            step
        } else {
            MAX_STEP
        };
        self.phase = Phase::Decaying(RepeatingTimer::start(
            now_ms,
            options.tick_interval_ms,
        ));
        log::debug!("momentum started at {:?}", self.velocity);
    }

    /// Stop the loop. Calling it on an idle engine does nothing.
    pub fn cancel(&mut self) {
        self.phase = Phase::Idle;
    }

    /// Fire every tick due by `now_ms`, in order. Returns how many fired.
    pub fn update(&mut self, now_ms: u64, sink: &mut dyn RotationSink) -> usize {
        let mut fired = 0;
        while let Phase::Decaying(timer) = &mut self.phase {
            if !timer.poll(now_ms) {
                break;
            }
            self.tick(sink);
            fired += 1;
        }
        fired
    }

    fn tick(&mut self, sink: &mut dyn RotationSink) {
        self.velocity = Velocity::new(
            brake(self.velocity.x, self.braking_step),
            brake(self.velocity.y, self.braking_step),
        );
        log::trace!("momentum tick {:?}", self.velocity);
        sink.emit(self.velocity);

        if self.velocity == Velocity::ZERO {
            self.phase = Phase::Idle;
            log::debug!("momentum settled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_rest(engine: &mut MomentumEngine, start_ms: u64) -> Vec<Velocity> {
        let mut emitted: Vec<Velocity> = Vec::new();
        let mut now = start_ms;
        while engine.is_running() {
            now += TICK_INTERVAL_MS;
            let _ = engine.update(now, &mut emitted);
        }
        emitted
    }

    #[test]
    fn one_degree_settles_in_two_ticks() {
        let mut engine = MomentumEngine::new();
        let seed = Velocity::splat(DEG_TO_RAD);
        engine.start(seed, 0, &MomentumOptions::default());

        let emitted = run_to_rest(&mut engine, 0);
        assert_eq!(
            emitted,
            vec![Velocity::splat(MAX_STEP), Velocity::ZERO]
        );
        assert!(!engine.is_running());
    }

    #[test]
    fn each_axis_brakes_by_exactly_one_step() {
        let mut engine = MomentumEngine::new();
        let seed = Velocity::new(3.2 * DEG_TO_RAD, -1.7 * DEG_TO_RAD);
        engine.start(seed, 0, &MomentumOptions::default());

        let emitted = run_to_rest(&mut engine, 0);
        assert_eq!(emitted.last(), Some(&Velocity::ZERO));

        let mut previous = seed;
        for v in &emitted {
            for (prev, cur) in [(previous.x, v.x), (previous.y, v.y)] {
                assert!(cur.abs() <= prev.abs());
                if cur != 0.0 {
                    assert!((prev.abs() - cur.abs() - MAX_STEP).abs() < 1e-12);
                    assert_eq!(prev.signum(), cur.signum());
                }
            }
            previous = *v;
        }
        // 3.2° needs six steps before the seventh snaps it
        assert_eq!(emitted.len(), 7);
    }

    #[test]
    fn settled_axis_emits_zero_while_other_coasts() {
        let mut engine = MomentumEngine::new();
        let seed = Velocity::new(0.2 * DEG_TO_RAD, 2.0 * DEG_TO_RAD);
        engine.start(seed, 0, &MomentumOptions::default());

        let emitted = run_to_rest(&mut engine, 0);
        assert_eq!(emitted[0].x, 0.0);
        assert!(emitted[0].y > 0.0);
        assert!(emitted.iter().all(|v| v.x == 0.0));
    }

    #[test]
    fn ticks_wait_for_the_interval() {
        let mut engine = MomentumEngine::new();
        let mut sink: Vec<Velocity> = Vec::new();
        engine.start(Velocity::splat(0.1), 1000, &MomentumOptions::default());

        assert_eq!(engine.update(1049, &mut sink), 0);
        assert_eq!(engine.update(1050, &mut sink), 1);
        assert_eq!(engine.next_tick_ms(), Some(1100));
        assert_eq!(engine.update(1210, &mut sink), 3);
        assert_eq!(sink.len(), 4);
    }

    #[test]
    fn cancel_is_idempotent_and_keeps_velocity() {
        let mut engine = MomentumEngine::new();
        let seed = Velocity::new(0.3, -0.2);
        engine.start(seed, 0, &MomentumOptions::default());

        engine.cancel();
        let once = (engine.is_running(), engine.velocity());
        engine.cancel();
        assert_eq!((engine.is_running(), engine.velocity()), once);
        assert_eq!(once, (false, seed));

        let mut sink: Vec<Velocity> = Vec::new();
        assert_eq!(engine.update(10_000, &mut sink), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn restart_replaces_the_running_loop() {
        let mut engine = MomentumEngine::new();
        let mut sink: Vec<Velocity> = Vec::new();
        engine.start(Velocity::splat(0.5), 0, &MomentumOptions::default());
        let _ = engine.update(50, &mut sink);

        engine.start(Velocity::new(0.0, 0.2), 60, &MomentumOptions::default());
        assert_eq!(engine.next_tick_ms(), Some(110));
        sink.clear();
        let _ = engine.update(110, &mut sink);
        assert_eq!(sink, vec![Velocity::new(0.0, 0.2 - MAX_STEP)]);
    }

    #[test]
    fn zero_seed_emits_one_zero_tick() {
        let mut engine = MomentumEngine::new();
        engine.start(Velocity::ZERO, 0, &MomentumOptions::default());
        assert!(engine.is_running());

        let mut sink: Vec<Velocity> = Vec::new();
        assert_eq!(engine.update(200, &mut sink), 1);
        assert_eq!(sink, vec![Velocity::ZERO]);
        assert!(!engine.is_running());
    }

    #[test]
    fn non_finite_seed_coasts_from_zero() {
        let mut engine = MomentumEngine::new();
        engine.start(Velocity::new(f64::NAN, 1.0), 0, &MomentumOptions::default());
        assert_eq!(engine.velocity(), Velocity::ZERO);
        assert_eq!(run_to_rest(&mut engine, 0), vec![Velocity::ZERO]);
    }

    #[test]
    fn custom_braking_and_interval() {
        let options = MomentumOptions {
            enabled: true,
            tick_interval_ms: 20,
            braking_step_degrees: 1.0,
        };
        let mut engine = MomentumEngine::new();
        let mut sink: Vec<Velocity> = Vec::new();
        engine.start(Velocity::new(2.5 * DEG_TO_RAD, 0.0), 0, &options);

        assert_eq!(engine.update(60, &mut sink), 3);
        assert_eq!(sink.last(), Some(&Velocity::ZERO));
        assert!(!engine.is_running());
    }

    #[test]
    fn non_positive_braking_falls_back_to_default() {
        let options = MomentumOptions {
            braking_step_degrees: 0.0,
            ..MomentumOptions::default()
        };
        let mut engine = MomentumEngine::new();
        engine.start(Velocity::splat(DEG_TO_RAD), 0, &options);
        assert_eq!(run_to_rest(&mut engine, 0).len(), 2);
    }
}
