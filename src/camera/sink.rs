//! Rotation delta receivers.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use glam::{DQuat, EulerRot};

use super::velocity::Velocity;

/// Receiver for rotation deltas.
///
/// Called once per pointer move and once per momentum tick. The receiver
/// integrates each delta into whatever absolute orientation it owns.
pub trait RotationSink {
    /// Apply one rotation delta (`x` = pitch, `y` = yaw, radians).
    fn emit(&mut self, velocity: Velocity);
}

/// Records every delta in order.
impl RotationSink for Vec<Velocity> {
    fn emit(&mut self, velocity: Velocity) {
        self.push(velocity);
    }
}

impl<S: RotationSink + ?Sized> RotationSink for &mut S {
    fn emit(&mut self, velocity: Velocity) {
        (**self).emit(velocity);
    }
}

/// Adapts a closure into a [`RotationSink`].
pub struct SinkFn<F>(pub F);

impl<F: FnMut(Velocity)> RotationSink for SinkFn<F> {
    fn emit(&mut self, velocity: Velocity) {
        (self.0)(velocity);
    }
}

/// Yaw/pitch accumulator for a panorama camera.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Orientation {
    /// Rotation about the horizontal axis, clamped to ±π/2.
    pub pitch: f64,
    /// Rotation about the vertical axis, wrapped to `[-π, π)`.
    pub yaw: f64,
}

impl Orientation {
    /// Orientation with the given angles, normalized.
    #[must_use]
    pub fn new(pitch: f64, yaw: f64) -> Self {
        let mut orientation = Self::default();
        orientation.emit(Velocity::new(pitch, yaw));
        orientation
    }

    /// Camera rotation: yaw about +Y, then pitch about the rotated +X.
    #[must_use]
    pub fn quat(&self) -> DQuat {
        DQuat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

impl RotationSink for Orientation {
    fn emit(&mut self, velocity: Velocity) {
        self.pitch = (self.pitch + velocity.x).clamp(-FRAC_PI_2, FRAC_PI_2);
        self.yaw = (self.yaw + velocity.y + PI).rem_euclid(TAU) - PI;
    }
}
