//! Camera rotation from pointer drags.
//!
//! Converts drag deltas into angular velocity, estimates release speed,
//! and coasts the camera with linearly braked momentum after a swipe.

pub mod controller;
pub mod momentum;
pub mod sink;
pub mod tracker;
pub mod velocity;

pub use controller::PanoController;
pub use momentum::MomentumEngine;
pub use sink::{Orientation, RotationSink, SinkFn};
pub use tracker::{InteractionTracker, Release, Sample};
pub use velocity::Velocity;
