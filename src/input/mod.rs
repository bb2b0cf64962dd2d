//! Input handling: event types and the input processor that converts raw
//! window events into single-pointer gestures.

pub mod event;
pub mod processor;

pub use event::{InputEvent, MouseButton, PointerEvent};
pub use processor::InputProcessor;
