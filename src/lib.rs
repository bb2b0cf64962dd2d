// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Drag-to-rotate input and release momentum for panoramic cameras.
//!
//! Swivel turns raw pointer drags into rotation deltas for a panorama
//! camera, and keeps the camera turning after release with a linearly
//! braked angular velocity. It renders nothing and owns no camera model:
//! every delta is handed to a [`camera::RotationSink`] supplied by the
//! host.
//!
//! # Key entry points
//!
//! - [`camera::PanoController`] - wires pointer events, the release
//!   tracker and the momentum loop to a sink
//! - [`camera::velocity`] - pixel-delta to angular-velocity conversion
//! - [`input::InputProcessor`] - raw cursor/button events to pointer events
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Driving the controller
//!
//! The controller is single-threaded and cooperative. Feed it pointer
//! events as they arrive and call [`camera::PanoController::update`] once
//! per frame; the momentum loop fires every tick that has come due since
//! the previous call.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use camera::{PanoController, RotationSink, Velocity};
pub use error::SwivelError;
pub use options::Options;
