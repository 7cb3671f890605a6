// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
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
// Float comparison: rig math compares against exact sentinels (0.0, 1.0)
#![allow(clippy::float_cmp)]

//! Mouse-driven aim-point computation and a smoothed chase-camera rig for
//! aircraft control.
//!
//! The rig decouples "where the player points" from "how the camera moves"
//! and from "how the vehicle actually flies": a free-floating aim
//! orientation accumulates raw mouse motion in world space, while the
//! camera orientation chases the aim direction through a
//! frame-rate-independent exponential damper with a pole-singularity
//! guard. The vehicle's own flight logic consumes the projected aim point
//! but is an external collaborator, as are HUD projection and the
//! windowing layer.
//!
//! # Key entry points
//!
//! - [`rig::MouseAimRig`] - the rig itself, advanced once per tick
//! - [`options::RigOptions`] - immutable, validated configuration with
//!   TOML persistence
//! - [`input::InputProcessor`] - folds raw input events into per-tick
//!   samples
//!
//! # Architecture
//!
//! The embedding application owns the simulation loop and calls
//! [`rig::MouseAimRig::tick`] once per display frame
//! ([`rig::Cadence::Variable`]) and once per simulation step
//! ([`rig::Cadence::Fixed`]); the rig assumes nothing about host
//! scheduling. All poses cross the boundary as explicit world-space
//! values - there is no scene graph.

pub mod error;
pub mod input;
pub mod options;
pub mod rig;
pub mod util;

pub use error::RigError;
pub use options::{FreeLookPolicy, RigOptions};
pub use rig::{Cadence, CameraFrame, MouseAimRig, Pose, TickInput};
