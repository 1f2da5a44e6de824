//! Engine module - the single-threaded command worker
//!
//! All mutation of the game state happens here on one logical thread:
//! commands queue in arrival order and drain synchronously, the gravity
//! tick is delivered only while unpaused, and the effective gravity
//! interval is surfaced so the external timer can resynchronize after
//! every mutating call. Transition notifications (game started, paused,
//! resumed, won, lost) accumulate for purely observational consumers such
//! as an audio layer.
//!
//! The collaborators themselves - key-event mapping, the timer device,
//! rendering, audio playback - live outside this crate. Their contracts:
//!
//! - The input collaborator translates device events into
//!   [`Command`](blockfall_types::Command)s, pushes them here, and owns
//!   the gravity timer; after each drain or tick it must reprogram the
//!   timer to [`GameDriver::gravity_interval_ms`].
//! - The render collaborator reads
//!   [`GameState::snapshot`](blockfall_core::GameState::snapshot) and
//!   never mutates.
//! - The audio collaborator drains [`GameDriver::take_transitions`] and
//!   has no influence on behavior.

pub mod driver;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use driver::{GameDriver, Transition};
