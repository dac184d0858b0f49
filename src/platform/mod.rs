//! Platform abstraction layer
//!
//! Contracts the host implements around the simulation:
//! - Input polling (`InputProvider`)
//! - Frame presentation (`Renderer`)
//!
//! plus a demo autopilot and a logging renderer for headless runs.

pub mod autopilot;
pub mod input;
pub mod render;

pub use autopilot::Autopilot;
pub use input::{Action, InputProvider, KeyState};
pub use render::{LogRenderer, Renderer};
