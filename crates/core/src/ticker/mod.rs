//! Alert ticker engine.
//!
//! The ticker displays a horizontally scrolling status line sourced from a
//! template file. Date/time tokens are substituted on every template refresh;
//! a template containing the time token additionally gets a once-per-second
//! re-substitution so the clock stays live without disturbing the scroll.
//!
//! Everything here is pure state: the clock is passed in and the scroll
//! advances one frame per call, so the driver (interval timers plus a frame
//! tick) lives with the host UI loop.

pub mod engine;
pub mod scroll;
pub mod template;

pub use engine::{TickerEngine, TickerMode};
pub use scroll::ScrollState;
