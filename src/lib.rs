//! sunmoon-rs: sun/moon rise-set arc indicator engine.
//!
//! The crate resolves where a rise/set arc sits inside a layout box, maps
//! "now" onto the arc, animates a marker toward that point, and emits
//! backend-agnostic frames for a pluggable renderer.

pub mod animation;
pub mod api;
pub mod clock;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{SunMoonConfig, SunMoonEngine};
pub use error::{SunMoonError, SunMoonResult};
