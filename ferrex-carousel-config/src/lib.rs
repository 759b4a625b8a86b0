//! Carousel option loading
//!
//! Reads [`CarouselOptions`](ferrex_carousel::CarouselOptions) from a TOML
//! or JSON file, inline JSON in the environment, or defaults, then runs the
//! guard rails in [`validation`] before the options reach an engine.

pub mod loader;
pub mod validation;

pub use loader::{CarouselConfig, CarouselConfigSource};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
