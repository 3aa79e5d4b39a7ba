//! HazardWatch firmware library.
//!
//! Exposes the pure-logic modules for integration testing and fuzzing.
//! All ESP-IDF-specific code is guarded by `#[cfg(target_os = "espidf")]`
//! within each module.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod error;
pub mod hazard;
pub mod indicator;
pub mod notification;
pub mod pins;

// The hardware-facing modules compile on the host too; their drivers
// fall back to simulation stubs there.
pub mod adapters;
pub mod drivers;
pub mod sensors;

mod esp_link_shims;
