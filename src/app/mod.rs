//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the alarm's business rules: classification,
//! indicator selection and the one-shot alert. All interaction with
//! hardware happens through **port traits** defined in [`ports`], keeping
//! this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
