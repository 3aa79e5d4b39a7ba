//! Indicator output driver and one-shot hardware initialisation.

pub mod hw_init;
pub mod indicator_bank;
