//! Test doubles for the HAL interfaces. Host only.
pub mod cpu;
pub mod delay;
