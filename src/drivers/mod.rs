//! Concrete drivers implementing the HAL interfaces for the
//! supported cores.

pub mod cpu;
