//! Hardware Abstraction Layer, containing interfaces
//! for low level drivers.

pub mod cpu;
pub mod delay;

#[cfg(not(target_os = "none"))]
#[doc(hidden)]
pub mod doubles;
