//! Modules with the demo's behavior, laid on top of the abstract
//! HAL interfaces. Devices are generic over their drivers, so they
//! run unchanged on the target and against test doubles.

pub mod application;
pub mod delay;
pub mod startup;
