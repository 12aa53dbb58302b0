//! Delay interfaces.

/// Interface to a blocking delay measured in loop iterations rather than
/// time. How long an iteration lasts depends on the core and its clock.
pub trait Delay {
    fn delay(&mut self, iterations: u32);
}
