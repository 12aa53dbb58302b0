//! Core instruction interfaces.

/// Interface to a CPU able to execute a single no-operation instruction.
///
/// Implementations must make the instruction architecturally visible, so
/// loops built on it are never optimized away.
pub trait NoOperation {
    fn nop(&mut self);
}
