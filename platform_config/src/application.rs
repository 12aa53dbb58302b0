use serde::{Deserialize, Serialize};

/// Iterations of the busy-wait between two counter increments.
pub const DEFAULT_DELAY_ITERATIONS: u32 = 100_000;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfiguration {
    pub delay_iterations: u32,
}

impl Default for ApplicationConfiguration {
    fn default() -> Self { Self { delay_iterations: DEFAULT_DELAY_ITERATIONS } }
}
