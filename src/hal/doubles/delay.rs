use crate::hal::delay::Delay;
use std::vec::Vec;

/// Records every delay request instead of waiting.
#[derive(Clone, Debug, Default)]
pub struct MockDelay {
    pub requests: Vec<u32>,
}

impl Delay for MockDelay {
    fn delay(&mut self, iterations: u32) { self.requests.push(iterations); }
}
