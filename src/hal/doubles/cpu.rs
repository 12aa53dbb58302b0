use crate::hal::cpu::NoOperation;

/// Counts the no-operations it is asked to execute.
#[derive(Clone, Debug, Default)]
pub struct CountingCpu {
    pub nops: u64,
}

impl NoOperation for CountingCpu {
    fn nop(&mut self) { self.nops += 1; }
}
