//! Busy-wait delay.
//!
//! Burns CPU cycles by counting down and executing one `nop` per
//! iteration. No timer and no interrupt are involved, so the wall-clock
//! length depends entirely on the core's instruction timing. Not
//! cancellable.
use crate::hal::{cpu::NoOperation, delay::Delay};

pub struct BusyWait<CPU: NoOperation> {
    cpu: CPU,
}

impl<CPU: NoOperation> BusyWait<CPU> {
    pub fn new(cpu: CPU) -> Self { Self { cpu } }

    pub fn release(self) -> CPU { self.cpu }
}

impl<CPU: NoOperation> Delay for BusyWait<CPU> {
    fn delay(&mut self, iterations: u32) {
        let mut remaining = iterations;
        while remaining > 0 {
            remaining -= 1;
            self.cpu.nop();
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hal::doubles::cpu::CountingCpu;

    #[test]
    fn delay_executes_one_nop_per_iteration() {
        for iterations in [0u32, 1, 2, 17, 100_000] {
            // Given
            let mut busy_wait = BusyWait::new(CountingCpu::default());

            // When
            busy_wait.delay(iterations);

            // Then
            assert_eq!(iterations as u64, busy_wait.release().nops);
        }
    }

    #[test]
    fn consecutive_delays_accumulate() {
        let mut busy_wait = BusyWait::new(CountingCpu::default());
        busy_wait.delay(3);
        busy_wait.delay(4);
        assert_eq!(7, busy_wait.release().nops);
    }
}
