//! Demo application loop.
//!
//! Increments a counter forever, waiting between increments. The
//! counter is never read by anything; it only gives the loop a side
//! effect the compiler has to keep.
use crate::hal::delay::Delay;
use core::ptr;

pub struct Application<D: Delay> {
    counter: u32,
    delay: D,
    delay_iterations: u32,
}

impl<D: Delay> Application<D> {
    /// Seeds the counter. The seed comes from an external supplier and
    /// is taken as is.
    pub fn new(seed: u32, delay: D, delay_iterations: u32) -> Self {
        info!("Application seeded with {=u32}", seed);
        Self { counter: seed, delay, delay_iterations }
    }

    /// One loop iteration: increment, then wait.
    pub fn tick(&mut self) {
        // Volatile accesses keep the otherwise unobservable increment.
        let next = unsafe { ptr::read_volatile(&self.counter) }.wrapping_add(1);
        unsafe { ptr::write_volatile(&mut self.counter, next) };
        self.delay.delay(self.delay_iterations);
    }

    /// Runs until the next external reset.
    pub fn run(mut self) -> ! {
        loop {
            self.tick();
        }
    }

    pub fn counter(&self) -> u32 { self.counter }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{config::DELAY_ITERATIONS, hal::doubles::delay::MockDelay};

    #[test]
    fn counter_advances_once_per_tick() {
        // Given
        let seed = 42u32;
        let ticks = 1000u32;
        let mut application = Application::new(seed, MockDelay::default(), DELAY_ITERATIONS);

        // When
        (0..ticks).for_each(|_| application.tick());

        // Then
        assert_eq!(seed + ticks, application.counter());
    }

    #[test]
    fn each_tick_waits_the_configured_iterations() {
        // Given
        let mut application = Application::new(0, MockDelay::default(), 100_000);

        // When
        application.tick();
        application.tick();

        // Then
        assert_eq!(vec![100_000, 100_000], application.delay.requests);
    }

    #[test]
    fn counter_wraps_instead_of_trapping() {
        let mut application = Application::new(u32::MAX, MockDelay::default(), 0);
        application.tick();
        assert_eq!(0, application.counter());
    }

    #[test]
    fn configured_delay_matches_default_configuration() {
        assert_eq!(100_000, DELAY_ITERATIONS);
    }
}
