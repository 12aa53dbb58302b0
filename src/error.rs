//! Runtime error type for the startup demos.
//!
//! There is no I/O channel to report through, so reporting only logs
//! (when a logger is configured) before the caller halts.

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-log", derive(defmt::Format))]
pub enum Error {
    /// The application entry point returned to the reset handler.
    EntryReturned,
}

impl Error {
    pub fn description(&self) -> &'static str {
        match self {
            Error::EntryReturned => "Application entry point returned. Halting.",
        }
    }

    pub fn report(&self) {
        match self {
            Error::EntryReturned => error!("[EntryReturned] -> {=str}", self.description()),
        }
    }
}
