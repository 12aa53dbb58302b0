//! Startup trampoline.
//!
//! On reset the core fetches entry 0 of the vector table, which is the
//! reset handler `_c_int00` emitted by [`startup!`](crate::startup). The
//! handler initialises RAM, calls the application entry point exactly
//! once, and halts forever should that entry point ever return.
//!
//! Halting is the only failure policy in the system: no retry, no trap,
//! no reset. Panics on bare-metal targets end in the same spin.
use crate::error::Error;
use static_assertions::{assert_eq_size, const_assert_eq};

/// A vector table entry. Entries are never null and never return.
pub type Vector = unsafe extern "C" fn() -> !;

/// Number of entries in the vector table. Only the reset vector is used.
pub const VECTOR_COUNT: usize = 1;

pub type VectorTable = [Vector; VECTOR_COUNT];

/// Application entry point. Returning from it is a fault.
pub type EntryPoint = fn();

assert_eq_size!(Vector, usize);
assert_eq_size!(Option<Vector>, Vector);
const_assert_eq!(core::mem::size_of::<VectorTable>(), VECTOR_COUNT * core::mem::size_of::<usize>());

/// Body of the reset handler.
///
/// # Safety
///
/// Must only be called once, from the reset handler, before anything else
/// touches `.data` or `.bss`: it overwrites both on bare-metal targets.
pub unsafe fn reset(entry: EntryPoint) -> ! {
    init_memory();
    trace!("Entering application");
    entry();
    Error::EntryReturned.report();
    halt()
}

/// Stops forward progress for good. Only an external reset gets the core
/// out of here.
pub fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}

/// Zeroes `.bss` and copies `.data` from its load address, both bounded by
/// symbols from the generated linker script.
#[cfg(target_os = "none")]
unsafe fn init_memory() {
    use core::ptr;

    extern "C" {
        static mut __sbss: u32;
        static mut __ebss: u32;
        static mut __sdata: u32;
        static mut __edata: u32;
        static __sidata: u32;
    }

    let mut bss = ptr::addr_of_mut!(__sbss);
    let bss_end = ptr::addr_of_mut!(__ebss);
    while bss < bss_end {
        ptr::write_volatile(bss, 0);
        bss = bss.add(1);
    }

    let mut data = ptr::addr_of_mut!(__sdata);
    let data_end = ptr::addr_of_mut!(__edata);
    let mut load = ptr::addr_of!(__sidata);
    while data < data_end {
        ptr::write_volatile(data, ptr::read(load));
        data = data.add(1);
        load = load.add(1);
    }
}

/// The host loader already initialised memory.
#[cfg(not(target_os = "none"))]
unsafe fn init_memory() {}

#[cfg(test)]
mod test {
    use super::*;
    use std::{
        sync::atomic::{AtomicUsize, Ordering},
        thread,
        time::{Duration, Instant},
    };

    static TABLE_ENTRY_CALLS: AtomicUsize = AtomicUsize::new(0);

    fn table_entry() { TABLE_ENTRY_CALLS.fetch_add(1, Ordering::SeqCst); }

    crate::startup!(table_entry);

    #[test]
    fn reset_vector_points_at_reset_handler() {
        assert_eq!(_c_int00 as Vector as usize, VECTOR_TABLE[0] as usize);
        assert_eq!(VECTOR_COUNT, VECTOR_TABLE.len());
    }

    #[test]
    fn reset_halts_once_entry_point_returns() {
        // Given
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn returning_entry() { CALLS.fetch_add(1, Ordering::SeqCst); }

        // When
        let handle = thread::spawn(|| {
            unsafe { reset(returning_entry) };
        });

        // Then
        let deadline = Instant::now() + Duration::from_secs(5);
        while CALLS.load(Ordering::SeqCst) == 0 {
            assert!(Instant::now() < deadline, "entry point was never called");
            thread::yield_now();
        }
        thread::sleep(Duration::from_millis(200));
        assert!(!handle.is_finished(), "reset handler proceeded past the entry point");
        assert_eq!(1, CALLS.load(Ordering::SeqCst));
        assert_eq!(0, TABLE_ENTRY_CALLS.load(Ordering::SeqCst));
    }
}
