//! Processor core driver.
use crate::hal::cpu::NoOperation;

/// The core the program is running on. Owns no state; it only issues
/// instructions.
#[derive(Copy, Clone, Debug, Default)]
pub struct Core;

impl NoOperation for Core {
    #[inline(always)]
    fn nop(&mut self) {
        // Inline assembly is volatile by default, so every `nop` is emitted.
        #[cfg(any(target_arch = "arm", target_arch = "aarch64", target_arch = "x86", target_arch = "x86_64"))]
        unsafe {
            core::arch::asm!("nop", options(nomem, nostack, preserves_flags))
        };

        #[cfg(not(any(target_arch = "arm", target_arch = "aarch64", target_arch = "x86", target_arch = "x86_64")))]
        core::hint::spin_loop();
    }
}

