//! # Platform wrapper library
//!
//! Two pure functions, built once per target platform from the same
//! tree. The platform is chosen at compile time through the `am243x`
//! and `tms570` features; the C ABI surface lives in [`ffi`].
#![cfg_attr(target_os = "none", no_std)]

use core::ffi::CStr;

pub mod ffi;

/// Placeholder handed to the demo applications as their counter seed.
pub const DEFAULT_VALUE: i32 = 42;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Platform {
    Am243x,
    Tms570,
    Unknown,
}

impl Platform {
    /// Platform resolved from the enabled features. `am243x` is checked
    /// first, so it wins when both are enabled.
    pub const CURRENT: Platform = if cfg!(feature = "am243x") {
        Platform::Am243x
    } else if cfg!(feature = "tms570") {
        Platform::Tms570
    } else {
        Platform::Unknown
    };

    pub const fn name(self) -> &'static str {
        match self {
            Platform::Am243x => "am243x",
            Platform::Tms570 => "tms570",
            Platform::Unknown => "unknown",
        }
    }

    pub const fn c_name(self) -> &'static CStr {
        match self {
            Platform::Am243x => c"am243x",
            Platform::Tms570 => c"tms570",
            Platform::Unknown => c"unknown",
        }
    }
}

/// Adds two integers. Overflow wraps around.
pub fn add(a: i32, b: i32) -> i32 { a.wrapping_add(b) }

/// Name of the platform this library was built for.
pub fn platform_name() -> &'static str { Platform::CURRENT.name() }

#[cfg(all(target_os = "none", not(test)))]
#[panic_handler]
fn halt_on_panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}
