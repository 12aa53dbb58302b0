//! # Bare-metal Startup Library
//!
//! This crate contains the startup trampoline, the busy-wait delay and the
//! demo application loop in library form. Each binary under `src/bin`
//! emits its own vector table through [`startup!`] and links the platform
//! wrapper library for its counter seed.
#![cfg_attr(target_os = "none", no_std)]

extern crate static_assertions;

#[macro_use]
pub mod utilities {
    mod macros;
}

pub mod hal;
pub mod drivers;
pub mod devices;
pub mod error;

/// Constants generated by the build script from the platform configuration.
pub mod config {
    use static_assertions::const_assert;

    include!(concat!(env!("OUT_DIR"), "/application.rs"));

    /// Platform the wrapper library was compiled for, by feature selection.
    pub const LIBRARY_PLATFORM: &str = mylib::Platform::CURRENT.name();

    // The configuration file and the library's platform feature must agree.
    const_assert!(same_name(CONFIGURED_PLATFORM, LIBRARY_PLATFORM));

    pub const fn same_name(a: &str, b: &str) -> bool {
        let (a, b) = (a.as_bytes(), b.as_bytes());
        if a.len() != b.len() {
            return false;
        }
        let mut i = 0;
        while i < a.len() {
            if a[i] != b[i] {
                return false;
            }
            i += 1;
        }
        true
    }

}
