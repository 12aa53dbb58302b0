//! Convenience macros for the startup demos
#![macro_use]

/// Emits the reset handler `_c_int00` and the vector table that points at
/// it. Invoke it once, from the binary crate, with the application entry
/// point.
///
/// The vector table is placed in the `.vectors` section on bare-metal
/// targets, where the generated linker script pins it to the reset
/// address of the platform.
///
/// # Example
/// ```ignore
/// fn application_main() { /* ... */ }
/// bare_start_lib::startup!(application_main);
/// // Expands into:
/// #[no_mangle]
/// pub unsafe extern "C" fn _c_int00() -> ! { reset(application_main) }
/// #[link_section = ".vectors"]
/// #[no_mangle]
/// pub static VECTOR_TABLE: VectorTable = [_c_int00];
/// ```
#[macro_export]
macro_rules! startup {
    ($entry:path) => {
        /// Reset handler. Hardware reaches it through entry 0 of the vector table.
        #[no_mangle]
        pub unsafe extern "C" fn _c_int00() -> ! {
            $crate::devices::startup::reset($entry)
        }

        #[cfg_attr(target_os = "none", link_section = ".vectors")]
        #[no_mangle]
        #[used]
        pub static VECTOR_TABLE: $crate::devices::startup::VectorTable = [_c_int00];
    };
}

// Log macros. They forward to defmt with the `defmt-log` feature, and
// otherwise only borrow their arguments so call sites compile the same.

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt-log")]
        ::defmt::trace!($s $(, $x)*);
        #[cfg(not(feature = "defmt-log"))]
        let _ = ($( & $x ),*);
    }};
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt-log")]
        ::defmt::info!($s $(, $x)*);
        #[cfg(not(feature = "defmt-log"))]
        let _ = ($( & $x ),*);
    }};
}

macro_rules! error {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt-log")]
        ::defmt::error!($s $(, $x)*);
        #[cfg(not(feature = "defmt-log"))]
        let _ = ($( & $x ),*);
    }};
}
