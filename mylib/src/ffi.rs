//! C ABI exports.
//!
//! Symbol names are fixed; C and C++ callers declare them as
//! `extern "C"` and link against the static library.
#![allow(non_snake_case)]

use core::ffi::{c_char, c_int};
use static_assertions::assert_eq_size;

use crate::{Platform, DEFAULT_VALUE};

assert_eq_size!(c_int, i32);

#[no_mangle]
pub extern "C" fn mylib_add(a: c_int, b: c_int) -> c_int { crate::add(a, b) }

/// Returns a static, NUL terminated platform name. Callers must not free it.
#[no_mangle]
pub extern "C" fn mylib_get_platform() -> *const c_char { Platform::CURRENT.c_name().as_ptr() }

#[no_mangle]
pub extern "C" fn mylib_getValue() -> c_int { DEFAULT_VALUE }

#[no_mangle]
pub extern "C" fn mylib_getSomeValue() -> c_int { DEFAULT_VALUE }
