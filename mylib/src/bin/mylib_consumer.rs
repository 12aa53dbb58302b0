#![cfg_attr(target_os = "none", no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[allow(unused_imports)]
use mylib as _;

#[cfg(not(target_os = "none"))]
mod consumer {
    use anyhow::Result;
    use std::ffi::{c_char, c_int, CStr};

    extern "C" {
        fn mylib_add(a: c_int, b: c_int) -> c_int;
        fn mylib_get_platform() -> *const c_char;
    }

    pub fn report() -> Result<String> {
        let platform = unsafe { CStr::from_ptr(mylib_get_platform()) }.to_str()?;
        let sum = unsafe { mylib_add(2, 3) };
        Ok(format!("Platform: {}\n2 + 3 = {}", platform, sum))
    }

}

#[cfg(not(target_os = "none"))]
fn main() -> anyhow::Result<()> {
    println!("{}", consumer::report()?);
    Ok(())
}
