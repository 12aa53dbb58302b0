#![cfg_attr(test, allow(unused_attributes))]
#![cfg_attr(all(not(test), target_os = "none"), no_std)]
#![cfg_attr(target_os = "none", no_main)]

#[allow(unused_imports)]
use mylib as _;

#[cfg(target_os = "none")]
mod application {
    use bare_start_lib::{
        config::DELAY_ITERATIONS,
        devices::{application::Application, delay::BusyWait},
        drivers::cpu::Core,
    };
    use core::ffi::c_int;

    #[allow(non_snake_case)]
    extern "C" {
        fn mylib_getValue() -> c_int;
    }

    fn application_main() {
        let seed = unsafe { mylib_getValue() } as u32;
        Application::new(seed, BusyWait::new(Core), DELAY_ITERATIONS).run()
    }

    bare_start_lib::startup!(application_main);
}

#[cfg(not(target_os = "none"))]
fn main() {}
