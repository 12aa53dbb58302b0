use std::path::Path;

use anyhow::Result;

use crate::Configuration;

pub mod constants;
pub mod linker_script;
mod prettify;

pub use constants::generate_constants;
pub use linker_script::generate_linker_script;

/// Generates every file the demos need from `configuration` into `output`.
/// The linker script is only produced for bare-metal targets.
pub fn generate_modules<P: AsRef<Path>>(
    output: P,
    configuration: &Configuration,
    bare_metal: bool,
) -> Result<()> {
    generate_constants(output.as_ref(), configuration)?;
    if bare_metal {
        generate_linker_script(output.as_ref(), configuration)?;
    }
    Ok(())
}
