use std::{fs::OpenOptions, io::Write, path::Path};

use anyhow::Result;
use proc_macro2::TokenStream;
use quote::quote;

use super::prettify::prettify_file;
use crate::Configuration;

pub const CONSTANTS_FILENAME: &str = "application.rs";

/// Generates `application.rs`, holding the build-time constants the
/// demo applications are compiled against.
pub fn generate_constants(output: &Path, configuration: &Configuration) -> Result<()> {
    let filename = output.join(CONSTANTS_FILENAME);
    let mut file = OpenOptions::new().write(true).create(true).truncate(true).open(&filename)?;

    writeln!(file, "// Generated by the build script. Do not edit.")?;
    writeln!(file, "{}", constants_tokens(configuration))?;
    drop(file);

    // Formatting is cosmetic; a missing rustfmt shouldn't break the build.
    let _ = prettify_file(&filename);
    Ok(())
}

fn constants_tokens(configuration: &Configuration) -> TokenStream {
    let delay_iterations = configuration.application.delay_iterations;
    let platform = configuration.platform.to_string();

    quote! {
        /// Busy-wait iterations between two increments of the demo counter.
        pub const DELAY_ITERATIONS: u32 = #delay_iterations;
        /// Platform named by the build configuration file.
        pub const CONFIGURED_PLATFORM: &str = #platform;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{application::ApplicationConfiguration, platform::Platform};

    #[test]
    fn constants_carry_configured_values() {
        // Given
        let configuration = Configuration::new(
            Platform::Tms570,
            ApplicationConfiguration { delay_iterations: 1234 },
        );

        // When
        let generated = constants_tokens(&configuration).to_string();

        // Then
        assert!(generated.contains("DELAY_ITERATIONS"));
        assert!(generated.contains("1234u32"));
        assert!(generated.contains("\"tms570\""));
    }
}
