//! This sub-crate contains all definitions to help generate the final
//! demo binaries.
//!
//! NOTE: Nothing in the target code depends on this crate! It is a
//! dependency of the **build script**, which uses it to generate the
//! linker script and the constants the demos include (delay length,
//! configured platform).

use std::fmt::Display;

use application::ApplicationConfiguration;
use platform::Platform;
use serde::{Deserialize, Serialize};

pub mod application;
pub mod codegen;
pub mod platform;

/// Directory, relative to this crate, holding the sample configurations.
pub const SAMPLE_CONFIGURATION_DIRECTORY: &str = "sample_configurations";

/// Number of entries in the vector table emitted by the `startup!` macro.
pub const VECTOR_COUNT: u32 = 1;
/// Size in bytes of a single vector table entry on every supported core.
pub const VECTOR_SIZE: u32 = 4;

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct Configuration {
    pub platform: Platform,
    #[serde(default)]
    pub application: ApplicationConfiguration,
}

impl Configuration {
    pub fn new(platform: Platform, application: ApplicationConfiguration) -> Self {
        Self { platform, application }
    }

    /// A configuration is usable when it reports no issues for the target
    /// it is built for.
    pub fn complete(&self, bare_metal: bool) -> bool { self.issues(bare_metal).next().is_none() }

    pub fn issues(&self, bare_metal: bool) -> impl Iterator<Item = ConfigurationIssue> {
        let constants = self.platform.linker_script_constants();
        let mut issues = Vec::new();

        if bare_metal && constants.is_none() {
            issues.push(ConfigurationIssue::NoMemoryLayout(self.platform));
        }

        if let Some(constants) = constants {
            if constants.vectors.size < VECTOR_COUNT * VECTOR_SIZE {
                issues.push(ConfigurationIssue::VectorsTooSmall);
            }
            issues.extend(
                constants.overlapping_areas().map(|(a, b)| ConfigurationIssue::Overlap(a, b)),
            );
        }

        issues.into_iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigurationIssue {
    NoMemoryLayout(Platform),
    VectorsTooSmall,
    Overlap(&'static str, &'static str),
}

impl Display for ConfigurationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigurationIssue::NoMemoryLayout(platform) => {
                write!(f, "[Target] Platform `{}` has no memory layout for bare-metal builds", platform)
            }
            ConfigurationIssue::VectorsTooSmall => {
                f.write_str("[Memory Map] Vectors area can't hold the vector table")
            }
            ConfigurationIssue::Overlap(a, b) => {
                write!(f, "[Memory Map] Areas {} and {} overlap", a, b)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLES: [(&str, &str); 3] = [
        ("am243x", include_str!("../sample_configurations/am243x.ron")),
        ("tms570", include_str!("../sample_configurations/tms570.ron")),
        ("unknown", include_str!("../sample_configurations/hosted.ron")),
    ];

    #[test]
    fn sample_configurations_parse_and_match_their_platform() {
        for (name, contents) in SAMPLES {
            let configuration: Configuration = ron::from_str(contents).unwrap();
            assert_eq!(name, configuration.platform.to_string());
            assert_eq!(100_000, configuration.application.delay_iterations);
        }
    }

    #[test]
    fn feature_selected_sample_configuration_names_that_platform() {
        for (am243x, tms570) in [(false, false), (true, false), (false, true), (true, true)] {
            // Given
            let platform = Platform::from_features(am243x, tms570);
            let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
                .join(SAMPLE_CONFIGURATION_DIRECTORY)
                .join(platform.sample_configuration_filename());

            // When
            let contents = std::fs::read_to_string(&path).unwrap();
            let configuration: Configuration = ron::from_str(&contents).unwrap();

            // Then
            assert_eq!(platform, configuration.platform, "{}", path.display());
            assert!(configuration.complete(platform != Platform::Unknown), "{}", path.display());
        }
    }

    #[test]
    fn hosted_configuration_is_only_complete_off_target() {
        // Given
        let configuration = Configuration::new(Platform::Unknown, Default::default());

        // Then
        assert!(configuration.complete(false));
        assert!(!configuration.complete(true));
        assert_eq!(
            vec![ConfigurationIssue::NoMemoryLayout(Platform::Unknown)],
            configuration.issues(true).collect::<Vec<_>>()
        );
    }

    #[test]
    fn bare_metal_platforms_are_complete() {
        for platform in [Platform::Am243x, Platform::Tms570] {
            let configuration = Configuration::new(platform, Default::default());
            assert!(configuration.complete(true), "{}", platform);
        }
    }

    #[test]
    fn missing_application_section_takes_defaults() {
        let configuration: Configuration = ron::from_str("(platform: Tms570)").unwrap();
        assert_eq!(ApplicationConfiguration::default(), configuration.application);
    }
}
