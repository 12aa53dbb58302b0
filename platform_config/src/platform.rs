use std::{fmt::Display, str::FromStr};

use anyhow::anyhow;
use enum_iterator::IntoEnumIterator;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, IntoEnumIterator)]
pub enum Platform {
    Am243x,
    Tms570,
    Unknown,
}

impl Default for Platform {
    // Hosted builds select no platform feature at all.
    fn default() -> Self { Self::Unknown }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Core {
    CortexR5F,
    CortexR4F,
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Platform::Am243x => "am243x",
            Platform::Tms570 => "tms570",
            Platform::Unknown => "unknown",
        })
    }
}

impl Display for Core {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Core::CortexR5F => "cortex-r5f",
            Core::CortexR4F => "cortex-r4f",
        })
    }
}

impl FromStr for Platform {
    type Err = anyhow::Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Platform::into_enum_iter()
            .find(|platform| platform.to_string() == name)
            .ok_or_else(|| anyhow!("Unrecognized platform `{}`", name))
    }
}

impl Platform {
    /// Platform picked by the cargo platform features. `am243x` is checked
    /// first, so it wins when both are enabled; neither means a hosted build.
    pub fn from_features(am243x: bool, tms570: bool) -> Self {
        match (am243x, tms570) {
            (true, _) => Platform::Am243x,
            (false, true) => Platform::Tms570,
            (false, false) => Platform::Unknown,
        }
    }

    /// File under `sample_configurations/` the build script reads when no
    /// configuration file is given explicitly.
    pub fn sample_configuration_filename(&self) -> &'static str {
        match self {
            Platform::Am243x => "am243x.ron",
            Platform::Tms570 => "tms570.ron",
            Platform::Unknown => "hosted.ron",
        }
    }

    pub fn core(&self) -> Option<Core> {
        match self {
            Platform::Am243x => Some(Core::CortexR5F),
            Platform::Tms570 => Some(Core::CortexR4F),
            Platform::Unknown => None,
        }
    }

    /// Memory areas used to generate the linker script. Values follow the
    /// vendor SDK defaults for each device; `Unknown` can't be linked bare-metal.
    pub fn linker_script_constants(&self) -> Option<LinkerScriptConstants> {
        match self {
            Platform::Am243x => Some(LinkerScriptConstants {
                vectors: LinkerArea { origin: 0x0000_0000, size: 0x40 },
                flash: LinkerArea { origin: 0x7008_0000, size: 0x4_0000 },
                ram: LinkerArea { origin: 0x700C_0000, size: 0x4_0000 },
            }),
            Platform::Tms570 => Some(LinkerScriptConstants {
                vectors: LinkerArea { origin: 0x0000_0000, size: 0x20 },
                flash: LinkerArea { origin: 0x0000_0020, size: 0x13_FFE0 },
                ram: LinkerArea { origin: 0x0800_0000, size: 0x3_0000 },
            }),
            Platform::Unknown => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinkerScriptConstants {
    pub vectors: LinkerArea,
    pub flash: LinkerArea,
    pub ram: LinkerArea,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LinkerArea {
    pub origin: u32,
    pub size: u32,
}

impl LinkerArea {
    pub fn end(&self) -> u32 { self.origin + self.size }

    pub fn overlaps(&self, other: &LinkerArea) -> bool {
        self.origin < other.end() && other.origin < self.end()
    }
}

impl LinkerScriptConstants {
    fn areas(&self) -> [(&'static str, LinkerArea); 3] {
        [("VECTORS", self.vectors), ("FLASH", self.flash), ("RAM", self.ram)]
    }

    /// Names of every pair of areas sharing at least one address.
    pub fn overlapping_areas(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        let areas = self.areas();
        (0..areas.len())
            .flat_map(move |i| (i + 1..areas.len()).map(move |j| (areas[i], areas[j])))
            .filter(|((_, a), (_, b))| a.overlaps(b))
            .map(|((a, _), (b, _))| (a, b))
    }
}
