//! The closed set of component categories a build is made of.

use crate::error::BuilderError;
use crate::error::Result;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use strum::EnumCount;
use strum::IntoEnumIterator;
use strum_macros::EnumCount as EnumCountMacro;
use strum_macros::EnumIter;
use strum_macros::EnumString;

/// A slot in a build. Declaration order is display order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    EnumCountMacro,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum ComponentCategory {
    #[strum(serialize = "cpu", serialize = "processor")]
    Cpu,
    #[strum(serialize = "cpu-cooler", serialize = "cooler")]
    CpuCooler,
    #[strum(serialize = "motherboard", serialize = "mobo")]
    Motherboard,
    #[strum(serialize = "memory", serialize = "ram")]
    Memory,
    #[strum(serialize = "storage", serialize = "ssd")]
    Storage,
    #[strum(serialize = "gpu", serialize = "graphics")]
    Gpu,
    #[strum(serialize = "case")]
    Case,
    #[strum(serialize = "power-supply", serialize = "psu")]
    PowerSupply,
    #[strum(serialize = "case-fans", serialize = "fans")]
    CaseFans,
    #[strum(serialize = "operating-system", serialize = "os")]
    OperatingSystem,
    #[strum(serialize = "monitor", serialize = "display")]
    Monitor,
    #[strum(serialize = "peripherals")]
    Peripherals,
}

impl ComponentCategory {
    /// Number of categories in a complete build.
    pub const TOTAL: usize = <Self as EnumCount>::COUNT;

    /// Parse a category id (or one of its aliases).
    pub fn from_id(id: &str) -> Result<Self> {
        Self::from_str(id.trim()).map_err(|_| BuilderError::UnknownCategory(id.to_string()))
    }

    /// All categories in display order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Canonical short identifier, as used in catalog files and request bodies
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::CpuCooler => "cpu-cooler",
            Self::Motherboard => "motherboard",
            Self::Memory => "memory",
            Self::Storage => "storage",
            Self::Gpu => "gpu",
            Self::Case => "case",
            Self::PowerSupply => "power-supply",
            Self::CaseFans => "case-fans",
            Self::OperatingSystem => "operating-system",
            Self::Monitor => "monitor",
            Self::Peripherals => "peripherals",
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::CpuCooler => "CPU Cooler",
            Self::Motherboard => "Motherboard",
            Self::Memory => "Memory",
            Self::Storage => "Storage",
            Self::Gpu => "Graphics Card",
            Self::Case => "Case",
            Self::PowerSupply => "Power Supply",
            Self::CaseFans => "Case Fans",
            Self::OperatingSystem => "Operating System",
            Self::Monitor => "Monitor",
            Self::Peripherals => "Peripherals",
        }
    }

    /// One-line helper text shown next to the category
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Cpu => "The processor that runs everything else",
            Self::CpuCooler => "Keeps the processor within its thermal limits",
            Self::Motherboard => "Connects every component together",
            Self::Memory => "Working memory for running applications",
            Self::Storage => "Drives for the operating system, games and files",
            Self::Gpu => "Renders graphics and accelerates compute workloads",
            Self::Case => "Houses and protects the components",
            Self::PowerSupply => "Delivers stable power to every component",
            Self::CaseFans => "Moves air through the case",
            Self::OperatingSystem => "The software platform the build boots into",
            Self::Monitor => "Displays what the build renders",
            Self::Peripherals => "Keyboard, mouse and audio gear",
        }
    }

    pub fn info(&self) -> CategoryInfo {
        CategoryInfo::from(*self)
    }
}

impl fmt::Display for ComponentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Display record for a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl From<ComponentCategory> for CategoryInfo {
    fn from(category: ComponentCategory) -> Self {
        Self {
            id: category.id(),
            name: category.name(),
            description: category.description(),
        }
    }
}
