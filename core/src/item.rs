//! Catalog items and their per-category attributes

use crate::category::ComponentCategory;
use crate::price::Price;
use serde::Deserialize;
use serde::Serialize;

/// A selectable product within one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique within the item's category
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: Price,
    pub attributes: ItemAttributes,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        price: Price,
        attributes: ItemAttributes,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            price,
            attributes,
        }
    }

    /// The category this item can be selected into
    pub const fn category(&self) -> ComponentCategory {
        self.attributes.category()
    }
}

/// Category-specific attributes. The variant decides the item's category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum ItemAttributes {
    Cpu(CpuSpec),
    CpuCooler(CoolerSpec),
    Motherboard(MotherboardSpec),
    Memory(MemorySpec),
    Storage(StorageSpec),
    Gpu(GpuSpec),
    Case(CaseSpec),
    PowerSupply(PowerSupplySpec),
    CaseFans(CaseFanSpec),
    OperatingSystem(OperatingSystemSpec),
    Monitor(MonitorSpec),
    Peripherals(PeripheralSpec),
}

impl ItemAttributes {
    pub const fn category(&self) -> ComponentCategory {
        match self {
            Self::Cpu(_) => ComponentCategory::Cpu,
            Self::CpuCooler(_) => ComponentCategory::CpuCooler,
            Self::Motherboard(_) => ComponentCategory::Motherboard,
            Self::Memory(_) => ComponentCategory::Memory,
            Self::Storage(_) => ComponentCategory::Storage,
            Self::Gpu(_) => ComponentCategory::Gpu,
            Self::Case(_) => ComponentCategory::Case,
            Self::PowerSupply(_) => ComponentCategory::PowerSupply,
            Self::CaseFans(_) => ComponentCategory::CaseFans,
            Self::OperatingSystem(_) => ComponentCategory::OperatingSystem,
            Self::Monitor(_) => ComponentCategory::Monitor,
            Self::Peripherals(_) => ComponentCategory::Peripherals,
        }
    }

    /// Rated power draw for the parts that dominate a build's consumption
    pub const fn power_draw_watts(&self) -> u32 {
        match self {
            Self::Cpu(spec) => spec.tdp_watts,
            Self::Gpu(spec) => spec.tdp_watts,
            _ => 0,
        }
    }

    /// Short human-readable attribute line for listings
    pub fn headline(&self) -> String {
        match self {
            Self::Cpu(s) => format!(
                "{}C/{}T, {:.1}-{:.1} GHz, {}, {} W",
                s.cores, s.threads, s.base_clock_ghz, s.boost_clock_ghz, s.socket, s.tdp_watts
            ),
            Self::CpuCooler(s) => match s.radiator_mm {
                Some(mm) => format!("{:?} cooler, {mm} mm radiator", s.cooling),
                None => format!("{:?} cooler, up to {} W", s.cooling, s.max_tdp_watts),
            },
            Self::Motherboard(s) => format!(
                "{} {}, {:?}, {}x {:?}",
                s.socket, s.chipset, s.form_factor, s.memory_slots, s.memory_type
            ),
            Self::Memory(s) => format!(
                "{} GB ({}x{} GB) {:?}-{}",
                s.capacity_gb,
                s.modules,
                s.capacity_gb / u32::from(s.modules.max(1)),
                s.memory_type,
                s.speed_mts
            ),
            Self::Storage(s) => format!("{} GB {:?}", s.capacity_gb, s.interface),
            Self::Gpu(s) => format!("{}, {} GB VRAM, {} W", s.chipset, s.vram_gb, s.tdp_watts),
            Self::Case(s) => format!("{:?} {}", s.form_factor, s.color),
            Self::PowerSupply(s) => format!(
                "{} W, {}{}",
                s.wattage,
                s.efficiency,
                if s.modular { ", modular" } else { "" }
            ),
            Self::CaseFans(s) => format!(
                "{}x {} mm{}",
                s.pack_count,
                s.size_mm,
                if s.rgb { " RGB" } else { "" }
            ),
            Self::OperatingSystem(s) => format!("{} ({})", s.edition, s.architecture),
            Self::Monitor(s) => format!(
                "{:.1}\" {} @ {} Hz {}",
                s.size_inches, s.resolution, s.refresh_hz, s.panel
            ),
            Self::Peripherals(s) => format!(
                "{:?}{}",
                s.kind,
                if s.wireless { ", wireless" } else { "" }
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormFactor {
    Atx,
    MicroAtx,
    MiniItx,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemoryType {
    Ddr4,
    Ddr5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoolingKind {
    Air,
    Liquid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageInterface {
    Nvme,
    Sata,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PeripheralKind {
    Keyboard,
    Mouse,
    Headset,
    Combo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuSpec {
    pub socket: String,
    pub cores: u16,
    pub threads: u16,
    pub base_clock_ghz: f32,
    pub boost_clock_ghz: f32,
    pub tdp_watts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoolerSpec {
    pub cooling: CoolingKind,
    #[serde(default)]
    pub radiator_mm: Option<u16>,
    pub max_tdp_watts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MotherboardSpec {
    pub socket: String,
    pub chipset: String,
    pub form_factor: FormFactor,
    pub memory_slots: u8,
    pub memory_type: MemoryType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySpec {
    pub capacity_gb: u32,
    pub modules: u8,
    pub speed_mts: u32,
    pub memory_type: MemoryType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSpec {
    pub capacity_gb: u32,
    pub interface: StorageInterface,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuSpec {
    pub chipset: String,
    pub vram_gb: u32,
    pub tdp_watts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSpec {
    pub form_factor: FormFactor,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerSupplySpec {
    pub wattage: u32,
    pub efficiency: String,
    pub modular: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFanSpec {
    pub size_mm: u16,
    pub pack_count: u8,
    pub rgb: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingSystemSpec {
    pub edition: String,
    pub architecture: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorSpec {
    pub size_inches: f32,
    pub resolution: String,
    pub refresh_hz: u32,
    pub panel: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeripheralSpec {
    pub kind: PeripheralKind,
    pub wireless: bool,
}
