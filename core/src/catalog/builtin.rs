//! Bundled mock catalog data

use crate::item::CaseFanSpec;
use crate::item::CaseSpec;
use crate::item::CatalogItem;
use crate::item::CoolerSpec;
use crate::item::CoolingKind;
use crate::item::CpuSpec;
use crate::item::FormFactor;
use crate::item::GpuSpec;
use crate::item::ItemAttributes;
use crate::item::MemorySpec;
use crate::item::MemoryType;
use crate::item::MonitorSpec;
use crate::item::MotherboardSpec;
use crate::item::OperatingSystemSpec;
use crate::item::PeripheralKind;
use crate::item::PeripheralSpec;
use crate::item::PowerSupplySpec;
use crate::item::StorageInterface;
use crate::item::StorageSpec;
use crate::price::Price;

pub(super) fn items() -> Vec<CatalogItem> {
    vec![
        // CPUs
        CatalogItem::new(
            "ryzen-7-7800x3d",
            "Ryzen 7 7800X3D",
            "AMD",
            Price::from_cents(44900),
            ItemAttributes::Cpu(CpuSpec {
                socket: "AM5".to_string(),
                cores: 8,
                threads: 16,
                base_clock_ghz: 4.2,
                boost_clock_ghz: 5.0,
                tdp_watts: 120,
            }),
        ),
        CatalogItem::new(
            "ryzen-5-7600",
            "Ryzen 5 7600",
            "AMD",
            Price::from_cents(22900),
            ItemAttributes::Cpu(CpuSpec {
                socket: "AM5".to_string(),
                cores: 6,
                threads: 12,
                base_clock_ghz: 3.8,
                boost_clock_ghz: 5.1,
                tdp_watts: 65,
            }),
        ),
        CatalogItem::new(
            "core-i7-14700k",
            "Core i7-14700K",
            "Intel",
            Price::from_cents(40999),
            ItemAttributes::Cpu(CpuSpec {
                socket: "LGA1700".to_string(),
                cores: 20,
                threads: 28,
                base_clock_ghz: 3.4,
                boost_clock_ghz: 5.6,
                tdp_watts: 125,
            }),
        ),
        // CPU coolers
        CatalogItem::new(
            "nh-d15",
            "NH-D15",
            "Noctua",
            Price::from_cents(10995),
            ItemAttributes::CpuCooler(CoolerSpec {
                cooling: CoolingKind::Air,
                radiator_mm: None,
                max_tdp_watts: 250,
            }),
        ),
        CatalogItem::new(
            "kraken-360",
            "Kraken 360",
            "NZXT",
            Price::from_cents(17999),
            ItemAttributes::CpuCooler(CoolerSpec {
                cooling: CoolingKind::Liquid,
                radiator_mm: Some(360),
                max_tdp_watts: 300,
            }),
        ),
        // Motherboards
        CatalogItem::new(
            "b650-tomahawk",
            "MAG B650 Tomahawk WiFi",
            "MSI",
            Price::from_cents(21999),
            ItemAttributes::Motherboard(MotherboardSpec {
                socket: "AM5".to_string(),
                chipset: "B650".to_string(),
                form_factor: FormFactor::Atx,
                memory_slots: 4,
                memory_type: MemoryType::Ddr5,
            }),
        ),
        CatalogItem::new(
            "z790-aorus-elite",
            "Z790 Aorus Elite AX",
            "Gigabyte",
            Price::from_cents(25999),
            ItemAttributes::Motherboard(MotherboardSpec {
                socket: "LGA1700".to_string(),
                chipset: "Z790".to_string(),
                form_factor: FormFactor::Atx,
                memory_slots: 4,
                memory_type: MemoryType::Ddr5,
            }),
        ),
        CatalogItem::new(
            "b760m-pro",
            "PRO B760M-A",
            "MSI",
            Price::from_cents(13999),
            ItemAttributes::Motherboard(MotherboardSpec {
                socket: "LGA1700".to_string(),
                chipset: "B760".to_string(),
                form_factor: FormFactor::MicroAtx,
                memory_slots: 4,
                memory_type: MemoryType::Ddr4,
            }),
        ),
        // Memory
        CatalogItem::new(
            "vengeance-32-ddr5",
            "Vengeance 32GB DDR5-6000",
            "Corsair",
            Price::from_cents(10499),
            ItemAttributes::Memory(MemorySpec {
                capacity_gb: 32,
                modules: 2,
                speed_mts: 6000,
                memory_type: MemoryType::Ddr5,
            }),
        ),
        CatalogItem::new(
            "trident-z5-64",
            "Trident Z5 RGB 64GB DDR5-6400",
            "G.Skill",
            Price::from_cents(21999),
            ItemAttributes::Memory(MemorySpec {
                capacity_gb: 64,
                modules: 2,
                speed_mts: 6400,
                memory_type: MemoryType::Ddr5,
            }),
        ),
        CatalogItem::new(
            "fury-beast-16-ddr4",
            "Fury Beast 16GB DDR4-3200",
            "Kingston",
            Price::from_cents(4299),
            ItemAttributes::Memory(MemorySpec {
                capacity_gb: 16,
                modules: 2,
                speed_mts: 3200,
                memory_type: MemoryType::Ddr4,
            }),
        ),
        // Storage
        CatalogItem::new(
            "990-pro-2tb",
            "990 Pro 2TB",
            "Samsung",
            Price::from_cents(16999),
            ItemAttributes::Storage(StorageSpec {
                capacity_gb: 2000,
                interface: StorageInterface::Nvme,
            }),
        ),
        CatalogItem::new(
            "sn850x-1tb",
            "WD Black SN850X 1TB",
            "Western Digital",
            Price::from_cents(8999),
            ItemAttributes::Storage(StorageSpec {
                capacity_gb: 1000,
                interface: StorageInterface::Nvme,
            }),
        ),
        CatalogItem::new(
            "mx500-1tb",
            "MX500 1TB",
            "Crucial",
            Price::from_cents(5999),
            ItemAttributes::Storage(StorageSpec {
                capacity_gb: 1000,
                interface: StorageInterface::Sata,
            }),
        ),
        // Graphics cards
        CatalogItem::new(
            "rtx-4070-super",
            "GeForce RTX 4070 Super",
            "NVIDIA",
            Price::from_cents(59999),
            ItemAttributes::Gpu(GpuSpec {
                chipset: "AD104".to_string(),
                vram_gb: 12,
                tdp_watts: 220,
            }),
        ),
        CatalogItem::new(
            "rx-7800-xt",
            "Radeon RX 7800 XT",
            "AMD",
            Price::from_cents(49999),
            ItemAttributes::Gpu(GpuSpec {
                chipset: "Navi 32".to_string(),
                vram_gb: 16,
                tdp_watts: 263,
            }),
        ),
        CatalogItem::new(
            "rtx-4090",
            "GeForce RTX 4090",
            "NVIDIA",
            Price::from_cents(159999),
            ItemAttributes::Gpu(GpuSpec {
                chipset: "AD102".to_string(),
                vram_gb: 24,
                tdp_watts: 450,
            }),
        ),
        // Cases
        CatalogItem::new(
            "h7-flow",
            "H7 Flow",
            "NZXT",
            Price::from_cents(12999),
            ItemAttributes::Case(CaseSpec {
                form_factor: FormFactor::Atx,
                color: "Black".to_string(),
            }),
        ),
        CatalogItem::new(
            "lancool-216",
            "Lancool 216",
            "Lian Li",
            Price::from_cents(9999),
            ItemAttributes::Case(CaseSpec {
                form_factor: FormFactor::Atx,
                color: "White".to_string(),
            }),
        ),
        // Power supplies
        CatalogItem::new(
            "rm850x",
            "RM850x",
            "Corsair",
            Price::from_cents(13499),
            ItemAttributes::PowerSupply(PowerSupplySpec {
                wattage: 850,
                efficiency: "80+ Gold".to_string(),
                modular: true,
            }),
        ),
        CatalogItem::new(
            "focus-gx-650",
            "Focus GX-650",
            "Seasonic",
            Price::from_cents(8999),
            ItemAttributes::PowerSupply(PowerSupplySpec {
                wattage: 650,
                efficiency: "80+ Gold".to_string(),
                modular: true,
            }),
        ),
        CatalogItem::new(
            "hx1200",
            "HX1200",
            "Corsair",
            Price::from_cents(25999),
            ItemAttributes::PowerSupply(PowerSupplySpec {
                wattage: 1200,
                efficiency: "80+ Platinum".to_string(),
                modular: true,
            }),
        ),
        // Case fans
        CatalogItem::new(
            "p12-pwm-5pack",
            "P12 PWM PST (5-pack)",
            "Arctic",
            Price::from_cents(3299),
            ItemAttributes::CaseFans(CaseFanSpec {
                size_mm: 120,
                pack_count: 5,
                rgb: false,
            }),
        ),
        CatalogItem::new(
            "uni-fan-sl120-3pack",
            "UNI FAN SL120 V2 (3-pack)",
            "Lian Li",
            Price::from_cents(7999),
            ItemAttributes::CaseFans(CaseFanSpec {
                size_mm: 120,
                pack_count: 3,
                rgb: true,
            }),
        ),
        // Operating systems
        CatalogItem::new(
            "windows-11-home",
            "Windows 11 Home",
            "Microsoft",
            Price::from_cents(13900),
            ItemAttributes::OperatingSystem(OperatingSystemSpec {
                edition: "Home".to_string(),
                architecture: "x86_64".to_string(),
            }),
        ),
        CatalogItem::new(
            "windows-11-pro",
            "Windows 11 Pro",
            "Microsoft",
            Price::from_cents(19999),
            ItemAttributes::OperatingSystem(OperatingSystemSpec {
                edition: "Pro".to_string(),
                architecture: "x86_64".to_string(),
            }),
        ),
        CatalogItem::new(
            "ubuntu-24-04",
            "Ubuntu 24.04 LTS",
            "Canonical",
            Price::ZERO,
            ItemAttributes::OperatingSystem(OperatingSystemSpec {
                edition: "Desktop".to_string(),
                architecture: "x86_64".to_string(),
            }),
        ),
        // Monitors
        CatalogItem::new(
            "27gp850-b",
            "UltraGear 27GP850-B",
            "LG",
            Price::from_cents(34999),
            ItemAttributes::Monitor(MonitorSpec {
                size_inches: 27.0,
                resolution: "2560x1440".to_string(),
                refresh_hz: 180,
                panel: "IPS".to_string(),
            }),
        ),
        CatalogItem::new(
            "odyssey-g7-32",
            "Odyssey G7 32\"",
            "Samsung",
            Price::from_cents(59999),
            ItemAttributes::Monitor(MonitorSpec {
                size_inches: 32.0,
                resolution: "3840x2160".to_string(),
                refresh_hz: 144,
                panel: "VA".to_string(),
            }),
        ),
        // Peripherals
        CatalogItem::new(
            "g-pro-x-superlight",
            "PRO X Superlight",
            "Logitech",
            Price::from_cents(15999),
            ItemAttributes::Peripherals(PeripheralSpec {
                kind: PeripheralKind::Mouse,
                wireless: true,
            }),
        ),
        CatalogItem::new(
            "k70-rgb-pro",
            "K70 RGB Pro",
            "Corsair",
            Price::from_cents(15999),
            ItemAttributes::Peripherals(PeripheralSpec {
                kind: PeripheralKind::Keyboard,
                wireless: false,
            }),
        ),
        CatalogItem::new(
            "cloud-ii-combo",
            "Cloud II Gaming Bundle",
            "HyperX",
            Price::from_cents(12999),
            ItemAttributes::Peripherals(PeripheralSpec {
                kind: PeripheralKind::Combo,
                wireless: false,
            }),
        ),
    ]
}
