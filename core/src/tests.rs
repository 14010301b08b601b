//! Cross-module tests for selection and derivation

use crate::catalog::CatalogProvider;
use crate::catalog::StaticCatalog;
use crate::category::ComponentCategory;
use crate::item::CaseSpec;
use crate::item::CatalogItem;
use crate::item::CpuSpec;
use crate::item::FormFactor;
use crate::item::GpuSpec;
use crate::item::ItemAttributes;
use crate::item::MemorySpec;
use crate::item::MemoryType;
use crate::item::PowerSupplySpec;
use crate::item::StorageInterface;
use crate::item::StorageSpec;
use crate::price::Price;
use crate::selection::SelectionAggregator;
use crate::summary::CompatibilityStatus;
use crate::summary::compute_compatibility;
use crate::summary::compute_total;
use pretty_assertions::assert_eq;

fn cpu(units: u64) -> CatalogItem {
    CatalogItem::new(
        "1",
        "Test CPU",
        "Acme",
        Price::from_units(units),
        ItemAttributes::Cpu(CpuSpec {
            socket: "AM5".to_string(),
            cores: 8,
            threads: 16,
            base_clock_ghz: 4.0,
            boost_clock_ghz: 5.0,
            tdp_watts: 105,
        }),
    )
}

fn gpu(units: u64) -> CatalogItem {
    CatalogItem::new(
        "2",
        "Test GPU",
        "Acme",
        Price::from_units(units),
        ItemAttributes::Gpu(GpuSpec {
            chipset: "T1".to_string(),
            vram_gb: 8,
            tdp_watts: 150,
        }),
    )
}

#[test]
fn cpu_and_gpu_total_400_incomplete() {
    let mut aggregator = SelectionAggregator::new();
    aggregator.select(ComponentCategory::Cpu, cpu(100)).unwrap();
    aggregator.select(ComponentCategory::Gpu, gpu(300)).unwrap();

    assert_eq!(compute_total(aggregator.view()), Price::from_units(400));
    assert_eq!(
        compute_compatibility(aggregator.view(), 3).status,
        CompatibilityStatus::Incomplete
    );
}

#[test]
fn six_selections_are_compatible() {
    let mut aggregator = SelectionAggregator::new();
    aggregator.select(ComponentCategory::Cpu, cpu(100)).unwrap();
    aggregator.select(ComponentCategory::Gpu, gpu(300)).unwrap();
    aggregator
        .select(
            ComponentCategory::Memory,
            CatalogItem::new(
                "3",
                "Test RAM",
                "Acme",
                Price::from_units(80),
                ItemAttributes::Memory(MemorySpec {
                    capacity_gb: 32,
                    modules: 2,
                    speed_mts: 6000,
                    memory_type: MemoryType::Ddr5,
                }),
            ),
        )
        .unwrap();
    aggregator
        .select(
            ComponentCategory::Storage,
            CatalogItem::new(
                "4",
                "Test SSD",
                "Acme",
                Price::from_units(60),
                ItemAttributes::Storage(StorageSpec {
                    capacity_gb: 1000,
                    interface: StorageInterface::Nvme,
                }),
            ),
        )
        .unwrap();
    aggregator
        .select(
            ComponentCategory::Case,
            CatalogItem::new(
                "5",
                "Test Case",
                "Acme",
                Price::from_units(70),
                ItemAttributes::Case(CaseSpec {
                    form_factor: FormFactor::Atx,
                    color: "Black".to_string(),
                }),
            ),
        )
        .unwrap();
    aggregator
        .select(
            ComponentCategory::PowerSupply,
            CatalogItem::new(
                "6",
                "Test PSU",
                "Acme",
                Price::from_units(90),
                ItemAttributes::PowerSupply(PowerSupplySpec {
                    wattage: 750,
                    efficiency: "80+ Gold".to_string(),
                    modular: false,
                }),
            ),
        )
        .unwrap();

    assert_eq!(aggregator.len(), 6);
    assert_eq!(compute_total(aggregator.view()), Price::from_units(700));
    assert_eq!(
        compute_compatibility(aggregator.view(), ComponentCategory::TOTAL).status,
        CompatibilityStatus::Compatible
    );
}

#[test]
fn idempotent_gpu_reselect_keeps_total() {
    let catalog = StaticCatalog::builtin();
    let item = catalog.find_item(ComponentCategory::Gpu, "rx-7800-xt").unwrap();

    let mut aggregator = SelectionAggregator::new();
    aggregator.select(ComponentCategory::Gpu, item.clone()).unwrap();
    let total = compute_total(aggregator.view());
    aggregator.select(ComponentCategory::Gpu, item.clone()).unwrap();

    assert_eq!(aggregator.get(ComponentCategory::Gpu), Some(item));
    assert_eq!(compute_total(aggregator.view()), total);
}

#[test]
fn clear_resets_everything() {
    let catalog = StaticCatalog::builtin();
    let mut aggregator = SelectionAggregator::new();
    for category in ComponentCategory::all() {
        let item = catalog.items(category)[0].clone();
        aggregator.select(category, item).unwrap();
    }
    aggregator.clear();
    assert!(aggregator.selections().is_empty());
    assert_eq!(compute_total(aggregator.view()), Price::ZERO);
    assert_eq!(
        compute_compatibility(aggregator.view(), ComponentCategory::TOTAL).status,
        CompatibilityStatus::None
    );
}
