//! Loading catalogs from JSON and TOML files

use pcforge_core::BuilderConfig;
use pcforge_core::BuilderError;
use pcforge_core::BuildSession;
use pcforge_core::CatalogProvider;
use pcforge_core::ComponentCategory;
use pcforge_core::CompatibilityStatus;
use pcforge_core::Price;
use pcforge_core::StaticCatalog;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const JSON_CATALOG: &str = r#"{
    "cpu": [
        {
            "id": "cpu-1",
            "name": "Budget Six-Core",
            "brand": "Acme",
            "price": 100,
            "attributes": {
                "category": "cpu",
                "socket": "AM5",
                "cores": 6,
                "threads": 12,
                "base_clock_ghz": 3.8,
                "boost_clock_ghz": 5.1,
                "tdp_watts": 65
            }
        }
    ],
    "gpu": [
        {
            "id": "gpu-1",
            "name": "Midrange Card",
            "brand": "Acme",
            "price": 300,
            "attributes": {
                "category": "gpu",
                "chipset": "M1",
                "vram_gb": 12,
                "tdp_watts": 200
            }
        }
    ]
}"#;

const TOML_CATALOG: &str = r#"
[[psu]]
id = "psu-1"
name = "Quiet 750"
brand = "Acme"
price = 99.5

[psu.attributes]
category = "power-supply"
wattage = 750
efficiency = "80+ Gold"
modular = true
"#;

#[test]
fn json_catalog_drives_a_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, JSON_CATALOG).unwrap();

    let catalog = StaticCatalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.categories().len(), 12);
    assert!(catalog.items(ComponentCategory::Memory).is_empty());

    let mut session = BuildSession::new("From file");
    session.select_from_catalog(&catalog, "cpu", "cpu-1").unwrap();
    session.select_from_catalog(&catalog, "gpu", "gpu-1").unwrap();

    let summary = session.summary();
    assert_eq!(summary.total_price, Price::from_units(400));
    assert_eq!(summary.compatibility.status, CompatibilityStatus::Incomplete);
    assert_eq!(summary.estimated_power_draw_watts, 265);
}

#[test]
fn toml_catalog_accepts_aliases_for_category_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    std::fs::write(&path, TOML_CATALOG).unwrap();

    let catalog = StaticCatalog::from_path(&path).unwrap();
    let psu = catalog
        .find_item(ComponentCategory::PowerSupply, "psu-1")
        .unwrap();
    assert_eq!(psu.price, Price::from_cents(9950));
}

#[test]
fn unknown_category_key_is_rejected() {
    let json = r#"{"flux-capacitor": []}"#;
    assert!(matches!(
        StaticCatalog::from_json_str(json),
        Err(BuilderError::UnknownCategory(id)) if id == "flux-capacitor"
    ));
}

#[test]
fn mismatched_attribute_tag_is_rejected() {
    let json = JSON_CATALOG.replacen("\"gpu\": [", "\"memory\": [", 1);
    assert!(matches!(
        StaticCatalog::from_json_str(&json),
        Err(BuilderError::CategoryMismatch {
            expected: ComponentCategory::Memory,
            actual: ComponentCategory::Gpu,
        })
    ));
}

#[test]
fn config_points_at_catalog_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("parts.json"), JSON_CATALOG).unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "catalog_path = \"parts.json\"\n").unwrap();

    let config = BuilderConfig::load(Some(&config_path)).unwrap();
    let catalog = config.catalog().unwrap();
    assert_eq!(catalog.len(), 2);
}
