//! Catalog providers supplying categories and their selectable items

mod builtin;

use crate::category::CategoryInfo;
use crate::category::ComponentCategory;
use crate::error::BuilderError;
use crate::error::Result;
use crate::item::CatalogItem;
use std::collections::BTreeMap;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;
use tracing::info;

/// Source of catalog data.
///
/// The builtin data set and catalog files both sit behind this trait, as
/// would a client for a remote product API.
pub trait CatalogProvider {
    /// Items offered for a category, in listing order
    fn items(&self, category: ComponentCategory) -> &[CatalogItem];

    /// All categories in display order
    fn categories(&self) -> Vec<CategoryInfo> {
        ComponentCategory::all().map(CategoryInfo::from).collect()
    }

    /// Items for a category given by its string id
    fn items_by_id(&self, category_id: &str) -> Result<&[CatalogItem]> {
        let category = ComponentCategory::from_id(category_id)?;
        Ok(self.items(category))
    }

    fn find_item(&self, category: ComponentCategory, item_id: &str) -> Result<&CatalogItem> {
        self.items(category)
            .iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| BuilderError::UnknownItem {
                category,
                item_id: item_id.to_string(),
            })
    }
}

/// In-memory catalog, either the builtin data set or one loaded from a file
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: BTreeMap<ComponentCategory, Vec<CatalogItem>>,
}

impl StaticCatalog {
    /// The bundled mock catalog covering every category
    pub fn builtin() -> Self {
        let mut items: BTreeMap<ComponentCategory, Vec<CatalogItem>> = BTreeMap::new();
        for item in builtin::items() {
            items.entry(item.category()).or_default().push(item);
        }
        Self { items }
    }

    /// Build a catalog from items grouped by category.
    ///
    /// Every item must carry attributes of the category it is listed under
    /// and ids must be unique within a category.
    pub fn from_groups(
        groups: impl IntoIterator<Item = (ComponentCategory, Vec<CatalogItem>)>,
    ) -> Result<Self> {
        let mut items: BTreeMap<ComponentCategory, Vec<CatalogItem>> = BTreeMap::new();
        for (category, group) in groups {
            let bucket = items.entry(category).or_default();
            let mut seen: HashSet<String> = bucket.iter().map(|item| item.id.clone()).collect();
            for item in group {
                if item.category() != category {
                    return Err(BuilderError::CategoryMismatch {
                        expected: category,
                        actual: item.category(),
                    });
                }
                if !seen.insert(item.id.clone()) {
                    return Err(BuilderError::DuplicateItem {
                        category,
                        item_id: item.id,
                    });
                }
                bucket.push(item);
            }
        }
        Ok(Self { items })
    }

    /// Parse a JSON catalog: an object mapping category ids to item arrays
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<CatalogItem>> =
            serde_json::from_str(json).map_err(|e| BuilderError::InvalidCatalog(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Parse a TOML catalog: a table mapping category ids to item arrays
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<CatalogItem>> =
            toml::from_str(toml).map_err(|e| BuilderError::InvalidCatalog(e.to_string()))?;
        Self::from_raw(raw)
    }

    /// Load a catalog file; `.toml` files are parsed as TOML, anything else as JSON
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        let catalog = if is_toml {
            Self::from_toml_str(&contents)?
        } else {
            Self::from_json_str(&contents)?
        };
        info!(
            "Loaded catalog from {} ({} items)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    fn from_raw(raw: BTreeMap<String, Vec<CatalogItem>>) -> Result<Self> {
        let mut groups = Vec::with_capacity(raw.len());
        for (id, items) in raw {
            let category = ComponentCategory::from_id(&id)?;
            debug!("Catalog category {} has {} items", category, items.len());
            groups.push((category, items));
        }
        Self::from_groups(groups)
    }

    /// Total number of items across all categories
    pub fn len(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.values().all(Vec::is_empty)
    }
}

impl CatalogProvider for StaticCatalog {
    fn items(&self, category: ComponentCategory) -> &[CatalogItem] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }
}
