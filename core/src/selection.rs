//! Per-category selection state for a build

use crate::catalog::CatalogProvider;
use crate::category::ComponentCategory;
use crate::error::BuilderError;
use crate::error::Result;
use crate::item::CatalogItem;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map;
use tracing::debug;
use tracing::warn;

/// Assignment of categories to at most one chosen item each
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SelectionMap(BTreeMap<ComponentCategory, CatalogItem>);

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, category: ComponentCategory) -> Option<&CatalogItem> {
        self.0.get(&category)
    }

    pub fn contains(&self, category: ComponentCategory) -> bool {
        self.0.contains_key(&category)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Selected items in category display order
    pub fn iter(&self) -> btree_map::Iter<'_, ComponentCategory, CatalogItem> {
        self.0.iter()
    }

    pub fn items(&self) -> impl Iterator<Item = &CatalogItem> {
        self.0.values()
    }

    /// Categories that have no selection yet, in display order
    pub fn missing(&self) -> Vec<ComponentCategory> {
        ComponentCategory::all()
            .filter(|category| !self.contains(*category))
            .collect()
    }

    /// Mapping of category to selected item id
    pub fn item_ids(&self) -> BTreeMap<ComponentCategory, String> {
        self.0
            .iter()
            .map(|(category, item)| (*category, item.id.clone()))
            .collect()
    }

    fn insert(&mut self, category: ComponentCategory, item: CatalogItem) -> Option<CatalogItem> {
        self.0.insert(category, item)
    }

    fn remove(&mut self, category: ComponentCategory) -> Option<CatalogItem> {
        self.0.remove(&category)
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

impl<'a> IntoIterator for &'a SelectionMap {
    type Item = (&'a ComponentCategory, &'a CatalogItem);
    type IntoIter = btree_map::Iter<'a, ComponentCategory, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Holds the current per-category selection. The only mutable build state.
#[derive(Debug, Clone, Default)]
pub struct SelectionAggregator {
    selections: SelectionMap,
}

impl SelectionAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `item` for `category`, replacing any earlier choice.
    ///
    /// Returns the displaced item, if any. Fails without touching the
    /// selection when the item belongs to another category.
    pub fn select(
        &mut self,
        category: ComponentCategory,
        item: CatalogItem,
    ) -> Result<Option<CatalogItem>> {
        let actual = item.category();
        if actual != category {
            warn!(
                "Rejected item {} for {}: it belongs to {}",
                item.id, category, actual
            );
            return Err(BuilderError::CategoryMismatch {
                expected: category,
                actual,
            });
        }
        debug!("Selected {} for {}", item.id, category);
        Ok(self.selections.insert(category, item))
    }

    /// Select by string ids, resolving the item through `catalog`
    pub fn select_from_catalog<C>(
        &mut self,
        catalog: &C,
        category_id: &str,
        item_id: &str,
    ) -> Result<Option<CatalogItem>>
    where
        C: CatalogProvider + ?Sized,
    {
        let category = ComponentCategory::from_id(category_id).inspect_err(|_| {
            warn!("Rejected selection into unknown category {category_id}");
        })?;
        let item = catalog.find_item(category, item_id)?.clone();
        self.select(category, item)
    }

    /// Drop the selection for one category
    pub fn remove(&mut self, category: ComponentCategory) -> Option<CatalogItem> {
        let removed = self.selections.remove(category);
        if let Some(item) = &removed {
            debug!("Removed {} from {}", item.id, category);
        }
        removed
    }

    pub fn clear(&mut self) {
        debug!("Clearing {} selections", self.selections.len());
        self.selections.clear();
    }

    pub fn get(&self, category: ComponentCategory) -> Option<&CatalogItem> {
        self.selections.get(category)
    }

    /// Owned snapshot of the current selections
    pub fn selections(&self) -> SelectionMap {
        self.selections.clone()
    }

    /// Borrowed view for derivations that do not need a copy
    pub const fn view(&self) -> &SelectionMap {
        &self.selections
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}
