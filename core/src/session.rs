//! Build sessions owning a selection aggregator

use crate::catalog::CatalogProvider;
use crate::category::ComponentCategory;
use crate::error::Result;
use crate::item::CatalogItem;
use crate::selection::SelectionAggregator;
use crate::selection::SelectionMap;
use crate::summary::BuildSummary;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;
use uuid::Uuid;

/// Body of a `POST /builds` request: category id to selected item id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveBuildRequest {
    pub selections: BTreeMap<ComponentCategory, String>,
}

/// Reply to a `POST /builds` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBuildResponse {
    pub build_id: String,
}

/// One user's in-progress build.
///
/// Selections live as long as the session does, independent of which
/// surface is currently showing it.
#[derive(Debug, Clone)]
pub struct BuildSession {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    aggregator: SelectionAggregator,
}

impl BuildSession {
    pub fn new(name: impl Into<String>) -> Self {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let name = name.into();
        info!("Created build session {} ({})", id, name);
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
            aggregator: SelectionAggregator::new(),
        }
    }

    pub const fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn select(
        &mut self,
        category: ComponentCategory,
        item: CatalogItem,
    ) -> Result<Option<CatalogItem>> {
        let displaced = self.aggregator.select(category, item)?;
        self.touch();
        Ok(displaced)
    }

    pub fn select_from_catalog<C>(
        &mut self,
        catalog: &C,
        category_id: &str,
        item_id: &str,
    ) -> Result<Option<CatalogItem>>
    where
        C: CatalogProvider + ?Sized,
    {
        let displaced = self
            .aggregator
            .select_from_catalog(catalog, category_id, item_id)?;
        self.touch();
        Ok(displaced)
    }

    pub fn remove(&mut self, category: ComponentCategory) -> Option<CatalogItem> {
        let removed = self.aggregator.remove(category);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    /// Clear Build
    pub fn clear(&mut self) {
        self.aggregator.clear();
        self.touch();
        info!("Cleared build session {}", self.id);
    }

    pub fn selections(&self) -> SelectionMap {
        self.aggregator.selections()
    }

    pub const fn aggregator(&self) -> &SelectionAggregator {
        &self.aggregator
    }

    pub fn summary(&self) -> BuildSummary {
        BuildSummary::from_selections(self.aggregator.view())
    }

    /// Payload for saving this build to a backend. Nothing is sent.
    pub fn save_request(&self) -> SaveBuildRequest {
        SaveBuildRequest {
            selections: self.aggregator.view().item_ids(),
        }
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StaticCatalog;
    use crate::summary::CompatibilityStatus;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_session_is_empty() {
        let session = BuildSession::new("Gaming rig");
        assert_eq!(session.name(), "Gaming rig");
        assert!(session.selections().is_empty());
        assert_eq!(
            session.summary().compatibility.status,
            CompatibilityStatus::None
        );
        assert_eq!(session.created_at(), session.updated_at());
    }

    #[test]
    fn mutations_bump_updated_at() {
        let catalog = StaticCatalog::builtin();
        let mut session = BuildSession::new("Workstation");
        let created = session.created_at();
        session
            .select_from_catalog(&catalog, "cpu", "core-i7-14700k")
            .unwrap();
        assert!(session.updated_at() >= created);
        assert_eq!(session.aggregator().len(), 1);
    }

    #[test]
    fn save_request_maps_category_ids_to_item_ids() {
        let catalog = StaticCatalog::builtin();
        let mut session = BuildSession::new("Budget");
        session
            .select_from_catalog(&catalog, "psu", "focus-gx-650")
            .unwrap();
        session
            .select_from_catalog(&catalog, "cpu", "ryzen-5-7600")
            .unwrap();

        let body = serde_json::to_value(session.save_request()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "selections": {
                    "cpu": "ryzen-5-7600",
                    "power-supply": "focus-gx-650"
                }
            })
        );
    }

    #[test]
    fn save_response_uses_camel_case() {
        let response: SaveBuildResponse =
            serde_json::from_str(r#"{"buildId": "b-42"}"#).unwrap();
        assert_eq!(response.build_id, "b-42");
    }

    #[test]
    fn clear_empties_session() {
        let catalog = StaticCatalog::builtin();
        let mut session = BuildSession::new("Scratch");
        session
            .select_from_catalog(&catalog, "gpu", "rx-7800-xt")
            .unwrap();
        session.clear();
        assert!(session.selections().is_empty());
        assert!(session.save_request().selections.is_empty());
    }
}
