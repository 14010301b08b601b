//! Derived build values: total price and compatibility status.
//!
//! Everything here is recomputed from a [`SelectionMap`] on demand and never
//! stored. The compatibility status is a count-based completeness label; no
//! pairwise compatibility rules are evaluated.

use crate::category::ComponentCategory;
use crate::price::Price;
use crate::selection::SelectionMap;
use serde::Serialize;
use std::fmt;

/// Number of selections at which a build is reported as compatible.
pub const COMPATIBLE_THRESHOLD: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityStatus {
    /// Nothing selected yet
    None,
    Incomplete,
    Compatible,
    /// Reserved for pairwise compatibility rules; never produced today.
    Incompatible,
}

impl CompatibilityStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "No components selected",
            Self::Incomplete => "Build Incomplete",
            Self::Compatible => "All Compatible",
            Self::Incompatible => "Compatibility Issues Detected",
        }
    }
}

impl fmt::Display for CompatibilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Compatibility {
    pub status: CompatibilityStatus,
    pub label: &'static str,
}

impl From<CompatibilityStatus> for Compatibility {
    fn from(status: CompatibilityStatus) -> Self {
        Self {
            status,
            label: status.label(),
        }
    }
}

/// Sum of the selected items' prices; zero for an empty selection
pub fn compute_total(selections: &SelectionMap) -> Price {
    selections.items().map(|item| item.price).sum()
}

/// Count-based compatibility label.
///
/// The category count is accepted for callers that display progress; the
/// threshold is [`COMPATIBLE_THRESHOLD`] regardless of its value.
pub fn compute_compatibility(selections: &SelectionMap, _total_categories: usize) -> Compatibility {
    let status = match selections.len() {
        0 => CompatibilityStatus::None,
        n if n < COMPATIBLE_THRESHOLD => CompatibilityStatus::Incomplete,
        _ => CompatibilityStatus::Compatible,
    };
    Compatibility::from(status)
}

/// Rated draw of the selected CPU and GPU
pub fn estimate_power_draw(selections: &SelectionMap) -> u32 {
    selections
        .items()
        .map(|item| item.attributes.power_draw_watts())
        .fold(0u32, u32::saturating_add)
}

/// Everything the builder overview shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildSummary {
    pub total_price: Price,
    pub compatibility: Compatibility,
    pub selected_count: usize,
    pub total_categories: usize,
    pub missing: Vec<ComponentCategory>,
    pub estimated_power_draw_watts: u32,
}

impl BuildSummary {
    pub fn from_selections(selections: &SelectionMap) -> Self {
        let total_categories = ComponentCategory::TOTAL;
        Self {
            total_price: compute_total(selections),
            compatibility: compute_compatibility(selections, total_categories),
            selected_count: selections.len(),
            total_categories,
            missing: selections.missing(),
            estimated_power_draw_watts: estimate_power_draw(selections),
        }
    }

    pub const fn is_complete(&self) -> bool {
        self.selected_count == self.total_categories
    }
}
