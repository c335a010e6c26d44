//! The fixed clothing category registry.
//!
//! Categories are a closed set. Lookups are total: an unrecognized category
//! string parses to [`CategoryId::Other`] and every id resolves to a
//! descriptor, so callers never have to handle a missing category.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category ids
// ---------------------------------------------------------------------------

/// Closed set of clothing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Tshirt,
    Shirt,
    Sweater,
    Jacket,
    Pants,
    Shorts,
    Shoes,
    /// Fallback for anything that does not fit the closed set. Unknown
    /// category strings also deserialize to this variant.
    #[serde(other)]
    Other,
}

impl CategoryId {
    /// Parse a category from its stored string form.
    ///
    /// Total function: unknown strings map to [`CategoryId::Other`].
    pub fn parse(s: &str) -> Self {
        match s {
            "tshirt" => Self::Tshirt,
            "shirt" => Self::Shirt,
            "sweater" => Self::Sweater,
            "jacket" => Self::Jacket,
            "pants" => Self::Pants,
            "shorts" => Self::Shorts,
            "shoes" => Self::Shoes,
            _ => Self::Other,
        }
    }

    /// The stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tshirt => "tshirt",
            Self::Shirt => "shirt",
            Self::Sweater => "sweater",
            Self::Jacket => "jacket",
            Self::Pants => "pants",
            Self::Shorts => "shorts",
            Self::Shoes => "shoes",
            Self::Other => "other",
        }
    }
}

// ---------------------------------------------------------------------------
// Descriptors
// ---------------------------------------------------------------------------

/// Display descriptor for a category.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// The ordered category registry, as presented in category pickers.
pub const CATEGORIES: &[Category] = &[
    Category { id: CategoryId::Tshirt, label: "T-shirts", icon: "👕" },
    Category { id: CategoryId::Shirt, label: "Shirts", icon: "👔" },
    Category { id: CategoryId::Sweater, label: "Knits & sweats", icon: "🧶" },
    Category { id: CategoryId::Jacket, label: "Jackets & outerwear", icon: "🧥" },
    Category { id: CategoryId::Pants, label: "Pants", icon: "👖" },
    Category { id: CategoryId::Shorts, label: "Shorts", icon: "🩳" },
    Category { id: CategoryId::Shoes, label: "Shoes", icon: "👟" },
    Category { id: CategoryId::Other, label: "Other", icon: "📦" },
];

/// Look up the descriptor for a category id.
///
/// Total function: always returns a descriptor (the `Other` descriptor if
/// the id is somehow absent from the registry).
pub fn category_info(id: CategoryId) -> &'static Category {
    CATEGORIES
        .iter()
        .find(|c| c.id == id)
        .unwrap_or(&CATEGORIES[CATEGORIES.len() - 1])
}

// ---------------------------------------------------------------------------
// Freshness policy
// ---------------------------------------------------------------------------

/// Wears-since-refresh cutoffs for a category.
///
/// Below `moderate` an item counts as fresh; at or above `stale` it counts
/// as stale; in between it is moderate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FreshnessThresholds {
    pub moderate: u32,
    pub stale: u32,
}

/// The per-category freshness policy.
///
/// `None` means freshness tracking is not applicable to the category and any
/// UI surface must hide it entirely, not show it zeroed.
pub fn freshness_thresholds(id: CategoryId) -> Option<FreshnessThresholds> {
    match id {
        CategoryId::Tshirt | CategoryId::Shirt | CategoryId::Sweater => {
            Some(FreshnessThresholds { moderate: 1, stale: 4 })
        }
        // Bottoms and outerwear tolerate more wears between launderings.
        CategoryId::Jacket | CategoryId::Pants | CategoryId::Shorts => {
            Some(FreshnessThresholds { moderate: 1, stale: 8 })
        }
        CategoryId::Shoes | CategoryId::Other => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
