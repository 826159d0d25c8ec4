//! Static reference data: the pricing catalog and the cap table.
//!
//! Every type here is loaded once, then shared read-only by all projections.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An income bracket. Selects one row of the cap table.
///
/// Example: IncomeTier("ウ")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IncomeTier(pub String);

impl IncomeTier {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl fmt::Display for IncomeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the cap table.
///
/// `frequent_cap` replaces `normal_cap` from the fourth billed month on.
/// The loader rejects rows where `frequent_cap > normal_cap`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapTierEntry {
    pub income_tier: IncomeTier,
    pub normal_cap: u64,
    pub frequent_cap: u64,
}

impl CapTierEntry {
    /// The cap that applies to the `sequence_index`-th billed month (1-based).
    pub fn cap_for(&self, sequence_index: u32) -> u64 {
        if sequence_index >= FREQUENT_TIER_THRESHOLD {
            self.frequent_cap
        } else {
            self.normal_cap
        }
    }
}

/// The billed-month count at which the frequent-month cap takes over.
pub const FREQUENT_TIER_THRESHOLD: u32 = 4;

/// How a pack of a maintenance drug is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DosingUnit {
    /// A pack lasts a fixed number of days.
    DaysPerPack(u32),
    /// A pack holds a fixed number of puffs; days covered depend on usage.
    PuffsPerPack(u32),
}

/// A maintenance drug as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugCategoryEntry {
    /// Unique within its category.
    pub name: String,
    /// Price of one pack, in whole yen.
    pub unit_price: u64,
    pub dosing_unit: DosingUnit,
}

/// Maintenance drug categories, in the order the calculator walks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrugCategory {
    FixedInhalant,
    VariableInhalant,
    AddonInhalant,
    OralDrug,
}

impl DrugCategory {
    /// Catalog iteration order. Line items in a maintenance breakdown follow it.
    pub const ORDER: [DrugCategory; 4] = [
        DrugCategory::FixedInhalant,
        DrugCategory::VariableInhalant,
        DrugCategory::AddonInhalant,
        DrugCategory::OralDrug,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DrugCategory::FixedInhalant => "fixed-day inhalants",
            DrugCategory::VariableInhalant => "variable-puff inhalants",
            DrugCategory::AddonInhalant => "add-on inhalants",
            DrugCategory::OralDrug => "oral drugs",
        }
    }
}

/// Dosing family of a biologic. Decides which patterns apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BiologicFamily {
    /// One unit to start, then three units every 84 days.
    Quarterly,
    /// Two-unit loading dose, then six units every 84 days.
    LoadingDose,
}

/// A biologic as listed in the catalog. Priced per administered unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiologicEntry {
    pub name: String,
    pub unit_price: u64,
    pub family: BiologicFamily,
}
