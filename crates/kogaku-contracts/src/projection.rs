//! The request the presentation layer submits and the report it gets back.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::IncomeTier,
    cost::{MaintenanceCostResult, MonthlyCostResult},
    schedule::{DosingPattern, YearMonth},
};

/// Which maintenance drugs the patient takes today.
///
/// `puffs_per_use` holds the raw text the patient entered for variable-puff
/// inhalers. It is parsed leniently: anything that is not an integer >= 1
/// counts as one puff.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaintenanceSelection {
    pub selected: HashSet<String>,
    #[serde(default)]
    pub puffs_per_use: HashMap<String, String>,
    /// Add-on inhalants are ignored unless this is set, even when selected.
    #[serde(default)]
    pub include_addon: bool,
}

impl MaintenanceSelection {
    pub fn select(mut self, name: impl Into<String>) -> Self {
        self.selected.insert(name.into());
        self
    }

    pub fn with_puffs(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.puffs_per_use.insert(name.into(), raw.into());
        self
    }

    pub fn with_addon(mut self, include: bool) -> Self {
        self.include_addon = include;
        self
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.contains(name)
    }
}

/// Everything one projection needs, already validated upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub income_tier: IncomeTier,
    pub maintenance: MaintenanceSelection,
    pub biologic: String,
    pub start_date: NaiveDate,
    /// Free text; resolved against the biologic's family.
    pub pattern: String,
}

/// The first month billed at the frequent-month cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequentMonthSummary {
    pub month: YearMonth,
    pub paid_cost: u64,
    pub cap_applied: u64,
}

/// The full comparison handed back to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub income_tier: IncomeTier,
    pub biologic: String,
    /// The pattern actually used, after fallback.
    pub pattern: DosingPattern,
    pub maintenance: MaintenanceCostResult,
    pub monthly: Vec<MonthlyCostResult>,
    /// First biologic month's payment minus the maintenance total. May be negative.
    pub diff: i64,
    pub first_frequent: Option<FrequentMonthSummary>,
}
