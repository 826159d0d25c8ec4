//! Cost results produced by the calculators.

use serde::{Deserialize, Serialize};

use crate::schedule::YearMonth;

/// The biologic bill for one calendar month after the cap is applied.
///
/// Invariants: `paid_cost == min(raw_cost, cap_applied)`, and
/// `is_frequent_tier == (sequence_index >= 4)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyCostResult {
    pub month: YearMonth,
    /// Sum of `units * unit_price` over the month's administrations.
    pub raw_cost: u64,
    pub cap_applied: u64,
    pub paid_cost: u64,
    /// 1-based position of this month among the billed months of one schedule.
    pub sequence_index: u32,
    pub is_frequent_tier: bool,
}

/// One maintenance drug's contribution to the monthly total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    /// Cost normalised to 30 days.
    pub normalized_monthly_cost: u64,
}

/// The 30-day cost of a maintenance regimen, itemised in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceCostResult {
    pub total: u64,
    pub line_items: Vec<LineItem>,
}

impl MaintenanceCostResult {
    /// Append a line item and add it to the total. The total saturates.
    pub fn push(&mut self, label: impl Into<String>, normalized_monthly_cost: u64) {
        self.total = self.total.saturating_add(normalized_monthly_cost);
        self.line_items.push(LineItem {
            label: label.into(),
            normalized_monthly_cost,
        });
    }
}
