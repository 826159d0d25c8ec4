//! Comparison Reporter.
//!
//! Sets the first biologic month against the current maintenance regimen and
//! finds where the frequent-month discount begins.

use kogaku_contracts::{
    cost::{MaintenanceCostResult, MonthlyCostResult},
    projection::FrequentMonthSummary,
};

/// First biologic month's payment minus the maintenance total.
///
/// An empty schedule counts as a zero-cost first month.
pub fn first_month_diff(maintenance: &MaintenanceCostResult, monthly: &[MonthlyCostResult]) -> i64 {
    let first_paid = monthly.first().map_or(0, |m| m.paid_cost);
    to_signed(first_paid) - to_signed(maintenance.total)
}

/// The earliest month billed at the frequent-month cap, if the schedule gets there.
pub fn first_frequent_month(monthly: &[MonthlyCostResult]) -> Option<FrequentMonthSummary> {
    monthly
        .iter()
        .find(|m| m.is_frequent_tier)
        .map(|m| FrequentMonthSummary {
            month: m.month,
            paid_cost: m.paid_cost,
            cap_applied: m.cap_applied,
        })
}

fn to_signed(amount: u64) -> i64 {
    i64::try_from(amount).unwrap_or(i64::MAX)
}
