//! Monthly Cap Aggregator.
//!
//! Buckets administrations by calendar month and applies the income-tier cap
//! to each bucket. The frequent-month cap applies from the fourth billed month
//! on. Months without administrations produce no entry and do not advance the
//! count. Unused headroom is never carried between months.

use std::collections::BTreeMap;

use tracing::debug;

use kogaku_contracts::{
    catalog::{CapTierEntry, FREQUENT_TIER_THRESHOLD},
    cost::MonthlyCostResult,
    schedule::{AdministrationEvent, YearMonth},
};

/// Aggregate `events` into capped monthly bills, earliest month first.
pub fn aggregate_monthly(
    events: &[AdministrationEvent],
    unit_price: u64,
    tier: &CapTierEntry,
) -> Vec<MonthlyCostResult> {
    let mut raw_by_month: BTreeMap<YearMonth, u64> = BTreeMap::new();
    for event in events {
        let charge = u64::from(event.units).saturating_mul(unit_price);
        let raw = raw_by_month.entry(YearMonth::of(event.date)).or_insert(0);
        *raw = raw.saturating_add(charge);
    }

    raw_by_month
        .into_iter()
        .zip(1u32..)
        .map(|((month, raw_cost), sequence_index)| {
            let cap_applied = tier.cap_for(sequence_index);
            let paid_cost = raw_cost.min(cap_applied);
            debug!(
                %month,
                sequence_index,
                raw_cost,
                cap_applied,
                paid_cost,
                "monthly bill capped"
            );
            MonthlyCostResult {
                month,
                raw_cost,
                cap_applied,
                paid_cost,
                sequence_index,
                is_frequent_tier: sequence_index >= FREQUENT_TIER_THRESHOLD,
            }
        })
        .collect()
}
