//! Maintenance Cost Calculator.
//!
//! Converts the per-pack prices of the selected maintenance drugs into a
//! comparable 30-day cost.
//!
//! - Days-per-pack drugs: `floor(unit_price * 30 / days_per_pack)`.
//! - Puffs-per-pack drugs: two uses a day, `puffs_per_use` puffs each, thirty
//!   days; packs are bought whole, so the pack count rounds up.
//!
//! Categories are walked in `DrugCategory::ORDER` and entries in catalog
//! order, so the line items of two identical requests are identical.

use tracing::debug;

use kogaku_contracts::{
    catalog::{DosingUnit, DrugCategory, DrugCategoryEntry},
    cost::MaintenanceCostResult,
    projection::MaintenanceSelection,
};

use crate::traits::DrugCatalog;

/// Length of the normalised billing period, in days.
pub const NORMALIZED_DAYS: u64 = 30;

/// Variable-puff inhalers are used morning and evening.
pub const USES_PER_DAY: u64 = 2;

/// Puffs per use assumed when the entered count is missing or unusable.
pub const DEFAULT_PUFFS_PER_USE: u64 = 1;

/// Largest puffs-per-use count taken at face value.
pub const MAX_PUFFS_PER_USE: u64 = 20;

/// 30-day cost of a drug sold in packs covering `days_per_pack` days.
///
/// Integer division truncates; fractional yen are dropped. Saturates at
/// `u64::MAX` rather than wrapping.
pub fn normalize_fixed(unit_price: u64, days_per_pack: u32) -> u64 {
    // The catalog loader rejects zero-day packs.
    unit_price
        .saturating_mul(NORMALIZED_DAYS)
        .checked_div(u64::from(days_per_pack))
        .unwrap_or(0)
}

/// Whole packs needed to cover 30 days at `puffs_per_use` puffs, twice a day.
pub fn packs_for_puffs(puffs_per_use: u64, puffs_per_pack: u32) -> u64 {
    let monthly_puffs = USES_PER_DAY
        .saturating_mul(puffs_per_use)
        .saturating_mul(NORMALIZED_DAYS);
    match u64::from(puffs_per_pack) {
        0 => 0,
        per_pack => monthly_puffs.div_ceil(per_pack),
    }
}

/// Parse the entered puffs-per-use count.
///
/// Lenient on purpose: a missing value, text that is not an integer, and any
/// integer outside `1..=MAX_PUFFS_PER_USE` all become `DEFAULT_PUFFS_PER_USE`.
pub fn parse_puffs_per_use(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<i64>().ok())
        .and_then(|n| u64::try_from(n).ok())
        .filter(|n| (1..=MAX_PUFFS_PER_USE).contains(n))
        .unwrap_or(DEFAULT_PUFFS_PER_USE)
}

/// Compute the 30-day maintenance cost of `selection` against `catalog`.
pub fn calculate_maintenance(
    catalog: &dyn DrugCatalog,
    selection: &MaintenanceSelection,
) -> MaintenanceCostResult {
    let mut result = MaintenanceCostResult::default();

    for category in DrugCategory::ORDER {
        if category == DrugCategory::AddonInhalant && !selection.include_addon {
            continue;
        }

        for entry in catalog.entries(category) {
            if !selection.is_selected(&entry.name) {
                continue;
            }
            let (label, cost) = line_item(entry, selection);
            debug!(category = category.label(), drug = %entry.name, cost, "maintenance line item");
            result.push(label, cost);
        }
    }

    result
}

fn line_item(entry: &DrugCategoryEntry, selection: &MaintenanceSelection) -> (String, u64) {
    match entry.dosing_unit {
        DosingUnit::DaysPerPack(days) => (entry.name.clone(), normalize_fixed(entry.unit_price, days)),
        DosingUnit::PuffsPerPack(per_pack) => {
            let raw = selection.puffs_per_use.get(&entry.name).map(String::as_str);
            let puffs = parse_puffs_per_use(raw);
            debug!(drug = %entry.name, raw = ?raw, puffs, "puffs per use resolved");
            let packs = packs_for_puffs(puffs, per_pack);
            (
                format!("{}（1回{}吸入）", entry.name, puffs),
                packs.saturating_mul(entry.unit_price),
            )
        }
    }
}
