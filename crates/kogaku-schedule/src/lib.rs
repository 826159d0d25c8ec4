//! # kogaku-schedule
//!
//! Biologic dosing schedule generation for the KOGAKU engine.
//!
//! [`PlanScheduler`] implements [`DosingScheduler`](kogaku_core::traits::DosingScheduler).
//! Each `DosingPattern` maps to a [`DosingPlan`]: loading doses at fixed
//! offsets from the start date, then one dose repeated every 84 days. The
//! walk stops at the configured event cap.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use kogaku_schedule::PlanScheduler;
//!
//! let events = PlanScheduler.generate(&drug, start, DosingPattern::Standard, 10)?;
//! ```

pub mod plan;
pub mod scheduler;

pub use plan::{Dose, DosingPlan, RepeatingDose, MAINTENANCE_INTERVAL_DAYS};
pub use scheduler::PlanScheduler;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use kogaku_catalog::PricingCatalog;
    use kogaku_contracts::{
        catalog::{BiologicEntry, BiologicFamily, IncomeTier},
        config::{EngineConfig, DETAILED_EVENT_CAP, SIMPLE_EVENT_CAP},
        error::KogakuError,
        projection::{MaintenanceSelection, ProjectionRequest},
        schedule::{AdministrationEvent, DosingPattern},
    };
    use kogaku_core::{aggregate::aggregate_monthly, traits::DosingScheduler, CostProjector};

    use crate::PlanScheduler;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn jan_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn tezspire() -> BiologicEntry {
        BiologicEntry {
            name: "テゼスパイア".to_string(),
            unit_price: 145_000,
            family: BiologicFamily::Quarterly,
        }
    }

    fn dupixent() -> BiologicEntry {
        BiologicEntry {
            name: "デュピルマブ".to_string(),
            unit_price: 82_000,
            family: BiologicFamily::LoadingDose,
        }
    }

    /// Render events as ("YYYY-MM-DD", units) pairs for compact assertions.
    fn rendered(events: &[AdministrationEvent]) -> Vec<(String, u32)> {
        events.iter().map(|e| (e.date.to_string(), e.units)).collect()
    }

    fn generate(drug: &BiologicEntry, pattern: DosingPattern, cap: usize) -> Vec<AdministrationEvent> {
        PlanScheduler.generate(drug, jan_first(), pattern, cap).unwrap()
    }

    // ── 1. pattern shapes ─────────────────────────────────────────────────────

    #[test]
    fn standard_pattern_one_then_three_every_twelve_weeks() {
        let events = generate(&tezspire(), DosingPattern::Standard, 4);
        assert_eq!(
            rendered(&events),
            vec![
                ("2024-01-01".to_string(), 1),
                ("2024-03-25".to_string(), 3),
                ("2024-06-17".to_string(), 3),
                ("2024-09-09".to_string(), 3),
            ]
        );
    }

    #[test]
    fn deference_adjusted_adds_day_twenty_seven_dose() {
        let events = generate(&tezspire(), DosingPattern::DeferenceAdjusted, 4);
        assert_eq!(
            rendered(&events),
            vec![
                ("2024-01-01".to_string(), 1),
                ("2024-01-28".to_string(), 1),
                ("2024-03-25".to_string(), 3),
                ("2024-06-17".to_string(), 3),
            ]
        );
    }

    #[test]
    fn front_loaded_pattern() {
        let events = generate(&dupixent(), DosingPattern::FrontLoaded, 5);
        assert_eq!(
            rendered(&events),
            vec![
                ("2024-01-01".to_string(), 2),
                ("2024-01-15".to_string(), 1),
                ("2024-01-29".to_string(), 2),
                ("2024-02-26".to_string(), 6),
                ("2024-05-20".to_string(), 6),
            ]
        );
    }

    #[test]
    fn compact_pattern() {
        let events = generate(&dupixent(), DosingPattern::Compact, 4);
        assert_eq!(
            rendered(&events),
            vec![
                ("2024-01-01".to_string(), 2),
                ("2024-01-15".to_string(), 1),
                ("2024-02-12".to_string(), 6),
                ("2024-05-06".to_string(), 6),
            ]
        );
    }

    // ── 2. event cap ──────────────────────────────────────────────────────────

    #[test]
    fn generation_halts_exactly_at_cap() {
        for pattern in DosingPattern::ALL {
            let drug = if pattern.family() == BiologicFamily::Quarterly { tezspire() } else { dupixent() };
            assert_eq!(generate(&drug, pattern, SIMPLE_EVENT_CAP).len(), 6);
            assert_eq!(generate(&drug, pattern, DETAILED_EVENT_CAP).len(), 10);
        }
    }

    #[test]
    fn zero_cap_yields_no_events() {
        assert!(generate(&tezspire(), DosingPattern::Standard, 0).is_empty());
    }

    /// The cap can cut a month short: with one event allowed, the second
    /// January dose of the deference-adjusted pattern never happens.
    #[test]
    fn cap_truncates_multi_event_month() {
        let catalog = PricingCatalog::builtin().unwrap();
        let tier = kogaku_core::traits::CapSchedule::tier(&catalog, &IncomeTier::new("ウ")).unwrap();

        let one = generate(&tezspire(), DosingPattern::DeferenceAdjusted, 1);
        let two = generate(&tezspire(), DosingPattern::DeferenceAdjusted, 2);

        assert_eq!(aggregate_monthly(&one, 145_000, tier)[0].raw_cost, 145_000);
        assert_eq!(aggregate_monthly(&two, 145_000, tier)[0].raw_cost, 290_000);
    }

    #[test]
    fn cap_truncates_loading_doses() {
        let events = generate(&dupixent(), DosingPattern::FrontLoaded, 2);
        assert_eq!(
            rendered(&events),
            vec![("2024-01-01".to_string(), 2), ("2024-01-15".to_string(), 1)]
        );
    }

    // ── 3. determinism and fallback ───────────────────────────────────────────

    #[test]
    fn generation_is_idempotent() {
        let first = generate(&dupixent(), DosingPattern::FrontLoaded, 10);
        let second = generate(&dupixent(), DosingPattern::FrontLoaded, 10);
        assert_eq!(first, second);
    }

    #[test]
    fn foreign_pattern_falls_back_to_family_default() {
        assert_eq!(
            generate(&tezspire(), DosingPattern::FrontLoaded, 10),
            generate(&tezspire(), DosingPattern::Standard, 10)
        );
        assert_eq!(
            generate(&dupixent(), DosingPattern::DeferenceAdjusted, 10),
            generate(&dupixent(), DosingPattern::Compact, 10)
        );
    }

    #[test]
    fn dates_past_calendar_end_are_an_error() {
        let result = PlanScheduler.generate(&tezspire(), NaiveDate::MAX, DosingPattern::Standard, 2);

        match result {
            Err(KogakuError::DateOutOfRange { start, offset_days }) => {
                assert_eq!(start, NaiveDate::MAX);
                assert_eq!(offset_days, 84);
            }
            other => panic!("expected DateOutOfRange, got {:?}", other),
        }
    }

    // ── 4. end to end with the built-in catalog ───────────────────────────────

    fn projector(config: EngineConfig) -> CostProjector {
        let catalog = Arc::new(PricingCatalog::builtin().unwrap());
        CostProjector::new(catalog.clone(), catalog, Box::new(PlanScheduler), config)
    }

    fn request(biologic: &str, pattern: &str) -> ProjectionRequest {
        ProjectionRequest {
            income_tier: IncomeTier::new("ウ"),
            maintenance: MaintenanceSelection::default()
                .select("テリルジー200")
                .select("フルティフォーム125（120吸入）")
                .with_puffs("フルティフォーム125（120吸入）", "2"),
            biologic: biologic.to_string(),
            start_date: jan_first(),
            pattern: pattern.to_string(),
        }
    }

    #[test]
    fn standard_start_in_tier_u() {
        let report = projector(EngineConfig::detailed())
            .project(&request("テゼスパイア", "標準開始型"))
            .unwrap();

        // 12000 + 1 pack (2 * 2 * 30 = 120 puffs) of 8900
        assert_eq!(report.maintenance.total, 20_900);

        let first = &report.monthly[0];
        assert_eq!(first.month.to_string(), "2024-01");
        assert_eq!(first.raw_cost, 145_000);
        assert_eq!(first.paid_cost, 57_600);
        assert_eq!(report.diff, 57_600 - 20_900);

        for month in &report.monthly[1..] {
            assert_eq!(month.raw_cost, 435_000);
        }
        for month in &report.monthly[1..3] {
            assert_eq!(month.paid_cost, 57_600);
        }
        for month in &report.monthly[3..] {
            assert_eq!(month.cap_applied, 44_400);
            assert_eq!(month.paid_cost, 44_400);
            assert!(month.is_frequent_tier);
        }

        let frequent = report.first_frequent.unwrap();
        assert_eq!(frequent.month.to_string(), "2024-09");
        assert_eq!(frequent.paid_cost, 44_400);
        assert_eq!(frequent.cap_applied, 44_400);
    }

    #[test]
    fn event_cap_controls_month_count() {
        let detailed = projector(EngineConfig::detailed())
            .project(&request("テゼスパイア", "standard"))
            .unwrap();
        let simple = projector(EngineConfig::simple())
            .project(&request("テゼスパイア", "standard"))
            .unwrap();

        // Every standard-pattern dose falls in its own month.
        assert_eq!(detailed.monthly.len(), 10);
        assert_eq!(simple.monthly.len(), 6);
        assert_eq!(detailed.monthly.last().unwrap().month.to_string(), "2026-01");
        assert_eq!(simple.monthly.last().unwrap().month.to_string(), "2025-02");
    }

    #[test]
    fn front_loaded_month_sums_three_doses() {
        let report = projector(EngineConfig::detailed())
            .project(&request("デュピルマブ", "front-loaded"))
            .unwrap();

        assert_eq!(report.pattern, DosingPattern::FrontLoaded);
        // 2 + 1 + 2 units in January
        assert_eq!(report.monthly[0].raw_cost, 5 * 82_000);
        assert_eq!(report.monthly[1].month.to_string(), "2024-02");
        assert_eq!(report.monthly[1].raw_cost, 6 * 82_000);
        // 3 loading doses + 7 repeats, January holds three of them
        assert_eq!(report.monthly.len(), 8);
    }

    #[test]
    fn sequence_index_increases_by_one() {
        let report = projector(EngineConfig::detailed())
            .project(&request("ヌーカラ", "deference-adjusted"))
            .unwrap();

        for (idx, month) in report.monthly.iter().enumerate() {
            assert_eq!(month.sequence_index as usize, idx + 1);
            assert_eq!(month.is_frequent_tier, idx + 1 >= 4);
            assert_eq!(month.paid_cost, month.raw_cost.min(month.cap_applied));
        }
    }
}
