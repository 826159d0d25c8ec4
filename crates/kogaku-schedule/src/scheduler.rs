//! `DosingScheduler` implementation backed by `DosingPlan`.

use chrono::{Days, NaiveDate};
use tracing::{debug, warn};

use kogaku_contracts::{
    catalog::BiologicEntry,
    error::{KogakuError, KogakuResult},
    schedule::{AdministrationEvent, DosingPattern},
};
use kogaku_core::traits::DosingScheduler;

use crate::plan::DosingPlan;

/// Generates administrations from the built-in dosing plans.
///
/// Stateless: the same drug, start date, pattern, and cap always yield the
/// same events.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanScheduler;

impl PlanScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl DosingScheduler for PlanScheduler {
    /// Generate up to `event_cap` administrations, in date order.
    ///
    /// A pattern from the other family is replaced by the drug's family
    /// default. Returns `KogakuError::DateOutOfRange` if a dose would land
    /// past the end of the calendar.
    fn generate(
        &self,
        drug: &BiologicEntry,
        start: NaiveDate,
        pattern: DosingPattern,
        event_cap: usize,
    ) -> KogakuResult<Vec<AdministrationEvent>> {
        let pattern = if pattern.family() == drug.family {
            pattern
        } else {
            let fallback = DosingPattern::family_default(drug.family);
            warn!(
                biologic = %drug.name,
                requested = %pattern,
                fallback = %fallback,
                "pattern does not belong to the drug's family"
            );
            fallback
        };

        let plan = DosingPlan::for_pattern(pattern);
        let events = plan
            .doses(event_cap)
            .map(|dose| -> KogakuResult<AdministrationEvent> {
                let date = start.checked_add_days(Days::new(dose.offset_days)).ok_or(
                    KogakuError::DateOutOfRange {
                        start,
                        offset_days: dose.offset_days,
                    },
                )?;
                Ok(AdministrationEvent { date, units: dose.units })
            })
            .collect::<KogakuResult<Vec<_>>>()?;

        debug!(
            biologic = %drug.name,
            %pattern,
            %start,
            event_cap,
            events = events.len(),
            "schedule generated"
        );

        Ok(events)
    }
}
