//! Dosing plans and the bounded state machine that walks them.
//!
//! A plan is a short list of loading doses followed by one dose that repeats
//! at a fixed interval. `PlanDoses` walks it with state
//! `(doses emitted, next repeat offset)` and stops at the event cap, even
//! part-way through the loading doses.

use kogaku_contracts::schedule::DosingPattern;

/// Days between maintenance administrations (twelve weeks).
pub const MAINTENANCE_INTERVAL_DAYS: u64 = 84;

/// One administration, relative to the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dose {
    pub offset_days: u64,
    pub units: u32,
}

/// A dose repeated every `interval_days`, starting at `first_offset_days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatingDose {
    pub first_offset_days: u64,
    pub interval_days: u64,
    pub units: u32,
}

/// The administration rule of one dosing pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DosingPlan {
    pub loading: Vec<Dose>,
    pub maintenance: RepeatingDose,
}

const fn dose(offset_days: u64, units: u32) -> Dose {
    Dose { offset_days, units }
}

const fn every_twelve_weeks(first_offset_days: u64, units: u32) -> RepeatingDose {
    RepeatingDose {
        first_offset_days,
        interval_days: MAINTENANCE_INTERVAL_DAYS,
        units,
    }
}

impl DosingPlan {
    pub fn for_pattern(pattern: DosingPattern) -> Self {
        match pattern {
            DosingPattern::DeferenceAdjusted => Self {
                loading: vec![dose(0, 1), dose(27, 1)],
                maintenance: every_twelve_weeks(84, 3),
            },
            DosingPattern::Standard => Self {
                loading: vec![dose(0, 1)],
                maintenance: every_twelve_weeks(84, 3),
            },
            DosingPattern::FrontLoaded => Self {
                loading: vec![dose(0, 2), dose(14, 1), dose(28, 2)],
                maintenance: every_twelve_weeks(56, 6),
            },
            DosingPattern::Compact => Self {
                loading: vec![dose(0, 2), dose(14, 1)],
                maintenance: every_twelve_weeks(42, 6),
            },
        }
    }

    /// Walk the plan, yielding at most `event_cap` doses.
    pub fn doses(&self, event_cap: usize) -> PlanDoses<'_> {
        PlanDoses {
            plan: self,
            event_cap,
            emitted: 0,
            next_repeat_offset: self.maintenance.first_offset_days,
        }
    }
}

/// Iterator over the doses of a `DosingPlan`. Always finite.
#[derive(Debug, Clone)]
pub struct PlanDoses<'a> {
    plan: &'a DosingPlan,
    event_cap: usize,
    emitted: usize,
    next_repeat_offset: u64,
}

impl Iterator for PlanDoses<'_> {
    type Item = Dose;

    fn next(&mut self) -> Option<Dose> {
        if self.emitted >= self.event_cap {
            return None;
        }

        let next = match self.plan.loading.get(self.emitted) {
            Some(loading) => *loading,
            None => {
                let repeat = dose(self.next_repeat_offset, self.plan.maintenance.units);
                self.next_repeat_offset = self
                    .next_repeat_offset
                    .saturating_add(self.plan.maintenance.interval_days);
                repeat
            }
        };

        self.emitted += 1;
        Some(next)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.event_cap.saturating_sub(self.emitted);
        (remaining, Some(remaining))
    }
}
