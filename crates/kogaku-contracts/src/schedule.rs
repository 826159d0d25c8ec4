//! Administration events, month keys, and dosing pattern names.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{
    catalog::BiologicFamily,
    error::{KogakuError, KogakuResult},
};

/// A single biologic administration produced by a schedule generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministrationEvent {
    pub date: NaiveDate,
    /// Number of units administered on `date`. Always positive.
    pub units: u32,
}

/// A calendar year-month billing bucket.
///
/// Field order makes the derived `Ord` chronological. Renders as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Build a key, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> KogakuResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(KogakuError::InvalidRequest {
                reason: format!("month {} is outside 1..=12", month),
            });
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = KogakuError;

    fn from_str(s: &str) -> KogakuResult<Self> {
        let invalid = || KogakuError::InvalidRequest {
            reason: format!("'{}' is not a YYYY-MM month", s),
        };
        let (year, month) = s.rsplit_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Which dosing patterns an engine recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternSet {
    /// Every named pattern of both families.
    #[default]
    Full,
    /// Only each family's default; every other name falls back to it.
    DefaultOnly,
}

/// A named administration rule for a biologic, relative to its start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DosingPattern {
    /// Quarterly family: 1 unit, 1 more at +27 days, then 3 units every 84 days.
    DeferenceAdjusted,
    /// Quarterly family default: 1 unit, then 3 units every 84 days.
    Standard,
    /// Loading-dose family: 2, 1 at +14, 2 at +28, then 6 every 84 days from +56.
    FrontLoaded,
    /// Loading-dose family default: 2, 1 at +14, then 6 every 84 days from +42.
    Compact,
}

impl DosingPattern {
    pub const ALL: [DosingPattern; 4] = [
        DosingPattern::DeferenceAdjusted,
        DosingPattern::Standard,
        DosingPattern::FrontLoaded,
        DosingPattern::Compact,
    ];

    /// The kebab-case name used on the command line and in JSON.
    pub fn name(&self) -> &'static str {
        match self {
            DosingPattern::DeferenceAdjusted => "deference-adjusted",
            DosingPattern::Standard => "standard",
            DosingPattern::FrontLoaded => "front-loaded",
            DosingPattern::Compact => "compact",
        }
    }

    /// The label shown on the patient-facing intake form.
    pub fn form_label(&self) -> &'static str {
        match self {
            DosingPattern::DeferenceAdjusted => "査定配慮型（月初月末開始）",
            DosingPattern::Standard => "標準開始型",
            DosingPattern::FrontLoaded => "月初2→2週後1→4週後2→翌月以降6本まとめ",
            DosingPattern::Compact => "2→2週後1→翌月以降6本まとめ",
        }
    }

    pub fn family(&self) -> BiologicFamily {
        match self {
            DosingPattern::DeferenceAdjusted | DosingPattern::Standard => BiologicFamily::Quarterly,
            DosingPattern::FrontLoaded | DosingPattern::Compact => BiologicFamily::LoadingDose,
        }
    }

    pub fn family_default(family: BiologicFamily) -> Self {
        match family {
            BiologicFamily::Quarterly => DosingPattern::Standard,
            BiologicFamily::LoadingDose => DosingPattern::Compact,
        }
    }

    /// Match free text against pattern names and form labels.
    pub fn parse_name(text: &str) -> Option<Self> {
        let text = text.trim();
        Self::ALL.into_iter().find(|p| {
            p.name().eq_ignore_ascii_case(text) || p.form_label() == text
        })
    }

    /// Resolve a free-text pattern name for a biologic of `family`.
    ///
    /// Never fails. Unknown names, names from the other family, and
    /// non-default names under `PatternSet::DefaultOnly` all resolve to the
    /// family default.
    pub fn resolve(family: BiologicFamily, text: &str, set: PatternSet) -> Self {
        let default = Self::family_default(family);
        match (Self::parse_name(text), set) {
            (Some(pattern), PatternSet::Full) if pattern.family() == family => pattern,
            _ => default,
        }
    }
}

impl fmt::Display for DosingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
