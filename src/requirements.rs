use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw requirement value as supplied by the caller: exact headcount or a
/// min/max range. Untrusted; resolved (and clamped) before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequirementValue {
    Exact(u32),
    Range { min: u32, max: u32 },
}

impl RequirementValue {
    pub fn resolve(self) -> Requirement {
        match self {
            Self::Exact(n) => Requirement { min: n, max: n },
            // Malformed input is clamped, not rejected.
            Self::Range { min, max } if min > max => Requirement { min: max, max: min },
            Self::Range { min, max } => Requirement { min, max },
        }
    }

    pub fn is_zero(self) -> bool {
        let r = self.resolve();
        r.min == 0 && r.max == 0
    }
}

pub fn exact(n: u32) -> RequirementValue {
    RequirementValue::Exact(n)
}

pub fn range(min: u32, max: u32) -> RequirementValue {
    RequirementValue::Range { min, max }
}

/// Effective staffing requirement for one (shift code, date) unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Requirement {
    pub min: u32,
    pub max: u32,
}

/// One value per weekday, Sunday-first.
pub type WeekPattern = [RequirementValue; 7];

/// Weekly-recurring staffing requirements, shift code -> week pattern.
pub type WeeklyRequirements = BTreeMap<String, WeekPattern>;

/// Per-exact-date overrides layered on top of the weekly pattern.
pub type DateOverrides = BTreeMap<String, BTreeMap<NaiveDate, RequirementValue>>;

/// Sunday-first weekday index of a date (0 = Sunday .. 6 = Saturday).
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_sunday() as usize
}

/// Resolves the effective requirement for a shift code on a date.
///
/// Precedence: exact-date override wins outright; otherwise the weekly
/// pattern slot for that weekday; otherwise {0,0}. A zero override is
/// treated as "no override" and falls through to the weekly pattern.
/// Pure function of its inputs so that the assignment passes and the
/// verifier cannot disagree.
pub fn requirement_for(
    code: &str,
    date: NaiveDate,
    weekly: &WeeklyRequirements,
    overrides: &DateOverrides,
) -> Requirement {
    if let Some(value) = overrides.get(code).and_then(|by_date| by_date.get(&date)) {
        if !value.is_zero() {
            return value.resolve();
        }
    }
    weekly
        .get(code)
        .map(|pattern| pattern[weekday_index(date)].resolve())
        .unwrap_or_default()
}

/// Stores an override, removing the entry when the value is zero (zero means
/// "revert to the weekly pattern").
pub fn set_override(
    overrides: &mut DateOverrides,
    code: &str,
    date: NaiveDate,
    value: RequirementValue,
) {
    if value.is_zero() {
        if let Some(by_date) = overrides.get_mut(code) {
            by_date.remove(&date);
            if by_date.is_empty() {
                overrides.remove(code);
            }
        }
        return;
    }
    overrides
        .entry(code.to_owned())
        .or_default()
        .insert(date, value);
}
