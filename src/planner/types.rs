use crate::model::{ScheduledShift, StaffId};
use chrono::NaiveDate;
use thiserror::Error;

/// Per-squad phase offsets into the 5-day rotation cycle. Chosen so that
/// exactly one squad is on night duty each calendar day.
pub const SQUAD_OFFSETS: [u32; 5] = [0, 4, 3, 2, 1];

/// How head nurses are credited during coverage verification.
///
/// Eligibility always lets a head nurse take any nurse shift; whether those
/// assignments also satisfy nurse-specific minimums is a policy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadNursePolicy {
    /// Any assignment matching the code counts toward the minimum.
    #[default]
    CountTowardMinimum,
    /// Only staff whose role is listed on the shift definition count.
    RequireListedRole,
}

/// Options d'une génération mensuelle.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Code written on every Sunday for H6/H12 contracts.
    pub weekly_rest_code: String,
    /// Post-night recovery code, barred to H12 contracts.
    pub recovery_code: String,
    /// Codes only workable by H12/H24 contracts.
    pub long_shift_codes: Vec<String>,
    /// The fixed 5-day cycle walked by H24 nurse squads:
    /// night, recovery, rest, ward morning, ward afternoon.
    pub rotation_pattern: [String; 5],
    pub head_nurse_policy: HeadNursePolicy,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            weekly_rest_code: "RS".to_owned(),
            recovery_code: "S".to_owned(),
            long_shift_codes: vec!["Ps".to_owned()],
            rotation_pattern: [
                "N".to_owned(),
                "S".to_owned(),
                "R".to_owned(),
                "Mn".to_owned(),
                "Pn".to_owned(),
            ],
            head_nurse_policy: HeadNursePolicy::default(),
        }
    }
}

/// Non-negotiable single-day constraint fed into the generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedAbsence {
    pub staff_id: StaffId,
    pub date: NaiveDate,
    pub shift_code: String,
}

/// Result of a generation run: the full month's records (uncovered
/// placeholders included) plus the ordered pass trace.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub assignments: Vec<ScheduledShift>,
    pub log: Vec<String>,
}

impl PlanOutcome {
    pub fn uncovered(&self) -> impl Iterator<Item = &ScheduledShift> {
        self.assignments.iter().filter(|s| s.is_uncovered())
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid target month (expected YYYY-MM): {0}")]
    InvalidMonth(String),
    #[error("roster is empty")]
    EmptyRoster,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
