mod coverage;
mod eligibility;
mod fixed;
mod types;
mod util;
mod verify;

pub use eligibility::{allowed_shifts, is_shift_allowed};
pub use types::{
    FixedAbsence, HeadNursePolicy, PlanError, PlanOptions, PlanOutcome, SQUAD_OFFSETS,
};

use crate::model::{ScheduledShift, ShiftDefinition, Staff, StaffId, Team};
use crate::requirements::{DateOverrides, WeeklyRequirements};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Planner : moteur de génération mensuelle.
///
/// Holds the read-only snapshots (roster, catalog, teams) shared by every
/// run; requirements and fixed absences are supplied fresh per generation.
/// The planner never mutates its inputs and returns a complete result or an
/// error, nothing in between.
#[derive(Debug)]
pub struct Planner<'a> {
    roster: &'a [Staff],
    catalog: &'a [ShiftDefinition],
    teams: &'a [Team],
    opts: PlanOptions,
}

impl<'a> Planner<'a> {
    pub fn new(roster: &'a [Staff], catalog: &'a [ShiftDefinition], teams: &'a [Team]) -> Self {
        Self {
            roster,
            catalog,
            teams,
            opts: PlanOptions::default(),
        }
    }

    pub fn with_options(mut self, opts: PlanOptions) -> Self {
        self.opts = opts;
        self
    }

    pub fn options(&self) -> &PlanOptions {
        &self.opts
    }

    /// Generates a full month of assignments.
    ///
    /// Passes run in fixed order: absences and other hard constraints first,
    /// then the greedy minimum and maximum coverage passes, then an
    /// independent verification that emits uncovered placeholders for any
    /// remaining deficit. An unsatisfiable month is a normal outcome, not an
    /// error.
    pub fn generate(
        &self,
        target_month: &str,
        weekly: &WeeklyRequirements,
        overrides: &DateOverrides,
        fixed_absences: &[FixedAbsence],
    ) -> Result<PlanOutcome, PlanError> {
        let (year, month) = util::parse_month(target_month)?;
        if self.roster.is_empty() {
            return Err(PlanError::EmptyRoster);
        }

        let mut run = Run::new(self, weekly, overrides, fixed_absences, year, month);
        run.log.push(format!(
            "generation start: {} ({} staff, {} catalog entries)",
            target_month,
            self.roster.len(),
            self.catalog.len()
        ));

        fixed::apply(&mut run);
        coverage::fill(&mut run, coverage::Target::Minimum);
        coverage::fill(&mut run, coverage::Target::Maximum);
        let uncovered = verify::emit_uncovered(&mut run);

        let mut assignments = Vec::new();
        for (staff_id, days) in &run.board {
            for (date, code) in days {
                assignments.push(ScheduledShift::assignment(staff_id, *date, code));
            }
        }
        let deficit = uncovered.len();
        assignments.extend(uncovered);

        run.log.push(if deficit == 0 {
            "generation complete: all minimums covered".to_owned()
        } else {
            format!("generation complete: {deficit} uncovered unit(s) need replacements")
        });

        Ok(PlanOutcome {
            assignments,
            log: run.log,
        })
    }
}

/// Mutable state of one generation run: the per-staff per-date board plus
/// the running totals driving the fairness ordering.
pub(crate) struct Run<'a> {
    pub(crate) planner: &'a Planner<'a>,
    pub(crate) weekly: &'a WeeklyRequirements,
    pub(crate) overrides: &'a DateOverrides,
    pub(crate) fixed_absences: &'a [FixedAbsence],
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) board: BTreeMap<StaffId, BTreeMap<NaiveDate, String>>,
    totals: BTreeMap<StaffId, u32>,
    pub(crate) log: Vec<String>,
}

impl<'a> Run<'a> {
    fn new(
        planner: &'a Planner<'a>,
        weekly: &'a WeeklyRequirements,
        overrides: &'a DateOverrides,
        fixed_absences: &'a [FixedAbsence],
        year: i32,
        month: u32,
    ) -> Self {
        let mut board = BTreeMap::new();
        let mut totals = BTreeMap::new();
        for s in planner.roster {
            board.insert(s.id.clone(), BTreeMap::new());
            totals.insert(s.id.clone(), 0);
        }
        Self {
            planner,
            weekly,
            overrides,
            fixed_absences,
            year,
            month,
            board,
            totals,
            log: Vec::new(),
        }
    }

    pub(crate) fn dates(&self) -> impl Iterator<Item = (u32, NaiveDate)> {
        util::month_days(self.year, self.month)
    }

    pub(crate) fn is_free(&self, staff_id: &StaffId, date: NaiveDate) -> bool {
        self.board
            .get(staff_id)
            .map_or(true, |days| !days.contains_key(&date))
    }

    /// Writes a non-negotiable entry without touching the fairness totals.
    pub(crate) fn set_fixed(&mut self, staff_id: &StaffId, date: NaiveDate, code: &str) {
        self.board
            .entry(staff_id.clone())
            .or_default()
            .insert(date, code.to_owned());
    }

    /// Writes an entry and bumps the staff member's running total.
    pub(crate) fn assign(&mut self, staff_id: &StaffId, date: NaiveDate, code: &str) {
        self.set_fixed(staff_id, date, code);
        *self.totals.entry(staff_id.clone()).or_insert(0) += 1;
    }

    pub(crate) fn total(&self, staff_id: &StaffId) -> u32 {
        self.totals.get(staff_id).copied().unwrap_or(0)
    }

    /// Headcount whose board entry equals `code` exactly on `date`.
    pub(crate) fn assigned_exact(&self, date: NaiveDate, code: &str) -> u32 {
        self.board
            .values()
            .filter(|days| days.get(&date).map(String::as_str) == Some(code))
            .count() as u32
    }
}
