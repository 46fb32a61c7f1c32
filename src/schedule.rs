use crate::model::{
    find_definition, Absence, ScheduledShift, ShiftCode, ShiftDefinition, ShiftTime, Staff,
    StaffId, Team,
};
use crate::planner::{is_shift_allowed, PlanOptions};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("unknown schedule record: {0}")]
    UnknownRecord(String),
    #[error("record {0} is not an uncovered placeholder")]
    NotUncovered(String),
    #[error("unknown shift code: {0}")]
    UnknownCode(String),
    #[error("shift code {0} is still assigned in the schedule")]
    CodeInUse(String),
}

/// Candidate found for an uncovered shift.
#[derive(Debug, Clone)]
pub struct ReplacementOption {
    pub staff_id: StaffId,
    pub reason: String,
}

/// The persisted flat list of schedule records, with the mutations the
/// engine's output feeds into: month overwrite, absence application and
/// manual replacement of uncovered shifts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    pub entries: Vec<ScheduledShift>,
}

impl Schedule {
    pub fn entry_for(&self, staff_id: &StaffId, date: NaiveDate) -> Option<&ScheduledShift> {
        self.entries
            .iter()
            .find(|e| &e.staff_id == staff_id && e.date == date && !e.is_uncovered())
    }

    pub fn entry_by_id(&self, id: &str) -> Option<&ScheduledShift> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn uncovered(&self) -> impl Iterator<Item = &ScheduledShift> {
        self.entries.iter().filter(|e| e.is_uncovered())
    }

    /// Full-month replace: drops every record for `target_month` belonging
    /// to one of `staff_ids`, then inserts the new set. Never merges.
    pub fn overwrite_month(
        &mut self,
        target_month: &str,
        staff_ids: &[StaffId],
        new_entries: Vec<ScheduledShift>,
    ) {
        self.entries.retain(|e| {
            let in_month = e.date.format("%Y-%m").to_string() == target_month;
            let affected = staff_ids.contains(&e.staff_id);
            !(in_month && affected)
        });
        self.entries.extend(new_entries);
    }

    /// Applies a declared absence: each day in the range is replaced by the
    /// reason code, and days that previously held a real (fillable) shift
    /// spawn an uncovered placeholder carrying the original staff id.
    /// Returns the placeholders created.
    pub fn apply_absence(
        &mut self,
        absence: &Absence,
        catalog: &[ShiftDefinition],
    ) -> Vec<ScheduledShift> {
        let mut placeholders = Vec::new();
        let mut replacements = Vec::new();

        for date in absence.dates() {
            if let Some(existing) = self.entry_for(&absence.staff_id, date) {
                let def = existing
                    .shift_code
                    .as_deref()
                    .and_then(|c| find_definition(catalog, c));
                if let Some(def) = def {
                    if !matches!(def.time, ShiftTime::Absence | ShiftTime::Rest) {
                        placeholders.push(ScheduledShift::uncovered(
                            date,
                            &def.code,
                            Some(absence.staff_id.clone()),
                        ));
                    }
                }
            }
            replacements.push(ScheduledShift::assignment(
                &absence.staff_id,
                date,
                &absence.reason,
            ));
        }

        self.entries.retain(|e| {
            !(e.staff_id == absence.staff_id && absence.covers(e.date))
        });
        self.entries.extend(replacements);
        self.entries.extend(placeholders.iter().cloned());
        placeholders
    }

    /// Candidates able to pick up an uncovered shift: eligible for the code,
    /// not the original holder, and free that day (no entry, or a rest entry
    /// other than the post-night recovery code).
    pub fn find_replacements(
        &self,
        placeholder: &ScheduledShift,
        roster: &[Staff],
        catalog: &[ShiftDefinition],
        teams: &[Team],
        opts: &PlanOptions,
    ) -> Vec<ReplacementOption> {
        let Some(code) = placeholder.shift_code.as_deref() else {
            return Vec::new();
        };
        roster
            .iter()
            .filter(|s| !s.id.is_unassigned())
            .filter(|s| Some(&s.id) != placeholder.original_staff_id.as_ref())
            .filter(|s| is_shift_allowed(code, s, catalog, teams, opts))
            .filter(|s| {
                let Some(existing) = self.entry_for(&s.id, placeholder.date) else {
                    return true;
                };
                let Some(raw) = existing.shift_code.as_deref() else {
                    return true;
                };
                match find_definition(catalog, raw) {
                    // Busy, absent or on post-night recovery: out.
                    Some(def) => def.time == ShiftTime::Rest && def.code != opts.recovery_code,
                    None => true,
                }
            })
            .map(|s| ReplacementOption {
                staff_id: s.id.clone(),
                reason: "available".to_owned(),
            })
            .collect()
    }

    /// Consumes an uncovered placeholder by assigning the shift to `staff_id`.
    /// Any existing record for that staff member on the day is replaced.
    pub fn assign_replacement(
        &mut self,
        placeholder_id: &str,
        staff_id: &StaffId,
    ) -> Result<ScheduledShift, ScheduleError> {
        let placeholder = self
            .entry_by_id(placeholder_id)
            .ok_or_else(|| ScheduleError::UnknownRecord(placeholder_id.to_owned()))?;
        if !placeholder.is_uncovered() {
            return Err(ScheduleError::NotUncovered(placeholder_id.to_owned()));
        }
        let code = placeholder
            .shift_code
            .clone()
            .ok_or_else(|| ScheduleError::NotUncovered(placeholder_id.to_owned()))?;
        let date = placeholder.date;

        let record = ScheduledShift::assignment(staff_id, date, &code);
        self.entries
            .retain(|e| e.id != placeholder_id && !(e.staff_id == *staff_id && e.date == date));
        self.entries.push(record.clone());
        Ok(record)
    }
}

/// Deletes a catalog entry, refusing while the code is referenced by the
/// schedule (including as a component of a combined code).
pub fn remove_definition(
    catalog: &mut Vec<ShiftDefinition>,
    code: &str,
    schedule: &Schedule,
) -> Result<(), ScheduleError> {
    if find_definition(catalog, code).is_none() {
        return Err(ScheduleError::UnknownCode(code.to_owned()));
    }
    let in_use = schedule.entries.iter().any(|e| {
        e.shift_code
            .as_deref()
            .map_or(false, |raw| ShiftCode::parse(raw, catalog).covers(code))
    });
    if in_use {
        return Err(ScheduleError::CodeInUse(code.to_owned()));
    }
    catalog.retain(|d| d.code != code);
    Ok(())
}

/// Replaces a catalog entry; when the code itself changes, matching schedule
/// records are rewritten to the new code.
pub fn rename_definition(
    catalog: &mut [ShiftDefinition],
    original_code: &str,
    updated: ShiftDefinition,
    schedule: &mut Schedule,
) -> Result<(), ScheduleError> {
    let def = catalog
        .iter_mut()
        .find(|d| d.code == original_code)
        .ok_or_else(|| ScheduleError::UnknownCode(original_code.to_owned()))?;
    let new_code = updated.code.clone();
    *def = updated;
    if new_code != original_code {
        for entry in &mut schedule.entries {
            if entry.shift_code.as_deref() == Some(original_code) {
                entry.shift_code = Some(new_code.clone());
            }
        }
    }
    Ok(())
}
