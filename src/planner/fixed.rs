use super::types::SQUAD_OFFSETS;
use super::util;
use super::Run;
use crate::model::{ContractType, StaffRole};
use chrono::{Datelike, Weekday};

/// Applies the non-negotiable entries before any optimization runs, in
/// strength order: declared absences, weekly rest for H6/H12 contracts,
/// then the 5-squad rotation for H24 nurses. Each step only writes a cell
/// that is still empty, so an earlier (stronger) entry always wins.
pub(super) fn apply(run: &mut Run<'_>) {
    apply_absences(run);
    apply_sunday_rest(run);
    apply_squad_rotation(run);
}

fn apply_absences(run: &mut Run<'_>) {
    run.log
        .push("pass 0: applying fixed absences".to_owned());
    let absences: Vec<_> = run
        .fixed_absences
        .iter()
        .filter(|a| util::in_month(a.date, run.year, run.month))
        .filter(|a| run.planner.roster.iter().any(|s| s.id == a.staff_id))
        .cloned()
        .collect();
    let count = absences.len();
    for a in absences {
        if run.is_free(&a.staff_id, a.date) {
            run.set_fixed(&a.staff_id, a.date, &a.shift_code);
        }
    }
    run.log.push(format!("pass 0: {count} absence day(s) applied"));
}

fn apply_sunday_rest(run: &mut Run<'_>) {
    let rest_code = run.planner.opts.weekly_rest_code.clone();
    let short_contract: Vec<_> = run
        .planner
        .roster
        .iter()
        .filter(|s| matches!(s.contract, ContractType::H6 | ContractType::H12))
        .map(|s| s.id.clone())
        .collect();
    if short_contract.is_empty() {
        run.log
            .push("pass 0.5: no H6/H12 staff, skipping weekly rest".to_owned());
        return;
    }
    run.log.push(format!(
        "pass 0.5: weekly rest '{rest_code}' for {} H6/H12 staff on every Sunday",
        short_contract.len()
    ));
    let sundays: Vec<_> = run
        .dates()
        .filter(|(_, d)| d.weekday() == Weekday::Sun)
        .map(|(_, d)| d)
        .collect();
    for date in sundays {
        for staff_id in &short_contract {
            if run.is_free(staff_id, date) {
                run.assign(staff_id, date, &rest_code);
            }
        }
    }
}

fn apply_squad_rotation(run: &mut Run<'_>) {
    // The fixed cycle is specific to the nursing role; doctors and
    // healthcare assistants are covered by the requirement-driven passes.
    let squads: Vec<_> = run
        .planner
        .roster
        .iter()
        .filter(|s| s.role == StaffRole::Nurse)
        .filter_map(|s| s.rotation_squad().map(|squad| (s.id.clone(), squad)))
        .collect();
    if squads.is_empty() {
        run.log
            .push("pass 1: no H24 nurses with a squad, skipping rotation".to_owned());
        return;
    }
    run.log.push(format!(
        "pass 1: 5-squad rotation for {} H24 nurse(s)",
        squads.len()
    ));

    let pattern = run.planner.opts.rotation_pattern.clone();
    let days: Vec<_> = run.dates().collect();
    for (day, date) in days {
        for (staff_id, squad) in &squads {
            let offset = SQUAD_OFFSETS[(*squad - 1) as usize];
            let idx = ((day - 1 + offset) % pattern.len() as u32) as usize;
            if run.is_free(staff_id, date) {
                let code = pattern[idx].clone();
                run.assign(staff_id, date, &code);
            }
        }
    }
}
