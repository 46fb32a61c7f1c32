use super::types::HeadNursePolicy;
use super::Run;
use crate::model::{ScheduledShift, ShiftCode};
use crate::requirements::requirement_for;

/// Re-walks every (date, fillable code) unit against the resolved minimum
/// and emits one uncovered placeholder per missing head.
///
/// Deliberately independent of the assigner's bookkeeping: counts are
/// recomputed from the board, and a combined "Mn/Pn" entry credits both of
/// its components. This is the correctness oracle for the whole run.
pub(super) fn emit_uncovered(run: &mut Run<'_>) -> Vec<ScheduledShift> {
    run.log
        .push("final pass: verifying coverage".to_owned());

    let fillable: Vec<String> = run
        .planner
        .catalog
        .iter()
        .filter(|d| d.time.is_fillable())
        .map(|d| d.code.clone())
        .collect();

    let mut uncovered = Vec::new();
    let dates: Vec<_> = run.dates().map(|(_, d)| d).collect();

    for date in dates {
        for code in &fillable {
            let required = requirement_for(code, date, run.weekly, run.overrides).min;
            if required == 0 {
                continue;
            }
            let assigned = count_covering(run, date, code);
            if assigned < required {
                let deficit = required - assigned;
                run.log.push(format!(
                    "uncovered: {code} on {date}, short {deficit} unit(s)"
                ));
                for _ in 0..deficit {
                    uncovered.push(ScheduledShift::uncovered(date, code, None));
                }
            }
        }
    }
    uncovered
}

fn count_covering(run: &Run<'_>, date: chrono::NaiveDate, code: &str) -> u32 {
    run.planner
        .roster
        .iter()
        .filter(|staff| match run.planner.opts.head_nurse_policy {
            HeadNursePolicy::CountTowardMinimum => true,
            HeadNursePolicy::RequireListedRole => crate::model::find_definition(
                run.planner.catalog,
                code,
            )
            .map_or(true, |def| def.allows_role(staff.role)),
        })
        .filter(|staff| {
            run.board
                .get(&staff.id)
                .and_then(|days| days.get(&date))
                .map_or(false, |raw| {
                    ShiftCode::parse(raw, run.planner.catalog).covers(code)
                })
        })
        .count() as u32
}
