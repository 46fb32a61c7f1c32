use super::eligibility::is_shift_allowed;
use super::Run;
use crate::model::StaffId;
use crate::requirements::requirement_for;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Target {
    Minimum,
    Maximum,
}

/// Greedy coverage pass over the whole month.
///
/// For every (date, fillable code) unit short of the target headcount,
/// assigns eligible staff with no entry that day, fewest-shifts-first.
/// Eligibility and counts are recomputed per unit; assignments made earlier
/// in the same pass shrink the candidate pool for later units. Ties on the
/// running total break by staff id so reruns are reproducible.
pub(super) fn fill(run: &mut Run<'_>, target: Target) {
    match target {
        Target::Minimum => run
            .log
            .push("pass 2.1: filling minimum requirements".to_owned()),
        Target::Maximum => run
            .log
            .push("pass 2.2: topping up toward maximum requirements".to_owned()),
    }

    let fillable: Vec<String> = run
        .planner
        .catalog
        .iter()
        .filter(|d| d.time.is_fillable())
        .map(|d| d.code.clone())
        .collect();
    let dates: Vec<_> = run.dates().map(|(_, d)| d).collect();

    for date in dates {
        for code in &fillable {
            let req = requirement_for(code, date, run.weekly, run.overrides);
            let wanted = match target {
                Target::Minimum => req.min,
                Target::Maximum => req.max,
            };
            let mut assigned = run.assigned_exact(date, code);
            if assigned >= wanted {
                continue;
            }

            let mut candidates: Vec<StaffId> = run
                .planner
                .roster
                .iter()
                .filter(|s| run.is_free(&s.id, date))
                .filter(|s| {
                    is_shift_allowed(
                        code,
                        s,
                        run.planner.catalog,
                        run.planner.teams,
                        &run.planner.opts,
                    )
                })
                .map(|s| s.id.clone())
                .collect();
            candidates.sort_by(|a, b| run.total(a).cmp(&run.total(b)).then_with(|| a.cmp(b)));

            for staff_id in candidates {
                if assigned >= wanted {
                    break;
                }
                run.assign(&staff_id, date, code);
                assigned += 1;
            }
        }
    }
}
