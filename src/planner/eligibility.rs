use super::types::PlanOptions;
use crate::model::{
    find_definition, ContractType, ShiftDefinition, ShiftTime, Staff, StaffRole, Team,
};

/// Decides whether `staff` may legally be assigned `shift_code`.
///
/// Checks run in order and any failure short-circuits: personal exclusions,
/// then team allow-lists, then role, then contract compatibility. Codes
/// absent from the catalog are permitted by default; rest and absence codes
/// that never made it into the formal catalog flow through here.
pub fn is_shift_allowed(
    shift_code: &str,
    staff: &Staff,
    catalog: &[ShiftDefinition],
    teams: &[Team],
    opts: &PlanOptions,
) -> bool {
    if staff.excluded_codes.iter().any(|c| c == shift_code) {
        return false;
    }

    let Some(def) = find_definition(catalog, shift_code) else {
        return true;
    };

    // Absence and rest are universal categories: role is the only gate.
    if matches!(def.time, ShiftTime::Absence | ShiftTime::Rest) {
        return def.allows_role(staff.role);
    }

    // At least one of the staff member's teams must allow the code. No team,
    // no shifts.
    let allowed_by_team = staff.team_ids.iter().any(|tid| {
        teams
            .iter()
            .any(|t| &t.id == tid && t.allows(shift_code))
    });
    if !allowed_by_team {
        return false;
    }

    if !def.allows_role(staff.role) {
        // One-directional escalation: head nurses may cover nurse shifts.
        let escalation =
            staff.role == StaffRole::HeadNurse && def.allows_role(StaffRole::Nurse);
        if !escalation {
            return false;
        }
    }

    if opts.long_shift_codes.iter().any(|c| c == shift_code) {
        return matches!(staff.contract, ContractType::H12 | ContractType::H24);
    }

    match staff.contract {
        ContractType::H6 => def.time == ShiftTime::Morning,
        ContractType::H12 => def.time != ShiftTime::Night && def.code != opts.recovery_code,
        // The fixed rotation pass, not this check, enforces the exact
        // N-S-R-Mn-Pn sequencing for H24 staff.
        ContractType::H24 => matches!(
            def.time,
            ShiftTime::Morning | ShiftTime::Afternoon | ShiftTime::Night
        ),
    }
}

/// All catalog entries permissible for a staff member. Empty for the
/// unassigned sentinel.
pub fn allowed_shifts<'a>(
    staff: &Staff,
    catalog: &'a [ShiftDefinition],
    teams: &[Team],
    opts: &PlanOptions,
) -> Vec<&'a ShiftDefinition> {
    if staff.id.is_unassigned() {
        return Vec::new();
    }
    catalog
        .iter()
        .filter(|def| def.time != ShiftTime::OffShift)
        .filter(|def| is_shift_allowed(&def.code, staff, catalog, teams, opts))
        .collect()
}
