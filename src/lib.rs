#![forbid(unsafe_code)]
//! Turnario — bibliothèque de planification des gardes d'un service
//! hospitalier, locale (sans BD).
//!
//! - Stockage fichiers (JSON/CSV).
//! - Génération mensuelle : contraintes fixes, rotation à 5 squadre,
//!   couverture gloutonne min/max, vérification finale.
//! - Assenze, rimpiazzi, sovrascrittura per mese intero.
//! - Dates civiles uniquement (YYYY-MM-DD), pas de fuseaux.

pub mod io;
pub mod model;
pub mod planner;
pub mod presets;
pub mod requirements;
pub mod schedule;
pub mod storage;

pub use model::{
    Absence, ContractType, ScheduledShift, ShiftCode, ShiftDefinition, ShiftTime, Staff, StaffId,
    StaffRole, Team, TeamId, UNASSIGNED_STAFF_ID,
};
pub use planner::{
    allowed_shifts, is_shift_allowed, FixedAbsence, HeadNursePolicy, PlanError, PlanOptions,
    PlanOutcome, Planner,
};
pub use presets::{builtin_presets, default_catalog, preset_by_id, RequirementPreset};
pub use requirements::{
    exact, range, requirement_for, set_override, DateOverrides, Requirement, RequirementValue,
    WeeklyRequirements,
};
pub use schedule::{ReplacementOption, Schedule, ScheduleError};
pub use storage::{Dataset, JsonStorage, Storage};
