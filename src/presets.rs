//! Built-in shift catalog and requirement presets for a nephrology/dialysis
//! service. Used as a starting dataset by the CLI and as fixtures in tests;
//! callers with their own catalog ignore this module entirely.

use crate::model::{ShiftDefinition, ShiftTime, StaffRole};
use crate::requirements::{exact, range, RequirementValue, WeeklyRequirements};

use ShiftTime::{Absence, Afternoon, FullDay, Morning, Night, OffShift, Rest};
use StaffRole::{Doctor, HeadNurse, HealthcareAssistant, Nurse};

const ALL_ROLES: &[StaffRole] = &[HeadNurse, Nurse, HealthcareAssistant, Doctor];
const NURSING: &[StaffRole] = &[Nurse, HeadNurse];

fn def(
    code: &str,
    description: &str,
    location: &str,
    time: ShiftTime,
    roles: &[StaffRole],
    color: &str,
    text_color: &str,
) -> ShiftDefinition {
    let mut d = ShiftDefinition::new(code, description, location, time, roles);
    d.color = color.to_owned();
    d.text_color = text_color.to_owned();
    d
}

/// The full default shift catalog.
pub fn default_catalog() -> Vec<ShiftDefinition> {
    vec![
        def("M", "Mattina Direzione", "Direzione", Morning, &[HeadNurse], "bg-slate-200", "text-slate-800"),
        def("Md", "Mattina Dialisi S.Eugenio", "Dialisi Sant'Eugenio", Morning, NURSING, "bg-blue-200", "text-blue-800"),
        def("Ps", "Pomeriggio+Sera Dialisi S.Eugenio", "Dialisi Sant'Eugenio", Afternoon, NURSING, "bg-blue-300", "text-blue-900"),
        def("Msc", "Mattina Dialisi S.Caterina", "Dialisi Santa Caterina", Morning, NURSING, "bg-green-200", "text-green-800"),
        def("Psc", "Pomeriggio Dialisi S.Caterina", "Dialisi Santa Caterina", Afternoon, NURSING, "bg-green-200", "text-green-800"),
        def("Mc", "Mattina Dialisi CTO", "Dialisi CTO", Morning, NURSING, "bg-indigo-200", "text-indigo-800"),
        def("Pc", "Pomeriggio Dialisi CTO", "Dialisi CTO", Afternoon, NURSING, "bg-indigo-200", "text-indigo-800"),
        def("Mu", "Mattina Urgenza S.Eugenio", "Urgenza Sant'Eugenio", Morning, NURSING, "bg-red-200", "text-red-800"),
        def("Pu", "Pomeriggio Urgenza S.Eugenio", "Urgenza Sant'Eugenio", Afternoon, NURSING, "bg-red-200", "text-red-800"),
        def("Mco", "Mattina Sala Operatoria S.Eugenio", "Sala Operatoria Sant'Eugenio", Morning, NURSING, "bg-purple-200", "text-purple-800"),
        def("Mac", "Mattina Dialisi Peritoneale CTO", "Dialisi Peritoneale CTO", Morning, NURSING, "bg-teal-200", "text-teal-800"),
        def("Mn", "Mattina Reparto Nefrologia", "Reparto Nefrologia Sant'Eugenio", Morning, NURSING, "bg-yellow-200", "text-yellow-800"),
        def("Pn", "Pomeriggio Reparto Nefrologia", "Reparto Nefrologia Sant'Eugenio", Afternoon, NURSING, "bg-yellow-200", "text-yellow-800"),
        def("N", "Notte Reparto Nefrologia", "Reparto Nefrologia Sant'Eugenio", Night, NURSING, "bg-gray-800", "text-white"),
        def("Mat", "Mattina Ambulatorio", "Ambulatorio DH Sant'Eugenio", Morning, NURSING, "bg-pink-200", "text-pink-800"),
        def("Mat/e", "Mattina Ambulatorio/Esterno", "Ambulatorio DH Sant'Eugenio", Morning, NURSING, "bg-pink-300", "text-pink-900"),
        def("Me", "Mattina Esterno", "Esterno", Morning, NURSING, "bg-orange-200", "text-orange-800"),
        def("Pe", "Pomeriggio Esterno", "Esterno", Afternoon, NURSING, "bg-orange-200", "text-orange-800"),
        def("Mb", "Mattina Stanza B", "Stanza B", Morning, NURSING, "bg-yellow-400", "text-yellow-900"),
        def("Pb", "Pomeriggio Stanza B", "Stanza B", Afternoon, NURSING, "bg-yellow-400", "text-yellow-900"),
        def("M0", "Mattina Piano 0", "Piano 0", Morning, &[HealthcareAssistant], "bg-cyan-200", "text-cyan-800"),
        def("P0", "Pomeriggio Piano 0", "Piano 0", Afternoon, &[HealthcareAssistant], "bg-cyan-200", "text-cyan-800"),
        def("MT", "Mattina Piano 2", "Piano 2", Morning, &[HealthcareAssistant], "bg-lime-200", "text-lime-800"),
        def("PT", "Pomeriggio Piano 2", "Piano 2", Afternoon, &[HealthcareAssistant], "bg-lime-200", "text-lime-800"),
        def("G_doc", "Guardia", "Urgenza Sant'Eugenio", FullDay, &[Doctor], "#fecaca", "#991b1b"),
        def("R_doc", "Reperibilità", "Direzione", FullDay, &[Doctor], "#fed7aa", "#9a3412"),
        def("A_doc", "Ambulatorio", "Ambulatorio DH Sant'Eugenio", Morning, &[Doctor], "#bfdbfe", "#1e40af"),
        def("N_doc", "Notte Medico", "Reparto Nefrologia Sant'Eugenio", Night, &[Doctor], "#1f2937", "#f9fafb"),
        def("S", "Smonto Notte", "Reparto Nefrologia Sant'Eugenio", Rest, ALL_ROLES, "bg-gray-400", "text-white"),
        def("RS", "Riposo Settimanale", "Direzione", Rest, ALL_ROLES, "bg-gray-400", "text-white"),
        def("R", "Riposo", "Direzione", Rest, ALL_ROLES, "bg-gray-400", "text-white"),
        def("HD", "Permesso L.104", "Direzione", Absence, ALL_ROLES, "bg-red-500", "text-white"),
        def("RF", "Recupero Festivo", "Direzione", Absence, ALL_ROLES, "bg-purple-500", "text-white"),
        def("A", "Malattia", "Direzione", Absence, ALL_ROLES, "bg-red-500", "text-white"),
        def("T1", "Malattia Figlio", "Direzione", Absence, ALL_ROLES, "bg-red-500", "text-white"),
        def("FE", "Ferie", "Direzione", Absence, ALL_ROLES, "bg-green-500", "text-white"),
        def("UNCOVERED", "Turno Scoperto", "Direzione", OffShift, &[], "bg-red-600", "text-white"),
    ]
}

/// A named weekly-requirement table.
#[derive(Debug, Clone)]
pub struct RequirementPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub requirements: WeeklyRequirements,
}

pub fn builtin_presets() -> Vec<RequirementPreset> {
    vec![
        RequirementPreset {
            id: "standard-nurse",
            name: "Standard (Infermieri)",
            requirements: standard_nurse_requirements(),
        },
        RequirementPreset {
            id: "summer-nurse",
            name: "Estivo (Infermieri)",
            requirements: summer_nurse_requirements(),
        },
        RequirementPreset {
            id: "standard-oss",
            name: "Standard (OSS)",
            requirements: standard_oss_requirements(),
        },
        RequirementPreset {
            id: "standard-doctor",
            name: "Standard (Medici)",
            requirements: standard_doctor_requirements(),
        },
    ]
}

pub fn preset_by_id(id: &str) -> Option<RequirementPreset> {
    builtin_presets().into_iter().find(|p| p.id == id)
}

fn week(
    sun: RequirementValue,
    mon: RequirementValue,
    tue: RequirementValue,
    wed: RequirementValue,
    thu: RequirementValue,
    fri: RequirementValue,
    sat: RequirementValue,
) -> [RequirementValue; 7] {
    [sun, mon, tue, wed, thu, fri, sat]
}

/// Standard winter staffing for the nursing group.
pub fn standard_nurse_requirements() -> WeeklyRequirements {
    let z = exact(0);
    let mut req = WeeklyRequirements::new();
    req.insert("M".into(), week(z, exact(3), exact(3), exact(3), exact(3), exact(3), exact(3)));
    req.insert("Mac".into(), week(z, range(1, 2), range(1, 2), range(1, 2), range(1, 2), range(1, 2), z));
    req.insert("Mc".into(), week(z, range(2, 3), range(2, 3), range(2, 3), range(2, 3), range(2, 3), z));
    req.insert("Mco".into(), week(z, range(2, 3), z, range(2, 3), range(2, 3), z, z));
    req.insert("Md".into(), week(z, exact(2), exact(2), exact(2), exact(2), exact(2), z));
    req.insert("Me".into(), week(z, exact(1), exact(1), exact(1), exact(1), exact(1), exact(1)));
    req.insert("Mn".into(), week(exact(2), exact(2), exact(2), exact(2), exact(2), exact(2), exact(2)));
    req.insert("Msc".into(), week(z, range(2, 3), range(2, 3), range(2, 3), range(2, 3), range(2, 3), z));
    req.insert("Mu".into(), week(z, range(1, 2), range(1, 2), range(1, 2), range(1, 2), range(1, 2), z));
    req.insert("N".into(), week(range(3, 4), range(3, 4), range(3, 4), range(3, 4), range(3, 4), range(3, 4), range(3, 4)));
    req.insert("Pc".into(), week(z, range(2, 3), range(2, 3), range(2, 3), range(2, 3), range(2, 3), range(2, 3)));
    req.insert("Pe".into(), week(z, exact(1), exact(1), exact(1), exact(1), exact(1), exact(1)));
    req.insert("Pn".into(), week(exact(2), exact(2), exact(2), exact(2), exact(2), exact(2), exact(2)));
    req.insert("Ps".into(), week(z, exact(2), z, exact(2), z, exact(2), z));
    req.insert("Psc".into(), week(z, range(2, 3), z, range(2, 3), z, range(2, 3), z));
    req.insert("Pu".into(), week(z, range(1, 2), range(1, 2), range(1, 2), range(1, 2), range(1, 2), range(1, 2)));
    req
}

/// Reduced summer staffing for the nursing group.
pub fn summer_nurse_requirements() -> WeeklyRequirements {
    let z = exact(0);
    let one = exact(1);
    let mut req = WeeklyRequirements::new();
    req.insert("M".into(), week(one, one, one, one, one, one, one));
    req.insert("Md".into(), week(z, one, one, one, one, one, z));
    req.insert("Ps".into(), week(z, one, one, one, one, one, z));
    req.insert("Msc".into(), week(z, one, one, one, one, one, z));
    req.insert("Psc".into(), week(z, one, one, one, one, one, z));
    req.insert("Mc".into(), week(z, one, one, one, one, one, z));
    req.insert("Pc".into(), week(z, one, one, one, one, one, z));
    req.insert("Mn".into(), week(one, one, one, one, one, one, one));
    req.insert("Pn".into(), week(one, one, one, one, one, one, one));
    req.insert("N".into(), week(one, one, one, one, one, one, one));
    req.insert("Mu".into(), week(one, one, one, one, one, one, one));
    req.insert("Pu".into(), week(one, one, one, one, one, one, one));
    req.insert("Mat".into(), week(z, one, z, one, z, one, z));
    req
}

pub fn standard_oss_requirements() -> WeeklyRequirements {
    let z = exact(0);
    let one = exact(1);
    let mut req = WeeklyRequirements::new();
    req.insert("M0".into(), week(one, one, one, one, one, one, one));
    req.insert("P0".into(), week(one, one, one, one, one, one, one));
    req.insert("MT".into(), week(z, one, one, one, one, one, z));
    req.insert("PT".into(), week(z, one, one, one, one, one, z));
    req
}

pub fn standard_doctor_requirements() -> WeeklyRequirements {
    let z = exact(0);
    let one = exact(1);
    let two = exact(2);
    let mut req = WeeklyRequirements::new();
    // Guardia e reperibilità sempre presenti; ambulatorio nei feriali.
    req.insert("G_doc".into(), week(one, one, one, one, one, one, one));
    req.insert("R_doc".into(), week(one, one, one, one, one, one, one));
    req.insert("A_doc".into(), week(z, two, two, two, two, two, z));
    req.insert("N_doc".into(), week(one, one, one, one, one, one, one));
    req
}
