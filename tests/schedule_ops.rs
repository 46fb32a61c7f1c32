#![forbid(unsafe_code)]
use chrono::NaiveDate;
use turnario::schedule::{remove_definition, rename_definition};
use turnario::{
    default_catalog, Absence, ContractType, PlanOptions, Schedule, ScheduleError, ScheduledShift,
    ShiftDefinition, ShiftTime, Staff, StaffId, StaffRole, Team,
};

#[test]
fn absence_over_a_working_shift_spawns_a_placeholder() {
    let catalog = default_catalog();
    let n1 = StaffId::new("n1");
    let mut schedule = Schedule::default();
    schedule
        .entries
        .push(ScheduledShift::assignment(&n1, date(2025, 9, 10), "Md"));

    let absence = Absence::new(n1.clone(), "FE", date(2025, 9, 9), date(2025, 9, 11)).unwrap();
    let placeholders = schedule.apply_absence(&absence, &catalog);

    assert_eq!(placeholders.len(), 1);
    assert_eq!(placeholders[0].shift_code.as_deref(), Some("Md"));
    assert_eq!(placeholders[0].date, date(2025, 9, 10));
    assert_eq!(placeholders[0].original_staff_id, Some(n1.clone()));

    // All three days now carry the reason code.
    for day in 9..=11 {
        let entry = schedule.entry_for(&n1, date(2025, 9, day)).unwrap();
        assert_eq!(entry.shift_code.as_deref(), Some("FE"));
    }
    assert_eq!(schedule.uncovered().count(), 1);
}

#[test]
fn absence_over_a_rest_day_spawns_nothing() {
    let catalog = default_catalog();
    let n1 = StaffId::new("n1");
    let mut schedule = Schedule::default();
    schedule
        .entries
        .push(ScheduledShift::assignment(&n1, date(2025, 9, 10), "R"));

    let absence = Absence::new(n1.clone(), "A", date(2025, 9, 10), date(2025, 9, 10)).unwrap();
    let placeholders = schedule.apply_absence(&absence, &catalog);

    assert!(placeholders.is_empty());
    let entry = schedule.entry_for(&n1, date(2025, 9, 10)).unwrap();
    assert_eq!(entry.shift_code.as_deref(), Some("A"));
}

#[test]
fn absence_range_must_be_ordered() {
    assert!(Absence::new(StaffId::new("n1"), "FE", date(2025, 9, 11), date(2025, 9, 9)).is_err());
}

#[test]
fn replacement_candidates_exclude_busy_staff_and_the_original_holder() {
    let catalog = default_catalog();
    let teams = vec![ward_team()];
    let opts = PlanOptions::default();
    let day = date(2025, 9, 10);

    let roster = vec![
        nurse("n1"), // original holder
        nurse("n2"), // free
        nurse("n3"), // busy on a working shift
        nurse("n4"), // plain rest day
        nurse("n5"), // post-night recovery
        Staff::new("n6", "Fede", StaffRole::Nurse, ContractType::H12), // no team
    ];

    let mut schedule = Schedule::default();
    schedule
        .entries
        .push(ScheduledShift::assignment(&StaffId::new("n3"), day, "Mu"));
    schedule
        .entries
        .push(ScheduledShift::assignment(&StaffId::new("n4"), day, "R"));
    schedule
        .entries
        .push(ScheduledShift::assignment(&StaffId::new("n5"), day, "S"));

    let placeholder = ScheduledShift::uncovered(day, "Md", Some(StaffId::new("n1")));
    let options = schedule.find_replacements(&placeholder, &roster, &catalog, &teams, &opts);

    let ids: Vec<&str> = options.iter().map(|o| o.staff_id.as_str()).collect();
    assert_eq!(ids, vec!["n2", "n4"]);
}

#[test]
fn assigning_a_replacement_consumes_the_placeholder() {
    let day = date(2025, 9, 10);
    let n2 = StaffId::new("n2");
    let mut schedule = Schedule::default();
    schedule
        .entries
        .push(ScheduledShift::assignment(&n2, day, "R"));
    let placeholder = ScheduledShift::uncovered(day, "Md", Some(StaffId::new("n1")));
    let placeholder_id = placeholder.id.clone();
    schedule.entries.push(placeholder);

    let record = schedule.assign_replacement(&placeholder_id, &n2).unwrap();
    assert_eq!(record.shift_code.as_deref(), Some("Md"));
    assert_eq!(record.staff_id, n2);

    // Placeholder gone, rest-day entry replaced, single record left.
    assert_eq!(schedule.uncovered().count(), 0);
    assert_eq!(schedule.entries.len(), 1);
    assert_eq!(
        schedule.entry_for(&n2, day).unwrap().shift_code.as_deref(),
        Some("Md")
    );

    let err = schedule.assign_replacement(&placeholder_id, &n2).unwrap_err();
    assert!(matches!(err, ScheduleError::UnknownRecord(_)));
}

#[test]
fn replacing_a_real_record_is_rejected() {
    let day = date(2025, 9, 10);
    let n1 = StaffId::new("n1");
    let mut schedule = Schedule::default();
    let record = ScheduledShift::assignment(&n1, day, "Md");
    let id = record.id.clone();
    schedule.entries.push(record);

    let err = schedule
        .assign_replacement(&id, &StaffId::new("n2"))
        .unwrap_err();
    assert!(matches!(err, ScheduleError::NotUncovered(_)));
}

#[test]
fn month_overwrite_replaces_only_the_targeted_staff_and_month() {
    let n1 = StaffId::new("n1");
    let n2 = StaffId::new("n2");
    let mut schedule = Schedule::default();
    schedule
        .entries
        .push(ScheduledShift::assignment(&n1, date(2025, 8, 20), "Md"));
    schedule
        .entries
        .push(ScheduledShift::assignment(&n1, date(2025, 9, 5), "Md"));
    schedule
        .entries
        .push(ScheduledShift::assignment(&n2, date(2025, 9, 5), "Mu"));

    let fresh = vec![ScheduledShift::assignment(&n1, date(2025, 9, 6), "Pn")];
    schedule.overwrite_month("2025-09", &[n1.clone()], fresh);

    assert!(schedule.entry_for(&n1, date(2025, 8, 20)).is_some());
    assert!(schedule.entry_for(&n1, date(2025, 9, 5)).is_none());
    assert!(schedule.entry_for(&n1, date(2025, 9, 6)).is_some());
    assert!(schedule.entry_for(&n2, date(2025, 9, 5)).is_some());
}

#[test]
fn removing_a_definition_refuses_while_referenced() {
    let mut catalog = default_catalog();
    let mut schedule = Schedule::default();
    // Referenced through the combined form only.
    schedule.entries.push(ScheduledShift::assignment(
        &StaffId::new("n1"),
        date(2025, 9, 10),
        "Mn/Pn",
    ));

    let err = remove_definition(&mut catalog, "Pn", &schedule).unwrap_err();
    assert!(matches!(err, ScheduleError::CodeInUse(_)));
    let err = remove_definition(&mut catalog, "nope", &schedule).unwrap_err();
    assert!(matches!(err, ScheduleError::UnknownCode(_)));

    schedule.entries.clear();
    remove_definition(&mut catalog, "Pn", &schedule).unwrap();
    assert!(catalog.iter().all(|d| d.code != "Pn"));
}

#[test]
fn renaming_a_definition_rewrites_matching_records() {
    let mut catalog = default_catalog();
    let mut schedule = Schedule::default();
    let n1 = StaffId::new("n1");
    schedule
        .entries
        .push(ScheduledShift::assignment(&n1, date(2025, 9, 10), "Mu"));

    let updated = ShiftDefinition::new(
        "Mur",
        "Mattina Urgenza (rinominato)",
        "Urgenza Sant'Eugenio",
        ShiftTime::Morning,
        &[StaffRole::Nurse, StaffRole::HeadNurse],
    );
    rename_definition(&mut catalog, "Mu", updated, &mut schedule).unwrap();

    assert!(catalog.iter().any(|d| d.code == "Mur"));
    assert!(catalog.iter().all(|d| d.code != "Mu"));
    assert_eq!(
        schedule.entry_for(&n1, date(2025, 9, 10)).unwrap().shift_code.as_deref(),
        Some("Mur")
    );
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ward_team() -> Team {
    Team::new(
        "team-ward",
        "Reparto Nefrologia",
        &["N", "Mn", "Pn", "Md", "Mu", "Ps"],
    )
}

fn nurse(id: &str) -> Staff {
    Staff::new(id, format!("Infermiere {id}"), StaffRole::Nurse, ContractType::H12)
        .with_teams(&["team-ward"])
}
