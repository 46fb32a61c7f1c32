#![forbid(unsafe_code)]
use chrono::NaiveDate;
use tempfile::tempdir;
use turnario::{
    io, ContractType, Dataset, JsonStorage, ScheduledShift, Staff, StaffId, StaffRole, Storage,
    Team,
};

#[test]
fn dataset_roundtrips_through_json_storage() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("reparto.json");
    let storage = JsonStorage::open(&path).unwrap();

    let mut dataset = Dataset::with_default_catalog();
    dataset.staff.push(
        Staff::new("n1", "Anna", StaffRole::Nurse, ContractType::H24)
            .with_teams(&["team-ward"])
            .with_squad(2),
    );
    dataset
        .teams
        .push(Team::new("team-ward", "Reparto", &["N", "Mn", "Pn"]));
    dataset.schedule.entries.push(ScheduledShift::assignment(
        &StaffId::new("n1"),
        NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
        "Mn/Pn",
    ));

    storage.save(&dataset).unwrap();
    let loaded = storage.load().unwrap();

    assert_eq!(loaded.staff.len(), 1);
    assert_eq!(loaded.staff[0].night_squad, Some(2));
    assert_eq!(loaded.shift_definitions.len(), dataset.shift_definitions.len());
    assert_eq!(loaded.schedule.entries.len(), 1);
    assert_eq!(
        loaded.schedule.entries[0].shift_code.as_deref(),
        Some("Mn/Pn")
    );
}

#[test]
fn loading_a_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("absent.json")).unwrap();
    assert!(storage.load().is_err());
}

#[test]
fn staff_csv_import_parses_optional_columns() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("staff.csv");
    std::fs::write(
        &path,
        "id,name,role,contract,squad,teams,excluded\n\
         n1,Anna Rossi,nurse,h24,3,team-ward,\n\
         c1,Carla Bruni,caposala,h12,,team-ward;team-cto,Mu;N\n\
         o1,Olga Neri,oss,h6,,,\n",
    )
    .unwrap();

    let staff = io::import_staff_csv(&path).unwrap();
    assert_eq!(staff.len(), 3);

    assert_eq!(staff[0].id.as_str(), "n1");
    assert_eq!(staff[0].contract, ContractType::H24);
    assert_eq!(staff[0].night_squad, Some(3));

    assert_eq!(staff[1].role, StaffRole::HeadNurse);
    assert_eq!(staff[1].team_ids.len(), 2);
    assert_eq!(staff[1].excluded_codes, vec!["Mu", "N"]);

    assert_eq!(staff[2].role, StaffRole::HealthcareAssistant);
    assert!(staff[2].team_ids.is_empty());
}

#[test]
fn staff_csv_import_rejects_bad_rows() {
    let dir = tempdir().unwrap();

    let bad_role = dir.path().join("role.csv");
    std::fs::write(&bad_role, "id,name,role,contract\nn1,Anna,janitor,h12\n").unwrap();
    assert!(io::import_staff_csv(&bad_role).is_err());

    let bad_squad = dir.path().join("squad.csv");
    std::fs::write(&bad_squad, "id,name,role,contract,squad\nn1,Anna,nurse,h24,9\n").unwrap();
    assert!(io::import_staff_csv(&bad_squad).is_err());
}

#[test]
fn dataset_json_export_is_readable_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("export.json");

    let mut dataset = Dataset::with_default_catalog();
    dataset
        .staff
        .push(Staff::new("n1", "Anna", StaffRole::Nurse, ContractType::H12));
    dataset.schedule.entries.push(ScheduledShift::assignment(
        &StaffId::new("n1"),
        NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
        "Md",
    ));

    io::export_dataset_json(&path, &dataset).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let loaded: Dataset = serde_json::from_str(&text).unwrap();
    assert_eq!(loaded.staff.len(), 1);
    assert_eq!(loaded.shift_definitions.len(), dataset.shift_definitions.len());
    assert_eq!(loaded.schedule.entries[0].shift_code.as_deref(), Some("Md"));
}

#[test]
fn schedule_csv_export_writes_one_row_per_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    let roster = vec![Staff::new("n1", "Anna", StaffRole::Nurse, ContractType::H12)];
    let entries = vec![
        ScheduledShift::assignment(
            &StaffId::new("n1"),
            NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            "Md",
        ),
        ScheduledShift::uncovered(
            NaiveDate::from_ymd_opt(2025, 9, 11).unwrap(),
            "Md",
            None,
        ),
    ];

    io::export_schedule_csv(&path, &entries, &roster).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("id,date,staff_id,staff_name,shift_code"));
    let body: Vec<&str> = lines.collect();
    assert_eq!(body.len(), 2);
    assert!(body[0].contains("n1-2025-09-10"));
    assert!(body[0].contains("Anna"));
    assert!(body[1].contains("unassigned"));
}
