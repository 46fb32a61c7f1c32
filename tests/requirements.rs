#![forbid(unsafe_code)]
use chrono::NaiveDate;
use turnario::{
    default_catalog, exact, range, requirement_for, set_override, DateOverrides, ShiftCode,
    WeeklyRequirements,
};

#[test]
fn scalar_value_resolves_to_equal_min_max() {
    let r = exact(3).resolve();
    assert_eq!((r.min, r.max), (3, 3));
}

#[test]
fn inverted_range_is_clamped_not_rejected() {
    let r = range(4, 2).resolve();
    assert_eq!((r.min, r.max), (2, 4));
}

#[test]
fn override_wins_over_weekly_pattern() {
    let mut weekly = WeeklyRequirements::new();
    weekly.insert("Md".to_owned(), [exact(2); 7]);
    let mut overrides = DateOverrides::new();
    let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
    set_override(&mut overrides, "Md", date, range(3, 5));

    let r = requirement_for("Md", date, &weekly, &overrides);
    assert_eq!((r.min, r.max), (3, 5));

    // Adjacent dates still follow the weekly pattern.
    let next = NaiveDate::from_ymd_opt(2025, 9, 16).unwrap();
    let r = requirement_for("Md", next, &weekly, &overrides);
    assert_eq!((r.min, r.max), (2, 2));
}

#[test]
fn zero_override_reverts_to_weekly_pattern() {
    let mut weekly = WeeklyRequirements::new();
    weekly.insert("Md".to_owned(), [exact(2); 7]);
    let mut overrides = DateOverrides::new();
    let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
    set_override(&mut overrides, "Md", date, range(3, 5));
    set_override(&mut overrides, "Md", date, exact(0));

    assert!(overrides.is_empty());
    let r = requirement_for("Md", date, &weekly, &overrides);
    assert_eq!((r.min, r.max), (2, 2));
}

#[test]
fn missing_code_means_zero_requirement() {
    let weekly = WeeklyRequirements::new();
    let overrides = DateOverrides::new();
    let date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
    let r = requirement_for("Md", date, &weekly, &overrides);
    assert_eq!((r.min, r.max), (0, 0));
}

#[test]
fn weekly_pattern_is_sunday_first() {
    let mut weekly = WeeklyRequirements::new();
    weekly.insert(
        "Md".to_owned(),
        [exact(9), exact(1), exact(2), exact(3), exact(4), exact(5), exact(6)],
    );
    let overrides = DateOverrides::new();
    // 2025-09-07 is a Sunday.
    let sunday = NaiveDate::from_ymd_opt(2025, 9, 7).unwrap();
    assert_eq!(requirement_for("Md", sunday, &weekly, &overrides).min, 9);
    let monday = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
    assert_eq!(requirement_for("Md", monday, &weekly, &overrides).min, 1);
}

#[test]
fn requirement_values_deserialize_from_scalar_or_object() {
    let v: turnario::RequirementValue = serde_json::from_str("2").unwrap();
    assert_eq!(v.resolve().min, 2);
    let v: turnario::RequirementValue =
        serde_json::from_str(r#"{"min":1,"max":4}"#).unwrap();
    assert_eq!((v.resolve().min, v.resolve().max), (1, 4));
}

#[test]
fn slash_splits_only_when_both_halves_are_catalog_codes() {
    let catalog = default_catalog();

    let combined = ShiftCode::parse("Mn/Pn", &catalog);
    assert!(combined.is_combined());
    assert!(combined.covers("Mn"));
    assert!(combined.covers("Pn"));
    assert!(!combined.covers("N"));
    assert_eq!(combined.to_string(), "Mn/Pn");

    // "Mat/e" is itself a catalog code; "e" alone is not.
    let single = ShiftCode::parse("Mat/e", &catalog);
    assert!(!single.is_combined());
    assert_eq!(single.primary, "Mat/e");
    assert!(single.covers("Mat/e"));
    assert!(!single.covers("Mat"));
}
