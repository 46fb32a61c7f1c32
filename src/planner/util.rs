use super::types::PlanError;
use chrono::NaiveDate;

/// Parses a "YYYY-MM" target month.
pub(super) fn parse_month(raw: &str) -> Result<(i32, u32), PlanError> {
    let invalid = || PlanError::InvalidMonth(raw.to_owned());
    let (y, m) = raw.split_once('-').ok_or_else(invalid)?;
    if y.len() != 4 || m.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = y.parse().map_err(|_| invalid())?;
    let month: u32 = m.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

pub(super) fn days_in_month(year: i32, month: u32) -> u32 {
    let first = first_of_month(year, month);
    let next = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    };
    (next - first).num_days() as u32
}

fn first_of_month(year: i32, month: u32) -> NaiveDate {
    // Valid by construction: month is 1-12 and day is 1.
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}

/// All dates of the month, in order, paired with the 1-based day number.
pub(super) fn month_days(year: i32, month: u32) -> impl Iterator<Item = (u32, NaiveDate)> {
    let days = days_in_month(year, month);
    first_of_month(year, month)
        .iter_days()
        .take(days as usize)
        .enumerate()
        .map(|(i, d)| (i as u32 + 1, d))
}

pub(super) fn in_month(date: NaiveDate, year: i32, month: u32) -> bool {
    use chrono::Datelike;
    date.year() == year && date.month() == month
}
