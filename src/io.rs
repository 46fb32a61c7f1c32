use crate::model::{ContractType, ScheduledShift, Staff, StaffRole, TeamId};
use crate::storage::Dataset;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de personnel depuis CSV:
/// header `id,name,role,contract[,squad][,teams][,excluded]`.
/// `teams` and `excluded` are `;`-separated lists.
pub fn import_staff_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Staff>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let id = rec.get(0).context("missing id")?.trim();
        let name = rec.get(1).context("missing name")?.trim();
        if id.is_empty() || name.is_empty() {
            bail!("invalid staff row (empty id or name)");
        }
        let role = parse_role(rec.get(2).context("missing role")?.trim())
            .with_context(|| format!("invalid role for staff {id}"))?;
        let contract = parse_contract(rec.get(3).context("missing contract")?.trim())
            .with_context(|| format!("invalid contract for staff {id}"))?;
        let mut staff = Staff::new(id, name, role, contract);
        if let Some(squad) = rec.get(4) {
            let squad = squad.trim();
            if !squad.is_empty() {
                let n: u8 = squad
                    .parse()
                    .with_context(|| format!("invalid squad for staff {id}"))?;
                if !(1..=5).contains(&n) {
                    bail!("squad out of range 1-5 for staff {id}");
                }
                staff.night_squad = Some(n);
            }
        }
        if let Some(teams) = rec.get(5) {
            staff.team_ids = split_list(teams).map(TeamId::new).collect();
        }
        if let Some(excluded) = rec.get(6) {
            staff.excluded_codes = split_list(excluded).map(str::to_owned).collect();
        }
        out.push(staff);
    }
    Ok(out)
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(';').map(str::trim).filter(|s| !s.is_empty())
}

fn parse_role(s: &str) -> anyhow::Result<StaffRole> {
    match s.to_ascii_lowercase().as_str() {
        "head-nurse" | "caposala" => Ok(StaffRole::HeadNurse),
        "nurse" | "infermiere" => Ok(StaffRole::Nurse),
        "healthcare-assistant" | "oss" => Ok(StaffRole::HealthcareAssistant),
        "doctor" | "medico" => Ok(StaffRole::Doctor),
        _ => bail!("unknown role: {s}"),
    }
}

fn parse_contract(s: &str) -> anyhow::Result<ContractType> {
    match s.to_ascii_lowercase().as_str() {
        "h6" | "6" => Ok(ContractType::H6),
        "h12" | "12" => Ok(ContractType::H12),
        "h24" | "24" => Ok(ContractType::H24),
        _ => bail!("unknown contract: {s}"),
    }
}

/// Export CSV d'une liste de records:
/// header `id,date,staff_id,staff_name,shift_code`.
pub fn export_schedule_csv<P: AsRef<Path>>(
    path: P,
    entries: &[ScheduledShift],
    roster: &[Staff],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["id", "date", "staff_id", "staff_name", "shift_code"])?;
    for e in entries {
        let name = roster
            .iter()
            .find(|s| s.id == e.staff_id)
            .map(|s| s.name.as_str())
            .unwrap_or("");
        let date = e.date.to_string();
        w.write_record([
            e.id.as_str(),
            date.as_str(),
            e.staff_id.as_str(),
            name,
            e.shift_code.as_deref().unwrap_or(""),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON du dataset complet (jolie mise en forme).
pub fn export_dataset_json<P: AsRef<Path>>(path: P, dataset: &Dataset) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(dataset)?;
    fs::write(path, s)?;
    Ok(())
}
