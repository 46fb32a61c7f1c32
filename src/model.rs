use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Reserved staff id carried by uncovered placeholder records. Never present
/// in a real roster.
pub const UNASSIGNED_STAFF_ID: &str = "unassigned";

/// Identifiant fort pour Staff
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StaffId(String);

impl StaffId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn unassigned() -> Self {
        Self(UNASSIGNED_STAFF_ID.to_owned())
    }
    pub fn is_unassigned(&self) -> bool {
        self.0 == UNASSIGNED_STAFF_ID
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifiant fort pour Team
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(String);

impl TeamId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StaffRole {
    HeadNurse,
    Nurse,
    HealthcareAssistant,
    Doctor,
}

/// Contract families. H6 works mornings only, H12 rotates over the day,
/// H24 covers the full round-the-clock rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    H6,
    H12,
    H24,
}

/// Time-of-day category of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShiftTime {
    Morning,
    Afternoon,
    Night,
    FullDay,
    Rest,
    OffShift,
    Absence,
}

impl ShiftTime {
    /// A fillable category can appear in staffing requirements.
    pub fn is_fillable(self) -> bool {
        matches!(
            self,
            Self::Morning | Self::Afternoon | Self::Night | Self::FullDay
        )
    }
}

/// Membre du personnel (roster snapshot, read-only for the engine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: StaffId,
    pub name: String,
    pub role: StaffRole,
    pub contract: ContractType,
    #[serde(default)]
    pub team_ids: Vec<TeamId>,
    /// Squad 1-5; meaningful only for H24 contracts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub night_squad: Option<u8>,
    /// Codes this person may never be assigned, regardless of eligibility.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub excluded_codes: Vec<String>,
}

impl Staff {
    pub fn new<I: AsRef<str>, N: Into<String>>(
        id: I,
        name: N,
        role: StaffRole,
        contract: ContractType,
    ) -> Self {
        Self {
            id: StaffId::new(id),
            name: name.into(),
            role,
            contract,
            team_ids: Vec::new(),
            night_squad: None,
            excluded_codes: Vec::new(),
        }
    }

    pub fn with_teams(mut self, teams: &[&str]) -> Self {
        self.team_ids = teams.iter().map(TeamId::new).collect();
        self
    }

    pub fn with_squad(mut self, squad: u8) -> Self {
        self.night_squad = Some(squad);
        self
    }

    /// Squad number, but only when the contract actually rotates. A squad
    /// stored on a non-H24 record is ignored.
    pub fn rotation_squad(&self) -> Option<u8> {
        match (self.contract, self.night_squad) {
            (ContractType::H24, Some(n)) if (1..=5).contains(&n) => Some(n),
            _ => None,
        }
    }
}

/// Named grouping of staff with an explicit allow-list of shift codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub allowed_shift_codes: Vec<String>,
}

impl Team {
    pub fn new<I: AsRef<str>, N: Into<String>>(id: I, name: N, codes: &[&str]) -> Self {
        Self {
            id: TeamId::new(id),
            name: name.into(),
            locations: Vec::new(),
            allowed_shift_codes: codes.iter().map(|c| (*c).to_owned()).collect(),
        }
    }

    pub fn allows(&self, code: &str) -> bool {
        self.allowed_shift_codes.iter().any(|c| c == code)
    }
}

/// Catalog entry for one shift code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftDefinition {
    pub code: String,
    pub description: String,
    pub location: String,
    pub time: ShiftTime,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub text_color: String,
    pub roles: Vec<StaffRole>,
}

impl ShiftDefinition {
    pub fn new<C: Into<String>, D: Into<String>, L: Into<String>>(
        code: C,
        description: D,
        location: L,
        time: ShiftTime,
        roles: &[StaffRole],
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            location: location.into(),
            time,
            color: String::new(),
            text_color: String::new(),
            roles: roles.to_vec(),
        }
    }

    pub fn allows_role(&self, role: StaffRole) -> bool {
        self.roles.contains(&role)
    }
}

pub fn find_definition<'a>(
    catalog: &'a [ShiftDefinition],
    code: &str,
) -> Option<&'a ShiftDefinition> {
    catalog.iter().find(|d| d.code == code)
}

/// A shift code as stored on a schedule record: either a single catalog code
/// or two codes worked back-to-back ("Mn/Pn"). The joined-string form only
/// exists at the storage/display boundary; counting logic goes through this
/// type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftCode {
    pub primary: String,
    pub secondary: Option<String>,
}

impl ShiftCode {
    pub fn single<S: Into<String>>(code: S) -> Self {
        Self {
            primary: code.into(),
            secondary: None,
        }
    }

    /// Parses a raw code against the catalog. A `/` is only treated as a
    /// combined-shift join when both halves are catalog codes; the catalog
    /// legitimately contains single codes with a slash in them ("Mat/e").
    pub fn parse(raw: &str, catalog: &[ShiftDefinition]) -> Self {
        if let Some((a, b)) = raw.split_once('/') {
            if find_definition(catalog, a).is_some() && find_definition(catalog, b).is_some() {
                return Self {
                    primary: a.to_owned(),
                    secondary: Some(b.to_owned()),
                };
            }
        }
        Self::single(raw)
    }

    /// True when this assignment counts toward coverage of `code`.
    pub fn covers(&self, code: &str) -> bool {
        self.primary == code || self.secondary.as_deref() == Some(code)
    }

    pub fn is_combined(&self) -> bool {
        self.secondary.is_some()
    }
}

impl std::fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.secondary {
            Some(s) => write!(f, "{}/{}", self.primary, s),
            None => write!(f, "{}", self.primary),
        }
    }
}

/// Atomic schedule record: one staff member (or the unassigned sentinel) on
/// one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledShift {
    pub id: String,
    pub date: NaiveDate,
    pub staff_id: StaffId,
    pub shift_code: Option<String>,
    /// Set on uncovered placeholders to track who the unit was lost from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_staff_id: Option<StaffId>,
}

impl ScheduledShift {
    /// Real person-day assignment. The id is deterministic so that a month
    /// overwrite replaces rather than duplicates.
    pub fn assignment(staff_id: &StaffId, date: NaiveDate, code: &str) -> Self {
        Self {
            id: format!("{}-{}", staff_id.as_str(), date),
            date,
            staff_id: staff_id.clone(),
            shift_code: Some(code.to_owned()),
            original_staff_id: None,
        }
    }

    /// Placeholder for an unmet minimum, awaiting manual replacement.
    pub fn uncovered(date: NaiveDate, code: &str, original: Option<StaffId>) -> Self {
        Self {
            id: format!("uncovered-{}", Uuid::new_v4()),
            date,
            staff_id: StaffId::unassigned(),
            shift_code: Some(code.to_owned()),
            original_staff_id: original,
        }
    }

    pub fn is_uncovered(&self) -> bool {
        self.staff_id.is_unassigned()
    }

    pub fn code(&self, catalog: &[ShiftDefinition]) -> Option<ShiftCode> {
        self.shift_code
            .as_deref()
            .map(|raw| ShiftCode::parse(raw, catalog))
    }
}

/// Declared absence over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Absence {
    pub id: String,
    pub staff_id: StaffId,
    pub reason: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Absence {
    pub fn new(
        staff_id: StaffId,
        reason: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, String> {
        if end < start {
            return Err("absence end must not precede start".to_string());
        }
        Ok(Self {
            id: format!("abs-{}-{}", staff_id.as_str(), Uuid::new_v4()),
            staff_id,
            reason: reason.to_owned(),
            start_date: start,
            end_date: end,
        })
    }

    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date.iter_days().take_while(|d| *d <= self.end_date)
    }
}
