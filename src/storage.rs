use crate::model::{Absence, ShiftDefinition, Staff, Team};
use crate::schedule::Schedule;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Everything the planner works from, as one JSON document: roster, teams,
/// catalog, the persisted schedule and declared absences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub staff: Vec<Staff>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub shift_definitions: Vec<ShiftDefinition>,
    #[serde(default)]
    pub schedule: Schedule,
    #[serde(default)]
    pub absences: Vec<Absence>,
}

impl Dataset {
    /// Empty dataset seeded with the built-in shift catalog.
    pub fn with_default_catalog() -> Self {
        Self {
            shift_definitions: crate::presets::default_catalog(),
            ..Self::default()
        }
    }
}

pub trait Storage {
    /// Charge un dataset depuis un support.
    fn load(&self) -> anyhow::Result<Dataset>;
    /// Sauvegarde de manière atomique.
    fn save(&self, dataset: &Dataset) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self {
            path: path.as_ref().to_path_buf(),
        })
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Dataset> {
        let data =
            fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let dataset: Dataset =
            serde_json::from_slice(&data).with_context(|| "parsing dataset json")?;
        Ok(dataset)
    }

    fn save(&self, dataset: &Dataset) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(dataset)?;
        let mut tmp = NamedTempFile::new_in(self.path.parent().unwrap_or_else(|| Path::new(".")))
            .with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
