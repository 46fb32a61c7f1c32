#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use turnario::{
    io,
    model::{Absence, StaffId},
    planner::{FixedAbsence, Planner},
    presets,
    requirements::{DateOverrides, WeeklyRequirements},
    storage::{Dataset, JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de planification de gardes (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de dataset
    #[arg(long, global = true, default_value = "reparto.json")]
    data: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Importer du personnel depuis un CSV
    ImportStaff {
        #[arg(long)]
        csv: String,
    },

    /// Générer le planning d'un mois
    Generate {
        /// Mois cible, YYYY-MM
        #[arg(long)]
        month: String,
        /// Preset intégré de fabbisogno (standard-nurse, summer-nurse,
        /// standard-oss, standard-doctor)
        #[arg(long, conflicts_with = "requirements")]
        preset: Option<String>,
        /// Fichier JSON de fabbisogno hebdomadaire (code -> 7 valeurs)
        #[arg(long)]
        requirements: Option<String>,
        /// Fichier JSON d'overrides par date (code -> date -> valeur)
        #[arg(long)]
        overrides: Option<String>,
        /// Persiste le résultat (remplace le mois entier pour ce personnel)
        #[arg(long)]
        apply: bool,
        /// Export CSV du planning généré (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Déclarer une absence et découvrir les gardes touchées
    AddAbsence {
        #[arg(long)]
        staff: String,
        /// Code motif (FE, A, HD, ...)
        #[arg(long)]
        reason: String,
        /// YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// YYYY-MM-DD
        #[arg(long)]
        end: String,
    },

    /// Lister les candidats pour une garde non couverte
    Replacements {
        #[arg(long)]
        shift_id: String,
    },

    /// Couvrir une garde non couverte avec un remplaçant
    Cover {
        #[arg(long)]
        shift_id: String,
        #[arg(long)]
        with: String,
    },

    /// Lister et optionnellement exporter
    List {
        /// Restreindre à un mois (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.data)?;
    let mut dataset = storage
        .load()
        .unwrap_or_else(|_| Dataset::with_default_catalog());

    let code = match cli.cmd {
        Commands::ImportStaff { csv } => {
            let staff = io::import_staff_csv(csv)?;
            println!("Imported {} staff member(s)", staff.len());
            dataset.staff.extend(staff);
            storage.save(&dataset)?;
            0
        }
        Commands::Generate {
            month,
            preset,
            requirements,
            overrides,
            apply,
            out_csv,
        } => {
            let weekly: WeeklyRequirements = if let Some(id) = preset {
                presets::preset_by_id(&id)
                    .map(|p| p.requirements)
                    .ok_or_else(|| anyhow::anyhow!("unknown preset: {id}"))?
            } else if let Some(path) = requirements {
                serde_json::from_slice(&std::fs::read(path)?)?
            } else {
                bail!("either --preset or --requirements is required");
            };
            let overrides: DateOverrides = match overrides {
                Some(path) => serde_json::from_slice(&std::fs::read(path)?)?,
                None => DateOverrides::new(),
            };

            let fixed: Vec<FixedAbsence> = dataset
                .absences
                .iter()
                .flat_map(|a| {
                    a.dates()
                        .filter(|d| d.format("%Y-%m").to_string() == month)
                        .map(|date| FixedAbsence {
                            staff_id: a.staff_id.clone(),
                            date,
                            shift_code: a.reason.clone(),
                        })
                        .collect::<Vec<_>>()
                })
                .collect();

            let planner = Planner::new(&dataset.staff, &dataset.shift_definitions, &dataset.teams);
            let outcome = planner.generate(&month, &weekly, &overrides, &fixed)?;
            for line in &outcome.log {
                println!("{line}");
            }
            let uncovered = outcome.uncovered().count();

            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &outcome.assignments, &dataset.staff)?;
            }
            if apply {
                let mut affected: Vec<StaffId> =
                    dataset.staff.iter().map(|s| s.id.clone()).collect();
                affected.push(StaffId::unassigned());
                dataset
                    .schedule
                    .overwrite_month(&month, &affected, outcome.assignments);
                storage.save(&dataset)?;
            }
            // Code 2 = planning incomplet (gardes non couvertes)
            if uncovered > 0 {
                2
            } else {
                0
            }
        }
        Commands::AddAbsence {
            staff,
            reason,
            start,
            end,
        } => {
            let staff_id = StaffId::new(&staff);
            if !dataset.staff.iter().any(|s| s.id == staff_id) {
                bail!("unknown staff id: {staff}");
            }
            let start = NaiveDate::parse_from_str(&start, "%Y-%m-%d")?;
            let end = NaiveDate::parse_from_str(&end, "%Y-%m-%d")?;
            let absence = Absence::new(staff_id, &reason, start, end).map_err(anyhow::Error::msg)?;
            let spawned = dataset
                .schedule
                .apply_absence(&absence, &dataset.shift_definitions);
            dataset.absences.push(absence);
            storage.save(&dataset)?;
            println!(
                "Absence recorded; {} shift(s) now need a replacement",
                spawned.len()
            );
            0
        }
        Commands::Replacements { shift_id } => {
            let Some(placeholder) = dataset.schedule.entry_by_id(&shift_id) else {
                bail!("unknown shift record: {shift_id}");
            };
            let planner = Planner::new(&dataset.staff, &dataset.shift_definitions, &dataset.teams);
            let options = dataset.schedule.find_replacements(
                placeholder,
                &dataset.staff,
                &dataset.shift_definitions,
                &dataset.teams,
                planner.options(),
            );
            if options.is_empty() {
                println!("No available replacement");
            }
            for opt in &options {
                let name = dataset
                    .staff
                    .iter()
                    .find(|s| s.id == opt.staff_id)
                    .map(|s| s.name.as_str())
                    .unwrap_or("-");
                println!("{} | {} | {}", opt.staff_id.as_str(), name, opt.reason);
            }
            0
        }
        Commands::Cover { shift_id, with } => {
            let staff_id = StaffId::new(&with);
            if !dataset.staff.iter().any(|s| s.id == staff_id) {
                bail!("unknown staff id: {with}");
            }
            let record = dataset.schedule.assign_replacement(&shift_id, &staff_id)?;
            storage.save(&dataset)?;
            println!(
                "Covered {} on {} with {}",
                record.shift_code.as_deref().unwrap_or("-"),
                record.date,
                with
            );
            0
        }
        Commands::List {
            month,
            out_csv,
            out_json,
        } => {
            let entries: Vec<_> = dataset
                .schedule
                .entries
                .iter()
                .filter(|e| {
                    month
                        .as_deref()
                        .map_or(true, |m| e.date.format("%Y-%m").to_string() == m)
                })
                .cloned()
                .collect();
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &entries, &dataset.staff)?;
            }
            if let Some(path) = out_json {
                io::export_dataset_json(path, &dataset)?;
            }
            // impression compacte
            for e in &entries {
                let who = dataset
                    .staff
                    .iter()
                    .find(|s| s.id == e.staff_id)
                    .map(|s| s.name.as_str())
                    .unwrap_or(if e.is_uncovered() { "SCOPERTO" } else { "-" });
                println!(
                    "{} | {} | {} | {}",
                    e.id,
                    e.date,
                    who,
                    e.shift_code.as_deref().unwrap_or("-")
                );
            }
            0
        }
    };

    std::process::exit(code);
}
