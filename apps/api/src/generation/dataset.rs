//! Dataset Assembler: builds the labeled synthetic corpus and moves it to and
//! from the tabular CSV format consumed by the training pipeline.
//!
//! Column order and naming are a contract with that pipeline:
//! `Gender, Math_Grade, English_Grade, Kiswahili_Grade, Subject_4..Subject_7,
//! Grade_4..Grade_7, Took_All_Sciences, Average_Performance, Career_Path`.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, info};

use crate::eligibility::resolver::resolve;
use crate::errors::AppError;
use crate::generation::profile_generator::ProfileGenerator;
use crate::models::grade::Grade;
use crate::models::profile::{CompulsoryGrades, LabeledProfile, StudentProfile, SubjectGrade};

/// Seed used when neither the caller nor the environment provides one.
pub const DEFAULT_DATASET_SEED: u64 = 42;
pub const DEFAULT_RECORD_COUNT: usize = 1000;

/// Generates `count` profiles and labels each with the career resolver.
/// Single-threaded: a seeded RNG yields an identical dataset every run.
pub fn assemble<R: Rng + ?Sized>(
    generator: &ProfileGenerator,
    count: usize,
    rng: &mut R,
) -> Result<Vec<LabeledProfile>, AppError> {
    info!("Generating dataset with {count} records");

    let mut records = Vec::with_capacity(count);
    let mut fallbacks = 0usize;
    for _ in 0..count {
        let profile = generator.generate(rng)?;
        let resolution = resolve(&profile, rng);
        if resolution.used_fallback {
            fallbacks += 1;
        }
        records.push(LabeledProfile {
            profile,
            career_path: resolution.career_path,
        });
    }

    debug!(records = records.len(), fallbacks, "dataset assembled");
    Ok(records)
}

// ────────────────────────────────────────────────────────────────────────────
// Tabular row
// ────────────────────────────────────────────────────────────────────────────

/// One CSV row. Grades are grade-point values; `Took_All_Sciences` is written
/// `True`/`False`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRow {
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Math_Grade")]
    pub math_grade: f64,
    #[serde(rename = "English_Grade")]
    pub english_grade: f64,
    #[serde(rename = "Kiswahili_Grade")]
    pub kiswahili_grade: f64,
    #[serde(rename = "Subject_4")]
    pub subject_4: String,
    #[serde(rename = "Subject_5")]
    pub subject_5: String,
    #[serde(rename = "Subject_6")]
    pub subject_6: String,
    #[serde(rename = "Subject_7")]
    pub subject_7: String,
    #[serde(rename = "Grade_4")]
    pub grade_4: f64,
    #[serde(rename = "Grade_5")]
    pub grade_5: f64,
    #[serde(rename = "Grade_6")]
    pub grade_6: f64,
    #[serde(rename = "Grade_7")]
    pub grade_7: f64,
    #[serde(
        rename = "Took_All_Sciences",
        serialize_with = "serialize_title_bool",
        deserialize_with = "deserialize_title_bool"
    )]
    pub took_all_sciences: bool,
    #[serde(rename = "Average_Performance")]
    pub average_performance: f64,
    #[serde(rename = "Career_Path")]
    pub career_path: String,
}

impl From<&LabeledProfile> for DatasetRow {
    fn from(record: &LabeledProfile) -> Self {
        let p = &record.profile;
        let [s4, s5, s6, s7] = *p.optional_subjects();
        DatasetRow {
            gender: p.gender().name().to_string(),
            math_grade: p.math().points(),
            english_grade: p.english().points(),
            kiswahili_grade: p.kiswahili().points(),
            subject_4: s4.subject.name().to_string(),
            subject_5: s5.subject.name().to_string(),
            subject_6: s6.subject.name().to_string(),
            subject_7: s7.subject.name().to_string(),
            grade_4: s4.grade.points(),
            grade_5: s5.grade.points(),
            grade_6: s6.grade.points(),
            grade_7: s7.grade.points(),
            took_all_sciences: p.took_all_sciences(),
            average_performance: p.average_performance(),
            career_path: record.career_path.name().to_string(),
        }
    }
}

impl TryFrom<DatasetRow> for LabeledProfile {
    type Error = AppError;

    /// Rebuilds the profile from its inputs, then checks the stored derived
    /// columns agree with the recomputed ones.
    fn try_from(row: DatasetRow) -> Result<Self, Self::Error> {
        let compulsory = CompulsoryGrades {
            math: Grade::from_points(row.math_grade)?,
            english: Grade::from_points(row.english_grade)?,
            kiswahili: Grade::from_points(row.kiswahili_grade)?,
        };
        let optional = [
            (&row.subject_4, row.grade_4),
            (&row.subject_5, row.grade_5),
            (&row.subject_6, row.grade_6),
            (&row.subject_7, row.grade_7),
        ]
        .into_iter()
        .map(|(subject, points)| {
            Ok(SubjectGrade {
                subject: subject.parse()?,
                grade: Grade::from_points(points)?,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

        let profile = StudentProfile::new(row.gender.parse()?, compulsory, optional)?;

        if profile.took_all_sciences() != row.took_all_sciences {
            return Err(AppError::Dataset(format!(
                "Took_All_Sciences is {} but the subjects say {}",
                row.took_all_sciences,
                profile.took_all_sciences()
            )));
        }
        if (profile.average_performance() - row.average_performance).abs() > 1e-9 {
            return Err(AppError::Dataset(format!(
                "Average_Performance is {} but the grades average {}",
                row.average_performance,
                profile.average_performance()
            )));
        }

        Ok(LabeledProfile {
            profile,
            career_path: row.career_path.parse()?,
        })
    }
}

fn serialize_title_bool<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}

fn deserialize_title_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected True or False, got '{other}'"
        ))),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// CSV IO
// ────────────────────────────────────────────────────────────────────────────

pub fn write_csv<W: Write>(writer: W, records: &[LabeledProfile]) -> Result<(), AppError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(DatasetRow::from(record))?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Writes the dataset to `path`, replacing any existing file.
pub fn write_csv_file(path: &Path, records: &[LabeledProfile]) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::Dataset(format!("cannot create {}: {e}", path.display()))
    })?;
    write_csv(file, records)?;
    info!("Dataset saved to {}", path.display());
    Ok(())
}

/// Reads and validates every row. The first bad row aborts the read, with its
/// 1-based data row number in the error.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<LabeledProfile>, AppError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<DatasetRow>()
        .enumerate()
        .map(|(i, row)| {
            LabeledProfile::try_from(row?).map_err(|e| {
                AppError::Dataset(format!("row {}: {e}", i + 1))
            })
        })
        .collect()
}

pub fn read_csv_file(path: &Path) -> Result<Vec<LabeledProfile>, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::Dataset(format!("cannot open {}: {e}", path.display())))?;
    read_csv(file)
}
