use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::career::CareerPath;
use crate::models::grade::{Grade, GradeInput};
use crate::models::subject::Subject;

/// Number of optional subjects every profile carries.
pub const OPTIONAL_SUBJECT_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn name(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(AppError::Validation(format!(
                "gender must be Male or Female, got '{s}'"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubjectGrade {
    pub subject: Subject,
    pub grade: Grade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompulsoryGrades {
    pub math: Grade,
    pub english: Grade,
    pub kiswahili: Grade,
}

/// A validated student profile.
///
/// Fields are private so the derived values can only come from [`StudentProfile::new`]:
/// `took_all_sciences` and `average_performance` are always recomputed from the
/// subjects and grades, never supplied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentProfile {
    gender: Gender,
    compulsory: CompulsoryGrades,
    optional: [SubjectGrade; OPTIONAL_SUBJECT_COUNT],
    took_all_sciences: bool,
    average_performance: f64,
}

impl StudentProfile {
    /// Builds a profile, rejecting any optional selection that is not exactly
    /// four distinct optional subjects. Selection order is kept as given.
    pub fn new(
        gender: Gender,
        compulsory: CompulsoryGrades,
        optional: Vec<SubjectGrade>,
    ) -> Result<Self, AppError> {
        let optional: [SubjectGrade; OPTIONAL_SUBJECT_COUNT] =
            optional.try_into().map_err(|given: Vec<SubjectGrade>| {
                AppError::InvalidSubjectSelection(format!(
                    "expected exactly {OPTIONAL_SUBJECT_COUNT} optional subjects, got {}",
                    given.len()
                ))
            })?;

        for (i, entry) in optional.iter().enumerate() {
            if !entry.subject.is_optional() {
                return Err(AppError::InvalidSubjectSelection(format!(
                    "{} is compulsory and cannot be chosen as an optional subject",
                    entry.subject
                )));
            }
            if optional[..i].iter().any(|prev| prev.subject == entry.subject) {
                return Err(AppError::InvalidSubjectSelection(format!(
                    "{} is chosen more than once",
                    entry.subject
                )));
            }
        }

        let took_all_sciences = Subject::SCIENCES
            .iter()
            .all(|science| optional.iter().any(|o| o.subject == *science));

        let total: f64 = [compulsory.math, compulsory.english, compulsory.kiswahili]
            .iter()
            .chain(optional.iter().map(|o| &o.grade))
            .map(|g| g.points())
            .sum();
        let average_performance = round_to_hundredths(total / 7.0);

        Ok(Self {
            gender,
            compulsory,
            optional,
            took_all_sciences,
            average_performance,
        })
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn math(&self) -> Grade {
        self.compulsory.math
    }

    pub fn english(&self) -> Grade {
        self.compulsory.english
    }

    pub fn kiswahili(&self) -> Grade {
        self.compulsory.kiswahili
    }

    /// Optional subjects in selection order.
    pub fn optional_subjects(&self) -> &[SubjectGrade; OPTIONAL_SUBJECT_COUNT] {
        &self.optional
    }

    pub fn took_all_sciences(&self) -> bool {
        self.took_all_sciences
    }

    pub fn average_performance(&self) -> f64 {
        self.average_performance
    }

    pub fn has_optional(&self, subject: Subject) -> bool {
        self.optional.iter().any(|o| o.subject == subject)
    }

    /// Grade for any subject the profile carries, looked up by name.
    pub fn grade_of(&self, subject: Subject) -> Option<Grade> {
        match subject {
            Subject::Math => Some(self.compulsory.math),
            Subject::English => Some(self.compulsory.english),
            Subject::Kiswahili => Some(self.compulsory.kiswahili),
            _ => self
                .optional
                .iter()
                .find(|o| o.subject == subject)
                .map(|o| o.grade),
        }
    }
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A profile with its resolved career path. One row of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledProfile {
    pub profile: StudentProfile,
    pub career_path: CareerPath,
}

// ────────────────────────────────────────────────────────────────────────────
// Front-end submission shape
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionalSubjectInput {
    pub subject: String,
    pub grade: GradeInput,
}

/// Raw profile as submitted by the data-collection front end. Converted into a
/// [`StudentProfile`] with `TryFrom`, which is where every validation error
/// surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSubmission {
    pub gender: String,
    pub math_grade: GradeInput,
    pub english_grade: GradeInput,
    pub kiswahili_grade: GradeInput,
    pub optional_subjects: Vec<OptionalSubjectInput>,
}

impl TryFrom<ProfileSubmission> for StudentProfile {
    type Error = AppError;

    fn try_from(submission: ProfileSubmission) -> Result<Self, Self::Error> {
        let gender = submission.gender.parse()?;
        let compulsory = CompulsoryGrades {
            math: submission.math_grade.try_into()?,
            english: submission.english_grade.try_into()?,
            kiswahili: submission.kiswahili_grade.try_into()?,
        };
        let optional = submission
            .optional_subjects
            .into_iter()
            .map(|input| {
                Ok(SubjectGrade {
                    subject: input.subject.parse()?,
                    grade: input.grade.try_into()?,
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        StudentProfile::new(gender, compulsory, optional)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Builds a profile from letter grades; panics on invalid input.
    pub fn profile(compulsory: [Grade; 3], optional: [(Subject, Grade); 4]) -> StudentProfile {
        StudentProfile::new(
            Gender::Female,
            CompulsoryGrades {
                math: compulsory[0],
                english: compulsory[1],
                kiswahili: compulsory[2],
            },
            optional
                .iter()
                .map(|(subject, grade)| SubjectGrade {
                    subject: *subject,
                    grade: *grade,
                })
                .collect(),
        )
        .expect("fixture profile must be valid")
    }
}
