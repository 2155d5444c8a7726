//! Profile Generator: synthesizes unlabeled, internally consistent student profiles.
//!
//! Grades come from weighted categorical draws over A–F. Each compulsory subject
//! has its own weighting; optional subjects are weighted by category (sciences
//! grade harder, Computer Science is flatter, everything else uses the standard
//! weighting). No labeling happens here.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::grade::Grade;
use crate::models::profile::{
    CompulsoryGrades, Gender, StudentProfile, SubjectGrade, OPTIONAL_SUBJECT_COUNT,
};
use crate::models::subject::Subject;

/// Relative weights for grades A, B, C, D, E, F (in that order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeWeights(pub [u32; 6]);

impl GradeWeights {
    pub const STANDARD: Self = Self([25, 30, 20, 15, 5, 5]);
    pub const ENGLISH: Self = Self([20, 30, 25, 15, 5, 5]);
    pub const KISWAHILI: Self = Self([20, 25, 30, 15, 5, 5]);
    pub const SCIENCE: Self = Self([20, 25, 25, 20, 5, 5]);
    pub const TECHNOLOGY: Self = Self([25, 20, 25, 20, 5, 5]);

    fn sampler(&self, label: &str) -> Result<WeightedIndex<u32>, AppError> {
        WeightedIndex::new(self.0)
            .map_err(|e| AppError::Validation(format!("{label} grade weights are unusable: {e}")))
    }
}

/// Grade weighting used by the generator. Defaults model typical grade
/// distributions: Math and English skew toward B, Kiswahili toward C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub math: GradeWeights,
    pub english: GradeWeights,
    pub kiswahili: GradeWeights,
    /// Biology, Chemistry, Physics.
    pub science: GradeWeights,
    /// Computer Science.
    pub technology: GradeWeights,
    /// Every other optional subject.
    pub standard: GradeWeights,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            math: GradeWeights::STANDARD,
            english: GradeWeights::ENGLISH,
            kiswahili: GradeWeights::KISWAHILI,
            science: GradeWeights::SCIENCE,
            technology: GradeWeights::TECHNOLOGY,
            standard: GradeWeights::STANDARD,
        }
    }
}

/// Draws random profiles. Samplers are built once from a [`GeneratorConfig`];
/// the RNG is supplied per call.
#[derive(Debug, Clone)]
pub struct ProfileGenerator {
    math: WeightedIndex<u32>,
    english: WeightedIndex<u32>,
    kiswahili: WeightedIndex<u32>,
    science: WeightedIndex<u32>,
    technology: WeightedIndex<u32>,
    standard: WeightedIndex<u32>,
}

impl ProfileGenerator {
    /// Fails with `Validation` if any weight table sums to zero.
    pub fn new(config: &GeneratorConfig) -> Result<Self, AppError> {
        Ok(Self {
            math: config.math.sampler("math")?,
            english: config.english.sampler("english")?,
            kiswahili: config.kiswahili.sampler("kiswahili")?,
            science: config.science.sampler("science")?,
            technology: config.technology.sampler("technology")?,
            standard: config.standard.sampler("standard")?,
        })
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<StudentProfile, AppError> {
        let gender = Gender::ALL[rng.random_range(0..Gender::ALL.len())];

        let compulsory = CompulsoryGrades {
            math: draw(&self.math, rng),
            english: draw(&self.english, rng),
            kiswahili: draw(&self.kiswahili, rng),
        };

        let subjects: Vec<Subject> = Subject::OPTIONAL
            .choose_multiple(rng, OPTIONAL_SUBJECT_COUNT)
            .copied()
            .collect();

        let optional = subjects
            .into_iter()
            .map(|subject| SubjectGrade {
                subject,
                grade: draw(self.sampler_for(subject), rng),
            })
            .collect();

        StudentProfile::new(gender, compulsory, optional)
    }

    fn sampler_for(&self, subject: Subject) -> &WeightedIndex<u32> {
        if subject.is_science() {
            &self.science
        } else if subject == Subject::ComputerScience {
            &self.technology
        } else {
            &self.standard
        }
    }
}

impl Default for ProfileGenerator {
    fn default() -> Self {
        Self::new(&GeneratorConfig::default()).expect("default grade weights are non-zero")
    }
}

fn draw<R: Rng + ?Sized>(sampler: &WeightedIndex<u32>, rng: &mut R) -> Grade {
    Grade::ALL[sampler.sample(rng)]
}
