use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use crate::errors::AppError;

/// Letter grade. Every threshold in the eligibility rules compares the
/// grade-point value, never the letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
    F,
}

/// Grade-point table, best grade first.
pub const GRADE_POINTS: [(Grade, f64); 6] = [
    (Grade::A, 4.0),
    (Grade::B, 3.0),
    (Grade::C, 2.0),
    (Grade::D, 1.0),
    (Grade::E, 0.5),
    (Grade::F, 0.0),
];

impl Grade {
    pub const ALL: [Grade; 6] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::E, Grade::F];

    /// Looked up in [`GRADE_POINTS`], which is ordered by discriminant.
    pub fn points(self) -> f64 {
        GRADE_POINTS[self as usize].1
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        }
    }

    /// Inverse of [`Grade::points`]. Only the six exact table values map back.
    pub fn from_points(points: f64) -> Result<Self, AppError> {
        GRADE_POINTS
            .iter()
            .find(|(_, p)| (p - points).abs() < f64::EPSILON)
            .map(|(g, _)| *g)
            .ok_or_else(|| AppError::InvalidGrade(format!("{points} is not a grade-point value")))
    }
}

impl FromStr for Grade {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "E" => Ok(Grade::E),
            "F" => Ok(Grade::F),
            _ => Err(AppError::InvalidGrade(format!(
                "'{s}' is not one of A, B, C, D, E, F"
            ))),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl Serialize for Grade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.letter())
    }
}

/// A grade as submitted by the front end: a letter or an already-converted
/// grade-point value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GradeInput {
    Points(f64),
    Letter(String),
}

impl TryFrom<GradeInput> for Grade {
    type Error = AppError;

    fn try_from(input: GradeInput) -> Result<Self, Self::Error> {
        match input {
            GradeInput::Points(p) => Grade::from_points(p),
            GradeInput::Letter(s) => s.parse(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_discriminants() {
        for (i, (grade, _)) in GRADE_POINTS.iter().enumerate() {
            assert_eq!(*grade, Grade::ALL[i]);
            assert_eq!(*grade as usize, i);
        }
    }

    #[test]
    fn test_point_values() {
        let points: Vec<f64> = Grade::ALL.iter().map(|g| g.points()).collect();
        assert_eq!(points, vec![4.0, 3.0, 2.0, 1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_parse_letter_is_case_insensitive() {
        assert_eq!("a".parse::<Grade>().unwrap(), Grade::A);
        assert_eq!(" F ".parse::<Grade>().unwrap(), Grade::F);
    }

    #[test]
    fn test_unknown_letter_is_invalid_grade() {
        let err = "G".parse::<Grade>().unwrap_err();
        assert!(matches!(err, AppError::InvalidGrade(_)));
        assert!(matches!("A+".parse::<Grade>(), Err(AppError::InvalidGrade(_))));
    }

    #[test]
    fn test_from_points_inverts_points() {
        for grade in Grade::ALL {
            assert_eq!(Grade::from_points(grade.points()).unwrap(), grade);
        }
    }

    #[test]
    fn test_from_points_rejects_off_table_value() {
        assert!(matches!(Grade::from_points(3.5), Err(AppError::InvalidGrade(_))));
        assert!(matches!(Grade::from_points(-1.0), Err(AppError::InvalidGrade(_))));
    }

    #[test]
    fn test_grade_input_accepts_points_and_letters() {
        let from_points: GradeInput = serde_json::from_str("3.0").unwrap();
        let from_letter: GradeInput = serde_json::from_str("\"b\"").unwrap();
        assert_eq!(Grade::try_from(from_points).unwrap(), Grade::B);
        assert_eq!(Grade::try_from(from_letter).unwrap(), Grade::B);
    }

    #[test]
    fn test_grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::C).unwrap(), "\"C\"");
    }
}
