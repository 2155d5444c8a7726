use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subject {
    Math,
    English,
    Kiswahili,
    Biology,
    Chemistry,
    Physics,
    Geography,
    History,
    Religion,
    Business,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Agriculture,
}

impl Subject {
    pub const COMPULSORY: [Subject; 3] = [Subject::Math, Subject::English, Subject::Kiswahili];

    pub const OPTIONAL: [Subject; 9] = [
        Subject::Biology,
        Subject::Chemistry,
        Subject::Physics,
        Subject::Geography,
        Subject::History,
        Subject::Religion,
        Subject::Business,
        Subject::ComputerScience,
        Subject::Agriculture,
    ];

    pub const SCIENCES: [Subject; 3] = [Subject::Biology, Subject::Chemistry, Subject::Physics];

    pub fn name(self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::English => "English",
            Subject::Kiswahili => "Kiswahili",
            Subject::Biology => "Biology",
            Subject::Chemistry => "Chemistry",
            Subject::Physics => "Physics",
            Subject::Geography => "Geography",
            Subject::History => "History",
            Subject::Religion => "Religion",
            Subject::Business => "Business",
            Subject::ComputerScience => "Computer Science",
            Subject::Agriculture => "Agriculture",
        }
    }

    pub fn is_compulsory(self) -> bool {
        Self::COMPULSORY.contains(&self)
    }

    pub fn is_optional(self) -> bool {
        !self.is_compulsory()
    }

    pub fn is_science(self) -> bool {
        Self::SCIENCES.contains(&self)
    }
}

impl FromStr for Subject {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::COMPULSORY
            .iter()
            .chain(Self::OPTIONAL.iter())
            .find(|subject| subject.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| AppError::InvalidSubjectSelection(format!("unknown subject '{s}'")))
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_covers_twelve_subjects() {
        let mut all: Vec<Subject> = Subject::COMPULSORY
            .iter()
            .chain(Subject::OPTIONAL.iter())
            .copied()
            .collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 12);
        assert!(Subject::OPTIONAL.iter().all(|s| s.is_optional()));
        assert!(Subject::COMPULSORY.iter().all(|s| s.is_compulsory()));
    }

    #[test]
    fn test_only_three_sciences() {
        let sciences: Vec<_> = Subject::OPTIONAL.iter().filter(|s| s.is_science()).collect();
        assert_eq!(sciences.len(), 3);
        assert!(!Subject::ComputerScience.is_science());
        assert!(!Subject::Agriculture.is_science());
    }

    #[test]
    fn test_parse_by_display_name() {
        assert_eq!(
            "computer science".parse::<Subject>().unwrap(),
            Subject::ComputerScience
        );
        assert_eq!("Kiswahili".parse::<Subject>().unwrap(), Subject::Kiswahili);
        assert!(matches!(
            "Astrology".parse::<Subject>(),
            Err(AppError::InvalidSubjectSelection(_))
        ));
    }

    #[test]
    fn test_serde_uses_display_name() {
        let json = serde_json::to_string(&Subject::ComputerScience).unwrap();
        assert_eq!(json, "\"Computer Science\"");
    }
}
