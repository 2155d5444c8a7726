//! Eligibility rules: maps every career path to one rule group and every rule
//! group to a pure predicate over a [`StudentProfile`].
//!
//! Membership is an explicit table (`RuleGroup::for_career`), so adding a path
//! never changes which group an existing path falls into.

use serde::{Deserialize, Serialize};

use crate::models::career::CareerPath;
use crate::models::profile::StudentProfile;
use crate::models::subject::Subject;

/// Admission rule group. Each career path belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleGroup {
    EliteHealth,
    GeneralHealth,
    Engineering,
    Computing,
    Business,
    AgricultureEnvironment,
    Education,
    SocialSciences,
    LawHumanities,
    Architecture,
    CreativeArts,
    Hospitality,
    Default,
}

impl RuleGroup {
    pub fn for_career(career: CareerPath) -> Self {
        use CareerPath::*;
        match career {
            Medicine | Dentistry | Pharmacy => RuleGroup::EliteHealth,
            Nursing | VeterinaryScience | BiomedicalScience => RuleGroup::GeneralHealth,
            // Software Engineering is also listed under computing; the
            // engineering rule takes precedence.
            CivilEngineering | MechanicalEngineering | ElectricalEngineering
            | ComputerEngineering | SoftwareEngineering | AerospaceEngineering => {
                RuleGroup::Engineering
            }
            ComputerScience | InformationTechnology | DataScience | Cybersecurity
            | AiMachineLearning => RuleGroup::Computing,
            BusinessAdministration | Accounting | Finance | Economics | Marketing
            | HumanResourceManagement => RuleGroup::Business,
            AgriculturalScience | EnvironmentalScience | Forestry | FoodScience => {
                RuleGroup::AgricultureEnvironment
            }
            Education => RuleGroup::Education,
            Psychology | Sociology | SocialWork | Counseling => RuleGroup::SocialSciences,
            Law | InternationalRelations | Languages | Journalism | MediaStudies => {
                RuleGroup::LawHumanities
            }
            Architecture => RuleGroup::Architecture,
            FineArts | GraphicDesign | Music | TheatreArts => RuleGroup::CreativeArts,
            HospitalityManagement | Tourism | CulinaryArts => RuleGroup::Hospitality,
            Telecommunications => RuleGroup::Default,
        }
    }

    pub fn is_satisfied(self, profile: &StudentProfile) -> bool {
        match self {
            RuleGroup::EliteHealth => elite_health(profile),
            RuleGroup::GeneralHealth => general_health(profile),
            RuleGroup::Engineering => engineering(profile),
            RuleGroup::Computing => computing(profile),
            RuleGroup::Business => business(profile),
            RuleGroup::AgricultureEnvironment => agriculture_environment(profile),
            RuleGroup::Education => education(profile),
            RuleGroup::SocialSciences => social_sciences(profile),
            RuleGroup::LawHumanities => law_humanities(profile),
            RuleGroup::Architecture => architecture(profile),
            RuleGroup::CreativeArts => creative_arts(profile),
            RuleGroup::Hospitality => hospitality(profile),
            RuleGroup::Default => baseline(profile),
        }
    }

    /// Human-readable statement of the rule, for catalog listings.
    pub fn requirement(self) -> &'static str {
        match self {
            RuleGroup::EliteHealth => {
                "Biology, Chemistry and Physics taken; Math ≥ 3.0; English ≥ 3.0; average ≥ 3.5"
            }
            RuleGroup::GeneralHealth => {
                "Biology, Chemistry and Physics taken; Math ≥ 2.5; average ≥ 3.0"
            }
            RuleGroup::Engineering => "Math ≥ 3.0; Physics taken with grade ≥ 3.0; average ≥ 3.0",
            RuleGroup::Computing => {
                "Math ≥ 3.0; average ≥ 2.8; Computer Science taken or Math ≥ 3.5"
            }
            RuleGroup::Business => {
                "Math ≥ 2.5; English ≥ 2.5; Business taken or average ≥ 2.8"
            }
            RuleGroup::AgricultureEnvironment => {
                "average ≥ 2.5; Agriculture or Biology taken"
            }
            RuleGroup::Education => "average ≥ 2.0",
            RuleGroup::SocialSciences => "English ≥ 2.5; average ≥ 2.7",
            RuleGroup::LawHumanities => "English ≥ 3.0; Kiswahili ≥ 2.5; average ≥ 2.8",
            RuleGroup::Architecture => "Math ≥ 3.0; average ≥ 3.0",
            RuleGroup::CreativeArts => "English ≥ 2.5; average ≥ 2.2",
            RuleGroup::Hospitality => "English ≥ 2.5; average ≥ 2.3",
            RuleGroup::Default => "average ≥ 2.0",
        }
    }
}

/// Whether `profile` meets the admission rule for `career`.
pub fn is_qualified(profile: &StudentProfile, career: CareerPath) -> bool {
    RuleGroup::for_career(career).is_satisfied(profile)
}

/// Every qualifying career path, in catalog order. May be empty.
pub fn qualifying_set(profile: &StudentProfile) -> Vec<CareerPath> {
    CareerPath::CATALOG
        .iter()
        .copied()
        .filter(|career| is_qualified(profile, *career))
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Predicates
// ────────────────────────────────────────────────────────────────────────────

fn math(p: &StudentProfile) -> f64 {
    p.math().points()
}

fn english(p: &StudentProfile) -> f64 {
    p.english().points()
}

fn avg(p: &StudentProfile) -> f64 {
    p.average_performance()
}

fn elite_health(p: &StudentProfile) -> bool {
    p.took_all_sciences()
        && math(p) >= 3.0
        && english(p) >= 3.0
        && avg(p) >= 3.5
        && p.has_optional(Subject::Biology)
        && p.has_optional(Subject::Chemistry)
}

fn general_health(p: &StudentProfile) -> bool {
    p.took_all_sciences() && math(p) >= 2.5 && avg(p) >= 3.0
}

fn engineering(p: &StudentProfile) -> bool {
    // Physics must be among the optional subjects; a missing grade never passes.
    let physics = p
        .grade_of(Subject::Physics)
        .map(|g| g.points())
        .unwrap_or(0.0);
    math(p) >= 3.0 && p.has_optional(Subject::Physics) && physics >= 3.0 && avg(p) >= 3.0
}

fn computing(p: &StudentProfile) -> bool {
    math(p) >= 3.0 && avg(p) >= 2.8 && (p.has_optional(Subject::ComputerScience) || math(p) >= 3.5)
}

fn business(p: &StudentProfile) -> bool {
    math(p) >= 2.5 && english(p) >= 2.5 && (p.has_optional(Subject::Business) || avg(p) >= 2.8)
}

fn agriculture_environment(p: &StudentProfile) -> bool {
    avg(p) >= 2.5 && (p.has_optional(Subject::Agriculture) || p.has_optional(Subject::Biology))
}

fn education(p: &StudentProfile) -> bool {
    avg(p) >= 2.0
}

fn social_sciences(p: &StudentProfile) -> bool {
    english(p) >= 2.5 && avg(p) >= 2.7
}

fn law_humanities(p: &StudentProfile) -> bool {
    english(p) >= 3.0 && p.kiswahili().points() >= 2.5 && avg(p) >= 2.8
}

fn architecture(p: &StudentProfile) -> bool {
    math(p) >= 3.0 && avg(p) >= 3.0
}

fn creative_arts(p: &StudentProfile) -> bool {
    english(p) >= 2.5 && avg(p) >= 2.2
}

fn hospitality(p: &StudentProfile) -> bool {
    english(p) >= 2.5 && avg(p) >= 2.3
}

fn baseline(p: &StudentProfile) -> bool {
    avg(p) >= 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::grade::Grade::*;
    use crate::models::profile::fixtures::profile;
    use crate::models::subject::Subject::*;

    const ENGINEERING_PATHS: [CareerPath; 6] = [
        CareerPath::CivilEngineering,
        CareerPath::MechanicalEngineering,
        CareerPath::ElectricalEngineering,
        CareerPath::ComputerEngineering,
        CareerPath::SoftwareEngineering,
        CareerPath::AerospaceEngineering,
    ];

    #[test]
    fn test_every_catalog_path_has_a_group() {
        let defaults: Vec<_> = CareerPath::CATALOG
            .iter()
            .filter(|c| RuleGroup::for_career(**c) == RuleGroup::Default)
            .collect();
        assert_eq!(defaults, vec![&CareerPath::Telecommunications]);
    }

    #[test]
    fn test_elite_health_scenario() {
        // 4 + 4 + 4 + 4 + 4 + 4 + 3 = 27 → 3.86
        let p = profile(
            [A, A, A],
            [(Biology, A), (Chemistry, A), (Physics, A), (History, B)],
        );
        assert!(p.took_all_sciences());
        assert!(p.average_performance() >= 3.8);

        let set = qualifying_set(&p);
        for career in [CareerPath::Medicine, CareerPath::Dentistry, CareerPath::Pharmacy] {
            assert!(set.contains(&career), "{career} should qualify");
        }
    }

    #[test]
    fn test_elite_health_needs_average_of_3_5() {
        // 4 + 4 + 2 + 3 + 3 + 3 + 3 = 22 → 3.14
        let p = profile(
            [A, A, C],
            [(Biology, B), (Chemistry, B), (Physics, B), (History, B)],
        );
        assert!(!is_qualified(&p, CareerPath::Medicine));
        assert!(is_qualified(&p, CareerPath::Nursing));
    }

    #[test]
    fn test_low_profile_qualifies_for_nothing() {
        // 1 + 1 + 2 + 1 + 2 + 1 + 1 = 9 → 1.29
        let p = profile(
            [D, D, C],
            [(History, D), (Religion, C), (Geography, D), (Business, D)],
        );
        assert!(p.average_performance() < 2.0);
        assert!(qualifying_set(&p).is_empty());
    }

    #[test]
    fn test_engineering_scenario() {
        // 3 + 3 + 3 + 3 + 3 + 3 + 4 = 22 → 3.14
        let p = profile(
            [B, B, B],
            [(Physics, B), (History, B), (Geography, B), (Religion, A)],
        );
        assert!(p.average_performance() >= 3.1);
        for career in ENGINEERING_PATHS {
            assert!(is_qualified(&p, career), "{career} should qualify");
        }
    }

    #[test]
    fn test_engineering_requires_physics() {
        let p = profile(
            [A, A, A],
            [(Chemistry, A), (History, A), (Geography, A), (Religion, A)],
        );
        for career in ENGINEERING_PATHS {
            assert!(!is_qualified(&p, career));
        }
        // Not an engineering-group path despite the cluster.
        assert!(is_qualified(&p, CareerPath::Telecommunications));
    }

    #[test]
    fn test_engineering_reads_physics_grade_not_position() {
        let p = profile(
            [A, A, A],
            [(History, A), (Geography, A), (Religion, A), (Physics, C)],
        );
        assert!(!is_qualified(&p, CareerPath::CivilEngineering));
    }

    #[test]
    fn test_software_engineering_uses_engineering_rule() {
        // Strong math and Computer Science, but no Physics.
        let p = profile(
            [A, A, A],
            [(ComputerScience, A), (History, A), (Geography, A), (Religion, A)],
        );
        assert!(is_qualified(&p, CareerPath::ComputerScience));
        assert!(!is_qualified(&p, CareerPath::SoftwareEngineering));
    }

    #[test]
    fn test_computing_needs_cs_or_math_3_5() {
        // Math B, CS absent: 3 + 3 + 3 + 3 + 3 + 3 + 3 = 21 → 3.0
        let without_cs = profile(
            [B, B, B],
            [(History, B), (Geography, B), (Religion, B), (Business, B)],
        );
        assert!(!is_qualified(&without_cs, CareerPath::DataScience));

        let with_cs = profile(
            [B, B, B],
            [(ComputerScience, B), (Geography, B), (Religion, B), (Business, B)],
        );
        assert!(is_qualified(&with_cs, CareerPath::DataScience));
    }

    #[test]
    fn test_business_accepts_subject_or_average() {
        // 3 + 3 + 1 + 3 + 1 + 1 + 1 = 13 → 1.86
        let with_business = profile(
            [B, B, D],
            [(Business, B), (History, D), (Geography, D), (Religion, D)],
        );
        assert!(is_qualified(&with_business, CareerPath::Accounting));

        let without_business = profile(
            [B, B, D],
            [(Agriculture, B), (History, D), (Geography, D), (Religion, D)],
        );
        assert!(!is_qualified(&without_business, CareerPath::Accounting));
    }

    #[test]
    fn test_agriculture_environment_needs_agriculture_or_biology() {
        // 3 + 3 + 3 + 2 + 2 + 2 + 3 = 18 → 2.57
        let p = profile(
            [B, B, B],
            [(Biology, C), (History, C), (Geography, C), (Religion, B)],
        );
        assert!(is_qualified(&p, CareerPath::Forestry));

        let q = profile(
            [B, B, B],
            [(Business, C), (History, C), (Geography, C), (Religion, B)],
        );
        assert!(!is_qualified(&q, CareerPath::Forestry));
    }

    #[test]
    fn test_law_needs_kiswahili() {
        // 4 + 4 + 2 + 4 + 4 + 4 + 4 = 26 → 3.71
        let p = profile(
            [A, A, C],
            [(History, A), (Geography, A), (Religion, A), (Business, A)],
        );
        assert!(!is_qualified(&p, CareerPath::Law));

        let q = profile(
            [A, A, B],
            [(History, A), (Geography, A), (Religion, A), (Business, A)],
        );
        assert!(is_qualified(&q, CareerPath::Law));
    }

    #[test]
    fn test_architecture_differs_from_other_arts() {
        // Weak math, strong English: 1 + 4 + 3 + 3 + 3 + 3 + 3 = 20 → 2.86
        let p = profile(
            [D, A, B],
            [(History, B), (Geography, B), (Religion, B), (Business, B)],
        );
        assert!(!is_qualified(&p, CareerPath::Architecture));
        assert!(is_qualified(&p, CareerPath::FineArts));
        assert!(is_qualified(&p, CareerPath::Music));
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        // 2 + 2 + 2 + 2 + 2 + 2 + 2 = 14 → 2.0
        let p = profile(
            [C, C, C],
            [(History, C), (Geography, C), (Religion, C), (Business, C)],
        );
        assert_eq!(p.average_performance(), 2.0);
        assert!(is_qualified(&p, CareerPath::Education));
        assert!(is_qualified(&p, CareerPath::Telecommunications));
        assert!(!is_qualified(&p, CareerPath::Tourism));
    }

    #[test]
    fn test_qualifying_set_is_in_catalog_order() {
        let p = profile(
            [A, A, A],
            [(Biology, A), (Chemistry, A), (Physics, A), (ComputerScience, A)],
        );
        let set = qualifying_set(&p);
        let mut sorted = set.clone();
        sorted.sort();
        assert_eq!(set, sorted);
        // A perfect science profile passes every rule.
        assert_eq!(set.len(), CareerPath::CATALOG.len());
    }
}
