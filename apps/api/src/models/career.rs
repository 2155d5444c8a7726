use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AppError;

/// A career path from the fixed catalog. Variant order is catalog order, so
/// `Ord` sorts paths the way the catalog lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CareerPath {
    Medicine,
    Dentistry,
    Pharmacy,
    Nursing,
    VeterinaryScience,
    BiomedicalScience,
    CivilEngineering,
    MechanicalEngineering,
    ElectricalEngineering,
    ComputerEngineering,
    SoftwareEngineering,
    Telecommunications,
    AerospaceEngineering,
    ComputerScience,
    InformationTechnology,
    DataScience,
    Cybersecurity,
    AiMachineLearning,
    BusinessAdministration,
    Accounting,
    Finance,
    Economics,
    Marketing,
    HumanResourceManagement,
    AgriculturalScience,
    EnvironmentalScience,
    Forestry,
    FoodScience,
    Education,
    Psychology,
    Sociology,
    SocialWork,
    Counseling,
    Law,
    InternationalRelations,
    Languages,
    Journalism,
    MediaStudies,
    FineArts,
    GraphicDesign,
    Architecture,
    Music,
    TheatreArts,
    HospitalityManagement,
    Tourism,
    CulinaryArts,
}

/// Domain cluster a career path is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cluster {
    Health,
    Engineering,
    Computing,
    Business,
    AgricultureEnvironment,
    Education,
    SocialSciences,
    LawHumanities,
    ArtsDesign,
    Hospitality,
}

impl Cluster {
    pub fn label(self) -> &'static str {
        match self {
            Cluster::Health => "Science & Medicine",
            Cluster::Engineering => "Engineering & Technology",
            Cluster::Computing => "Computer Science & IT",
            Cluster::Business => "Business & Economics",
            Cluster::AgricultureEnvironment => "Agriculture & Environment",
            Cluster::Education => "Education",
            Cluster::SocialSciences => "Social Sciences",
            Cluster::LawHumanities => "Law & Humanities",
            Cluster::ArtsDesign => "Arts & Design",
            Cluster::Hospitality => "Hospitality & Tourism",
        }
    }
}

impl CareerPath {
    pub const CATALOG: [CareerPath; 46] = [
        CareerPath::Medicine,
        CareerPath::Dentistry,
        CareerPath::Pharmacy,
        CareerPath::Nursing,
        CareerPath::VeterinaryScience,
        CareerPath::BiomedicalScience,
        CareerPath::CivilEngineering,
        CareerPath::MechanicalEngineering,
        CareerPath::ElectricalEngineering,
        CareerPath::ComputerEngineering,
        CareerPath::SoftwareEngineering,
        CareerPath::Telecommunications,
        CareerPath::AerospaceEngineering,
        CareerPath::ComputerScience,
        CareerPath::InformationTechnology,
        CareerPath::DataScience,
        CareerPath::Cybersecurity,
        CareerPath::AiMachineLearning,
        CareerPath::BusinessAdministration,
        CareerPath::Accounting,
        CareerPath::Finance,
        CareerPath::Economics,
        CareerPath::Marketing,
        CareerPath::HumanResourceManagement,
        CareerPath::AgriculturalScience,
        CareerPath::EnvironmentalScience,
        CareerPath::Forestry,
        CareerPath::FoodScience,
        CareerPath::Education,
        CareerPath::Psychology,
        CareerPath::Sociology,
        CareerPath::SocialWork,
        CareerPath::Counseling,
        CareerPath::Law,
        CareerPath::InternationalRelations,
        CareerPath::Languages,
        CareerPath::Journalism,
        CareerPath::MediaStudies,
        CareerPath::FineArts,
        CareerPath::GraphicDesign,
        CareerPath::Architecture,
        CareerPath::Music,
        CareerPath::TheatreArts,
        CareerPath::HospitalityManagement,
        CareerPath::Tourism,
        CareerPath::CulinaryArts,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CareerPath::Medicine => "Medicine",
            CareerPath::Dentistry => "Dentistry",
            CareerPath::Pharmacy => "Pharmacy",
            CareerPath::Nursing => "Nursing",
            CareerPath::VeterinaryScience => "Veterinary Science",
            CareerPath::BiomedicalScience => "Biomedical Science",
            CareerPath::CivilEngineering => "Civil Engineering",
            CareerPath::MechanicalEngineering => "Mechanical Engineering",
            CareerPath::ElectricalEngineering => "Electrical Engineering",
            CareerPath::ComputerEngineering => "Computer Engineering",
            CareerPath::SoftwareEngineering => "Software Engineering",
            CareerPath::Telecommunications => "Telecommunications",
            CareerPath::AerospaceEngineering => "Aerospace Engineering",
            CareerPath::ComputerScience => "Computer Science",
            CareerPath::InformationTechnology => "Information Technology",
            CareerPath::DataScience => "Data Science",
            CareerPath::Cybersecurity => "Cybersecurity",
            CareerPath::AiMachineLearning => "AI & Machine Learning",
            CareerPath::BusinessAdministration => "Business Administration",
            CareerPath::Accounting => "Accounting",
            CareerPath::Finance => "Finance",
            CareerPath::Economics => "Economics",
            CareerPath::Marketing => "Marketing",
            CareerPath::HumanResourceManagement => "Human Resource Management",
            CareerPath::AgriculturalScience => "Agricultural Science",
            CareerPath::EnvironmentalScience => "Environmental Science",
            CareerPath::Forestry => "Forestry",
            CareerPath::FoodScience => "Food Science",
            CareerPath::Education => "Education",
            CareerPath::Psychology => "Psychology",
            CareerPath::Sociology => "Sociology",
            CareerPath::SocialWork => "Social Work",
            CareerPath::Counseling => "Counseling",
            CareerPath::Law => "Law",
            CareerPath::InternationalRelations => "International Relations",
            CareerPath::Languages => "Languages",
            CareerPath::Journalism => "Journalism",
            CareerPath::MediaStudies => "Media Studies",
            CareerPath::FineArts => "Fine Arts",
            CareerPath::GraphicDesign => "Graphic Design",
            CareerPath::Architecture => "Architecture",
            CareerPath::Music => "Music",
            CareerPath::TheatreArts => "Theatre Arts",
            CareerPath::HospitalityManagement => "Hospitality Management",
            CareerPath::Tourism => "Tourism",
            CareerPath::CulinaryArts => "Culinary Arts",
        }
    }

    pub fn cluster(self) -> Cluster {
        use CareerPath::*;
        match self {
            Medicine | Dentistry | Pharmacy | Nursing | VeterinaryScience | BiomedicalScience => {
                Cluster::Health
            }
            CivilEngineering | MechanicalEngineering | ElectricalEngineering
            | ComputerEngineering | SoftwareEngineering | Telecommunications
            | AerospaceEngineering => Cluster::Engineering,
            ComputerScience | InformationTechnology | DataScience | Cybersecurity
            | AiMachineLearning => Cluster::Computing,
            BusinessAdministration | Accounting | Finance | Economics | Marketing
            | HumanResourceManagement => Cluster::Business,
            AgriculturalScience | EnvironmentalScience | Forestry | FoodScience => {
                Cluster::AgricultureEnvironment
            }
            Education => Cluster::Education,
            Psychology | Sociology | SocialWork | Counseling => Cluster::SocialSciences,
            Law | InternationalRelations | Languages | Journalism | MediaStudies => {
                Cluster::LawHumanities
            }
            FineArts | GraphicDesign | Architecture | Music | TheatreArts => Cluster::ArtsDesign,
            HospitalityManagement | Tourism | CulinaryArts => Cluster::Hospitality,
        }
    }
}

impl FromStr for CareerPath {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::CATALOG
            .iter()
            .find(|career| career.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("career path '{s}' is not in the catalog")))
    }
}

impl fmt::Display for CareerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for CareerPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for CareerPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
