//! Core types for the insight engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Base of the outbound "find near me" link built from a recommendation
pub const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

/// Medical specialty a report can point the user to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Specialty {
    /// Ear, nose & throat
    Ent,
    Neurology,
    InternalMedicine,
    Gastroenterology,
    Pulmonology,
    /// General practice, phrased as a family doctor search
    FamilyPractice,
    /// General practice, the fallback
    GeneralPractice,
}

impl Specialty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialty::Ent => "ent",
            Specialty::Neurology => "neurology",
            Specialty::InternalMedicine => "internal_medicine",
            Specialty::Gastroenterology => "gastroenterology",
            Specialty::Pulmonology => "pulmonology",
            Specialty::FamilyPractice => "family_practice",
            Specialty::GeneralPractice => "general_practice",
        }
    }

    /// Human-readable label shown on the recommendation card
    pub fn label(&self) -> &'static str {
        match self {
            Specialty::Ent => "ENT Specialist (Ear, Nose & Throat)",
            Specialty::Neurology => "Neurologist",
            Specialty::InternalMedicine => "Internal Medicine Specialist",
            Specialty::Gastroenterology => "Gastroenterologist",
            Specialty::Pulmonology => "Pulmonologist (Lung Specialist)",
            Specialty::FamilyPractice | Specialty::GeneralPractice => "General Practitioner",
        }
    }

    /// Search text handed to the external lookup
    pub fn search_query(&self) -> &'static str {
        match self {
            Specialty::Ent => "ENT specialist doctor",
            Specialty::Neurology => "neurologist doctor",
            Specialty::InternalMedicine => "internal medicine doctor",
            Specialty::Gastroenterology => "gastroenterologist doctor",
            Specialty::Pulmonology => "pulmonologist doctor",
            Specialty::FamilyPractice => "family doctor general practitioner",
            Specialty::GeneralPractice => "general practitioner doctor",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Specialty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ent" => Ok(Specialty::Ent),
            "neurology" => Ok(Specialty::Neurology),
            "internal_medicine" => Ok(Specialty::InternalMedicine),
            "gastroenterology" => Ok(Specialty::Gastroenterology),
            "pulmonology" => Ok(Specialty::Pulmonology),
            "family_practice" => Ok(Specialty::FamilyPractice),
            "general_practice" => Ok(Specialty::GeneralPractice),
            _ => Err(format!("Unknown specialty: {}", s)),
        }
    }
}

/// The specialist a report recommends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub specialty: Specialty,
    pub label: String,
    /// Opaque lookup text; never parsed
    pub query: String,
}

impl Recommendation {
    pub fn new(specialty: Specialty) -> Self {
        Self {
            specialty,
            label: specialty.label().to_string(),
            query: specialty.search_query().to_string(),
        }
    }

    /// Outbound "find near me" link for the recommendation card
    pub fn lookup_url(&self) -> String {
        format!("{}{}+near+me", MAPS_SEARCH_BASE, self.query)
    }
}

impl From<Specialty> for Recommendation {
    fn from(specialty: Specialty) -> Self {
        Self::new(specialty)
    }
}

/// Output of one engine run. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightReport {
    /// Overview, pattern, severity, advice; always four
    pub statements: Vec<String>,
    pub recommendation: Recommendation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialty_serialization() {
        assert_eq!(Specialty::InternalMedicine.as_str(), "internal_medicine");
        assert_eq!(
            Specialty::from_str("pulmonology").unwrap(),
            Specialty::Pulmonology
        );
        assert!(Specialty::from_str("cardiology").is_err());
    }

    #[test]
    fn test_general_practice_variants_share_label() {
        assert_eq!(
            Specialty::FamilyPractice.label(),
            Specialty::GeneralPractice.label()
        );
        assert_ne!(
            Specialty::FamilyPractice.search_query(),
            Specialty::GeneralPractice.search_query()
        );
    }

    #[test]
    fn test_lookup_url() {
        let rec = Recommendation::new(Specialty::Neurology);
        assert_eq!(rec.label, "Neurologist");
        assert_eq!(
            rec.lookup_url(),
            "https://www.google.com/maps/search/neurologist doctor+near+me"
        );
    }
}
