//! Specialist matching
//!
//! Rules are evaluated in strict priority order and the first match wins.
//! When nothing matches the report falls back to general practice.

use crate::models::{SeverityLevel, Symptom};

use super::stats::SymptomStats;
use super::types::{Recommendation, Specialty};

/// One row of the specialist rule table
pub struct SpecialistRule {
    pub specialty: Specialty,
    pub matches: fn(&SymptomStats) -> bool,
}

pub const FALLBACK_SPECIALTY: Specialty = Specialty::GeneralPractice;

pub const SPECIALIST_RULES: [SpecialistRule; 6] = [
    SpecialistRule {
        specialty: Specialty::Ent,
        matches: recurring_throat,
    },
    SpecialistRule {
        specialty: Specialty::Neurology,
        matches: neurological,
    },
    SpecialistRule {
        specialty: Specialty::InternalMedicine,
        matches: systemic_load,
    },
    SpecialistRule {
        specialty: Specialty::Gastroenterology,
        matches: digestive,
    },
    SpecialistRule {
        specialty: Specialty::Pulmonology,
        matches: fever_with_cough,
    },
    SpecialistRule {
        specialty: Specialty::FamilyPractice,
        matches: mild_fatigue,
    },
];

/// Specialty picked by the first matching rule
pub fn match_specialty(stats: &SymptomStats) -> Specialty {
    SPECIALIST_RULES
        .iter()
        .find(|rule| (rule.matches)(stats))
        .map(|rule| rule.specialty)
        .unwrap_or(FALLBACK_SPECIALTY)
}

pub fn recommend(stats: &SymptomStats) -> Recommendation {
    Recommendation::new(match_specialty(stats))
}

fn recurring_throat(stats: &SymptomStats) -> bool {
    stats.has_any(&[Symptom::Cough, Symptom::SoreThroat]) && stats.count_of(Symptom::Cough) >= 2
}

fn neurological(stats: &SymptomStats) -> bool {
    stats.has_any(&[Symptom::Headache, Symptom::Dizziness])
        && (stats.count_of(Symptom::Headache) >= 2 || stats.count_of(Symptom::Dizziness) >= 1)
}

fn systemic_load(stats: &SymptomStats) -> bool {
    stats.has_any(&[Symptom::Fever, Symptom::BodyAches, Symptom::Fatigue])
        && stats.total_symptom_instances >= 4
}

fn digestive(stats: &SymptomStats) -> bool {
    stats.has(Symptom::Nausea)
}

fn fever_with_cough(stats: &SymptomStats) -> bool {
    stats.has(Symptom::Fever) && stats.has(Symptom::Cough)
}

fn mild_fatigue(stats: &SymptomStats) -> bool {
    stats.has(Symptom::Fatigue) && stats.dominant_severity == SeverityLevel::Mild
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeverityLevel::{Mild, Moderate, Severe};
    use crate::models::Symptom::*;
    use crate::test_utils::diary;

    fn specialty_for(specs: &[(&[Symptom], SeverityLevel)]) -> Specialty {
        match_specialty(&SymptomStats::from_entries(&diary(specs)))
    }

    #[test]
    fn test_repeated_cough_goes_to_ent() {
        assert_eq!(
            specialty_for(&[
                (&[Cough, Nausea], Mild),
                (&[Cough, Dizziness], Severe),
                (&[Cough, Fever], Moderate),
            ]),
            Specialty::Ent
        );
    }

    #[test]
    fn test_ent_outranks_neurology() {
        // Satisfies both the ENT rule and the neurology rule
        let specialty = specialty_for(&[
            (&[Cough, Headache], Mild),
            (&[Cough, Headache, Dizziness], Mild),
        ]);
        assert_eq!(specialty, Specialty::Ent);
    }

    #[test]
    fn test_single_cough_is_not_ent() {
        assert_ne!(specialty_for(&[(&[Cough, SoreThroat], Mild)]), Specialty::Ent);
    }

    #[test]
    fn test_neurology_on_dizziness_or_repeat_headache() {
        assert_eq!(specialty_for(&[(&[Dizziness], Mild)]), Specialty::Neurology);
        assert_eq!(
            specialty_for(&[(&[Headache], Mild), (&[Headache], Mild)]),
            Specialty::Neurology
        );
        assert_ne!(specialty_for(&[(&[Headache], Mild)]), Specialty::Neurology);
    }

    #[test]
    fn test_internal_medicine_needs_four_instances() {
        assert_eq!(
            specialty_for(&[(&[Fever, BodyAches], Moderate), (&[Fatigue, Nausea], Mild)]),
            Specialty::InternalMedicine
        );
        assert_eq!(
            specialty_for(&[(&[Fever, BodyAches, Nausea], Moderate)]),
            Specialty::Gastroenterology
        );
    }

    #[test]
    fn test_nausea_goes_to_gastroenterology() {
        assert_eq!(specialty_for(&[(&[Nausea], Severe)]), Specialty::Gastroenterology);
    }

    #[test]
    fn test_fever_and_cough_go_to_pulmonology() {
        assert_eq!(specialty_for(&[(&[Fever, Cough], Mild)]), Specialty::Pulmonology);
        assert_eq!(
            specialty_for(&[(&[Fever], Mild), (&[Cough], Severe)]),
            Specialty::Pulmonology
        );
    }

    #[test]
    fn test_mild_fatigue_goes_to_family_doctor() {
        let rec = recommend(&SymptomStats::from_entries(&diary(&[(&[Fatigue], Mild)])));
        assert_eq!(rec.specialty, Specialty::FamilyPractice);
        assert_eq!(rec.label, "General Practitioner");
        assert_eq!(rec.query, "family doctor general practitioner");
    }

    #[test]
    fn test_fallback_general_practitioner() {
        assert_eq!(specialty_for(&[(&[Fatigue], Severe)]), Specialty::GeneralPractice);
        assert_eq!(specialty_for(&[(&[SoreThroat], Mild)]), Specialty::GeneralPractice);

        let rec = recommend(&SymptomStats::from_entries(&diary(&[(&[Cough], Mild)])));
        assert_eq!(rec.specialty, Specialty::GeneralPractice);
        assert_eq!(rec.query, "general practitioner doctor");
    }
}
