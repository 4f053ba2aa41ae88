//! Insight Engine - turns a diary snapshot into a report

use crate::models::DiaryEntry;

use super::specialist::recommend;
use super::statements::generate_statements;
use super::stats::SymptomStats;
use super::types::InsightReport;

/// Pure, deterministic insight generator.
///
/// Callers must not pass an empty slice; guard with
/// [`crate::Error::NothingToAnalyze`] first (see [`super::run::InsightRunner`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct InsightEngine;

impl InsightEngine {
    pub fn new() -> Self {
        Self
    }

    /// Aggregate entries without generating text
    pub fn aggregate(&self, entries: &[DiaryEntry]) -> SymptomStats {
        SymptomStats::from_entries(entries)
    }

    /// Produce four statements and one specialist recommendation
    pub fn analyze(&self, entries: &[DiaryEntry]) -> InsightReport {
        let stats = self.aggregate(entries);

        tracing::debug!(
            entries = stats.entry_count,
            distinct = stats.distinct_symptoms(),
            total = stats.total_symptom_instances,
            dominant = stats.dominant_severity.as_str(),
            "Aggregated diary entries"
        );

        let statements = generate_statements(&stats);
        let recommendation = recommend(&stats);

        tracing::debug!(
            specialty = recommendation.specialty.as_str(),
            "Specialist matched"
        );

        InsightReport {
            statements,
            recommendation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::types::Specialty;
    use crate::models::SeverityLevel::{Mild, Moderate, Severe};
    use crate::models::Symptom::*;
    use crate::test_utils::{diary, sample_entries};

    #[test]
    fn test_report_shape() {
        let engine = InsightEngine::new();

        for entries in [
            sample_entries(),
            diary(&[(&[Nausea], Severe)]),
            diary(&[(&[Cough], Mild), (&[Cough], Mild), (&[Cough], Moderate)]),
        ] {
            let report = engine.analyze(&entries);
            assert_eq!(report.statements.len(), 4);
            assert!(report.statements.iter().all(|s| !s.is_empty()));
            assert!(!report.recommendation.label.is_empty());
        }
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let engine = InsightEngine::new();
        let entries = sample_entries();

        let first = serde_json::to_string(&engine.analyze(&entries)).unwrap();
        let second = serde_json::to_string(&engine.analyze(&entries)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample_diary_report() {
        let engine = InsightEngine::new();
        let entries = sample_entries();

        let stats = engine.aggregate(&entries);
        assert_eq!(stats.count_of(Fever), 1);
        assert_eq!(stats.count_of(Headache), 1);
        assert_eq!(stats.count_of(Fatigue), 1);
        assert_eq!(stats.count_of(Cough), 1);
        assert_eq!(stats.dominant_severity, Mild);

        // Cough appears once, so neither ENT nor pulmonology fires ahead of
        // the fever plus four-symptom internal medicine rule
        let report = engine.analyze(&entries);
        assert_eq!(
            report.recommendation.specialty,
            Specialty::InternalMedicine
        );
        assert!(report.statements[1].contains("a possible respiratory condition"));
        assert!(report.statements[2].starts_with("Positive outlook"));
    }

    #[test]
    fn test_three_coughs_recommend_ent() {
        let entries = diary(&[
            (&[Cough, Headache], Severe),
            (&[Cough, Nausea, Dizziness], Moderate),
            (&[Cough], Mild),
        ]);
        let report = InsightEngine::new().analyze(&entries);
        assert_eq!(report.recommendation.specialty, Specialty::Ent);
        assert_eq!(report.recommendation.query, "ENT specialist doctor");
        assert!(report.statements[1].starts_with("Cough appears in 100% of your entries"));
    }
}
