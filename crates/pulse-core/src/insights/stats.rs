//! Aggregation over a diary snapshot
//!
//! Everything the statement and specialist rules look at is computed once
//! here. Symptom tallies keep first-encountered order so that ties in the
//! "top symptoms" ranking resolve the same way on every run.

use serde::Serialize;

use crate::models::{DiaryEntry, SeverityLevel, Symptom};

/// How many symptoms the pattern statement lists
pub const TOP_SYMPTOM_LIMIT: usize = 3;

/// Entry counts per severity level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub mild: usize,
    pub moderate: usize,
    pub severe: usize,
}

impl SeverityCounts {
    pub fn get(&self, level: SeverityLevel) -> usize {
        match level {
            SeverityLevel::Mild => self.mild,
            SeverityLevel::Moderate => self.moderate,
            SeverityLevel::Severe => self.severe,
        }
    }

    fn bump(&mut self, level: SeverityLevel) {
        match level {
            SeverityLevel::Mild => self.mild += 1,
            SeverityLevel::Moderate => self.moderate += 1,
            SeverityLevel::Severe => self.severe += 1,
        }
    }

    /// Highest count wins; ties go to the level earlier in mild, moderate, severe
    pub fn dominant(&self) -> SeverityLevel {
        let mut best = SeverityLevel::Mild;
        for level in SeverityLevel::ALL {
            if self.get(level) > self.get(best) {
                best = level;
            }
        }
        best
    }
}

/// Aggregated view of a list of diary entries
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SymptomStats {
    pub entry_count: usize,
    /// Occurrences per symptom, in first-encountered order
    pub symptom_count: Vec<(Symptom, usize)>,
    pub severity_count: SeverityCounts,
    pub total_symptom_instances: usize,
    /// Rounded to one decimal place
    pub average_symptoms_per_entry: f64,
    /// (oldest, newest), taken from the last and first entries as given
    pub date_range: (String, String),
    pub dominant_severity: SeverityLevel,
    /// Up to three symptoms by count, descending
    pub top_symptoms: Vec<(Symptom, usize)>,
}

impl SymptomStats {
    /// Aggregate entries supplied most-recent-first.
    ///
    /// The input order is trusted for the date range; entries are not
    /// re-sorted by their date strings.
    pub fn from_entries(entries: &[DiaryEntry]) -> Self {
        let mut symptom_count: Vec<(Symptom, usize)> = Vec::new();
        let mut severity_count = SeverityCounts::default();
        let mut total_symptom_instances = 0;

        for entry in entries {
            for symptom in &entry.symptoms {
                match symptom_count.iter_mut().find(|(s, _)| s == symptom) {
                    Some((_, count)) => *count += 1,
                    None => symptom_count.push((*symptom, 1)),
                }
            }
            total_symptom_instances += entry.symptoms.len();
            severity_count.bump(entry.severity);
        }

        let entry_count = entries.len();
        let average_symptoms_per_entry = if entry_count > 0 {
            round_one_decimal(total_symptom_instances as f64 / entry_count as f64)
        } else {
            0.0
        };

        let date_range = match (entries.last(), entries.first()) {
            (Some(oldest), Some(newest)) => (oldest.date.clone(), newest.date.clone()),
            _ => (String::new(), String::new()),
        };

        // sort_by is stable, so equal counts keep first-encountered order
        let mut top_symptoms = symptom_count.clone();
        top_symptoms.sort_by(|a, b| b.1.cmp(&a.1));
        top_symptoms.truncate(TOP_SYMPTOM_LIMIT);

        Self {
            entry_count,
            symptom_count,
            dominant_severity: severity_count.dominant(),
            severity_count,
            total_symptom_instances,
            average_symptoms_per_entry,
            date_range,
            top_symptoms,
        }
    }

    /// Occurrences of one symptom (zero when never logged)
    pub fn count_of(&self, symptom: Symptom) -> usize {
        self.symptom_count
            .iter()
            .find(|(s, _)| *s == symptom)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn has(&self, symptom: Symptom) -> bool {
        self.count_of(symptom) > 0
    }

    /// True if any entry logged at least one of `symptoms`
    pub fn has_any(&self, symptoms: &[Symptom]) -> bool {
        symptoms.iter().any(|s| self.has(*s))
    }

    pub fn distinct_symptoms(&self) -> usize {
        self.symptom_count.len()
    }

    pub fn oldest_date(&self) -> &str {
        &self.date_range.0
    }

    pub fn newest_date(&self) -> &str {
        &self.date_range.1
    }
}

/// Round half away from zero to one decimal place
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeverityLevel::{Mild, Moderate, Severe};
    use crate::models::Symptom::*;
    use crate::test_utils::{diary, sample_entries};

    #[test]
    fn test_sample_aggregation() {
        let stats = SymptomStats::from_entries(&sample_entries());

        assert_eq!(stats.entry_count, 3);
        assert_eq!(
            stats.symptom_count,
            vec![(Fever, 1), (Headache, 1), (Fatigue, 1), (Cough, 1)]
        );
        assert_eq!(stats.severity_count.mild, 2);
        assert_eq!(stats.severity_count.moderate, 1);
        assert_eq!(stats.dominant_severity, Mild);
        assert_eq!(stats.total_symptom_instances, 4);
        assert_eq!(
            stats.date_range,
            ("2024-11-12".to_string(), "2024-11-14".to_string())
        );
    }

    #[test]
    fn test_average_rounds_not_truncates() {
        let entries = diary(&[
            (&[Fever], Mild),
            (&[Cough, Fatigue], Mild),
            (&[Headache, Nausea], Mild),
        ]);
        let stats = SymptomStats::from_entries(&entries);
        assert_eq!(stats.total_symptom_instances, 5);
        assert_eq!(stats.average_symptoms_per_entry, 1.7);
    }

    #[test]
    fn test_round_one_decimal() {
        assert_eq!(round_one_decimal(5.0 / 3.0), 1.7);
        assert_eq!(round_one_decimal(4.0 / 3.0), 1.3);
        assert_eq!(round_one_decimal(2.0), 2.0);
        assert_eq!(round_one_decimal(1.96), 2.0);
    }

    #[test]
    fn test_dominant_severity_ties_prefer_earlier_level() {
        let mild_moderate = diary(&[(&[Fever], Moderate), (&[Fever], Mild)]);
        assert_eq!(
            SymptomStats::from_entries(&mild_moderate).dominant_severity,
            Mild
        );

        let moderate_severe = diary(&[(&[Fever], Severe), (&[Fever], Moderate)]);
        assert_eq!(
            SymptomStats::from_entries(&moderate_severe).dominant_severity,
            Moderate
        );

        let severe = diary(&[(&[Fever], Severe), (&[Fever], Severe), (&[Fever], Mild)]);
        assert_eq!(SymptomStats::from_entries(&severe).dominant_severity, Severe);
    }

    #[test]
    fn test_top_symptoms_ties_keep_first_encountered() {
        let entries = diary(&[
            (&[Nausea, Dizziness], Mild),
            (&[Cough, Dizziness], Mild),
            (&[Fever, Cough], Mild),
        ]);
        let stats = SymptomStats::from_entries(&entries);

        // Nausea=1, Dizziness=2, Cough=2, Fever=1
        assert_eq!(
            stats.top_symptoms,
            vec![(Dizziness, 2), (Cough, 2), (Nausea, 1)]
        );
    }

    #[test]
    fn test_count_of_missing_symptom_is_zero() {
        let stats = SymptomStats::from_entries(&diary(&[(&[Fever], Mild)]));
        assert_eq!(stats.count_of(Cough), 0);
        assert!(!stats.has_any(&[Cough, SoreThroat]));
        assert!(stats.has_any(&[Cough, Fever]));
    }
}
