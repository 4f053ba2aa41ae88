//! Statement generation
//!
//! A report always has four statements: overview, pattern, severity and
//! advice. Each slot is a small ordered rule table of (predicate, builder)
//! rows evaluated top to bottom; the first row whose predicate holds writes
//! the statement. The last row of every slot always applies.

use crate::models::{SeverityLevel, Symptom};

use super::stats::SymptomStats;

type Predicate = fn(&SymptomStats) -> bool;
type Builder = fn(&SymptomStats) -> String;

/// One row of a slot's rule table
pub struct StatementRule {
    pub name: &'static str,
    pub applies: Predicate,
    pub build: Builder,
}

/// One of the four statement positions in a report
pub struct StatementSlot {
    pub name: &'static str,
    pub rules: &'static [StatementRule],
}

impl StatementSlot {
    /// Name of the rule that fires for `stats`
    pub fn matching_rule(&self, stats: &SymptomStats) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(stats))
            .map(|rule| rule.name)
    }

    pub fn render(&self, stats: &SymptomStats) -> String {
        self.rules
            .iter()
            .find(|rule| (rule.applies)(stats))
            .map(|rule| (rule.build)(stats))
            .unwrap_or_default()
    }
}

/// Share of entries the top symptom must exceed to count as persistent
pub const PERSISTENT_SHARE: f64 = 0.6;

/// Entry count from which a check-up is advised
pub const CHECKUP_ENTRY_THRESHOLD: usize = 7;

/// Average symptoms per entry from which rest is advised
pub const BUSY_AVERAGE_THRESHOLD: f64 = 2.0;

/// Hypotheses for the pattern statement, tested in order
const HYPOTHESES: &[(&[Symptom], &str)] = &[
    (
        &[Symptom::Cough, Symptom::SoreThroat, Symptom::Fever],
        "a possible respiratory condition",
    ),
    (
        &[Symptom::Headache, Symptom::Dizziness, Symptom::Fatigue],
        "potential stress or sleep-related issues",
    ),
];

const FALLBACK_HYPOTHESIS: &str = "varied health concerns";

pub const STATEMENT_SLOTS: [StatementSlot; 4] = [
    StatementSlot {
        name: "overview",
        rules: &[StatementRule {
            name: "overview",
            applies: always,
            build: overview,
        }],
    },
    StatementSlot {
        name: "pattern",
        rules: &[
            StatementRule {
                name: "persistent_symptom",
                applies: has_persistent_symptom,
                build: persistent_symptom,
            },
            StatementRule {
                name: "frequent_symptoms",
                applies: always,
                build: frequent_symptoms,
            },
        ],
    },
    StatementSlot {
        name: "severity",
        rules: &[
            StatementRule {
                name: "mostly_severe",
                applies: mostly_severe,
                build: severe_warning,
            },
            StatementRule {
                name: "mostly_moderate",
                applies: mostly_moderate,
                build: moderate_caution,
            },
            StatementRule {
                name: "mostly_mild",
                applies: always,
                build: mild_reassurance,
            },
        ],
    },
    StatementSlot {
        name: "advice",
        rules: &[
            StatementRule {
                name: "long_tracking",
                applies: long_tracking,
                build: checkup_advice,
            },
            StatementRule {
                name: "many_symptoms",
                applies: many_symptoms_per_entry,
                build: rest_advice,
            },
            StatementRule {
                name: "keep_logging",
                applies: always,
                build: keep_logging,
            },
        ],
    },
];

/// Render all four statements in order
pub fn generate_statements(stats: &SymptomStats) -> Vec<String> {
    STATEMENT_SLOTS
        .iter()
        .map(|slot| slot.render(stats))
        .collect()
}

/// Pick the pattern hypothesis from every observed symptom
pub fn hypothesis(stats: &SymptomStats) -> &'static str {
    HYPOTHESES
        .iter()
        .find(|(group, _)| stats.has_any(group))
        .map(|(_, text)| *text)
        .unwrap_or(FALLBACK_HYPOTHESIS)
}

fn always(_: &SymptomStats) -> bool {
    true
}

fn overview(stats: &SymptomStats) -> String {
    format!(
        "Based on {} entries from {} to {}, I've identified {} distinct symptom patterns in your health data.",
        stats.entry_count,
        stats.oldest_date(),
        stats.newest_date(),
        stats.distinct_symptoms()
    )
}

fn has_persistent_symptom(stats: &SymptomStats) -> bool {
    stats
        .top_symptoms
        .first()
        .map(|(_, count)| *count as f64 > stats.entry_count as f64 * PERSISTENT_SHARE)
        .unwrap_or(false)
}

fn persistent_symptom(stats: &SymptomStats) -> String {
    let Some((symptom, count)) = stats.top_symptoms.first() else {
        return frequent_symptoms(stats);
    };
    let percent = (*count as f64 / stats.entry_count as f64 * 100.0).round();
    format!(
        "{} appears in {:.0}% of your entries, suggesting this is a persistent concern that may benefit from medical attention.",
        symptom, percent
    )
}

fn frequent_symptoms(stats: &SymptomStats) -> String {
    let listed = stats
        .top_symptoms
        .iter()
        .map(|(symptom, count)| format!("{} ({}x)", symptom, count))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Your most frequent symptoms are {}. This pattern suggests {}.",
        listed,
        hypothesis(stats)
    )
}

fn mostly_severe(stats: &SymptomStats) -> bool {
    stats.dominant_severity == SeverityLevel::Severe
}

fn mostly_moderate(stats: &SymptomStats) -> bool {
    stats.dominant_severity == SeverityLevel::Moderate
}

fn severe_warning(stats: &SymptomStats) -> String {
    format!(
        "Concerning: {} entries marked as severe. I strongly recommend consulting a healthcare provider soon, as persistent severe symptoms require professional evaluation.",
        stats.severity_count.severe
    )
}

fn moderate_caution(stats: &SymptomStats) -> String {
    format!(
        "Your symptoms are predominantly moderate ({} entries). While manageable, consider tracking any worsening trends and consult a doctor if symptoms persist beyond 7-10 days.",
        stats.severity_count.moderate
    )
}

fn mild_reassurance(stats: &SymptomStats) -> String {
    format!(
        "Positive outlook: Most entries show mild severity ({} entries). Continue monitoring, and maintain healthy habits like adequate rest, hydration, and nutrition.",
        stats.severity_count.mild
    )
}

fn long_tracking(stats: &SymptomStats) -> bool {
    stats.entry_count >= CHECKUP_ENTRY_THRESHOLD
}

fn many_symptoms_per_entry(stats: &SymptomStats) -> bool {
    stats.average_symptoms_per_entry >= BUSY_AVERAGE_THRESHOLD
}

fn checkup_advice(stats: &SymptomStats) -> String {
    format!(
        "You've been tracking symptoms for {}+ days. For persistent symptoms lasting over a week, schedule a check-up to rule out underlying conditions and discuss treatment options.",
        stats.entry_count
    )
}

fn rest_advice(stats: &SymptomStats) -> String {
    format!(
        "Averaging {:.1} symptoms per entry indicates you're managing multiple issues simultaneously. Focus on rest, stress management, and consider keeping a food/activity diary to identify triggers.",
        stats.average_symptoms_per_entry
    )
}

fn keep_logging(_: &SymptomStats) -> String {
    "Your health tracking shows good self-awareness. Continue logging symptoms, note any triggers or relief factors, and don't hesitate to seek medical advice if concerns arise.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SeverityLevel::{Mild, Moderate, Severe};
    use crate::models::Symptom::*;
    use crate::test_utils::{diary, sample_entries};

    fn stats_for(specs: &[(&[Symptom], SeverityLevel)]) -> SymptomStats {
        SymptomStats::from_entries(&diary(specs))
    }

    #[test]
    fn test_always_four_statements() {
        let stats = SymptomStats::from_entries(&sample_entries());
        assert_eq!(generate_statements(&stats).len(), 4);

        let single = stats_for(&[(&[Nausea], Severe)]);
        assert_eq!(generate_statements(&single).len(), 4);
    }

    #[test]
    fn test_overview_statement() {
        let stats = SymptomStats::from_entries(&sample_entries());
        let statements = generate_statements(&stats);
        assert_eq!(
            statements[0],
            "Based on 3 entries from 2024-11-12 to 2024-11-14, I've identified 4 distinct symptom patterns in your health data."
        );
    }

    #[test]
    fn test_persistent_symptom_over_sixty_percent() {
        let stats = stats_for(&[
            (&[Cough], Mild),
            (&[Cough, Fever], Mild),
            (&[Headache], Mild),
        ]);
        // 2 of 3 entries = 67% > 60%
        assert_eq!(
            STATEMENT_SLOTS[1].matching_rule(&stats),
            Some("persistent_symptom")
        );
        assert_eq!(
            STATEMENT_SLOTS[1].render(&stats),
            "Cough appears in 67% of your entries, suggesting this is a persistent concern that may benefit from medical attention."
        );
    }

    #[test]
    fn test_exactly_sixty_percent_is_not_persistent() {
        let stats = stats_for(&[
            (&[Fatigue], Mild),
            (&[Fatigue], Mild),
            (&[Fatigue], Mild),
            (&[Nausea], Mild),
            (&[Dizziness], Mild),
        ]);
        assert_eq!(
            STATEMENT_SLOTS[1].matching_rule(&stats),
            Some("frequent_symptoms")
        );
    }

    #[test]
    fn test_headache_only_suggests_stress_not_respiratory() {
        let stats = stats_for(&[(&[Headache], Mild), (&[Nausea], Mild)]);
        assert_eq!(hypothesis(&stats), "potential stress or sleep-related issues");

        let text = STATEMENT_SLOTS[1].render(&stats);
        assert!(text.contains("stress or sleep-related issues"));
        assert!(!text.contains("respiratory"));
    }

    #[test]
    fn test_respiratory_hypothesis_wins_over_stress() {
        let stats = stats_for(&[(&[Headache, Fever], Mild), (&[Dizziness], Mild)]);
        assert_eq!(hypothesis(&stats), "a possible respiratory condition");
    }

    #[test]
    fn test_varied_hypothesis_fallback() {
        let stats = stats_for(&[(&[Nausea], Mild), (&[BodyAches], Mild)]);
        assert_eq!(hypothesis(&stats), "varied health concerns");
        assert_eq!(
            STATEMENT_SLOTS[1].render(&stats),
            "Your most frequent symptoms are Nausea (1x), Body Aches (1x). This pattern suggests varied health concerns."
        );
    }

    #[test]
    fn test_severity_branches() {
        let severe = stats_for(&[(&[Fever], Severe), (&[Fever], Severe), (&[Fever], Mild)]);
        assert!(STATEMENT_SLOTS[2].render(&severe).starts_with("Concerning: 2 entries"));

        let moderate = stats_for(&[(&[Fever], Moderate)]);
        assert!(STATEMENT_SLOTS[2]
            .render(&moderate)
            .contains("predominantly moderate (1 entries)"));

        let mild = SymptomStats::from_entries(&sample_entries());
        assert!(STATEMENT_SLOTS[2]
            .render(&mild)
            .starts_with("Positive outlook: Most entries show mild severity (2 entries)"));
    }

    #[test]
    fn test_seven_entries_prefer_checkup_over_average() {
        let specs: Vec<(&[Symptom], SeverityLevel)> = vec![(&[Fever][..], Mild); 7];
        let stats = stats_for(&specs);
        assert_eq!(stats.average_symptoms_per_entry, 1.0);
        assert_eq!(STATEMENT_SLOTS[3].matching_rule(&stats), Some("long_tracking"));
        assert!(STATEMENT_SLOTS[3].render(&stats).contains("for 7+ days"));

        let busy: Vec<(&[Symptom], SeverityLevel)> =
            vec![(&[Fever, Cough, Headache][..], Mild); 7];
        let stats = stats_for(&busy);
        assert_eq!(STATEMENT_SLOTS[3].matching_rule(&stats), Some("long_tracking"));
    }

    #[test]
    fn test_average_advice_uses_rounded_value() {
        let stats = stats_for(&[(&[Fever, Cough], Mild), (&[Headache, Nausea], Mild)]);
        assert_eq!(STATEMENT_SLOTS[3].matching_rule(&stats), Some("many_symptoms"));
        assert!(STATEMENT_SLOTS[3]
            .render(&stats)
            .starts_with("Averaging 2.0 symptoms per entry"));

        // 1.96 rounds up to 2.0 and crosses the threshold
        let mut specs: Vec<(&[Symptom], SeverityLevel)> = Vec::new();
        for _ in 0..24 {
            specs.push((&[Fever, Cough], Mild));
        }
        specs.push((&[Fever], Mild));
        let rounded = stats_for(&specs);
        assert_eq!(rounded.average_symptoms_per_entry, 2.0);
    }

    #[test]
    fn test_keep_logging_fallback() {
        let stats = SymptomStats::from_entries(&sample_entries());
        assert_eq!(STATEMENT_SLOTS[3].matching_rule(&stats), Some("keep_logging"));
    }
}
