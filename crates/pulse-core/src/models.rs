//! Domain models for HealthPulse

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A symptom from the fixed diary vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symptom {
    Fever,
    Cough,
    Fatigue,
    Headache,
    #[serde(rename = "Sore Throat")]
    SoreThroat,
    #[serde(rename = "Body Aches")]
    BodyAches,
    Nausea,
    Dizziness,
}

impl Symptom {
    /// Every selectable symptom, in the order the entry form offers them
    pub const ALL: [Symptom; 8] = [
        Symptom::Fever,
        Symptom::Cough,
        Symptom::Fatigue,
        Symptom::Headache,
        Symptom::SoreThroat,
        Symptom::BodyAches,
        Symptom::Nausea,
        Symptom::Dizziness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fever => "Fever",
            Self::Cough => "Cough",
            Self::Fatigue => "Fatigue",
            Self::Headache => "Headache",
            Self::SoreThroat => "Sore Throat",
            Self::BodyAches => "Body Aches",
            Self::Nausea => "Nausea",
            Self::Dizziness => "Dizziness",
        }
    }
}

impl std::str::FromStr for Symptom {
    type Err = String;

    /// Accepts the display label in any case, with spaces, dashes or underscores
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "fever" => Ok(Self::Fever),
            "cough" => Ok(Self::Cough),
            "fatigue" => Ok(Self::Fatigue),
            "headache" => Ok(Self::Headache),
            "sorethroat" => Ok(Self::SoreThroat),
            "bodyaches" | "bodyache" => Ok(Self::BodyAches),
            "nausea" => Ok(Self::Nausea),
            "dizziness" => Ok(Self::Dizziness),
            _ => Err(format!("Unknown symptom: {}", s)),
        }
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How bad an entry's symptoms were
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLevel {
    #[default]
    Mild,
    Moderate,
    Severe,
}

impl SeverityLevel {
    /// Fixed comparison order; earlier levels win ties
    pub const ALL: [SeverityLevel; 3] = [
        SeverityLevel::Mild,
        SeverityLevel::Moderate,
        SeverityLevel::Severe,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

impl std::str::FromStr for SeverityLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mild" => Ok(Self::Mild),
            "moderate" => Ok(Self::Moderate),
            "severe" => Ok(Self::Severe),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

impl std::fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored diary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub id: i64,
    /// Calendar date as entered by the user (e.g. "2024-11-14")
    pub date: String,
    /// Never empty for entries accepted by the store
    pub symptoms: Vec<Symptom>,
    pub severity: SeverityLevel,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A diary entry waiting to be stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewDiaryEntry {
    pub date: String,
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub severity: SeverityLevel,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewDiaryEntry {
    pub fn new(date: impl Into<String>, symptoms: Vec<Symptom>, severity: SeverityLevel) -> Self {
        Self {
            date: date.into(),
            symptoms,
            severity,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Check the creation invariants: a non-empty date and at least one symptom
    pub fn validate(&self) -> Result<()> {
        if self.date.trim().is_empty() {
            return Err(Error::InvalidData("Entry date is required".to_string()));
        }
        if self.symptoms.is_empty() {
            return Err(Error::InvalidData(
                "Please select at least one symptom".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate and canonicalize: trimmed date, symptoms as a set in first-seen
    /// order, blank notes dropped
    pub fn normalized(self) -> Result<Self> {
        self.validate()?;

        let mut symptoms: Vec<Symptom> = Vec::with_capacity(self.symptoms.len());
        for symptom in self.symptoms {
            if !symptoms.contains(&symptom) {
                symptoms.push(symptom);
            }
        }

        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self {
            date: self.date.trim().to_string(),
            symptoms,
            severity: self.severity,
            notes,
        })
    }
}

/// Quick stats shown above the diary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiarySummary {
    pub total_entries: i64,
    pub total_symptoms: i64,
    /// Most frequent severity, `None` when the diary is empty
    pub dominant_severity: Option<SeverityLevel>,
}

/// How often a medicine reminder repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderFrequency {
    #[default]
    Daily,
    Weekly,
    AsNeeded,
}

impl ReminderFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::AsNeeded => "as_needed",
        }
    }
}

impl std::str::FromStr for ReminderFrequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "as_needed" => Ok(Self::AsNeeded),
            _ => Err(format!(
                "Unknown frequency: {} (expected daily, weekly or as_needed)",
                s
            )),
        }
    }
}

impl std::fmt::Display for ReminderFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored medicine reminder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    pub name: String,
    /// Time of day as `HH:MM`
    pub time: String,
    pub frequency: ReminderFrequency,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

/// A medicine reminder waiting to be stored (always starts enabled)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReminder {
    pub name: String,
    pub time: String,
    #[serde(default)]
    pub frequency: ReminderFrequency,
}

impl NewReminder {
    pub fn new(
        name: impl Into<String>,
        time: impl Into<String>,
        frequency: ReminderFrequency,
    ) -> Self {
        Self {
            name: name.into(),
            time: time.into(),
            frequency,
        }
    }

    /// Require a medicine name and a 24-hour `HH:MM` time
    pub fn normalized(self) -> Result<Self> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::InvalidData("Medicine name is required".to_string()));
        }

        let time = chrono::NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .map_err(|_| {
                Error::InvalidData(format!("Invalid time '{}', expected HH:MM", self.time))
            })?
            .format("%H:%M")
            .to_string();

        Ok(Self {
            name,
            time,
            frequency: self.frequency,
        })
    }
}

/// Wards a community report can be filed for
pub const WARDS: [&str; 8] = [
    "Jayanagar",
    "Koramangala",
    "Indiranagar",
    "Whitefield",
    "Malleshwaram",
    "BTM Layout",
    "Electronic City",
    "Yelahanka",
];

/// Symptoms offered on the community report form
pub const REPORTABLE_SYMPTOMS: [Symptom; 4] = [
    Symptom::Fever,
    Symptom::Cough,
    Symptom::Fatigue,
    Symptom::BodyAches,
];

/// An anonymous community symptom report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityReport {
    pub id: i64,
    pub ward: String,
    pub symptoms: Vec<Symptom>,
    pub severity: SeverityLevel,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A community report waiting to be stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCommunityReport {
    pub ward: String,
    pub symptoms: Vec<Symptom>,
    #[serde(default)]
    pub severity: SeverityLevel,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewCommunityReport {
    pub fn new(ward: impl Into<String>, symptoms: Vec<Symptom>, severity: SeverityLevel) -> Self {
        Self {
            ward: ward.into(),
            symptoms,
            severity,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Match the ward against [`WARDS`] (any case), dedup symptoms and keep
    /// only those on the report form
    pub fn normalized(self) -> Result<Self> {
        let ward = WARDS
            .iter()
            .find(|w| w.eq_ignore_ascii_case(self.ward.trim()))
            .ok_or_else(|| {
                if self.ward.trim().is_empty() {
                    Error::InvalidData("Please select your ward".to_string())
                } else {
                    Error::InvalidData(format!("Unknown ward: {}", self.ward.trim()))
                }
            })?;

        let mut symptoms: Vec<Symptom> = Vec::with_capacity(self.symptoms.len());
        for symptom in self.symptoms {
            if !REPORTABLE_SYMPTOMS.contains(&symptom) {
                return Err(Error::InvalidData(format!(
                    "{} cannot be reported to the community map",
                    symptom
                )));
            }
            if !symptoms.contains(&symptom) {
                symptoms.push(symptom);
            }
        }
        if symptoms.is_empty() {
            return Err(Error::InvalidData(
                "Please select at least one symptom".to_string(),
            ));
        }

        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(Self {
            ward: ward.to_string(),
            symptoms,
            severity: self.severity,
            notes,
        })
    }
}
