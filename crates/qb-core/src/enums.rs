//! Closed-set enums for question metadata.
//!
//! Every enum serializes to, and is stored as, its literal display value
//! (e.g. `"GROUP D"`, `"CBT 1"`, `"General Intelligence & Reasoning"`).
//! Anything outside the set is rejected by `FromStr` and by serde.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

fn parse_closed_set<T: Copy>(
    all: &[T],
    as_str: fn(T) -> &'static str,
    kind: &str,
    s: &str,
) -> Result<T, CoreError> {
    all.iter()
        .copied()
        .find(|v| as_str(*v) == s)
        .ok_or_else(|| CoreError::Validation(format!("unknown {kind}: '{s}'")))
}

// ---------------------------------------------------------------------------
// ExamType
// ---------------------------------------------------------------------------

/// Category of examination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ExamType {
    #[serde(rename = "NTPC")]
    Ntpc,
    #[serde(rename = "GROUP D")]
    GroupD,
    #[serde(rename = "JE")]
    Je,
    #[serde(rename = "SSC")]
    Ssc,
    #[serde(rename = "CGL")]
    Cgl,
}

impl ExamType {
    pub const ALL: [Self; 5] = [Self::Ntpc, Self::GroupD, Self::Je, Self::Ssc, Self::Cgl];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ntpc => "NTPC",
            Self::GroupD => "GROUP D",
            Self::Je => "JE",
            Self::Ssc => "SSC",
            Self::Cgl => "CGL",
        }
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed_set(&Self::ALL, Self::as_str, "exam type", s)
    }
}

// ---------------------------------------------------------------------------
// ExamStage
// ---------------------------------------------------------------------------

/// Phase within an exam process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ExamStage {
    #[serde(rename = "CBT 1")]
    Cbt1,
    #[serde(rename = "CBT 2")]
    Cbt2,
    #[serde(rename = "CBT 3")]
    Cbt3,
    #[serde(rename = "PET")]
    Pet,
    #[serde(rename = "DV")]
    Dv,
    #[serde(rename = "Tier 1")]
    Tier1,
    #[serde(rename = "Tier 2")]
    Tier2,
    #[serde(rename = "Tier 3")]
    Tier3,
    #[serde(rename = "Tier 4")]
    Tier4,
}

impl ExamStage {
    pub const ALL: [Self; 9] = [
        Self::Cbt1,
        Self::Cbt2,
        Self::Cbt3,
        Self::Pet,
        Self::Dv,
        Self::Tier1,
        Self::Tier2,
        Self::Tier3,
        Self::Tier4,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cbt1 => "CBT 1",
            Self::Cbt2 => "CBT 2",
            Self::Cbt3 => "CBT 3",
            Self::Pet => "PET",
            Self::Dv => "DV",
            Self::Tier1 => "Tier 1",
            Self::Tier2 => "Tier 2",
            Self::Tier3 => "Tier 3",
            Self::Tier4 => "Tier 4",
        }
    }
}

impl fmt::Display for ExamStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExamStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed_set(&Self::ALL, Self::as_str, "exam stage", s)
    }
}

// ---------------------------------------------------------------------------
// Subject
// ---------------------------------------------------------------------------

/// Knowledge domain of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Subject {
    #[serde(rename = "General Awareness")]
    GeneralAwareness,
    #[serde(rename = "Arithmetic")]
    Arithmetic,
    #[serde(rename = "General Intelligence & Reasoning")]
    GeneralIntelligence,
    #[serde(rename = "Basic Science & Engineering")]
    BasicScience,
    #[serde(rename = "Technical Abilities")]
    TechnicalAbilities,
    #[serde(rename = "Reasoning")]
    Reasoning,
    #[serde(rename = "Logical Reasoning")]
    LogicalReasoning,
    #[serde(rename = "General Science")]
    GeneralScience,
    #[serde(rename = "Mathematics")]
    Mathematics,
    #[serde(rename = "Science")]
    Science,
    #[serde(rename = "Current Affairs")]
    CurrentAffairs,
    #[serde(rename = "History")]
    History,
    #[serde(rename = "Geography")]
    Geography,
    #[serde(rename = "Polity")]
    Polity,
    #[serde(rename = "Biology")]
    Biology,
    #[serde(rename = "Chemistry")]
    Chemistry,
    #[serde(rename = "Indian Culture")]
    IndianCulture,
    #[serde(rename = "Environment")]
    Environment,
    #[serde(rename = "Computer")]
    Computer,
    #[serde(rename = "Railway Awareness")]
    RailwayAwareness,
    #[serde(rename = "International Affairs")]
    InternationalAffairs,
    #[serde(rename = "Banking")]
    Banking,
    #[serde(rename = "Science and Tech")]
    ScienceAndTech,
    #[serde(rename = "Physics")]
    Physics,
    #[serde(rename = "English Grammar")]
    EnglishGrammar,
}

impl Subject {
    pub const ALL: [Self; 25] = [
        Self::GeneralAwareness,
        Self::Arithmetic,
        Self::GeneralIntelligence,
        Self::BasicScience,
        Self::TechnicalAbilities,
        Self::Reasoning,
        Self::LogicalReasoning,
        Self::GeneralScience,
        Self::Mathematics,
        Self::Science,
        Self::CurrentAffairs,
        Self::History,
        Self::Geography,
        Self::Polity,
        Self::Biology,
        Self::Chemistry,
        Self::IndianCulture,
        Self::Environment,
        Self::Computer,
        Self::RailwayAwareness,
        Self::InternationalAffairs,
        Self::Banking,
        Self::ScienceAndTech,
        Self::Physics,
        Self::EnglishGrammar,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GeneralAwareness => "General Awareness",
            Self::Arithmetic => "Arithmetic",
            Self::GeneralIntelligence => "General Intelligence & Reasoning",
            Self::BasicScience => "Basic Science & Engineering",
            Self::TechnicalAbilities => "Technical Abilities",
            Self::Reasoning => "Reasoning",
            Self::LogicalReasoning => "Logical Reasoning",
            Self::GeneralScience => "General Science",
            Self::Mathematics => "Mathematics",
            Self::Science => "Science",
            Self::CurrentAffairs => "Current Affairs",
            Self::History => "History",
            Self::Geography => "Geography",
            Self::Polity => "Polity",
            Self::Biology => "Biology",
            Self::Chemistry => "Chemistry",
            Self::IndianCulture => "Indian Culture",
            Self::Environment => "Environment",
            Self::Computer => "Computer",
            Self::RailwayAwareness => "Railway Awareness",
            Self::InternationalAffairs => "International Affairs",
            Self::Banking => "Banking",
            Self::ScienceAndTech => "Science and Tech",
            Self::Physics => "Physics",
            Self::EnglishGrammar => "English Grammar",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed_set(&Self::ALL, Self::as_str, "subject", s)
    }
}

// ---------------------------------------------------------------------------
// DifficultyLevel
// ---------------------------------------------------------------------------

/// How hard a question is. Defaults to `Moderate`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum DifficultyLevel {
    Easy,
    #[default]
    Moderate,
    Hard,
}

impl DifficultyLevel {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Moderate, Self::Hard];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Moderate => "Moderate",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed_set(&Self::ALL, Self::as_str, "difficulty level", s)
    }
}

// ---------------------------------------------------------------------------
// AnswerOption
// ---------------------------------------------------------------------------

/// One of the four answer slots of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AnswerOption {
    A,
    B,
    C,
    D,
}

impl AnswerOption {
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Zero-based position of this option among A..D.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::A => 0,
            Self::B => 1,
            Self::C => 2,
            Self::D => 3,
        }
    }
}

impl fmt::Display for AnswerOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed_set(&Self::ALL, Self::as_str, "answer option", s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
