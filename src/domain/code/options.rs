//! Audience parameters that shape the explanation prompts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Questions offered to users as a starting point for semantic search
pub const EXAMPLE_QUESTIONS: [&str; 6] = [
    "What does this function do?",
    "How can I optimize this code?",
    "What are the potential bugs in this code?",
    "How does this algorithm work?",
    "What design patterns are used here?",
    "How can I make this code more readable?",
];

/// Experience level of the reader the explanation targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillLevel {
    #[default]
    #[serde(alias = "beginner")]
    Beginner,
    #[serde(alias = "intermediate")]
    Intermediate,
    #[serde(alias = "expert")]
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

/// Role of the reader the explanation targets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[default]
    #[serde(alias = "student")]
    Student,
    #[serde(rename = "Frontend Developer", alias = "frontend_developer")]
    FrontendDeveloper,
    #[serde(rename = "Backend Developer", alias = "backend_developer")]
    BackendDeveloper,
    #[serde(rename = "Data Scientist", alias = "data_scientist")]
    DataScientist,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        Self::Student,
        Self::FrontendDeveloper,
        Self::BackendDeveloper,
        Self::DataScientist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::FrontendDeveloper => "Frontend Developer",
            Self::BackendDeveloper => "Backend Developer",
            Self::DataScientist => "Data Scientist",
        }
    }
}

/// Natural language the model should answer in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplanationLanguage {
    #[default]
    #[serde(alias = "english")]
    English,
    #[serde(alias = "spanish")]
    Spanish,
    #[serde(alias = "chinese")]
    Chinese,
    #[serde(alias = "urdu")]
    Urdu,
}

impl ExplanationLanguage {
    pub const ALL: [ExplanationLanguage; 4] =
        [Self::English, Self::Spanish, Self::Chinese, Self::Urdu];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::Chinese => "Chinese",
            Self::Urdu => "Urdu",
        }
    }

    /// English is the models' default and needs no extra instruction
    pub fn is_default(&self) -> bool {
        *self == Self::English
    }
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn parse_option<T: Copy>(
    kind: &str,
    value: &str,
    all: &[T],
    as_str: fn(&T) -> &'static str,
) -> Result<T, DomainError> {
    let wanted = normalize(value);
    all.iter()
        .copied()
        .find(|item| normalize(as_str(item)) == wanted)
        .ok_or_else(|| DomainError::validation(format!("Unsupported {}: {}", kind, value)))
}

impl FromStr for SkillLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("skill level", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("role", s, &Self::ALL, Self::as_str)
    }
}

impl FromStr for ExplanationLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_option("explanation language", s, &Self::ALL, Self::as_str)
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ExplanationLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audience parameters shared by the explanation and semantic search flows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationOptions {
    #[serde(default)]
    pub skill_level: SkillLevel,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub explanation_language: ExplanationLanguage,
}

impl ExplanationOptions {
    pub fn new(
        skill_level: SkillLevel,
        role: UserRole,
        explanation_language: ExplanationLanguage,
    ) -> Self {
        Self {
            skill_level,
            role,
            explanation_language,
        }
    }
}
