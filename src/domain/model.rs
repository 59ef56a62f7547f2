use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One organization to look up, as submitted in a batch request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub website: String,
    #[serde(rename = "linkedinProfiles", default)]
    pub profile_refs: Vec<String>,
}

/// Local-part conventions, in canonical scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmailPattern {
    #[serde(rename = "first.last")]
    FirstDotLast,
    #[serde(rename = "firstlast")]
    FirstLast,
    #[serde(rename = "firstinitial.last")]
    InitialDotLast,
    #[serde(rename = "first.lastinitial")]
    FirstDotInitial,
    #[serde(rename = "first")]
    First,
}

impl EmailPattern {
    pub const ALL: [EmailPattern; 5] = [
        EmailPattern::FirstDotLast,
        EmailPattern::FirstLast,
        EmailPattern::InitialDotLast,
        EmailPattern::FirstDotInitial,
        EmailPattern::First,
    ];

    /// Position of this pattern in [`EmailPattern::ALL`].
    pub fn index(&self) -> usize {
        match self {
            EmailPattern::FirstDotLast => 0,
            EmailPattern::FirstLast => 1,
            EmailPattern::InitialDotLast => 2,
            EmailPattern::FirstDotInitial => 3,
            EmailPattern::First => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EmailPattern::FirstDotLast => "first.last",
            EmailPattern::FirstLast => "firstlast",
            EmailPattern::InitialDotLast => "firstinitial.last",
            EmailPattern::FirstDotInitial => "first.lastinitial",
            EmailPattern::First => "first",
        }
    }

    /// Score contributed by each address observed in this convention.
    pub fn weight(&self) -> u32 {
        match self {
            EmailPattern::FirstDotLast => 5,
            EmailPattern::FirstLast => 4,
            EmailPattern::InitialDotLast | EmailPattern::FirstDotInitial => 3,
            EmailPattern::First => 2,
        }
    }

    pub fn requires_last_name(&self) -> bool {
        !matches!(self, EmailPattern::First)
    }
}

impl fmt::Display for EmailPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn downgrade(self) -> Self {
        match self {
            Confidence::High => Confidence::Medium,
            Confidence::Medium | Confidence::Low => Confidence::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternDiscoveryResult {
    pub pattern: Option<EmailPattern>,
    pub confidence: Confidence,
    pub source: String,
}

/// Role labels recognized in profile slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Founder,
    Ceo,
    Executive,
    OperationsHead,
    FinanceHead,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Founder => "Founder",
            Role::Ceo => "CEO",
            Role::Executive => "Executive",
            Role::OperationsHead => "Operations Head",
            Role::FinanceHead => "Finance Head",
        }
    }

    pub fn priority(&self) -> u8 {
        match self {
            Role::Founder => 5,
            Role::Ceo => 4,
            Role::Executive => 3,
            Role::OperationsHead | Role::FinanceHead => 2,
        }
    }
}

pub const FALLBACK_ROLE: &str = "Decision Maker";

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub first_name: String,
    pub last_name: Option<String>,
    pub full_name: String,
    pub role: String,
    pub company: String,
    pub source: String,
}

/// Externally visible output row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResult {
    pub name: String,
    pub role: String,
    pub company: String,
    pub email: String,
    pub confidence: Confidence,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<ContactResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    ClientError,
    ServerError,
}

impl ResponseStatus {
    pub fn code(&self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::ClientError => 400,
            ResponseStatus::ServerError => 500,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub contacts: Vec<ContactResult>,
    pub csv_output: String,
    pub entries_processed: usize,
}

/// JSON document written by the load phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsDocument {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<ContactResult>,
}
