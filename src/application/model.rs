use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque key an application is looked up by.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ApplicationId(pub Uuid);

impl ApplicationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ApplicationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::str::FromStr for ApplicationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Lifecycle stage of an application.
///
/// Only `Pending`, `Activated` and `InReview` have documents. The remaining
/// states are valid records, and anything unrecognised is kept verbatim in
/// `Other` so it can still be reported.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum LifecycleState {
    Draft,
    Submitted,
    Pending,
    Activated,
    InReview,
    Rejected,
    Cancelled,
    Closed,
    Other(String),
}

impl LifecycleState {
    /// Literal value as stored on the record.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "Draft",
            Self::Submitted => "Submitted",
            Self::Pending => "Pending",
            Self::Activated => "Activated",
            Self::InReview => "InReview",
            Self::Rejected => "Rejected",
            Self::Cancelled => "Cancelled",
            Self::Closed => "Closed",
            Self::Other(value) => value,
        }
    }

    /// Label printed on documents.
    pub fn label(&self) -> String {
        match self {
            Self::Draft => "Draft".to_string(),
            Self::Submitted => "Submitted".to_string(),
            Self::Pending => "Pending".to_string(),
            Self::Activated => "Activated".to_string(),
            Self::InReview => "In review".to_string(),
            Self::Rejected => "Rejected".to_string(),
            Self::Cancelled => "Cancelled".to_string(),
            Self::Closed => "Closed".to_string(),
            Self::Other(value) => value.clone(),
        }
    }
}

impl From<String> for LifecycleState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Draft" => Self::Draft,
            "Submitted" => Self::Submitted,
            "Pending" => Self::Pending,
            "Activated" => Self::Activated,
            "InReview" => Self::InReview,
            "Rejected" => Self::Rejected,
            "Cancelled" => Self::Cancelled,
            "Closed" => Self::Closed,
            _ => Self::Other(value),
        }
    }
}

impl From<LifecycleState> for String {
    fn from(value: LifecycleState) -> Self {
        match value {
            LifecycleState::Other(literal) => literal,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Applicant {
    pub first_name: String,
    pub surname: String,
}

impl Applicant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.surname.trim())
            .trim()
            .to_string()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LegalEntity {
    pub name: String,
    pub registration_number: String,
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Fund {
    pub name: String,
    pub amount: Decimal,
    pub fee: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    #[serde(default)]
    pub funds: Vec<Fund>,
}

/// Why an application was put on hold.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Review {
    pub reason: String,
    #[serde(default)]
    pub opened_on: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: ApplicationId,
    pub reference: String,
    pub state: LifecycleState,
    pub applicant: Applicant,
    pub application_date: NaiveDate,
    #[serde(default)]
    pub is_legal_entity: bool,
    #[serde(default)]
    pub legal_entity: Option<LegalEntity>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub current_review: Option<Review>,
}
