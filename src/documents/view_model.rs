//! Template-ready data, one shape per document kind.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::kind::DocumentKind;
use crate::application::{Fund, LegalEntity, Review};

/// Fields printed on every document.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CommonFields {
    pub reference: String,
    pub state_label: String,
    pub applicant_name: String,
    pub application_date: NaiveDate,
    pub application_date_label: String,
    pub support_email: String,
    pub signature: String,
}

/// Legal-entity and fund details shared by Activated and InReview.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PortfolioFields {
    /// `None` means the applicant is not a legal entity.
    pub legal_entity: Option<LegalEntity>,
    pub funds: Vec<Fund>,
    pub net_total: Decimal,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PendingViewModel {
    #[serde(flatten)]
    pub common: CommonFields,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ActivatedViewModel {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(flatten)]
    pub portfolio: PortfolioFields,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct InReviewViewModel {
    #[serde(flatten)]
    pub common: CommonFields,
    #[serde(flatten)]
    pub portfolio: PortfolioFields,
    pub review_message: String,
    pub review: Review,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DocumentViewModel {
    Pending(PendingViewModel),
    Activated(ActivatedViewModel),
    InReview(InReviewViewModel),
}

impl DocumentViewModel {
    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::Pending(_) => DocumentKind::Pending,
            Self::Activated(_) => DocumentKind::Activated,
            Self::InReview(_) => DocumentKind::InReview,
        }
    }

    pub fn common(&self) -> &CommonFields {
        match self {
            Self::Pending(model) => &model.common,
            Self::Activated(model) => &model.common,
            Self::InReview(model) => &model.common,
        }
    }

    pub fn portfolio(&self) -> Option<&PortfolioFields> {
        match self {
            Self::Pending(_) => None,
            Self::Activated(model) => Some(&model.portfolio),
            Self::InReview(model) => Some(&model.portfolio),
        }
    }
}
