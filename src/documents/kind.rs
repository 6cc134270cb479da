use serde::Serialize;

use crate::application::LifecycleState;

/// Document produced for a lifecycle state.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Pending,
    Activated,
    InReview,
}

impl DocumentKind {
    /// Map a lifecycle state to its document, `None` when the state has no document.
    pub fn for_state(state: &LifecycleState) -> Option<Self> {
        match state {
            LifecycleState::Pending => Some(Self::Pending),
            LifecycleState::Activated => Some(Self::Activated),
            LifecycleState::InReview => Some(Self::InReview),
            _ => None,
        }
    }

    /// Key used to look up the template.
    pub fn template_name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Activated => "Activated",
            Self::InReview => "InReview",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Activated => "activated",
            Self::InReview => "in-review",
        }
    }
}
