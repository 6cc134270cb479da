//! Explanation printed on review documents.

pub const REVIEW_LEAD_IN: &str = "Your application is currently under review. ";

pub const ADDRESS_CLAUSE: &str =
    "We were unable to verify the address details you provided. Please send us a recent proof of address.";

pub const BANK_CLAUSE: &str =
    "We were unable to verify the bank account details you provided. Please send us a recent bank statement.";

pub const DEFAULT_CLAUSE: &str =
    "One of our team is checking your application and will contact you if anything else is needed.";

/// Keyword rules, checked top to bottom. Matching is case-sensitive.
const REASON_RULES: &[(&str, &str)] = &[("address", ADDRESS_CLAUSE), ("bank", BANK_CLAUSE)];

/// Compose the review message for a free-text reason. First matching rule wins.
pub fn compose_review_message(reason: &str) -> String {
    let clause = REASON_RULES
        .iter()
        .find(|(keyword, _)| reason.contains(keyword))
        .map(|(_, clause)| *clause)
        .unwrap_or(DEFAULT_CLAUSE);

    format!("{REVIEW_LEAD_IN}{clause}")
}
