//! Ranked contact - a contact annotated with a relevance score

use crate::Contact;
use serde::{Deserialize, Serialize};

/// A [`Contact`] extended with the relevance score and the explanation of
/// which keyword matched which field.
///
/// Ranked contacts are recomputed fresh on every ranking call and never
/// mutated in place. The ranker only ever returns entries with a positive
/// score; zero-score contacts are excluded, never surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedContact {
    /// The underlying contact record.
    pub contact: Contact,

    /// Total relevance score. Always greater than zero in ranker output.
    pub score: u32,

    /// Ordered match explanations, one per keyword/field hit, e.g.
    /// `"Position: product manager"`.
    pub match_reasons: Vec<String>,
}

impl RankedContact {
    /// The match explanations joined for display, comma-and-space
    /// separated in evaluation order.
    pub fn match_reason(&self) -> String {
        self.match_reasons.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_reason_joins_in_order() {
        let ranked = RankedContact {
            contact: Contact {
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                company: "Acme Co".to_string(),
                position: "Senior Product Manager".to_string(),
                profile_url: None,
                email_address: None,
                connected_on: String::new(),
            },
            score: 15,
            match_reasons: vec![
                "Position: product manager".to_string(),
                "Company: acme".to_string(),
            ],
        };

        assert_eq!(
            ranked.match_reason(),
            "Position: product manager, Company: acme"
        );
    }

    #[test]
    fn test_match_reason_single_entry() {
        let ranked = RankedContact {
            contact: Contact {
                first_name: "Bob".to_string(),
                last_name: "Zed".to_string(),
                company: String::new(),
                position: "Engineer".to_string(),
                profile_url: None,
                email_address: None,
                connected_on: String::new(),
            },
            score: 10,
            match_reasons: vec!["Position: engineer".to_string()],
        };

        assert_eq!(ranked.match_reason(), "Position: engineer");
    }
}
