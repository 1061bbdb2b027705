//! Keyword scoring and ordering

use reachout_domain::{Contact, RankedContact};

/// Points awarded when a keyword appears in the position field.
///
/// A keyword in a person's stated role is a stronger relevance signal than
/// one in their employer's name, hence the 2:1 ratio against
/// [`COMPANY_WEIGHT`]. Fixed constants, not configurable.
pub const POSITION_WEIGHT: u32 = 10;

/// Points awarded when a keyword appears in the company field.
pub const COMPANY_WEIGHT: u32 = 5;

/// Fixed cap on the ranked result set.
pub const MAX_RESULTS: usize = 12;

/// Score contacts against keywords, returning the top matches.
///
/// Keywords are lower-cased and trimmed; blank keywords are filtered out
/// before scoring, since an empty substring would trivially match every
/// contact. Matching is substring containment on the lower-cased position
/// and company fields. For each keyword in input order the position is
/// checked before the company, the two hits are additive, and each field
/// counts once per keyword regardless of how often the keyword occurs in
/// it.
///
/// Zero-score contacts are excluded entirely. The survivors are sorted
/// descending by score, ties broken ascending by the case-insensitive
/// `"<first> <last>"` name, and truncated to [`MAX_RESULTS`] entries.
pub fn rank(contacts: &[Contact], keywords: &[String]) -> Vec<RankedContact> {
    let keywords: Vec<String> = keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    let mut ranked: Vec<RankedContact> = contacts
        .iter()
        .filter_map(|contact| score_contact(contact, &keywords))
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| name_key(&a.contact).cmp(&name_key(&b.contact)))
    });
    ranked.truncate(MAX_RESULTS);

    ranked
}

/// Fold one contact over the keyword list: field-match hits to a total
/// score and an ordered reason list. `None` when nothing matched.
fn score_contact(contact: &Contact, keywords: &[String]) -> Option<RankedContact> {
    let position = contact.position.to_lowercase();
    let company = contact.company.to_lowercase();

    let mut score = 0;
    let mut match_reasons = Vec::new();

    for keyword in keywords {
        if position.contains(keyword.as_str()) {
            score += POSITION_WEIGHT;
            match_reasons.push(format!("Position: {keyword}"));
        }
        if company.contains(keyword.as_str()) {
            score += COMPANY_WEIGHT;
            match_reasons.push(format!("Company: {keyword}"));
        }
    }

    (score > 0).then(|| RankedContact {
        contact: contact.clone(),
        score,
        match_reasons,
    })
}

/// Case-insensitive tie-break key.
fn name_key(contact: &Contact) -> String {
    contact.full_name().to_lowercase()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_contact() -> impl Strategy<Value = Contact> {
        (
            "[A-Za-z]{1,8}",
            "[A-Za-z]{1,8}",
            "[a-z ]{0,12}",
            "[a-z ]{0,12}",
        )
            .prop_map(|(first, last, company, position)| Contact {
                first_name: first,
                last_name: last,
                company,
                position,
                profile_url: None,
                email_address: None,
                connected_on: String::new(),
            })
    }

    proptest! {
        /// Property: the result never exceeds the cap and every entry has
        /// a positive score
        #[test]
        fn test_bounded_and_positive(
            contacts in prop::collection::vec(arb_contact(), 0..40),
            keywords in prop::collection::vec("[a-z]{0,4}", 0..6),
        ) {
            let ranked = rank(&contacts, &keywords);
            prop_assert!(ranked.len() <= MAX_RESULTS);
            prop_assert!(ranked.iter().all(|r| r.score > 0));
        }

        /// Property: scores are non-increasing and ties are ordered by
        /// case-insensitive full name
        #[test]
        fn test_reference_ordering(
            contacts in prop::collection::vec(arb_contact(), 0..40),
            keywords in prop::collection::vec("[a-z]{1,4}", 1..6),
        ) {
            let ranked = rank(&contacts, &keywords);
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert!(
                        pair[0].contact.full_name().to_lowercase()
                            <= pair[1].contact.full_name().to_lowercase()
                    );
                }
            }
        }

        /// Property: ranking is deterministic
        #[test]
        fn test_deterministic(
            contacts in prop::collection::vec(arb_contact(), 0..20),
            keywords in prop::collection::vec("[a-z]{0,4}", 0..6),
        ) {
            prop_assert_eq!(rank(&contacts, &keywords), rank(&contacts, &keywords));
        }

        /// Property: an all-blank keyword list always yields an empty
        /// result, regardless of contact set size
        #[test]
        fn test_blank_keywords_never_match(
            contacts in prop::collection::vec(arb_contact(), 0..40),
            blanks in prop::collection::vec(" {0,3}", 0..6),
        ) {
            prop_assert!(rank(&contacts, &blanks).is_empty());
        }
    }
}
