//! Prompt construction for keyword extraction and message drafting

use reachout_domain::Contact;

/// Build the keyword-extraction prompt for a professional goal.
///
/// Asks for a strict JSON array of short keywords that would plausibly
/// appear in an export's Position or Company column. The parser still
/// tolerates fenced or chatty responses.
pub(crate) fn keyword_prompt(goal: &str, max_keywords: usize) -> String {
    format!(
        "You are a career coach. Given a user's professional goal, return a \
         strict JSON list of {max_keywords} keywords (titles, industries, companies) \
         that would appear in a contact export's 'Position' or 'Company' column \
         for useful contacts. Do not include markdown formatting. Return only a \
         valid JSON array of strings, like: [\"keyword1\", \"keyword2\", ...]\n\n\
         User's professional goal: {goal}"
    )
}

/// Build the message-drafting prompt for one contact and the original goal.
///
/// Missing position or company fall back to generic phrasing rather than
/// leaking empty fields into the prompt.
pub(crate) fn draft_prompt(contact: &Contact, goal: &str, max_chars: usize) -> String {
    let position = if contact.position.is_empty() {
        "their role"
    } else {
        &contact.position
    };
    let company = if contact.company.is_empty() {
        "their company"
    } else {
        &contact.company
    };

    format!(
        "Draft a casual networking message to {name} at {company} ({position}). \
         Mention I am working on {goal} and would love their perspective. Keep it \
         under {max_chars} characters. No hashtags. Make it friendly, professional, \
         and concise.\n\n\
         Use line breaks to format the message properly: one after the greeting \
         and one between paragraphs.",
        name = contact.full_name(),
    )
}
