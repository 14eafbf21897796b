//! Canned reply table for the simulated assistant.
//!
//! Entries are raw strings exactly as a real backend would return them:
//! markdown, a full-document HTML rewrite, or JSON-encoded structured
//! envelopes. There is no language model behind this; routing is a
//! case-insensitive substring match over the user prompt.

/// Keyword-to-reply table, checked in order; first match wins
pub const CANNED_RESPONSES: &[(&str, &str)] = &[
    (
        "improve",
        "Great question! Here are some suggestions to **improve** your product description:\n\n\
        1. Add specific benefits and use cases\n\
        2. Include quantifiable metrics or data\n\
        3. Highlight what makes your product unique\n\
        4. Use `clear, concise` language\n\
        5. Consider adding customer testimonials\n\n\
        > Would you like me to expand on any of these suggestions?",
    ),
    (
        "feature",
        "Your product description should clearly highlight:\n\n\
        - **Core features** and functionality\n\
        - **Key benefits** for the user\n\
        - **Target audience**\n\
        - **Pricing** or value proposition\n\
        - How it **solves customer problems**\n\n\
        Make sure each feature is explained in terms of user benefits!",
    ),
    (
        "tone",
        "Based on your current content, I'd recommend:\n\n\
        - Use a professional yet approachable tone\n\
        - Avoid overly technical jargon for general audiences\n\
        - Use active voice (e.g., \"Transform your workflow\" instead of \"Your workflow will be transformed\")\n\
        - Be specific about benefits rather than vague claims\n\n\
        This will make your product more appealing to potential customers.",
    ),
    (
        "grammar",
        "Your content looks good from a grammar perspective! A few tips:\n\n\
        - Keep sentences concise (15-20 words)\n\
        - Use short paragraphs (2-3 sentences)\n\
        - Break up longer sections with bullet points\n\
        - Ensure consistent tense throughout\n\
        - Proofread for typos and formatting\n\n\
        Consistency and clarity are key!",
    ),
    (
        "change",
        r#"{"type":"change","change":{"old_msg":"Lorem ipsum dolor sit amet, consectetur adipiscing elit.","new_msg":"**Lorem ipsum** is a sophisticated placeholder text widely utilized across *graphic design*, publishing, and web development industries.\n\nIt enables designers to create page layouts without being distracted by meaningful content."}}"#,
    ),
    (
        "image",
        r#"{"type":"image","image":{"url":"https://example.com/assets/product-preview.png","alt":"Product Preview Image"}}"#,
    ),
    (
        "gif",
        r#"{"type":"image","image":{"url":"/assets/preview-animation.gif","alt":"Local GIF Preview"}}"#,
    ),
    (
        "rewrite",
        "<h2>General Information</h2>\n\
        <p>Lorem ipsum is a dummy or placeholder text commonly used in graphic design, publishing, and web development. Its purpose is to permit a page layout to be designed, independently of the copy that will subsequently populate it, or to demonstrate various fonts of a typeface without meaningful text that could be distracting.</p>\n\
        <p>Lorem ipsum is typically a corrupted version of De finibus bonorum et malorum, a 1st-century BC text by the Roman statesman and philosopher Cicero, with words altered, added, and removed to make it nonsensical and improper Latin. The first two words are the truncation of dolorem ipsum (\"pain itself\").</p>\n\
        <h2>Data Information</h2>\n\
        <p>Versions of the Lorem ipsum text have been used in typesetting since the 1960s, when advertisements for Letraset transfer sheets popularized it. Lorem ipsum was introduced to the digital world in the mid-1980s, when Aldus employed it in graphic and word-processing templates for its desktop publishing program PageMaker.</p>\n\
        <h2>Legal Information</h2>\n\
        <p>Lorem dolor sit amet, consectetur adipiscing elit, sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.</p>\n\
        <p>Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.</p>",
    ),
];

/// Fallback reply when no keyword matches
pub const DEFAULT_RESPONSE: &str =
    "That's an excellent point! Here's my feedback:\n\n\
    Your product description has a solid foundation. To make it even better:\n\n\
    1. **Be More Specific** - Add concrete examples and use cases\n\
    2. **Highlight Unique Value** - What sets this product apart?\n\
    3. **Focus on Benefits** - How does this solve customer problems?\n\
    4. **Improve Clarity** - Simplify complex concepts\n\
    5. **Add Social Proof** - Include customer testimonials or case studies\n\n\
    Would you like me to suggest changes for any specific section?";

/// Pick the canned reply for a user prompt: first keyword (in table order)
/// contained in the lowercased prompt wins, otherwise the default
pub fn canned_response(prompt: &str) -> &'static str {
    let lower = prompt.to_lowercase();
    CANNED_RESPONSES
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map(|(_, reply)| *reply)
        .unwrap_or(DEFAULT_RESPONSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_routing_is_case_insensitive() {
        let reply = canned_response("Please IMPROVE this paragraph");
        assert!(reply.contains("**improve**"));
    }

    #[test]
    fn first_table_entry_wins_on_multiple_keywords() {
        // "improve" precedes "tone" in the table
        let reply = canned_response("improve the tone of this");
        assert!(reply.contains("**improve**"));
    }

    #[test]
    fn gif_keyword_routes_to_the_local_animation_entry() {
        let reply = canned_response("show me a gif please");
        assert!(reply.contains(".gif"));
        assert!(reply.contains("Local GIF Preview"));
    }

    #[test]
    fn unmatched_prompt_falls_back_to_default() {
        assert_eq!(canned_response("what is the weather"), DEFAULT_RESPONSE);
    }

    #[test]
    fn structured_entries_are_valid_envelopes() {
        use crate::assistant::{MessageData, looks_like_envelope};

        for (keyword, reply) in CANNED_RESPONSES {
            if looks_like_envelope(reply) {
                assert!(
                    serde_json::from_str::<MessageData>(reply).is_ok(),
                    "canned entry {:?} must decode",
                    keyword
                );
            }
        }
    }
}
