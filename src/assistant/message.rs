use serde::{Deserialize, Serialize};

/// A structured edit proposal carried in an assistant reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageChange {
    pub old_msg: String,
    pub new_msg: String,
}

/// An image reference carried in an assistant reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Closed set of assistant message shapes.
///
/// Structured replies travel as JSON envelopes tagged on `"type"`; plain
/// markdown or HTML canned strings decode to `Text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MessageData {
    Text { content: String },
    Change { change: MessageChange },
    Image { image: MessageImage },
}

/// Whether a raw reply plausibly is a JSON envelope rather than markdown/HTML
pub fn looks_like_envelope(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.starts_with('{') && trimmed.ends_with('}')
}

/// Whether a reply body is an HTML fragment (a full-document rewrite)
/// rather than markdown
pub fn is_html_content(content: &str) -> bool {
    let trimmed = content.trim();
    trimmed.starts_with('<') && trimmed.contains("</")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_envelope_round_trips() {
        let raw = r#"{"type":"change","change":{"old_msg":"old text","new_msg":"new text"}}"#;
        let message: MessageData = serde_json::from_str(raw).unwrap();
        assert_eq!(
            message,
            MessageData::Change {
                change: MessageChange {
                    old_msg: "old text".to_string(),
                    new_msg: "new text".to_string(),
                },
            }
        );

        let encoded = serde_json::to_string(&message).unwrap();
        let decoded: MessageData = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn image_envelope_decodes_with_optional_alt() {
        let raw = r#"{"type":"image","image":{"url":"https://example.com/a.png"}}"#;
        let message: MessageData = serde_json::from_str(raw).unwrap();
        match message {
            MessageData::Image { image } => {
                assert_eq!(image.url, "https://example.com/a.png");
                assert!(image.alt.is_none());
            }
            other => panic!("expected image, got {:?}", other),
        }
    }

    #[test]
    fn unknown_type_tag_is_rejected() {
        let raw = r#"{"type":"video","video":{"url":"x"}}"#;
        assert!(serde_json::from_str::<MessageData>(raw).is_err());
    }

    #[test]
    fn envelope_detection() {
        assert!(looks_like_envelope(r#" {"type":"text","content":"hi"} "#));
        assert!(!looks_like_envelope("**markdown** reply"));
        assert!(!looks_like_envelope("<p>html</p>"));
    }

    #[test]
    fn html_detection() {
        assert!(is_html_content("<h2>Title</h2>\n<p>Body</p>"));
        assert!(!is_html_content("1 < 2 but this is prose"));
        assert!(!is_html_content("plain markdown"));
    }
}
