use serde::{Deserialize, Serialize};

/// Action tag carried by Android send intents (`Intent.ACTION_SEND`).
pub const ACTION_SEND: &str = "android.intent.action.SEND";

/// The only MIME type the relay accepts.
pub const MIME_TEXT_PLAIN: &str = "text/plain";

/// Raw descriptor of a platform share event, as handed over by the native
/// forwarder.
///
/// Mirrors the intent fields one-to-one: `action` and `mime_type` tags plus
/// the two well-known text extras. Filtering happens on the Rust side — the
/// forwarder delivers every intent verbatim.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareEvent {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub mime_type: Option<String>,
    /// The shared text extra (`Intent.EXTRA_TEXT`), the candidate URL.
    #[serde(default)]
    pub text: Option<String>,
    /// The shared subject extra (`Intent.EXTRA_SUBJECT`), the candidate title.
    #[serde(default)]
    pub subject: Option<String>,
}

impl ShareEvent {
    /// Apply the send-intent guard and extract a payload.
    ///
    /// Only `ACTION_SEND` events typed exactly `text/plain` qualify, and only
    /// when the text extra is present. A missing subject becomes an empty
    /// title; a missing text yields no payload at all.
    pub fn extract_payload(&self) -> Option<SharedPayload> {
        if self.action != ACTION_SEND || self.mime_type.as_deref() != Some(MIME_TEXT_PLAIN) {
            return None;
        }
        let url = self.text.clone()?;
        Some(SharedPayload {
            title: self.subject.clone().unwrap_or_default(),
            url,
        })
    }
}

/// A share payload extracted from a send intent.
///
/// This is the exact wire shape the webview receives: two string fields,
/// `title` possibly empty, `url` always present.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SharedPayload {
    pub title: String,
    pub url: String,
}

/// Response shape of the native `takeLaunchEvent` command.
///
/// The forwarder omits `event` when no intent is pending.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchEventResponse {
    #[serde(default)]
    pub event: Option<ShareEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn send_event(subject: Option<&str>, text: Option<&str>) -> ShareEvent {
        ShareEvent {
            action: ACTION_SEND.into(),
            mime_type: Some(MIME_TEXT_PLAIN.into()),
            text: text.map(Into::into),
            subject: subject.map(Into::into),
        }
    }

    #[test]
    fn test_extract_with_subject_and_text() {
        let event = send_event(Some("Example"), Some("https://example.com"));
        assert_eq!(
            event.extract_payload(),
            Some(SharedPayload {
                title: "Example".into(),
                url: "https://example.com".into(),
            })
        );
    }

    #[test]
    fn test_extract_text_only_gets_empty_title() {
        let event = send_event(None, Some("https://example.com"));
        let payload = event.extract_payload().unwrap();
        assert_eq!(payload.title, "");
        assert_eq!(payload.url, "https://example.com");
    }

    #[test]
    fn test_extract_subject_only_yields_nothing() {
        let event = send_event(Some("Example"), None);
        assert_eq!(event.extract_payload(), None);
    }

    #[test]
    fn test_extract_rejects_wrong_action() {
        let event = ShareEvent {
            action: "android.intent.action.VIEW".into(),
            ..send_event(Some("Example"), Some("https://example.com"))
        };
        assert_eq!(event.extract_payload(), None);
    }

    #[test]
    fn test_extract_rejects_wrong_mime_type() {
        let event = ShareEvent {
            mime_type: Some("image/png".into()),
            ..send_event(None, Some("https://example.com"))
        };
        assert_eq!(event.extract_payload(), None);
    }

    #[test]
    fn test_extract_rejects_missing_mime_type() {
        let event = ShareEvent {
            mime_type: None,
            ..send_event(None, Some("https://example.com"))
        };
        assert_eq!(event.extract_payload(), None);
    }
}
