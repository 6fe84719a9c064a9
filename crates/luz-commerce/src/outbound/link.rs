//! External link construction.

use serde::{Deserialize, Serialize};

/// Query parameter that carries the pre-filled message.
const TEXT_PARAM: &str = "text";

/// Where purchase messages are sent: `https://{host}/{recipient}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingTarget {
    pub host: String,
    pub recipient: String,
}

impl MessagingTarget {
    pub const DEFAULT_HOST: &'static str = "wa.me";
    pub const DEFAULT_RECIPIENT: &'static str = "573196791189";

    pub fn new(host: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            recipient: recipient.into(),
        }
    }

    /// WhatsApp click-to-chat target for a phone number in international format.
    pub fn whatsapp(recipient: impl Into<String>) -> Self {
        Self::new(Self::DEFAULT_HOST, recipient)
    }

    pub fn base_url(&self) -> String {
        format!(
            "https://{}/{}",
            self.host.trim_end_matches('/'),
            self.recipient.trim_matches('/')
        )
    }

    /// Link that opens a chat with `message` pre-filled.
    pub fn link(&self, message: &str) -> String {
        build_external_link(&self.base_url(), message)
    }
}

impl Default for MessagingTarget {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOST, Self::DEFAULT_RECIPIENT)
    }
}

/// Append `message`, percent-encoded, as the `text` query parameter.
pub fn build_external_link(base: &str, message: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{}{}{}={}",
        base,
        separator,
        TEXT_PARAM,
        urlencoding::encode(message)
    )
}

/// Recover the message from a link built by [`build_external_link`].
pub fn decode_message(link: &str) -> Option<String> {
    let (_, query) = link.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == TEXT_PARAM)
        .and_then(|(_, value)| urlencoding::decode(value).ok())
        .map(|decoded| decoded.into_owned())
}

/// `mailto:` URI with percent-encoded subject and body.
pub fn mailto_link(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address.trim(),
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        let target = MessagingTarget::default();
        assert_eq!(target.base_url(), "https://wa.me/573196791189");
        assert!(target.link("hola").starts_with("https://wa.me/573196791189?text="));
    }

    #[test]
    fn test_link_encodes_reserved_characters() {
        let link = build_external_link("https://wa.me/1", "a&b?c=d e\n¿ñ?");
        let (_, query) = link.split_once('?').unwrap();
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert_eq!(query.matches('&').count(), 0);
        assert_eq!(decode_message(&link).as_deref(), Some("a&b?c=d e\n¿ñ?"));
    }

    #[test]
    fn test_link_is_deterministic() {
        let a = build_external_link("https://wa.me/1", "Hola ✨");
        let b = build_external_link("https://wa.me/1", "Hola ✨");
        assert_eq!(a, b);
        assert_eq!(a, "https://wa.me/1?text=Hola%20%E2%9C%A8");
    }

    #[test]
    fn test_link_appends_to_existing_query() {
        let link = build_external_link("https://api.whatsapp.com/send?phone=57", "hola");
        assert_eq!(link, "https://api.whatsapp.com/send?phone=57&text=hola");
        assert_eq!(decode_message(&link).as_deref(), Some("hola"));
    }

    #[test]
    fn test_decode_message_without_text() {
        assert_eq!(decode_message("https://wa.me/1"), None);
        assert_eq!(decode_message("https://wa.me/1?phone=2"), None);
    }

    #[test]
    fn test_mailto_link() {
        let link = mailto_link("hola@luzdenuit.co", "PQRS: Claim", "Line 1\nLine 2");
        assert_eq!(
            link,
            "mailto:hola@luzdenuit.co?subject=PQRS%3A%20Claim&body=Line%201%0ALine%202"
        );
    }
}
