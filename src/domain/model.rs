use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// A single notification on its way to a recipient.
///
/// Serialized as the `{to, message}` record that channels emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "to")]
    pub recipient: String,
    #[serde(rename = "message")]
    pub content: String,
}

impl Message {
    pub fn new(content: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            recipient: recipient.into(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::Message;

    #[test]
    fn serializes_as_to_message_record() {
        let message = Message::new("notification via Email", "Othman");
        assert_eq!(
            message.to_json().unwrap(),
            r#"{"to":"Othman","message":"notification via Email"}"#
        );
    }

    #[test]
    fn keeps_content_untouched() {
        let message = Message::new("  padded  ", "");
        assert_eq!(message.content, "  padded  ");
        assert_eq!(message.recipient, "");
    }
}
