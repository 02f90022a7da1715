pub mod events;
pub mod systems;

use serde::{Deserialize, Serialize};
use crate::chat::{MessageText, Username};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub username: Username,
    pub content: MessageText,
}

/// Requests going out over the socket, discriminated by the `action` field.
/// Fire-and-forget: the backend never acknowledges them directly.
#[derive(Serialize, Debug)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Outbound {
    GetRecentMessages,
    SendMessage { username: Username, content: MessageText },
}

/// Inbound payload shapes. History arrives wrapped in a `messages` envelope,
/// broadcasts arrive as a bare message; both normalize to a flat list.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum Inbound {
    Batch { messages: Vec<ChatMessage> },
    Single(ChatMessage),
}

impl Inbound {
    pub fn into_messages(self) -> Vec<ChatMessage> {
        match self {
            Inbound::Batch { messages } => messages,
            Inbound::Single(message) => vec![message],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(username: &str, content: &str) -> ChatMessage {
        ChatMessage {
            username: Username(username.to_string()),
            content: MessageText(content.to_string()),
        }
    }

    #[test]
    fn get_recent_messages_is_action_tagged() {
        let value = serde_json::to_value(Outbound::GetRecentMessages).unwrap();
        assert_eq!(value, json!({"action": "getRecentMessages"}));
    }

    #[test]
    fn send_message_carries_username_and_content() {
        let request = Outbound::SendMessage {
            username: Username("tete".to_string()),
            content: MessageText("hi there".to_string()),
        };
        let value = serde_json::to_value(request).unwrap();
        assert_eq!(
            value,
            json!({"action": "sendMessage", "username": "tete", "content": "hi there"})
        );
    }

    #[test]
    fn inbound_accepts_message_envelope() {
        let payload = r#"{"messages": [
            {"username": "tete", "content": "one"},
            {"username": "pepe", "content": "two"}
        ]}"#;
        let inbound: Inbound = serde_json::from_str(payload).unwrap();
        assert_eq!(
            inbound.into_messages(),
            vec![message("tete", "one"), message("pepe", "two")]
        );
    }

    #[test]
    fn inbound_accepts_bare_message() {
        let payload = r#"{"username": "tete", "content": "one"}"#;
        let inbound: Inbound = serde_json::from_str(payload).unwrap();
        assert_eq!(inbound.into_messages(), vec![message("tete", "one")]);
    }

    #[test]
    fn inbound_rejects_malformed_payload() {
        assert!(serde_json::from_str::<Inbound>(r#"{"username": "tete"}"#).is_err());
        assert!(serde_json::from_str::<Inbound>("not json").is_err());
    }
}
