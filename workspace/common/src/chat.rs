//! Conversations shown in the chat dialog.

use std::collections::BTreeMap;

use charts::ChartDescriptor;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    User,
    Ai,
    /// A user message addressed to someone, rendered with its `@mention`
    UserMention,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention: Option<String>,
}

impl ChatMessage {
    pub fn is_from_user(&self) -> bool {
        self.kind != MessageKind::Ai
    }
}

/// Messages of one conversation plus the chart card attached to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatContent {
    pub messages: Vec<ChatMessage>,
    pub chart: ChartDescriptor,
}

/// Name the fallback chat is listed under.
pub const DEFAULT_CHAT: &str = "default";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatLibrary {
    pub by_id: BTreeMap<String, ChatContent>,
    /// Shown for any id without its own content
    pub fallback: ChatContent,
}

impl ChatLibrary {
    pub fn content_for(&self, id: &str) -> &ChatContent {
        match self.by_id.get(id) {
            Some(content) => content,
            None => {
                debug!(id, "No chat content, using fallback");
                &self.fallback
            }
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Every chart in the library, keyed by chat id; the fallback as `default`.
    pub fn charts(&self) -> impl Iterator<Item = (&str, &ChartDescriptor)> {
        self.by_id
            .iter()
            .map(|(id, content)| (id.as_str(), &content.chart))
            .chain(std::iter::once((DEFAULT_CHAT, &self.fallback.chart)))
    }
}

/// Picks the team avatar for the n-th user message of a conversation.
pub fn avatar_for<'a>(avatars: &'a [String], user_message_index: usize) -> Option<&'a str> {
    if avatars.is_empty() {
        return None;
    }
    avatars.get(user_message_index % avatars.len()).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use charts::{ChartData, ChartKind, DisplayMeta};

    fn content(percentage: f64, text: &str) -> ChatContent {
        ChatContent {
            messages: vec![ChatMessage {
                id: "1".to_string(),
                kind: MessageKind::User,
                content: text.to_string(),
                mention: None,
            }],
            chart: ChartDescriptor::new(ChartData::Radial { percentage }, DisplayMeta::default()),
        }
    }

    fn library() -> ChatLibrary {
        ChatLibrary {
            by_id: BTreeMap::from([("2".to_string(), content(75.0, "competitors"))]),
            fallback: content(50.0, "help"),
        }
    }

    #[test]
    fn test_lookup_falls_back() {
        let library = library();
        assert_eq!(library.content_for("2").messages[0].content, "competitors");
        assert_eq!(library.content_for("99").messages[0].content, "help");
        assert!(library.contains("2"));
        assert!(!library.contains("99"));
    }

    #[test]
    fn test_charts_include_fallback_last() {
        let library = library();
        let ids: Vec<&str> = library.charts().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["2", "default"]);
        assert!(library.charts().all(|(_, chart)| chart.kind() == ChartKind::Radial));
    }

    #[test]
    fn test_message_kinds_deserialize() {
        let message: ChatMessage = serde_json::from_str(
            r#"{"id": "3", "type": "user-mention", "content": "See the attached report", "mention": "@Nikki"}"#,
        )
        .unwrap();
        assert_eq!(message.kind, MessageKind::UserMention);
        assert_eq!(message.mention.as_deref(), Some("@Nikki"));
        assert!(message.is_from_user());

        let message: ChatMessage = serde_json::from_str(r#"{"id": "2", "type": "ai", "content": "ok"}"#).unwrap();
        assert!(!message.is_from_user());
        assert!(message.mention.is_none());
    }

    #[test]
    fn test_avatar_cycles() {
        let avatars = vec!["a".to_string(), "b".to_string()];
        assert_eq!(avatar_for(&avatars, 0), Some("a"));
        assert_eq!(avatar_for(&avatars, 3), Some("b"));
        assert_eq!(avatar_for(&[], 1), None);
    }
}
