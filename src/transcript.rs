//! Transcript — the append-only message log of a check-in session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{IconRef, Question};

/// Who produced a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageOrigin {
    Bot,
    User,
}

/// One entry in the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Unique message id.
    pub id: Uuid,
    /// Who produced the message.
    pub origin: MessageOrigin,
    /// Message body.
    pub text: String,
    /// Section/category label shown above the bubble, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Answer choices offered with a question prompt.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    /// Icon rendered alongside the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
    /// Question this message prompts for, answers, or derives from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_question_id: Option<String>,
    /// When the message was appended.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(origin: MessageOrigin, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            origin,
            text: text.into(),
            category: None,
            choices: Vec::new(),
            icon: None,
            linked_question_id: None,
            timestamp: Utc::now(),
        }
    }

    /// Bot prompt for a question, carrying its choices and icon.
    pub fn question(question: &Question, category: impl Into<String>) -> Self {
        let mut msg = Self::new(MessageOrigin::Bot, question.text.clone());
        msg.category = Some(category.into());
        msg.choices = question.answers.clone();
        msg.icon = Some(question.icon);
        msg.linked_question_id = Some(question.id.clone());
        msg
    }

    /// User answer to a question.
    pub fn answer(question_id: impl Into<String>, text: impl Into<String>) -> Self {
        let mut msg = Self::new(MessageOrigin::User, text);
        msg.linked_question_id = Some(question_id.into());
        msg
    }

    /// Bot feedback reacting to an answer.
    pub fn feedback(question_id: impl Into<String>, text: impl Into<String>) -> Self {
        let mut msg = Self::new(MessageOrigin::Bot, text);
        msg.linked_question_id = Some(question_id.into());
        msg
    }

    /// Derived-metric result (BP or BMI summary) linked to the originating
    /// vitals question.
    pub fn derived(
        question_id: impl Into<String>,
        text: impl Into<String>,
        icon: IconRef,
    ) -> Self {
        let mut msg = Self::new(MessageOrigin::Bot, text);
        msg.category = Some("Results".into());
        msg.icon = Some(icon);
        msg.linked_question_id = Some(question_id.into());
        msg
    }

    /// Free-standing bot notice (section transitions, completion).
    pub fn notice(text: impl Into<String>) -> Self {
        Self::new(MessageOrigin::Bot, text)
    }
}

/// Event broadcast to the UI shell whenever the transcript changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TranscriptEvent {
    /// A message was appended.
    Appended { message: Message },
    /// The conversation reached its terminal state.
    Completed,
}

/// Append-only ordered log of exchanged messages.
///
/// No edit or delete operation exists; messages are never reordered.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message.
    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Read-only view of all messages, in append order.
    pub fn all(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the transcript is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.append(Message::notice("first"));
        transcript.append(Message::answer("q1", "second"));
        transcript.append(Message::notice("third"));

        let texts: Vec<_> = transcript.all().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn question_message_carries_choices_and_icon() {
        let q = Question::new("ready", "Ready to start?", IconRef::Clock)
            .with_answers(["Yes", "No"]);
        let msg = Message::question(&q, "Initial Greeting");

        assert_eq!(msg.origin, MessageOrigin::Bot);
        assert_eq!(msg.choices, vec!["Yes", "No"]);
        assert_eq!(msg.icon, Some(IconRef::Clock));
        assert_eq!(msg.linked_question_id.as_deref(), Some("ready"));
        assert_eq!(msg.category.as_deref(), Some("Initial Greeting"));
    }

    #[test]
    fn derived_message_is_tagged_results() {
        let msg = Message::derived("bp_reading", "BP: 120/80 mmHg (Normal)", IconRef::Heart);
        assert_eq!(msg.category.as_deref(), Some("Results"));
        assert_eq!(msg.linked_question_id.as_deref(), Some("bp_reading"));
    }

    #[test]
    fn message_serde_omits_empty_fields() {
        let msg = Message::answer("q1", "Yes");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains("\"origin\":\"user\""));
        assert!(!json.contains("\"choices\""));
        assert!(!json.contains("\"category\""));

        let parsed: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.text, "Yes");
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn transcript_event_serde() {
        let event = TranscriptEvent::Appended {
            message: Message::notice("hello"),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"appended\""));

        let completed = serde_json::to_string(&TranscriptEvent::Completed).unwrap();
        assert!(completed.contains("\"type\":\"completed\""));
    }
}
