//! Per-answer feedback table.
//!
//! Maps (question id, answer) pairs to a short bot reaction appended after
//! the user's answer. Multi-select answers are matched per selected token.
//! Questions without an entry simply get no feedback.

use std::collections::HashMap;

use crate::catalog::Question;

/// Separator used when a multi-select answer is submitted as one string.
pub const MULTI_SELECT_SEPARATOR: &str = ", ";

/// Lookup table of per-answer feedback lines.
#[derive(Debug, Default)]
pub struct FeedbackTable {
    entries: HashMap<(String, String), String>,
}

impl FeedbackTable {
    /// Table with no entries (no feedback is ever produced).
    pub fn empty() -> Self {
        Self::default()
    }

    /// The feedback lines shipped with the default check-in script.
    pub fn default_table() -> Self {
        let mut table = Self::default();

        table.insert(
            "medication_adherence",
            "Yes, all as prescribed",
            "That's great to hear. Staying on schedule makes a real difference.",
        );
        table.insert(
            "medication_adherence",
            "Missed a few doses",
            "Thanks for letting me know. A daily alarm or pill organizer can help.",
        );
        table.insert(
            "medication_adherence",
            "Missed several doses",
            "Thank you for being honest. Let's flag this for your care team.",
        );
        table.insert(
            "medication_adherence",
            "Stopped taking one or more medications",
            "Please don't stop any medication without talking to your care team first. \
             I'll make sure they follow up with you.",
        );
        table.insert(
            "symptoms",
            "Chest pain",
            "Chest pain can be serious. If it is new or worsening, please contact your \
             care team or emergency services right away.",
        );
        table.insert(
            "symptoms",
            "Shortness of breath",
            "Noted. Worsening shortness of breath is worth a call to your care team.",
        );
        table.insert(
            "symptoms",
            "None",
            "Glad to hear you're feeling well.",
        );
        table.insert(
            "hospital_visits",
            "Yes",
            "I'm sorry to hear that. Your care team will review the details.",
        );
        table.insert(
            "activity_level",
            "Yes",
            "Well done — keeping active is one of the best things you can do.",
        );
        table.insert(
            "reminder_checkin",
            "Yes",
            "Great, I'll set that up for you.",
        );

        table
    }

    /// Add or replace an entry.
    pub fn insert(
        &mut self,
        question_id: impl Into<String>,
        answer: impl Into<String>,
        feedback: impl Into<String>,
    ) {
        self.entries
            .insert((question_id.into(), answer.into()), feedback.into());
    }

    /// Feedback for an answer, if any.
    ///
    /// For multi-select questions the submitted value is split on the
    /// selection separator and the first matching token wins, in selection
    /// order.
    pub fn lookup(&self, question: &Question, answer: &str) -> Option<&str> {
        if question.allows_multiple {
            answer
                .split(MULTI_SELECT_SEPARATOR)
                .find_map(|token| self.entry(&question.id, token.trim()))
        } else {
            self.entry(&question.id, answer)
        }
    }

    fn entry(&self, question_id: &str, answer: &str) -> Option<&str> {
        self.entries
            .get(&(question_id.to_string(), answer.to_string()))
            .map(String::as_str)
    }
}
