//! Question model — prompt text, answer choices, icons, and conditional skip
//! predicates.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::flow::responses::ResponseSnapshot;

/// Symbolic icon reference carried on questions and bot messages.
///
/// The engine is icon-agnostic — resolving these to renderables is the UI
/// shell's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconRef {
    Clock,
    AlertCircle,
    Pill,
    Calendar,
    Scale,
    Droplets,
    Stethoscope,
    Brain,
    Sun,
    Heart,
    Smile,
    Activity,
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clock => "clock",
            Self::AlertCircle => "alert_circle",
            Self::Pill => "pill",
            Self::Calendar => "calendar",
            Self::Scale => "scale",
            Self::Droplets => "droplets",
            Self::Stethoscope => "stethoscope",
            Self::Brain => "brain",
            Self::Sun => "sun",
            Self::Heart => "heart",
            Self::Smile => "smile",
            Self::Activity => "activity",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for IconRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clock" => Ok(Self::Clock),
            "alert_circle" => Ok(Self::AlertCircle),
            "pill" => Ok(Self::Pill),
            "calendar" => Ok(Self::Calendar),
            "scale" => Ok(Self::Scale),
            "droplets" => Ok(Self::Droplets),
            "stethoscope" => Ok(Self::Stethoscope),
            "brain" => Ok(Self::Brain),
            "sun" => Ok(Self::Sun),
            "heart" => Ok(Self::Heart),
            "smile" => Ok(Self::Smile),
            "activity" => Ok(Self::Activity),
            _ => Err(format!("Unknown icon: {s}")),
        }
    }
}

/// Predicate over prior responses deciding whether a question is asked.
///
/// Evaluates against a read-only snapshot so predicates cannot mutate the
/// store. Returns `false` to skip the question.
#[derive(Clone)]
pub struct Conditional(Arc<dyn Fn(ResponseSnapshot<'_>) -> bool + Send + Sync>);

impl Conditional {
    /// Wrap a predicate closure.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(ResponseSnapshot<'_>) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(predicate))
    }

    /// Evaluate the predicate over a snapshot of prior responses.
    pub fn evaluate(&self, responses: ResponseSnapshot<'_>) -> bool {
        (self.0)(responses)
    }
}

impl fmt::Debug for Conditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Conditional(..)")
    }
}

/// A single question in the check-in script. Immutable once the catalog is
/// built.
#[derive(Debug, Clone)]
pub struct Question {
    /// Unique id within the catalog (e.g. `medication_adherence`).
    pub id: String,
    /// Prompt text shown to the patient.
    pub text: String,
    /// Ordered answer choices. May be empty for informational messages.
    pub answers: Vec<String>,
    /// Icon rendered alongside the prompt.
    pub icon: IconRef,
    /// Whether the question collects free/widget input rather than a choice.
    pub requires_input: bool,
    /// Whether several answers may be selected at once.
    pub allows_multiple: bool,
    /// Skip predicate over prior responses; `None` means always asked.
    pub conditional: Option<Conditional>,
}

impl Question {
    /// Create a question with no answer choices.
    pub fn new(id: impl Into<String>, text: impl Into<String>, icon: IconRef) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            answers: Vec::new(),
            icon,
            requires_input: false,
            allows_multiple: false,
            conditional: None,
        }
    }

    /// Set the ordered answer choices.
    pub fn with_answers<I, S>(mut self, answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.answers = answers.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the question as collecting free/widget input.
    pub fn with_input(mut self) -> Self {
        self.requires_input = true;
        self
    }

    /// Allow multiple answers to be selected.
    pub fn with_multiple(mut self) -> Self {
        self.allows_multiple = true;
        self
    }

    /// Attach a conditional skip predicate.
    pub fn with_conditional<F>(mut self, predicate: F) -> Self
    where
        F: Fn(ResponseSnapshot<'_>) -> bool + Send + Sync + 'static,
    {
        self.conditional = Some(Conditional::new(predicate));
        self
    }

    /// An informational-only message: no choices, no input. Delivered to the
    /// transcript but never waits for an answer.
    pub fn is_informational(&self) -> bool {
        self.answers.is_empty() && !self.requires_input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::responses::ResponseStore;

    #[test]
    fn builder_sets_fields() {
        let q = Question::new("side_effects", "Any side effects?", IconRef::AlertCircle)
            .with_answers(["Yes", "No"])
            .with_multiple();
        assert_eq!(q.id, "side_effects");
        assert_eq!(q.answers, vec!["Yes", "No"]);
        assert!(q.allows_multiple);
        assert!(!q.requires_input);
        assert!(q.conditional.is_none());
    }

    #[test]
    fn informational_requires_no_answers_and_no_input() {
        let note = Question::new("note", "Tell your provider.", IconRef::AlertCircle);
        assert!(note.is_informational());

        let input = Question::new("weight", "Your weight?", IconRef::Scale).with_input();
        assert!(!input.is_informational());

        let choice = Question::new("ready", "Ready?", IconRef::Clock).with_answers(["Yes"]);
        assert!(!choice.is_informational());
    }

    #[test]
    fn conditional_reads_prior_responses() {
        let q = Question::new("difficulty", "Why difficult?", IconRef::AlertCircle)
            .with_answers(["Side effects", "Cost concerns"])
            .with_conditional(|r| r.get("adherence") != Some("Yes"));

        let mut store = ResponseStore::new();
        store.record("adherence", "Yes");
        let cond = q.conditional.as_ref().unwrap();
        assert!(!cond.evaluate(store.snapshot()));

        store.record("adherence", "Missed a few doses");
        assert!(cond.evaluate(store.snapshot()));
    }

    #[test]
    fn icon_display_and_fromstr() {
        assert_eq!(IconRef::AlertCircle.to_string(), "alert_circle");
        assert_eq!("heart".parse::<IconRef>().unwrap(), IconRef::Heart);
        assert!("unknown".parse::<IconRef>().is_err());
    }

    #[test]
    fn icon_serde_roundtrip() {
        let json = serde_json::to_string(&IconRef::Stethoscope).unwrap();
        assert_eq!(json, "\"stethoscope\"");
        let parsed: IconRef = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, IconRef::Stethoscope);
    }
}
