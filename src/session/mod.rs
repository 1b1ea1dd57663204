//! Check-in session engine.
//!
//! Ties the catalog, flow cursor, response store, and transcript together
//! for one conversation. Submissions append the user message immediately and
//! return the deferred bot messages (feedback, section notices, the next
//! question) as an explicit emission list: tests apply it synchronously,
//! the real shell drives it through [`CheckInSession::emit_paced`].

pub mod feedback;

pub use feedback::FeedbackTable;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tracing::{debug, info};

use crate::catalog::{Catalog, IconRef, Question};
use crate::config::EngineConfig;
use crate::error::{FlowError, Result, ValidationError};
use crate::flow::{FlowCursor, FlowState, ResponseStore};
use crate::transcript::{Message, Transcript, TranscriptEvent};
use crate::vitals::VitalsSample;

/// Closing line appended when the catalog is exhausted.
const COMPLETION_TEXT: &str =
    "That completes today's check-in. Thank you — your care team will review your responses.";

/// A bot message scheduled for emission after a pacing delay.
///
/// Delays are relative to the previous emission; applying the list in order
/// preserves the feedback-before-next-question guarantee. Dropping the list
/// (e.g. when the session is torn down mid-delay) discards the appends.
#[derive(Debug)]
pub struct PendingEmission {
    pub delay: Duration,
    pub message: Message,
}

/// One patient conversation over a catalog.
///
/// All state is session-scoped; sessions share nothing. Single logical
/// actor: submissions and emission application are driven by one caller.
pub struct CheckInSession {
    catalog: Arc<Catalog>,
    config: EngineConfig,
    cursor: FlowCursor,
    responses: ResponseStore,
    transcript: Transcript,
    feedback: FeedbackTable,
    events: broadcast::Sender<TranscriptEvent>,
}

impl CheckInSession {
    /// Start a session, seeding the transcript with the first question.
    pub fn new(catalog: Arc<Catalog>, config: EngineConfig) -> Result<Self> {
        Self::with_feedback(catalog, config, FeedbackTable::default_table())
    }

    /// Start a session with a custom feedback table.
    pub fn with_feedback(
        catalog: Arc<Catalog>,
        config: EngineConfig,
        feedback: FeedbackTable,
    ) -> Result<Self> {
        let (events, _) = broadcast::channel(config.event_channel_capacity);
        let mut session = Self {
            catalog,
            config,
            cursor: FlowCursor::new(),
            responses: ResponseStore::new(),
            transcript: Transcript::new(),
            feedback,
            events,
        };

        info!(
            sections = session.catalog.len(),
            questions = session.catalog.total_question_count(),
            "check-in session started"
        );

        // Surface the first question; leading informational questions are
        // delivered and auto-advanced past.
        let first = session.catalog.first_question().clone();
        let category = session.catalog.section_at(0)?.category.clone();
        session.append(Message::question(&first, category));
        if first.is_informational() {
            let chained = session.next_question_chain(0, Duration::ZERO)?;
            for emission in chained {
                session.append(emission.message);
            }
        }

        Ok(session)
    }

    // ── Observation ─────────────────────────────────────────────────

    /// The question currently awaiting an answer, `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.cursor.current(&self.catalog)
    }

    /// Traversal state.
    pub fn state(&self) -> FlowState {
        self.cursor.state()
    }

    /// Whether the conversation has reached its terminal state.
    pub fn is_complete(&self) -> bool {
        self.cursor.is_complete()
    }

    /// Read-only view of the transcript, in append order.
    pub fn transcript(&self) -> &[Message] {
        self.transcript.all()
    }

    /// Recorded responses (explicit answers and SKIP sentinels).
    pub fn responses(&self) -> &ResponseStore {
        &self.responses
    }

    /// The catalog this session traverses.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Subscribe to transcript-changed events.
    pub fn subscribe(&self) -> broadcast::Receiver<TranscriptEvent> {
        self.events.subscribe()
    }

    // ── Submission ──────────────────────────────────────────────────

    /// Submit a choice selection (multi-select questions submit the joined
    /// selection as one value).
    pub fn submit_choice(
        &mut self,
        question_id: &str,
        answer: &str,
    ) -> Result<Vec<PendingEmission>> {
        self.submit(question_id, answer.to_string(), None)
    }

    /// Submit free-text input. Blank/whitespace input is rejected before
    /// anything is recorded.
    pub fn submit_text(&mut self, question_id: &str, text: &str) -> Result<Vec<PendingEmission>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::BlankInput {
                question_id: question_id.to_string(),
            }
            .into());
        }
        self.submit(question_id, trimmed.to_string(), None)
    }

    /// Submit a blood-pressure slider reading. Records the formatted summary
    /// and schedules the BP-category result message.
    pub fn submit_blood_pressure(
        &mut self,
        question_id: &str,
        sample: &VitalsSample,
    ) -> Result<Vec<PendingEmission>> {
        let summary = sample.bp_summary();
        let derived = Message::derived(question_id, summary.clone(), IconRef::Heart);
        self.submit(question_id, summary, Some(derived))
    }

    /// Submit a weight/height slider reading. Records the formatted summary
    /// and schedules the BMI result message.
    pub fn submit_weight(
        &mut self,
        question_id: &str,
        sample: &VitalsSample,
    ) -> Result<Vec<PendingEmission>> {
        let summary = sample.weight_summary();
        let derived = Message::derived(question_id, summary.clone(), IconRef::Scale);
        self.submit(question_id, summary, Some(derived))
    }

    fn submit(
        &mut self,
        question_id: &str,
        value: String,
        derived: Option<Message>,
    ) -> Result<Vec<PendingEmission>> {
        let current = self
            .cursor
            .current(&self.catalog)
            .ok_or(FlowError::AlreadyComplete)?;
        if current.id != question_id {
            return Err(FlowError::UnexpectedQuestion {
                submitted: question_id.to_string(),
                current: current.id.clone(),
            }
            .into());
        }
        let current = current.clone();

        debug!(question_id = %current.id, "answer recorded");
        self.responses.record(&current.id, value.clone());
        self.append(Message::answer(&current.id, value.clone()));

        let mut pending = Vec::new();

        // Feedback: a derived-metric result for vitals questions, otherwise
        // the per-answer feedback table.
        let feedback = derived.or_else(|| {
            self.feedback
                .lookup(&current, &value)
                .map(|text| Message::feedback(&current.id, text))
        });
        if let Some(message) = feedback {
            pending.push(PendingEmission {
                delay: self.config.feedback_delay,
                message,
            });
        }

        let section_before = self
            .cursor
            .position()
            .map(|(section, _)| section)
            .unwrap_or_default();
        pending.extend(self.next_question_chain(section_before, self.config.question_delay)?);

        if self.cursor.is_complete() {
            info!(responses = self.responses.len(), "check-in session complete");
            let _ = self.events.send(TranscriptEvent::Completed);
        }

        Ok(pending)
    }

    /// Advance the cursor and build the next-question emissions: a section
    /// notice when the flow leaves a section, the question prompt, chained
    /// informational messages, or the completion notice at the end.
    fn next_question_chain(
        &mut self,
        section_before: usize,
        first_delay: Duration,
    ) -> Result<Vec<PendingEmission>> {
        let mut pending = Vec::new();
        let mut previous_section = section_before;
        let mut delay = first_delay;

        loop {
            match self.cursor.advance(&self.catalog, &mut self.responses)? {
                Some(question) => {
                    let question = question.clone();
                    let (section_index, _) = self
                        .cursor
                        .position()
                        .expect("cursor addresses a question after advance");

                    if section_index != previous_section {
                        let completed = self.catalog.section_at(previous_section)?;
                        pending.push(PendingEmission {
                            delay,
                            message: Message::notice(format!(
                                "That's everything for {}.",
                                completed.category
                            )),
                        });
                        delay = self.config.question_delay;
                        previous_section = section_index;
                    }

                    let category = self.catalog.section_at(section_index)?.category.clone();
                    pending.push(PendingEmission {
                        delay,
                        message: Message::question(&question, category),
                    });

                    if !question.is_informational() {
                        break;
                    }
                    // Informational messages wait for no answer; chain the
                    // following question behind them.
                    delay = self.config.question_delay;
                }
                None => {
                    pending.push(PendingEmission {
                        delay,
                        message: Message::notice(COMPLETION_TEXT),
                    });
                    break;
                }
            }
        }

        Ok(pending)
    }

    // ── Emission ────────────────────────────────────────────────────

    /// Append one scheduled message, ignoring its delay. Synchronous test
    /// and virtual-clock path.
    pub fn apply(&mut self, emission: PendingEmission) {
        self.append(emission.message);
    }

    /// Apply a whole emission list in order, ignoring delays.
    pub fn apply_all(&mut self, pending: Vec<PendingEmission>) {
        for emission in pending {
            self.apply(emission);
        }
    }

    /// Apply an emission list on the wall clock, sleeping each delay before
    /// its append.
    pub async fn emit_paced(&mut self, pending: Vec<PendingEmission>) {
        for emission in pending {
            if !emission.delay.is_zero() {
                tokio::time::sleep(emission.delay).await;
            }
            self.apply(emission);
        }
    }

    fn append(&mut self, message: Message) {
        self.transcript.append(message.clone());
        // No subscribers is fine; the transcript itself is the source of truth.
        let _ = self.events.send(TranscriptEvent::Appended { message });
    }
}
