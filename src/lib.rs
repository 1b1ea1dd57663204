//! Heart-failure check-in — conversational questionnaire engine.
//!
//! Walks a patient through a branching check-in script: a static catalog of
//! sectioned questions, a strictly forward flow cursor with conditional
//! skips, an append-only transcript, and derived clinical metrics (BMI and
//! blood-pressure categories) injected as bot messages.

pub mod catalog;
pub mod config;
pub mod error;
pub mod flow;
pub mod metrics;
pub mod session;
pub mod transcript;
pub mod vitals;

pub use catalog::{Catalog, IconRef, Question, Section};
pub use config::EngineConfig;
pub use error::{CatalogError, Error, FlowError, Result, ValidationError};
pub use flow::{FlowCursor, FlowState, ResponseStore, SKIP};
pub use session::{CheckInSession, FeedbackTable, PendingEmission};
pub use transcript::{Message, MessageOrigin, Transcript, TranscriptEvent};
pub use vitals::VitalsSample;
