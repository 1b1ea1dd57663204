//! Flow cursor — strictly forward traversal over the catalog with
//! conditional skip.

use tracing::debug;

use crate::catalog::{Catalog, Question};
use crate::error::FlowError;
use crate::flow::responses::{ResponseStore, SKIP};

/// Externally visible traversal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// A question is addressed and waiting for an answer.
    AwaitingAnswer,
    /// The last question has been answered or skipped.
    Complete,
}

/// Tracks the current (section, question) position in a catalog.
///
/// Traversal is strictly forward: positions are visited in increasing
/// lexicographic order and each at most once. There is no back-navigation.
#[derive(Debug)]
pub struct FlowCursor {
    section_index: usize,
    question_index: usize,
    complete: bool,
}

impl FlowCursor {
    /// Cursor at the first question of the first section.
    pub fn new() -> Self {
        Self {
            section_index: 0,
            question_index: 0,
            complete: false,
        }
    }

    /// Current traversal state.
    pub fn state(&self) -> FlowState {
        if self.complete {
            FlowState::Complete
        } else {
            FlowState::AwaitingAnswer
        }
    }

    /// Whether the traversal has exhausted the catalog.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Current (section, question) position, `None` once complete.
    pub fn position(&self) -> Option<(usize, usize)> {
        (!self.complete).then_some((self.section_index, self.question_index))
    }

    /// The currently addressed question. Idempotent between advances.
    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a Question> {
        if self.complete {
            return None;
        }
        catalog
            .section_at(self.section_index)
            .ok()
            .and_then(|s| s.questions.get(self.question_index))
    }

    /// Advance to the next question to present.
    ///
    /// Questions whose conditional evaluates false over the current responses
    /// are recorded as [`SKIP`] and stepped over without surfacing. Returns
    /// `None` once the catalog is exhausted (the terminal state). Calling
    /// again after that is a programming error.
    pub fn advance<'a>(
        &mut self,
        catalog: &'a Catalog,
        responses: &mut ResponseStore,
    ) -> Result<Option<&'a Question>, FlowError> {
        if self.complete {
            return Err(FlowError::AlreadyComplete);
        }

        // Bounded by the remaining question count: every iteration moves the
        // position strictly forward.
        loop {
            if !self.step(catalog) {
                self.complete = true;
                debug!("flow complete");
                return Ok(None);
            }

            // step() only lands on valid positions.
            let question = &catalog.sections()[self.section_index].questions[self.question_index];

            match &question.conditional {
                Some(cond) if !cond.evaluate(responses.snapshot()) => {
                    debug!(question_id = %question.id, "conditionally skipped");
                    responses.record(&question.id, SKIP);
                }
                _ => return Ok(Some(question)),
            }
        }
    }

    /// Move to the next raw position. Returns false when the catalog is
    /// exhausted.
    fn step(&mut self, catalog: &Catalog) -> bool {
        let section_len = match catalog.section_at(self.section_index) {
            Ok(section) => section.questions.len(),
            Err(_) => return false,
        };

        if self.question_index + 1 < section_len {
            self.question_index += 1;
            return true;
        }
        if self.section_index + 1 < catalog.len() {
            self.section_index += 1;
            self.question_index = 0;
            return true;
        }
        false
    }
}

impl Default for FlowCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{IconRef, Question, Section};

    fn choice(id: &str) -> Question {
        Question::new(id, format!("{id}?"), IconRef::Heart).with_answers(["Yes", "No"])
    }

    fn two_section_catalog() -> Catalog {
        Catalog::new(vec![
            Section::new("a", "A", vec![choice("a1"), choice("a2")]),
            Section::new("b", "B", vec![choice("b1")]),
        ])
        .unwrap()
    }

    #[test]
    fn advances_across_section_boundary() {
        let catalog = two_section_catalog();
        let mut cursor = FlowCursor::new();
        let mut responses = ResponseStore::new();

        assert_eq!(cursor.current(&catalog).unwrap().id, "a1");
        assert_eq!(
            cursor.advance(&catalog, &mut responses).unwrap().unwrap().id,
            "a2"
        );
        assert_eq!(
            cursor.advance(&catalog, &mut responses).unwrap().unwrap().id,
            "b1"
        );
        assert!(cursor.advance(&catalog, &mut responses).unwrap().is_none());
        assert_eq!(cursor.state(), FlowState::Complete);
        assert!(cursor.current(&catalog).is_none());
    }

    #[test]
    fn current_is_idempotent() {
        let catalog = two_section_catalog();
        let cursor = FlowCursor::new();
        let first = cursor.current(&catalog).unwrap().id.clone();
        let second = cursor.current(&catalog).unwrap().id.clone();
        assert_eq!(first, second);
    }

    #[test]
    fn visits_are_strictly_increasing() {
        let catalog = two_section_catalog();
        let mut cursor = FlowCursor::new();
        let mut responses = ResponseStore::new();

        let mut visited = vec![cursor.position().unwrap()];
        while cursor.advance(&catalog, &mut responses).unwrap().is_some() {
            visited.push(cursor.position().unwrap());
        }

        let mut sorted = visited.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(visited, sorted, "positions must be strictly increasing");
    }

    #[test]
    fn conditional_skip_records_sentinel_and_never_surfaces() {
        let catalog = Catalog::new(vec![Section::new(
            "a",
            "A",
            vec![
                choice("gate"),
                Question::new("skipped", "?", IconRef::AlertCircle)
                    .with_answers(["X"])
                    .with_conditional(|r| r.get("gate") == Some("No")),
                choice("landing"),
            ],
        )])
        .unwrap();

        let mut cursor = FlowCursor::new();
        let mut responses = ResponseStore::new();
        responses.record("gate", "Yes");

        let next = cursor.advance(&catalog, &mut responses).unwrap().unwrap();
        assert_eq!(next.id, "landing");
        assert_eq!(responses.get("skipped"), Some(SKIP));
    }

    #[test]
    fn consecutive_skips_terminate() {
        let always_skip =
            |id: &str| Question::new(id, "?", IconRef::Heart).with_answers(["X"]).with_conditional(|_| false);
        let catalog = Catalog::new(vec![
            Section::new("a", "A", vec![choice("a1"), always_skip("s1"), always_skip("s2")]),
            Section::new("b", "B", vec![always_skip("s3"), choice("b1")]),
        ])
        .unwrap();

        let mut cursor = FlowCursor::new();
        let mut responses = ResponseStore::new();

        let next = cursor.advance(&catalog, &mut responses).unwrap().unwrap();
        assert_eq!(next.id, "b1");
        for id in ["s1", "s2", "s3"] {
            assert_eq!(responses.get(id), Some(SKIP));
        }
    }

    #[test]
    fn catalog_ending_while_skipping_completes() {
        let catalog = Catalog::new(vec![Section::new(
            "a",
            "A",
            vec![
                choice("a1"),
                Question::new("tail", "?", IconRef::Heart)
                    .with_answers(["X"])
                    .with_conditional(|_| false),
            ],
        )])
        .unwrap();

        let mut cursor = FlowCursor::new();
        let mut responses = ResponseStore::new();

        assert!(cursor.advance(&catalog, &mut responses).unwrap().is_none());
        assert!(cursor.is_complete());
        assert_eq!(responses.get("tail"), Some(SKIP));
    }

    #[test]
    fn advance_after_complete_is_an_error() {
        let catalog = Catalog::new(vec![Section::new("a", "A", vec![choice("a1")])]).unwrap();
        let mut cursor = FlowCursor::new();
        let mut responses = ResponseStore::new();

        assert!(cursor.advance(&catalog, &mut responses).unwrap().is_none());
        assert!(matches!(
            cursor.advance(&catalog, &mut responses),
            Err(FlowError::AlreadyComplete)
        ));
    }

    #[test]
    fn terminates_within_total_question_count() {
        let catalog = crate::catalog::default_flow::catalog();
        let mut cursor = FlowCursor::new();
        let mut responses = ResponseStore::new();

        let mut advances = 0;
        loop {
            match cursor.advance(&catalog, &mut responses).unwrap() {
                Some(q) => {
                    // Answer with the first choice so conditionals stay live.
                    let answer = q.answers.first().cloned().unwrap_or_default();
                    responses.record(&q.id, answer);
                }
                None => break,
            }
            advances += 1;
            assert!(advances <= catalog.total_question_count());
        }
    }
}
