//! Question catalog — the static, ordered check-in script.
//!
//! A catalog is built once at startup and read-only for the lifetime of a
//! conversation. Section order is traversal order.

pub mod default_flow;
pub mod question;

pub use question::{Conditional, IconRef, Question};

use std::collections::HashSet;

use crate::error::CatalogError;

/// An ordered group of questions under one display category.
#[derive(Debug, Clone)]
pub struct Section {
    /// Unique key (e.g. `blood_pressure`).
    pub key: String,
    /// Display label (e.g. "Blood Pressure & Heart Rate Check").
    pub category: String,
    /// Ordered questions.
    pub questions: Vec<Question>,
}

impl Section {
    /// Create a section from its key, display category, and questions.
    pub fn new(
        key: impl Into<String>,
        category: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            key: key.into(),
            category: category.into(),
            questions,
        }
    }
}

/// Ordered sequence of sections, validated on construction.
#[derive(Debug)]
pub struct Catalog {
    sections: Vec<Section>,
}

impl Catalog {
    /// Build a catalog, validating that it is non-empty and that section keys
    /// and question ids are unique.
    pub fn new(sections: Vec<Section>) -> Result<Self, CatalogError> {
        if sections.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut keys = HashSet::new();
        let mut ids = HashSet::new();
        for section in &sections {
            if !keys.insert(section.key.clone()) {
                return Err(CatalogError::DuplicateSectionKey {
                    key: section.key.clone(),
                });
            }
            if section.questions.is_empty() {
                return Err(CatalogError::EmptySection {
                    key: section.key.clone(),
                });
            }
            for question in &section.questions {
                if !ids.insert(question.id.clone()) {
                    return Err(CatalogError::DuplicateQuestionId {
                        id: question.id.clone(),
                    });
                }
            }
        }

        Ok(Self { sections })
    }

    /// Look up a section by key.
    pub fn section(&self, key: &str) -> Result<&Section, CatalogError> {
        self.sections
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| CatalogError::SectionNotFound { key: key.into() })
    }

    /// Look up a section by position.
    pub fn section_at(&self, index: usize) -> Result<&Section, CatalogError> {
        self.sections
            .get(index)
            .ok_or(CatalogError::SectionIndexOutOfRange {
                index,
                len: self.sections.len(),
            })
    }

    /// Ordered section keys.
    pub fn section_keys(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.key.as_str())
    }

    /// All sections, in traversal order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the catalog has no sections. Always false for a constructed
    /// catalog; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total question count across all sections. Upper bound on the number of
    /// cursor advances a session can make.
    pub fn total_question_count(&self) -> usize {
        self.sections.iter().map(|s| s.questions.len()).sum()
    }

    /// The first question of the first section — where every session starts.
    pub fn first_question(&self) -> &Question {
        // Non-empty sections are enforced in `new`.
        &self.sections[0].questions[0]
    }
}
