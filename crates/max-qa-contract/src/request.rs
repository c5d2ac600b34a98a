// crates/max-qa-contract/src/request.rs
// ============================================================================
// Module: Predict Request Contract
// Description: Request shapes accepted by the predict endpoint.
// Purpose: Decode, normalize, and validate predict payloads.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! The predict endpoint accepts two payload shapes: a `paragraphs` object of
//! context/questions pairs, and a bare list of paragraph entries carrying
//! annotated `qa` tuples. Both normalize to an ordered list of
//! [`ContextQuestions`]. Unknown keys are rejected at decode time so a
//! misspelled field never silently drops a question.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::ContractError;

// ============================================================================
// SECTION: Request Types
// ============================================================================

/// Context paragraph paired with the questions to answer against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextQuestions {
    /// Context text.
    pub context: String,
    /// Ordered questions.
    pub questions: Vec<String>,
}

/// Object-shaped request: `{"paragraphs": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParagraphsRequest {
    /// Paragraphs to answer, in response order.
    pub paragraphs: Vec<ContextQuestions>,
}

/// Annotated question tuple inside a [`ParagraphEntry`].
///
/// # Invariants
/// - `question` is required; the annotation fields default to empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QaEntry {
    /// Question text.
    pub question: String,
    /// Reference answer (informational only).
    #[serde(default)]
    pub answer: String,
    /// Entity type of the reference answer.
    #[serde(default)]
    pub entity: String,
    /// Free-form annotator note.
    #[serde(default)]
    pub note: String,
}

impl QaEntry {
    /// Builds an entry with only the question populated.
    #[must_use]
    pub fn question(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: String::new(),
            entity: String::new(),
            note: String::new(),
        }
    }
}

/// List-shaped request element: free text plus annotated questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParagraphEntry {
    /// Optional numeric identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Optional paragraph title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Context text.
    pub text: String,
    /// Annotated questions.
    pub qa: Vec<QaEntry>,
}

/// Predict request in either supported shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PredictRequest {
    /// `{"paragraphs": [{"context": ..., "questions": [...]}]}`.
    Paragraphs(ParagraphsRequest),
    /// `[{"text": ..., "qa": [{"question": ...}]}]`.
    Entries(Vec<ParagraphEntry>),
}

// ============================================================================
// SECTION: Decoding & Validation
// ============================================================================

impl PredictRequest {
    /// Decodes a request from raw JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Decode`] when the bytes are not JSON or match
    /// neither request shape.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ContractError> {
        serde_json::from_slice(bytes).map_err(|err| ContractError::Decode(err.to_string()))
    }

    /// Decodes and validates a request in one step.
    ///
    /// # Errors
    ///
    /// Returns the first decode or validation failure.
    pub fn parse(bytes: &[u8]) -> Result<Self, ContractError> {
        let request = Self::from_slice(bytes)?;
        request.validate()?;
        Ok(request)
    }

    /// Maps either shape onto ordered context/questions pairs.
    #[must_use]
    pub fn normalize(&self) -> Vec<ContextQuestions> {
        match self {
            Self::Paragraphs(request) => request.paragraphs.clone(),
            Self::Entries(entries) => entries
                .iter()
                .map(|entry| ContextQuestions {
                    context: entry.text.clone(),
                    questions: entry.qa.iter().map(|qa| qa.question.clone()).collect(),
                })
                .collect(),
        }
    }

    /// Returns the question count of each paragraph, in order.
    #[must_use]
    pub fn question_counts(&self) -> Vec<usize> {
        match self {
            Self::Paragraphs(request) => {
                request.paragraphs.iter().map(|paragraph| paragraph.questions.len()).collect()
            }
            Self::Entries(entries) => entries.iter().map(|entry| entry.qa.len()).collect(),
        }
    }

    /// Checks the request against the predict endpoint's input rules.
    ///
    /// # Errors
    ///
    /// Returns the first rule violation, scanning paragraphs in order.
    pub fn validate(&self) -> Result<(), ContractError> {
        let paragraphs = self.normalize();
        if paragraphs.is_empty() {
            return Err(ContractError::EmptyRequest);
        }
        for (paragraph, entry) in paragraphs.iter().enumerate() {
            if entry.context.trim().is_empty() {
                return Err(ContractError::BlankContext {
                    paragraph,
                });
            }
            if entry.questions.is_empty() {
                return Err(ContractError::MissingQuestions {
                    paragraph,
                });
            }
            if let Some(question) = entry.questions.iter().position(|q| q.trim().is_empty()) {
                return Err(ContractError::BlankQuestion {
                    paragraph,
                    question,
                });
            }
        }
        Ok(())
    }
}
