// crates/max-qa-contract/src/lib.rs
// ============================================================================
// Module: MAX Question Answering Contract Library
// Description: Typed wire contract for the MAX Question Answering model API.
// Purpose: Share request, response, and schema shapes between test helpers.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The contract library describes the HTTP surface of the MAX Question
//! Answering model server: the schema document, the model metadata, and the
//! predict request/response documents. Request validation lives here so the
//! in-process model stub and the acceptance suite agree on which payloads the
//! server must reject.
//!
//! The model itself is never part of this crate; it is reached over HTTP.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod request;
pub mod response;
pub mod schemas;


// ============================================================================
// SECTION: Errors
// ============================================================================

use thiserror::Error;

/// Errors raised when decoding or validating a predict request.
///
/// # Invariants
/// - Paragraph and question indexes are zero-based positions in the request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// Payload did not decode into any supported request shape.
    #[error("invalid request payload: {0}")]
    Decode(String),
    /// Request carried no paragraphs.
    #[error("request must contain at least one paragraph")]
    EmptyRequest,
    /// Paragraph context was empty or whitespace.
    #[error("paragraph {paragraph} has an empty context")]
    BlankContext {
        /// Offending paragraph index.
        paragraph: usize,
    },
    /// Paragraph carried no questions.
    #[error("paragraph {paragraph} has no questions")]
    MissingQuestions {
        /// Offending paragraph index.
        paragraph: usize,
    },
    /// Question text was empty or whitespace.
    #[error("paragraph {paragraph} question {question} is empty")]
    BlankQuestion {
        /// Paragraph index holding the question.
        paragraph: usize,
        /// Offending question index.
        question: usize,
    },
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

/// Default base URL of a locally running model server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
/// Path of the API schema document.
pub const SWAGGER_PATH: &str = "/swagger.json";
/// Path of the model metadata endpoint.
pub const METADATA_PATH: &str = "/model/metadata";
/// Path of the predict endpoint.
pub const PREDICT_PATH: &str = "/model/predict";
/// Title advertised by the schema document and metadata.
pub const MODEL_TITLE: &str = "MAX Question Answering";

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use request::ContextQuestions;
pub use request::ParagraphEntry;
pub use request::ParagraphsRequest;
pub use request::PredictRequest;
pub use request::QaEntry;
pub use response::ApiInfo;
pub use response::ErrorBody;
pub use response::ModelMetadata;
pub use response::PredictResponse;
pub use response::STATUS_OK;
pub use response::SwaggerDocument;
