// crates/max-qa-contract/src/response.rs
// ============================================================================
// Module: Response Contract
// Description: Documents returned by the model server.
// Purpose: Provide typed shapes for schema, metadata, predict, and error bodies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Response documents are decoded leniently (unknown keys are tolerated) so
//! the suite keeps working when the server adds fields. The fixed model
//! identity and schema document are rendered here for the model stub.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

use crate::METADATA_PATH;
use crate::MODEL_TITLE;
use crate::PREDICT_PATH;

// ============================================================================
// SECTION: Predict
// ============================================================================

/// Status literal reported by a successful predict call.
pub const STATUS_OK: &str = "ok";

/// Predict response: one answer list per input paragraph.
///
/// # Invariants
/// - `predictions[i][j]` answers question `j` of paragraph `i`; unanswered
///   questions are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Outcome status.
    pub status: String,
    /// Answers grouped by paragraph.
    pub predictions: Vec<Vec<String>>,
}

impl PredictResponse {
    /// Builds a successful response.
    #[must_use]
    pub fn ok(predictions: Vec<Vec<String>>) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            predictions,
        }
    }

    /// Returns true when the status is `ok`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Returns the number of answers per paragraph, in order.
    #[must_use]
    pub fn answer_counts(&self) -> Vec<usize> {
        self.predictions.iter().map(Vec::len).collect()
    }

    /// Returns true when any answer is an empty string.
    #[must_use]
    pub fn has_empty_answer(&self) -> bool {
        self.predictions.iter().flatten().any(String::is_empty)
    }
}

/// Error body returned alongside a 400 status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description.
    pub message: String,
}

// ============================================================================
// SECTION: Metadata
// ============================================================================

/// Model identity served by the metadata endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Stable model identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// License name.
    pub license: String,
    /// Model source URL.
    pub source: String,
}

impl ModelMetadata {
    /// Returns the fixed identity of the MAX Question Answering model.
    #[must_use]
    pub fn max_question_answering() -> Self {
        Self {
            id: "max-question-answering".to_string(),
            name: MODEL_TITLE.to_string(),
            description: "Answer questions on a given corpus of text.".to_string(),
            license: "Apache 2.0".to_string(),
            source: "https://developer.ibm.com/exchanges/models/all/max-question-answering/"
                .to_string(),
        }
    }
}

// ============================================================================
// SECTION: Schema Document
// ============================================================================

/// `info` block of the schema document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// API title.
    pub title: String,
    /// API version.
    #[serde(default)]
    pub version: String,
    /// API description.
    #[serde(default)]
    pub description: String,
}

/// Swagger 2.0 schema document served at `/swagger.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwaggerDocument {
    /// Swagger specification version.
    pub swagger: String,
    /// API identity.
    pub info: ApiInfo,
    /// Path table; kept untyped.
    #[serde(default)]
    pub paths: Value,
}

impl SwaggerDocument {
    /// Renders the schema document advertised by the model server.
    #[must_use]
    pub fn max_question_answering() -> Self {
        let mut paths = serde_json::Map::new();
        paths.insert(
            METADATA_PATH.to_string(),
            json!({
                "get": {
                    "summary": "Return the metadata associated with the model",
                    "responses": { "200": { "description": "Success" } }
                }
            }),
        );
        paths.insert(
            PREDICT_PATH.to_string(),
            json!({
                "post": {
                    "summary": "Predict answers to questions about a body of text",
                    "consumes": ["application/json"],
                    "responses": {
                        "200": { "description": "Success" },
                        "400": { "description": "Invalid input" }
                    }
                }
            }),
        );
        Self {
            swagger: "2.0".to_string(),
            info: ApiInfo {
                title: MODEL_TITLE.to_string(),
                version: "1.0.0".to_string(),
                description: "Answer questions on a given corpus of text.".to_string(),
            },
            paths: Value::Object(paths),
        }
    }
}
