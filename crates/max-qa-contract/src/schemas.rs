// crates/max-qa-contract/src/schemas.rs
// ============================================================================
// Module: Contract Schemas
// Description: JSON Schemas for model server documents.
// Purpose: Let acceptance tests validate live responses structurally.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! Draft 2020-12 schemas for the predict request, predict response, and
//! metadata documents. The request schema is structural only: blank-string
//! rules are enforced by [`crate::PredictRequest::validate`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

// ============================================================================
// SECTION: Schemas
// ============================================================================

/// Schema URI used for every contract schema.
const SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Returns the JSON schema for predict requests (both shapes).
#[must_use]
pub fn predict_request_schema() -> Value {
    json!({
        "$schema": SCHEMA_DIALECT,
        "$id": "max-qa://contract/schemas/predict_request.schema.json",
        "title": "PredictRequest",
        "oneOf": [
            {
                "type": "object",
                "required": ["paragraphs"],
                "properties": {
                    "paragraphs": {
                        "type": "array",
                        "minItems": 1,
                        "items": {
                            "type": "object",
                            "required": ["context", "questions"],
                            "properties": {
                                "context": non_empty_string("Context text."),
                                "questions": {
                                    "type": "array",
                                    "minItems": 1,
                                    "items": non_empty_string("Question text.")
                                }
                            },
                            "additionalProperties": false
                        }
                    }
                },
                "additionalProperties": false
            },
            {
                "type": "array",
                "minItems": 1,
                "items": {
                    "type": "object",
                    "required": ["text", "qa"],
                    "properties": {
                        "id": { "type": "integer", "minimum": 0 },
                        "title": schema_for_string("Paragraph title."),
                        "text": non_empty_string("Context text."),
                        "qa": {
                            "type": "array",
                            "minItems": 1,
                            "items": {
                                "type": "object",
                                "required": ["question"],
                                "properties": {
                                    "question": non_empty_string("Question text."),
                                    "answer": schema_for_string("Reference answer."),
                                    "entity": schema_for_string("Reference answer entity type."),
                                    "note": schema_for_string("Annotator note.")
                                },
                                "additionalProperties": false
                            }
                        }
                    },
                    "additionalProperties": false
                }
            }
        ]
    })
}

/// Returns the JSON schema for predict responses.
#[must_use]
pub fn predict_response_schema() -> Value {
    json!({
        "$schema": SCHEMA_DIALECT,
        "$id": "max-qa://contract/schemas/predict_response.schema.json",
        "title": "PredictResponse",
        "type": "object",
        "required": ["status", "predictions"],
        "properties": {
            "status": { "type": "string", "enum": ["ok"] },
            "predictions": {
                "type": "array",
                "items": {
                    "type": "array",
                    "items": schema_for_string("Answer text; empty when unanswered.")
                }
            }
        }
    })
}

/// Returns the JSON schema for the model metadata document.
#[must_use]
pub fn model_metadata_schema() -> Value {
    json!({
        "$schema": SCHEMA_DIALECT,
        "$id": "max-qa://contract/schemas/model_metadata.schema.json",
        "title": "ModelMetadata",
        "type": "object",
        "required": ["id", "name", "description", "license", "source"],
        "properties": {
            "id": schema_for_string("Model identifier."),
            "name": schema_for_string("Model display name."),
            "description": schema_for_string("Model description."),
            "license": schema_for_string("Model license."),
            "source": schema_for_string("Model source URL.")
        }
    })
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns a JSON schema for string values.
fn schema_for_string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

/// Returns a JSON schema for strings with at least one character.
fn non_empty_string(description: &str) -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "description": description
    })
}
