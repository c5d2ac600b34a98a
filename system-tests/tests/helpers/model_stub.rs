// system-tests/tests/helpers/model_stub.rs
// ============================================================================
// Module: Model Stub
// Description: In-process stand-in for the MAX Question Answering server.
// Purpose: Exercise the acceptance scenarios without a deployed model.
// Dependencies: axum, max-qa-contract, tokio
// ============================================================================

//! ## Overview
//! Serves the schema, metadata, and predict endpoints on a loopback port.
//! Predict payloads go through the same contract validation the suite asserts
//! on. Answers come from registered fixtures; unregistered questions are
//! answered with the leading sentence of their context so no answer is empty.

use std::collections::BTreeMap;
use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use axum::routing::post;
use max_qa_contract::ErrorBody;
use max_qa_contract::METADATA_PATH;
use max_qa_contract::ModelMetadata;
use max_qa_contract::PREDICT_PATH;
use max_qa_contract::PredictRequest;
use max_qa_contract::PredictResponse;
use max_qa_contract::SWAGGER_PATH;
use max_qa_contract::SwaggerDocument;
use serde_json::Value;
use tokio::runtime::Builder;
use tokio::sync::oneshot;
use tokio::time::sleep;

/// Canned answer for a specific question text.
#[derive(Clone, Debug)]
pub struct AnswerFixture {
    pub question: String,
    pub answer: String,
}

impl AnswerFixture {
    /// Builds a fixture from string slices.
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

#[derive(Clone)]
struct StubState {
    answers: Arc<BTreeMap<String, String>>,
    requests: Arc<Mutex<Vec<Value>>>,
    predict_delay: Duration,
}

/// Handle for the stub model server.
pub struct ModelStubHandle {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<thread::JoinHandle<()>>,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl ModelStubHandle {
    /// Returns the stub base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns captured predict payloads; non-JSON bodies are recorded as strings.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }
}

impl Drop for ModelStubHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns a stub model server answering from the given fixtures.
pub fn spawn_model_stub(fixtures: Vec<AnswerFixture>) -> Result<ModelStubHandle, String> {
    spawn_model_stub_with_delay(fixtures, Duration::ZERO)
}

/// Spawns a stub model server whose predict endpoint answers after a delay.
///
/// The payload is recorded before the delay, so a client that gives up early
/// still leaves its request in [`ModelStubHandle::requests`].
pub fn spawn_model_stub_with_delay(
    fixtures: Vec<AnswerFixture>,
    predict_delay: Duration,
) -> Result<ModelStubHandle, String> {
    let listener = StdTcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("model stub bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("model stub listener nonblocking failed: {err}"))?;
    let addr =
        listener.local_addr().map_err(|err| format!("model stub local addr failed: {err}"))?;
    let base_url = format!("http://{addr}");

    let requests = Arc::new(Mutex::new(Vec::new()));
    let answers: BTreeMap<String, String> =
        fixtures.into_iter().map(|fixture| (fixture.question, fixture.answer)).collect();
    let state = StubState {
        answers: Arc::new(answers),
        requests: Arc::clone(&requests),
        predict_delay,
    };
    let app = Router::new()
        .route(SWAGGER_PATH, get(handle_swagger))
        .route(METADATA_PATH, get(handle_metadata))
        .route(PREDICT_PATH, post(handle_predict))
        .with_state(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let Ok(runtime) = Builder::new_current_thread().enable_all().build() else {
            return;
        };
        runtime.block_on(async move {
            let Ok(listener) = tokio::net::TcpListener::from_std(listener) else {
                return;
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });
    Ok(ModelStubHandle {
        base_url,
        shutdown: Some(shutdown_tx),
        join: Some(join),
        requests,
    })
}

async fn handle_swagger() -> Json<SwaggerDocument> {
    Json(SwaggerDocument::max_question_answering())
}

async fn handle_metadata() -> Json<ModelMetadata> {
    Json(ModelMetadata::max_question_answering())
}

async fn handle_predict(State(state): State<StubState>, bytes: Bytes) -> Response {
    let recorded = serde_json::from_slice(bytes.as_ref())
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes.as_ref()).into_owned()));
    if let Ok(mut guard) = state.requests.lock() {
        guard.push(recorded);
    }
    if state.predict_delay > Duration::ZERO {
        sleep(state.predict_delay).await;
    }
    match PredictRequest::parse(bytes.as_ref()) {
        Ok(request) => Json(answer_request(&state.answers, &request)).into_response(),
        Err(err) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                message: err.to_string(),
            }),
        )
            .into_response(),
    }
}

fn answer_request(answers: &BTreeMap<String, String>, request: &PredictRequest) -> PredictResponse {
    let predictions = request
        .normalize()
        .iter()
        .map(|paragraph| {
            paragraph
                .questions
                .iter()
                .map(|question| {
                    answers
                        .get(question)
                        .cloned()
                        .unwrap_or_else(|| leading_sentence(&paragraph.context))
                })
                .collect()
        })
        .collect();
    PredictResponse::ok(predictions)
}

/// Returns the first sentence of a context, or the whole trimmed context.
fn leading_sentence(context: &str) -> String {
    context
        .split_terminator(['.', '?', '!'])
        .map(str::trim)
        .find(|sentence| !sentence.is_empty())
        .unwrap_or_else(|| context.trim())
        .to_string()
}
