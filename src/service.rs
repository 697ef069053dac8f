//! JSON request/response envelope around the match engine.
//!
//! A request names a dictionary, an input and a similarity level:
//!
//! ```json
//! { "dictionary": ["new york", "new jersey"], "input": "new", "level": "LOW" }
//! ```
//!
//! and is answered with a ranked, de-duplicated list of phrases:
//!
//! ```json
//! { "resultCode": "SUCCESS", "resultData": { "results": ["new york", "new jersey"] }, "errors": [] }
//! ```
//!
//! Malformed requests are answered with `"resultCode": "ERROR"` and a
//! description of the problem; they are never surfaced as Rust errors.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::matching::engine::MatchEngine;
use crate::matching::level::SimilarityLevel;
use crate::matching::ranking::ranked_values;

/// Result code of a successful request.
pub const RESULT_SUCCESS: &str = "SUCCESS";
/// Result code of a failed request.
pub const RESULT_ERROR: &str = "ERROR";

/// Request bodies are read up to this many bytes (1 MiB).
pub const MAX_REQUEST_BYTES: u64 = 1 << 20;

/// A similarity request. Missing fields default to empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityRequest {
    pub dictionary: Vec<String>,
    pub input: String,
    /// Level name, e.g. `HIGH`. Unknown names accept every candidate.
    pub level: String,
}

/// The phrases accepted for a request, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsPayload {
    pub results: Vec<String>,
}

/// An error entry in a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    pub code: String,
    pub description: String,
}

/// The response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResponse {
    pub result_code: String,
    pub result_data: Option<ResultsPayload>,
    /// Omitted from the wire when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ResponseError>,
}

impl SimilarityResponse {
    /// A successful response carrying `results`.
    pub fn success(results: Vec<String>) -> Self {
        SimilarityResponse {
            result_code: RESULT_SUCCESS.to_string(),
            result_data: Some(ResultsPayload { results }),
            errors: Vec::new(),
        }
    }

    /// A failed response with a single error entry.
    pub fn error(code: impl Into<String>, description: impl Into<String>) -> Self {
        SimilarityResponse {
            result_code: RESULT_ERROR.to_string(),
            result_data: None,
            errors: vec![ResponseError {
                code: code.into(),
                description: description.into(),
            }],
        }
    }

    /// Whether the request succeeded.
    pub fn is_success(&self) -> bool {
        self.result_code == RESULT_SUCCESS
    }

    /// The accepted phrases, empty for failed requests.
    pub fn results(&self) -> &[String] {
        self.result_data
            .as_ref()
            .map(|data| data.results.as_slice())
            .unwrap_or_default()
    }
}

/// Answer a parsed request.
pub fn handle(engine: &MatchEngine, request: &SimilarityRequest) -> SimilarityResponse {
    let level = SimilarityLevel::parse(&request.level).unwrap_or_else(|| {
        if !request.level.is_empty() {
            warn!("unknown similarity level {:?}, accepting every candidate", request.level);
        }
        SimilarityLevel::ExtraLow
    });

    debug!(
        "request: {} phrases, input {:?}, level {}",
        request.dictionary.len(),
        request.input,
        level
    );
    let matches = engine.exec(&request.dictionary, &request.input, level.threshold());
    SimilarityResponse::success(ranked_values(matches))
}

/// Answer a raw JSON request body.
pub fn handle_request(engine: &MatchEngine, body: &str) -> SimilarityResponse {
    match serde_json::from_str::<SimilarityRequest>(body) {
        Ok(request) => handle(engine, &request),
        Err(e) => {
            warn!("rejecting malformed request: {e}");
            SimilarityResponse::error("error", e.to_string())
        }
    }
}
