//! JSON request/response shapes of the `bwm` program.

use std::io::{self, Read, Write};

use log::{error, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Deserializer, Value};

use crate::{
    bwm::{self, BwmError},
    problem::ComparisonInput,
    solution::SolutionResult,
};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct BwmRequest {
    #[serde(rename = "aB")]
    pub best_to_others: Vec<f64>,
    #[serde(rename = "aW")]
    pub others_to_worst: Vec<f64>,
    #[serde(alias = "bestIndex")]
    pub best_index: usize,
    #[serde(alias = "worstIndex")]
    pub worst_index: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ErrorBody {
    pub kind: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BwmResponse {
    Solved(SolutionResult),
    Failed { error: ErrorBody },
}

impl BwmResponse {
    pub fn failed(kind: &str, message: impl Into<String>) -> Self {
        BwmResponse::Failed {
            error: ErrorBody {
                kind: kind.to_string(),
                message: message.into(),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, BwmResponse::Solved(_))
    }
}

impl From<Result<SolutionResult, BwmError>> for BwmResponse {
    fn from(result: Result<SolutionResult, BwmError>) -> Self {
        match result {
            Ok(solution) => BwmResponse::Solved(solution),
            Err(e) => BwmResponse::failed(e.kind(), e.to_string()),
        }
    }
}

impl BwmRequest {
    pub fn into_input(self) -> Result<ComparisonInput, BwmError> {
        Ok(ComparisonInput::try_new(
            self.best_to_others,
            self.others_to_worst,
            self.best_index,
            self.worst_index,
        )?)
    }

    /// Validates and solves with the default backend.
    pub fn handle(self) -> BwmResponse {
        self.into_input().and_then(|input| bwm::solve(&input)).into()
    }
}

/// Answers every JSON request read from `input` with one response line.
///
/// Requests may be separated by any whitespace. A request with the wrong
/// shape fails on its own; unparsable JSON ends the stream. Returns whether
/// every request was solved.
pub fn serve<R: Read, W: Write>(input: R, mut output: W) -> io::Result<bool> {
    let mut all_solved = true;
    for item in Deserializer::from_reader(input).into_iter::<Value>() {
        let (response, stop) = match item {
            Ok(value) => match serde_json::from_value::<BwmRequest>(value) {
                Ok(request) => (request.handle(), false),
                Err(e) => {
                    let message = format!("malformed request: {}", e);
                    (BwmResponse::failed("invalid_input", message), false)
                }
            },
            Err(e) if e.is_io() => return Err(e.into()),
            Err(e) => {
                error!("unreadable request stream: {}", e);
                (BwmResponse::failed("invalid_input", format!("malformed JSON: {}", e)), true)
            }
        };
        if let BwmResponse::Failed { error } = &response {
            warn!("request failed: {}: {}", error.kind, error.message);
            all_solved = false;
        }
        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
        if stop {
            break;
        }
    }
    output.flush()?;
    Ok(all_solved)
}
