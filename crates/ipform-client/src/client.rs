use ipform_core::{SolveRequest, SolveResponse};

use crate::error::ClientError;

/// Endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/solve/";

/// The seam between the form session and the network, so sessions can be
/// driven by a stub in tests.
pub trait SolveBackend {
    fn submit(&self, request: &SolveRequest) -> Result<SolveResponse, ClientError>;
}

/// Sends problems to the solver service over HTTP.
///
/// One blocking POST per submit, no timeout, no retries, no extra
/// headers.
pub struct SolverClient {
    agent: ureq::Agent,
    endpoint: String,
}

impl SolverClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            agent: ureq::agent(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for SolverClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl SolveBackend for SolverClient {
    fn submit(&self, request: &SolveRequest) -> Result<SolveResponse, ClientError> {
        log::debug!(
            "posting problem ({} vars, {} constraints) to {}",
            request.num_vars,
            request.constraints.len(),
            self.endpoint
        );
        let response = self.agent.post(&self.endpoint).send_json(request)?;
        Ok(response.into_json()?)
    }
}
