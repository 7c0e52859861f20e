use ipform_core::{ProblemForm, SolveResponse};

use crate::client::SolveBackend;
use crate::error::ClientError;

/// Ties a backend to the last solver response.
///
/// Each successful submit replaces the stored response wholesale; a
/// failed submit leaves the previous one untouched. There is no request
/// sequencing: whichever response arrives last is the one kept.
pub struct SolveSession<B> {
    backend: B,
    response: Option<SolveResponse>,
}

impl<B: SolveBackend> SolveSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            response: None,
        }
    }

    /// Sends the form's current request and stores the decoded response.
    /// The error is surfaced once to the caller; it is logged here and
    /// never retried.
    pub fn submit(&mut self, form: &ProblemForm) -> Result<&SolveResponse, ClientError> {
        match self.backend.submit(&form.request()) {
            Ok(response) => Ok(self.response.insert(response)),
            Err(e) => {
                log::warn!("submit failed: {}", e);
                Err(e)
            }
        }
    }

    pub fn response(&self) -> Option<&SolveResponse> {
        self.response.as_ref()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::io;

    use ipform_core::{SolveRequest, VariableValue};

    use super::*;

    /// Backend that replays scripted outcomes and records the requests
    /// it was given.
    struct ScriptedBackend {
        outcomes: RefCell<VecDeque<Result<SolveResponse, ClientError>>>,
        requests: RefCell<Vec<SolveRequest>>,
    }

    impl ScriptedBackend {
        fn new(outcomes: Vec<Result<SolveResponse, ClientError>>) -> Self {
            Self {
                outcomes: RefCell::new(outcomes.into()),
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl SolveBackend for ScriptedBackend {
        fn submit(&self, request: &SolveRequest) -> Result<SolveResponse, ClientError> {
            self.requests.borrow_mut().push(request.clone());
            self.outcomes
                .borrow_mut()
                .pop_front()
                .expect("no scripted outcome left")
        }
    }

    fn optimal(value: f64) -> SolveResponse {
        SolveResponse {
            status: "optimal".to_string(),
            optimal_value: value,
            variables: vec![VariableValue {
                name: "x1".to_string(),
                value,
            }],
        }
    }

    fn failure() -> ClientError {
        ClientError::Decode(io::Error::other("connection refused"))
    }

    #[test]
    fn test_successful_submit_stores_response() {
        let mut session = SolveSession::new(ScriptedBackend::new(vec![Ok(optimal(11.0))]));
        let form = ProblemForm::new();
        let response = session.submit(&form).unwrap();
        assert_eq!(response.optimal_value, 11.0);
        assert_eq!(session.response().unwrap().status, "optimal");
    }

    #[test]
    fn test_failed_submit_keeps_prior_response() {
        let mut session =
            SolveSession::new(ScriptedBackend::new(vec![Ok(optimal(11.0)), Err(failure())]));
        let form = ProblemForm::new();
        session.submit(&form).unwrap();
        let err = session.submit(&form);
        assert!(err.is_err());
        // The earlier response is untouched.
        assert_eq!(session.response().unwrap().optimal_value, 11.0);
    }

    #[test]
    fn test_failed_first_submit_leaves_no_response() {
        let mut session = SolveSession::new(ScriptedBackend::new(vec![Err(failure())]));
        let form = ProblemForm::new();
        assert!(session.submit(&form).is_err());
        assert!(session.response().is_none());
    }

    #[test]
    fn test_last_response_wins() {
        let mut session = SolveSession::new(ScriptedBackend::new(vec![
            Ok(optimal(11.0)),
            Ok(optimal(42.0)),
        ]));
        let form = ProblemForm::new();
        session.submit(&form).unwrap();
        session.submit(&form).unwrap();
        // No sequencing: the stored response is whichever arrived last.
        assert_eq!(session.response().unwrap().optimal_value, 42.0);
    }

    #[test]
    fn test_submit_sends_current_form_state() {
        let mut session = SolveSession::new(ScriptedBackend::new(vec![Ok(optimal(1.0))]));
        let mut form = ProblemForm::new();
        form.set_num_vars(3);
        form.define_objective();
        session.submit(&form).unwrap();
        let requests = session.backend().requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].num_vars, 3);
        assert_eq!(requests[0].objective_coeffs, vec![0.0, 0.0, 0.0]);
    }
}
