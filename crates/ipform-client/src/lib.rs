mod client;
mod error;
mod session;

pub use client::{SolveBackend, SolverClient, DEFAULT_ENDPOINT};
pub use error::ClientError;
pub use session::SolveSession;

#[cfg(test)]
mod tests {
    use ipform_core::{Direction, ProblemForm, Relation, SolveResponse};
    use serde_json::json;

    // The wire contract: field names and relation/direction strings must
    // match what the solver service expects.
    #[test]
    fn test_request_payload_json() {
        let mut form = ProblemForm::new();
        form.set_num_vars(2);
        form.define_objective();
        form.edit_objective_coeff(0, "2");
        form.edit_objective_coeff(1, "3");
        form.set_direction(Direction::Max);
        form.set_num_constraints(1);
        form.define_constraints();
        form.edit_constraint_coeff(0, 0, "1");
        form.edit_constraint_coeff(0, 1, "1");
        form.edit_constraint_relation(0, Relation::Le);
        form.edit_constraint_rhs(0, "4");

        let value = serde_json::to_value(form.request()).unwrap();
        assert_eq!(
            value,
            json!({
                "problem_type": "max",
                "num_vars": 2,
                "objective_coeffs": [2.0, 3.0],
                "constraints": [
                    { "coeffs": [1.0, 1.0], "relation": "<=", "rhs": 4.0 }
                ]
            })
        );
    }

    #[test]
    fn test_non_numeric_input_serializes_as_null() {
        let mut form = ProblemForm::new();
        form.define_objective();
        form.edit_objective_coeff(0, "abc");
        let value = serde_json::to_value(form.request()).unwrap();
        assert_eq!(value["objective_coeffs"][0], serde_json::Value::Null);
    }

    #[test]
    fn test_min_direction_and_relations_on_the_wire() {
        let mut form = ProblemForm::new();
        form.set_direction(Direction::Min);
        form.set_num_constraints(3);
        form.define_constraints();
        form.edit_constraint_relation(1, Relation::Eq);
        form.edit_constraint_relation(2, Relation::Ge);
        let value = serde_json::to_value(form.request()).unwrap();
        assert_eq!(value["problem_type"], "min");
        assert_eq!(value["constraints"][0]["relation"], "<=");
        assert_eq!(value["constraints"][1]["relation"], "=");
        assert_eq!(value["constraints"][2]["relation"], ">=");
    }

    #[test]
    fn test_response_decodes() {
        let body = r#"{
            "status": "optimal",
            "optimal_value": 11.0,
            "variables": [
                { "name": "x1", "value": 3.0 },
                { "name": "x2", "value": 1.0 }
            ]
        }"#;
        let response: SolveResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.status, "optimal");
        assert_eq!(response.optimal_value, 11.0);
        assert_eq!(response.variables.len(), 2);
        assert_eq!(response.variables[0].name, "x1");
        assert_eq!(response.variables[1].value, 1.0);
    }
}
