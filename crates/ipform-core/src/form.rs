use crate::problem::{ConstraintRow, Direction, Relation, SolveRequest};

/// Editable state behind the problem entry form.
///
/// Counts and coefficient vectors are deliberately decoupled: changing
/// `num_vars` or `num_constraints` does not resize anything until the
/// matching define operation is invoked again, so vectors can be stale
/// in between. `request` serializes whatever is currently stored.
#[derive(Debug, Clone)]
pub struct ProblemForm {
    direction: Direction,
    num_vars: usize,
    objective: Vec<f64>,
    num_constraints: usize,
    constraints: Vec<ConstraintRow>,
}

/// Coefficient fields accept free text; anything that is not a number
/// becomes NaN and flows into the payload as-is.
fn parse_coeff(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

impl Default for ProblemForm {
    fn default() -> Self {
        Self {
            direction: Direction::Max,
            num_vars: 2,
            objective: Vec::new(),
            num_constraints: 1,
            constraints: Vec::new(),
        }
    }
}

impl ProblemForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn num_vars(&self) -> usize {
        self.num_vars
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn num_constraints(&self) -> usize {
        self.num_constraints
    }

    pub fn constraints(&self) -> &[ConstraintRow] {
        &self.constraints
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Stores the requested variable count. Existing vectors keep their
    /// length until the next define operation.
    pub fn set_num_vars(&mut self, n: usize) {
        self.num_vars = n;
    }

    /// Replaces the objective with a zero vector of the current variable
    /// count, discarding any previously entered values.
    pub fn define_objective(&mut self) {
        self.objective = vec![0.0; self.num_vars];
    }

    /// Writes a coefficient parsed from raw text. Out-of-range indices
    /// are ignored; the form only renders fields for existing slots.
    pub fn edit_objective_coeff(&mut self, index: usize, raw: &str) {
        if let Some(slot) = self.objective.get_mut(index) {
            *slot = parse_coeff(raw);
        }
    }

    /// Stores the requested row count without resizing the current list.
    pub fn set_num_constraints(&mut self, n: usize) {
        self.num_constraints = n;
    }

    /// Replaces the constraint list with `num_constraints` zero rows,
    /// discarding any previously entered rows.
    pub fn define_constraints(&mut self) {
        self.constraints = (0..self.num_constraints)
            .map(|_| ConstraintRow::zeroed(self.num_vars))
            .collect();
    }

    pub fn edit_constraint_coeff(&mut self, row: usize, var: usize, raw: &str) {
        if let Some(slot) = self
            .constraints
            .get_mut(row)
            .and_then(|c| c.coeffs.get_mut(var))
        {
            *slot = parse_coeff(raw);
        }
    }

    pub fn edit_constraint_relation(&mut self, row: usize, relation: Relation) {
        if let Some(constraint) = self.constraints.get_mut(row) {
            constraint.relation = relation;
        }
    }

    pub fn edit_constraint_rhs(&mut self, row: usize, raw: &str) {
        if let Some(constraint) = self.constraints.get_mut(row) {
            constraint.rhs = parse_coeff(raw);
        }
    }

    /// Builds the request from the current state verbatim. No length or
    /// count consistency checks; stale vectors are sent as stored.
    pub fn request(&self) -> SolveRequest {
        SolveRequest {
            problem_type: self.direction,
            num_vars: self.num_vars,
            objective_coeffs: self.objective.clone(),
            constraints: self.constraints.clone(),
        }
    }
}
