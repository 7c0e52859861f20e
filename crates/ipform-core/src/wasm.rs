//! WASM bindings for the problem form controller.
//!
//! Exposes the form model to web front-ends. The embedding page owns the
//! network call; `payload` hands it the request body ready to POST.

use wasm_bindgen::prelude::*;

use crate::form::ProblemForm;
use crate::problem::{Direction, Relation};

#[wasm_bindgen]
#[derive(Default)]
pub struct FormController {
    form: ProblemForm,
}

#[wasm_bindgen]
impl FormController {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FormController {
        FormController {
            form: ProblemForm::new(),
        }
    }

    pub fn set_direction(&mut self, value: &str) -> Result<(), JsValue> {
        let direction: Direction = value
            .parse()
            .map_err(|e: crate::problem::FieldParseError| JsValue::from_str(&e.to_string()))?;
        self.form.set_direction(direction);
        Ok(())
    }

    pub fn set_num_vars(&mut self, n: usize) {
        self.form.set_num_vars(n);
    }

    pub fn define_objective(&mut self) {
        self.form.define_objective();
    }

    pub fn edit_objective_coeff(&mut self, index: usize, raw: &str) {
        self.form.edit_objective_coeff(index, raw);
    }

    pub fn set_num_constraints(&mut self, n: usize) {
        self.form.set_num_constraints(n);
    }

    pub fn define_constraints(&mut self) {
        self.form.define_constraints();
    }

    pub fn edit_constraint_coeff(&mut self, row: usize, var: usize, raw: &str) {
        self.form.edit_constraint_coeff(row, var, raw);
    }

    pub fn edit_constraint_relation(&mut self, row: usize, value: &str) -> Result<(), JsValue> {
        let relation: Relation = value
            .parse()
            .map_err(|e: crate::problem::FieldParseError| JsValue::from_str(&e.to_string()))?;
        self.form.edit_constraint_relation(row, relation);
        Ok(())
    }

    pub fn edit_constraint_rhs(&mut self, row: usize, raw: &str) {
        self.form.edit_constraint_rhs(row, raw);
    }

    /// The request body for the current form state, as a JS object
    pub fn payload(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.form.request())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn num_vars(&self) -> usize {
        self.form.num_vars()
    }

    pub fn num_constraints(&self) -> usize {
        self.form.num_constraints()
    }
}
