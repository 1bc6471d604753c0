//! Read-side queries. Everything here is computed on each call.

use super::error::FormError;
use super::field::FormValue;
use super::node::Form;
use super::status::FieldStatus;

impl<A: FormValue> Form<A> {
    /// Field: its own status. Form: the max over all registered fields.
    pub fn status(&self) -> FieldStatus {
        match self {
            Form::Field { state, .. } => state.status,
            Form::Form { state, .. } => state.fields.status(),
        }
    }

    pub fn is_pristine(&self) -> bool {
        self.status().is_pristine()
    }

    /// Errors of the latest validation; for a form, those of every field
    pub fn errors(&self) -> Vec<FormError> {
        match self {
            Form::Field { state, .. } => state.errors.clone(),
            Form::Form { state, .. } => state.fields.errors(),
        }
    }

    pub fn has_errors(&self) -> bool {
        match self {
            Form::Field { state, .. } => !state.errors.is_empty(),
            Form::Form { state, .. } => state.fields.slots().any(|(_, slot)| !slot.errors().is_empty()),
        }
    }

    /// The typed value, if there is one.
    ///
    /// A field returns its last good value. A form derives its value from
    /// its registry and yields `None` while any field it needs is empty or
    /// dirty.
    pub fn validated(&self) -> Option<A> {
        match self {
            Form::Field { state, .. } => state.value.clone(),
            Form::Form {
                state, produces, ..
            } => produces(&state.fields),
        }
    }

    pub fn get_or_else(&self, default: A) -> A {
        self.validated().unwrap_or(default)
    }

    /// Raw text of a field; always empty for a form
    pub fn raw_value(&self) -> &str {
        match self {
            Form::Field { state, .. } => &state.raw,
            Form::Form { .. } => "",
        }
    }

    /// Project the validated value, or fall back to `default`
    pub fn project_valid<B, F>(&self, default: B, project: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        self.validated().map(project).unwrap_or(default)
    }

    pub fn is_submitted(&self) -> bool {
        match self {
            Form::Field { .. } => false,
            Form::Form { state, .. } => state.is_submitted,
        }
    }

    /// Copy of this form flagged as submitted. No-op on fields.
    pub fn mark_submitted(self) -> Self {
        match self {
            Form::Form {
                id,
                mut state,
                produces,
            } => {
                state.is_submitted = true;
                Form::Form {
                    id,
                    state,
                    produces,
                }
            }
            field => field,
        }
    }
}
