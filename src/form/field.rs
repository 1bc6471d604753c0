//! Leaf field state and the handles that identify fields inside a registry

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use super::error::FormError;
use super::status::FieldStatus;

/// Values a form can carry.
///
/// Field values are cloned out of registries on every read, and registries
/// are shared between form values, hence the bounds.
pub trait FormValue: Clone + Send + Sync + 'static {}

impl<T: Clone + Send + Sync + 'static> FormValue for T {}

/// Opaque handle identifying a field (or form) inside a registry.
///
/// Minted once when the field is constructed; two structurally identical
/// fields never share a handle. Handles serialize but never deserialize, so
/// only the crate can make one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FieldId(Uuid);

impl FieldId {
    pub(crate) fn mint() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of running a validator against raw text
pub type Validation<A> = Result<A, Vec<FormError>>;

/// Pure, total function from raw text to a typed value or errors
pub type Validator<A> = Arc<dyn Fn(&str) -> Validation<A> + Send + Sync>;

/// State of a single input.
///
/// - `status == Dirty` iff the latest validation failed
/// - `status == Validated` iff the latest validation succeeded
/// - `status == Pristine` iff no validation has happened (the value may
///   still be preset through `with_initial`)
#[derive(Clone)]
pub struct FieldState<A> {
    pub(crate) raw: String,
    pub(crate) value: Option<A>,
    pub(crate) validator: Validator<A>,
    pub(crate) errors: Vec<FormError>,
    pub(crate) status: FieldStatus,
    /// Built by `of` and never validated or given a validator since.
    /// Such a field is a constant, not an input: it is never registered.
    pub(crate) is_constant: bool,
}

impl<A: FormValue> FieldState<A> {
    pub(crate) fn new(validator: Validator<A>) -> Self {
        Self {
            raw: String::new(),
            value: None,
            validator,
            errors: Vec::new(),
            status: FieldStatus::Pristine,
            is_constant: false,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> Option<&A> {
        self.value.as_ref()
    }

    pub fn errors(&self) -> &[FormError] {
        &self.errors
    }

    pub fn status(&self) -> FieldStatus {
        self.status
    }

    /// Run the validator against `raw` and return the resulting state.
    ///
    /// The raw text is always stored. On failure the last good value is
    /// kept (if there never was one, the value stays absent).
    pub fn validate(&self, raw: &str) -> Self {
        let (value, errors, status) = match (self.validator)(raw) {
            Ok(value) => (Some(value), Vec::new(), FieldStatus::Validated),
            Err(errors) => (self.value.clone(), errors, FieldStatus::Dirty),
        };
        Self {
            raw: raw.to_string(),
            value,
            validator: self.validator.clone(),
            errors,
            status,
            is_constant: false,
        }
    }

    pub(crate) fn is_constant(&self) -> bool {
        self.is_constant && self.status.is_pristine()
    }

    /// Value this field contributes to an enclosing form's derived value
    pub(crate) fn contributed_value(&self) -> Option<A> {
        if self.status.is_dirty() {
            None
        } else {
            self.value.clone()
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for FieldState<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldState")
            .field("raw", &self.raw)
            .field("value", &self.value)
            .field("errors", &self.errors)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Type-erased view of a registered field.
///
/// Registries hold fields of many value types side by side; updates only
/// need the raw text, so they go through this trait and never need to know
/// `A`. Typed reads downcast back to `FieldState<A>`.
pub(crate) trait FieldSlot: Send + Sync {
    fn raw(&self) -> &str;

    fn errors(&self) -> &[FormError];

    fn status(&self) -> FieldStatus;

    /// Validate new raw text, producing a fresh slot
    fn revalidate(&self, raw: &str) -> Arc<dyn FieldSlot>;

    fn as_any(&self) -> &dyn Any;
}

impl<A: FormValue> FieldSlot for FieldState<A> {
    fn raw(&self) -> &str {
        &self.raw
    }

    fn errors(&self) -> &[FormError] {
        &self.errors
    }

    fn status(&self) -> FieldStatus {
        self.status
    }

    fn revalidate(&self, raw: &str) -> Arc<dyn FieldSlot> {
        Arc::new(self.validate(raw))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
