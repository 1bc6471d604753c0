//! The `Form` tagged union and its combinators

use std::fmt;
use std::sync::Arc;

use super::field::{FieldId, FieldState, FormValue, Validation, Validator};
use super::registry::{FormState, Registry};
use super::status::FieldStatus;

/// Computes an interior form's value from its registry.
///
/// Evaluated on every read, so the value always reflects the registry the
/// form currently holds.
pub type Derivation<A> = Arc<dyn Fn(&Registry) -> Option<A> + Send + Sync>;

/// A form producing a value of type `A` once filled in.
///
/// Either a leaf field or an interior node holding a registry of the fields
/// it was built from. Both kinds support the same combinators.
#[derive(Clone)]
pub enum Form<A> {
    Field {
        id: FieldId,
        state: FieldState<A>,
    },
    Form {
        id: FieldId,
        state: FormState,
        produces: Derivation<A>,
    },
}

/// One side of an `ap`, flattened into registry terms
struct Parts<A> {
    id: FieldId,
    interior: bool,
    is_submitted: bool,
    fields: Registry,
    produces: Derivation<A>,
}

impl<A: FormValue> Form<A> {
    /// Handle identifying this form inside registries
    pub fn id(&self) -> FieldId {
        match self {
            Form::Field { id, .. } | Form::Form { id, .. } => *id,
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Form::Field { .. })
    }

    pub fn is_form(&self) -> bool {
        matches!(self, Form::Form { .. })
    }

    /// Leaf state, if this is a field
    pub fn field_state(&self) -> Option<&FieldState<A>> {
        match self {
            Form::Field { state, .. } => Some(state),
            Form::Form { .. } => None,
        }
    }

    /// Interior state, if this is a form
    pub fn form_state(&self) -> Option<&FormState> {
        match self {
            Form::Field { .. } => None,
            Form::Form { state, .. } => Some(state),
        }
    }

    /// Transform the produced value.
    ///
    /// A field keeps its raw text, errors and status; its value and
    /// validator are composed with `f`. An interior form keeps its registry
    /// as is (same storage). The handle is preserved either way.
    pub fn map<B, F>(self, f: F) -> Form<B>
    where
        B: FormValue,
        F: Fn(A) -> B + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        match self {
            Form::Field { id, state } => {
                let validator = state.validator;
                let g = f.clone();
                let validator: Validator<B> = Arc::new(move |raw: &str| validator(raw).map(|a| g(a)));
                Form::Field {
                    id,
                    state: FieldState {
                        raw: state.raw,
                        value: state.value.map(|a| f(a)),
                        validator,
                        errors: state.errors,
                        status: state.status,
                        is_constant: state.is_constant,
                    },
                }
            }
            Form::Form {
                id,
                state,
                produces,
            } => Form::Form {
                id,
                state,
                produces: Arc::new(move |fields: &Registry| produces(fields).map(|a| f(a))),
            },
        }
    }

    /// Copy of a field with its value preset. No-op on interior forms.
    pub fn with_initial(self, value: A) -> Self {
        match self {
            Form::Field { id, mut state } => {
                state.value = Some(value);
                Form::Field { id, state }
            }
            form => {
                log::debug!("with_initial ignored on interior form {}", form.id());
                form
            }
        }
    }

    /// Copy of a field with another validator. No-op on interior forms.
    pub fn with_validator<V>(self, validator: V) -> Self
    where
        V: Fn(&str) -> Validation<A> + Send + Sync + 'static,
    {
        match self {
            Form::Field { id, mut state } => {
                state.validator = Arc::new(validator);
                state.is_constant = false;
                Form::Field { id, state }
            }
            form => {
                log::debug!("with_validator ignored on interior form {}", form.id());
                form
            }
        }
    }

    /// Apply the constructor held by this form to `field`.
    ///
    /// Same as `ap(self, field)`, restricted to interior forms: schemas are
    /// built as `form(constructor).add_field(a).add_field(b)`.
    ///
    /// # Panics
    ///
    /// Panics when called on a leaf field. A leaf has no registry to add the
    /// field to, which means the schema itself was assembled wrongly.
    pub fn add_field<X, B>(self, field: Form<X>) -> Form<B>
    where
        A: Fn(X) -> B,
        X: FormValue,
        B: FormValue,
    {
        if let Form::Field { id, .. } = &self {
            panic!(
                "add_field called on field {}: only forms built with `form` can take fields",
                id
            );
        }
        ap(self, field)
    }

    fn into_parts(self) -> Parts<A> {
        match self {
            Form::Field { id, state } if state.is_constant() => {
                let value = state.value;
                Parts {
                    id,
                    interior: false,
                    is_submitted: false,
                    fields: Registry::new(),
                    produces: Arc::new(move |_: &Registry| value.clone()),
                }
            }
            Form::Field { id, state } => {
                let fields = Registry::singleton(id, Arc::new(state));
                Parts {
                    id,
                    interior: false,
                    is_submitted: false,
                    fields,
                    produces: Arc::new(move |fields: &Registry| {
                        fields.field::<A>(id).and_then(FieldState::contributed_value)
                    }),
                }
            }
            Form::Form {
                id,
                state,
                produces,
            } => Parts {
                id,
                interior: true,
                is_submitted: state.is_submitted,
                fields: state.fields,
                produces,
            },
        }
    }
}

/// Free-function form of `Form::map`
pub fn map<A, B, F>(fa: Form<A>, f: F) -> Form<B>
where
    A: FormValue,
    B: FormValue,
    F: Fn(A) -> B + Send + Sync + 'static,
{
    fa.map(f)
}

/// Combine a form holding a function with a form holding its argument.
///
/// Two leaves give a leaf under the argument's handle: both validators run
/// against the same raw text, errors accumulate, and the status is the max
/// of both. If either side is an interior form the result is an interior
/// form whose registry is the union of both sides. A leaf side is
/// registered under its own handle, except a constant built by `of`, which
/// only feeds its value in. `ap(of(g), fa)` therefore behaves like
/// `map(fa, g)`.
pub fn ap<A, B, F>(fab: Form<F>, fa: Form<A>) -> Form<B>
where
    A: FormValue,
    B: FormValue,
    F: Fn(A) -> B + FormValue,
{
    match (fab, fa) {
        (Form::Field { state: sf, .. }, Form::Field { id, state: sa }) => Form::Field {
            id,
            state: ap_fields(sf, sa),
        },
        (fab, fa) => {
            let left = fab.into_parts();
            let right = fa.into_parts();
            let id = if left.interior { left.id } else { right.id };
            let (pf, pa) = (left.produces, right.produces);
            Form::Form {
                id,
                state: FormState {
                    is_submitted: left.is_submitted || right.is_submitted,
                    fields: left.fields.union(&right.fields),
                },
                produces: Arc::new(move |fields: &Registry| {
                    let f = pf(fields)?;
                    let a = pa(fields)?;
                    Some(f(a))
                }),
            }
        }
    }
}

fn ap_fields<A, B, F>(sf: FieldState<F>, sa: FieldState<A>) -> FieldState<B>
where
    A: FormValue,
    B: FormValue,
    F: Fn(A) -> B + FormValue,
{
    let (vf, va) = (sf.validator, sa.validator);
    let validator: Validator<B> = Arc::new(move |raw: &str| match (vf(raw), va(raw)) {
        (Ok(f), Ok(a)) => Ok(f(a)),
        (Err(mut errors), Err(more)) => {
            errors.extend(more);
            Err(errors)
        }
        (Err(errors), Ok(_)) | (Ok(_), Err(errors)) => Err(errors),
    });
    let value = match (sf.value, sa.value) {
        (Some(f), Some(a)) => Some(f(a)),
        _ => None,
    };
    let mut errors = sf.errors;
    errors.extend(sa.errors);
    FieldState {
        raw: sa.raw,
        value,
        validator,
        errors,
        status: FieldStatus::combine(sf.status, sa.status),
        is_constant: sf.is_constant && sa.is_constant,
    }
}

impl<A: fmt::Debug + FormValue> fmt::Debug for Form<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Field { id, state } => f
                .debug_struct("Field")
                .field("id", id)
                .field("state", state)
                .finish(),
            Form::Form {
                id,
                state,
                produces,
            } => f
                .debug_struct("Form")
                .field("id", id)
                .field("state", state)
                .field("produces", &produces(&state.fields))
                .finish(),
        }
    }
}
