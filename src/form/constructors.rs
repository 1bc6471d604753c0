//! Entry points for building forms

use std::sync::Arc;

use super::field::{FieldId, FieldState, FormValue, Validation, Validator};
use super::node::Form;
use super::registry::{FormState, Registry};
use crate::validators::{accept_text, number_validator, optional_text};

/// A pristine field already holding `value`, whose validator always
/// succeeds with that same value.
pub fn of<A: FormValue>(value: A) -> Form<A> {
    let constant = value.clone();
    let validator: Validator<A> = Arc::new(move |_: &str| Ok(constant.clone()));
    let mut state = FieldState::new(validator);
    state.value = Some(value);
    state.is_constant = true;
    Form::Field {
        id: FieldId::mint(),
        state,
    }
}

/// Alias of [`of`]
pub fn initial<A: FormValue>(value: A) -> Form<A> {
    of(value)
}

/// A pristine field with no value yet
pub fn empty<A, V>(validator: V) -> Form<A>
where
    A: FormValue,
    V: Fn(&str) -> Validation<A> + Send + Sync + 'static,
{
    Form::Field {
        id: FieldId::mint(),
        state: FieldState::new(Arc::new(validator)),
    }
}

/// An interior form with an empty registry, producing `constructor`.
///
/// Fields are attached with [`Form::add_field`].
pub fn form<A: FormValue>(constructor: A) -> Form<A> {
    Form::Form {
        id: FieldId::mint(),
        state: FormState::default(),
        produces: Arc::new(move |_: &Registry| Some(constructor.clone())),
    }
}

/// Free text; every input is accepted
pub fn text_field() -> Form<String> {
    empty(accept_text)
}

/// Numeric input; any finite number is accepted
pub fn int_field() -> Form<f64> {
    empty(number_validator)
}

/// Free text where an empty input means "no value"
pub fn optional_text_field() -> Form<Option<String>> {
    empty(optional_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldStatus;

    #[test]
    fn test_of_is_pristine_with_value() {
        let field = of(5_i64);
        assert!(field.is_field());
        assert_eq!(field.validated(), Some(5));
        assert_eq!(field.status(), FieldStatus::Pristine);
        assert_eq!(field.raw_value(), "");
        let state = field.field_state().unwrap().validate("anything");
        assert_eq!(state.value(), Some(&5));
        assert_eq!(state.status(), FieldStatus::Validated);
        assert!(!state.is_constant());
        assert!(field.field_state().unwrap().is_constant());
    }

    #[test]
    fn test_empty_field_has_no_value() {
        let field = int_field();
        assert_eq!(field.validated(), None);
        assert!(field.is_pristine());
        assert!(!field.has_errors());
    }

    #[test]
    fn test_each_field_gets_its_own_handle() {
        assert_ne!(text_field().id(), text_field().id());
    }

    #[test]
    fn test_form_starts_with_empty_registry() {
        let form = form(|s: String| s);
        assert!(form.is_form());
        assert!(form.form_state().unwrap().fields().is_empty());
        assert!(form.is_pristine());
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_optional_text_field() {
        let field = optional_text_field();
        let state = field.field_state().unwrap();
        assert_eq!(state.validate("").value(), Some(&None));
        assert_eq!(state.validate("hi").value(), Some(&Some("hi".to_string())));
    }
}
