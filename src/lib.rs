// Formwork - Applicative Form Combinators

pub mod form;
pub mod validators;

pub use form::{
    ap, empty, form, initial, int_field, map, of, optional_text_field, text_field, FieldId,
    FieldSnapshot, FieldState, FieldStatus, Form, FormError, FormSnapshot, FormState, FormValue,
    NodeKind, Registry, UpdateError, Validation, Validator,
};
