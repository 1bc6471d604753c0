//! Applicative forms
//!
//! A `Form<A>` describes an input form that produces a value of type `A`
//! once every field it is built from holds a valid value.
//!
//! # Concepts
//!
//! - **Field**: a leaf holding one raw text input, its validator, the last
//!   good typed value and the errors of the latest validation attempt.
//!
//! - **Form**: an interior node pairing a constructor with a registry of the
//!   fields it was built from. The registry is keyed by field *identity*
//!   (`FieldId`), never by name, so the same field value can be used as a
//!   lookup token anywhere the composed form travels.
//!
//! - **Combinators**: `map`, `ap` and `add_field` build larger forms out of
//!   smaller ones. Update operations never touch the value passed in; they
//!   return a new form whose registry shares every untouched entry.
//!
//! # Lifecycle
//!
//! ```text
//! text_field() / int_field() / of(x)
//!   ↓ (with_initial, with_validator)
//! form(constructor).add_field(..).add_field(..)
//!   ↓ (built once)
//! update_field(handle, raw)  →  new Form  →  update_field(..)  → ...
//! ```

mod constructors;
mod error;
mod field;
mod node;
mod registry;
mod selectors;
mod snapshot;
mod status;
mod update;

pub use constructors::{empty, form, initial, int_field, of, optional_text_field, text_field};
pub use error::{FormError, UpdateError};
pub use field::{FieldId, FieldState, FormValue, Validation, Validator};
pub use node::{ap, map, Derivation, Form};
pub use registry::{FormState, Registry};
pub use snapshot::{FieldSnapshot, FormSnapshot, NodeKind};
pub use status::FieldStatus;
