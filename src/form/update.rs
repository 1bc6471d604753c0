//! Reading and updating fields of a built form
//!
//! Updates never modify the form they are called on. They return a new
//! form whose registry differs from the old one in exactly one entry.

use super::error::UpdateError;
use super::field::{FieldId, FormValue};
use super::node::Form;
use super::registry::FormState;

impl<A: FormValue> Form<A> {
    /// Current state of `field` inside this form, as a standalone field.
    ///
    /// # Returns
    ///
    /// `None` when this form is a leaf or `field` is not registered here.
    /// Also `None` when the handle is registered with a different value
    /// type than `B`: a field that was `map`ped after registration shares
    /// its handle with the registered entry but no longer its type. Such a
    /// field still updates normally through [`Form::update_field`].
    pub fn get_field_value<B: FormValue>(&self, field: &Form<B>) -> Option<Form<B>> {
        let Form::Form { state, .. } = self else {
            return None;
        };
        let id = field.id();
        state.fields.field::<B>(id).map(|field_state| Form::Field {
            id,
            state: field_state.clone(),
        })
    }

    /// Validate `raw` with the stored validator of `field`, returning the
    /// form with that one field replaced.
    pub fn update_field<B: FormValue>(&self, field: &Form<B>, raw: &str) -> Result<Self, UpdateError> {
        self.update_field_by_id(field.id(), raw)
    }

    /// Same as [`Form::update_field`], addressed by handle only
    pub fn update_field_by_id(&self, field_id: FieldId, raw: &str) -> Result<Self, UpdateError> {
        let Form::Form { id, state, produces } = self else {
            log::warn!("Cannot update field {}: form {} is a field", field_id, self.id());
            return Err(UpdateError::FormIsPrimitive(self.id()));
        };
        let Some(slot) = state.fields.slot(field_id) else {
            log::warn!("Cannot update field {}: not registered in form {}", field_id, id);
            return Err(UpdateError::UnknownField(field_id));
        };

        let updated = slot.revalidate(raw);
        log::debug!("Updated field {} in form {}: {:?}", field_id, id, updated.status());

        Ok(Form::Form {
            id: *id,
            state: FormState {
                is_submitted: state.is_submitted,
                fields: state.fields.with_slot(field_id, updated),
            },
            produces: produces.clone(),
        })
    }

    /// Apply several updates in order.
    ///
    /// Equivalent to chaining [`Form::update_field_by_id`]; the first error
    /// aborts the batch and nothing of it is returned.
    pub fn update_fields<I, S>(&self, updates: I) -> Result<Self, UpdateError>
    where
        I: IntoIterator<Item = (FieldId, S)>,
        S: AsRef<str>,
    {
        updates
            .into_iter()
            .try_fold(self.clone(), |form, (field_id, raw)| {
                form.update_field_by_id(field_id, raw.as_ref())
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::form::{form, int_field, text_field, FieldStatus, UpdateError};

    fn pair(name: String) -> impl Fn(f64) -> (String, f64) + Clone + Send + Sync + 'static {
        move |age| (name.clone(), age)
    }

    #[test]
    fn test_update_on_leaf_is_rejected() {
        let age = int_field();
        let result = age.update_field(&age, "1");
        assert_eq!(result.unwrap_err(), UpdateError::FormIsPrimitive(age.id()));
    }

    #[test]
    fn test_update_unknown_field_is_rejected() {
        let form = form(|n: f64| n).add_field(int_field());
        let stranger = int_field();
        let result = form.update_field(&stranger, "1");
        assert_eq!(result.unwrap_err(), UpdateError::UnknownField(stranger.id()));
    }

    #[test]
    fn test_update_leaves_original_untouched() {
        let age = int_field();
        let form = form(|n: f64| n).add_field(age.clone());
        let updated = form.update_field(&age, "27").unwrap();

        assert_eq!(form.validated(), None);
        assert!(form.is_pristine());
        assert_eq!(updated.validated(), Some(27.0));
        assert_eq!(updated.id(), form.id());
    }

    #[test]
    fn test_update_shares_untouched_siblings() {
        let name = text_field();
        let age = int_field();
        let form = form(pair).add_field(name.clone()).add_field(age.clone());
        let updated = form.update_field(&age, "27").unwrap();

        let before = form.form_state().unwrap().fields();
        let after = updated.form_state().unwrap().fields();
        assert!(Arc::ptr_eq(
            before.slot(name.id()).unwrap(),
            after.slot(name.id()).unwrap()
        ));
        assert!(!Arc::ptr_eq(
            before.slot(age.id()).unwrap(),
            after.slot(age.id()).unwrap()
        ));
    }

    #[test]
    fn test_get_field_value() {
        let name = text_field();
        let age = int_field();
        let form = form(pair).add_field(name.clone()).add_field(age.clone());
        let form = form.update_field(&name, "Kurt").unwrap();

        let current = form.get_field_value(&name).unwrap();
        assert!(current.is_field());
        assert_eq!(current.id(), name.id());
        assert_eq!(current.raw_value(), "Kurt");
        assert_eq!(current.status(), FieldStatus::Validated);

        assert!(form.get_field_value(&int_field()).is_none());
        assert!(name.get_field_value(&name).is_none());
    }

    #[test]
    fn test_get_field_value_of_mapped_handle() {
        let age = int_field();
        let form = form(|n: f64| n).add_field(age.clone());
        let rounded = age.clone().map(|n| n.round() as i64);

        assert_eq!(rounded.id(), age.id());
        assert!(form.get_field_value(&rounded).is_none());
        let updated = form.update_field(&rounded, "2.6").unwrap();
        assert_eq!(updated.get_field_value(&age).unwrap().validated(), Some(2.6));
    }

    #[test]
    fn test_update_fields_stops_at_first_error() {
        let age = int_field();
        let form = form(|n: f64| n).add_field(age.clone());
        let stranger = text_field();
        let result = form.update_fields([(age.id(), "1"), (stranger.id(), "x")]);
        assert_eq!(result.unwrap_err(), UpdateError::UnknownField(stranger.id()));
        assert!(form.is_pristine());
    }
}
