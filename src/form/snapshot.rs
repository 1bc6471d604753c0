//! Serializable read model of a form, for display and structural comparison
//!
//! Snapshots carry plain UUIDs rather than `FieldId`s: a snapshot read back
//! from JSON can be inspected, but cannot hand out handles to update a form.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::FormError;
use super::field::{FieldId, FieldSlot, FormValue};
use super::node::Form;
use super::status::FieldStatus;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Field,
    Form,
}

/// One field as seen by a rendering layer
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSnapshot {
    pub id: Uuid,
    pub raw: String,
    pub status: FieldStatus,
    pub errors: Vec<FormError>,
}

impl FieldSnapshot {
    /// Same raw text, status and errors, whatever the handle
    pub fn same_state(&self, other: &FieldSnapshot) -> bool {
        self.raw == other.raw && self.status == other.status && self.errors == other.errors
    }

    fn of_slot(id: FieldId, slot: &dyn FieldSlot) -> Self {
        Self {
            id: id.as_uuid(),
            raw: slot.raw().to_string(),
            status: slot.status(),
            errors: slot.errors().to_vec(),
        }
    }
}

/// Every field of a form, in registry order.
///
/// A leaf lists itself as its only field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    pub id: Uuid,
    pub kind: NodeKind,
    pub status: FieldStatus,
    pub is_submitted: bool,
    pub fields: Vec<FieldSnapshot>,
}

impl FormSnapshot {
    pub fn field(&self, id: FieldId) -> Option<&FieldSnapshot> {
        self.fields.iter().find(|field| field.id == id.as_uuid())
    }
}

impl<A: FormValue> Form<A> {
    pub fn snapshot(&self) -> FormSnapshot {
        match self {
            Form::Field { id, state } => FormSnapshot {
                id: id.as_uuid(),
                kind: NodeKind::Field,
                status: state.status,
                is_submitted: false,
                fields: vec![FieldSnapshot::of_slot(*id, state)],
            },
            Form::Form { id, state, .. } => FormSnapshot {
                id: id.as_uuid(),
                kind: NodeKind::Form,
                status: state.fields.status(),
                is_submitted: state.is_submitted,
                fields: state
                    .fields
                    .slots()
                    .map(|(field_id, slot)| FieldSnapshot::of_slot(field_id, slot.as_ref()))
                    .collect(),
            },
        }
    }
}
