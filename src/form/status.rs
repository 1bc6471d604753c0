use serde::{Deserialize, Serialize};

/// How far a field has been exercised.
///
/// Ordered `Pristine < Validated < Dirty`: when statuses are combined the
/// most severe one wins, so a single dirty child makes its parent dirty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldStatus {
    /// No validation attempt has happened yet
    #[default]
    Pristine,

    /// The latest validation attempt succeeded
    Validated,

    /// The latest validation attempt failed
    Dirty,
}

impl FieldStatus {
    /// Combine two statuses (take the max)
    pub fn combine(self, other: FieldStatus) -> FieldStatus {
        self.max(other)
    }

    /// Combine any number of statuses; an empty set is pristine
    pub fn combine_all(statuses: impl IntoIterator<Item = FieldStatus>) -> FieldStatus {
        statuses
            .into_iter()
            .fold(FieldStatus::Pristine, FieldStatus::combine)
    }

    pub fn is_pristine(self) -> bool {
        self == FieldStatus::Pristine
    }

    pub fn is_dirty(self) -> bool {
        self == FieldStatus::Dirty
    }
}
