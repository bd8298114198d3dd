//! Presence-tracking wrapper for partial updates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of a partial-update body.
///
/// Tells apart a key that was left out of the body (`Unset`), a key sent
/// as `null` (`Null`) and a key sent with a value. Fields of this type
/// need `#[serde(default)]` so that a missing key maps to `Unset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    Unset,
    Null,
    Value(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Unset
    }
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    /// Collapse into a change for a nullable column: `None` when unset,
    /// `Some(None)` when null.
    pub fn into_change(self) -> Option<Option<T>> {
        match self {
            Patch::Unset => None,
            Patch::Null => Some(None),
            Patch::Value(value) => Some(Some(value)),
        }
    }

    /// Collapse into a change for a non-nullable column. `Null` is treated
    /// as unset, so callers must reject it during validation.
    pub fn into_value(self) -> Option<T> {
        match self {
            Patch::Value(value) => Some(value),
            Patch::Unset | Patch::Null => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Patch::Value(value),
            None => Patch::Null,
        })
    }
}

/// `Unset` and `Null` both serialize as `null`.
impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(value) => serializer.serialize_some(value),
            Patch::Unset | Patch::Null => serializer.serialize_none(),
        }
    }
}

/// `deserialize_with` helper: an empty string counts as `null`.
pub fn empty_string_as_null<'de, D>(deserializer: D) -> Result<Patch<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Patch::<String>::deserialize(deserializer)? {
        Patch::Value(s) if s.is_empty() => Patch::Null,
        other => other,
    })
}

/// `deserialize_with` helper: an empty string counts as absent.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.is_empty()))
}
