use serde::{Deserialize, Deserializer};

/// Deserialize `null` as `T::default()`.
///
/// Backend JSON files keep `null` for never-filled text fields.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
