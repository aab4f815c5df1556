pub use article::*;
pub use history_event::*;
pub use image::*;

mod article;
mod history_event;
mod image;

use serde::{Deserialize, Deserializer};

/// The backend sends `null` for absent strings and lists as often as it omits
/// them; both read as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
