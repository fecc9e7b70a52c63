use serde::{Deserialize, Deserializer};

/// Venue quote fields arrive either as decimal strings or as `null` when the
/// market has no value yet. Both decode to text; `null` becomes empty.
pub fn deser_string_or_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
