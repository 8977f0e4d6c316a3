//! Lenient deserialization helpers for hand-edited YAML documents.

use serde::{Deserialize, Deserializer};

/// A YAML scalar of any type. Editors write `size: 48pt`, `size: 48` and
/// `weight: 700` interchangeably, so text fields accept all of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Str(s) => s,
        }
    }

    fn into_count(self) -> Option<usize> {
        match self {
            Scalar::Int(n) if n > 0 => usize::try_from(n).ok(),
            Scalar::Float(f) if f >= 1.0 && f.fract() == 0.0 => Some(f as usize),
            Scalar::Str(s) => s.trim().parse::<usize>().ok().filter(|n| *n > 0),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Scalar>),
    One(Scalar),
}

/// Deserialize any scalar into a string; null becomes empty.
pub(crate) fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .unwrap_or_default())
}

/// Deserialize an optional scalar into an optional string.
pub(crate) fn opt_scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

/// Deserialize a positive count; zero, negatives and junk become `None`.
pub(crate) fn opt_count<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.and_then(Scalar::into_count))
}

/// Deserialize a list of scalars, accepting a lone scalar as a one-item list.
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::Many(items)) => items.into_iter().map(Scalar::into_string).collect(),
        Some(OneOrMany::One(item)) => vec![item.into_string()],
        None => Vec::new(),
    })
}
