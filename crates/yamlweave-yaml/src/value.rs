//! The generic YAML value tree.

use hashlink::LinkedHashMap;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// An ordered mapping with unique string keys.
///
/// Insertion order is preserved for reproducibility; it carries no YAML
/// semantics of its own.
pub type Mapping = LinkedHashMap<String, YamlValue>;

/// A parsed YAML value.
///
/// This is the foreign parser's output shape: a finite tree over a fixed,
/// small set of value kinds. `Real` keeps its source text rather than an
/// `f64` so values survive round-trips unchanged, following `yaml-rust2`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum YamlValue {
    Null,
    Bool(bool),
    Integer(i64),
    Real(String),
    String(String),
    Sequence(Vec<YamlValue>),
    Mapping(Mapping),
}

impl YamlValue {
    /// The string content, if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            YamlValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer content, if this is an integer scalar.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            YamlValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            YamlValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Look up a mapping entry by key.
    pub fn get(&self, key: &str) -> Option<&YamlValue> {
        match self {
            YamlValue::Mapping(entries) => entries.get(key),
            _ => None,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, YamlValue::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, YamlValue::Sequence(_))
    }

    /// Number of children: entries of a mapping, items of a sequence,
    /// zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            YamlValue::Sequence(items) => items.len(),
            YamlValue::Mapping(entries) => entries.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Convert an owned `yaml-rust2` document into a [`YamlValue`].
    pub(crate) fn from_yaml(yaml: yaml_rust2::Yaml) -> Result<Self> {
        use yaml_rust2::Yaml;

        match yaml {
            Yaml::Null => Ok(YamlValue::Null),
            Yaml::Boolean(b) => Ok(YamlValue::Bool(b)),
            Yaml::Integer(i) => Ok(YamlValue::Integer(i)),
            Yaml::Real(r) => Ok(YamlValue::Real(r)),
            Yaml::String(s) => Ok(YamlValue::String(s)),
            Yaml::Array(items) => {
                let items = items
                    .into_iter()
                    .map(YamlValue::from_yaml)
                    .collect::<Result<Vec<_>>>()?;
                Ok(YamlValue::Sequence(items))
            }
            Yaml::Hash(hash) => {
                let mut entries = Mapping::with_capacity(hash.len());
                for (key, value) in hash {
                    entries.insert(scalar_key(key)?, YamlValue::from_yaml(value)?);
                }
                Ok(YamlValue::Mapping(entries))
            }
            // Aliases are resolved during loading; a surviving one is a
            // dangling anchor.
            Yaml::Alias(_) => Err(Error::InvalidStructure),
            Yaml::BadValue => Err(Error::InvalidStructure),
        }
    }
}

/// Render a scalar mapping key as its string form.
///
/// Collection keys have no string form and are rejected.
fn scalar_key(key: yaml_rust2::Yaml) -> Result<String> {
    use yaml_rust2::Yaml;

    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Integer(i) => Ok(i.to_string()),
        Yaml::Real(r) => Ok(r),
        Yaml::Boolean(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Array(_) => Err(Error::UnsupportedKey { kind: "sequence" }),
        Yaml::Hash(_) => Err(Error::UnsupportedKey { kind: "mapping" }),
        Yaml::Alias(_) | Yaml::BadValue => Err(Error::InvalidStructure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_key_stringifies_non_strings() {
        use yaml_rust2::Yaml;

        assert_eq!(scalar_key(Yaml::String("a".into())).unwrap(), "a");
        assert_eq!(scalar_key(Yaml::Integer(5)).unwrap(), "5");
        assert_eq!(scalar_key(Yaml::Boolean(true)).unwrap(), "true");
        assert_eq!(scalar_key(Yaml::Null).unwrap(), "null");
    }

    #[test]
    fn test_scalar_key_rejects_collections() {
        use yaml_rust2::Yaml;

        assert_eq!(
            scalar_key(Yaml::Array(vec![])),
            Err(Error::UnsupportedKey { kind: "sequence" })
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let mut entries = Mapping::new();
        entries.insert("a".to_string(), YamlValue::Integer(1));
        entries.insert(
            "b".to_string(),
            YamlValue::Sequence(vec![YamlValue::Bool(true), YamlValue::Null]),
        );
        let value = YamlValue::Mapping(entries);

        let json = serde_json::to_string(&value).unwrap();
        let back: YamlValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
