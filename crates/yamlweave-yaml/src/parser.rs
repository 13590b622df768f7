//! YAML parsing entry point.

use yaml_rust2::YamlLoader;

use crate::{Error, Result, YamlValue};

/// Parse YAML text into a [`YamlValue`] tree.
///
/// This parses a single YAML document. If the input contains multiple
/// documents, only the first one is returned.
///
/// # Example
///
/// ```rust
/// use yamlweave_yaml::parse;
///
/// let value = parse("title: My Document").unwrap();
/// assert!(value.is_mapping());
/// ```
///
/// # Errors
///
/// Returns an error if the text is not valid YAML or contains no document.
pub fn parse(text: &str) -> Result<YamlValue> {
    let mut documents = YamlLoader::load_from_str(text).map_err(Error::from)?;
    if documents.is_empty() {
        return Err(Error::EmptyDocument);
    }
    YamlValue::from_yaml(documents.remove(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scalar() {
        let value = parse("hello").unwrap();
        assert_eq!(value.as_str(), Some("hello"));
    }

    #[test]
    fn test_parse_integer() {
        let value = parse("42").unwrap();
        assert_eq!(value.as_i64(), Some(42));
    }

    #[test]
    fn test_parse_real_keeps_source_text() {
        let value = parse("1.50").unwrap();
        assert_eq!(value, YamlValue::Real("1.50".to_string()));
    }

    #[test]
    fn test_parse_boolean() {
        let value = parse("true").unwrap();
        assert_eq!(value.as_bool(), Some(true));
    }

    #[test]
    fn test_parse_null() {
        assert_eq!(parse("~").unwrap(), YamlValue::Null);
        assert_eq!(parse("null").unwrap(), YamlValue::Null);
    }

    #[test]
    fn test_parse_sequence() {
        let value = parse("[1, 2, 3]").unwrap();
        assert!(value.is_sequence());
        assert_eq!(value.len(), 3);

        match &value {
            YamlValue::Sequence(items) => {
                assert_eq!(items[0].as_i64(), Some(1));
                assert_eq!(items[2].as_i64(), Some(3));
            }
            other => panic!("expected sequence, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_mapping_preserves_order() {
        let value = parse("title: My Document\nauthor: John Doe").unwrap();
        assert!(value.is_mapping());
        assert_eq!(value.len(), 2);

        match &value {
            YamlValue::Mapping(entries) => {
                let keys: Vec<&str> = entries.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["title", "author"]);
            }
            other => panic!("expected mapping, got {other:?}"),
        }
        assert_eq!(value.get("author").unwrap().as_str(), Some("John Doe"));
    }

    #[test]
    fn test_parse_nested_structure() {
        let value = parse(
            r#"
project:
  title: My Project
  authors:
    - Alice
    - Bob
"#,
        )
        .unwrap();

        let project = value.get("project").unwrap();
        assert!(project.is_mapping());

        let authors = project.get("authors").unwrap();
        assert!(authors.is_sequence());
        assert_eq!(authors.len(), 2);
    }

    #[test]
    fn test_parse_integer_key_stringified() {
        let value = parse("1: one").unwrap();
        assert_eq!(value.get("1").unwrap().as_str(), Some("one"));
    }

    #[test]
    fn test_parse_resolves_anchors() {
        let value = parse("a: &anchor 1\nb: *anchor").unwrap();
        assert_eq!(value.get("b").unwrap().as_i64(), Some(1));
    }

    #[test]
    fn test_parse_first_document_only() {
        let value = parse("first: 1\n---\nsecond: 2").unwrap();
        assert!(value.get("first").is_some());
        assert!(value.get("second").is_none());
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse(""), Err(Error::EmptyDocument));
        assert_eq!(parse("# just a comment"), Err(Error::EmptyDocument));
    }

    #[test]
    fn test_parse_error_carries_location() {
        let err = parse("{ unclosed").unwrap_err();
        match err {
            Error::Parse { message, line, col } => {
                assert!(!message.is_empty());
                assert!(line >= 1);
                assert!(col >= 1);
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_is_deterministic() {
        let first = parse("{ unclosed");
        let second = parse("{ unclosed");
        assert!(first.is_err());
        assert_eq!(first, second);
    }
}
