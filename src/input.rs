//! Entry-stream input — the JSON boundary to the upstream extractor.
//!
//! The extractor hands over a flat JSON array of entries. Everything but
//! `tagname` and `name` is optional; absent fields default, so partially
//! filled streams from informal comment text parse without errors.

use crate::model::Entry;
use anyhow::{Context, Result};

/// Parse one entry stream.
pub fn parse_entries(input: &str) -> Result<Vec<Entry>> {
    serde_json::from_str(input).context("invalid entry stream")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Tagname;

    #[test]
    fn parses_minimal_entry() {
        let entries = parse_entries(r#"[{"tagname": "class", "name": "MyClass"}]"#).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tagname, Tagname::Class);
        assert_eq!(entries[0].name, "MyClass");
        assert!(entries[0].ty.is_none());
        assert!(entries[0].doc.is_empty());
        assert!(entries[0].modifiers.is_empty());
    }

    #[test]
    fn parses_renamed_fields() {
        let entries = parse_entries(
            r#"[{
                "tagname": "method",
                "name": "load",
                "return": {"tagname": "property", "name": "", "type": "String"},
                "modifiers": {"static": true}
            }]"#,
        )
        .unwrap();
        assert_eq!(entries[0].ret.as_ref().unwrap().ty.as_deref(), Some("String"));
        assert!(entries[0].modifiers.is_static);
    }

    #[test]
    fn parses_modifiers_and_params() {
        let entries = parse_entries(
            r#"[{
                "tagname": "cfg",
                "name": "foo",
                "type": "String",
                "doc": "Original comment.",
                "modifiers": {
                    "accessor": true,
                    "evented": true,
                    "deprecated": {"version": "2.0", "text": "Gone"}
                },
                "params": [{"tagname": "property", "name": "x"}]
            }]"#,
        )
        .unwrap();
        let e = &entries[0];
        assert!(e.modifiers.accessor);
        assert!(e.modifiers.evented);
        assert_eq!(
            e.modifiers.deprecated.as_ref().unwrap().version.as_deref(),
            Some("2.0")
        );
        assert_eq!(e.params.len(), 1);
    }

    #[test]
    fn rejects_non_array() {
        assert!(parse_entries(r#"{"tagname": "class"}"#).is_err());
        assert!(parse_entries("not json").is_err());
    }

    #[test]
    fn rejects_unknown_tagname() {
        assert!(parse_entries(r#"[{"tagname": "mixin", "name": "x"}]"#).is_err());
    }
}
