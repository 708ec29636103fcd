//! Batch files.
//!
//! A batch is either a bare JSON array of line items or a request object
//! whose `items` may be missing or `null`:
//!
//! ```json
//! [{ "productCode": "DoveSoap", "quantity": 5, "unitPrice": "39.99" }]
//! { "items": [{ "productCode": "DoveSoap", "quantity": 5, "unitPrice": "39.99" }] }
//! { "items": null }
//! ```
//!
//! Missing and `null` lists both become an empty batch.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use till_core::LineItem;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BatchFile {
    Items(Vec<LineItem>),
    Request {
        #[serde(default)]
        items: Option<Vec<LineItem>>,
    },
}

/// Parses batch JSON into line items.
pub fn parse(json: &str) -> serde_json::Result<Vec<LineItem>> {
    let items = match serde_json::from_str(json)? {
        BatchFile::Items(items) => items,
        BatchFile::Request { items } => items.unwrap_or_default(),
    };
    Ok(items)
}

/// Reads and parses a batch file.
pub fn load(path: &Path) -> anyhow::Result<Vec<LineItem>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading batch file {}", path.display()))?;

    parse(&json).with_context(|| format!("parsing batch file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use till_core::Money;

    use super::*;

    #[test]
    fn test_parse_bare_array() {
        let items = parse(r#"[{"productCode":"DoveSoap","quantity":5,"unitPrice":"39.99"}]"#).unwrap();
        assert_eq!(items, vec![LineItem::new("DoveSoap", 5, Money::from_cents(3999))]);
    }

    #[test]
    fn test_parse_request_object() {
        let items = parse(
            r#"{"items":[{"productCode":"AxeDeos","quantity":2,"unitPrice":"99.99"}]}"#,
        )
        .unwrap();
        assert_eq!(items, vec![LineItem::new("AxeDeos", 2, Money::from_cents(9999))]);
    }

    #[test]
    fn test_parse_absent_items_is_empty() {
        assert!(parse(r#"{"items":null}"#).unwrap().is_empty());
        assert!(parse("{}").unwrap().is_empty());
        assert!(parse("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse(r#"[{"productCode":"DoveSoap"}]"#).is_err());
        assert!(parse("not json").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"productCode":"DoveSoap","quantity":1,"unitPrice":"0.565"}}]"#
        )
        .unwrap();

        let items = load(file.path()).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].unit_price, "0.565".parse::<Money>().unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("/nonexistent/batch.json")).unwrap_err();
        assert!(err.to_string().contains("reading batch file"));
    }
}
