use serde_json::{Map, Value};

use super::grid::normalize_key;

/// Worksheet selection by normalized title.
///
/// With no configured names every worksheet is selected; otherwise a
/// worksheet is selected iff its normalized title equals the normalization
/// of one of the configured names.
#[derive(Debug, Clone, Default)]
pub struct SheetFilter {
    names: Option<Vec<String>>,
}

impl SheetFilter {
    pub fn new(names: Option<Vec<String>>) -> Self {
        let names = names.map(|names| names.iter().map(|name| normalize_key(name)).collect());
        SheetFilter { names }
    }

    pub fn matches(&self, title: &str) -> bool {
        match &self.names {
            None => true,
            Some(names) => names.iter().any(|name| *name == normalize_key(title)),
        }
    }
}

/// Merge per-sheet results into the final document.
///
/// Sheets are keyed by normalized title. A document holding exactly one
/// sheet unwraps to that sheet's bare result — a deliberate API ergonomic:
/// callers selecting a single worksheet get its records directly.
pub fn assemble_document(results: Vec<(String, Value)>) -> Value {
    let document: Map<String, Value> = results
        .into_iter()
        .map(|(title, result)| (normalize_key(&title), result))
        .collect();

    match document.len() {
        1 => document
            .into_iter()
            .next()
            .map(|(_, result)| result)
            .unwrap_or(Value::Null),
        _ => Value::Object(document),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_filter_defaults_to_all_sheets() {
        let filter = SheetFilter::new(None);
        assert!(filter.matches("Anything"));
    }

    #[test]
    fn test_filter_matches_normalized_titles() {
        let filter = SheetFilter::new(Some(vec!["My Data".to_string()]));
        assert!(filter.matches("My Data"));
        assert!(filter.matches("my-data"));
        assert!(filter.matches("  MY DATA  "));
        assert!(!filter.matches("Other"));
    }

    #[test]
    fn test_filter_accepts_several_names() {
        let filter = SheetFilter::new(Some(vec!["One".to_string(), "Two".to_string()]));
        assert!(filter.matches("one"));
        assert!(filter.matches("two"));
        assert!(!filter.matches("three"));
    }

    #[test]
    fn test_single_sheet_unwraps_to_bare_result() {
        let records = json!([{ "name": "Ann" }]);
        let document = assemble_document(vec![("People".to_string(), records.clone())]);
        assert_eq!(document, records);
    }

    #[test]
    fn test_multiple_sheets_keyed_by_normalized_title() {
        let document = assemble_document(vec![
            ("First Sheet".to_string(), json!([1])),
            ("Second Sheet".to_string(), json!([2])),
        ]);

        assert_eq!(
            document,
            json!({ "firstSheet": [1], "secondSheet": [2] })
        );
    }

    #[test]
    fn test_no_sheets_yields_empty_object() {
        assert_eq!(assemble_document(Vec::new()), json!({}));
    }

    #[test]
    fn test_hash_collisions_stay_within_their_sheet() {
        // Both sheets hash a record under "Ann"; each keeps its own copy
        // under its own top-level key.
        let document = assemble_document(vec![
            ("A".to_string(), json!({ "Ann": { "age": 30 } })),
            ("B".to_string(), json!({ "Ann": { "age": 40 } })),
        ]);

        assert_eq!(
            document,
            json!({
                "a": { "Ann": { "age": 30 } },
                "b": { "Ann": { "age": 40 } },
            })
        );
    }
}
