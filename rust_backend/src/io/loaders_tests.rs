#[cfg(test)]
mod tests {
    use crate::core::domain::ShapeKind;
    use crate::io::loaders::{DocumentLoader, DocumentSource, DEFAULT_DOCUMENT_JSON};
    use crate::parsing::json_parser::{decode_area, ParseError};
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to create a temp JSON file
    fn create_temp_json_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_default_document_parses() {
        let document = DocumentLoader::default_document().unwrap();
        assert_eq!(document.area_count(), 3);

        let kinds: Vec<ShapeKind> = document
            .year1_areas()
            .iter()
            .map(|raw| decode_area(raw).unwrap().kind())
            .collect();
        assert_eq!(kinds, vec![ShapeKind::Box, ShapeKind::Circle, ShapeKind::Ellipse]);
    }

    #[test]
    fn test_default_document_is_cached() {
        let first = DocumentLoader::default_document().unwrap();
        let second = DocumentLoader::default_document().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_load_from_file() {
        let file = create_temp_json_file(
            r#"{"survey": "S03", "year1Areas": [{"type": "circle", "RA_center": 10.0,
                "Dec_center": -5.0, "radius": 1.0, "t_frac": 0.5}]}"#,
        );
        let document = DocumentLoader::load_from_file(file.path()).unwrap();
        assert_eq!(document.survey(), Some("S03"));
        assert_eq!(document.area_count(), 1);
    }

    #[test]
    fn test_load_default_prefers_given_file() {
        let file = create_temp_json_file(r#"{"year1Areas": []}"#);
        let document = DocumentLoader::load_default(Some(file.path())).unwrap();
        assert_eq!(document.area_count(), 0);

        let bundled = DocumentLoader::load_default(None).unwrap();
        assert_eq!(bundled.area_count(), 3);
    }

    #[test]
    fn test_load_from_str_error() {
        let result = DocumentLoader::load_from_str(r#"{"areas": []}"#);
        assert!(matches!(result, Err(ParseError::MissingAreas { .. })));
    }

    /// Test that a valid submission is used as-is
    #[test]
    fn test_resolve_valid_submission() {
        let outcome = DocumentLoader::resolve_submission(r#"{"year1Areas": [{"type": "hexagon"}]}"#)
            .unwrap();
        assert_eq!(outcome.source, DocumentSource::Submitted);
        assert!(outcome.rejected.is_none());
        assert_eq!(outcome.document.area_count(), 1);
    }

    /// Test that malformed JSON falls back to the bundled document as a whole
    #[test]
    fn test_resolve_malformed_submission_falls_back() {
        let outcome = DocumentLoader::resolve_submission(r#"{"year1Areas": [ {"type": "box","#)
            .unwrap();
        assert!(outcome.used_fallback());
        assert!(outcome.rejected.as_deref().unwrap().contains("Invalid JSON"));
        assert_eq!(
            &outcome.document,
            DocumentLoader::default_document().unwrap()
        );
    }

    /// Test that a document lacking year1Areas also falls back
    #[test]
    fn test_resolve_missing_key_falls_back() {
        let outcome = DocumentLoader::resolve_submission(r#"{"survey": "S02"}"#).unwrap();
        assert!(outcome.used_fallback());
        assert_eq!(outcome.document.area_count(), 3);
    }

    #[test]
    fn test_resolve_with_custom_fallback() {
        let fallback = DocumentLoader::load_from_str(r#"{"year1Areas": []}"#).unwrap();
        let outcome = DocumentLoader::resolve_with_fallback("", &fallback);
        assert!(outcome.used_fallback());
        assert_eq!(outcome.document, fallback);
    }

    /// Test that metadata of an unexpected type does not trigger the fallback
    #[test]
    fn test_resolve_keeps_numeric_survey() {
        let outcome = DocumentLoader::resolve_submission(
            r#"{"survey": 5, "year1Areas": [{"type": "circle", "RA_center": 10.0,
                "Dec_center": -5.0, "radius": 1.0, "t_frac": 0.5}]}"#,
        )
        .unwrap();
        assert_eq!(outcome.source, DocumentSource::Submitted);
        assert!(outcome.rejected.is_none());
        assert_eq!(outcome.document.area_count(), 1);
    }

    #[test]
    fn test_bundled_text_is_exposed() {
        assert!(DEFAULT_DOCUMENT_JSON.contains("year1Areas"));
    }
}
