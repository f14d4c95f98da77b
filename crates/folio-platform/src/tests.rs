#[cfg(test)]
mod tests {
    use crate::answer::wire::*;
    use crate::handoff::MemoryHandoff;
    use folio_core::ports::HandoffPort;
    use folio_types::FolioError;

    // ─── Wire Format Tests ───────────────────────────────────

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(AskRequest { question: "hello" }).unwrap();
        assert_eq!(body, serde_json::json!({ "question": "hello" }));
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer(r#"{"answer":"Hi there"}"#).unwrap(), "Hi there");
    }

    #[test]
    fn test_parse_answer_missing_field_is_empty() {
        assert_eq!(parse_answer("{}").unwrap(), "");
        assert_eq!(parse_answer(r#"{"answer":null}"#).unwrap(), "");
    }

    #[test]
    fn test_parse_answer_malformed_json() {
        let result = parse_answer("<html>Bad gateway</html>");
        assert!(matches!(result, Err(FolioError::Serialization(_))));
    }

    #[test]
    fn test_classify_configuration_error() {
        let err = classify_failure(500, r#"{"error":"configuration_error","detail":"missing key"}"#);
        assert_eq!(err, FolioError::Config("missing key".to_string()));
        assert_eq!(err.to_string(), "configuration_error");
    }

    #[test]
    fn test_classify_provider_error_with_detail() {
        let err = classify_failure(500, r#"{"error":"provider_error","detail":"rate limited"}"#);
        assert_eq!(
            err,
            FolioError::Provider {
                status: 500,
                detail: "provider_error: rate limited".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_plain_text_body() {
        let err = classify_failure(502, "  Bad Gateway\n");
        assert_eq!(
            err,
            FolioError::Provider {
                status: 502,
                detail: "Bad Gateway".to_string(),
            }
        );
    }

    #[test]
    fn test_classify_empty_body() {
        let err = classify_failure(404, "");
        assert!(err.to_string().contains("unknown error"));
    }

    // ─── MemoryHandoff Tests ─────────────────────────────────

    #[test]
    fn test_memory_handoff_take_once() {
        let handoff = MemoryHandoff::new();
        handoff.put("/projects").unwrap();
        assert_eq!(handoff.take().unwrap(), Some("/projects".to_string()));
        assert_eq!(handoff.take().unwrap(), None);
    }

    #[test]
    fn test_memory_handoff_put_replaces() {
        let handoff = MemoryHandoff::new();
        handoff.put("first").unwrap();
        handoff.put("second").unwrap();
        assert_eq!(handoff.take().unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_memory_handoff_empty() {
        assert_eq!(MemoryHandoff::default().take().unwrap(), None);
    }
}
