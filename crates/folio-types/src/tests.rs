#[cfg(test)]
mod tests {
    use crate::{FolioError, Result};
    use crate::command::*;
    use crate::config::*;
    use crate::event::*;
    use crate::message::*;
    use crate::payload::*;
    use crate::profile::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_new_message_user() {
        let draft = NewMessage::user("Hello");
        assert_eq!(draft.role, Role::User);
        assert_eq!(draft.text, "Hello");
        assert!(draft.payload.is_none());
    }

    #[test]
    fn test_new_message_card_has_empty_text() {
        let draft = NewMessage::card(Payload::Link {
            label: "Resume".to_string(),
            url: "/resume.pdf".to_string(),
        });
        assert_eq!(draft.role, Role::Assistant);
        assert!(draft.text.is_empty());
        assert!(draft.payload.is_some());
    }

    #[test]
    fn test_into_message_keeps_fields() {
        let draft = NewMessage::assistant("Hi there");
        let created = draft.created_at;
        let msg = draft.into_message(MessageId(7));
        assert_eq!(msg.id, MessageId(7));
        assert_eq!(msg.role, Role::Assistant);
        assert_eq!(msg.text, "Hi there");
        assert_eq!(msg.created_at, created);
        assert!(!msg.is_user());
    }

    #[test]
    fn test_message_ids_order() {
        assert!(MessageId(1) < MessageId(2));
    }

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Assistant).unwrap(), "\"assistant\"");
    }

    // ─── Payload Tests ───────────────────────────────────────

    #[test]
    fn test_payload_tagged_by_kind() {
        let payload = Payload::Projects { items: Vec::new() };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["kind"], "projects");
        assert!(json["items"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_payload_about_flattens_card() {
        let payload = Profile::default().payload_for(Intent::About);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["kind"], "about");
        assert_eq!(json["name"], "Harpreet Singh");
    }

    #[test]
    fn test_payload_unknown_kind_rejected() {
        let result: std::result::Result<Payload, _> =
            serde_json::from_str(r#"{"kind":"weather","city":"Paris"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_intent_matches_profile() {
        let profile = Profile::default();
        for intent in Intent::all() {
            assert_eq!(profile.payload_for(*intent).intent(), *intent);
        }
    }

    #[test]
    fn test_contact_social_links_skip_missing() {
        let card = ContactCard {
            email: "a@b.c".to_string(),
            phone: None,
            location: None,
            linkedin: None,
            github: Some("https://github.com/x".to_string()),
            twitter: None,
            website: Some("https://x.dev".to_string()),
        };
        let links = card.social_links();
        assert_eq!(
            links,
            vec![("GitHub", "https://github.com/x"), ("Website", "https://x.dev")]
        );
    }

    // ─── Command Catalog Tests ───────────────────────────────

    #[test]
    fn test_default_catalog_has_six_entries() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 6);
        let labels: Vec<&str> = catalog.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["/about", "/experience", "/projects", "/skills", "/contact", "/resume"]
        );
    }

    #[test]
    fn test_catalog_ids_match_labels() {
        for entry in default_catalog() {
            assert_eq!(entry.label, format!("/{}", entry.id));
            assert_eq!(entry.intent.id(), entry.id);
            assert!(!entry.description.is_empty());
        }
    }

    // ─── Profile Tests ───────────────────────────────────────

    #[test]
    fn test_default_profile_is_populated() {
        let profile = Profile::default();
        assert!(!profile.projects.is_empty());
        assert!(!profile.experience.is_empty());
        assert!(!profile.skills.is_empty());
        assert!(!profile.contact.email.is_empty());
    }

    #[test]
    fn test_resume_payload_is_link() {
        let profile = Profile::default();
        match profile.payload_for(Intent::Resume) {
            Payload::Link { url, .. } => assert_eq!(url, profile.resume_url),
            other => panic!("Expected link payload, got {:?}", other),
        }
    }

    #[test]
    fn test_default_resume_link_is_absolute() {
        match Profile::default().payload_for(Intent::Resume) {
            Payload::Link { url, .. } => {
                assert!(url.starts_with("https://"), "resume url = {}", url)
            }
            other => panic!("Expected link payload, got {:?}", other),
        }
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.answer.endpoint, "/api/ask");
        assert_eq!(config.answer.timeout_ms, 30_000);
        assert_eq!(config.handoff.storage_key, "initialQuery");
        assert!(config.palette.max_rows >= config.palette.min_rows);
    }

    #[test]
    fn test_config_partial_override() {
        let config =
            FolioConfig::from_json(r#"{"answer":{"endpoint":"https://example.com/ask"}}"#).unwrap();
        assert_eq!(config.answer.endpoint, "https://example.com/ask");
        assert_eq!(config.answer.timeout_ms, 30_000);
        assert_eq!(config.profile, Profile::default());
    }

    #[test]
    fn test_config_invalid_json() {
        let result = FolioConfig::from_json("{not json");
        assert!(matches!(result, Err(FolioError::Serialization(_))));
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_event_serializes() {
        let event = ChatEvent::PendingChanged { pending: true };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("PendingChanged"));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = FolioError::Provider {
            status: 500,
            detail: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Provider error (HTTP 500): boom");
        assert_eq!(FolioError::Timeout(3000).to_string(), "Timeout after 3000ms");
        assert_eq!(FolioError::Cancelled.to_string(), "Cancelled");
    }

    #[test]
    fn test_config_error_hides_detail() {
        let err = FolioError::Config("XAI_API_KEY missing".to_string());
        assert_eq!(err.to_string(), "configuration_error");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{").unwrap_err();
        let err: FolioError = serde_err.into();
        assert!(matches!(err, FolioError::Serialization(_)));
    }

    #[test]
    fn test_result_alias() {
        let ok: Result<u8> = Ok(1);
        assert_eq!(ok.unwrap(), 1);
    }
}
