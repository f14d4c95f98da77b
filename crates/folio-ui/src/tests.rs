#[cfg(test)]
mod tests {
    use folio_core::suggest::PaletteSignal;
    use folio_types::command::{CommandSuggestion, Intent};
    use folio_types::event::ChatEvent;
    use folio_types::message::{MessageId, NewMessage};

    use crate::cards::{contact_lines, highlight_spans};
    use folio_types::payload::ContactCard;
    use crate::panels::search::{edit_actions, signal_actions, SearchAction};
    use crate::state::{UiState, View};

    // ─── UiState ─────────────────────────────────────────────

    #[test]
    fn test_starts_on_landing_and_ready() {
        let state = UiState::new();
        assert_eq!(state.view, View::Landing);
        assert_eq!(state.status_text, "Ready");
        assert!(!state.is_busy());
    }

    #[test]
    fn test_pending_events_drive_status() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::PendingChanged { pending: true }]);
        assert!(state.is_busy());
        assert_eq!(state.status_text, "Thinking...");

        state.process_events(vec![ChatEvent::PendingChanged { pending: false }]);
        assert!(!state.is_busy());
        assert_eq!(state.status_text, "Ready");
    }

    #[test]
    fn test_error_survives_end_of_pending() {
        let mut state = UiState::new();
        state.process_events(vec![
            ChatEvent::PendingChanged { pending: true },
            ChatEvent::Error { message: "offline".to_string() },
            ChatEvent::PendingChanged { pending: false },
        ]);
        assert_eq!(state.status_text, "Error: offline");
        assert_eq!(state.last_error(), Some("offline"));

        // The next request clears it
        state.process_events(vec![ChatEvent::PendingChanged { pending: true }]);
        assert_eq!(state.last_error(), None);
    }

    #[test]
    fn test_cleared_resets_status() {
        let mut state = UiState::new();
        state.process_events(vec![
            ChatEvent::PendingChanged { pending: true },
            ChatEvent::Cleared { conversation_id: "c2".to_string() },
        ]);
        assert!(!state.is_busy());
        assert_eq!(state.status_text, "New chat");
    }

    #[test]
    fn test_message_events_leave_status_alone() {
        let mut state = UiState::new();
        let message = NewMessage::user("hi").into_message(MessageId(1));
        state.process_events(vec![ChatEvent::MessageAppended { message }]);
        assert_eq!(state.status_text, "Ready");
    }

    // ─── Landing ─────────────────────────────────────────────

    #[test]
    fn test_landing_submit_switches_to_chat() {
        let mut state = UiState::new();
        state.apply_landing(SearchAction::Changed("  what do you build?  ".to_string()));
        let question = state.apply_landing(SearchAction::Submit("  what do you build?  ".to_string()));
        assert_eq!(question.as_deref(), Some("what do you build?"));
        assert_eq!(state.view, View::Chat);
        assert!(state.landing_input.is_empty());
    }

    #[test]
    fn test_landing_blank_submit_stays() {
        let mut state = UiState::new();
        assert_eq!(state.apply_landing(SearchAction::Submit("   ".to_string())), None);
        assert_eq!(state.view, View::Landing);
    }

    #[test]
    fn test_landing_palette_toggles() {
        let mut state = UiState::new();
        state.apply_landing(SearchAction::Open);
        assert!(state.landing_palette_open);
        state.apply_landing(SearchAction::Close);
        assert!(!state.landing_palette_open);
    }

    #[test]
    fn test_go_home_closes_palette() {
        let mut state = UiState::new();
        state.apply_landing(SearchAction::Submit("/about".to_string()));
        state.landing_palette_open = true;
        state.go_home();
        assert_eq!(state.view, View::Landing);
        assert!(!state.landing_palette_open);
    }

    // ─── Search bar ──────────────────────────────────────────

    #[test]
    fn test_slash_into_empty_buffer_opens_palette() {
        assert_eq!(
            edit_actions("", "/"),
            vec![SearchAction::Open, SearchAction::Changed("/".to_string())]
        );
    }

    #[test]
    fn test_other_edits_only_report_change() {
        assert_eq!(edit_actions("/", "/p"), vec![SearchAction::Changed("/p".to_string())]);
        assert_eq!(edit_actions("a", "a/"), vec![SearchAction::Changed("a/".to_string())]);
    }

    #[test]
    fn test_palette_pick_submits_label() {
        let item = CommandSuggestion::for_intent(Intent::Skills);
        assert_eq!(
            signal_actions(PaletteSignal::Selected(item), true),
            Some(SearchAction::Submit("/skills".to_string()))
        );
        assert_eq!(signal_actions(PaletteSignal::Close, true), Some(SearchAction::Close));
        assert_eq!(signal_actions(PaletteSignal::None, true), None);
    }

    #[test]
    fn test_palette_pick_while_busy_closes() {
        let item = CommandSuggestion::for_intent(Intent::Projects);
        assert_eq!(
            signal_actions(PaletteSignal::Selected(item), false),
            Some(SearchAction::Close)
        );
        assert_eq!(signal_actions(PaletteSignal::None, false), None);
    }

    // ─── Cards ───────────────────────────────────────────────

    #[test]
    fn test_highlight_spans_split_summary() {
        let words = vec!["Rust".to_string(), "WASM".to_string()];
        let spans = highlight_spans("I write Rust for WASM targets", &words);
        assert_eq!(
            spans,
            vec![
                ("I write ", false),
                ("Rust", true),
                (" for ", false),
                ("WASM", true),
                (" targets", false),
            ]
        );
    }

    #[test]
    fn test_highlight_spans_without_matches() {
        let spans = highlight_spans("plain text", &["".to_string(), "Go".to_string()]);
        assert_eq!(spans, vec![("plain text", false)]);
    }

    #[test]
    fn test_contact_lines_offer_email_and_phone() {
        let card = ContactCard {
            email: "me@example.com".to_string(),
            phone: Some("+1 555 0100".to_string()),
            location: Some("Toronto".to_string()),
            linkedin: None,
            github: None,
            twitter: None,
            website: None,
        };
        let lines = contact_lines(&card);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "Email");
        assert_eq!(lines[0].value, "me@example.com");
        assert_eq!(lines[0].href, "mailto:me@example.com");
        assert_eq!(lines[1].label, "Phone");
        assert_eq!(lines[1].href, "tel:+1 555 0100");
    }

    #[test]
    fn test_contact_lines_without_phone() {
        let card = ContactCard {
            email: "me@example.com".to_string(),
            phone: None,
            location: None,
            linkedin: None,
            github: None,
            twitter: None,
            website: None,
        };
        let lines = contact_lines(&card);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].label, "Email");
    }
}
