//! WASM-target tests for folio-platform (Node.js runtime).
//!
//! Covers the memory handoff and the wire helpers under
//! wasm32-unknown-unknown via `wasm-pack test --node`.
//!
//! localStorage and fetch need a browser and are not exercised here.

use wasm_bindgen_test::*;

use folio_core::ports::HandoffPort;
use folio_platform::answer::wire::{classify_failure, parse_answer};
use folio_platform::handoff::{detect_handoff, MemoryHandoff};
use folio_types::FolioError;

#[wasm_bindgen_test]
fn memory_handoff_round_trip() {
    let handoff = MemoryHandoff::new();
    handoff.put("hello").unwrap();
    assert_eq!(handoff.take().unwrap(), Some("hello".to_string()));
    assert!(handoff.take().unwrap().is_none());
}

#[wasm_bindgen_test]
fn detect_handoff_falls_back_without_window() {
    // Node has no window, so the memory slot is chosen
    let handoff = detect_handoff("initialQuery");
    handoff.put("/skills").unwrap();
    assert_eq!(handoff.take().unwrap(), Some("/skills".to_string()));
}

#[wasm_bindgen_test]
fn wire_answer_and_failure() {
    assert_eq!(parse_answer(r#"{"answer":"ok"}"#).unwrap(), "ok");
    assert!(matches!(
        classify_failure(500, r#"{"error":"configuration_error"}"#),
        FolioError::Config(_)
    ));
}
