use livenote_core::{Note, NoteKind, NoteKindParseError};

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let note = Note::new(NoteKind::Warning, "db", "slow query");

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["type"], "warning");
    assert_eq!(json["prefix"], "db");
    assert_eq!(json["message"], "slow query");

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}

#[test]
fn deserialize_defaults_missing_prefix() {
    let value = serde_json::json!({ "type": "app", "message": "hi" });
    let note: Note = serde_json::from_value(value).unwrap();
    assert_eq!(note.prefix, "");
    assert_eq!(note.render(), ": hi");
}

#[test]
fn deserialize_rejects_unknown_kind() {
    let value = serde_json::json!({ "type": "debug", "prefix": "", "message": "x" });
    assert!(serde_json::from_value::<Note>(value).is_err());
}

#[test]
fn kind_display_is_render_tag() {
    assert_eq!(NoteKind::Success.to_string(), "SUC");
    assert_eq!(NoteKind::App.to_string(), "");
}

#[test]
fn kind_parses_from_padded_tag() {
    assert_eq!(" ERR ".parse::<NoteKind>(), Ok(NoteKind::Error));
    assert_eq!("".parse::<NoteKind>(), Ok(NoteKind::App));
    assert_eq!(
        "WARN".parse::<NoteKind>(),
        Err(NoteKindParseError::UnknownTag("WARN".to_string()))
    );
}
