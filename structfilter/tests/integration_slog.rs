//! Integration tests for the slog module.

#![cfg(feature = "slog")]

use std::{cell::RefCell, collections::HashMap, fmt::Arguments};

use serde_json::{Value as JsonValue, json};
use structfilter::{Policy, Record, project_record, slog::SlogFilteredExt};

#[derive(Debug, Clone, PartialEq)]
enum CapturedValue {
    Str(String),
    Serde(JsonValue),
}

// Captures serialized key-value pairs
struct CapturingSerializer {
    captured: RefCell<HashMap<String, CapturedValue>>,
}

impl CapturingSerializer {
    fn new() -> Self {
        Self {
            captured: RefCell::new(HashMap::new()),
        }
    }

    fn get(&self, key: &str) -> Option<CapturedValue> {
        self.captured.borrow().get(key).cloned()
    }
}

impl slog::Serializer for CapturingSerializer {
    fn emit_arguments(&mut self, key: slog::Key, val: &Arguments<'_>) -> slog::Result {
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Str(val.to_string()));
        Ok(())
    }

    fn emit_serde(&mut self, key: slog::Key, val: &dyn slog::SerdeValue) -> slog::Result {
        let json = serde_json::to_value(val.as_serde()).unwrap_or(JsonValue::Null);
        self.captured
            .borrow_mut()
            .insert(key.into(), CapturedValue::Serde(json));
        Ok(())
    }
}

fn serialize_to_capture<V: slog::Value>(value: &V, key: &'static str) -> CapturingSerializer {
    static RS: slog::RecordStatic<'static> = slog::record_static!(slog::Level::Info, "");
    let args = format_args!("");
    let record = slog::Record::new(&RS, &args, slog::b!());
    let mut serializer = CapturingSerializer::new();
    value.serialize(&record, key, &mut serializer).unwrap();
    serializer
}

#[derive(Clone, Debug, Default, Record)]
#[record(json)]
struct Login {
    #[tags(filter = "public")]
    user: String,
    #[tags(filter = "public, audit")]
    attempts: u32,
    #[tags(filter = "secret")]
    password: String,
}

fn login() -> Login {
    Login {
        user: "ada".into(),
        attempts: 3,
        password: "hunter2".into(),
    }
}

#[test]
fn emits_selected_fields_as_nested_json() {
    let value = login().slog_filtered(&Policy::keeping(["public"]));
    let serializer = serialize_to_capture(&value, "login");
    assert_eq!(
        serializer.get("login"),
        Some(CapturedValue::Serde(json!({ "user": "ada", "attempts": 3 })))
    );
}

#[test]
fn removed_labels_never_reach_the_serializer() {
    let policy = Policy::keeping(["public"]).removing(["audit"]);
    let serializer = serialize_to_capture(&login().slog_filtered(&policy), "login");
    let Some(CapturedValue::Serde(json)) = serializer.get("login") else {
        panic!("expected a nested value for 'login'");
    };
    assert_eq!(json, json!({ "user": "ada" }));
    assert!(!json.to_string().contains("hunter2"));
}

#[test]
fn projections_are_emitted_as_debug_text() {
    let view = project_record(&login(), &Policy::keeping(["secret"]));
    let serializer = serialize_to_capture(&view, "view");
    let Some(CapturedValue::Str(text)) = serializer.get("view") else {
        panic!("expected a text value for 'view'");
    };
    assert!(text.contains("hunter2"));
    assert!(!text.contains("ada"));
}
