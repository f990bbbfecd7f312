//! JSON schema builders for MCP tools.

use serde_json::{Map, Value};

/// Build the schema describing the `add_note` tool input.
pub(crate) fn add_note_input_schema() -> Map<String, Value> {
    let mut properties = Map::new();
    properties.insert(
        "message".into(),
        string_schema("Single line of text to append to the sticky note file"),
    );

    finalize_object_schema(properties, &["message"])
}

/// Schema for tools that accept no arguments.
pub(crate) fn empty_object_schema() -> Map<String, Value> {
    finalize_object_schema(Map::new(), &[])
}

fn string_schema(description: &str) -> Value {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("string".into()));
    schema.insert("description".into(), Value::String(description.into()));
    Value::Object(schema)
}

fn finalize_object_schema(properties: Map<String, Value>, required: &[&str]) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("type".into(), Value::String("object".into()));
    schema.insert("properties".into(), Value::Object(properties));
    if !required.is_empty() {
        schema.insert(
            "required".into(),
            Value::Array(
                required
                    .iter()
                    .map(|&key| Value::String(key.into()))
                    .collect(),
            ),
        );
    }
    schema.insert("additionalProperties".into(), Value::Bool(false));
    schema
}
