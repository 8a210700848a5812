use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Ordered tag list for About/Project records.
///
/// The backend is inconsistent about the wire shape: depending on the
/// endpoint and on how the record was created, `techStack` arrives as a JSON
/// array, a JSON-encoded string (`"[\"Rust\",\"Actix\"]"`), or a plain
/// comma-separated string. All three deserialize into the same canonical
/// list of non-empty trimmed strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechStack(pub Vec<String>);

impl TechStack {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Comma-joined form used to seed edit-form inputs.
    pub fn to_csv(&self) -> String {
        self.0.join(", ")
    }

    /// Parses a free-form text input (CSV) into a normalized stack.
    pub fn from_input(input: &str) -> Self {
        TechStack(split_csv(input))
    }
}

/// Normalizes any wire representation of a tag list into trimmed, non-empty
/// strings. Unrecognized shapes (numbers, objects, null) yield an empty list.
pub fn normalize_tech_stack(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        Value::String(raw) => match serde_json::from_str::<Value>(raw) {
            Ok(parsed @ Value::Array(_)) => normalize_tech_stack(&parsed),
            // Not JSON (or JSON of the wrong shape): treat as CSV.
            _ => split_csv(raw),
        },
        _ => Vec::new(),
    }
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Serialize for TechStack {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TechStack {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(TechStack(normalize_tech_stack(&value)))
    }
}
