pub mod authors;
pub mod health;
pub mod posts;

use serde_json::{Map, Value};

/// JSON object holding only the fields that were provided
pub(crate) fn sparse_body(fields: &[(&str, Option<String>)]) -> Value {
    let mut body = Map::new();
    for (key, value) in fields {
        if let Some(value) = value {
            body.insert((*key).to_string(), Value::String(value.clone()));
        }
    }
    Value::Object(body)
}
