use crate::engine::types::{EntityId, IncomingEventRow};
use serde_json::{Value, json};
use std::collections::HashMap;

pub struct EventRowFactory {
    params: HashMap<String, Value>,
}

impl EventRowFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("id".into(), json!(1));
        params.insert("name".into(), json!("Mike"));
        params.insert("exception".into(), json!("late"));
        Self { params }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    pub fn create(self) -> IncomingEventRow {
        IncomingEventRow {
            id: entity_id(&self.params["id"]),
            name: self.params["name"].as_str().unwrap().to_string(),
            exception: self.params["exception"].as_str().unwrap().to_string(),
        }
    }

    /// `count` copies of the configured row.
    pub fn create_list(self, count: usize) -> Vec<IncomingEventRow> {
        let row = self.create();
        vec![row; count]
    }
}

/// Shorthand for a literal batch of `(id, name, exception)` rows.
pub fn events(rows: &[(i64, &str, &str)]) -> Vec<IncomingEventRow> {
    rows.iter()
        .map(|(id, name, exception)| {
            EventRowFactory::new()
                .with("id", *id)
                .with("name", *name)
                .with("exception", *exception)
                .create()
        })
        .collect()
}

/// Ids may be given as JSON numbers or strings.
pub(crate) fn entity_id(value: &Value) -> EntityId {
    match value {
        Value::String(s) => EntityId::new(s.as_str()),
        other => EntityId::new(other.to_string()),
    }
}
