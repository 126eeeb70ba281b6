use crate::error::TetherError;
use crate::model::resource::ResourceIdentifier;
use crate::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Capability interface for duck-typed attribute access on a source record
pub trait Gettable {
    fn get(&self, name: &str) -> Option<Value>;
}

impl Gettable for Value {
    fn get(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|attrs| attrs.get(name)).cloned()
    }
}

impl Gettable for Map<String, Value> {
    fn get(&self, name: &str) -> Option<Value> { Map::get(self, name).cloned() }
}

impl Gettable for HashMap<String, Value> {
    fn get(&self, name: &str) -> Option<Value> { HashMap::get(self, name).cloned() }
}

/// Views an arbitrary serializable record through its attribute tree
pub fn to_record<T: Serialize>(record: &T) -> Result<Value> {
    Ok(serde_json::to_value(record)?)
}

/// Walks a dot-separated attribute path starting from `record`
pub fn resolve_path<G: Gettable + ?Sized>(record: &G, path: &str) -> Result<Value> {
    let mut segments = path.split('.');
    let mut current = match segments.next() {
        Some(head) => record.get(head).ok_or_else(|| missing(path, head))?,
        None => return Err(missing(path, path)),
    };
    for segment in segments {
        current = match current {
            Value::Object(ref attrs) => {
                attrs.get(segment).cloned().ok_or_else(|| missing(path, segment))?
            },
            _ => return Err(missing(path, segment)),
        };
    }
    Ok(current)
}

pub(crate) fn identifier(related: &Value, ty: &str, attribute: &str) -> Result<ResourceIdentifier> {
    match related.as_object().and_then(|attrs| attrs.get("id")) {
        Some(Value::String(id)) => Ok(ResourceIdentifier::new(ty, id)),
        Some(Value::Number(id)) => Ok(ResourceIdentifier::new(ty, id)),
        _ => Err(TetherError::MissingId(attribute.to_string())),
    }
}

fn missing(path: &str, segment: &str) -> TetherError {
    TetherError::MissingAttribute { path: path.to_string(), segment: segment.to_string() }
}
