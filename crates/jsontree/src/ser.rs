//! Transparent `serde::Serialize` for value trees.
//!
//! A tree serializes as the JSON data it represents (maps, sequences and
//! scalars), not as a tagged enum, so any serde format sees plain data.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::{JsonValue, Node};

impl Serialize for JsonValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.0 {
            Node::Object(map) => {
                let map = map.borrow();
                let mut state = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    state.serialize_entry(key, value)?;
                }
                state.end()
            }
            Node::Array(items) => {
                let items = items.borrow();
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for value in items.iter() {
                    state.serialize_element(value)?;
                }
                state.end()
            }
            Node::String(s) => serializer.serialize_str(&s.borrow()),
            Node::Int(v) => serializer.serialize_i64(v.get()),
            Node::UInt(v) => serializer.serialize_u64(v.get()),
            Node::Float(v) => serializer.serialize_f64(v.get()),
            Node::Bool(v) => serializer.serialize_bool(v.get()),
            Node::Null => serializer.serialize_unit(),
        }
    }
}
