//! Typed handles for each of the eight value kinds.
//!
//! A typed handle is obtained from a constructor (`JsonObject::new()`, …) or
//! by narrowing a [`JsonValue`] (`as_object()`, …). It shares the node with
//! every other handle to the same value: inserting through one object handle
//! is observed through all of them. Each handle converts back to a generic
//! [`JsonValue`] with `From`/[`into_value`](JsonObject::into_value).

use alloc::{
    collections::btree_map::Entry,
    rc::Rc,
    string::String,
    vec::Vec,
};
use core::{
    cell::{Cell, RefCell},
    fmt,
};

use crate::value::{self, JsonValue, Map, Node};

/// Handle to an object value: a string-keyed map of [`JsonValue`]s.
///
/// Keys are unique by construction: inserting an existing key is a no-op that
/// keeps the first value. Iteration and serialization follow the map's key
/// order, which is not insertion order.
///
/// # Examples
///
/// ```
/// use jsontree::JsonObject;
///
/// let object = JsonObject::new();
/// assert!(object.insert("a", 1_u64));
/// assert!(!object.insert("a", 2_u64));
/// assert_eq!(object.len(), 1);
/// assert_eq!(object.to_string(), r#"{"a":1}"#);
/// ```
#[derive(Clone, Debug)]
pub struct JsonObject(pub(crate) Rc<RefCell<Map>>);

impl JsonObject {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Map::new())))
    }

    /// Inserts `value` under `key` if the key is absent.
    ///
    /// Returns `true` when the pair was inserted and `false` when the key was
    /// already present, in which case the existing value is kept untouched.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<JsonValue>) -> bool {
        let key = key.into();
        let value = value.into();
        match self.0.borrow_mut().entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns a handle to the value under `key`, or `None` if absent.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<JsonValue> {
        self.0.borrow().get(key).cloned()
    }

    /// Returns `true` if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if the object has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Converts this handle back into a generic value sharing the same node.
    #[must_use]
    pub fn into_value(self) -> JsonValue {
        JsonValue::from(self)
    }
}

impl Default for JsonObject {
    fn default() -> Self {
        Self::new()
    }
}

impl From<JsonObject> for JsonValue {
    fn from(handle: JsonObject) -> Self {
        Self(Node::Object(handle.0))
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        value::write_object(&self.0.borrow(), f)
    }
}

/// Handle to an array value: an ordered sequence of [`JsonValue`]s.
///
/// # Examples
///
/// ```
/// use jsontree::JsonArray;
///
/// let array = JsonArray::new();
/// array.push("one");
/// array.push(2_u64);
/// assert_eq!(array.len(), 2);
/// assert!(array.get(2).is_none());
/// assert_eq!(array.to_string(), r#"["one",2]"#);
/// ```
#[derive(Clone, Debug)]
pub struct JsonArray(pub(crate) Rc<RefCell<Vec<JsonValue>>>);

impl JsonArray {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Vec::new())))
    }

    /// Appends `value` at the end.
    pub fn push(&self, value: impl Into<JsonValue>) {
        self.0.borrow_mut().push(value.into());
    }

    /// Returns a handle to the element at `index`, or `None` when the index
    /// is out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<JsonValue> {
        self.0.borrow().get(index).cloned()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Converts this handle back into a generic value sharing the same node.
    #[must_use]
    pub fn into_value(self) -> JsonValue {
        JsonValue::from(self)
    }
}

impl Default for JsonArray {
    fn default() -> Self {
        Self::new()
    }
}

impl From<JsonArray> for JsonValue {
    fn from(handle: JsonArray) -> Self {
        Self(Node::Array(handle.0))
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        value::write_array(&self.0.borrow(), f)
    }
}

/// Handle to a string value.
#[derive(Clone, Debug)]
pub struct JsonString(pub(crate) Rc<RefCell<String>>);

impl JsonString {
    /// Creates an empty string value.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(String::new())))
    }

    /// Replaces the whole text payload.
    pub fn set(&self, text: impl Into<String>) {
        *self.0.borrow_mut() = text.into();
    }

    /// Returns a copy of the text payload.
    #[must_use]
    pub fn get(&self) -> String {
        self.0.borrow().clone()
    }

    /// Converts this handle back into a generic value sharing the same node.
    #[must_use]
    pub fn into_value(self) -> JsonValue {
        JsonValue::from(self)
    }
}

impl Default for JsonString {
    fn default() -> Self {
        Self::new()
    }
}

impl From<JsonString> for JsonValue {
    fn from(handle: JsonString) -> Self {
        Self(Node::String(handle.0))
    }
}

impl fmt::Display for JsonString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.0.borrow())
    }
}

/// Handle to a signed 64-bit integer value.
#[derive(Clone, Debug)]
pub struct JsonInt(pub(crate) Rc<Cell<i64>>);

impl JsonInt {
    /// Creates a signed integer value of `0`.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(0)))
    }

    /// Replaces the payload.
    pub fn set(&self, n: i64) {
        self.0.set(n);
    }

    /// Returns the payload.
    #[must_use]
    pub fn get(&self) -> i64 {
        self.0.get()
    }

    /// Converts this handle back into a generic value sharing the same node.
    #[must_use]
    pub fn into_value(self) -> JsonValue {
        JsonValue::from(self)
    }
}

impl Default for JsonInt {
    fn default() -> Self {
        Self::new()
    }
}

impl From<JsonInt> for JsonValue {
    fn from(handle: JsonInt) -> Self {
        Self(Node::Int(handle.0))
    }
}

impl fmt::Display for JsonInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.get();
        write!(f, "{n}")
    }
}

/// Handle to an unsigned 64-bit integer value.
#[derive(Clone, Debug)]
pub struct JsonUInt(pub(crate) Rc<Cell<u64>>);

impl JsonUInt {
    /// Creates an unsigned integer value of `0`.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(0)))
    }

    /// Replaces the payload.
    pub fn set(&self, n: u64) {
        self.0.set(n);
    }

    /// Returns the payload.
    #[must_use]
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    /// Converts this handle back into a generic value sharing the same node.
    #[must_use]
    pub fn into_value(self) -> JsonValue {
        JsonValue::from(self)
    }
}

impl Default for JsonUInt {
    fn default() -> Self {
        Self::new()
    }
}

impl From<JsonUInt> for JsonValue {
    fn from(handle: JsonUInt) -> Self {
        Self(Node::UInt(handle.0))
    }
}

impl fmt::Display for JsonUInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.0.get();
        write!(f, "{n}")
    }
}

/// Handle to a double-precision float value.
#[derive(Clone, Debug)]
pub struct JsonFloat(pub(crate) Rc<Cell<f64>>);

impl JsonFloat {
    /// Creates a float value of `0.0`.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(0.0)))
    }

    /// Replaces the payload.
    pub fn set(&self, n: f64) {
        self.0.set(n);
    }

    /// Returns the payload.
    #[must_use]
    pub fn get(&self) -> f64 {
        self.0.get()
    }

    /// Converts this handle back into a generic value sharing the same node.
    #[must_use]
    pub fn into_value(self) -> JsonValue {
        JsonValue::from(self)
    }
}

impl Default for JsonFloat {
    fn default() -> Self {
        Self::new()
    }
}

impl From<JsonFloat> for JsonValue {
    fn from(handle: JsonFloat) -> Self {
        Self(Node::Float(handle.0))
    }
}

impl fmt::Display for JsonFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        value::write_float(self.0.get(), f)
    }
}

/// Handle to a boolean value.
#[derive(Clone, Debug)]
pub struct JsonBool(pub(crate) Rc<Cell<bool>>);

impl JsonBool {
    /// Creates a boolean value of `false`.
    #[must_use]
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(false)))
    }

    /// Replaces the payload.
    pub fn set(&self, b: bool) {
        self.0.set(b);
    }

    /// Returns the payload.
    #[must_use]
    pub fn get(&self) -> bool {
        self.0.get()
    }

    /// Converts this handle back into a generic value sharing the same node.
    #[must_use]
    pub fn into_value(self) -> JsonValue {
        JsonValue::from(self)
    }
}

impl Default for JsonBool {
    fn default() -> Self {
        Self::new()
    }
}

impl From<JsonBool> for JsonValue {
    fn from(handle: JsonBool) -> Self {
        Self(Node::Bool(handle.0))
    }
}

impl fmt::Display for JsonBool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0.get() { "true" } else { "false" })
    }
}

/// Handle to the `null` value. Carries no payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonNull;

impl JsonNull {
    /// Creates a null value.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Converts this handle back into a generic value.
    #[must_use]
    pub fn into_value(self) -> JsonValue {
        JsonValue::from(self)
    }
}

impl From<JsonNull> for JsonValue {
    fn from(_: JsonNull) -> Self {
        Self(Node::Null)
    }
}

impl fmt::Display for JsonNull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("null")
    }
}
