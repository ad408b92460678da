//! The tagged value tree.
//!
//! This module defines [`JsonValue`], the generic handle to a node of a JSON
//! document, and [`Kind`], the closed set of node kinds. Handles are cheap to
//! clone: a node is reference-counted and may be linked into several parents
//! at once, so a document is a DAG of shared nodes rather than a strict tree.
//! Mutating a payload through one handle is visible through every handle that
//! shares the node.

use alloc::{collections::BTreeMap, rc::Rc, string::String, vec::Vec};
use core::{
    cell::{Cell, RefCell},
    fmt,
};

use crate::{
    error::TypeMismatch,
    handles::{JsonArray, JsonBool, JsonFloat, JsonInt, JsonNull, JsonObject, JsonString, JsonUInt},
};

pub(crate) type Map = BTreeMap<String, JsonValue>;

/// Node storage. The variant is fixed at construction; payloads sit behind
/// cells so that every handle sharing the node observes mutation.
#[derive(Clone, Debug)]
pub(crate) enum Node {
    Object(Rc<RefCell<Map>>),
    Array(Rc<RefCell<Vec<JsonValue>>>),
    String(Rc<RefCell<String>>),
    Int(Rc<Cell<i64>>),
    UInt(Rc<Cell<u64>>),
    Float(Rc<Cell<f64>>),
    Bool(Rc<Cell<bool>>),
    Null,
}

/// The discriminant of a [`JsonValue`].
///
/// Exactly one kind is active per value and it never changes after
/// construction. Numbers are split into three kinds so that callers can tell
/// a signed integer from an unsigned integer from a float without inspecting
/// the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    /// A string-keyed mapping of values.
    Object,
    /// An ordered sequence of values.
    Array,
    /// A text payload.
    String,
    /// A 64-bit signed integer; only negative numbers parse to this kind.
    Int,
    /// A 64-bit unsigned integer.
    UInt,
    /// A double-precision float.
    Float,
    /// `true` or `false`.
    Bool,
    /// `null`.
    Null,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Int => "integer",
            Kind::UInt => "unsigned integer",
            Kind::Float => "float",
            Kind::Bool => "boolean",
            Kind::Null => "null",
        })
    }
}

/// A reference-counted handle to one node of a JSON document.
///
/// A `JsonValue` is produced by [`parse`](crate::parse), by one of the typed
/// constructors ([`JsonObject::new`], [`JsonArray::new`], …) or by a `From`
/// conversion from a plain Rust value. Cloning a handle shares the node; the
/// node is freed when its last handle is dropped.
///
/// # Examples
///
/// ```
/// use jsontree::{JsonObject, JsonValue};
///
/// let object = JsonObject::new();
/// object.insert("key", "value");
/// let value = JsonValue::from(object);
/// assert_eq!(value.to_string(), r#"{"key":"value"}"#);
/// ```
#[derive(Clone, Debug)]
pub struct JsonValue(pub(crate) Node);

impl JsonValue {
    /// Returns the kind of the underlying node.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match &self.0 {
            Node::Object(_) => Kind::Object,
            Node::Array(_) => Kind::Array,
            Node::String(_) => Kind::String,
            Node::Int(_) => Kind::Int,
            Node::UInt(_) => Kind::UInt,
            Node::Float(_) => Kind::Float,
            Node::Bool(_) => Kind::Bool,
            Node::Null => Kind::Null,
        }
    }

    /// Returns `true` if the value is an object.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::JsonObject;
    ///
    /// let value = JsonObject::new().into_value();
    /// assert!(value.is_object());
    /// assert!(!value.is_array());
    /// ```
    #[must_use]
    pub fn is_object(&self) -> bool {
        self.kind() == Kind::Object
    }

    /// Returns `true` if the value is an array.
    #[must_use]
    pub fn is_array(&self) -> bool {
        self.kind() == Kind::Array
    }

    /// Returns `true` if the value is a string.
    #[must_use]
    pub fn is_string(&self) -> bool {
        self.kind() == Kind::String
    }

    /// Returns `true` if the value is a signed integer.
    #[must_use]
    pub fn is_int(&self) -> bool {
        self.kind() == Kind::Int
    }

    /// Returns `true` if the value is an unsigned integer.
    #[must_use]
    pub fn is_uint(&self) -> bool {
        self.kind() == Kind::UInt
    }

    /// Returns `true` if the value is a float.
    #[must_use]
    pub fn is_float(&self) -> bool {
        self.kind() == Kind::Float
    }

    /// Returns `true` if the value is a boolean.
    #[must_use]
    pub fn is_bool(&self) -> bool {
        self.kind() == Kind::Bool
    }

    /// Returns `true` if the value is `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::{JsonNull, JsonValue};
    ///
    /// assert!(JsonValue::from(JsonNull::new()).is_null());
    /// assert!(!JsonValue::from(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.kind() == Kind::Null
    }

    /// Narrows this handle to an object handle.
    ///
    /// Narrowing never mutates the value and may be repeated freely; every
    /// returned handle shares the same node.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] naming both kinds when the value is not an
    /// object.
    pub fn as_object(&self) -> Result<JsonObject, TypeMismatch> {
        match &self.0 {
            Node::Object(map) => Ok(JsonObject(Rc::clone(map))),
            _ => Err(self.mismatch(Kind::Object)),
        }
    }

    /// Narrows this handle to an array handle.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when the value is not an array.
    pub fn as_array(&self) -> Result<JsonArray, TypeMismatch> {
        match &self.0 {
            Node::Array(items) => Ok(JsonArray(Rc::clone(items))),
            _ => Err(self.mismatch(Kind::Array)),
        }
    }

    /// Narrows this handle to a string handle.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when the value is not a string.
    pub fn as_string(&self) -> Result<JsonString, TypeMismatch> {
        match &self.0 {
            Node::String(s) => Ok(JsonString(Rc::clone(s))),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    /// Narrows this handle to a signed-integer handle.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when the value is not a signed integer.
    pub fn as_int(&self) -> Result<JsonInt, TypeMismatch> {
        match &self.0 {
            Node::Int(v) => Ok(JsonInt(Rc::clone(v))),
            _ => Err(self.mismatch(Kind::Int)),
        }
    }

    /// Narrows this handle to an unsigned-integer handle.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when the value is not an unsigned integer.
    pub fn as_uint(&self) -> Result<JsonUInt, TypeMismatch> {
        match &self.0 {
            Node::UInt(v) => Ok(JsonUInt(Rc::clone(v))),
            _ => Err(self.mismatch(Kind::UInt)),
        }
    }

    /// Narrows this handle to a float handle.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when the value is not a float.
    pub fn as_float(&self) -> Result<JsonFloat, TypeMismatch> {
        match &self.0 {
            Node::Float(v) => Ok(JsonFloat(Rc::clone(v))),
            _ => Err(self.mismatch(Kind::Float)),
        }
    }

    /// Narrows this handle to a boolean handle.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when the value is not a boolean.
    pub fn as_bool(&self) -> Result<JsonBool, TypeMismatch> {
        match &self.0 {
            Node::Bool(v) => Ok(JsonBool(Rc::clone(v))),
            _ => Err(self.mismatch(Kind::Bool)),
        }
    }

    /// Narrows this handle to a null handle.
    ///
    /// # Errors
    ///
    /// Returns [`TypeMismatch`] when the value is not `null`.
    pub fn as_null(&self) -> Result<JsonNull, TypeMismatch> {
        match &self.0 {
            Node::Null => Ok(JsonNull),
            _ => Err(self.mismatch(Kind::Null)),
        }
    }

    fn mismatch(&self, expected: Kind) -> TypeMismatch {
        TypeMismatch {
            expected,
            actual: self.kind(),
        }
    }
}

impl Default for JsonValue {
    fn default() -> Self {
        Self(Node::Null)
    }
}

impl From<bool> for JsonValue {
    fn from(v: bool) -> Self {
        Self(Node::Bool(Rc::new(Cell::new(v))))
    }
}

impl From<i64> for JsonValue {
    fn from(v: i64) -> Self {
        Self(Node::Int(Rc::new(Cell::new(v))))
    }
}

impl From<u64> for JsonValue {
    fn from(v: u64) -> Self {
        Self(Node::UInt(Rc::new(Cell::new(v))))
    }
}

impl From<f64> for JsonValue {
    fn from(v: f64) -> Self {
        Self(Node::Float(Rc::new(Cell::new(v))))
    }
}

impl From<&str> for JsonValue {
    fn from(v: &str) -> Self {
        Self(Node::String(Rc::new(RefCell::new(String::from(v)))))
    }
}

impl From<String> for JsonValue {
    fn from(v: String) -> Self {
        Self(Node::String(Rc::new(RefCell::new(v))))
    }
}

/// Structural equality over payloads. Two handles compare equal when their
/// kinds match and their (recursively compared) payloads match, whether or
/// not they share a node.
impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Node::Object(a), Node::Object(b)) => *a.borrow() == *b.borrow(),
            (Node::Array(a), Node::Array(b)) => *a.borrow() == *b.borrow(),
            (Node::String(a), Node::String(b)) => *a.borrow() == *b.borrow(),
            (Node::Int(a), Node::Int(b)) => a.get() == b.get(),
            (Node::UInt(a), Node::UInt(b)) => a.get() == b.get(),
            (Node::Float(a), Node::Float(b)) => a.get() == b.get(),
            (Node::Bool(a), Node::Bool(b)) => a.get() == b.get(),
            (Node::Null, Node::Null) => true,
            _ => false,
        }
    }
}

pub(crate) fn write_object<W: fmt::Write>(map: &Map, f: &mut W) -> fmt::Result {
    f.write_str("{")?;
    let mut first = true;
    for (key, value) in map {
        if !first {
            f.write_str(",")?;
        }
        first = false;
        write!(f, "\"{key}\":{value}")?;
    }
    f.write_str("}")
}

pub(crate) fn write_array<W: fmt::Write>(items: &[JsonValue], f: &mut W) -> fmt::Result {
    f.write_str("[")?;
    let mut first = true;
    for value in items {
        if !first {
            f.write_str(",")?;
        }
        first = false;
        write!(f, "{value}")?;
    }
    f.write_str("]")
}

/// Floats are rendered with `{:?}`, which always keeps a decimal point or an
/// exponent, so a serialized float re-parses as a float rather than as an
/// integer.
pub(crate) fn write_float<W: fmt::Write>(value: f64, f: &mut W) -> fmt::Result {
    write!(f, "{value:?}")
}

/// Compact single-line JSON.
///
/// Containers are comma-joined without a trailing comma, object entries
/// follow the map's key order (not insertion order), and string content is
/// written between quotes exactly as stored, with no escaping applied.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Node::Object(map) => write_object(&map.borrow(), f),
            Node::Array(items) => write_array(&items.borrow(), f),
            Node::String(s) => write!(f, "\"{}\"", s.borrow()),
            Node::Int(v) => {
                let n = v.get();
                write!(f, "{n}")
            }
            Node::UInt(v) => {
                let n = v.get();
                write!(f, "{n}")
            }
            Node::Float(v) => write_float(v.get(), f),
            Node::Bool(v) => f.write_str(if v.get() { "true" } else { "false" }),
            Node::Null => f.write_str("null"),
        }
    }
}
