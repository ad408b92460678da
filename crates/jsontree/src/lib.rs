//! A JSON document tree with shared values and explicit number kinds.
//!
//! `jsontree` parses JSON text into a tree of reference-counted values and
//! serializes such trees back to compact JSON. Unlike representations with a
//! single generic number type, every number is tagged as a signed integer, an
//! unsigned integer or a float: integer-shaped tokens land in the widest
//! 64-bit type that holds them and overflow to a float beyond that.
//!
//! Values are handles: cloning one shares the underlying node, a node may be
//! linked into several parents at once, and payload mutation through one
//! handle is visible through all of them. The trade-off is that trees are
//! single-threaded (`!Send`); callers needing cross-thread documents should
//! convert at the boundary.
//!
//! ```
//! use jsontree::parse;
//!
//! let root = parse(r#"["one", 2, 3.0, -6]"#)?;
//! let array = root.as_array()?;
//! assert!(array.get(1).unwrap().is_uint());
//! assert!(array.get(2).unwrap().is_float());
//! assert!(array.get(3).unwrap().is_int());
//! assert_eq!(root.to_string(), r#"["one",2,3.0,-6]"#);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod handles;
mod number;
mod parser;
mod tokenizer;
mod value;

#[cfg(any(test, feature = "serde"))]
mod de;
#[cfg(any(test, feature = "serde"))]
mod ser;

#[cfg(test)]
mod tests;

pub use error::{SyntaxError, TypeMismatch};
pub use handles::{
    JsonArray, JsonBool, JsonFloat, JsonInt, JsonNull, JsonObject, JsonString, JsonUInt,
};
pub use parser::parse;
pub use value::{JsonValue, Kind};
