use alloc::{string::String, string::ToString, vec::Vec};

use quickcheck::{Arbitrary, Gen, QuickCheck};

use crate::{
    JsonArray, JsonNull, JsonObject, JsonValue, parse,
};

/// Plain description of a document, used as the quickcheck input. Handles are
/// `!Send`, so generation happens on this mirror type and the tree is built
/// from it inside the property.
#[derive(Clone, Debug)]
enum Doc {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    List(Vec<Doc>),
    Entries(Vec<(String, Doc)>),
}

/// Strings serialize with no escaping, so round-trippable content must not
/// contain a quote or a backslash; everything else passes through verbatim.
fn sanitize(text: &str) -> String {
    text.chars().filter(|c| *c != '"' && *c != '\\').collect()
}

fn arbitrary_doc(g: &mut Gen, depth: usize) -> Doc {
    let scalar_only = depth == 0;
    let choice = u8::arbitrary(g) % if scalar_only { 6 } else { 8 };
    match choice {
        0 => Doc::Null,
        1 => Doc::Bool(bool::arbitrary(g)),
        2 => {
            // Signed integers only ever hold negative numbers; a non-negative
            // rendering would re-parse unsigned.
            let n = i64::arbitrary(g);
            Doc::Int(if n < 0 { n } else { -(n >> 1) - 1 })
        }
        3 => Doc::UInt(u64::arbitrary(g)),
        4 => {
            let f = f64::arbitrary(g);
            Doc::Float(if f.is_finite() { f } else { 0.5 })
        }
        5 => Doc::Text(sanitize(&String::arbitrary(g))),
        6 => {
            let len = usize::arbitrary(g) % 4;
            Doc::List((0..len).map(|_| arbitrary_doc(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            Doc::Entries(
                (0..len)
                    .map(|_| (sanitize(&String::arbitrary(g)), arbitrary_doc(g, depth - 1)))
                    .collect(),
            )
        }
    }
}

impl Arbitrary for Doc {
    fn arbitrary(g: &mut Gen) -> Self {
        arbitrary_doc(g, 3)
    }
}

fn build(doc: &Doc) -> JsonValue {
    match doc {
        Doc::Null => JsonNull::new().into_value(),
        Doc::Bool(b) => JsonValue::from(*b),
        Doc::Int(n) => JsonValue::from(*n),
        Doc::UInt(n) => JsonValue::from(*n),
        Doc::Float(f) => JsonValue::from(*f),
        Doc::Text(s) => JsonValue::from(s.clone()),
        Doc::List(items) => {
            let array = JsonArray::new();
            for item in items {
                array.push(build(item));
            }
            array.into_value()
        }
        Doc::Entries(entries) => {
            let object = JsonObject::new();
            for (key, value) in entries {
                object.insert(key.clone(), build(value));
            }
            object.into_value()
        }
    }
}

/// Property: rendering a constructed tree and parsing the result yields a
/// structurally equal tree with every kind preserved, and the re-rendered
/// text is identical to the first rendering.
#[test]
fn render_parse_roundtrip_quickcheck() {
    fn prop(doc: Doc) -> bool {
        let value = build(&doc);
        let text = value.to_string();
        match parse(&text) {
            Ok(reparsed) => reparsed == value && reparsed.to_string() == text,
            Err(_) => false,
        }
    }

    let tests = if is_ci::cached() { 10_000 } else { 1_000 };

    QuickCheck::new()
        .tests(tests)
        .quickcheck(prop as fn(Doc) -> bool);
}
