use alloc::string::ToString;

use crate::{Kind, parse};

#[test]
fn nested_array_with_every_scalar_kind() {
    let root = parse("[\"one\", 2, 3.0, [\"4\", true, null], -6]").unwrap();
    let array = root.as_array().unwrap();
    assert_eq!(array.len(), 5);

    assert_eq!(array.get(0).unwrap().as_string().unwrap().get(), "one");
    assert_eq!(array.get(1).unwrap().as_uint().unwrap().get(), 2);
    assert_eq!(array.get(2).unwrap().as_float().unwrap().get(), 3.0);

    let inner = array.get(3).unwrap().as_array().unwrap();
    assert_eq!(inner.len(), 3);
    assert_eq!(inner.get(0).unwrap().as_string().unwrap().get(), "4");
    assert!(inner.get(1).unwrap().as_bool().unwrap().get());
    assert!(inner.get(2).unwrap().is_null());

    assert_eq!(array.get(4).unwrap().as_int().unwrap().get(), -6);
}

#[test]
fn nested_objects() {
    let root = parse(
        "{\n\t\"name\": \"ada\",\n\t\"born\": {\n\t\t\"year\": 1815,\n\t\t\"month\": 12\n\t}\n}",
    )
    .unwrap();
    let person = root.as_object().unwrap();
    assert_eq!(person.get("name").unwrap().as_string().unwrap().get(), "ada");
    let born = person.get("born").unwrap().as_object().unwrap();
    assert_eq!(born.get("year").unwrap().as_uint().unwrap().get(), 1815);
    assert_eq!(born.get("month").unwrap().as_uint().unwrap().get(), 12);
}

#[test]
fn empty_containers_and_strings() {
    assert_eq!(parse("{}").unwrap().as_object().unwrap().len(), 0);
    assert_eq!(parse("[]").unwrap().as_array().unwrap().len(), 0);
    assert_eq!(parse("\"\"").unwrap().as_string().unwrap().get(), "");
}

#[test]
fn root_scalars() {
    assert_eq!(parse("true").unwrap().kind(), Kind::Bool);
    assert_eq!(parse("false").unwrap().kind(), Kind::Bool);
    assert_eq!(parse("null").unwrap().kind(), Kind::Null);
    assert_eq!(parse("\"x\"").unwrap().kind(), Kind::String);
}

#[test]
fn escape_sequences_decode() {
    let value = parse(r#""a\nb""#).unwrap();
    assert_eq!(value.as_string().unwrap().get(), "a\nb");

    let value = parse(r#""\"\\\/\b\f\n\r\t""#).unwrap();
    assert_eq!(
        value.as_string().unwrap().get(),
        "\"\\/\u{0008}\u{000C}\n\r\t"
    );
}

#[test]
fn string_content_keeps_structural_characters_and_whitespace() {
    let value = parse("\"a { , ] : b\"").unwrap();
    assert_eq!(value.as_string().unwrap().get(), "a { , ] : b");
}

#[test]
fn duplicate_keys_keep_the_first_value() {
    let root = parse(r#"{"a":1,"a":2}"#).unwrap();
    let object = root.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert_eq!(object.get("a").unwrap().as_uint().unwrap().get(), 1);
}

#[test]
fn whitespace_everywhere() {
    let root = parse(" \t\r\n{ \"a\" : [ 1 , 2 ] } ").unwrap();
    let array = root.as_object().unwrap().get("a").unwrap();
    assert_eq!(array.as_array().unwrap().len(), 2);
}

// Parsing stops after the first complete top-level value; whatever follows is
// not inspected.
#[test]
fn trailing_input_is_ignored() {
    assert_eq!(parse("true false").unwrap().kind(), Kind::Bool);
    assert_eq!(parse("1 }").unwrap().as_uint().unwrap().get(), 1);
    assert_eq!(parse("[1] [2]").unwrap().as_array().unwrap().len(), 1);
}

#[test]
fn serialization_is_compact_and_key_ordered() {
    let root = parse(r#"{ "b" : 2 , "a" : [ true , null ] }"#).unwrap();
    assert_eq!(root.to_string(), r#"{"a":[true,null],"b":2}"#);
}

#[test]
fn reparse_of_rendered_output_is_equivalent() {
    let root = parse(r#"{"a":[1,-2,3.5,"x"],"b":{"c":null,"d":false}}"#).unwrap();
    let reparsed = parse(&root.to_string()).unwrap();
    assert_eq!(reparsed, root);
}
