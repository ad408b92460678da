#![no_main]

use arbitrary::Arbitrary;
use jsontree::parse;
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

/// serde_json escapes quotes, backslashes and control characters on output.
/// The parser under test accepts the single-character escapes but rejects
/// `\uXXXX`, and its own renderer never escapes at all, so generated strings
/// stay free of anything an escaper would touch.
fn clean(s: String) -> String {
    s.chars()
        .filter(|c| *c != '"' && *c != '\\' && !c.is_control())
        .collect()
}

#[derive(Debug)]
struct ArbitraryDocument(Value);

impl<'a> Arbitrary<'a> for ArbitraryDocument {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(23)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3 => Value::Number(u.arbitrary::<i64>()?.into()),
            4 => Value::Number(u.arbitrary::<u64>()?.into()),
            5..=10 => Value::String(clean(u.arbitrary()?)),
            11..=15 => {
                let elems: Vec<ArbitraryDocument> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=22 => {
                let m: Vec<(String, ArbitraryDocument)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (clean(k), v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryDocument(value))
    }
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    raw: String,
    document: ArbitraryDocument,
}

fn run(data: &[u8]) {
    let mut unstructured = arbitrary::Unstructured::new(data);
    let Ok(input) = FuzzInput::arbitrary(&mut unstructured) else {
        return;
    };

    // Arbitrary text must never panic the parser, whatever the outcome.
    let _ = parse(&input.raw);

    // Any document serde_json can render is valid JSON the parser must
    // accept, and the parsed tree's own rendering must re-parse to an equal
    // tree.
    let text =
        serde_json::to_string(&input.document.0).expect("failed to serialize arbitrary document");
    let value = parse(&text).expect("failed to parse serde_json output");
    let reparsed = parse(&value.to_string()).expect("failed to re-parse rendered output");
    assert_eq!(reparsed, value);
}

fuzz_target!(|data: &[u8]| run(data));
