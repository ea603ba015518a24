#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use amxd_core::container::{extract, reassemble, serialize_document};
use amxd_core::errors::ContainerError;
use proptest::prelude::*;
use serde_json::{json, Value};

fn header_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>().prop_filter("no open brace", |b| *b != b'{'), 0..64)
}

fn finite_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("finite", |f| f.is_finite())
}

fn document_strategy() -> impl Strategy<Value = Value> {
    (
        prop::collection::vec("[a-z_]{1,8}", 0..6),
        prop::collection::vec(any::<i32>(), 0..6),
        "\\PC{0,16}",
        prop::collection::vec(finite_f64(), 4),
    )
        .prop_map(|(ids, numbers, text, rect)| {
            let boxes: Vec<Value> = ids
                .iter()
                .map(|id| json!({"box": {"id": id, "text": text, "patching_rect": rect}}))
                .collect();
            json!({"patcher": {"boxes": boxes, "lines": [], "numbers": numbers}})
        })
}

proptest! {
    #[test]
    fn reassembled_header_is_identical(header in header_strategy(), document in document_strategy()) {
        let bytes = reassemble(&header, &document).unwrap();
        let (header_again, document_again) = extract(&bytes).unwrap();

        prop_assert_eq!(header_again, header);
        prop_assert_eq!(document_again, document);
    }

    #[test]
    fn reserialization_is_deterministic(document in document_strategy()) {
        let once = serialize_document(&document).unwrap();
        let (_, reparsed) = extract(&once).unwrap();
        let twice = serialize_document(&reparsed).unwrap();

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn extract_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..1024)) {
        match extract(&bytes) {
            Ok((header, _)) => prop_assert!(!header.contains(&b'{'), "header contains '{{'"),
            Err(err) => prop_assert!(err.is_parse_error()),
        }
    }
}

#[test]
fn test_trailing_bytes_are_dropped_on_save() {
    let mut bytes = common::device_bytes(b"HDR", &json!({"patcher": {}}));
    bytes.extend_from_slice(b"\x00\x00trailer");

    let (header, document) = extract(&bytes).unwrap();
    let saved = reassemble(&header, &document).unwrap();

    assert!(saved.ends_with(b"}"));
    assert!(!saved.windows(7).any(|w| w == b"trailer"));
}

#[test]
fn test_trailing_brace_moves_the_boundary() {
    // a '}' in the trailing segment is taken as the document end
    let bytes = b"HDR{\"a\":1}\x00}";
    let err = extract(bytes).unwrap_err();
    assert!(matches!(err, ContainerError::InvalidDocument { offset: 3, .. }));
}

#[test]
fn test_seventeen_digit_floats_survive_a_save() {
    let written = [
        "-3.3710794864173703e-159",
        "2.9091650704676072e72",
        "0.30000000000000004",
        "1.7976931348623157e308",
    ];
    let text = format!(
        "{{\"patcher\":{{\"boxes\":[{{\"box\":{{\"id\":\"obj-1\",\"patching_rect\":[{}]}}}}]}}}}",
        written.join(",")
    );
    let mut bytes = b"HDR".to_vec();
    bytes.extend_from_slice(text.as_bytes());

    let (header, document) = extract(&bytes).unwrap();
    let (_, reloaded) = extract(&reassemble(&header, &document).unwrap()).unwrap();

    let rect = reloaded["patcher"]["boxes"][0]["box"]["patching_rect"]
        .as_array()
        .unwrap();
    for (value, literal) in rect.iter().zip(written) {
        let expected: f64 = literal.parse().unwrap();
        assert_eq!(value.as_f64().unwrap().to_bits(), expected.to_bits(), "{}", literal);
    }
}
