use serde_json::json;

use crate::registry::{BlankNode, DecodeError, Iri, Value, XSD, XSD_BOOLEAN, XSD_FLOAT, XSD_INTEGER, parse_value};

#[test]
fn plain_string_becomes_string_literal() {
	let value = parse_value(&json!("alice")).expect("string parses");
	assert_eq!(value, Value::String("alice".into()));
}

#[test]
fn integer_becomes_xsd_integer() {
	let value = parse_value(&json!(42)).expect("integer parses");
	assert_eq!(value, Value::typed("42", XSD_INTEGER));

	let negative = parse_value(&json!(-7)).expect("negative integer parses");
	assert_eq!(negative, Value::typed("-7", XSD_INTEGER));
}

#[test]
fn large_unsigned_integer_keeps_integer_datatype() {
	let value = parse_value(&json!(u64::MAX)).expect("u64 parses");
	assert_eq!(value, Value::typed(u64::MAX.to_string(), XSD_INTEGER));
}

#[test]
fn float_uses_six_fractional_digits() {
	let value = parse_value(&json!(3.5)).expect("float parses");
	assert_eq!(value, Value::typed("3.500000", XSD_FLOAT));

	let small = parse_value(&json!(0.1234567)).expect("float parses");
	assert_eq!(small, Value::typed("0.123457", XSD_FLOAT));
}

#[test]
fn boolean_becomes_lowercase_xsd_boolean() {
	assert_eq!(parse_value(&json!(true)).expect("bool parses"), Value::typed("true", XSD_BOOLEAN));
	assert_eq!(parse_value(&json!(false)).expect("bool parses"), Value::typed("false", XSD_BOOLEAN));
}

#[test]
fn blank_node_id_strips_prefix() {
	let value = parse_value(&json!({"@id": "_:b1"})).expect("blank node parses");
	assert_eq!(value, Value::BlankNode(BlankNode::new("b1")));
}

#[test]
fn plain_id_becomes_iri() {
	let value = parse_value(&json!({"@id": "http://example/x"})).expect("iri parses");
	assert_eq!(value, Value::Iri(Iri::new("http://example/x")));
}

#[test]
fn id_wins_over_value_keys() {
	let value = parse_value(&json!({"@id": "http://example/x", "@value": "ignored", "@type": "http://example/t"})).expect("iri parses");
	assert_eq!(value, Value::Iri(Iri::new("http://example/x")));
}

#[test]
fn language_tagged_literal_keeps_value_text() {
	let value = parse_value(&json!({"@value": "bonjour", "@language": "fr"})).expect("lang string parses");
	assert_eq!(
		value,
		Value::LangString {
			value: "bonjour".into(),
			lang: "fr".into(),
		}
	);
}

#[test]
fn language_takes_priority_over_type() {
	let value = parse_value(&json!({"@value": "hi", "@language": "en", "@type": "http://example/t"})).expect("lang string parses");
	assert_eq!(value.kind(), "lang_string");
}

#[test]
fn typed_value_object_uses_declared_type() {
	let value = parse_value(&json!({"@value": "2020-01-01", "@type": "http://www.w3.org/2001/XMLSchema#date"})).expect("typed literal parses");
	assert_eq!(value, Value::typed("2020-01-01", "http://www.w3.org/2001/XMLSchema#date"));
}

#[test]
fn bare_value_object_is_rejected() {
	let err = parse_value(&json!({"@value": "orphan"})).expect_err("bare @value should fail");
	assert!(matches!(err, DecodeError::UnparsableValue { .. }));
}

#[test]
fn non_string_id_and_value_are_rejected() {
	let err = parse_value(&json!({"@id": 5})).expect_err("numeric @id should fail");
	assert!(matches!(err, DecodeError::UnparsableValue { .. }));

	let err = parse_value(&json!({"@value": 5, "@type": "http://example/t"})).expect_err("numeric @value should fail");
	assert!(matches!(err, DecodeError::UnparsableValue { .. }));
}

#[test]
fn null_and_arrays_are_rejected() {
	assert!(matches!(parse_value(&json!(null)), Err(DecodeError::UnparsableValue { .. })));
	assert!(matches!(parse_value(&json!(["a"])), Err(DecodeError::UnparsableValue { .. })));
}

#[test]
fn display_uses_nquads_term_syntax() {
	assert_eq!(Value::String("a".into()).to_string(), "\"a\"");
	assert_eq!(Value::typed("1", XSD_INTEGER).to_string(), format!("\"1\"^^<{XSD_INTEGER}>"));
	assert_eq!(
		Value::LangString {
			value: "a".into(),
			lang: "en".into()
		}
		.to_string(),
		"\"a\"@en"
	);
	assert_eq!(Value::Iri(Iri::new("http://x")).to_string(), "<http://x>");
	assert_eq!(Value::BlankNode(BlankNode::new("b0")).to_string(), "_:b0");
}

#[test]
fn xsd_datatypes_share_the_namespace() {
	assert_eq!(XSD, "http://www.w3.org/2001/XMLSchema#");
	assert_eq!(XSD_INTEGER.strip_prefix(XSD), Some("integer"));
	assert_eq!(XSD_FLOAT.strip_prefix(XSD), Some("float"));
	assert_eq!(XSD_BOOLEAN.strip_prefix(XSD), Some("boolean"));
}
