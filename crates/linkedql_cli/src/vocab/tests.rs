use linkedql::registry::{Decoder, Iri, Value};

use super::{Has, Limit, Select, Union, Vertex, registry, step_chain, step_values};

#[test]
fn vocabulary_registers_without_conflicts() {
	let registry = registry().expect("vocabulary registers");
	assert_eq!(registry.len(), 10);
	assert_eq!(registry.name_of::<Vertex>(), Some("linkedql:Vertex"));
}

#[test]
fn chain_follows_from_links_to_the_source() {
	let registry = registry().expect("vocabulary registers");
	let doc = br#"{
		"@type": "linkedql:Limit",
		"limit": 10,
		"from": {
			"@type": "linkedql:Out",
			"properties": [{"@id": "http://example/follows"}],
			"from": {"@type": "linkedql:Vertex", "values": [{"@id": "_:alice"}]}
		}
	}"#;
	let item = Decoder::new(&registry).decode(doc).expect("query decodes");
	assert_eq!(step_chain(&*item), ["linkedql:Limit", "linkedql:Out", "linkedql:Vertex"]);

	let limit = item.downcast::<Limit>().expect("root is Limit");
	assert_eq!(limit.limit, 10);
}

#[test]
fn has_reads_single_property_value() {
	let registry = registry().expect("vocabulary registers");
	let doc = br#"{"@type":"linkedql:Has","property":{"@id":"http://example/name"},"values":["Bob"]}"#;
	let has = Decoder::new(&registry).decode_as::<Has>(doc).expect("Has decodes");
	assert_eq!(has.property, Some(Value::Iri(Iri::new("http://example/name"))));
	assert_eq!(has.values, Some(vec![Value::String("Bob".into())]));
	assert!(has.from.is_none());
}

#[test]
fn step_values_lists_property_before_values() {
	let registry = registry().expect("vocabulary registers");
	let doc = br#"{"@type":"linkedql:Has","property":{"@id":"http://example/age"},"values":[42,"x"]}"#;
	let item = Decoder::new(&registry).decode(doc).expect("Has decodes");
	let rendered: Vec<_> = step_values(&*item).into_iter().map(|(field, value)| format!("{field} {value}")).collect();
	assert_eq!(
		rendered,
		["property <http://example/age>", "values \"42\"^^<http://www.w3.org/2001/XMLSchema#integer>", "values \"x\""]
	);

	let limit = Decoder::new(&registry).decode(br#"{"@type":"linkedql:Limit","limit":1}"#).expect("Limit decodes");
	assert!(step_values(&*limit).is_empty());
}

#[test]
fn select_ignores_planner_field() {
	let registry = registry().expect("vocabulary registers");
	let doc = br#"{"@type":"linkedql:Select","tags":["a","b"],"resolved":"x"}"#;
	let select = Decoder::new(&registry).decode_as::<Select>(doc).expect("Select decodes");
	assert_eq!(select.tags, ["a", "b"]);
	assert!(select.resolved.is_none());
}

#[test]
fn union_keeps_branch_order() {
	let registry = registry().expect("vocabulary registers");
	let doc = br#"{"@type":"linkedql:Union","steps":[{"@type":"linkedql:Placeholder"},{"@type":"linkedql:Vertex"}]}"#;
	let union = Decoder::new(&registry).decode_as::<Union>(doc).expect("Union decodes");
	let types: Vec<_> = union.steps.expect("steps present").iter().map(|step| step.item_type()).collect();
	assert_eq!(types, ["linkedql:Placeholder", "linkedql:Vertex"]);
}
