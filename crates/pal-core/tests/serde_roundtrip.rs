use pal_core::provenance::{RunProvenance, SchemaVersion};

#[test]
fn provenance_round_trip_json() {
    let provenance = RunProvenance::for_input("abc123")
        .with_seed(99)
        .with_label("sample");

    let json = serde_json::to_string_pretty(&provenance).expect("serialize");
    let decoded: RunProvenance = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(decoded, provenance);
    assert!(decoded.tool_versions.contains_key("pal-core"));
}

#[test]
fn optional_fields_are_omitted() {
    let json = serde_json::to_value(RunProvenance::for_input("h")).expect("serialize");
    assert!(json.get("seed").is_none());
    assert!(json.get("label").is_none());
}

#[test]
fn schema_version_defaults_to_one() {
    assert_eq!(SchemaVersion::default(), SchemaVersion::new(1, 0, 0));
    assert!(SchemaVersion::new(1, 2, 0) > SchemaVersion::new(1, 1, 9));
}
