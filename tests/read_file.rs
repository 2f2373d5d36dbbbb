use custom_entries_reader::{
    CustomEntry, EntryGroup, ErrorKind, ReadError, ReaderOptions, read_file, read_file_with,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn fixture_is_flattened_across_systems() {
    let groups = read_file(fixture("custom_entries.json")).unwrap();

    let ids: Vec<_> = groups
        .iter()
        .map(|g| g.id.as_ref().and_then(|v| v.as_str()).unwrap())
        .collect();
    assert_eq!(ids, vec!["oracle_sales", "oracle_hr", "kafka_topics"]);

    for group in &groups[..2] {
        for entry in &group.entries {
            assert_eq!(entry.user_specified_system, Some(json!("On-Prem Oracle")));
        }
    }
    assert_eq!(
        groups[2].entries[0].user_specified_system,
        Some(json!("Kafka"))
    );
}

#[test]
fn fixture_descriptions_default_to_empty() {
    let groups = read_file(fixture("custom_entries.json")).unwrap();
    let descriptions: Vec<_> = groups
        .iter()
        .flat_map(|g| g.entries.iter().map(|e| e.description.as_str().unwrap()))
        .collect();
    assert_eq!(descriptions, vec!["Customer orders", "", "", ""]);
}

#[test]
fn timestamps_pass_through_unmodified() {
    let groups = read_file(fixture("custom_entries.json")).unwrap();

    let orders = &groups[0].entries[0];
    assert_eq!(orders.created_at, Some(json!("2019-03-01T10:00:00Z")));
    assert_eq!(orders.updated_at, Some(json!("2019-06-12T08:30:00Z")));

    let employees = &groups[1].entries[0];
    assert_eq!(employees.created_at, None);

    let clicks = &groups[2].entries[0];
    assert_eq!(clicks.created_at, Some(json!(1561939200)));
    assert_eq!(clicks.updated_at, None);
}

#[test]
fn minimal_file_round_trip_shape() {
    let file = write_temp(
        r#"{"systems":[{"system":"Acme","entry_groups":[{"entry_group_id":"g1",
            "entry_group_name":"Group One","entries":[{"linked_resource":"//res/1",
            "display_name":"Res 1"}]}]}]}"#,
    );

    let groups = read_file(file.path()).unwrap();
    assert_eq!(
        serde_json::to_value(&groups).unwrap(),
        json!([{
            "id": "g1",
            "name": "Group One",
            "entries": [{
                "linked_resource": "//res/1",
                "display_name": "Res 1",
                "description": "",
                "user_specified_type": null,
                "user_specified_system": "Acme",
                "created_at": null,
                "updated_at": null
            }]
        }])
    );

    let back: Vec<EntryGroup> = serde_json::from_value(serde_json::to_value(&groups).unwrap())
        .unwrap();
    assert_eq!(back, groups);
}

#[test]
fn description_is_kept_when_present() {
    let file = write_temp(
        r#"{"systems":[{"system":"S","entry_groups":[{"entry_group_id":"g",
            "entries":[{"linked_resource":"r","description":"foo"}]}]}]}"#,
    );
    let groups = read_file(file.path()).unwrap();
    assert_eq!(
        groups[0].entries,
        vec![CustomEntry {
            linked_resource: Some(json!("r")),
            display_name: None,
            description: json!("foo"),
            user_specified_type: None,
            user_specified_system: Some(json!("S")),
            created_at: None,
            updated_at: None,
        }]
    );
}

#[test]
fn non_string_values_are_passed_through() {
    let file = write_temp(
        r#"{"systems":[{"system":"Acme","entry_groups":[{"entry_group_id":123,
            "entry_group_name":"Group One","entries":[{"linked_resource":"//res/1",
            "user_specified_type":7,"description":null}]}]}]}"#,
    );

    let groups = read_file(file.path()).unwrap();
    assert_eq!(
        serde_json::to_value(&groups).unwrap(),
        json!([{
            "id": 123,
            "name": "Group One",
            "entries": [{
                "linked_resource": "//res/1",
                "display_name": null,
                "description": null,
                "user_specified_type": 7,
                "user_specified_system": "Acme",
                "created_at": null,
                "updated_at": null
            }]
        }])
    );

    let err = read_file_with(file.path(), &ReaderOptions::strict()).unwrap_err();
    assert!(
        err.to_string()
            .contains("systems[0].entry_groups[0].entry_group_id"),
        "{err}"
    );
}

#[test]
fn empty_systems_yield_no_groups() {
    let file = write_temp(r#"{"systems": []}"#);
    assert!(read_file(file.path()).unwrap().is_empty());
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let err = read_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    match err {
        ReadError::NotFound { location, source } => {
            assert_eq!(location, path.display().to_string());
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_json_file_is_malformed() {
    let file = write_temp("not json");
    assert_eq!(read_file(file.path()).unwrap_err().kind(), ErrorKind::Malformed);
}

#[test]
fn strict_mode_rejects_entry_without_linked_resource() {
    let file = write_temp(
        r#"{"systems":[{"system":"S","entry_groups":[{"entry_group_id":"g",
            "entry_group_name":"n","entries":[{"display_name":"x"}]}]}]}"#,
    );

    assert!(read_file(file.path()).is_ok());

    let err = read_file_with(file.path(), &ReaderOptions::strict()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Schema);
    assert!(
        err.to_string()
            .contains("systems[0].entry_groups[0].entries[0].linked_resource")
    );
}

#[test]
fn strict_mode_accepts_fixture() {
    let strict = read_file_with(fixture("custom_entries.json"), &ReaderOptions::strict()).unwrap();
    assert_eq!(strict, read_file(fixture("custom_entries.json")).unwrap());
}
