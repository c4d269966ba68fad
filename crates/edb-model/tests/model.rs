//! Tests for edb-model record types.

use edb_model::{Field, Record};

fn make_record(pv: &str, infos: Vec<Field>, fields: Vec<Field>) -> Record {
    Record::new("testDir", "ai", pv, infos, fields)
}

#[test]
fn field_name_is_trimmed() {
    let field = Field::new("  EGU ", " mA ");
    assert_eq!(field.name(), "EGU");
    assert_eq!(field.value(), " mA ");
}

#[test]
fn simulation_pv_detection() {
    assert!(make_record("FOO.SIM", vec![], vec![]).is_simulation());
    assert!(make_record("FOO.SIM:BAR", vec![], vec![]).is_simulation());
    assert!(!make_record("FOO.SIMULATE", vec![], vec![]).is_simulation());
    assert!(!make_record("FOOSIM", vec![], vec![]).is_simulation());
}

#[test]
fn disable_pv_detection() {
    assert!(make_record("SYS:DISABLE", vec![], vec![]).is_disable());
    assert!(!make_record("SYS:ENABLE", vec![], vec![]).is_disable());
}

#[test]
fn interest_comes_from_infos() {
    let interesting = make_record(
        "TEST:PV1",
        vec![Field::new("INTEREST", "HIGH")],
        vec![],
    );
    assert!(interesting.is_interest());

    let plain = make_record("TEST:PV1", vec![Field::new("archive", "1")], vec![]);
    assert!(!plain.is_interest());
}

#[test]
fn field_lookup_preserves_order_and_duplicates() {
    let record = make_record(
        "TEST:PV1",
        vec![],
        vec![
            Field::new("DESC", "first"),
            Field::new("EGU", "mA"),
            Field::new("DESC", "second"),
        ],
    );
    assert_eq!(record.get_field("DESC"), vec!["first", "second"]);
    assert_eq!(record.get_field("EGU"), vec!["mA"]);
    assert!(record.get_field("VAL").is_empty());
    assert!(record.has_field("EGU"));
    assert!(!record.has_field("VAL"));
}

#[test]
fn info_lookup_matches_field_contract() {
    let record = make_record(
        "TEST:PV1",
        vec![Field::new("INTEREST", "HIGH"), Field::new("alarm", "MAJOR")],
        vec![],
    );
    assert_eq!(record.get_info("INTEREST"), vec!["HIGH"]);
    assert!(record.get_info("archive").is_empty());
}

#[test]
fn display_identity_joins_directory_and_pv() {
    let record = make_record("TEST:PV1", vec![], vec![]);
    assert_eq!(record.to_string(), "testDir\\TEST:PV1");
}
