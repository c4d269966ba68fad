//! Integration tests for the db/template parser.

use edb_parse::parse_db;
use proptest::prelude::{Strategy, proptest};

#[test]
fn single_record_round_trip() {
    let text = r#"
# A comment line

record(ai, "TEST:PV1") {
    field(EGU, "mA")
    field(DESC, "Current")
    info(INTEREST, "YES")
}
"#;
    let records = parse_db("testDir", text);
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.record_type(), "ai");
    assert_eq!(record.pv(), "TEST:PV1");
    assert_eq!(record.directory(), "testDir");
    assert_eq!(record.get_field("EGU"), vec!["mA"]);
    assert_eq!(record.get_field("DESC"), vec!["Current"]);
    assert!(record.is_interest());
}

#[test]
fn records_come_out_in_source_order() {
    let text = r#"
record(ai, "A:FIRST") {
}
record(ao, "A:SECOND") {
    field(EGU, "V")
}
record(longin, "A:THIRD") {
}
"#;
    let records = parse_db("dir", text);
    let pvs: Vec<&str> = records.iter().map(|r| r.pv()).collect();
    assert_eq!(pvs, vec!["A:FIRST", "A:SECOND", "A:THIRD"]);
}

#[test]
fn opening_brace_may_sit_on_its_own_line() {
    let text = "record(ai, \"TEST:PV1\")\n{\n    field(EGU, \"mA\")\n}\n";
    let records = parse_db("dir", text);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get_field("EGU"), vec!["mA"]);
}

#[test]
fn duplicate_field_names_are_all_kept() {
    let text = r#"
record(ai, "TEST:PV1") {
    field(DESC, "one")
    field(DESC, "two")
}
"#;
    let records = parse_db("dir", text);
    assert_eq!(records[0].get_field("DESC"), vec!["one", "two"]);
}

#[test]
fn macros_are_preserved_verbatim() {
    let text = r#"
record(ai, "$(P)$(Q)TEMP") {
    field(EGU, "$(UNIT)")
    field(INP, "@$(PORT) S")
}
"#;
    let records = parse_db("dir", text);
    assert_eq!(records[0].pv(), "$(P)$(Q)TEMP");
    assert_eq!(records[0].get_field("EGU"), vec!["$(UNIT)"]);
    assert_eq!(records[0].get_field("INP"), vec!["@$(PORT) S"]);
}

#[test]
fn bare_pv_with_macro_is_not_truncated() {
    let text = "record(ai, $(P)TEMP) {\n}\n";
    let records = parse_db("dir", text);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].pv(), "$(P)TEMP");
}

#[test]
fn quoted_value_with_parentheses_is_not_truncated() {
    let text = r#"
record(ai, "TEST:PV1") {
    field(DESC, "Flow (calculated)")
}
"#;
    let records = parse_db("dir", text);
    assert_eq!(records[0].get_field("DESC"), vec!["Flow (calculated)"]);
}

#[test]
fn grecord_start_marker_is_accepted() {
    let text = "grecord(ai, \"TEST:PV1\") {\n}\n";
    let records = parse_db("dir", text);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record_type(), "ai");
}

#[test]
fn nested_start_marker_drops_the_open_block() {
    let text = r#"
record(ai, "BROKEN:PV") {
    field(EGU, "mA")
record(ao, "GOOD:PV") {
    field(EGU, "V")
}
"#;
    let records = parse_db("dir", text);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].pv(), "GOOD:PV");
    assert_eq!(records[0].get_field("EGU"), vec!["V"]);
}

#[test]
fn stray_closing_brace_is_ignored() {
    let text = "}\nrecord(ai, \"TEST:PV1\") {\n}\n";
    let records = parse_db("dir", text);
    assert_eq!(records.len(), 1);
}

#[test]
fn unterminated_block_at_end_of_file_is_dropped() {
    let text = "record(ai, \"TEST:PV1\") {\n    field(EGU, \"mA\")\n";
    let records = parse_db("dir", text);
    assert!(records.is_empty());
}

#[test]
fn malformed_body_line_is_skipped() {
    let text = r#"
record(ai, "TEST:PV1") {
    field(EGU "mA")
    field(DESC, "Current")
}
"#;
    let records = parse_db("dir", text);
    assert_eq!(records.len(), 1);
    assert!(records[0].get_field("EGU").is_empty());
    assert_eq!(records[0].get_field("DESC"), vec!["Current"]);
}

#[test]
fn empty_record_body_is_valid() {
    let records = parse_db("dir", "record(calc, \"TEST:CALC\") {\n}\n");
    assert_eq!(records.len(), 1);
    assert!(records[0].fields().is_empty());
    assert!(records[0].infos().is_empty());
}

fn pv_strategy() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9_:]{0,18}"
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{1,8}"
}

fn value_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_:./% -]{0,20}"
}

proptest! {
    #[test]
    fn rendered_record_parses_back(
        pv in pv_strategy(),
        name in name_strategy(),
        value in value_strategy(),
    ) {
        let text = format!(
            "record(ai, \"{pv}\") {{\n    field({name}, \"{value}\")\n}}\n"
        );
        let records = parse_db("dir", &text);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pv(), pv);
        assert_eq!(records[0].get_field(&name), vec![value.as_str()]);
    }
}
