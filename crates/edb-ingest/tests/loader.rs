//! End-to-end loader tests: discovery through corpus construction.

use edb_ingest::DbLoader;
use tempfile::TempDir;

const MOTOR_DB: &str = r#"
record(ai, "MOTOR:SPEED") {
    field(EGU, "Hz")
    field(DESC, "Motor speed")
    info(INTEREST, "HIGH")
}
"#;

const VALVE_TEMPLATE: &str = r#"
record(ao, "$(P)VALVE:POS") {
    field(EGU, "%")
}
"#;

fn create_study_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let ioc = dir.path().join("ioc");
    std::fs::create_dir(&ioc).unwrap();
    std::fs::write(ioc.join("motor.db"), MOTOR_DB).unwrap();
    std::fs::write(ioc.join("valve.template"), VALVE_TEMPLATE).unwrap();
    std::fs::write(ioc.join("README.txt"), "not a db file").unwrap();
    dir
}

#[test]
fn load_defaults_finds_db_and_template_files() {
    let dir = create_study_tree();
    let mut loader = DbLoader::new();
    let count = loader.load_defaults(dir.path()).unwrap();
    assert_eq!(count, 2);
    assert_eq!(loader.file_count(), 2);
}

#[test]
fn parse_files_flattens_all_records() {
    let dir = create_study_tree();
    let mut loader = DbLoader::new();
    loader.load_defaults(dir.path()).unwrap();

    let corpus = loader.parse_files();
    assert_eq!(corpus.len(), 2);

    let motor = corpus.iter().find(|r| r.pv() == "MOTOR:SPEED").unwrap();
    assert_eq!(motor.directory(), "ioc");
    assert_eq!(motor.get_field("EGU"), vec!["Hz"]);
    assert!(motor.is_interest());

    let valve = corpus.iter().find(|r| r.pv() == "$(P)VALVE:POS").unwrap();
    assert_eq!(valve.record_type(), "ao");
}

#[test]
fn loading_the_same_root_twice_accumulates() {
    let dir = create_study_tree();
    let mut loader = DbLoader::new();
    loader.load_files(dir.path(), "db").unwrap();
    loader.load_files(dir.path(), "db").unwrap();
    assert_eq!(loader.file_count(), 2);
}

#[test]
fn missing_root_surfaces_an_ingest_error() {
    let dir = TempDir::new().unwrap();
    let mut loader = DbLoader::new();
    let missing = dir.path().join("absent");
    assert!(loader.load_files(&missing, "db").is_err());
}
