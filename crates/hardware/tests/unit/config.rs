//! Configuration loading tests.

use std::io::Write;

use mipsim_core::Config;
use mipsim_core::config::{BranchCompare, BranchDisplacement, ConfigError};
use rstest::rstest;

#[test]
fn defaults() {
    let config = Config::default();

    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.start_pc, None);
    assert_eq!(config.memory.ram_base, 0);
    assert_eq!(config.memory.ram_size, 8 * 1024 * 1024);
    assert!(config.memory.enforce_alignment);
    assert_eq!(config.exec.branch_displacement, BranchDisplacement::SignExtended);
    assert_eq!(config.exec.branch_compare, BranchCompare::Immediate);
    assert_eq!(config.start_pc(), 0);
}

#[test]
fn empty_object_is_default() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.memory.ram_size, Config::default().memory.ram_size);
}

#[test]
fn partial_sections_keep_defaults() {
    let config = Config::from_json(r#"{ "memory": { "ram_base": 4096 } }"#).unwrap();

    assert_eq!(config.memory.ram_base, 4096);
    assert_eq!(config.memory.ram_size, 8 * 1024 * 1024);
    assert!(config.memory.enforce_alignment);
    assert_eq!(config.start_pc(), 4096);
}

#[rstest]
#[case("SignExtended", BranchDisplacement::SignExtended)]
#[case("Unextended", BranchDisplacement::Unextended)]
#[case("Raw", BranchDisplacement::Unextended)]
fn branch_policy_names(#[case] name: &str, #[case] expected: BranchDisplacement) {
    let json = format!(r#"{{ "exec": {{ "branch_displacement": "{name}" }} }}"#);
    let config = Config::from_json(&json).unwrap();
    assert_eq!(config.exec.branch_displacement, expected);
}

#[rstest]
#[case("Immediate", BranchCompare::Immediate)]
#[case("Register", BranchCompare::Register)]
fn branch_compare_names(#[case] name: &str, #[case] expected: BranchCompare) {
    let json = format!(r#"{{ "exec": {{ "branch_compare": "{name}" }} }}"#);
    let config = Config::from_json(&json).unwrap();
    assert_eq!(config.exec.branch_compare, expected);
    assert_eq!(config.exec.branch_displacement, BranchDisplacement::SignExtended);
}

#[test]
fn explicit_start_pc_wins() {
    let config =
        Config::from_json(r#"{ "general": { "start_pc": 256 }, "memory": { "ram_base": 4096 } }"#)
            .unwrap();
    assert_eq!(config.start_pc(), 256);
}

#[test]
fn invalid_json_is_reported() {
    let err = Config::from_json(r#"{ "memory": { "ram_size": "big" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
    assert!(err.to_string().starts_with("invalid config:"));
}

#[test]
fn unknown_policy_is_rejected() {
    let err = Config::from_json(r#"{ "exec": { "branch_displacement": "Sideways" } }"#);
    assert!(matches!(err, Err(ConfigError::Json(_))));
}

#[test]
fn from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "general": {{ "trace_instructions": true }}, "memory": {{ "enforce_alignment": false }} }}"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();

    assert!(config.general.trace_instructions);
    assert!(!config.memory.enforce_alignment);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
