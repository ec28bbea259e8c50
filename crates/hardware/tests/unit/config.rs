//! Configuration parsing, defaults, and validation.

use std::io::Write;

use minirv_core::common::ConfigError;
use minirv_core::config::{Config, ErrorPolicy};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn empty_object_yields_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.system.ram_size, 0x100_0000);
    assert_eq!(config.system.framebuffer_base, 0x2000_0000);
    assert_eq!(config.general.error_policy, ErrorPolicy::Continue);
    assert_eq!(config.general.hang_threshold, Some(5000));
    assert_eq!(config.general.start_pc, 0);
    assert!(!config.general.trace_instructions);
}

#[test]
fn defaults_round_trip_through_json() {
    let json = Config::default().to_json().unwrap();
    assert_eq!(Config::from_json(&json).unwrap(), Config::default());
}

#[test]
fn null_hang_threshold_disables_detection() {
    let config = Config::from_json(r#"{ "general": { "hang_threshold": null } }"#).unwrap();
    assert_eq!(config.general.hang_threshold, None);
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(3)]
#[case(0x1_0001)]
#[case(0x30_0000)]
fn invalid_ram_sizes_are_rejected(#[case] ram_size: usize) {
    let json = format!(r#"{{ "system": {{ "ram_size": {ram_size} }} }}"#);
    match Config::from_json(&json) {
        Err(ConfigError::RamSize(size)) => assert_eq!(size, ram_size),
        other => panic!("expected RamSize error, got {other:?}"),
    }
}

#[rstest]
#[case(4)]
#[case(0x1000)]
#[case(0x100_0000)]
fn power_of_two_ram_sizes_are_accepted(#[case] ram_size: usize) {
    let json = format!(r#"{{ "system": {{ "ram_size": {ram_size} }} }}"#);
    assert_eq!(Config::from_json(&json).unwrap().system.ram_size, ram_size);
}

#[test]
fn misaligned_framebuffer_base_is_rejected() {
    let json = r#"{ "system": { "framebuffer_base": 536875008 } }"#;
    assert!(matches!(
        Config::from_json(json),
        Err(ConfigError::FramebufferBase(0x2000_1000))
    ));
}

#[test]
fn malformed_json_is_a_json_error() {
    assert!(matches!(
        Config::from_json("{ general: "),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn unknown_policy_is_a_json_error() {
    let json = r#"{ "general": { "error_policy": "Explode" } }"#;
    assert!(matches!(Config::from_json(json), Err(ConfigError::Json(_))));
}

#[test]
fn from_file_reads_and_validates() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "general": {{ "error_policy": "Halt", "start_pc": 256 }} }}"#
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.general.error_policy, ErrorPolicy::Halt);
    assert_eq!(config.general.start_pc, 0x100);
}

#[test]
fn from_file_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    match Config::from_file(&path) {
        Err(ConfigError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}
