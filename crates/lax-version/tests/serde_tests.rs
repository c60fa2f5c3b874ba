#![cfg(feature = "serde")]

use lax_version::Version;

#[test]
fn test_serialize_keeps_every_part() {
    let version = Version::parse("v1.2.3.4-rc1");
    let json = serde_json::to_string(&version).unwrap();
    assert_eq!(json, r#""1.2.3.4-rc1""#);
}

#[test]
fn test_serialize_parts() {
    let version = Version::parse("2.0.0-RC11");
    let json = serde_json::to_string(version.parts()).unwrap();
    assert_eq!(json, r#"["2","0","0-RC11"]"#);
}

#[test]
fn test_deserialize_parses() {
    let version: Version = serde_json::from_str(r#""V3.1""#).unwrap();
    assert_eq!(version, Version::parse("3.1"));
    assert!(version.is_semantically_equal(&Version::new(3, 1, 0)));
}

#[test]
fn test_deserialize_any_string() {
    let versions: Vec<Version> = serde_json::from_str(r#"["", "nightly", "1..2"]"#).unwrap();
    assert_eq!(versions.len(), 3);
    assert_eq!(versions[2].raw_joined(), "1..2");
}

#[test]
fn test_deserialize_rejects_non_strings() {
    assert!(serde_json::from_str::<Version>("123").is_err());
}
