use lax_version::{Version, find_latest_by, parse_version, sort_by_version};
use pretty_assertions::assert_eq;

#[test]
fn test_sort_mixed_prereleases() {
    let unordered = vec![
        "1.2.3-alpha2",
        "1.2.3-RC11",
        "1.2.3",
        "1.2.3-beta1",
        "1.2.1",
        "1.2.2",
        "1.2.4",
        "1.1.1",
        "1.3.1",
        "1.2.3-RC1",
    ];

    let sorted = sort_by_version(&unordered, |s| parse_version(s));

    assert_eq!(
        sorted,
        [
            "1.1.1",
            "1.2.1",
            "1.2.2",
            "1.2.3-alpha2",
            "1.2.3-beta1",
            "1.2.3-RC1",
            "1.2.3-RC11",
            "1.2.3",
            "1.2.4",
            "1.3.1",
        ]
        .iter()
        .collect::<Vec<_>>()
    );
    // The input is left alone.
    assert_eq!(unordered[0], "1.2.3-alpha2");
}

#[test]
fn test_find_latest_among_prereleases() {
    let versions = [
        "1.2.3-alpha2",
        "1.2.3-RC11",
        "1.2.3",
        "1.2.3-beta1",
        "1.2.1",
        "1.2.3-RC1",
    ];

    let latest = find_latest_by(versions, |s| parse_version(s));

    assert_eq!(latest, Some("1.2.3"));
}

#[test]
fn test_find_latest_with_v_prefixed_tags() {
    let tags = vec!["v0.1.0", "v0.10.0", "v0.9.9", "V0.10.0-rc3"];
    let latest = find_latest_by(tags, |s| parse_version(s));
    assert_eq!(latest, Some("v0.10.0"));
}

#[test]
fn test_std_sort_agrees_with_helper() {
    let mut versions = ["2.0.0", "1.0.0-rc1", "1.0.0", "0.9"].map(Version::parse);
    versions.sort_by(Version::semantic_cmp);
    let rendered = versions.iter().map(Version::raw_joined).collect::<Vec<_>>();
    assert_eq!(rendered, ["0.9", "1.0.0-rc1", "1.0.0", "2.0.0"]);

    let newest = versions.iter().max_by(|a, b| a.semantic_cmp(b));
    assert_eq!(newest.map(Version::to_string), Some("2.0.0".to_string()));
}
