#![no_main]

use lax_version::parse_version;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let version = parse_version(data);
    let unprefixed = data
        .strip_prefix(|c: char| c == 'v' || c == 'V')
        .unwrap_or(data);
    assert_eq!(version.raw_joined(), unprefixed);
    assert!(!version.greater_than(&version));
    assert!(version.is_semantically_equal(&version));
});
