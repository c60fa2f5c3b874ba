//! Parsing and ordering for loosely formatted version strings such as
//! `1.2.3`, `v2.0` or `1.2.3-RC11`.
//!
//! ```
//! use lax_version::{Version, find_latest_by};
//!
//! let tags = ["1.2.3-RC1", "1.2.3", "1.2.3-beta1"];
//! let latest = find_latest_by(tags, |tag| Version::parse(tag));
//! assert_eq!(latest, Some("1.2.3"));
//! assert!(Version::parse("1.2.3-rc1").is_semantically_equal(&"1.2.3-RC1".into()));
//! ```

mod part;
mod select;
mod version;

pub use part::{Part, parse_part};
pub use select::{find_latest_by, sort_by_version};
pub use version::{Version, VersionError, parse_version};
