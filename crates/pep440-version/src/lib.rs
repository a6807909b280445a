//! Parsing, normalization and ordering of Python version numbers, following
//! [PEP 440](https://peps.python.org/pep-0440)
//!
//! ```rust
//! use std::str::FromStr;
//! use pep440_version::{Operator, Version};
//!
//! let version = Version::from_str("1.0c1").unwrap();
//! assert_eq!(version.to_string(), "1.0rc1");
//! assert!(version < Version::from_str("1.0").unwrap());
//! assert!(Operator::Equal.evaluate(&version, &Version::from_str("1.0.0rc1").unwrap()));
//! ```
//!
//! A version string goes through three stages:
//!
//! * The parser checks it against the grammar and splits it into its lexical fields, this is the
//!   only place where errors occur
//! * The normalizer canonicalizes those fields: `alpha` is `a`, `rev` is `post`, `1.0a` is
//!   `1.0a0`, local labels are lowercased and split into segments
//! * The resulting [`Version`] is compared through its [`VersionKey`]
//!
//! The ordering has a few unintuitive parts:
//!
//! * An epoch that you can prefix the version which, e.g. `1!1.2.3`. Lower epoch always means lower
//!   version (`2.0 < 1!1.0`)
//! * Trailing zeros don't matter, `1.0 == 1.0.0`
//! * A dev release of a final version sorts before its pre-releases (`1.0.dev1 < 1.0a1`), while a
//!   dev release of a pre or post release sorts just below it (`1.0a1.dev1 < 1.0a1`)
//! * Post releases come after the release they are attached to, including pre-releases
//!   (`1.0b2 < 1.0b2.post1 < 1.0rc1`)
//! * Local versions sort after the same public version, numeric segments after alphanumeric ones
//!   (`1.2 < 1.2+abc < 1.2+abc.1 < 1.2+1`)

use std::cmp::Ordering;

pub use crate::{
    error::{ErrorKind, OperatorParseError, VersionParseError},
    key::VersionKey,
    operator::Operator,
    version::{LocalSegment, Prerelease, PrereleaseKind, Version},
};

mod cursor;
mod error;
mod key;
mod normalize;
mod operator;
mod parser;
mod version;

/// Parse and normalize a version string.
///
/// Equivalent to [`Version::from_str`](std::str::FromStr::from_str).
pub fn parse(version: &str) -> Result<Version, VersionParseError> {
    version.parse()
}

/// Compare two versions, from which all six [`Operator`]s are derived.
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp(b)
}

/// Render a version in its canonical form, which parses back into an equal version.
///
/// Equivalent to `version.to_string()`.
pub fn to_canonical_string(version: &Version) -> String {
    version.to_string()
}
