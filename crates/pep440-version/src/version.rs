use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::error::VersionParseError;
use crate::{normalize, parser};

/// The canonical public version scheme from
/// <https://peps.python.org/pep-0440/#appendix-b-parsing-version-strings-with-regular-expressions>
static CANONICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
^([1-9][0-9]*!)?                            # epoch
(0|[1-9][0-9]*)(\.(0|[1-9][0-9]*))*         # release segment
((a|b|rc)(0|[1-9][0-9]*))?                  # pre-release
(\.post(0|[1-9][0-9]*))?                    # post release
(\.dev(0|[1-9][0-9]*))?                     # dev release
$",
    )
    .expect("the canonical version pattern is valid")
});

/// Optional pre-release modifier (alpha, beta or release candidate) appended to version
///
/// <https://peps.python.org/pep-0440/#pre-releases>
#[derive(PartialEq, Eq, Debug, Hash, Clone, Copy, Ord, PartialOrd)]
pub struct Prerelease {
    /// The kind of pre-release.
    pub kind: PrereleaseKind,
    /// The number of the pre-release.
    pub number: u64,
}

impl Display for Prerelease {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.kind, self.number)
    }
}

/// The phase of a pre-release, in ascending order.
///
/// Every accepted spelling maps onto one of these: `alpha` is `a`, `beta` is `b`, and `c`, `pre`
/// and `preview` are `rc`.
#[derive(PartialEq, Eq, Debug, Hash, Clone, Copy, Ord, PartialOrd)]
pub enum PrereleaseKind {
    /// alpha pre-release
    Alpha,
    /// beta pre-release
    Beta,
    /// release candidate pre-release
    Rc,
}

impl Display for PrereleaseKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alpha => write!(f, "a"),
            Self::Beta => write!(f, "b"),
            Self::Rc => write!(f, "rc"),
        }
    }
}

/// A part of the [local version identifier](<https://peps.python.org/pep-0440/#local-version-identifiers>)
///
/// Local versions are a mess:
///
/// > Comparison and ordering of local versions considers each segment of the local version
/// > (divided by a .) separately. If a segment consists entirely of ASCII digits then that section
/// > should be considered an integer for comparison purposes and if a segment contains any ASCII
/// > letters then that segment is compared lexicographically with case insensitivity. When
/// > comparing a numeric and lexicographic segment, the numeric section always compares as greater
/// > than the lexicographic segment. Additionally a local version with a great number of segments
/// > will always compare as greater than a local version with fewer segments, as long as the
/// > shorter local version’s segments match the beginning of the longer local version’s segments
/// > exactly.
///
/// Luckily the default `Ord` implementation for `[LocalSegment]` matches the PEP 440 rules.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum LocalSegment {
    /// Not-parseable as integer segment of local version, always lowercase
    String(String),
    /// Inferred integer segment of local version
    Number(u64),
}

impl Display for LocalSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(string) => write!(f, "{string}"),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

impl PartialOrd for LocalSegment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalSegment {
    fn cmp(&self, other: &Self) -> Ordering {
        // <https://peps.python.org/pep-0440/#local-version-identifiers>
        match (self, other) {
            (Self::Number(n1), Self::Number(n2)) => n1.cmp(n2),
            (Self::String(s1), Self::String(s2)) => s1.cmp(s2),
            (Self::Number(_), Self::String(_)) => Ordering::Greater,
            (Self::String(_), Self::Number(_)) => Ordering::Less,
        }
    }
}

/// A version number such as `1.2.3` or `4!5.6.7-a8.post9.dev0`.
///
/// Versions are immutable values: the `with_*` methods consume the version and return a new one.
/// Equality, hashing and ordering all go through [`Version::key`], so two versions are equal iff
/// they sort the same, regardless of how they were spelled (`1.0 == 1.0.0`, `1.0c1 == 1.0rc1`).
///
/// Parse with [`Version::from_str`]:
///
/// ```rust
/// use std::str::FromStr;
/// use pep440_version::Version;
///
/// let version = Version::from_str("1.19").unwrap();
/// assert!(version < Version::from_str("1.19.post1").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Version {
    epoch: u64,
    release: Vec<u64>,
    pre: Option<Prerelease>,
    post: Option<u64>,
    dev: Option<u64>,
    local: Option<Vec<LocalSegment>>,
}

impl Version {
    /// Create a final release such as `3.8` from its release numbers.
    ///
    /// A release always has at least one number, an empty `release` is treated as `0`.
    pub fn new<I>(release: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut release: Vec<u64> = release.into_iter().collect();
        if release.is_empty() {
            release.push(0);
        }
        Self {
            epoch: 0,
            release,
            pre: None,
            post: None,
            dev: None,
            local: None,
        }
    }

    /// Returns `true` if the given string is a public version in canonical form, i.e. it is
    /// exactly what [`Display`] renders for the parsed version, and it has no local segment.
    ///
    /// ```rust
    /// use pep440_version::Version;
    ///
    /// assert!(Version::is_canonical("1!1.0rc1.post2.dev3"));
    /// assert!(!Version::is_canonical("1.0c1"));
    /// assert!(!Version::is_canonical("1.0+abc"));
    /// ```
    pub fn is_canonical(version: &str) -> bool {
        CANONICAL_RE.is_match(version)
    }

    /// The [versioning epoch](https://peps.python.org/pep-0440/#version-epochs). Normally just 0,
    /// but you can increment it if you switched the versioning scheme.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The normal number part of the version
    /// (["final release"](https://peps.python.org/pep-0440/#final-releases)),
    /// such a `1.2.3` in `4!1.2.3-a8.post9.dev1`, with every number as given.
    pub fn release(&self) -> &[u64] {
        &self.release
    }

    /// The [pre-release](https://peps.python.org/pep-0440/#pre-releases), i.e. alpha, beta or rc
    /// plus a number
    pub fn pre(&self) -> Option<Prerelease> {
        self.pre
    }

    /// The [Post release version](https://peps.python.org/pep-0440/#post-releases),
    /// higher post version are preferred over lower post or none-post versions
    pub fn post(&self) -> Option<u64> {
        self.post
    }

    /// The [developmental release](https://peps.python.org/pep-0440/#developmental-releases),
    /// if any
    pub fn dev(&self) -> Option<u64> {
        self.dev
    }

    /// A [local version identifier](https://peps.python.org/pep-0440/#local-version-identifiers)
    /// such as `+deadbeef` in `1.2.3+deadbeef`, empty if there is none.
    pub fn local(&self) -> &[LocalSegment] {
        self.local.as_deref().unwrap_or_default()
    }

    /// Set the epoch and return the updated version.
    #[must_use]
    pub fn with_epoch(self, epoch: u64) -> Self {
        Self { epoch, ..self }
    }

    /// Set the pre-release component and return the updated version.
    #[must_use]
    pub fn with_pre(self, pre: Option<Prerelease>) -> Self {
        Self { pre, ..self }
    }

    /// Set the post-release component and return the updated version.
    #[must_use]
    pub fn with_post(self, post: Option<u64>) -> Self {
        Self { post, ..self }
    }

    /// Set the dev-release component and return the updated version.
    #[must_use]
    pub fn with_dev(self, dev: Option<u64>) -> Self {
        Self { dev, ..self }
    }

    /// Set the local segments and return the updated version.
    ///
    /// An empty list of segments is the same as no local version at all.
    #[must_use]
    pub fn with_local(self, local: Option<Vec<LocalSegment>>) -> Self {
        Self {
            local: local.filter(|segments| !segments.is_empty()),
            ..self
        }
    }

    /// Return the version without its local segment, e.g. `1.0` for `1.0+deadbeef`.
    #[must_use]
    pub fn without_local(&self) -> Self {
        Self {
            local: None,
            ..self.clone()
        }
    }

    /// Return the epoch and release only, e.g. `1!2.0` for `1!2.0rc1.post1.dev2+abc`.
    #[must_use]
    pub fn only_release(&self) -> Self {
        Self::new(self.release.iter().copied()).with_epoch(self.epoch)
    }

    /// Whether this is an alpha/beta/rc or dev version
    pub fn any_prerelease(&self) -> bool {
        self.is_pre() || self.is_dev()
    }

    /// Whether this is a final or post release without pre or dev part
    pub fn is_stable(&self) -> bool {
        !self.any_prerelease()
    }

    /// Whether this is an alpha/beta/rc version
    pub fn is_pre(&self) -> bool {
        self.pre.is_some()
    }

    /// Whether this is a dev version
    pub fn is_dev(&self) -> bool {
        self.dev.is_some()
    }

    /// Whether this is a post version
    pub fn is_post(&self) -> bool {
        self.post.is_some()
    }

    /// Whether this is a local version (e.g. `1.2.3+localsuffixesareweird`)
    pub fn is_local(&self) -> bool {
        self.local.is_some()
    }
}

/// Shows the normalized version, which parses back into an equal version.
impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}!", self.epoch)?;
        }
        let release = self
            .release
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<String>>()
            .join(".");
        write!(f, "{release}")?;
        if let Some(pre) = self.pre {
            write!(f, "{pre}")?;
        }
        if let Some(post) = self.post {
            write!(f, ".post{post}")?;
        }
        if let Some(dev) = self.dev {
            write!(f, ".dev{dev}")?;
        }
        if let Some(local) = &self.local {
            let local = local
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>()
                .join(".");
            write!(f, "+{local}")?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    /// Parses a version such as `1.19`, `1.0a1`,`1.0+abc.5` or `1!2012.2`
    fn from_str(version: &str) -> Result<Self, Self::Err> {
        let raw = match parser::parse(version) {
            Ok(raw) => raw,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("Rejected version: {err}");
                return Err(err);
            }
        };
        let normalized = normalize::normalize(raw);
        #[cfg(feature = "tracing")]
        {
            if tracing::enabled!(tracing::Level::TRACE) {
                let canonical = normalized.to_string();
                if canonical != version {
                    tracing::trace!("Normalized version `{version}` to `{canonical}`");
                }
            }
        }
        Ok(normalized)
    }
}

impl PartialEq<Self> for Version {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Version {}

impl Hash for Version {
    /// Hashes the comparison key, so that e.g. `1.0` and `1.0.0` hash the same.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd<Self> for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// 1.0.dev456 < 1.0a1 < 1.0a2.dev456 < 1.0a12.dev456 < 1.0a12 < 1.0b1.dev456 < 1.0b2
    /// < 1.0b2.post345.dev456 < 1.0b2.post345 < 1.0b2-346 < 1.0c1.dev456 < 1.0c1 < 1.0rc2 < 1.0c3
    /// < 1.0 < 1.0.post456.dev34 < 1.0.post456
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

/// <https://github.com/serde-rs/serde/issues/1316#issue-332908452>
#[cfg(feature = "serde")]
impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
