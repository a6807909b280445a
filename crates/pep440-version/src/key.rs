//! The comparison key that defines the total order over versions.
//!
//! According to <https://peps.python.org/pep-0440/#summary-of-permitted-suffixes-and-relative-ordering>
//! the order of pre/post-releases is:
//! .devN, aN, bN, rcN, <no suffix (final)>, .postN
//! but you can also have dev/post releases on pre-releases, so the key is a tuple of
//! `(epoch, release, pre, post, dev, local)` where each absent suffix is a tagged sentinel that
//! sorts either below or above every present value. All orderings are derived, so the variant
//! order of each enum is load-bearing.

use crate::version::{LocalSegment, PrereleaseKind, Version};

/// The canonical ordering key of a [`Version`], borrowed from it.
///
/// Two versions are equal iff their keys are equal, and [`Version`]'s `Ord` and `Hash` are the
/// key's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey<'a> {
    epoch: u64,
    /// The release without trailing zeros, which makes `1.0` equal to `1.0.0`.
    release: &'a [u64],
    pre: PreKey,
    post: PostKey,
    dev: DevKey,
    local: LocalKey<'a>,
}

/// Where a version sorts among the versions of its release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum PreKey {
    /// A dev release of the final version, e.g. `1.0.dev1`, sorts before all its pre-releases.
    DevOnly,
    /// Ex) `1.0a1`, `1.0rc2.post1`
    Pre(PrereleaseKind, u64),
    /// A final or post release sorts after all its pre-releases.
    Final,
}

/// No post release sorts below any post release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum PostKey {
    /// Ex) `1.0`
    Missing,
    /// Ex) `1.0.post1`
    Post(u64),
}

/// No dev release sorts above any dev release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum DevKey {
    /// Ex) `1.0.post1.dev1`
    Dev(u64),
    /// Ex) `1.0.post1`
    Missing,
}

/// No local version sorts below any local version. Segment lists compare lexicographically, a
/// strict prefix sorting first (`+abc` < `+abc.1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum LocalKey<'a> {
    /// Ex) `1.2`
    Missing,
    /// Ex) `1.2+abc.5`
    Segments(&'a [LocalSegment]),
}

impl Version {
    /// The key this version is compared, tested for equality and hashed by.
    pub fn key(&self) -> VersionKey<'_> {
        let release = self.release();
        let trimmed = release
            .iter()
            .rposition(|number| *number != 0)
            .map_or(0, |last| last + 1);

        let pre = match (self.pre(), self.post(), self.dev()) {
            (None, None, Some(_)) => PreKey::DevOnly,
            (None, _, _) => PreKey::Final,
            (Some(pre), _, _) => PreKey::Pre(pre.kind, pre.number),
        };

        let local = if self.is_local() {
            LocalKey::Segments(self.local())
        } else {
            LocalKey::Missing
        };

        VersionKey {
            epoch: self.epoch(),
            release: &release[..trimmed],
            pre,
            post: self.post().map_or(PostKey::Missing, PostKey::Post),
            dev: self.dev().map_or(DevKey::Missing, DevKey::Dev),
            local,
        }
    }
}
