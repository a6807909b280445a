//! Turn the lexical fields of a version into a canonical [`Version`].
//!
//! Nothing in here can fail: every input the parser accepts has exactly one normalized form.

use crate::parser::{RawPost, RawVersion};
use crate::version::{LocalSegment, Prerelease, Version};

/// Canonicalize the parsed fields.
///
/// * Pre-release synonyms collapse into `a`, `b` and `rc`
/// * `rev`, `r` and the implicit `-N` form all become a plain post release
/// * Omitted pre, post and dev numbers default to 0
/// * The local label is split on `.`, `-` and `_` and lowercased
pub(crate) fn normalize(raw: RawVersion<'_>) -> Version {
    // <https://peps.python.org/pep-0440/#implicit-pre-release-number>
    let pre = raw.pre.map(|pre| Prerelease {
        kind: pre.kind,
        number: pre.number.unwrap_or_default(),
    });

    // <https://peps.python.org/pep-0440/#post-release-spelling>
    let post = raw.post.map(|post| match post {
        RawPost::Implicit(number) => number,
        RawPost::Explicit(label) => label.number.unwrap_or_default(),
    });

    // <https://peps.python.org/pep-0440/#implicit-development-release-number>
    let dev = raw.dev.map(|dev| dev.number.unwrap_or_default());

    let local = raw.local.map(local_segments);

    Version::new(raw.release)
        // "If no explicit epoch is given, the implicit epoch is 0"
        .with_epoch(raw.epoch.unwrap_or_default())
        .with_pre(pre)
        .with_post(post)
        .with_dev(dev)
        .with_local(local)
}

/// Split a local label into segments.
///
/// <https://peps.python.org/pep-0440/#local-version-segments>
fn local_segments(local: &str) -> Vec<LocalSegment> {
    local
        .split(['.', '-', '_'])
        .map(|segment| {
            // An all-digit segment too large for a `u64` stays a string.
            if let Ok(number) = segment.parse::<u64>() {
                LocalSegment::Number(number)
            } else {
                // "if a segment contains any ASCII letters then that segment is compared
                // lexicographically with case insensitivity"
                LocalSegment::String(segment.to_ascii_lowercase())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{local_segments, normalize};
    use crate::parser::{PRE_LABELS, parse};
    use crate::{LocalSegment, Prerelease, PrereleaseKind};

    #[test]
    fn pre_synonyms() {
        for (label, kind) in PRE_LABELS {
            for spelling in [label.to_string(), label.to_ascii_uppercase()] {
                let version = normalize(parse(&format!("1.0{spelling}3")).unwrap());
                assert_eq!(
                    version.pre(),
                    Some(Prerelease {
                        kind: *kind,
                        number: 3
                    }),
                    "{spelling}"
                );
            }
        }
        let phase = |input: &str| normalize(parse(input).unwrap()).pre().map(|pre| pre.kind);
        assert_eq!(phase("1.0ALPHA"), Some(PrereleaseKind::Alpha));
        assert_eq!(phase("1.0Beta"), Some(PrereleaseKind::Beta));
        assert_eq!(phase("1.0c"), Some(PrereleaseKind::Rc));
        assert_eq!(phase("1.0pre"), Some(PrereleaseKind::Rc));
        assert_eq!(phase("1.0preview"), Some(PrereleaseKind::Rc));
    }

    #[test]
    fn defaults_to_zero() {
        let version = normalize(parse("1.0a.post-dev").unwrap());
        assert_eq!(
            version.pre(),
            Some(Prerelease {
                kind: PrereleaseKind::Alpha,
                number: 0
            })
        );
        assert_eq!(version.post(), Some(0));
        assert_eq!(version.dev(), Some(0));
        assert_eq!(version.epoch(), 0);
    }

    #[test]
    fn post_synonyms() {
        for input in ["1.0-7", "1.0.post7", "1.0rev7", "1.0-r7", "1.0_POST_7"] {
            let version = normalize(parse(input).unwrap());
            assert_eq!(version.post(), Some(7), "{input}");
            assert_eq!(version.pre(), None, "{input}");
        }
    }

    #[test]
    fn local_is_split_and_lowercased() {
        assert_eq!(
            local_segments("Ubuntu-01_abc.000123"),
            vec![
                LocalSegment::String("ubuntu".to_string()),
                LocalSegment::Number(1),
                LocalSegment::String("abc".to_string()),
                LocalSegment::Number(123),
            ]
        );
        assert_eq!(
            local_segments("123abc"),
            vec![LocalSegment::String("123abc".to_string())]
        );
    }

    #[test]
    fn local_overflow_is_a_string() {
        assert_eq!(
            local_segments("abc.99999999999999999999"),
            vec![
                LocalSegment::String("abc".to_string()),
                LocalSegment::String("99999999999999999999".to_string()),
            ]
        );
        assert_eq!(
            local_segments("18446744073709551615"),
            vec![LocalSegment::Number(u64::MAX)]
        );
    }
}
