//! The grammar half of version parsing.
//!
//! ```text
//! version    := ["v"] [epoch "!"] release [pre] [post] [dev] [local]
//! epoch      := digits
//! release    := digits ("." digits)*
//! pre        := [sep] ("alpha"|"a"|"beta"|"b"|"c"|"rc"|"pre"|"preview") [sep] [digits]
//! post       := ( [sep] ("post"|"rev"|"r") [sep] [digits] ) | ("-" digits)
//! dev        := [sep] "dev" [sep] [digits]
//! local      := "+" localseg ("."|"-"|"_" localseg)*
//! localseg   := alphanumeric+
//! sep        := "."|"-"|"_"
//! ```
//!
//! Labels are matched case-insensitively. The parser only recognizes the shape of a version; it
//! hands the raw labels and the local label to [`crate::normalize`], which canonicalizes them.

use crate::cursor::Cursor;
use crate::error::{ErrorKind, VersionParseError};
use crate::version::PrereleaseKind;

/// Pre-release spellings with their phase, longest first so that `preview` isn't read as
/// `pre` + `view`.
///
/// <https://peps.python.org/pep-0440/#pre-release-spelling>
pub(crate) const PRE_LABELS: &[(&str, PrereleaseKind)] = &[
    ("preview", PrereleaseKind::Rc),
    ("alpha", PrereleaseKind::Alpha),
    ("beta", PrereleaseKind::Beta),
    ("pre", PrereleaseKind::Rc),
    ("rc", PrereleaseKind::Rc),
    ("a", PrereleaseKind::Alpha),
    ("b", PrereleaseKind::Beta),
    ("c", PrereleaseKind::Rc),
];

/// Explicit post-release spellings, longest first.
pub(crate) const POST_LABELS: &[(&str, ())] = &[("post", ()), ("rev", ()), ("r", ())];

const DEV_LABELS: &[(&str, ())] = &[("dev", ())];

/// The lexical fields of a version string, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawVersion<'a> {
    pub(crate) epoch: Option<u64>,
    pub(crate) release: Vec<u64>,
    pub(crate) pre: Option<RawLabel<'a, PrereleaseKind>>,
    pub(crate) post: Option<RawPost<'a>>,
    pub(crate) dev: Option<RawLabel<'a>>,
    /// Everything after the `+`, separators included.
    pub(crate) local: Option<&'a str>,
}

/// A label such as `alpha` or `REV` as written, with what it stands for and the number that
/// followed it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawLabel<'a, K = ()> {
    pub(crate) label: &'a str,
    pub(crate) kind: K,
    pub(crate) number: Option<u64>,
}

/// The two mutually exclusive spellings of a post release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawPost<'a> {
    /// Ex) `1.0-5`
    Implicit(u64),
    /// Ex) `1.0.post5`, `1.0-r5`, `1.0rev`
    Explicit(RawLabel<'a>),
}

/// Split `version` into its lexical fields, or reject it.
pub(crate) fn parse(version: &str) -> Result<RawVersion<'_>, VersionParseError> {
    Parser {
        cursor: Cursor::new(version),
    }
    .parse()
    .map_err(|kind| VersionParseError::new(version, kind))
}

fn is_separator(char: char) -> bool {
    matches!(char, '.' | '-' | '_')
}

struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    fn parse(mut self) -> Result<RawVersion<'a>, ErrorKind> {
        if self.cursor.at_end() {
            return Err(ErrorKind::Empty);
        }

        // <https://peps.python.org/pep-0440/#preceding-v-character>
        self.cursor.eat_if(|char| char.eq_ignore_ascii_case(&'v'));

        let (epoch, release) = self.parse_epoch_and_release()?;
        let pre = self.parse_labeled(PRE_LABELS)?;
        let post = self.parse_post()?;
        let dev = self.parse_labeled(DEV_LABELS)?;
        let local = self.parse_local()?;

        if !self.cursor.at_end() {
            return Err(ErrorKind::UnexpectedEnd {
                parsed: self.cursor.consumed().to_string(),
                remaining: self.cursor.remaining().to_string(),
            });
        }

        Ok(RawVersion {
            epoch,
            release,
            pre,
            post,
            dev,
            local,
        })
    }

    /// Parse a run of ASCII digits, if there is one.
    fn parse_number(&mut self) -> Result<Option<u64>, ErrorKind> {
        let (start, len) = self.cursor.take_while(|char| char.is_ascii_digit());
        if len == 0 {
            return Ok(None);
        }
        let digits = self.cursor.slice(start, len);
        // Only overflow can fail here, leading zeros are fine.
        digits
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ErrorKind::NumberTooBig {
                digits: digits.to_string(),
            })
    }

    /// The leading number is the epoch if a `!` follows it, otherwise the first release number.
    fn parse_epoch_and_release(&mut self) -> Result<(Option<u64>, Vec<u64>), ErrorKind> {
        let Some(leading) = self.parse_number()? else {
            return Err(ErrorKind::NoLeadingNumber);
        };

        let (epoch, first) = if self.cursor.eat_char('!') {
            let Some(first) = self.parse_number()? else {
                return Err(ErrorKind::NoReleaseAfterEpoch);
            };
            (Some(leading), first)
        } else {
            (None, leading)
        };

        let mut release = vec![first];
        // A `.` only continues the release when a digit follows, as in `1.0.dev1` it introduces
        // the dev suffix instead.
        while self.cursor.peek_char() == Some('.')
            && self
                .cursor
                .peek_second_char()
                .is_some_and(|char| char.is_ascii_digit())
        {
            self.cursor.next();
            release.extend(self.parse_number()?);
        }

        Ok((epoch, release))
    }

    /// Parse `[sep] label [sep] [digits]` for one of `labels`.
    ///
    /// The leading separator is given back if no label follows it, so that e.g. in `1.0-dev` the
    /// `-` is still available to the dev suffix after the post suffix didn't match. The separator
    /// after a label belongs to the label even without a number (`1.0a.` is `1.0a0`).
    fn parse_labeled<K: Copy>(
        &mut self,
        labels: &[(&str, K)],
    ) -> Result<Option<RawLabel<'a, K>>, ErrorKind> {
        let checkpoint = self.cursor.clone();
        self.cursor.eat_if(is_separator);
        let Some((label, kind)) = self.cursor.eat_any_keyword(labels) else {
            self.cursor = checkpoint;
            return Ok(None);
        };

        self.cursor.eat_if(is_separator);
        let number = self.parse_number()?;

        Ok(Some(RawLabel {
            label,
            kind,
            number,
        }))
    }

    /// The implicit `-N` form is tried before the explicit `post`/`rev`/`r` form; at most one of
    /// them is recognized.
    fn parse_post(&mut self) -> Result<Option<RawPost<'a>>, ErrorKind> {
        let checkpoint = self.cursor.clone();
        if self.cursor.eat_char('-') {
            if let Some(number) = self.parse_number()? {
                return Ok(Some(RawPost::Implicit(number)));
            }
            self.cursor = checkpoint;
        }

        Ok(self.parse_labeled(POST_LABELS)?.map(RawPost::Explicit))
    }

    /// Parse `+segment(sep segment)*`, returning the label without the `+`.
    fn parse_local(&mut self) -> Result<Option<&'a str>, ErrorKind> {
        if !self.cursor.eat_char('+') {
            return Ok(None);
        }

        let start = self.cursor.pos();
        let mut precursor = '+';
        loop {
            let (_, len) = self.cursor.take_while(|char| char.is_ascii_alphanumeric());
            if len == 0 {
                return Err(ErrorKind::LocalEmpty { precursor });
            }

            match self.cursor.eat_if(is_separator) {
                Some(separator) => precursor = separator,
                None => break,
            }
        }

        Ok(Some(self.cursor.slice(start, self.cursor.pos() - start)))
    }
}

#[cfg(test)]
mod tests {
    use super::{RawLabel, RawPost, RawVersion, parse};
    use crate::{ErrorKind, PrereleaseKind};

    fn label(label: &str, number: Option<u64>) -> RawLabel<'_> {
        RawLabel {
            label,
            kind: (),
            number,
        }
    }

    fn pre(
        label: &str,
        kind: PrereleaseKind,
        number: Option<u64>,
    ) -> RawLabel<'_, PrereleaseKind> {
        RawLabel {
            label,
            kind,
            number,
        }
    }

    #[test]
    fn all_fields() {
        let raw = parse("V2!1.02.3-Preview.4_REV_5-dev6+Ubuntu-1.2").unwrap();
        assert_eq!(
            raw,
            RawVersion {
                epoch: Some(2),
                release: vec![1, 2, 3],
                pre: Some(pre("Preview", PrereleaseKind::Rc, Some(4))),
                post: Some(RawPost::Explicit(label("REV", Some(5)))),
                dev: Some(label("dev", Some(6))),
                local: Some("Ubuntu-1.2"),
            }
        );
    }

    #[test]
    fn release_only() {
        let raw = parse("1.0").unwrap();
        assert_eq!(raw.epoch, None);
        assert_eq!(raw.release, vec![1, 0]);
        assert_eq!(raw.pre, None);
        assert_eq!(raw.post, None);
        assert_eq!(raw.dev, None);
        assert_eq!(raw.local, None);
    }

    #[test]
    fn implicit_post() {
        let raw = parse("1.0b2-346").unwrap();
        assert_eq!(raw.pre, Some(pre("b", PrereleaseKind::Beta, Some(2))));
        assert_eq!(raw.post, Some(RawPost::Implicit(346)));
    }

    #[test]
    fn separator_is_given_back() {
        // The `-` isn't an implicit post release since no digits follow, and it isn't the
        // separator of an explicit one since no label follows, so it belongs to `dev`.
        let raw = parse("1.0-dev").unwrap();
        assert_eq!(raw.post, None);
        assert_eq!(raw.dev, Some(label("dev", None)));

        // The `.` stays with the `a`, `dev` doesn't need one.
        let raw = parse("1.0a.dev").unwrap();
        assert_eq!(raw.pre, Some(pre("a", PrereleaseKind::Alpha, None)));
        assert_eq!(raw.dev, Some(label("dev", None)));

        let raw = parse("1.0a._dev").unwrap();
        assert_eq!(raw.pre, Some(pre("a", PrereleaseKind::Alpha, None)));
        assert_eq!(raw.dev, Some(label("dev", None)));
    }

    #[test]
    fn separator_after_label() {
        let raw = parse("1.0a.").unwrap();
        assert_eq!(raw.pre, Some(pre("a", PrereleaseKind::Alpha, None)));
        let raw = parse("1.0a-").unwrap();
        assert_eq!(raw.pre, Some(pre("a", PrereleaseKind::Alpha, None)));
        let raw = parse("1.0.post.").unwrap();
        assert_eq!(raw.post, Some(RawPost::Explicit(label("post", None))));
        let raw = parse("1.0-post_").unwrap();
        assert_eq!(raw.post, Some(RawPost::Explicit(label("post", None))));
        let raw = parse("1.0.dev.").unwrap();
        assert_eq!(raw.dev, Some(label("dev", None)));
        let raw = parse("1.0rc_+abc").unwrap();
        assert_eq!(raw.pre, Some(pre("rc", PrereleaseKind::Rc, None)));
        assert_eq!(raw.local, Some("abc"));
        // One separator only
        assert!(parse("1.0a..").is_err());
        assert!(parse("1.0.dev._").is_err());
    }

    #[test]
    fn longest_label_wins() {
        assert_eq!(
            parse("1.0alpha").unwrap().pre,
            Some(pre("alpha", PrereleaseKind::Alpha, None))
        );
        assert_eq!(
            parse("1.0preview2").unwrap().pre,
            Some(pre("preview", PrereleaseKind::Rc, Some(2)))
        );
        assert_eq!(
            parse("1.0rc1").unwrap().pre,
            Some(pre("rc", PrereleaseKind::Rc, Some(1)))
        );
        assert_eq!(
            parse("1.0rev1").unwrap().post,
            Some(RawPost::Explicit(label("rev", Some(1))))
        );
        // `r` is a post label, `rc` is a pre label.
        let raw = parse("1.0r").unwrap();
        assert_eq!(raw.pre, None);
        assert_eq!(raw.post, Some(RawPost::Explicit(label("r", None))));
    }

    #[test]
    fn leading_zeros() {
        let raw = parse("00!01.002a0003").unwrap();
        assert_eq!(raw.epoch, Some(0));
        assert_eq!(raw.release, vec![1, 2]);
        assert_eq!(raw.pre, Some(pre("a", PrereleaseKind::Alpha, Some(3))));
    }

    #[test]
    fn only_one_post() {
        let err = parse("1.0-1.post2").unwrap_err();
        assert_eq!(
            *err.kind(),
            ErrorKind::UnexpectedEnd {
                parsed: "1.0-1".to_string(),
                remaining: ".post2".to_string(),
            }
        );
    }

    #[test]
    fn nothing_after_dev_but_local() {
        assert!(parse("1.0.dev1.post1").is_err());
        assert!(parse("1.0.dev1a1").is_err());
        assert_eq!(parse("1.0.dev1+abc").unwrap().local, Some("abc"));
    }

    #[test]
    fn number_too_big() {
        let err = parse("1.18446744073709551616").unwrap_err();
        assert_eq!(
            *err.kind(),
            ErrorKind::NumberTooBig {
                digits: "18446744073709551616".to_string()
            }
        );
        assert_eq!(
            parse("18446744073709551615").unwrap().release,
            vec![u64::MAX]
        );
    }

    #[test]
    fn long_local_segment() {
        // Local segments are only checked for their shape, however long.
        assert_eq!(
            parse("1.0+abc.99999999999999999999").unwrap().local,
            Some("abc.99999999999999999999")
        );
    }

    #[test]
    fn local_empty() {
        assert_eq!(
            *parse("1.0+").unwrap_err().kind(),
            ErrorKind::LocalEmpty { precursor: '+' }
        );
        assert_eq!(
            *parse("1.0+abc.").unwrap_err().kind(),
            ErrorKind::LocalEmpty { precursor: '.' }
        );
        assert_eq!(
            *parse("1.0+_foobar").unwrap_err().kind(),
            ErrorKind::LocalEmpty { precursor: '+' }
        );
    }

    #[test]
    fn empty_and_missing_release() {
        assert_eq!(*parse("").unwrap_err().kind(), ErrorKind::Empty);
        assert_eq!(*parse("v").unwrap_err().kind(), ErrorKind::NoLeadingNumber);
        assert_eq!(*parse("1!").unwrap_err().kind(), ErrorKind::NoReleaseAfterEpoch);
        assert_eq!(*parse("1!v2").unwrap_err().kind(), ErrorKind::NoReleaseAfterEpoch);
    }
}
