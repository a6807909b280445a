/// An error that occurs when a string does not match the version grammar.
///
/// This is the only failure mode of the crate: once a [`crate::Version`] exists, normalizing,
/// rendering and comparing it cannot fail.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("Invalid version `{version}`: {kind}")]
pub struct VersionParseError {
    version: String,
    // Boxed so that `Result<Version, VersionParseError>` stays small.
    kind: Box<ErrorKind>,
}

impl VersionParseError {
    pub(crate) fn new(version: &str, kind: ErrorKind) -> Self {
        Self {
            version: version.to_string(),
            kind: Box::new(kind),
        }
    }

    /// The input that failed to parse.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The reason the input was rejected.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

/// The specific reason a version string was rejected.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ErrorKind {
    /// Ex) ``
    #[error("a version must not be empty")]
    Empty,
    /// Ex) `abc`, `-3.0`, `version 4`
    #[error("expected version to start with a number, but no leading ASCII digits were found")]
    NoLeadingNumber,
    /// Ex) `1!`, `1!a1`
    #[error("expected a release number after the epoch separator `!`")]
    NoReleaseAfterEpoch,
    /// Ex) `1.99999999999999999999`
    #[error("number `{digits}` is too large to fit in a 64-bit unsigned integer")]
    NumberTooBig { digits: String },
    /// Ex) `1.0+`, `1.0+_foobar`, `1.0+abc.`
    #[error("expected a local version segment after `{precursor}`")]
    LocalEmpty { precursor: char },
    /// Ex) `7..34`, `1.0bb3`, `1.0+foo&asd`
    #[error(
        "after parsing `{parsed}`, found `{remaining}`, which is not part of a valid version"
    )]
    UnexpectedEnd { parsed: String, remaining: String },
}

/// An error that occurs when a string is not one of the six comparison operators.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("No such comparison operator `{operator}`, must be one of < <= == != >= >")]
pub struct OperatorParseError {
    pub(crate) operator: String,
}
