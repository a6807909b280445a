use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::Version;
use crate::error::OperatorParseError;

/// One of `<` `<=` `==` `!=` `>=` `>`.
///
/// All six operators are answered from the single [`Ord`] implementation of [`Version`], so
/// they are consistent with each other by construction.
#[derive(Eq, PartialEq, Debug, Hash, Clone, Copy)]
pub enum Operator {
    /// `<`
    LessThan,
    /// `<=`
    LessThanEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `>=`
    GreaterThanEqual,
    /// `>`
    GreaterThan,
}

impl Operator {
    /// Every operator, in the order above.
    pub const ALL: [Self; 6] = [
        Self::LessThan,
        Self::LessThanEqual,
        Self::Equal,
        Self::NotEqual,
        Self::GreaterThanEqual,
        Self::GreaterThan,
    ];

    /// Whether `lhs <op> rhs` holds given `lhs.cmp(rhs)`.
    pub fn matches(self, ordering: Ordering) -> bool {
        match self {
            Self::LessThan => ordering.is_lt(),
            Self::LessThanEqual => ordering.is_le(),
            Self::Equal => ordering.is_eq(),
            Self::NotEqual => ordering.is_ne(),
            Self::GreaterThanEqual => ordering.is_ge(),
            Self::GreaterThan => ordering.is_gt(),
        }
    }

    /// Whether `lhs <op> rhs` holds.
    ///
    /// ```rust
    /// use std::str::FromStr;
    /// use pep440_version::{Operator, Version};
    ///
    /// let lhs = Version::from_str("1.0.dev1").unwrap();
    /// let rhs = Version::from_str("1.0a1").unwrap();
    /// assert!(Operator::LessThan.evaluate(&lhs, &rhs));
    /// ```
    pub fn evaluate(self, lhs: &Version, rhs: &Version) -> bool {
        self.matches(lhs.cmp(rhs))
    }

    /// Returns the operator with its operands swapped, e.g. `<` for `>`, such that
    /// `a <op> b` iff `b <op.flipped()> a`.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::LessThan => Self::GreaterThan,
            Self::LessThanEqual => Self::GreaterThanEqual,
            Self::Equal => Self::Equal,
            Self::NotEqual => Self::NotEqual,
            Self::GreaterThanEqual => Self::LessThanEqual,
            Self::GreaterThan => Self::LessThan,
        }
    }
}

impl FromStr for Operator {
    type Err = OperatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let operator = match s {
            "<" => Self::LessThan,
            "<=" => Self::LessThanEqual,
            "==" => Self::Equal,
            "!=" => Self::NotEqual,
            ">=" => Self::GreaterThanEqual,
            ">" => Self::GreaterThan,
            other => {
                return Err(OperatorParseError {
                    operator: other.to_string(),
                });
            }
        };
        Ok(operator)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::GreaterThanEqual => ">=",
            Self::GreaterThan => ">",
        };

        write!(f, "{operator}")
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Operator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Operator {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
