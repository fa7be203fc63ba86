//! Comparison operators for version ranges

use std::cmp::Ordering;
use std::fmt;

/// Comparison operator of a single version range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Exact match, written as `==` or with no operator at all
    Exact,
    /// Not equal (!=)
    NotEqual,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

impl Operator {
    /// Parse operator from its textual form. The empty string is an exact match.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "" | "==" => Some(Operator::Exact),
            "!=" => Some(Operator::NotEqual),
            "<" => Some(Operator::LessThan),
            "<=" => Some(Operator::LessThanOrEqual),
            ">" => Some(Operator::GreaterThan),
            ">=" => Some(Operator::GreaterThanOrEqual),
            _ => None,
        }
    }

    /// Canonical string representation. `Exact` renders as nothing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Exact => "",
            Operator::NotEqual => "!=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Does `candidate.cmp(bound) == ordering` satisfy this operator?
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Exact => ordering == Ordering::Equal,
            Operator::NotEqual => ordering != Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }

    /// Get all supported operators
    pub fn supported_operators() -> &'static [&'static str] {
        &["==", "!=", "<", "<=", ">", ">="]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
