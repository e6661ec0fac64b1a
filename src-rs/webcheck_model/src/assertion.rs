use std::fmt;

use crate::value::Value;

/// Whether an examined element is expected to be on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Existence {
    /// `exists`
    Exists,
    /// `not-exists`
    NotExists,
}

impl Existence {
    /// Returns the check as written.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::NotExists => "not-exists",
        }
    }
}

impl fmt::Display for Existence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an examined value is compared with an expected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `is`
    Is,
    /// `is-not`
    IsNot,
    /// `includes`
    Includes,
    /// `excludes`
    Excludes,
    /// `matches`
    Matches,
}

impl Comparison {
    /// Returns the comparison as written.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Is => "is",
            Self::IsNot => "is-not",
            Self::Includes => "includes",
            Self::Excludes => "excludes",
            Self::Matches => "matches",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What an assertion checks about its examined value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expectation {
    /// The examined element exists, or does not.
    Existence(Existence),
    /// The examined value compares with an expected value.
    Comparison {
        /// The comparison.
        comparison: Comparison,
        /// The value the examined one is compared with.
        expected: Value,
    },
}

/// One assertion of a step, along with the text it was written as.
///
/// Existence assertions only examine a value. Every other comparison also
/// carries the value the examined one is compared with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assertion {
    source: String,
    examined: Value,
    expectation: Expectation,
}

impl Assertion {
    /// Creates an assertion with no expected value, such as `".selector" exists`.
    #[must_use]
    pub fn existence(source: impl Into<String>, examined: Value, existence: Existence) -> Self {
        Self {
            source: source.into(),
            examined,
            expectation: Expectation::Existence(existence),
        }
    }

    /// Creates an assertion comparing two values, such as `$page.title is "Home"`.
    #[must_use]
    pub fn comparison(
        source: impl Into<String>,
        examined: Value,
        comparison: Comparison,
        expected: Value,
    ) -> Self {
        Self {
            source: source.into(),
            examined,
            expectation: Expectation::Comparison {
                comparison,
                expected,
            },
        }
    }

    /// Returns the text the assertion was written as.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the examined value.
    #[must_use]
    pub const fn examined(&self) -> &Value {
        &self.examined
    }

    /// Returns what the assertion checks.
    #[must_use]
    pub const fn expectation(&self) -> &Expectation {
        &self.expectation
    }

    /// Returns the expected value of a comparison.
    #[must_use]
    pub const fn expected(&self) -> Option<&Value> {
        match &self.expectation {
            Expectation::Comparison { expected, .. } => Some(expected),
            Expectation::Existence(_) => None,
        }
    }

    /// Returns this assertion examining `examined` instead.
    #[must_use]
    pub fn with_examined(self, examined: Value) -> Self {
        Self { examined, ..self }
    }

    /// Returns this assertion expecting `expected` instead.
    ///
    /// Existence assertions are returned unchanged.
    #[must_use]
    pub fn with_expected(mut self, new_expected: Value) -> Self {
        if let Expectation::Comparison { expected, .. } = &mut self.expectation {
            *expected = new_expected;
        }
        self
    }
}

impl fmt::Display for Assertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
