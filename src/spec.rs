use std::fmt;

/// Declared value type for one environment variable
///
/// A spec carries no default; defaults are supplied at the call site so a
/// single spec can be shared as an immutable constant across call sites
/// with different fallbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spec {
    /// Any non-empty string, returned verbatim
    String,
    /// A finite IEEE-754 double
    Number,
    /// `1`/`true`/`yes`/`on` (case-insensitive) is true, everything else false
    Boolean,
    /// One of an ordered, non-empty set of exact string choices
    Enum(Vec<String>),
}

impl Spec {
    pub fn string() -> Self {
        Self::String
    }

    pub fn number() -> Self {
        Self::Number
    }

    pub fn boolean() -> Self {
        Self::Boolean
    }

    /// Enum spec over the given choices
    ///
    /// # Panics
    /// Panics if `choices` yields no items; an enum spec without choices can
    /// never resolve and is a programmer error.
    pub fn one_of<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices: Vec<String> = choices.into_iter().map(Into::into).collect();
        assert!(!choices.is_empty(), "enum spec requires at least one choice");
        Self::Enum(choices)
    }
}

/// Omitting the spec means "plain string"
impl Default for Spec {
    fn default() -> Self {
        Self::String
    }
}

impl fmt::Display for Spec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::Enum(choices) => write!(f, "enum [{}]", choices.join(", ")),
        }
    }
}
