use std::fmt;

/// A resolved environment value
///
/// Enum specs resolve to [`Value::Str`] carrying the matched choice.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Str(String),
    Num(f64),
    Bool(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Num(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{}", s),
            Self::Num(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Str("x".to_string()).as_str(), Some("x"));
        assert_eq!(Value::Num(1.5).as_num(), Some(1.5));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
    }

    #[test]
    fn test_accessors_wrong_variant() {
        assert_eq!(Value::Num(1.0).as_str(), None);
        assert_eq!(Value::Str("1".to_string()).as_num(), None);
        assert_eq!(Value::Num(0.0).as_bool(), None);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from("host"), Value::Str("host".to_string()));
        assert_eq!(Value::from(String::from("host")), Value::Str("host".to_string()));
        assert_eq!(Value::from(8080i64), Value::Num(8080.0));
        assert_eq!(Value::from(0.5), Value::Num(0.5));
        assert_eq!(Value::from(true), Value::Bool(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Str("localhost".to_string()).to_string(), "localhost");
        assert_eq!(Value::Num(42.0).to_string(), "42");
        assert_eq!(Value::Bool(false).to_string(), "false");
    }
}
