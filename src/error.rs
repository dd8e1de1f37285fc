use colored::Colorize;
use std::fmt;

/// Errors that can occur while resolving an environment variable
///
/// All variants describe real misconfiguration, not transient conditions;
/// nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    /// The variable is unset (or set to the empty string) and no default was supplied
    MissingVariable { name: String },
    /// The spec expects a number but the value does not parse as a finite number
    InvalidNumber { name: String, value: String },
    /// The spec is an enum and the value is not one of its choices
    InvalidChoice { name: String, choices: Vec<String> },
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvError::MissingVariable { name } => {
                write!(
                    f,
                    "Missing required environment variable: {}",
                    name.magenta().bold()
                )
            }
            EnvError::InvalidNumber { name, value } => {
                write!(
                    f,
                    "Env {}: expected number, got {}",
                    name.magenta().bold(),
                    format!("\"{}\"", value).red()
                )
            }
            EnvError::InvalidChoice { name, choices } => {
                write!(
                    f,
                    "Env {}: must be one of [{}]",
                    name.magenta().bold(),
                    choices.join(", ").cyan()
                )
            }
        }
    }
}

impl std::error::Error for EnvError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variable_message() {
        colored::control::set_override(false);

        let error = EnvError::MissingVariable {
            name: "DATABASE_URL".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Missing required environment variable: DATABASE_URL"
        );
    }

    #[test]
    fn test_invalid_number_message() {
        colored::control::set_override(false);

        let error = EnvError::InvalidNumber {
            name: "PORT".to_string(),
            value: "not-a-number".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Env PORT: expected number, got \"not-a-number\""
        );
    }

    #[test]
    fn test_invalid_choice_message() {
        colored::control::set_override(false);

        let error = EnvError::InvalidChoice {
            name: "LOG_LEVEL".to_string(),
            choices: vec!["debug".to_string(), "info".to_string(), "warn".to_string()],
        };

        assert_eq!(
            error.to_string(),
            "Env LOG_LEVEL: must be one of [debug, info, warn]"
        );
    }

    #[test]
    fn test_invalid_choice_single_choice() {
        colored::control::set_override(false);

        let error = EnvError::InvalidChoice {
            name: "MODE".to_string(),
            choices: vec!["only".to_string()],
        };

        assert_eq!(error.to_string(), "Env MODE: must be one of [only]");
    }

    #[test]
    fn test_clone() {
        let error1 = EnvError::InvalidNumber {
            name: "RETRIES".to_string(),
            value: "many".to_string(),
        };

        let error2 = error1.clone();

        assert_eq!(error1, error2);
        assert_eq!(error1.to_string(), error2.to_string());
    }

    #[test]
    fn test_debug_format() {
        let error = EnvError::MissingVariable {
            name: "SECRET_KEY".to_string(),
        };

        let debug_output = format!("{:?}", error);
        assert!(debug_output.contains("MissingVariable"));
        assert!(debug_output.contains("SECRET_KEY"));
    }
}
