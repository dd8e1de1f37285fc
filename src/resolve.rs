use crate::error::EnvError;
use crate::source::{EnvSource, ProcessEnv};
use crate::spec::Spec;
use crate::value::Value;

/// Resolves `name` from `source` according to `spec`
///
/// An unset variable and a variable set to the empty string are treated
/// identically: both count as absent. When absent, a supplied `default` is
/// returned exactly as given, without being parsed or checked against the
/// spec — an enum default outside the choice set is returned as-is. Callers
/// own the correctness of their defaults.
///
/// Boolean specs never fail on a present value: `1`, `true`, `yes` and `on`
/// (any casing) resolve to `true`, everything else to `false`.
pub fn resolve(
    source: &impl EnvSource,
    name: &str,
    spec: &Spec,
    default: Option<Value>,
) -> Result<Value, EnvError> {
    let raw = source.get(name).filter(|raw| !raw.is_empty());

    let Some(raw) = raw else {
        return match default {
            Some(value) => Ok(value),
            None => Err(EnvError::MissingVariable {
                name: name.to_string(),
            }),
        };
    };

    match spec {
        Spec::String => Ok(Value::Str(raw)),
        Spec::Number => match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Value::Num(n)),
            _ => Err(EnvError::InvalidNumber {
                name: name.to_string(),
                value: raw,
            }),
        },
        Spec::Boolean => Ok(Value::Bool(matches!(
            raw.to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ))),
        Spec::Enum(choices) => {
            if choices.iter().any(|choice| choice == &raw) {
                Ok(Value::Str(raw))
            } else {
                Err(EnvError::InvalidChoice {
                    name: name.to_string(),
                    choices: choices.clone(),
                })
            }
        }
    }
}

/// Resolves a required variable from the process environment
pub fn env_required(name: &str, spec: &Spec) -> Result<Value, EnvError> {
    resolve(&ProcessEnv, name, spec, None)
}

/// Resolves a variable from the process environment, falling back to `default`
///
/// The default is returned only when the variable is unset or empty; a value
/// that is present but invalid for the spec is still an error.
pub fn env_or_default(
    name: &str,
    spec: &Spec,
    default: impl Into<Value>,
) -> Result<Value, EnvError> {
    resolve(&ProcessEnv, name, spec, Some(default.into()))
}

/// Resolves an optional variable from the process environment
///
/// Returns `Ok(None)` when the variable is unset or empty, `Ok(Some(value))`
/// when it resolves, and an error when it is present but invalid.
pub fn env_or_option(name: &str, spec: &Spec) -> Result<Option<Value>, EnvError> {
    match resolve(&ProcessEnv, name, spec, None) {
        Ok(value) => Ok(Some(value)),
        Err(EnvError::MissingVariable { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}
