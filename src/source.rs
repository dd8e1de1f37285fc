use std::collections::HashMap;
use std::env;

/// Read-only lookup of environment variables by name
///
/// The resolver only ever reads through this trait, so the core logic can be
/// tested against an in-memory map instead of the process environment.
pub trait EnvSource {
    fn get(&self, name: &str) -> Option<String>;
}

/// The process-wide environment variable table
///
/// Non-unicode values are treated as absent, the same collapse the process
/// applies to missing variables.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<String> {
        HashMap::get(self, name).cloned()
    }
}

impl EnvSource for &[(&str, &str)] {
    fn get(&self, name: &str) -> Option<String> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}
