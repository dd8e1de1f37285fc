pub mod error;
pub mod resolve;
pub mod source;
pub mod spec;
pub mod value;

// Re-export main types
pub use error::EnvError;
pub use resolve::{env_or_default, env_or_option, env_required, resolve};
pub use source::{EnvSource, ProcessEnv};
pub use spec::Spec;
pub use value::Value;
