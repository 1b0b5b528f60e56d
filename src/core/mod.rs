// Public modules
pub mod error;
pub mod name;
pub mod plan;
pub mod slug;
pub mod validate;

// Internal modules - not part of public API
pub(crate) mod paths;

// Public for CLI access
pub mod config;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use name::{build_repo_name, NamingIntent};
pub use plan::{plan, ScaffoldPlan};
pub use slug::to_kebab;
pub use validate::{validate_repo_name, ValidationResult, BAD_VERSION_TOKENS};
