// Public modules
pub mod defaults;
pub mod error;
pub mod fix_imports;

// Re-export common types for convenience
pub use defaults::FixConfig;
pub use error::{Error, ErrorCode, Result};
