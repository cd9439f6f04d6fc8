pub mod errors;
pub mod id;

pub use errors::{ConfigError, SaathiError};
pub use id::{new_correlation_id, new_id, SessionId};

pub type Result<T> = std::result::Result<T, SaathiError>;
