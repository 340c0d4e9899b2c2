//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults (schema.rs)
//!     → optional TOML file (loader.rs)
//!     → .env + process environment (loader.rs)
//!     → validation.rs (range resets, URL checks)
//!     → KeepAliveConfig (immutable for the process lifetime)
//! ```
//!
//! # Design Decisions
//! - Every field has a default so an empty environment still runs
//! - A malformed individual value never aborts startup; it falls back
//! - Secrets are masked whenever the config is printed

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, LoadedConfig};
pub use schema::{KeepAliveConfig, LogFormat, SafeConfigView};
pub use validation::ValidationIssue;
